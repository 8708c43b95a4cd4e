//! Form logic kept out of the views: credential submissions and the login
//! icon's animation state. Routes import these modules so view code stays
//! focused on markup.

pub mod auth;
pub mod eye;
