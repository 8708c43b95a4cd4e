//! The attentive login icon: where the pupil looks, when it blinks and how the
//! blink cycle is scheduled. Everything except the browser timer host is
//! target-independent.

pub mod blink;
pub mod gaze;
pub mod scheduler;
pub mod state;

pub use blink::{BlinkTarget, BlinkTiming};
pub use gaze::PupilPosition;
pub use scheduler::{BlinkDriver, BlinkStep, TimerHost};
pub use state::{EyeState, Focus};
