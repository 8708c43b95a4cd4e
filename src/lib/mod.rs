//! Shared frontend utilities: configuration, errors, logging, theme classes and
//! build metadata. Configuration values are public; do not store secrets here.

pub mod build_info;
pub mod config;
pub mod errors;
pub mod telemetry;
pub mod theme;

pub use config::AppConfig;
pub use errors::AppError;
