//! Console logging and timing helpers for Ember services.

pub mod logging;
pub mod timing;

pub use logging::{LogConfig, LoggingError, init_logging};
pub use timing::timed;
