//! Infrastructure layer providing external service integrations.
//!
//! Settings files and log output live here; nothing in this layer
//! takes part in the split calculation itself.

pub mod config;
pub mod logging;

pub use config::*;
pub use logging::*;
