//! Application layer managing form state and user workflows.
//!
//! This module sits between the domain layer and the presentation layer:
//! it owns the text of each field and the tip selection, and reruns the
//! calculation whenever one of them changes.

pub mod oneshot;
pub mod state;

pub use oneshot::*;
pub use state::*;
