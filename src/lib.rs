//! tipsplit - Tip Calculator Library
//!
//! Splits a bill and its tip evenly across a party, recomputing the
//! per-person amounts on every input change.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
