//! Toast lifecycle.

pub mod queue;
