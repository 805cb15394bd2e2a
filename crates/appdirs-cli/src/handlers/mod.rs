//! Command handlers.

pub mod paths;
