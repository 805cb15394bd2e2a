//! Library half of the `appdirs` binary: argument parsing and handlers, kept
//! out of `main.rs` so they can be tested against an injected environment.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs binary
use tracing_subscriber as _;

pub mod handlers;
pub mod parser;

pub use parser::Cli;
