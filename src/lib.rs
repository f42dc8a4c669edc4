//! trifle: demonstration CLI with three commands (greet, add, repeat).
//!
//! The library exposes the pure command operations so they can be tested
//! without spawning the binary; `main.rs` does argument parsing, logging
//! setup, and dispatch.

pub mod cli;
pub mod errors;
pub mod exitcode;
pub mod ops;
