//! ecw - Use CMake more efficiently
//!
//! This library backs the `ecw` command-line tool, a thin wrapper that
//! translates simplified flags into `cmake` invocations.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Command translation and the reset safety policy
//! - [`infra`] - Infrastructure layer (process execution)
//! - [`error`] - Error types and exit-code mapping

pub mod cli;
pub mod core;
pub mod error;
pub mod infra;
