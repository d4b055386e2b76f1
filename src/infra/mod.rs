//! Infrastructure layer
//!
//! Handles external process execution. This module is the only place
//! where child processes are spawned.

pub mod process;
