//! Core logic module
//!
//! This module contains the command translation and safety logic for ecw.
//! Process execution belongs in [`crate::infra`].
//!
//! # Submodules
//!
//! - [`command`] - Translation of typed options into CMake argument vectors
//! - [`paths`] - Resolution and validation of directory arguments
//! - [`reset`] - Guarded removal of the build root

pub mod command;
pub mod paths;
pub mod reset;
