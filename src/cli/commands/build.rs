//! Build command implementation
//!
//! Implements `ecw build`: resolves the build root and invokes CMake's
//! build verb, selecting a target unless the "everything" sentinel was
//! given.

use std::path::Path;

use anyhow::Result;

use crate::core::{command, paths};
use crate::infra::process;

/// Execute the build command
pub fn execute(target: &str, build_dir: &Path) -> Result<()> {
    let build_dir = paths::resolve_dir("--build-dir", build_dir)?;

    tracing::debug!("Building target '{target}' in {}", build_dir.display());

    process::run(&command::build_command(&build_dir, target), false)
}
