//! Configure command implementation
//!
//! Implements `ecw configure`: validates the directory arguments, applies
//! the reset policy, translates the options into a CMake invocation, and
//! runs it.

use std::path::PathBuf;

use anyhow::Result;

use crate::core::command::{self, BuildMode, ConfigureRequest};
use crate::core::{paths, reset};
use crate::infra::process;

/// Configure options
pub struct ConfigureOptions {
    /// Additional parameters to pass to CMake
    pub params: Vec<String>,
    /// Path to source root
    pub source_dir: PathBuf,
    /// Path to build root
    pub build_dir: PathBuf,
    /// Type of build to configure
    pub mode: Option<BuildMode>,
    /// Enable generation of 'compile_commands.json'
    pub export_cc: bool,
    /// Silence output from CMake during configuration
    pub quiet: bool,
    /// Re-create the build root if it already exists
    pub reset: bool,
}

/// Execute the configure command
pub fn execute(options: ConfigureOptions) -> Result<()> {
    let source_dir = paths::resolve_existing_dir("--source-dir", &options.source_dir)?;
    let build_dir = paths::resolve_dir("--build-dir", &options.build_dir)?;

    tracing::debug!(
        "Configuring {} into {}",
        source_dir.display(),
        build_dir.display()
    );

    // The safety check runs before anything is removed or spawned.
    if options.reset {
        reset::reset_build_root(&source_dir, &build_dir)?;
    }

    let request = ConfigureRequest {
        source_dir,
        build_dir,
        mode: options.mode,
        export_cc: options.export_cc,
        params: options.params,
    };

    process::run(&command::configure_command(&request), options.quiet)
}
