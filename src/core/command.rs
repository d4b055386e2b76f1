//! Command translation logic
//!
//! This module turns typed options into the exact argument vectors handed
//! to CMake. The flag tokens (`-S`, `-B`, `--build`, `-t`,
//! `-DCMAKE_BUILD_TYPE=...`, `-DCMAKE_EXPORT_COMPILE_COMMANDS=1`) are
//! dictated by CMake and must not change.

use std::path::{Path, PathBuf};

use clap::ValueEnum;

/// Program invoked by every translated command
pub const CMAKE_PROGRAM: &str = "cmake";

/// Target name meaning "build everything"; omits target selection
pub const DEFAULT_TARGET: &str = "all";

/// Types of CMake build modes
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    /// Unoptimized build with debug information
    #[value(name = "d")]
    Debug,
    /// Optimized build
    #[value(name = "r")]
    Release,
    /// Optimized build with debug information
    #[value(name = "w")]
    ReleaseWithDebug,
    /// Build optimized for binary size
    #[value(name = "s")]
    MinSizeRelease,
}

impl BuildMode {
    /// Get the `CMAKE_BUILD_TYPE` value for this mode
    pub fn build_type(self) -> &'static str {
        match self {
            BuildMode::Debug => "Debug",
            BuildMode::Release => "Release",
            BuildMode::ReleaseWithDebug => "RelWithDebInfo",
            BuildMode::MinSizeRelease => "MinSizeRel",
        }
    }
}

/// Inputs for translating a configure invocation
///
/// Paths are expected to be resolved to absolute form already (see
/// [`crate::core::paths`]).
#[derive(Debug, Clone)]
pub struct ConfigureRequest {
    /// Path to the source root
    pub source_dir: PathBuf,
    /// Path to the build root
    pub build_dir: PathBuf,
    /// Type of build to configure, if any
    pub mode: Option<BuildMode>,
    /// Enable generation of `compile_commands.json`
    pub export_cc: bool,
    /// Additional parameters forwarded to CMake verbatim
    pub params: Vec<String>,
}

/// Translate a configure request into a CMake argument vector.
///
/// Passthrough parameters are appended last, unmodified and in their
/// given order.
pub fn configure_command(request: &ConfigureRequest) -> Vec<String> {
    let mut command = vec![
        CMAKE_PROGRAM.to_string(),
        "-S".to_string(),
        request.source_dir.display().to_string(),
        "-B".to_string(),
        request.build_dir.display().to_string(),
    ];

    if let Some(mode) = request.mode {
        command.push(format!("-DCMAKE_BUILD_TYPE={}", mode.build_type()));
    }
    if request.export_cc {
        command.push("-DCMAKE_EXPORT_COMPILE_COMMANDS=1".to_string());
    }
    command.extend(request.params.iter().cloned());

    command
}

/// Translate a build invocation into a CMake argument vector.
///
/// The target-selection tokens are emitted only when `target` differs
/// from [`DEFAULT_TARGET`].
pub fn build_command(build_dir: &Path, target: &str) -> Vec<String> {
    let mut command = vec![
        CMAKE_PROGRAM.to_string(),
        "--build".to_string(),
        build_dir.display().to_string(),
    ];

    if target != DEFAULT_TARGET {
        command.push("-t".to_string());
        command.push(target.to_string());
    }

    command
}
