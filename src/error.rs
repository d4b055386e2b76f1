//! Error types for ecw
//!
//! Domain-specific error types using thiserror, plus the mapping from
//! errors to process exit codes.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while validating inputs, resetting the build root, or
/// running CMake
#[derive(Error, Debug)]
pub enum EcwError {
    /// Directory argument points at a path that does not exist
    #[error("Invalid value for '{argument}': directory '{path}' does not exist")]
    PathNotFound { argument: &'static str, path: PathBuf },

    /// Directory argument points at a non-directory
    #[error("Invalid value for '{argument}': '{path}' is not a directory")]
    NotADirectory { argument: &'static str, path: PathBuf },

    /// Reset requested but the build root contains the source root
    #[error("Build root '{build_dir}' contains source root '{source_dir}'; cannot remove")]
    UnsafeReset {
        build_dir: PathBuf,
        source_dir: PathBuf,
    },

    /// Failed to remove the build root during reset
    #[error("Failed to remove build root '{path}': {error}")]
    RemoveBuildRoot { path: PathBuf, error: String },

    /// Program not found in PATH
    #[error("'{program}' not found in PATH")]
    ToolNotFound { program: String },

    /// Failed to spawn the child process
    #[error("Failed to execute '{program}': {error}")]
    SpawnFailed { program: String, error: String },

    /// Child process exited with a non-zero status
    #[error("'{program}' exited with status {code}")]
    ToolFailed { program: String, code: i32 },

    /// Child process was terminated by a signal
    #[error("'{program}' was terminated by a signal")]
    ToolTerminated { program: String },
}

/// Map an error to the invocation's exit code.
///
/// A child's own non-zero status is propagated verbatim; every other
/// failure exits 1.
pub fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<EcwError>() {
        Some(EcwError::ToolFailed { code, .. }) => *code,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_failure_code_propagates() {
        let error = anyhow::Error::new(EcwError::ToolFailed {
            program: "cmake".to_string(),
            code: 2,
        });
        assert_eq!(exit_code(&error), 2);
    }

    #[test]
    fn test_other_errors_exit_one() {
        let error = anyhow::Error::new(EcwError::UnsafeReset {
            build_dir: PathBuf::from("/repo"),
            source_dir: PathBuf::from("/repo/src"),
        });
        assert_eq!(exit_code(&error), 1);

        let error = anyhow::anyhow!("something else");
        assert_eq!(exit_code(&error), 1);
    }
}
