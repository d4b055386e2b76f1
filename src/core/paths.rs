//! Directory argument resolution
//!
//! This module validates directory arguments and resolves them to
//! absolute paths before any command is built, so the translated
//! invocations and the reset safety check always operate on full paths.

use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::EcwError;

/// Resolve a directory argument that must already exist.
///
/// Used for the source root: the path must exist, be a directory, and is
/// canonicalized. `argument` names the CLI flag for error messages.
pub fn resolve_existing_dir(argument: &'static str, path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(EcwError::PathNotFound {
            argument,
            path: path.to_path_buf(),
        }
        .into());
    }
    if !path.is_dir() {
        return Err(EcwError::NotADirectory {
            argument,
            path: path.to_path_buf(),
        }
        .into());
    }

    path.canonicalize()
        .with_context(|| format!("Failed to resolve '{}' for '{argument}'", path.display()))
}

/// Resolve a directory argument that may not exist yet.
///
/// Used for the build root: an existing path must be a directory and is
/// canonicalized; an absent one is resolved lexically against the current
/// working directory since CMake will create it.
pub fn resolve_dir(argument: &'static str, path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return resolve_existing_dir(argument, path);
    }

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    Ok(normalize(&absolute))
}

/// Lexically remove `.` and `..` components from an absolute path.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}
