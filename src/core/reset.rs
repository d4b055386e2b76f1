//! Reset logic
//!
//! Guarded removal of the build root for `configure --reset`. The guard
//! prevents accidental source tree removal when the directory roles are
//! swapped by mistake; it must run before anything is deleted or spawned.

use std::path::Path;

use crate::error::EcwError;

/// Remove the build root so configuration starts from scratch.
///
/// Fails with [`EcwError::UnsafeReset`] when the build root contains the
/// source root (or is the source root), in which case nothing is removed.
/// A build root that does not exist is fine; there is nothing to reset.
///
/// Both paths must be absolute; the check is purely lexical.
pub fn reset_build_root(source_dir: &Path, build_dir: &Path) -> Result<(), EcwError> {
    if source_dir.starts_with(build_dir) {
        return Err(EcwError::UnsafeReset {
            build_dir: build_dir.to_path_buf(),
            source_dir: source_dir.to_path_buf(),
        });
    }

    if build_dir.is_dir() {
        std::fs::remove_dir_all(build_dir).map_err(|e| EcwError::RemoveBuildRoot {
            path: build_dir.to_path_buf(),
            error: e.to_string(),
        })?;
        tracing::info!("Removed existing build root: {}", build_dir.display());
    }

    Ok(())
}
