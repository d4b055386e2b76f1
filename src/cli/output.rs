//! Output formatting
//!
//! The command echo happens in [`crate::infra::process`] since it is part
//! of the runner's contract; this module only formats error output.

/// Status message prefixes
pub mod status {
    /// Error prefix (red X)
    pub const ERROR: &str = "✗";
}

/// Display an error to the user on the error stream
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} Error: {error:#}", status::ERROR);
}
