//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod build;
pub mod configure;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

use crate::core::command::{BuildMode, DEFAULT_TARGET};

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Configure a CMake project
    #[command(alias = "config")]
    Configure {
        /// Additional parameters to pass to CMake
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        params: Vec<String>,

        /// Path to source root
        #[arg(short = 'S', long, default_value = ".", value_name = "PATH")]
        source_dir: PathBuf,

        /// Path to build root
        #[arg(short = 'B', long, default_value = "build", value_name = "PATH")]
        build_dir: PathBuf,

        /// Type of build to configure
        #[arg(short = 'M', long, value_enum)]
        mode: Option<BuildMode>,

        /// Enable generation of 'compile_commands.json'
        #[arg(short = 'E', long)]
        export_cc: bool,

        /// Silence output from CMake during configuration
        #[arg(short = 'q', long)]
        quiet: bool,

        /// Re-create the build root if it already exists
        #[arg(short = 'R', long)]
        reset: bool,
    },

    /// Build a configured CMake project
    Build {
        /// Name of the target to build
        #[arg(default_value = DEFAULT_TARGET)]
        target: String,

        /// Path to build root
        #[arg(short = 'B', long, default_value = "build", value_name = "PATH")]
        build_dir: PathBuf,
    },
}

impl Commands {
    /// Execute the command
    pub fn run(self) -> Result<()> {
        match self {
            Self::Configure {
                params,
                source_dir,
                build_dir,
                mode,
                export_cc,
                quiet,
                reset,
            } => {
                let options = configure::ConfigureOptions {
                    params,
                    source_dir,
                    build_dir,
                    mode,
                    export_cc,
                    quiet,
                    reset,
                };
                configure::execute(options)
            }
            Self::Build { target, build_dir } => build::execute(&target, &build_dir),
        }
    }
}
