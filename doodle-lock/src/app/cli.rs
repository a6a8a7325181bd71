//! Command-Line Interface

use crate::app::config::Config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Doodle Lock - authenticate freehand doodles against a trained profile
#[derive(Parser, Debug)]
#[command(name = "doodle-lock")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run an enrollment session over gesture files, in order
    Enroll {
        /// Gesture JSON files
        #[arg(required = true)]
        gestures: Vec<PathBuf>,

        /// Directory to write the accepted training gestures to
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Train on gestures and check one attempt
    Verify {
        /// Training gesture JSON files
        #[arg(short, long, required = true, num_args = 1..)]
        training: Vec<PathBuf>,

        /// Attempt gesture JSON file
        attempt: PathBuf,
    },

    /// Print the feature vector of a gesture
    Features {
        /// Gesture JSON file
        gesture: PathBuf,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// View configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the config path in effect (honours --config)
    Path,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Config file this invocation reads and writes
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }
}
