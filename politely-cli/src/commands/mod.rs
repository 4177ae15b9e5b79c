//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod list;
pub mod style;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Restyle pre-tagged sentences for a listener and environment
    Style(style::StyleArgs),

    /// List available components
    List(list::ListArgs),

    /// Validate a directory of rule tables
    Validate(validate::ValidateArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Style(args) => args.execute(),
            Commands::List(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}
