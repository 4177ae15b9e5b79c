//! List command implementation

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use politely_core::{PolitenessLevel, RuleTables};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(subcommand)]
    pub subcommand: ListCommands,

    /// Directory with custom rule tables
    #[arg(long, value_name = "DIR", global = true)]
    pub rules: Option<PathBuf>,
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List listener categories known to the politeness rules
    Listeners,

    /// List environments known to the politeness rules
    Environments,

    /// List politeness levels
    Levels,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        let stdout = io::stdout();
        self.write_to(&mut stdout.lock())
    }

    fn write_to(&self, out: &mut impl Write) -> Result<()> {
        match self.subcommand {
            ListCommands::Listeners => {
                for listener in self.tables()?.listeners() {
                    writeln!(out, "{listener}")?;
                }
            }
            ListCommands::Environments => {
                for environment in self.tables()?.environments() {
                    writeln!(out, "{environment}")?;
                }
            }
            ListCommands::Levels => {
                for level in PolitenessLevel::ALL {
                    writeln!(out, "{}  {}", level.value(), level.label())?;
                }
            }
        }
        Ok(())
    }

    fn tables(&self) -> Result<Arc<RuleTables>> {
        match &self.rules {
            Some(dir) => {
                let tables = RuleTables::from_dir(dir)
                    .with_context(|| format!("Failed to load rules from '{}'", dir.display()))?;
                Ok(Arc::new(tables))
            }
            None => Ok(RuleTables::embedded()?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(subcommand: ListCommands) -> String {
        let args = ListArgs {
            subcommand,
            rules: None,
        };
        let mut buffer = Vec::new();
        args.write_to(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_list_listeners() {
        assert_eq!(
            render(ListCommands::Listeners),
            "friend\nadult family\nboss at work\nstranger\n"
        );
    }

    #[test]
    fn test_list_environments() {
        assert_eq!(
            render(ListCommands::Environments),
            "comfortable & informal\nformal\n"
        );
    }

    #[test]
    fn test_list_levels() {
        let output = render(ListCommands::Levels);
        assert_eq!(output.lines().count(), 3);
        assert!(output.starts_with("1  casual style (-어)"));
    }
}
