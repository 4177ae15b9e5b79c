//! Validate command implementation

use anyhow::Result;
use clap::Args;
use politely_core::RuleTables;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Directory holding politeness.toml, honorifics.toml,
    /// abbreviations.toml and irregulars.toml
    #[arg(short, long, value_name = "DIR", required = true)]
    pub rules: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating rule tables: {}", self.rules.display());

        match RuleTables::from_dir(&self.rules) {
            Ok(tables) => {
                println!("✓ Rule tables are valid!");
                println!(
                    "  Politeness rules: {} ({} listeners, {} environments)",
                    tables.politeness().len(),
                    tables.listeners().len(),
                    tables.environments().len()
                );
                println!("  Honorific patterns: {}", tables.honorifics().len());
                println!("  Abbreviations: {}", tables.abbreviations().len());
                println!("  Irregular forms: {}", tables.irregulars().len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Rule tables are invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
