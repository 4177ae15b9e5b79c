//! Style command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::{JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use anyhow::{Context, Result};
use clap::Args;
use politely_core::{PipelineRun, Pretagged, PunctuationPolicy, Styler, StylerError};
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Arguments for the style command
#[derive(Debug, Args)]
pub struct StyleArgs {
    /// Who the sentence is addressed to
    #[arg(short, long, value_name = "LISTENER")]
    pub listener: String,

    /// Social setting of the conversation
    #[arg(short, long, value_name = "ENVIRONMENT")]
    pub environment: String,

    /// Pre-tagged sentence to style
    #[arg(
        short,
        long,
        value_name = "SENTENCE",
        conflicts_with = "input",
        required_unless_present = "input"
    )]
    pub text: Option<String>,

    /// File with one pre-tagged sentence per line
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Directory with custom rule tables
    #[arg(long, value_name = "DIR")]
    pub rules: Option<PathBuf>,

    /// Drop the period added to sentences that had no final punctuation
    #[arg(long)]
    pub restore_punctuation: bool,

    /// Print the chosen level, its reason and every stage (text output)
    #[arg(long)]
    pub explain: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "POLITELY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Outcome of styling one input line
type LineResult<'a> = (usize, &'a str, Result<PipelineRun, StylerError>);

impl StyleArgs {
    /// Execute the style command
    pub fn execute(&self) -> Result<()> {
        crate::init_logging(self.verbose);

        log::info!("Starting styling");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let styler = self.build_styler(&config)?;

        let source = self.read_source()?;
        let lines: Vec<(usize, &str)> = source
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .collect();
        if lines.is_empty() {
            return Err(CliError::EmptyInput.into());
        }

        log::info!("Styling {} sentences", lines.len());
        let results: Vec<LineResult<'_>> = lines
            .par_iter()
            .map(|&(number, line)| {
                (number, line, styler.process(line, &self.listener, &self.environment))
            })
            .collect();

        let format = self.format.unwrap_or(config.output.format);
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => {
                Box::new(TextFormatter::stdout().with_explanation(self.explain))
            }
            OutputFormat::Json => Box::new(JsonFormatter::new(
                io::stdout(),
                config.output.pretty_json,
            )),
        };

        let failed = write_results(&results, formatter.as_mut())?;
        log::info!("Styled {} of {} sentences", results.len() - failed, results.len());

        if failed > 0 {
            return Err(CliError::StylingFailed {
                failed,
                total: results.len(),
            }
            .into());
        }
        Ok(())
    }

    fn build_styler(&self, config: &CliConfig) -> Result<Styler> {
        let punctuation = if self.restore_punctuation {
            PunctuationPolicy::RestoreOriginal
        } else {
            config.styling.punctuation
        };

        let mut builder = Styler::builder()
            .analyzer(Pretagged)
            .punctuation(punctuation);
        if let Some(dir) = self.rules.as_deref().or(config.styling.rules_dir.as_deref()) {
            log::info!("Using rule tables from {}", dir.display());
            builder = builder.rules_dir(dir);
        }

        let styler = builder.build().context("Failed to set up the styler")?;
        Ok(styler)
    }

    fn read_source(&self) -> Result<String> {
        match (&self.text, &self.input) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => read_input(path),
            (None, None) => Err(CliError::EmptyInput.into()),
        }
    }
}

fn read_input(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()).into());
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read '{}'", path.display()))
}

/// Write successful runs in input order and report failures on stderr.
///
/// Returns the number of failed lines.
fn write_results(
    results: &[LineResult<'_>],
    formatter: &mut dyn OutputFormatter,
) -> Result<usize> {
    let mut failed = 0;
    for (number, line, result) in results {
        match result {
            Ok(run) => formatter.format_run(*number, run)?,
            Err(e) => {
                failed += 1;
                log::warn!("Line {number} ({line}) could not be styled: {e}");
                eprintln!("line {number}: {e}");
            }
        }
    }
    formatter.finish()?;
    Ok(failed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style_args(text: &str) -> StyleArgs {
        StyleArgs {
            listener: "boss at work".to_string(),
            environment: "formal".to_string(),
            text: Some(text.to_string()),
            input: None,
            format: None,
            rules: None,
            restore_punctuation: false,
            explain: false,
            config: None,
            verbose: 0,
        }
    }

    #[test]
    fn test_write_results_counts_failures() {
        let styler = Styler::new(Pretagged).unwrap();
        let lines = ["먹/VV+어/EF", "밥/NNG", "가/VV+아/EF"];
        let results: Vec<LineResult<'_>> = lines
            .iter()
            .enumerate()
            .map(|(index, line)| (index + 1, *line, styler.process(line, "friend", "formal")))
            .collect();

        let mut buffer = Vec::new();
        let mut formatter = TextFormatter::new(&mut buffer);
        let failed = write_results(&results, &mut formatter).unwrap();

        assert_eq!(failed, 1);
        assert_eq!(String::from_utf8(buffer).unwrap(), "먹어요.\n가요.\n");
    }

    #[test]
    fn test_flag_overrides_config_punctuation() {
        let mut args = style_args("먹/VV+어/EF");
        args.restore_punctuation = true;

        let styler = args.build_styler(&CliConfig::default()).unwrap();
        assert_eq!(
            styler.config().punctuation,
            PunctuationPolicy::RestoreOriginal
        );
    }

    #[test]
    fn test_missing_rules_dir() {
        let mut args = style_args("먹/VV+어/EF");
        args.rules = Some(PathBuf::from("no-such-rules"));
        assert!(args.build_styler(&CliConfig::default()).is_err());
    }

    #[test]
    fn test_text_is_the_source() {
        let args = style_args("먹/VV+어/EF");
        assert_eq!(args.read_source().unwrap(), "먹/VV+어/EF");
    }
}
