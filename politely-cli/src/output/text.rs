//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use politely_core::PipelineRun;
use std::io::{self, Write};

/// Plain text formatter - outputs one styled sentence per line
pub struct TextFormatter<W: Write> {
    writer: W,
    explain: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            explain: false,
        }
    }

    /// Follow every sentence with the chosen level, its reason and the
    /// intermediate stages
    pub fn with_explanation(mut self, explain: bool) -> Self {
        self.explain = explain;
        self
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_run(&mut self, _line: usize, run: &PipelineRun) -> Result<()> {
        writeln!(self.writer, "{}", run.output())?;

        if self.explain {
            writeln!(
                self.writer,
                "  level: {} ({})",
                run.level().label(),
                run.level().value()
            )?;
            if !run.reason().is_empty() {
                writeln!(self.writer, "  reason: {}", run.reason())?;
            }
            for entry in run.history() {
                writeln!(self.writer, "  {:<11} {}", entry.stage.as_str(), entry.text)?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
