//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use politely_core::PipelineRun;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs runs as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    records: Vec<serde_json::Value>,
}

/// One styled input line
#[derive(Debug, Serialize)]
struct RunRecord<'a> {
    /// 1-based line number in the input
    line: usize,
    #[serde(flatten)]
    run: &'a PipelineRun,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            records: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_run(&mut self, line: usize, run: &PipelineRun) -> Result<()> {
        self.records
            .push(serde_json::to_value(RunRecord { line, run })?);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
