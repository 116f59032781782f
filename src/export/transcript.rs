use std::io::{self, Write};

use crate::types::ExportRecord;

const TITLE: &str = "Exported Git Repository Contents";
const RULE: &str = "--------------------------------------------------------";
const FENCE: &str = "```";

/// Renders the transcript into any byte sink.
///
/// Content sections are numbered from 1 in the order they are written; skipped paths
/// do not consume an index.
pub struct TranscriptWriter<W: Write> {
    out: W,
    exported: u64,
}

impl<W: Write> TranscriptWriter<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out, exported: 0 }
    }

    /// # Errors
    /// Propagates write failures from the sink.
    pub fn write_header(&mut self, generated_on: &str) -> io::Result<()> {
        writeln!(self.out, "{TITLE} - Generated on {generated_on}")?;
        writeln!(self.out, "{RULE}")?;
        writeln!(self.out)
    }

    /// # Errors
    /// Propagates write failures from the sink.
    pub fn write_record(&mut self, path: &str, record: &ExportRecord) -> io::Result<()> {
        match record {
            ExportRecord::Exported(content) => {
                self.exported += 1;
                writeln!(self.out, "--- FILE {}: {path} ---", self.exported)?;
                writeln!(self.out, "{FENCE}")?;
                self.out.write_all(content.as_bytes())?;
                writeln!(self.out)?;
                writeln!(self.out, "{FENCE}")?;
            }
            ExportRecord::NotFound => {
                writeln!(self.out, "--- FILE NOT FOUND (SKIPPED): {path} ---")?;
            }
            ExportRecord::BinaryOrUndecodable => {
                writeln!(self.out, "--- BINARY FILE (SKIPPED): {path} ---")?;
            }
            ExportRecord::ReadError(message) => {
                writeln!(self.out, "--- ERROR READING FILE: {path} (Error: {message}) ---")?;
            }
        }
        writeln!(self.out)
    }

    #[must_use]
    pub fn exported(&self) -> u64 {
        self.exported
    }

    /// Flush and hand back the sink.
    ///
    /// # Errors
    /// Propagates the flush failure.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
