use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ExportOptions {
    // Relative tracked paths are resolved against this directory.
    pub root: PathBuf,
    // Directory the transcript is created in.
    pub output_dir: PathBuf,
}

impl ExportOptions {
    /// Options for a run rooted at the process working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    pub fn from_current_dir() -> std::io::Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self {
            root: cwd.clone(),
            output_dir: cwd,
        })
    }
}

/// Outcome of processing one tracked path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportRecord {
    Exported(String),
    NotFound,
    BinaryOrUndecodable,
    ReadError(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub exported: u64,
    pub not_found: u64,
    pub binary: u64,
    pub read_errors: u64,
}

impl ExportSummary {
    pub(crate) fn tally(&mut self, record: &ExportRecord) {
        match record {
            ExportRecord::Exported(_) => self.exported = self.exported.saturating_add(1),
            ExportRecord::NotFound => self.not_found = self.not_found.saturating_add(1),
            ExportRecord::BinaryOrUndecodable => self.binary = self.binary.saturating_add(1),
            ExportRecord::ReadError(_) => self.read_errors = self.read_errors.saturating_add(1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written(ExportSummary),
    // Listing succeeded but contained no paths; nothing was written.
    NoTrackedFiles,
}
