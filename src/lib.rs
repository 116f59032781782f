#![forbid(unsafe_code)]
#![deny(warnings, clippy::all, clippy::pedantic)]

mod types;
mod system;
mod git;
mod export;

pub use types::{ExportOptions, ExportOutcome, ExportRecord, ExportSummary};
pub use system::{Clock, DefaultClock, DefaultFsOps, FsOps};
pub use git::{DefaultGitRunner, GitLsFiles, GitRunner, TrackedFileLister, parse_ls_files};
pub use export::{
    ExportError, TranscriptWriter, classify_path, decode_text, header_timestamp, output_file_name,
    run_export,
};
