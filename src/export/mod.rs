mod error;
mod read;
mod time;
mod transcript;

pub use error::ExportError;
pub use read::{classify_path, decode_text};
pub use time::{header_timestamp, output_file_name};
pub use transcript::TranscriptWriter;

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::git::TrackedFileLister;
use crate::system::{Clock, FsOps};
use crate::types::{ExportOptions, ExportOutcome, ExportRecord, ExportSummary};

/// List tracked files under `opts.root` and write them into a timestamped transcript in
/// `opts.output_dir`.
///
/// Per-file problems are recorded in the transcript and never abort the run. An empty listing
/// returns [`ExportOutcome::NoTrackedFiles`] without creating a file.
///
/// # Errors
/// Returns an error when the tracked file list cannot be obtained, when the transcript cannot be
/// created (an existing file is never overwritten), or when writing to it fails.
pub fn run_export(
    opts: &ExportOptions,
    lister: &dyn TrackedFileLister,
    fs: &dyn FsOps,
    clock: &dyn Clock,
) -> Result<ExportOutcome, ExportError> {
    let now = time::run_timestamp(clock);

    let paths = lister.list_tracked(&opts.root)?;
    if paths.is_empty() {
        return Ok(ExportOutcome::NoTrackedFiles);
    }

    let out_path = opts.output_dir.join(output_file_name(&now));
    let file = create_output(&out_path)?;
    let mut writer = TranscriptWriter::new(BufWriter::new(file));
    let mut summary = ExportSummary {
        path: out_path,
        ..ExportSummary::default()
    };

    let progress = ProgressBar::new(paths.len() as u64);
    let style =
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
    progress.set_style(style);
    progress.enable_steady_tick(Duration::from_millis(100));
    progress.set_message("exporting tracked files");

    let written = write_transcript(
        &mut writer,
        &header_timestamp(&now),
        &paths,
        |rel| {
            let record = classify_path(fs, &opts.root, rel);
            summary.tally(&record);
            progress.inc(1);
            record
        },
    );

    if let Err(source) = written {
        progress.abandon_with_message("export failed");
        return Err(ExportError::OutputWrite {
            path: summary.path,
            source,
        });
    }
    debug_assert_eq!(writer.exported(), summary.exported);

    // flush of the buffered tail
    if let Err(source) = writer.finish() {
        progress.abandon_with_message("export failed");
        return Err(ExportError::OutputWrite {
            path: summary.path,
            source,
        });
    }
    progress.finish_with_message("export complete");

    Ok(ExportOutcome::Written(summary))
}

fn write_transcript<W: Write>(
    writer: &mut TranscriptWriter<W>,
    generated_on: &str,
    paths: &[String],
    mut record_for: impl FnMut(&str) -> ExportRecord,
) -> io::Result<()> {
    writer.write_header(generated_on)?;
    for rel in paths {
        let record = record_for(rel);
        writer.write_record(rel, &record)?;
    }
    Ok(())
}

fn create_output(path: &Path) -> Result<File, ExportError> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| ExportError::OutputCreate {
            path: path.to_path_buf(),
            source,
        })
}
