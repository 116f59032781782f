use std::path::Path;

use crate::system::FsOps;
use crate::types::ExportRecord;

/// UTF-8 check on raw bytes; `None` marks the file as binary.
#[must_use]
pub fn decode_text(bytes: Vec<u8>) -> Option<String> {
    String::from_utf8(bytes).ok()
}

/// Resolve `rel` against `root` and turn whatever happens into a record.
#[must_use]
pub fn classify_path(fs: &dyn FsOps, root: &Path, rel: &str) -> ExportRecord {
    let full = root.join(rel);
    if !fs.is_file(&full) {
        return ExportRecord::NotFound;
    }
    match fs.read(&full) {
        Ok(bytes) => {
            decode_text(bytes).map_or(ExportRecord::BinaryOrUndecodable, ExportRecord::Exported)
        }
        Err(err) => ExportRecord::ReadError(err.to_string()),
    }
}
