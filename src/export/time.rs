use chrono::{DateTime, Local};

use crate::system::Clock;

pub(crate) const FILE_PREFIX: &str = "repo_contents_";

/// Read the clock once for a run.
pub(crate) fn run_timestamp(clock: &dyn Clock) -> DateTime<Local> {
    DateTime::<Local>::from(clock.now())
}

/// `repo_contents_<YYYYMMDD_HHMMSS>.txt`
#[must_use]
pub fn output_file_name(now: &DateTime<Local>) -> String {
    format!("{FILE_PREFIX}{}.txt", now.format("%Y%m%d_%H%M%S"))
}

#[must_use]
pub fn header_timestamp(now: &DateTime<Local>) -> String {
    now.format("%Y-%m-%d %H:%M:%S").to_string()
}
