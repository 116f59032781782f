use std::path::PathBuf;
use std::process::ExitStatus;

#[derive(Debug)]
pub enum ExportError {
    VcsUnavailable {
        program: String,
    },
    VcsLaunch {
        program: String,
        source: std::io::Error,
    },
    VcsCommandFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
    OutputCreate {
        path: PathBuf,
        source: std::io::Error,
    },
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VcsUnavailable { program } => {
                write!(f, "'{program}' executable not found; is it installed and on PATH?")
            }
            Self::VcsLaunch { program, source } => {
                write!(f, "failed to launch '{program}': {source}")
            }
            Self::VcsCommandFailed {
                program,
                status,
                stderr,
            } => {
                if stderr.is_empty() {
                    write!(f, "'{program} ls-files' failed with status {status}")
                } else {
                    write!(f, "'{program} ls-files' failed with status {status}: {stderr}")
                }
            }
            Self::OutputCreate { path, source } => {
                write!(f, "failed to create output file {}: {source}", path.display())
            }
            Self::OutputWrite { path, source } => {
                write!(f, "failed to write output file {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::VcsLaunch { source, .. }
            | Self::OutputCreate { source, .. }
            | Self::OutputWrite { source, .. } => Some(source),
            Self::VcsUnavailable { .. } | Self::VcsCommandFailed { .. } => None,
        }
    }
}
