use std::io::ErrorKind;
use std::path::Path;

use crate::export::ExportError;

use super::runner::{GIT_PROGRAM, GitRunner};

/// Source of the tracked path list for a working tree.
pub trait TrackedFileLister {
    /// List tracked paths relative to `root`, in the order the tool reports them.
    ///
    /// # Errors
    /// Returns [`ExportError::VcsUnavailable`] when the client cannot be found and
    /// [`ExportError::VcsCommandFailed`] when it exits unsuccessfully.
    fn list_tracked(&self, root: &Path) -> Result<Vec<String>, ExportError>;
}

/// Lists tracked files with `git ls-files`.
pub struct GitLsFiles<'a> {
    git: &'a dyn GitRunner,
}

impl<'a> GitLsFiles<'a> {
    #[must_use]
    pub fn new(git: &'a dyn GitRunner) -> Self {
        Self { git }
    }
}

impl TrackedFileLister for GitLsFiles<'_> {
    fn list_tracked(&self, root: &Path) -> Result<Vec<String>, ExportError> {
        let out = self.git.run_git(root, &["ls-files", "-z"]).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                ExportError::VcsUnavailable {
                    program: GIT_PROGRAM.to_string(),
                }
            } else {
                ExportError::VcsLaunch {
                    program: GIT_PROGRAM.to_string(),
                    source,
                }
            }
        })?;
        if !out.status.success() {
            return Err(ExportError::VcsCommandFailed {
                program: GIT_PROGRAM.to_string(),
                status: out.status,
                stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
            });
        }
        Ok(parse_ls_files(&String::from_utf8_lossy(&out.stdout)))
    }
}

/// Split `ls-files -z` output into paths, dropping empty entries.
///
/// With `-z` git neither quotes nor escapes names, so entries are the literal paths.
#[must_use]
pub fn parse_ls_files(stdout: &str) -> Vec<String> {
    stdout
        .split('\0')
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
