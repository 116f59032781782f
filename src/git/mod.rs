mod ls_files;
mod runner;

pub use ls_files::{GitLsFiles, TrackedFileLister, parse_ls_files};
pub use runner::{DefaultGitRunner, GitRunner};
