//! Publishing a finalized slot into version control.
//!
//! The version-control collaborator is a trait so the orchestration in
//! `commands::add` can run against a fake in tests. The production
//! implementation shells out to git with inherited console output, rooted at
//! the storage root; authentication and remote configuration are entirely
//! external.
//!
//! Fail-fast, no compensation: a non-zero exit aborts the run and leaves the
//! slot (and any partial commit) in place for manual remediation.

use crate::error::{PicstashError, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Which of the three publish steps failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishStep {
    Stage,
    Commit,
    Push,
}

impl fmt::Display for PublishStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PublishStep::Stage => "add",
            PublishStep::Commit => "commit",
            PublishStep::Push => "push",
        };
        f.write_str(name)
    }
}

/// The version-control collaborator: stage a path, commit with a message,
/// push to the configured remote.
pub trait Publisher {
    fn stage(&self, path: &Path) -> Result<()>;
    fn commit(&self, message: &str) -> Result<()>;
    fn push(&self) -> Result<()>;
}

/// Publishes by running `git` as a blocking child process in the storage
/// root, with console output inherited so git's own progress is visible.
pub struct GitPublisher {
    repo_root: PathBuf,
}

impl GitPublisher {
    pub fn new(repo_root: PathBuf) -> Self {
        Self { repo_root }
    }

    fn run(&self, step: PublishStep, args: &[&std::ffi::OsStr]) -> Result<()> {
        let status = Command::new("git")
            .args(args)
            .current_dir(&self.repo_root)
            .status()
            .map_err(|e| PicstashError::Publish {
                step,
                message: format!("could not launch git: {}", e),
            })?;

        if !status.success() {
            return Err(PicstashError::Publish {
                step,
                message: format!("exited with {}", status),
            });
        }
        Ok(())
    }
}

impl Publisher for GitPublisher {
    fn stage(&self, path: &Path) -> Result<()> {
        self.run(PublishStep::Stage, &["add".as_ref(), path.as_os_str()])
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.run(
            PublishStep::Commit,
            &["commit".as_ref(), "-m".as_ref(), message.as_ref()],
        )
    }

    fn push(&self) -> Result<()> {
        self.run(PublishStep::Push, &["push".as_ref()])
    }
}
