use error_set::error_set;
use std::ffi::OsStr;
use std::process::Command;

mod command;
mod diff;
mod revision;
mod split;

pub use command::DiffCommand;
pub use diff::{ChangeKind, DiffCollection, DiffRecord};
pub use revision::{Commit, Revision};
pub use split::{LineGroup, split_lines};

error_set! {
    /// Top-level error for building a diff collection
    GitDiffsetError := {
        #[display("Revision '{rev}' does not resolve to a commit")]
        UnknownRevision { rev: String },
    } || GitCommandError

    /// Errors from git command execution
    GitCommandError := {
        #[display("Failed to run git: {message}")]
        SpawnFailed { message: String },
        #[display("git {command} failed: {stderr}")]
        ExitError { command: String, stderr: String },
        #[display("Invalid UTF-8 in git output: {message}")]
        InvalidUtf8 { message: String },
    }

    /// Errors from resolving a revision identifier
    ResolveError := {
        #[display("Revision '{rev}' does not resolve to a commit")]
        UnknownRevision { rev: String },
    } || GitCommandError

    /// Errors from the collection's sequential cursor
    CursorError := {
        #[display("Cursor at {position} is out of range for {len} records")]
        CursorOutOfRange { position: usize, len: usize },
    }
}

/// Handle to a git working tree.
///
/// Owns nothing but the path; every operation shells out to the `git`
/// binary and blocks until it finishes. Failures from those invocations
/// propagate to the caller untouched.
#[derive(Debug)]
pub struct Repository<'a> {
    path: &'a str,
}

impl<'a> Repository<'a> {
    /// Create a new handle for the repository at the given path
    pub fn new(path: &'a str) -> Self {
        Self { path }
    }

    /// Path this handle was created with
    pub fn path(&self) -> &str {
        self.path
    }

    /// Resolve the current head revision
    pub fn head(&self) -> Result<Commit, ResolveError> {
        self.commit("HEAD")
    }

    /// Resolve a revision identifier (branch, tag, sha, `HEAD~n`, ...)
    /// into a [`Commit`] carrying its parent shas.
    ///
    /// Only failures git attributes to the name itself become
    /// [`ResolveError::UnknownRevision`]; anything else (e.g. the path
    /// not being a repository) surfaces as the execution failure it is.
    pub fn commit(&self, rev: &str) -> Result<Commit, ResolveError> {
        let lines = match self.execute(&["rev-list", "--max-count=1", "--parents", rev]) {
            Ok(lines) => lines,
            Err(GitCommandError::ExitError { stderr, .. })
                if stderr.contains("unknown revision") || stderr.contains("bad revision") =>
            {
                return Err(ResolveError::UnknownRevision {
                    rev: rev.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let first = lines.first().ok_or_else(|| ResolveError::UnknownRevision {
            rev: rev.to_string(),
        })?;
        let mut shas = first.split_whitespace().map(str::to_string);
        let sha = shas.next().ok_or_else(|| ResolveError::UnknownRevision {
            rev: rev.to_string(),
        })?;

        Ok(Commit::new(sha, shas.collect()))
    }

    /// Run a git command in this repository and return its output lines
    /// with trailing newlines removed.
    pub fn execute<S: AsRef<OsStr>>(&self, args: &[S]) -> Result<Vec<String>, GitCommandError> {
        let output = Command::new("git")
            .arg("-C")
            .arg(self.path)
            .args(args)
            .output()
            .map_err(|e| GitCommandError::SpawnFailed {
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let command = args
                .first()
                .map(|a| a.as_ref().to_string_lossy().into_owned())
                .unwrap_or_default();
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitCommandError::ExitError {
                command,
                stderr: stderr.into_owned(),
            });
        }

        let stdout =
            String::from_utf8(output.stdout).map_err(|e| GitCommandError::InvalidUtf8 {
                message: e.to_string(),
            })?;

        Ok(stdout.lines().map(str::to_string).collect())
    }
}
