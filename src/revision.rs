use crate::{Repository, ResolveError};

/// A resolved commit: its sha and the shas of its parents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    sha: String,
    parents: Vec<String>,
}

impl Commit {
    /// Build a commit from a sha and its parent shas
    pub fn new(sha: impl Into<String>, parents: Vec<String>) -> Self {
        Self {
            sha: sha.into(),
            parents,
        }
    }

    /// The commit sha
    pub fn sha(&self) -> &str {
        &self.sha
    }

    /// Parent shas, in recorded order
    pub fn parents(&self) -> &[String] {
        &self.parents
    }

    /// Whether this is a root commit (no parents)
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}

/// A revision given either as a raw identifier or an already resolved
/// commit.
///
/// Callers can hand over branch names, tags, or shas without resolving
/// them first; resolution happens exactly once, at the boundary of the
/// populate operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    /// An unresolved identifier, e.g. `"main"` or `"HEAD~2"`
    Id(String),
    /// A commit that has already been resolved
    Resolved(Commit),
}

impl Revision {
    /// Resolve into a concrete commit, consulting the repository only
    /// when this is a raw identifier.
    pub fn resolve(self, repository: &Repository<'_>) -> Result<Commit, ResolveError> {
        match self {
            Revision::Id(rev) => repository.commit(&rev),
            Revision::Resolved(commit) => Ok(commit),
        }
    }
}

impl From<&str> for Revision {
    fn from(rev: &str) -> Self {
        Revision::Id(rev.to_string())
    }
}

impl From<String> for Revision {
    fn from(rev: String) -> Self {
        Revision::Id(rev)
    }
}

impl From<Commit> for Revision {
    fn from(commit: Commit) -> Self {
        Revision::Resolved(commit)
    }
}
