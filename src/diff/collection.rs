use super::boundary_pattern;
use super::record::DiffRecord;
use crate::command::DiffCommand;
use crate::revision::Revision;
use crate::split::split_lines;
use crate::{CursorError, GitDiffsetError, Repository};

/// Ordered collection of per-file diff records between two revisions.
///
/// Record order is stable: it is the order the file boundary markers
/// appeared in the raw diff output. The collection stays editable after
/// population: records can be appended, overwritten, or removed at any
/// position.
///
/// Two iteration styles exist. [`iter`](Self::iter) hands out
/// independent iterators and is what new code should use. The
/// [`current`](Self::current)/[`advance`](Self::advance)/
/// [`valid`](Self::valid)/[`reset`](Self::reset) family drives a single
/// shared cursor; only one such traversal can be in flight per
/// collection.
#[derive(Debug)]
pub struct DiffCollection<'a> {
    repository: &'a Repository<'a>,
    records: Vec<DiffRecord>,
    position: usize,
}

impl<'a> DiffCollection<'a> {
    /// Bare constructor: wrap an explicit record sequence, or start
    /// empty. Never invokes git.
    pub fn new(repository: &'a Repository<'a>, records: Option<Vec<DiffRecord>>) -> Self {
        Self {
            repository,
            records: records.unwrap_or_default(),
            position: 0,
        }
    }

    /// Build a fully populated collection by running the diff pipeline.
    ///
    /// `commit1` defaults to the repository head. Without `commit2` the
    /// diff is taken against `commit1`'s parent, or against the empty
    /// tree when `commit1` is a root commit. With `commit2` the two
    /// commits are diffed directly, optionally scoped to `path`.
    ///
    /// Raw output with no boundary markers yields a valid empty
    /// collection; collaborator failures propagate unchanged.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use git_diffset::{DiffCollection, Repository};
    /// let repository = Repository::new(".");
    /// let diff = DiffCollection::create(
    ///     &repository,
    ///     Some("HEAD~1".into()),
    ///     Some("HEAD".into()),
    ///     None,
    /// )?;
    /// for record in &diff {
    ///     println!("{}", record.path());
    /// }
    /// # Ok::<(), git_diffset::GitDiffsetError>(())
    /// ```
    pub fn create(
        repository: &'a Repository<'a>,
        commit1: Option<Revision>,
        commit2: Option<Revision>,
        path: Option<&str>,
    ) -> Result<Self, GitDiffsetError> {
        let commit1 = match commit1 {
            Some(revision) => revision.resolve(repository)?,
            None => repository.head()?,
        };
        let commit2 = commit2
            .map(|revision| revision.resolve(repository))
            .transpose()?;

        let command = DiffCommand::select(commit1, commit2, path);
        let output = repository.execute(&command.args())?;

        Ok(Self::from_output(repository, &output))
    }

    /// Build a collection from already-fetched raw diff output lines.
    pub fn from_output<S: AsRef<str>>(repository: &'a Repository<'a>, lines: &[S]) -> Self {
        let records = split_lines(lines, boundary_pattern())
            .into_iter()
            .filter_map(DiffRecord::from_group)
            .collect();

        Self {
            repository,
            records,
            position: 0,
        }
    }

    /// The repository this collection was built against
    pub fn repository(&self) -> &Repository<'a> {
        self.repository
    }

    /// Record at `position`, or `None` when out of range
    pub fn get(&self, position: usize) -> Option<&DiffRecord> {
        self.records.get(position)
    }

    /// Whether `position` currently holds a record
    pub fn contains(&self, position: usize) -> bool {
        position < self.records.len()
    }

    /// Overwrite the record at `position`, or append when `position` is
    /// `None`.
    ///
    /// An explicit position past the end also appends: the sequence
    /// stays dense, positions are storage slots rather than stable ids.
    pub fn set(&mut self, position: Option<usize>, record: DiffRecord) {
        match position {
            Some(position) if position < self.records.len() => self.records[position] = record,
            _ => self.records.push(record),
        }
    }

    /// Remove and return the record at `position`.
    ///
    /// Removal compacts: later records shift down one slot rather than
    /// leaving a gap.
    pub fn remove(&mut self, position: usize) -> Option<DiffRecord> {
        if position < self.records.len() {
            Some(self.records.remove(position))
        } else {
            None
        }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The records as a slice, in encounter order
    pub fn records(&self) -> &[DiffRecord] {
        &self.records
    }

    /// Independent iterator over the records; does not touch the shared
    /// cursor.
    pub fn iter(&self) -> std::slice::Iter<'_, DiffRecord> {
        self.records.iter()
    }

    /// Record under the shared cursor.
    ///
    /// The one access that faults: reading through an exhausted or
    /// never-valid cursor is an iteration-contract misuse.
    pub fn current(&self) -> Result<&DiffRecord, CursorError> {
        self.records
            .get(self.position)
            .ok_or(CursorError::CursorOutOfRange {
                position: self.position,
                len: self.records.len(),
            })
    }

    /// Advance the shared cursor.
    ///
    /// Running past the end is legal; [`valid`](Self::valid) turns false
    /// rather than this call failing.
    pub fn advance(&mut self) {
        self.position += 1;
    }

    /// Current cursor value
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether the cursor references an existing record
    pub fn valid(&self) -> bool {
        self.position < self.records.len()
    }

    /// Rewind the shared cursor to the first record
    pub fn reset(&mut self) {
        self.position = 0;
    }
}

impl<'a, 'b> IntoIterator for &'b DiffCollection<'a> {
    type Item = &'b DiffRecord;
    type IntoIter = std::slice::Iter<'b, DiffRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
