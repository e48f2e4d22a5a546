use super::boundary_pattern;
use crate::split::LineGroup;

/// How a file changed, read off its segment header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// File did not exist before (`new file mode` header)
    Added,
    /// File no longer exists (`deleted file mode` header)
    Deleted,
    /// File moved (`similarity index` / `rename from` headers)
    Renamed,
    /// Content changed in place
    Modified,
}

/// The diff of a single file: one raw segment of `git diff` output.
///
/// The segment is held verbatim, boundary marker included; hunk-level
/// interpretation is left to consumers. Binary segments pass through
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRecord {
    /// Source path (left-hand side of the boundary marker)
    pub src_path: String,
    /// Destination path (right-hand side of the boundary marker)
    pub dst_path: String,
    /// Change classification from the segment header
    pub kind: ChangeKind,
    /// The raw segment lines, boundary marker included
    pub lines: Vec<String>,
}

impl DiffRecord {
    /// Parse one file's segment.
    ///
    /// The first line must be a boundary marker of the form
    /// `diff --git SRC/<path> DST/<path>`. Returns `None` when it is not.
    #[must_use]
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Option<Self> {
        let first = lines.first()?.as_ref();
        let caps = boundary_pattern().captures(first)?;
        let src_path = caps.get(1)?.as_str().to_string();
        let dst_path = caps.get(2)?.as_str().to_string();

        let lines: Vec<String> = lines.iter().map(|l| l.as_ref().to_string()).collect();
        Some(DiffRecord {
            src_path,
            dst_path,
            kind: classify(&lines),
            lines,
        })
    }

    /// Build a record from a split group, reusing the captured paths
    /// instead of re-matching the boundary line.
    #[must_use]
    pub fn from_group(group: LineGroup) -> Option<Self> {
        let LineGroup { captures, lines } = group;
        match <[String; 2]>::try_from(captures) {
            Ok([src_path, dst_path]) => Some(DiffRecord {
                src_path,
                dst_path,
                kind: classify(&lines),
                lines,
            }),
            Err(_) => Self::parse(&lines),
        }
    }

    /// The path this record is best known by: the destination path, or
    /// the source path for deletions.
    #[must_use]
    pub fn path(&self) -> &str {
        match self.kind {
            ChangeKind::Deleted => &self.src_path,
            _ => &self.dst_path,
        }
    }
}

/// Classify a change from the header lines preceding the first hunk.
fn classify(lines: &[String]) -> ChangeKind {
    for line in lines.iter().take_while(|l| !l.starts_with("@@ ")) {
        if line.starts_with("new file mode") {
            return ChangeKind::Added;
        }
        if line.starts_with("deleted file mode") {
            return ChangeKind::Deleted;
        }
        if line.starts_with("similarity index") || line.starts_with("rename from") {
            return ChangeKind::Renamed;
        }
    }
    ChangeKind::Modified
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn parse_extracts_both_paths() {
        let record = DiffRecord::parse(&["diff --git SRC/a.txt DST/b.txt", "+hello"]).unwrap();
        assert_eq!(record.src_path, "a.txt");
        assert_eq!(record.dst_path, "b.txt");
        assert_eq!(record.lines.len(), 2);
    }

    #[test]
    fn parse_keeps_the_segment_verbatim() {
        let lines = [
            "diff --git SRC/a.txt DST/a.txt",
            "index 1111..2222 100644",
            "--- SRC/a.txt",
            "+++ DST/a.txt",
            "@@ -1 +1 @@",
            "-old",
            "+new",
        ];
        let record = DiffRecord::parse(&lines).unwrap();
        assert_eq!(record.lines, lines.to_vec());
    }

    #[test]
    fn parse_rejects_non_boundary_first_line() {
        assert!(DiffRecord::parse(&["+hello", "diff --git SRC/a DST/a"]).is_none());
        assert!(DiffRecord::parse::<&str>(&[]).is_none());
    }

    #[test]
    fn parse_rejects_default_git_prefixes() {
        // Only the SRC/DST prefixes are part of the wire contract.
        assert!(DiffRecord::parse(&["diff --git a/x.txt b/x.txt"]).is_none());
    }

    #[test]
    fn paths_with_spaces_are_captured_greedily() {
        let record = DiffRecord::parse(&["diff --git SRC/my file.txt DST/my file.txt"]).unwrap();
        // Greedy SRC capture stops at the last " DST/" occurrence.
        assert_eq!(record.dst_path, "my file.txt");
    }

    #[test]
    fn new_file_segment_is_added() {
        let record = DiffRecord::parse(&[
            "diff --git SRC/a.txt DST/a.txt",
            "new file mode 100644",
            "index 0000..1111",
        ])
        .unwrap();
        assert_eq!(record.kind, ChangeKind::Added);
    }

    #[test]
    fn deleted_file_segment_is_deleted_and_keeps_source_path() {
        let record = DiffRecord::parse(&[
            "diff --git SRC/gone.txt DST/gone.txt",
            "deleted file mode 100644",
        ])
        .unwrap();
        assert_eq!(record.kind, ChangeKind::Deleted);
        assert_eq!(record.path(), "gone.txt");
    }

    #[test]
    fn renamed_segment_is_renamed() {
        let record = DiffRecord::parse(&[
            "diff --git SRC/old.txt DST/new.txt",
            "similarity index 95%",
            "rename from old.txt",
            "rename to new.txt",
        ])
        .unwrap();
        assert_eq!(record.kind, ChangeKind::Renamed);
        assert_eq!(record.path(), "new.txt");
    }

    #[test]
    fn plain_segment_is_modified() {
        let record = DiffRecord::parse(&[
            "diff --git SRC/a.txt DST/a.txt",
            "index 1111..2222 100644",
            "@@ -1 +1 @@",
            "+new file mode looks like a header but sits in a hunk",
        ])
        .unwrap();
        assert_eq!(record.kind, ChangeKind::Modified);
    }

    #[test]
    fn from_group_uses_forwarded_captures() {
        let group = LineGroup {
            captures: vec!["a.txt".to_string(), "b.txt".to_string()],
            lines: vec!["diff --git SRC/a.txt DST/b.txt".to_string()],
        };
        let record = DiffRecord::from_group(group).unwrap();
        assert_eq!(record.src_path, "a.txt");
        assert_eq!(record.dst_path, "b.txt");
    }

    #[test]
    fn from_group_falls_back_to_parsing_without_captures() {
        let group = LineGroup {
            captures: vec![],
            lines: vec!["diff --git SRC/a.txt DST/a.txt".to_string()],
        };
        let record = DiffRecord::from_group(group).unwrap();
        assert_eq!(record.src_path, "a.txt");
    }
}
