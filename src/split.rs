//! Generic partitioning of line sequences on a boundary pattern.
//!
//! This module splits an ordered sequence of text lines into contiguous
//! groups, each group starting at a line matching a caller-supplied
//! boundary pattern. It knows nothing about git: the diff wire format
//! lives entirely in the pattern handed in by the caller.
//!
//! # Policy
//!
//! - Lines preceding the first boundary match are discarded. In the diff
//!   pipeline this matters for `git diff-tree`, which prefixes its patch
//!   with the commit id line.
//! - No boundary match means no groups; splitting never fails.
//! - Two adjacent boundary lines produce an empty-bodied group for the
//!   first, one group per boundary.
//!
//! # Examples
//!
//! ```
//! use git_diffset::split_lines;
//! use regex::Regex;
//!
//! let boundary = Regex::new(r"^--- (.*)$").unwrap();
//! let lines = ["ignored preamble", "--- first", "a", "b", "--- second"];
//! let groups = split_lines(&lines, &boundary);
//!
//! assert_eq!(groups.len(), 2);
//! assert_eq!(groups[0].captures, vec!["first".to_string()]);
//! assert_eq!(groups[0].lines, vec!["--- first", "a", "b"]);
//! assert_eq!(groups[1].lines, vec!["--- second"]);
//! ```

use regex::Regex;

/// One contiguous group of lines, beginning at a boundary match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineGroup {
    /// Values captured by the boundary pattern, in capture-group order
    pub captures: Vec<String>,
    /// The group's lines, boundary line included, in input order
    pub lines: Vec<String>,
}

/// Partition `lines` into groups keyed on `boundary` matches.
///
/// Each group starts at (and includes) a line matching `boundary` and
/// runs until the next match or the end of input. The pattern's capture
/// groups are recorded on the group so consumers need not re-match the
/// boundary line. Content before the first match is discarded.
pub fn split_lines<S: AsRef<str>>(lines: &[S], boundary: &Regex) -> Vec<LineGroup> {
    let mut groups: Vec<LineGroup> = Vec::new();

    for line in lines {
        let line = line.as_ref();
        if let Some(caps) = boundary.captures(line) {
            groups.push(LineGroup {
                captures: caps
                    .iter()
                    .skip(1)
                    .flatten()
                    .map(|m| m.as_str().to_string())
                    .collect(),
                lines: vec![line.to_string()],
            });
        } else if let Some(group) = groups.last_mut() {
            group.lines.push(line.to_string());
        }
    }

    groups
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use similar_asserts::assert_eq;

    fn marker() -> Regex {
        Regex::new(r"^=== (\w+) (\w+)$").unwrap()
    }

    #[test]
    fn empty_input_yields_no_groups() {
        let lines: [&str; 0] = [];
        assert_eq!(split_lines(&lines, &marker()), vec![]);
    }

    #[test]
    fn input_without_boundary_yields_no_groups() {
        let lines = ["plain", "text", "only"];
        assert_eq!(split_lines(&lines, &marker()), vec![]);
    }

    #[test]
    fn preamble_before_first_boundary_is_discarded() {
        let lines = ["preamble", "more preamble", "=== one two", "body"];
        let groups = split_lines(&lines, &marker());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].lines, vec!["=== one two", "body"]);
    }

    #[test]
    fn captures_are_forwarded_in_order() {
        let lines = ["=== src dst"];
        let groups = split_lines(&lines, &marker());
        assert_eq!(
            groups[0].captures,
            vec!["src".to_string(), "dst".to_string()]
        );
    }

    #[test]
    fn adjacent_boundaries_emit_empty_bodied_groups() {
        let lines = ["=== a b", "=== c d", "body"];
        let groups = split_lines(&lines, &marker());
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].lines, vec!["=== a b"]);
        assert_eq!(groups[1].lines, vec!["=== c d", "body"]);
    }

    #[test]
    fn group_lines_keep_input_order() {
        let lines = ["=== a b", "first", "second", "third"];
        let groups = split_lines(&lines, &marker());
        assert_eq!(groups[0].lines, vec!["=== a b", "first", "second", "third"]);
    }

    #[test]
    fn splits_on_the_git_boundary_marker() {
        let boundary = Regex::new(r"^diff --git SRC/(.*) DST/(.*)$").unwrap();
        let lines = [
            "diff --git SRC/a.txt DST/a.txt",
            "+hello",
            "diff --git SRC/b.txt DST/b.txt",
            "-bye",
        ];
        let groups = split_lines(&lines, &boundary);
        assert_eq!(groups.len(), 2);
        assert_eq!(
            groups[0].captures,
            vec!["a.txt".to_string(), "a.txt".to_string()]
        );
        assert_eq!(
            groups[1].lines,
            vec!["diff --git SRC/b.txt DST/b.txt", "-bye"]
        );
    }

    proptest! {
        #[test]
        fn one_group_per_boundary_in_order(
            bodies in prop::collection::vec(
                prop::collection::vec("[ -~]{0,40}", 0..5),
                0..8,
            )
        ) {
            let boundary = Regex::new(r"^=== segment (\d+)$").unwrap();
            let mut lines = Vec::new();
            for (i, body) in bodies.iter().enumerate() {
                lines.push(format!("=== segment {i}"));
                for content in body {
                    // Leading space keeps body lines off the anchored pattern
                    lines.push(format!(" {content}"));
                }
            }

            let groups = split_lines(&lines, &boundary);
            prop_assert_eq!(groups.len(), bodies.len());
            for (i, group) in groups.iter().enumerate() {
                prop_assert_eq!(&group.captures, &vec![i.to_string()]);
                prop_assert_eq!(group.lines.len(), bodies[i].len() + 1);
            }
        }
    }
}
