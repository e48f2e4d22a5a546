use crate::revision::Commit;

/// Flags shared by every diff invocation. The prefix overrides pin the
/// file boundary header to `diff --git SRC/<path> DST/<path>`, which is
/// the only header shape the record parser recognizes.
const COMMON_FLAGS: [&str; 5] = [
    "--full-index",
    "--no-color",
    "-M",
    "--src-prefix=SRC/",
    "--dst-prefix=DST/",
];

/// One of the three shapes a diff invocation can take.
///
/// The shapes are mutually exclusive: a commit without a second commit
/// diffs against its parent, unless it has none, in which case it diffs
/// against the empty tree. Two commits diff against each other, with an
/// optional path filter; the first commit's parents are irrelevant then.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffCommand {
    /// Diff of a root commit against the empty tree
    Root { commit: Commit },
    /// Diff of a commit against its parent
    Parent { commit: Commit },
    /// Diff between two commits, optionally scoped to a path
    Between {
        from: Commit,
        to: Commit,
        path: Option<String>,
    },
}

impl DiffCommand {
    /// Pick the command shape for the given commits.
    ///
    /// The path filter only applies to the two-commit form, matching
    /// what `git diff` itself supports for the other shapes.
    pub fn select(commit1: Commit, commit2: Option<Commit>, path: Option<&str>) -> Self {
        match commit2 {
            None if commit1.is_root() => DiffCommand::Root { commit: commit1 },
            None => DiffCommand::Parent { commit: commit1 },
            Some(to) => DiffCommand::Between {
                from: commit1,
                to,
                path: path.map(str::to_string),
            },
        }
    }

    /// Render the git argv for this command.
    ///
    /// The root form uses `diff-tree --root`, whose output leads with
    /// the commit id line; the splitter discards it as preamble.
    pub fn args(&self) -> Vec<String> {
        let mut args: Vec<String> = match self {
            DiffCommand::Root { .. } => vec![
                "diff-tree".to_string(),
                "--cc".to_string(),
                "--root".to_string(),
            ],
            _ => vec!["diff".to_string()],
        };
        args.extend(COMMON_FLAGS.iter().map(|f| (*f).to_string()));

        match self {
            DiffCommand::Root { commit } => args.push(commit.sha().to_string()),
            DiffCommand::Parent { commit } => args.push(format!("{0}^..{0}", commit.sha())),
            DiffCommand::Between { from, to, path } => {
                args.push(format!("{}..{}", from.sha(), to.sha()));
                if let Some(path) = path {
                    args.push("--".to_string());
                    args.push(path.clone());
                }
            }
        }

        args
    }
}
