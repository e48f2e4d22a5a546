pub mod collection;
pub mod record;

pub use collection::DiffCollection;
pub use record::{ChangeKind, DiffRecord};

use regex::Regex;
use std::sync::OnceLock;

/// The line announcing the start of one file's diff segment, capturing
/// the source and destination paths. Only the `SRC/`/`DST/` prefixes
/// set by [`DiffCommand`](crate::DiffCommand) are recognized.
#[allow(clippy::expect_used)]
pub(crate) fn boundary_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^diff --git SRC/(.*) DST/(.*)$").expect("boundary pattern is valid")
    })
}
