use std::borrow::Cow;
use std::collections::HashSet;

use findthem_match::{RegexBackend, SubstringBackend};
use findthem_syntax::PositionIndex;

/// Runs both matcher backends over `text` once and folds their hits into a
/// position index. Assumes the backends are already built and up to date —
/// rebuilding on staleness is the Finder's job, kept separate so this
/// function stays a pure find-and-fold step, the way `finder.go`'s
/// `createSolverMap` only folds a `Match` channel and never touches
/// `BuildEngine` itself.
pub(crate) fn build_position_index(
    text: &str,
    literals: &HashSet<String>,
    regexes: &HashSet<String>,
    substring_backend: &dyn SubstringBackend,
    regex_backend: &dyn RegexBackend,
    case_sensitive: bool,
) -> anyhow::Result<PositionIndex> {
    // Normalize once so literal atom keys (already normalized at parse
    // time) compare bit-for-bit against matched terms.
    let normalized: Cow<'_, str> = if case_sensitive {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.to_ascii_lowercase())
    };

    let mut index: PositionIndex = PositionIndex::new();

    if !literals.is_empty() {
        for hit in substring_backend.find(&normalized) {
            index.entry(hit.term).or_default().push(hit.position);
        }
    }

    if !regexes.is_empty() {
        for hit in regex_backend.find(&normalized)? {
            index.entry(hit.term).or_default().push(hit.position);
        }
    }

    Ok(index)
}
