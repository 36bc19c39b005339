//! Matcher adapters: thin wrappers that give the Aho–Corasick and regex
//! crates a uniform `build`/`find` shape so `findthem`'s Finder can drive
//! either backend (or an `Empty` no-op) without knowing which one it holds.
//! Grounded on the original Go implementation's `SubstringEngine` /
//! `RegexEngine` interfaces (`finder/substringEngine.go`,
//! `finder/regexEngine.go`), reimplemented as Rust traits instead of Go
//! interfaces.

mod empty;
mod regex_backend;
mod substring;

use std::collections::HashSet;

pub use empty::{EmptyRegexBackend, EmptySubstringBackend};
pub use regex_backend::RegexSetBackend;
pub use substring::AhoCorasickSubstringBackend;

/// One matcher hit: the atom text that matched (echoed back verbatim so it
/// can key straight into a `PositionIndex`) and the byte offset it matched
/// at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub term: String,
    pub position: usize,
}

/// Wraps a multi-pattern literal-substring matcher.
///
/// `find` is infallible by design: once built, running a substring matcher
/// over a text cannot fail, only return zero or more hits.
pub trait SubstringBackend {
    fn build(&mut self, literals: &HashSet<String>, case_sensitive: bool) -> anyhow::Result<()>;
    fn find(&self, text: &str) -> Vec<Hit>;
}

/// Wraps a regex matcher. Unlike its substring counterpart, `find` can
/// fail: a backend may hit an internal error running a compiled pattern
/// (not modeled by `regex`, but the interface reserves the case for other
/// regex engines).
pub trait RegexBackend {
    fn build(&mut self, patterns: &HashSet<String>, case_sensitive: bool) -> anyhow::Result<()>;
    fn find(&self, text: &str) -> anyhow::Result<Vec<Hit>>;
}
