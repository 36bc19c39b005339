use std::collections::HashSet;

use anyhow::Result;

use crate::{Hit, RegexBackend, SubstringBackend};

/// No-op substring backend for DSL-only mode: `build` does nothing, `find`
/// never reports a hit. Grounded on the Go implementation's `EmptyEngine`.
#[derive(Default)]
pub struct EmptySubstringBackend;

impl SubstringBackend for EmptySubstringBackend {
    fn build(&mut self, _literals: &HashSet<String>, _case_sensitive: bool) -> Result<()> {
        Ok(())
    }

    fn find(&self, _text: &str) -> Vec<Hit> {
        Vec::new()
    }
}

/// No-op regex backend, the regex-side counterpart of [`EmptySubstringBackend`].
#[derive(Default)]
pub struct EmptyRegexBackend;

impl RegexBackend for EmptyRegexBackend {
    fn build(&mut self, _patterns: &HashSet<String>, _case_sensitive: bool) -> Result<()> {
        Ok(())
    }

    fn find(&self, _text: &str) -> Result<Vec<Hit>> {
        Ok(Vec::new())
    }
}
