use std::collections::HashSet;

use aho_corasick::{AhoCorasick, AhoCorasickBuilder};
use anyhow::Result;

use crate::{Hit, SubstringBackend};

/// Substring adapter over the `aho-corasick` crate, the Rust counterpart of
/// the Go implementation's `PetarDambovalievEngine`
/// (`finder/substringEngine.go`): same `AsciiCaseInsensitive` knob, same
/// "rebuild the whole automaton when the keyword set changes" model.
#[derive(Default)]
pub struct AhoCorasickSubstringBackend {
    automaton: Option<AhoCorasick>,
    patterns: Vec<String>,
}

impl AhoCorasickSubstringBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SubstringBackend for AhoCorasickSubstringBackend {
    fn build(&mut self, literals: &HashSet<String>, case_sensitive: bool) -> Result<()> {
        let patterns: Vec<String> = literals.iter().cloned().collect();
        let automaton = AhoCorasickBuilder::new()
            .ascii_case_insensitive(!case_sensitive)
            .build(&patterns)?;
        self.automaton = Some(automaton);
        self.patterns = patterns;
        Ok(())
    }

    fn find(&self, text: &str) -> Vec<Hit> {
        let Some(automaton) = &self.automaton else {
            return Vec::new();
        };
        automaton
            .find_iter(text)
            .map(|m| Hit {
                term: self.patterns[m.pattern().as_usize()].clone(),
                position: m.start(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn finds_all_patterns_in_ascending_order() {
        let mut backend = AhoCorasickSubstringBackend::new();
        backend.build(&set(&["lorem", "ipsum"]), true).unwrap();
        let hits = backend.find("lorem ipsum dolor lorem");
        let positions: Vec<usize> = hits.iter().map(|h| h.position).collect();
        assert_eq!(positions, vec![0, 6, 18]);
    }

    #[test]
    fn case_insensitive_build_matches_mixed_case_text() {
        let mut backend = AhoCorasickSubstringBackend::new();
        backend.build(&set(&["lorem"]), false).unwrap();
        let hits = backend.find("LOREM ipsum");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].position, 0);
    }

    #[test]
    fn unbuilt_backend_finds_nothing() {
        let backend = AhoCorasickSubstringBackend::new();
        assert!(backend.find("lorem ipsum").is_empty());
    }

    #[test]
    fn empty_pattern_set_builds_and_finds_nothing() {
        let mut backend = AhoCorasickSubstringBackend::new();
        backend.build(&HashSet::new(), true).unwrap();
        assert!(backend.find("anything").is_empty());
    }
}
