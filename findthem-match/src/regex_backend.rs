use std::collections::HashSet;

use anyhow::Result;
use regex::RegexBuilder;

use crate::{Hit, RegexBackend};

struct CompiledPattern {
    text: String,
    regex: regex::Regex,
}

/// Regex adapter over the `regex` crate, the Rust counterpart of the Go
/// implementation's `RegexpEngine` (`finder/regexEngine.go`): compile every
/// pattern once at build time, run `find_iter` per pattern at find time, and
/// emit the pattern's own text as the term key (not the matched slice) so it
/// lines up with the AST's regex atom.
#[derive(Default)]
pub struct RegexSetBackend {
    compiled: Vec<CompiledPattern>,
}

impl RegexSetBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RegexBackend for RegexSetBackend {
    fn build(&mut self, patterns: &HashSet<String>, case_sensitive: bool) -> Result<()> {
        let mut compiled = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let regex = RegexBuilder::new(pattern)
                .case_insensitive(!case_sensitive)
                .build()?;
            compiled.push(CompiledPattern {
                text: pattern.clone(),
                regex,
            });
        }
        self.compiled = compiled;
        Ok(())
    }

    fn find(&self, text: &str) -> Result<Vec<Hit>> {
        let mut hits = Vec::new();
        for pattern in &self.compiled {
            for m in pattern.regex.find_iter(text) {
                hits.push(Hit {
                    term: pattern.text.clone(),
                    position: m.start(),
                });
            }
        }
        Ok(hits)
    }
}
