use std::collections::HashSet;
use std::time::Instant;

use anyhow::Result;
use findthem_match::{
    AhoCorasickSubstringBackend, RegexBackend, RegexSetBackend, SubstringBackend,
};
use findthem_syntax::{parse_query, Expr, ParseError};
use tracing::{debug, info};

use crate::config::FinderConfig;
use crate::index::build_position_index;

/// One matched expression from a [`Finder::process`] call. `index` is the
/// expression's position in insertion order, not a stable identifier across
/// `add_expression` calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionResult {
    pub index: u32,
    pub raw: String,
    pub tag: Option<String>,
}

struct StoredExpression {
    raw: String,
    tag: Option<String>,
    expr: Expr,
}

/// Holds the ordered expression list, the union of atoms they reference, and
/// the two matcher backends. Grounded on the Go `finder.Finder`
/// (`finder/finder.go`): same `AddExpression`/`ProcessText`/`ForceBuild`/
/// `GetKeywords` surface, generalized to two matcher kinds (substring +
/// regex) instead of one.
pub struct Finder {
    substring_backend: Box<dyn SubstringBackend>,
    regex_backend: Box<dyn RegexBackend>,
    case_sensitive: bool,
    expressions: Vec<StoredExpression>,
    literals: HashSet<String>,
    regexes: HashSet<String>,
    /// `Stale -> Fresh` on a successful build; `Fresh -> Stale` whenever
    /// `add_expression` changes the atom sets.
    fresh: bool,
}

impl Finder {
    /// Builds a Finder around caller-supplied matcher backends. Use
    /// [`Finder::with_default_backends`] unless you
    /// specifically need a different backend (e.g. an `Empty` adapter for
    /// DSL-only validation, or an externally provisioned matcher).
    pub fn new(
        substring_backend: Box<dyn SubstringBackend>,
        regex_backend: Box<dyn RegexBackend>,
        case_sensitive: bool,
    ) -> Self {
        Self {
            substring_backend,
            regex_backend,
            case_sensitive,
            expressions: Vec::new(),
            literals: HashSet::new(),
            regexes: HashSet::new(),
            fresh: true,
        }
    }

    /// Convenience constructor wired to the `aho-corasick`/`regex`-backed
    /// adapters, the pairing most callers want.
    pub fn with_default_backends(case_sensitive: bool) -> Self {
        Self::new(
            Box::new(AhoCorasickSubstringBackend::new()),
            Box::new(RegexSetBackend::new()),
            case_sensitive,
        )
    }

    /// Parses `raw` and appends it to the expression list. On a parse
    /// failure the Finder is left completely unchanged: nothing is inserted
    /// into the atom sets or the expression list.
    pub fn add_expression(&mut self, raw: &str, tag: Option<String>) -> Result<(), ParseError> {
        let parsed = parse_query(raw, self.case_sensitive)?;
        self.literals.extend(parsed.literals);
        self.regexes.extend(parsed.regexes);
        self.expressions.push(StoredExpression {
            raw: raw.to_string(),
            tag,
            expr: parsed.expr,
        });
        self.fresh = false;
        Ok(())
    }

    /// Runs every stored expression against `text`, returning the ones that
    /// matched, in insertion order.
    pub fn process(&mut self, text: &str) -> Result<Vec<ExpressionResult>> {
        self.ensure_fresh()?;

        let started = Instant::now();
        let index = build_position_index(
            text,
            &self.literals,
            &self.regexes,
            self.substring_backend.as_ref(),
            self.regex_backend.as_ref(),
            self.case_sensitive,
        )?;

        let mut results = Vec::new();
        for (position, stored) in self.expressions.iter().enumerate() {
            if findthem_syntax::matches(&stored.expr, &index) {
                results.push(ExpressionResult {
                    index: position as u32,
                    raw: stored.raw.clone(),
                    tag: stored.tag.clone(),
                });
            }
        }

        info!(
            elapsed = ?started.elapsed(),
            matched = results.len(),
            total = self.expressions.len(),
            "process finished"
        );
        Ok(results)
    }

    /// Eagerly rebuilds both matcher backends if they're stale. Exposed so
    /// benchmarking harnesses can measure `process` without the first-call
    /// build cost folded in.
    pub fn force_build(&mut self) -> Result<()> {
        self.ensure_fresh()
    }

    /// The unique literal atom texts across every stored expression, for
    /// introspection or handing to an externally provisioned matcher.
    pub fn list_keywords(&self) -> &HashSet<String> {
        &self.literals
    }

    /// The construction-time option set this Finder is running with.
    pub fn config(&self) -> FinderConfig {
        FinderConfig {
            case_sensitive: self.case_sensitive,
        }
    }

    fn ensure_fresh(&mut self) -> Result<()> {
        if self.fresh {
            return Ok(());
        }
        if !self.literals.is_empty() {
            self.substring_backend
                .build(&self.literals, self.case_sensitive)?;
        }
        if !self.regexes.is_empty() {
            self.regex_backend.build(&self.regexes, self.case_sensitive)?;
        }
        debug!(
            literal_count = self.literals.len(),
            regex_count = self.regexes.len(),
            "matcher backends rebuilt: Stale -> Fresh"
        );
        self.fresh = true;
        Ok(())
    }
}
