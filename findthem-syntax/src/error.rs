use std::fmt;

/// A parse failure, carrying the offending byte position the way the
/// original Go parser's `fmt.Errorf` messages carried enough context to
/// point at the bad token.
///
/// The three constructors below exist only to keep call sites honest about
/// which error category they're raising (lexical, syntactic, semantic); the
/// wire shape is identical for all of them so callers never need to match on
/// category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub position: usize,
}

impl ParseError {
    pub fn lexical(message: String, position: usize) -> Self {
        Self { message, position }
    }

    pub fn syntactic(message: String, position: usize) -> Self {
        Self { message, position }
    }

    pub fn semantic(message: String, position: usize) -> Self {
        Self { message, position }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at byte {})", self.message, self.position)
    }
}

impl std::error::Error for ParseError {}
