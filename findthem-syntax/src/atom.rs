/// A leaf predicate: either a literal substring or a regular expression.
///
/// ```
/// use findthem_syntax::{Atom, AtomKind};
/// let atom = Atom::new(AtomKind::Literal, "lorem".to_string());
/// assert_eq!(atom.text, "lorem");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Atom {
    pub kind: AtomKind,
    pub text: String,
}

impl Atom {
    pub fn new(kind: AtomKind, text: String) -> Self {
        Self { kind, text }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AtomKind {
    Literal,
    Regex,
}
