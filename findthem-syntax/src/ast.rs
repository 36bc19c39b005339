use crate::atom::Atom;

/// A parsed boolean expression.
///
/// `And`/`Or` are binary (unlike a flattened n-ary AST that collapses chains
/// of the same operator into a `Vec`) because `INORD`'s
/// ordering semantics are defined pairwise over `left`/`right` and a
/// flattened n-ary node would have to re-derive that pairing at solve time.
/// Left-associative chains of the same operator (`"a" AND "b" AND "c"`) are
/// therefore parsed as left-leaning binary trees.
///
/// Every node that can appear inside an `INORD(...)` scope carries an
/// `inord` flag set by the parser; the solver only computes and threads a
/// residual position list for nodes where this flag is `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Unit { atom: Atom, inord: bool },
    And { left: Box<Expr>, right: Box<Expr>, inord: bool },
    Or { left: Box<Expr>, right: Box<Expr>, inord: bool },
    /// Never has an `Inord` ancestor; enforced by the parser, not this type.
    Not { child: Box<Expr> },
    /// Never nested inside another `Inord`; enforced by the parser.
    Inord { child: Box<Expr> },
}

impl Expr {
    pub fn is_inord(&self) -> bool {
        match self {
            Expr::Unit { inord, .. } | Expr::And { inord, .. } | Expr::Or { inord, .. } => *inord,
            Expr::Not { .. } | Expr::Inord { .. } => false,
        }
    }

    /// A readable indented tree, in the spirit of the original Go
    /// `Expression.PrettyPrint`, useful when debugging a misbehaving query.
    pub fn pretty_print(&self) -> String {
        let mut out = String::new();
        self.write_pretty(&mut out, 0);
        out
    }

    fn write_pretty(&self, out: &mut String, depth: usize) {
        let indent = "    ".repeat(depth);
        match self {
            Expr::Unit { atom, inord } => {
                out.push_str(&format!("{indent}{:?}:{}{}\n", atom.kind, atom.text, if *inord { " [inord]" } else { "" }));
            }
            Expr::And { left, right, inord } => {
                out.push_str(&format!("{indent}AND{}\n", if *inord { " [inord]" } else { "" }));
                left.write_pretty(out, depth + 1);
                right.write_pretty(out, depth + 1);
            }
            Expr::Or { left, right, inord } => {
                out.push_str(&format!("{indent}OR{}\n", if *inord { " [inord]" } else { "" }));
                left.write_pretty(out, depth + 1);
                right.write_pretty(out, depth + 1);
            }
            Expr::Not { child } => {
                out.push_str(&format!("{indent}NOT\n"));
                child.write_pretty(out, depth + 1);
            }
            Expr::Inord { child } => {
                out.push_str(&format!("{indent}INORD\n"));
                child.write_pretty(out, depth + 1);
            }
        }
    }
}
