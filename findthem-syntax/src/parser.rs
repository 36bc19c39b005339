use std::collections::HashSet;

use crate::ast::Expr;
use crate::atom::{Atom, AtomKind};
use crate::error::ParseError;
use crate::scanner::{Scanner, Token};

/// The result of parsing a query string: the AST plus the unique atom texts
/// it references, split by kind so the caller can hand the literal set to a
/// substring matcher and the regex set to a regex matcher independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    pub expr: Expr,
    pub literals: HashSet<String>,
    pub regexes: HashSet<String>,
}

/// Parses a query string into a [`ParsedQuery`].
///
/// ```
/// use findthem_syntax::{parse_query, Expr};
/// let parsed = parse_query(r#""lorem" AND "ipsum""#, false).unwrap();
/// assert!(matches!(parsed.expr, Expr::And { .. }));
/// assert!(parsed.literals.contains("lorem"));
/// ```
pub fn parse_query(input: &str, case_sensitive: bool) -> Result<ParsedQuery, ParseError> {
    let mut parser = Parser::new(input, case_sensitive);
    let expr = parser.parse()?;
    Ok(ParsedQuery {
        expr,
        literals: parser.literals,
        regexes: parser.regexes,
    })
}

/// Hand-rolled single-token-lookahead recursive-descent parser, the same
/// shape as the original Go `dsl.Parser` (buffered one-token `unscan`)
/// adapted to build a binary AST instead of flat `LExpr`/`RExpr` slots.
struct Parser<'a> {
    scanner: Scanner<'a>,
    lookahead: Option<(Token, usize)>,
    case_sensitive: bool,
    literals: HashSet<String>,
    regexes: HashSet<String>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, case_sensitive: bool) -> Self {
        Self {
            scanner: Scanner::new(input),
            lookahead: None,
            case_sensitive,
            literals: HashSet::new(),
            regexes: HashSet::new(),
        }
    }

    fn parse(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_or_term(false)?;
        let (tok, pos) = self.peek()?;
        match tok {
            Token::Eof => Ok(expr),
            Token::RParen => Err(ParseError::syntactic(
                "extra closing parentheses".to_string(),
                pos,
            )),
            other => Err(ParseError::syntactic(
                format!("unexpected trailing token {other:?}"),
                pos,
            )),
        }
    }

    // OrTerm := AndTerm (OR AndTerm)*
    fn parse_or_term(&mut self, in_inord: bool) -> Result<Expr, ParseError> {
        let mut left = self.parse_and_term(in_inord)?;
        loop {
            let (tok, _) = self.peek()?;
            if tok != Token::Or {
                break;
            }
            self.advance()?;
            let right = self.parse_operand_after_binary("OR", in_inord)?;
            left = Expr::Or {
                left: Box::new(left),
                right: Box::new(right),
                inord: in_inord,
            };
        }
        Ok(left)
    }

    // AndTerm := Unary (AND Unary)*
    fn parse_and_term(&mut self, in_inord: bool) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary(in_inord)?;
        loop {
            let (tok, _) = self.peek()?;
            if tok != Token::And {
                break;
            }
            self.advance()?;
            let right = self.parse_operand_after_binary("AND", in_inord)?;
            left = Expr::And {
                left: Box::new(left),
                right: Box::new(right),
                inord: in_inord,
            };
        }
        Ok(left)
    }

    // Shared by both binary operators: the slot right after AND/OR must
    // start a Unary. Anything else (EOF, ')', or another binary operator)
    // means the expression was cut short.
    fn parse_operand_after_binary(&mut self, op: &str, in_inord: bool) -> Result<Expr, ParseError> {
        let (tok, pos) = self.peek()?;
        if !can_start_unary(&tok) {
            return Err(ParseError::syntactic(
                format!("incomplete expression {op}"),
                pos,
            ));
        }
        self.parse_unary(in_inord)
    }

    // Unary := NOT Unary | INORD '(' OrTerm ')' | Atom | '(' OrTerm ')'
    fn parse_unary(&mut self, in_inord: bool) -> Result<Expr, ParseError> {
        let (tok, pos) = self.peek()?;
        match tok {
            Token::Not => {
                if in_inord {
                    return Err(ParseError::semantic(
                        "NOT cannot appear inside INORD".to_string(),
                        pos,
                    ));
                }
                self.advance()?;
                let (next_tok, next_pos) = self.peek()?;
                if !can_start_unary(&next_tok) {
                    return Err(ParseError::syntactic(
                        "unexpected token after NOT".to_string(),
                        next_pos,
                    ));
                }
                let child = self.parse_unary(in_inord)?;
                Ok(Expr::Not { child: Box::new(child) })
            }
            Token::Inord => {
                if in_inord {
                    return Err(ParseError::semantic(
                        "INORD cannot be nested inside another INORD".to_string(),
                        pos,
                    ));
                }
                self.advance()?;
                let (open_tok, open_pos) = self.peek()?;
                if open_tok != Token::LParen {
                    return Err(ParseError::syntactic(
                        "INORD must be followed by '('".to_string(),
                        open_pos,
                    ));
                }
                self.advance()?;
                let inner = self.parse_or_term(true)?;
                let (close_tok, _) = self.peek()?;
                if close_tok != Token::RParen {
                    return Err(ParseError::syntactic("Unexpected '('".to_string(), open_pos));
                }
                self.advance()?;
                Ok(Expr::Inord { child: Box::new(inner) })
            }
            Token::LParen => {
                self.advance()?;
                let inner = self.parse_or_term(in_inord)?;
                let (close_tok, _) = self.peek()?;
                if close_tok != Token::RParen {
                    return Err(ParseError::syntactic("Unexpected '('".to_string(), pos));
                }
                self.advance()?;
                Ok(inner)
            }
            Token::Literal(text) => {
                self.advance()?;
                self.build_unit(AtomKind::Literal, text, in_inord, pos)
            }
            Token::RegexPrefix => {
                self.advance()?;
                let (body_tok, body_pos) = self.peek()?;
                let Token::Literal(text) = body_tok else {
                    return Err(ParseError::syntactic(
                        "'r' must be followed by a quoted pattern".to_string(),
                        body_pos,
                    ));
                };
                self.advance()?;
                self.build_unit(AtomKind::Regex, text, in_inord, body_pos)
            }
            Token::Eof => Err(ParseError::syntactic("unexpected EOF".to_string(), pos)),
            Token::RParen => Err(ParseError::syntactic("Unexpected ')'".to_string(), pos)),
            Token::And => Err(ParseError::syntactic(
                "no left expression was found for AND".to_string(),
                pos,
            )),
            Token::Or => Err(ParseError::syntactic(
                "no left expression was found for OR".to_string(),
                pos,
            )),
            Token::Whitespace => unreachable!("whitespace is filtered out before reaching the parser"),
        }
    }

    // Applies the one normalization pass: under case-insensitive mode
    // the atom text is lower-cased once, and the exact same owned String is
    // used both as the set key and the AST literal so they can never drift.
    fn build_unit(
        &mut self,
        kind: AtomKind,
        text: String,
        inord: bool,
        pos: usize,
    ) -> Result<Expr, ParseError> {
        let normalized = if self.case_sensitive {
            text
        } else {
            text.to_ascii_lowercase()
        };
        if normalized.is_empty() {
            return Err(ParseError::semantic(
                "atom text must not be empty".to_string(),
                pos,
            ));
        }
        match kind {
            AtomKind::Literal => {
                self.literals.insert(normalized.clone());
            }
            AtomKind::Regex => {
                self.regexes.insert(normalized.clone());
            }
        }
        Ok(Expr::Unit {
            atom: Atom::new(kind, normalized),
            inord,
        })
    }

    fn peek(&mut self) -> Result<(Token, usize), ParseError> {
        if self.lookahead.is_none() {
            self.lookahead = Some(self.next_significant()?);
        }
        Ok(self.lookahead.clone().unwrap())
    }

    fn advance(&mut self) -> Result<(Token, usize), ParseError> {
        let tok = self.peek()?;
        self.lookahead = None;
        Ok(tok)
    }

    fn next_significant(&mut self) -> Result<(Token, usize), ParseError> {
        loop {
            let (tok, pos) = self.scanner.scan()?;
            if tok != Token::Whitespace {
                return Ok((tok, pos));
            }
        }
    }
}

fn can_start_unary(tok: &Token) -> bool {
    matches!(
        tok,
        Token::Not | Token::Inord | Token::LParen | Token::Literal(_) | Token::RegexPrefix
    )
}
