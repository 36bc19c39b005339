use crate::error::ParseError;

/// A lexical token produced by [`Scanner::scan`].
///
/// Mirrors the token kinds the original Go scanner (`dsl/scanner.go`)
/// recognized, plus `RegexPrefix` for the `r"..."` atom form this engine
/// adds on top of that implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Whitespace,
    /// The normalized body of a `"..."` literal, escapes already resolved.
    Literal(String),
    LParen,
    RParen,
    And,
    Or,
    Not,
    Inord,
    /// A lone `r` immediately followed by `"`.
    RegexPrefix,
    Eof,
}

/// Single-pass tokenizer over a query string.
///
/// Scanning never needs to push back more than the rune it just peeked at,
/// so the cursor is a plain byte offset into `input` rather than a buffered
/// reader with an explicit `unread` (the Go original's approach, suited to
/// `io.Reader` streams we don't need here).
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Returns the next token together with the byte offset it started at.
    pub fn scan(&mut self) -> Result<(Token, usize), ParseError> {
        let start = self.pos;
        match self.peek_char() {
            None => Ok((Token::Eof, start)),
            Some(ch) if is_whitespace(ch) => {
                self.scan_whitespace();
                Ok((Token::Whitespace, start))
            }
            Some(ch) if is_letter(ch) => self.scan_operator_or_regex_prefix(start),
            Some('"') => self.scan_literal(start).map(|tok| (tok, start)),
            Some('(') => {
                self.advance_char();
                Ok((Token::LParen, start))
            }
            Some(')') => {
                self.advance_char();
                Ok((Token::RParen, start))
            }
            Some(ch) => Err(ParseError::lexical(
                format!("illegal character '{ch}' was found"),
                start,
            )),
        }
    }

    fn scan_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if is_whitespace(ch) {
                self.advance_char();
            } else {
                break;
            }
        }
    }

    // Consumes a contiguous run of ASCII letters and classifies it. A bare
    // `r` directly followed by `"` becomes a regex prefix instead of an
    // operator lookup; anything else that isn't AND/OR/NOT/INORD is illegal
    // rather than silently treated as a keyword.
    fn scan_operator_or_regex_prefix(&mut self, start: usize) -> Result<(Token, usize), ParseError> {
        let word_start = self.pos;
        while let Some(ch) = self.peek_char() {
            if is_letter(ch) {
                self.advance_char();
            } else {
                break;
            }
        }
        let word = &self.input[word_start..self.pos];

        if word.len() == 1 && word.eq_ignore_ascii_case("r") {
            if self.peek_char() == Some('"') {
                return Ok((Token::RegexPrefix, start));
            }
            return Err(ParseError::lexical(
                "'r' must be immediately followed by '\"' to start a regex atom".to_string(),
                start,
            ));
        }

        let tok = if word.eq_ignore_ascii_case("AND") {
            Token::And
        } else if word.eq_ignore_ascii_case("OR") {
            Token::Or
        } else if word.eq_ignore_ascii_case("NOT") {
            Token::Not
        } else if word.eq_ignore_ascii_case("INORD") {
            Token::Inord
        } else {
            return Err(ParseError::lexical(
                format!("unexpected operator '{word}' found"),
                start,
            ));
        };
        Ok((tok, start))
    }

    // Reads a `"..."` literal, resolving `\\ \" \n \r \t` escapes. Any other
    // backslash sequence, or EOF before the closing quote, is an error.
    fn scan_literal(&mut self, start: usize) -> Result<Token, ParseError> {
        self.advance_char(); // opening quote
        let mut buf = String::new();
        loop {
            match self.peek_char() {
                None => {
                    return Err(ParseError::lexical(
                        "unterminated literal: expected '\"' but found EOF".to_string(),
                        start,
                    ));
                }
                Some('\\') => {
                    let escape_pos = self.pos;
                    self.advance_char();
                    match self.peek_char() {
                        Some('\\') => buf.push('\\'),
                        Some('"') => buf.push('"'),
                        Some('n') => buf.push('\n'),
                        Some('r') => buf.push('\r'),
                        Some('t') => buf.push('\t'),
                        Some(other) => {
                            return Err(ParseError::lexical(
                                format!("invalid escape sequence '\\{other}'"),
                                escape_pos,
                            ));
                        }
                        None => {
                            return Err(ParseError::lexical(
                                "unterminated literal: expected escape but found EOF".to_string(),
                                escape_pos,
                            ));
                        }
                    }
                    self.advance_char();
                }
                Some('"') => {
                    self.advance_char();
                    return Ok(Token::Literal(buf));
                }
                Some(ch) => {
                    buf.push(ch);
                    self.advance_char();
                }
            }
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance_char(&mut self) {
        if let Some(ch) = self.peek_char() {
            self.pos += ch.len_utf8();
        }
    }
}

fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n')
}

fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}
