//! Trivia-preserving scanner.
//!
//! Splits source text into tokens that own their surrounding trivia. A token's
//! trailing trivia runs up to and including the first end-of-line after it;
//! everything else before the next token is that token's leading trivia. The
//! concatenation of all tokens (with trivia) is exactly the input text.

use crate::green::{GreenToken, Trivia, TriviaKind, TriviaPiece};
use crate::kind::SyntaxKind;

pub struct Scanner<'a> {
    source: &'a str,
    bytes: &'a [u8],
    pos: usize,
    at_line_start: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Scanner {
            source,
            bytes: source.as_bytes(),
            pos: 0,
            at_line_start: true,
        }
    }

    /// Scan the whole source. The last token is always `EndOfFileToken`,
    /// which carries any trivia left after the final real token.
    pub fn scan_all(source: &str) -> Vec<GreenToken> {
        let mut scanner = Scanner::new(source);
        let mut tokens = Vec::new();
        let mut leading = scanner.scan_trivia(false);
        loop {
            if scanner.pos >= scanner.bytes.len() {
                tokens.push(GreenToken::with_trivia(
                    SyntaxKind::EndOfFileToken,
                    "",
                    leading,
                    Trivia::new(),
                ));
                return tokens;
            }
            let start = scanner.pos;
            let kind = scanner.scan_token();
            let text = &scanner.source[start..scanner.pos];
            scanner.at_line_start = false;
            let trailing = scanner.scan_trivia(true);
            tokens.push(GreenToken::with_trivia(kind, text, leading, trailing));
            leading = scanner.scan_trivia(false);
        }
    }

    #[inline]
    fn peek(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.pos + ahead).copied()
    }

    fn current_char(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    // -----------------------------------------------------------------------
    // Trivia
    // -----------------------------------------------------------------------

    fn scan_trivia(&mut self, trailing: bool) -> Trivia {
        let mut trivia = Trivia::new();
        while let Some(ch) = self.peek(0) {
            let start = self.pos;
            let kind = match ch {
                b'\r' | b'\n' => {
                    if ch == b'\r' && self.peek(1) == Some(b'\n') {
                        self.pos += 2;
                    } else {
                        self.pos += 1;
                    }
                    self.at_line_start = true;
                    TriviaKind::EndOfLine
                }
                b' ' | b'\t' | b'\x0b' | b'\x0c' => {
                    while matches!(self.peek(0), Some(b' ' | b'\t' | b'\x0b' | b'\x0c')) {
                        self.pos += 1;
                    }
                    TriviaKind::Whitespace
                }
                b'/' if self.peek(1) == Some(b'/') => {
                    self.skip_to_line_end();
                    self.at_line_start = false;
                    TriviaKind::SingleLineComment
                }
                b'/' if self.peek(1) == Some(b'*') => {
                    self.pos += 2;
                    while self.pos < self.bytes.len() {
                        if self.bytes[self.pos] == b'*' && self.peek(1) == Some(b'/') {
                            self.pos += 2;
                            break;
                        }
                        self.pos += 1;
                    }
                    self.pos = self.pos.min(self.bytes.len());
                    self.at_line_start = false;
                    TriviaKind::MultiLineComment
                }
                b'#' if !trailing && self.at_line_start => {
                    self.skip_to_line_end();
                    TriviaKind::Directive
                }
                _ => break,
            };
            trivia.push(TriviaPiece::new(kind, &self.source[start..self.pos]));
            if trailing && kind == TriviaKind::EndOfLine {
                break;
            }
        }
        trivia
    }

    fn skip_to_line_end(&mut self) {
        while let Some(ch) = self.peek(0) {
            if ch == b'\n' || ch == b'\r' {
                break;
            }
            self.pos += 1;
        }
    }

    // -----------------------------------------------------------------------
    // Tokens
    // -----------------------------------------------------------------------

    fn scan_token(&mut self) -> SyntaxKind {
        let Some(ch) = self.current_char() else {
            return SyntaxKind::EndOfFileToken;
        };

        match ch {
            '"' => {
                self.scan_string(false, false);
                SyntaxKind::StringLiteral
            }
            '\'' => {
                self.scan_char_literal();
                SyntaxKind::CharacterLiteral
            }
            '@' | '$' => self.scan_prefixed(),
            c if c.is_ascii_digit() => {
                self.scan_number();
                SyntaxKind::NumericLiteral
            }
            '.' if self.peek(1).is_some_and(|b| b.is_ascii_digit()) => {
                self.scan_number();
                SyntaxKind::NumericLiteral
            }
            c if is_identifier_start(c) => {
                let start = self.pos;
                self.scan_identifier_rest();
                SyntaxKind::from_keyword(&self.source[start..self.pos])
                    .unwrap_or(SyntaxKind::Identifier)
            }
            _ => self.scan_punctuation(ch),
        }
    }

    /// `@ident`, `@"verbatim"`, `$"interpolated"`, `$@"..."`, `@$"..."`.
    fn scan_prefixed(&mut self) -> SyntaxKind {
        let mut verbatim = false;
        let mut interpolated = false;
        let start = self.pos;
        while let Some(b) = self.peek(0) {
            match b {
                b'@' if !verbatim => verbatim = true,
                b'$' if !interpolated => interpolated = true,
                _ => break,
            }
            self.pos += 1;
        }
        match self.current_char() {
            Some('"') => {
                self.scan_string(verbatim, interpolated);
                SyntaxKind::StringLiteral
            }
            Some(c) if verbatim && !interpolated && is_identifier_start(c) => {
                self.scan_identifier_rest();
                SyntaxKind::Identifier
            }
            _ => {
                // Lone prefix character.
                self.pos = start + 1;
                SyntaxKind::Unknown
            }
        }
    }

    fn scan_identifier_rest(&mut self) {
        while let Some(c) = self.current_char() {
            if c.is_alphanumeric() || c == '_' {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
    }

    fn scan_number(&mut self) {
        while let Some(b) = self.peek(0) {
            if b.is_ascii_alphanumeric() || b == b'_' {
                self.pos += 1;
            } else if b == b'.' && self.peek(1).is_some_and(|n| n.is_ascii_digit()) {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Scan a string literal starting at the opening quote.
    fn scan_string(&mut self, verbatim: bool, interpolated: bool) {
        self.pos += 1;
        let mut hole_depth = 0u32;
        while let Some(b) = self.peek(0) {
            if hole_depth > 0 {
                match b {
                    b'{' => {
                        hole_depth += 1;
                        self.pos += 1;
                    }
                    b'}' => {
                        hole_depth -= 1;
                        self.pos += 1;
                    }
                    b'"' => self.scan_string(false, false),
                    b'\n' | b'\r' if !verbatim => return,
                    _ => self.advance_char(),
                }
                continue;
            }
            match b {
                b'"' if verbatim && self.peek(1) == Some(b'"') => self.pos += 2,
                b'"' => {
                    self.pos += 1;
                    return;
                }
                b'\\' if !verbatim => {
                    self.pos += 1;
                    if let Some(c) = self.current_char() {
                        self.pos += c.len_utf8();
                    }
                }
                b'{' if interpolated && self.peek(1) == Some(b'{') => self.pos += 2,
                b'{' if interpolated => {
                    hole_depth = 1;
                    self.pos += 1;
                }
                b'\n' | b'\r' if !verbatim => return,
                _ => self.advance_char(),
            }
        }
    }

    fn scan_char_literal(&mut self) {
        self.pos += 1;
        while let Some(b) = self.peek(0) {
            match b {
                b'\'' => {
                    self.pos += 1;
                    return;
                }
                b'\\' => {
                    self.pos += 1;
                    if let Some(c) = self.current_char() {
                        self.pos += c.len_utf8();
                    }
                }
                b'\n' | b'\r' => return,
                _ => self.advance_char(),
            }
        }
    }

    fn advance_char(&mut self) {
        match self.current_char() {
            Some(c) => self.pos += c.len_utf8(),
            None => self.pos = self.bytes.len(),
        }
    }

    fn scan_punctuation(&mut self, ch: char) -> SyntaxKind {
        let next = self.peek(1);
        let (kind, len) = match (ch, next) {
            ('=', Some(b'>')) => (SyntaxKind::EqualsGreaterThanToken, 2),
            (':', Some(b':')) => (SyntaxKind::ColonColonToken, 2),
            ('=', Some(b'=')) | ('!', Some(b'=')) | ('<', Some(b'=')) | ('>', Some(b'=')) => {
                (SyntaxKind::OperatorToken, 2)
            }
            ('&', Some(b'&')) | ('|', Some(b'|')) | ('?', Some(b'?')) | ('?', Some(b'.')) => {
                (SyntaxKind::OperatorToken, 2)
            }
            ('+', Some(b'+')) | ('-', Some(b'-')) | ('-', Some(b'>')) => {
                (SyntaxKind::OperatorToken, 2)
            }
            ('+' | '-' | '*' | '/' | '%' | '&' | '|' | '^', Some(b'=')) => {
                (SyntaxKind::OperatorToken, 2)
            }
            ('{', _) => (SyntaxKind::OpenBraceToken, 1),
            ('}', _) => (SyntaxKind::CloseBraceToken, 1),
            ('(', _) => (SyntaxKind::OpenParenToken, 1),
            (')', _) => (SyntaxKind::CloseParenToken, 1),
            ('[', _) => (SyntaxKind::OpenBracketToken, 1),
            (']', _) => (SyntaxKind::CloseBracketToken, 1),
            ('<', _) => (SyntaxKind::LessThanToken, 1),
            ('>', _) => (SyntaxKind::GreaterThanToken, 1),
            (';', _) => (SyntaxKind::SemicolonToken, 1),
            (',', _) => (SyntaxKind::CommaToken, 1),
            ('.', _) => (SyntaxKind::DotToken, 1),
            ('=', _) => (SyntaxKind::EqualsToken, 1),
            ('?', _) => (SyntaxKind::QuestionToken, 1),
            (':', _) => (SyntaxKind::ColonToken, 1),
            ('~', _) => (SyntaxKind::TildeToken, 1),
            ('*', _) => (SyntaxKind::AsteriskToken, 1),
            ('+' | '-' | '/' | '%' | '&' | '|' | '^' | '!', _) => (SyntaxKind::OperatorToken, 1),
            (other, _) => (SyntaxKind::Unknown, other.len_utf8()),
        };
        self.pos += len;
        kind
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod tests;
