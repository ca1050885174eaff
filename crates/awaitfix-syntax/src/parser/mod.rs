//! Tolerant recursive-descent parser.
//!
//! The parser models only the surface the asynchronization fixes care about:
//! declarations with headers (modifiers, return type, name, parameters,
//! body), statements, local functions, lambdas, anonymous methods and await
//! expressions. Everything else is kept as flat token runs inside generic
//! nodes, so no input is ever rejected and printing a parsed tree always
//! reproduces the source text.
//!
//! Submodules:
//! - `state_members` - source file, namespaces, types and members
//! - `state_statements` - blocks, statements and local functions
//! - `state_expressions` - expression items, lambdas, awaits and groups
//! - `state_types` - type lookahead and type nodes

mod state_expressions;
mod state_members;
mod state_statements;
mod state_types;

use crate::green::{GreenElement, GreenNode, GreenToken};
use crate::kind::SyntaxKind;
use crate::scanner::Scanner;
use crate::text_range::TextRange;
use tracing::trace;

/// A recoverable parse error. The tree is still produced.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ParseDiagnostic {
    pub message: String,
    pub range: TextRange,
}

pub struct ParserState {
    file_name: String,
    tokens: Vec<GreenToken>,
    /// Absolute full-range start of each token.
    offsets: Vec<u32>,
    pos: usize,
    depth: u32,
    diagnostics: Vec<ParseDiagnostic>,
}

impl ParserState {
    pub fn new(file_name: String, source: String) -> ParserState {
        let tokens = Scanner::scan_all(&source);
        let mut offsets = Vec::with_capacity(tokens.len());
        let mut offset = 0u32;
        for token in &tokens {
            offsets.push(offset);
            offset += token.full_len();
        }
        ParserState {
            file_name,
            tokens,
            offsets,
            pos: 0,
            depth: 0,
            diagnostics: Vec::new(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn get_diagnostics(&self) -> &[ParseDiagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<ParseDiagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    // -----------------------------------------------------------------------
    // Token cursor
    // -----------------------------------------------------------------------

    /// Token at an absolute index, clamped to the end-of-file token.
    #[inline]
    fn token_at(&self, index: usize) -> &GreenToken {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[index.min(last)]
    }

    #[inline]
    pub(crate) fn kind_at(&self, index: usize) -> SyntaxKind {
        self.token_at(index).kind()
    }

    #[inline]
    pub(crate) fn kind(&self) -> SyntaxKind {
        self.kind_at(self.pos)
    }

    #[inline]
    pub(crate) fn nth_kind(&self, n: usize) -> SyntaxKind {
        self.kind_at(self.pos + n)
    }

    #[inline]
    pub(crate) fn at(&self, kind: SyntaxKind) -> bool {
        self.kind() == kind
    }

    #[inline]
    pub(crate) fn at_eof(&self) -> bool {
        self.at(SyntaxKind::EndOfFileToken)
    }

    /// Whether the token at `index` is the contextual word `word`.
    pub(crate) fn is_contextual_at(&self, index: usize, word: &str) -> bool {
        let token = self.token_at(index);
        token.kind() == SyntaxKind::Identifier && token.text() == word
    }

    pub(crate) fn at_contextual(&self, word: &str) -> bool {
        self.is_contextual_at(self.pos, word)
    }

    /// Consume the current token. The end-of-file token is never consumed.
    pub(crate) fn bump(&mut self) -> GreenToken {
        let token = self.token_at(self.pos).clone();
        if !self.at_eof() {
            self.pos += 1;
        }
        token
    }

    pub(crate) fn bump_into(&mut self, children: &mut Vec<GreenElement>) {
        let token = self.bump();
        children.push(token.into());
    }

    /// Consume a token of `kind`, or record a diagnostic and synthesize a
    /// missing one.
    pub(crate) fn expect(&mut self, kind: SyntaxKind) -> GreenToken {
        if self.at(kind) {
            return self.bump();
        }
        let expected = kind.fixed_text().unwrap_or("token");
        self.error_here(format!("'{expected}' expected"));
        GreenToken::missing(kind)
    }

    pub(crate) fn error_here(&mut self, message: impl Into<String>) {
        let token = self.token_at(self.pos);
        let start = self
            .offsets
            .get(self.pos)
            .copied()
            .unwrap_or_default()
            + token.leading().text_len();
        let range = TextRange::new(start, start + token.text().len() as u32);
        let message = message.into();
        trace!(file = %self.file_name, %range, %message, "parse recovery");
        self.diagnostics.push(ParseDiagnostic { message, range });
    }

    // -----------------------------------------------------------------------
    // Lookahead
    // -----------------------------------------------------------------------

    /// Index just past the token closing the group opened at `start`.
    ///
    /// Returns `None` when the group is unterminated. Unless `open` is a
    /// brace, braces and semicolons end the search.
    pub(crate) fn skip_balanced(
        &self,
        start: usize,
        open: SyntaxKind,
        close: SyntaxKind,
    ) -> Option<usize> {
        if self.kind_at(start) != open {
            return None;
        }
        let mut depth = 0u32;
        let mut index = start;
        loop {
            let kind = self.kind_at(index);
            if kind == SyntaxKind::EndOfFileToken {
                return None;
            }
            if kind == open {
                depth += 1;
            } else if kind == close {
                depth -= 1;
                if depth == 0 {
                    return Some(index + 1);
                }
            } else if open != SyntaxKind::OpenBraceToken
                && matches!(
                    kind,
                    SyntaxKind::OpenBraceToken
                        | SyntaxKind::CloseBraceToken
                        | SyntaxKind::SemicolonToken
                )
            {
                return None;
            }
            index += 1;
        }
    }

    /// Collect a balanced group as a flat token run, without recursing.
    ///
    /// Used for constructs the parser does not model (attributes, enum
    /// bodies, type parameter lists) and for groups nested past the depth
    /// limit.
    pub(crate) fn parse_opaque_group(
        &mut self,
        kind: SyntaxKind,
        open: SyntaxKind,
        close: SyntaxKind,
    ) -> GreenNode {
        let mut children = vec![self.expect(open).into()];
        let mut depth = 1u32;
        while !self.at_eof() {
            let current = self.kind();
            if current == close {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            } else if current == open {
                depth += 1;
            } else if open != SyntaxKind::OpenBraceToken
                && depth == 1
                && matches!(
                    current,
                    SyntaxKind::OpenBraceToken
                        | SyntaxKind::CloseBraceToken
                        | SyntaxKind::SemicolonToken
                )
            {
                break;
            }
            self.bump_into(&mut children);
        }
        children.push(self.expect(close).into());
        GreenNode::new(kind, children)
    }
}

#[cfg(test)]
#[path = "../tests/parser_tests.rs"]
mod tests;
