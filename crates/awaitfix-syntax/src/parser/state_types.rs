//! Type lookahead and type nodes.
//!
//! `scan_*` functions are speculative: they only look at tokens and return
//! the index just past a well-formed type. `parse_*` functions consume the
//! tokens and build nodes; callers run them after a successful scan.

use super::ParserState;
use crate::green::{GreenElement, GreenNode};
use crate::kind::SyntaxKind;
use crate::limits::MAX_TYPE_SCAN_DEPTH;

impl ParserState {
    // -----------------------------------------------------------------------
    // Lookahead
    // -----------------------------------------------------------------------

    pub(crate) fn scan_type(&self, start: usize, depth: u32) -> Option<usize> {
        if depth > MAX_TYPE_SCAN_DEPTH {
            return None;
        }
        let mut index = match self.kind_at(start) {
            SyntaxKind::VoidKeyword => start + 1,
            SyntaxKind::OpenParenToken => self.scan_tuple_type(start, depth)?,
            SyntaxKind::Identifier => self.scan_name(start, depth)?,
            _ => return None,
        };
        loop {
            match self.kind_at(index) {
                SyntaxKind::QuestionToken | SyntaxKind::AsteriskToken => index += 1,
                SyntaxKind::OpenBracketToken => match self.scan_rank_specifier(index) {
                    Some(end) => index = end,
                    None => break,
                },
                _ => break,
            }
        }
        Some(index)
    }

    fn scan_name(&self, start: usize, depth: u32) -> Option<usize> {
        let mut index = self.scan_simple_name(start, depth)?;
        while matches!(
            self.kind_at(index),
            SyntaxKind::DotToken | SyntaxKind::ColonColonToken
        ) && self.kind_at(index + 1) == SyntaxKind::Identifier
        {
            index = self.scan_simple_name(index + 1, depth)?;
        }
        Some(index)
    }

    pub(crate) fn scan_simple_name(&self, start: usize, depth: u32) -> Option<usize> {
        if self.kind_at(start) != SyntaxKind::Identifier {
            return None;
        }
        let index = start + 1;
        if self.kind_at(index) == SyntaxKind::LessThanToken {
            if let Some(end) = self.scan_type_argument_list(index, depth) {
                return Some(end);
            }
        }
        Some(index)
    }

    /// `<T, U>`, including the unbound forms `<>` and `<,>`.
    pub(crate) fn scan_type_argument_list(&self, start: usize, depth: u32) -> Option<usize> {
        let mut index = start + 1;
        while self.kind_at(index) == SyntaxKind::CommaToken {
            index += 1;
        }
        if self.kind_at(index) == SyntaxKind::GreaterThanToken {
            return Some(index + 1);
        }
        loop {
            index = self.scan_type(index, depth + 1)?;
            match self.kind_at(index) {
                SyntaxKind::CommaToken => index += 1,
                SyntaxKind::GreaterThanToken => return Some(index + 1),
                _ => return None,
            }
        }
    }

    /// `(int, string name)`.
    fn scan_tuple_type(&self, start: usize, depth: u32) -> Option<usize> {
        let mut index = start + 1;
        let mut elements = 0;
        loop {
            index = self.scan_type(index, depth + 1)?;
            if self.kind_at(index) == SyntaxKind::Identifier {
                index += 1;
            }
            elements += 1;
            match self.kind_at(index) {
                SyntaxKind::CommaToken => index += 1,
                SyntaxKind::CloseParenToken if elements > 1 => return Some(index + 1),
                _ => return None,
            }
        }
    }

    /// `[]`, `[,]`, ...
    pub(crate) fn scan_rank_specifier(&self, start: usize) -> Option<usize> {
        let mut index = start + 1;
        while self.kind_at(index) == SyntaxKind::CommaToken {
            index += 1;
        }
        (self.kind_at(index) == SyntaxKind::CloseBracketToken).then_some(index + 1)
    }

    // -----------------------------------------------------------------------
    // Node construction
    // -----------------------------------------------------------------------

    pub(crate) fn parse_type(&mut self) -> GreenNode {
        let mut ty = match self.kind() {
            SyntaxKind::VoidKeyword => {
                GreenNode::new(SyntaxKind::PredefinedType, vec![self.bump().into()])
            }
            SyntaxKind::OpenParenToken => self.parse_tuple_type(),
            _ => self.parse_name(),
        };
        loop {
            ty = match self.kind() {
                SyntaxKind::QuestionToken => {
                    GreenNode::new(SyntaxKind::NullableType, vec![ty.into(), self.bump().into()])
                }
                SyntaxKind::AsteriskToken => {
                    GreenNode::new(SyntaxKind::PointerType, vec![ty.into(), self.bump().into()])
                }
                SyntaxKind::OpenBracketToken if self.scan_rank_specifier(self.pos).is_some() => {
                    let mut rank = vec![self.bump().into()];
                    while self.at(SyntaxKind::CommaToken) {
                        self.bump_into(&mut rank);
                    }
                    rank.push(self.expect(SyntaxKind::CloseBracketToken).into());
                    let rank = GreenNode::new(SyntaxKind::ArrayRankSpecifier, rank);
                    GreenNode::new(SyntaxKind::ArrayType, vec![ty.into(), rank.into()])
                }
                _ => return ty,
            };
        }
    }

    /// Dotted or alias-qualified name, left associative.
    pub(crate) fn parse_name(&mut self) -> GreenNode {
        let mut name = self.parse_simple_name();
        while matches!(
            self.kind(),
            SyntaxKind::DotToken | SyntaxKind::ColonColonToken
        ) && self.nth_kind(1) == SyntaxKind::Identifier
        {
            let kind = if self.at(SyntaxKind::ColonColonToken) {
                SyntaxKind::AliasQualifiedName
            } else {
                SyntaxKind::QualifiedName
            };
            let separator = self.bump();
            let right = self.parse_simple_name();
            name = GreenNode::new(kind, vec![name.into(), separator.into(), right.into()]);
        }
        name
    }

    pub(crate) fn parse_simple_name(&mut self) -> GreenNode {
        let identifier = self.expect(SyntaxKind::Identifier);
        if self.at(SyntaxKind::LessThanToken) && self.scan_type_argument_list(self.pos, 0).is_some()
        {
            let arguments = self.parse_type_argument_list();
            return GreenNode::new(
                SyntaxKind::GenericName,
                vec![identifier.into(), arguments.into()],
            );
        }
        GreenNode::new(SyntaxKind::IdentifierName, vec![identifier.into()])
    }

    fn parse_type_argument_list(&mut self) -> GreenNode {
        let mut children: Vec<GreenElement> = vec![self.bump().into()];
        while !self.at(SyntaxKind::GreaterThanToken) && !self.at_eof() {
            if self.at(SyntaxKind::CommaToken) {
                self.bump_into(&mut children);
                continue;
            }
            let before = self.pos;
            children.push(self.parse_type().into());
            if self.pos == before {
                self.bump_into(&mut children);
            }
        }
        children.push(self.expect(SyntaxKind::GreaterThanToken).into());
        GreenNode::new(SyntaxKind::TypeArgumentList, children)
    }

    fn parse_tuple_type(&mut self) -> GreenNode {
        let mut children: Vec<GreenElement> = vec![self.bump().into()];
        while !self.at(SyntaxKind::CloseParenToken) && !self.at_eof() {
            match self.kind() {
                SyntaxKind::CommaToken | SyntaxKind::Identifier
                    if self.at(SyntaxKind::CommaToken) || self.scan_type(self.pos, 0).is_none() =>
                {
                    self.bump_into(&mut children);
                }
                _ => {
                    let before = self.pos;
                    children.push(self.parse_type().into());
                    if self.at(SyntaxKind::Identifier) {
                        self.bump_into(&mut children);
                    }
                    if self.pos == before {
                        self.bump_into(&mut children);
                    }
                }
            }
        }
        children.push(self.expect(SyntaxKind::CloseParenToken).into());
        GreenNode::new(SyntaxKind::TupleType, children)
    }
}
