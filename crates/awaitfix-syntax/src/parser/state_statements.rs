//! Blocks, statements and local functions.

use super::ParserState;
use crate::green::{GreenElement, GreenNode};
use crate::kind::SyntaxKind;
use crate::limits::MAX_PARSE_DEPTH;

const LABEL_STOPS: &[SyntaxKind] = &[
    SyntaxKind::ColonToken,
    SyntaxKind::SemicolonToken,
    SyntaxKind::CloseBraceToken,
];

impl ParserState {
    pub(crate) fn parse_block(&mut self) -> GreenNode {
        if self.depth >= MAX_PARSE_DEPTH {
            return self.parse_opaque_group(
                SyntaxKind::Block,
                SyntaxKind::OpenBraceToken,
                SyntaxKind::CloseBraceToken,
            );
        }
        let mut children = vec![self.expect(SyntaxKind::OpenBraceToken).into()];
        self.depth += 1;
        while !self.at(SyntaxKind::CloseBraceToken) && !self.at_eof() {
            let before = self.pos;
            children.push(self.parse_statement().into());
            if self.pos == before {
                self.bump_into(&mut children);
            }
        }
        self.depth -= 1;
        children.push(self.expect(SyntaxKind::CloseBraceToken).into());
        GreenNode::new(SyntaxKind::Block, children)
    }

    /// Must not be called at `}` or end of file.
    pub(crate) fn parse_statement(&mut self) -> GreenNode {
        if self.depth >= MAX_PARSE_DEPTH {
            return self.parse_expression_statement();
        }
        match self.kind() {
            SyntaxKind::OpenBraceToken => self.parse_block(),
            SyntaxKind::SemicolonToken => {
                GreenNode::new(SyntaxKind::EmptyStatement, vec![self.bump().into()])
            }
            SyntaxKind::IfKeyword
            | SyntaxKind::WhileKeyword
            | SyntaxKind::ForKeyword
            | SyntaxKind::ForeachKeyword
            | SyntaxKind::SwitchKeyword
            | SyntaxKind::LockKeyword
            | SyntaxKind::FixedKeyword
            | SyntaxKind::CatchKeyword
            | SyntaxKind::ElseKeyword
            | SyntaxKind::DoKeyword
            | SyntaxKind::TryKeyword
            | SyntaxKind::FinallyKeyword => self.parse_control_statement(),
            SyntaxKind::UsingKeyword if self.nth_kind(1) == SyntaxKind::OpenParenToken => {
                self.parse_control_statement()
            }
            // `await foreach (...)` and `await using (...)`; `await using var`
            // stays a declaration statement.
            SyntaxKind::AwaitKeyword
                if self.nth_kind(1) == SyntaxKind::ForeachKeyword
                    || (self.nth_kind(1) == SyntaxKind::UsingKeyword
                        && self.nth_kind(2) == SyntaxKind::OpenParenToken) =>
            {
                self.parse_control_statement()
            }
            SyntaxKind::Identifier if self.is_label_start() => self.parse_labeled_statement(),
            SyntaxKind::UnsafeKeyword | SyntaxKind::CheckedKeyword | SyntaxKind::UncheckedKeyword
                if self.nth_kind(1) == SyntaxKind::OpenBraceToken =>
            {
                self.parse_control_statement()
            }
            _ if self.is_local_function_start() => self.parse_local_function(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `[await] keyword [(header)] [when (filter)] statement`.
    fn parse_control_statement(&mut self) -> GreenNode {
        let mut children: Vec<GreenElement> = Vec::new();
        if self.at(SyntaxKind::AwaitKeyword) {
            self.bump_into(&mut children);
        }
        self.bump_into(&mut children);
        if self.at(SyntaxKind::OpenParenToken) {
            // `for` headers contain semicolons.
            let header = self.parse_group(
                SyntaxKind::ParenthesizedGroup,
                SyntaxKind::CloseParenToken,
                &[SyntaxKind::CloseParenToken, SyntaxKind::CloseBraceToken],
            );
            children.push(header.into());
        }
        if self.at_contextual("when") && self.nth_kind(1) == SyntaxKind::OpenParenToken {
            self.bump_into(&mut children);
            let filter = self.parse_group(
                SyntaxKind::ParenthesizedGroup,
                SyntaxKind::CloseParenToken,
                &[SyntaxKind::CloseParenToken, SyntaxKind::CloseBraceToken],
            );
            children.push(filter.into());
        }
        if !self.at(SyntaxKind::CloseBraceToken) && !self.at_eof() {
            self.depth += 1;
            children.push(self.parse_statement().into());
            self.depth -= 1;
        }
        GreenNode::new(SyntaxKind::ControlStatement, children)
    }

    /// `case` labels, and `default:` or `name:` (an identifier directly
    /// followed by a colon).
    fn is_label_start(&self) -> bool {
        self.at_contextual("case") || self.nth_kind(1) == SyntaxKind::ColonToken
    }

    /// A switch or goto label and the statement it prefixes. Consecutive
    /// labels nest.
    fn parse_labeled_statement(&mut self) -> GreenNode {
        let mut children: Vec<GreenElement> = vec![self.bump().into()];
        // `case` pattern, with its `when` clause.
        self.parse_items(&mut children, LABEL_STOPS);
        children.push(self.expect(SyntaxKind::ColonToken).into());
        if !self.at(SyntaxKind::CloseBraceToken) && !self.at_eof() {
            self.depth += 1;
            children.push(self.parse_statement().into());
            self.depth -= 1;
        }
        GreenNode::new(SyntaxKind::LabeledStatement, children)
    }

    fn parse_expression_statement(&mut self) -> GreenNode {
        let mut children = Vec::new();
        self.parse_items(
            &mut children,
            &[SyntaxKind::SemicolonToken, SyntaxKind::CloseBraceToken],
        );
        if self.at(SyntaxKind::SemicolonToken) {
            self.bump_into(&mut children);
        } else if children.is_empty() && !self.at_eof() {
            self.bump_into(&mut children);
        }
        GreenNode::new(SyntaxKind::ExpressionStatement, children)
    }

    // -----------------------------------------------------------------------
    // Local functions
    // -----------------------------------------------------------------------

    /// `[attributes] [modifiers] Type Name[<T>](...)` followed by a body or
    /// `where`.
    fn is_local_function_start(&self) -> bool {
        let mut index = self.pos;
        while self.kind_at(index) == SyntaxKind::OpenBracketToken {
            match self.skip_balanced(
                index,
                SyntaxKind::OpenBracketToken,
                SyntaxKind::CloseBracketToken,
            ) {
                Some(end) => index = end,
                None => return false,
            }
        }
        while self.kind_at(index).is_local_function_modifier() {
            index += 1;
        }
        let Some(end) = self.scan_type(index, 0) else {
            return false;
        };
        if self.kind_at(end) != SyntaxKind::Identifier {
            return false;
        }
        let mut index = end + 1;
        if self.kind_at(index) == SyntaxKind::LessThanToken {
            match self.skip_balanced(index, SyntaxKind::LessThanToken, SyntaxKind::GreaterThanToken)
            {
                Some(end) => index = end,
                None => return false,
            }
        }
        let Some(end) = self.skip_balanced(
            index,
            SyntaxKind::OpenParenToken,
            SyntaxKind::CloseParenToken,
        ) else {
            return false;
        };
        matches!(
            self.kind_at(end),
            SyntaxKind::OpenBraceToken | SyntaxKind::EqualsGreaterThanToken
        ) || self.is_contextual_at(end, "where")
    }

    fn parse_local_function(&mut self) -> GreenNode {
        let mut children: Vec<GreenElement> = Vec::new();
        while self.at(SyntaxKind::OpenBracketToken) {
            children.push(self.parse_attribute_list().into());
        }
        let mut modifiers = Vec::new();
        while self.kind().is_local_function_modifier() {
            self.bump_into(&mut modifiers);
        }
        children.push(GreenNode::new(SyntaxKind::ModifierList, modifiers).into());
        children.push(self.parse_type().into());
        children.push(self.expect(SyntaxKind::Identifier).into());
        self.parse_function_rest(&mut children);
        GreenNode::new(SyntaxKind::LocalFunctionStatement, children)
    }
}
