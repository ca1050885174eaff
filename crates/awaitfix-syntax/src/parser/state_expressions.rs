//! Expression items.
//!
//! Expressions are not parsed into operator trees. An `Expression` node is a
//! flat run of items: plain tokens, bracketed groups, lambdas, anonymous
//! methods and await expressions. That is enough to find every construct an
//! `await` can be nested in while keeping unknown syntax intact.

use super::ParserState;
use crate::green::{GreenElement, GreenNode, GreenToken};
use crate::kind::SyntaxKind;
use crate::limits::MAX_PARSE_DEPTH;

/// Tokens that end an await operand or an expression-bodied lambda.
pub(crate) const BODY_STOPS: &[SyntaxKind] = &[
    SyntaxKind::SemicolonToken,
    SyntaxKind::CommaToken,
    SyntaxKind::CloseParenToken,
    SyntaxKind::CloseBracketToken,
    SyntaxKind::CloseBraceToken,
];

const PAREN_STOPS: &[SyntaxKind] = &[
    SyntaxKind::CloseParenToken,
    SyntaxKind::SemicolonToken,
    SyntaxKind::CloseBraceToken,
];

const BRACKET_STOPS: &[SyntaxKind] = &[
    SyntaxKind::CloseBracketToken,
    SyntaxKind::SemicolonToken,
    SyntaxKind::CloseBraceToken,
];

impl ParserState {
    /// Parse items into `children` until one of `stops` (or end of file).
    pub(crate) fn parse_items(&mut self, children: &mut Vec<GreenElement>, stops: &[SyntaxKind]) {
        while !self.at_eof() && !stops.contains(&self.kind()) {
            let before = self.pos;
            self.parse_item(children);
            if self.pos == before {
                self.bump_into(children);
            }
        }
    }

    /// An `Expression` node, or `None` when no item precedes the stop.
    pub(crate) fn parse_expression(&mut self, stops: &[SyntaxKind]) -> Option<GreenNode> {
        let mut children = Vec::new();
        self.parse_items(&mut children, stops);
        (!children.is_empty()).then(|| GreenNode::new(SyntaxKind::Expression, children))
    }

    pub(crate) fn parse_item(&mut self, children: &mut Vec<GreenElement>) {
        if self.depth >= MAX_PARSE_DEPTH {
            self.parse_item_flat(children);
            return;
        }
        let item = match self.kind() {
            SyntaxKind::AwaitKeyword => self.parse_await_expression(),
            SyntaxKind::AsyncKeyword if self.nth_kind(1) == SyntaxKind::DelegateKeyword => {
                self.parse_anonymous_method()
            }
            SyntaxKind::AsyncKeyword if self.is_lambda_start(self.pos + 1) => self.parse_lambda(),
            SyntaxKind::DelegateKeyword
                if matches!(
                    self.nth_kind(1),
                    SyntaxKind::OpenParenToken | SyntaxKind::OpenBraceToken
                ) =>
            {
                self.parse_anonymous_method()
            }
            SyntaxKind::OpenParenToken | SyntaxKind::Identifier
                if self.is_lambda_start(self.pos) =>
            {
                self.parse_lambda()
            }
            SyntaxKind::SwitchKeyword if self.nth_kind(1) == SyntaxKind::OpenBraceToken => {
                self.bump_into(children);
                self.parse_switch_arms()
            }
            SyntaxKind::OpenParenToken => self.parse_group(
                SyntaxKind::ParenthesizedGroup,
                SyntaxKind::CloseParenToken,
                PAREN_STOPS,
            ),
            SyntaxKind::OpenBracketToken => self.parse_group(
                SyntaxKind::BracketGroup,
                SyntaxKind::CloseBracketToken,
                BRACKET_STOPS,
            ),
            SyntaxKind::OpenBraceToken => self.parse_group(
                SyntaxKind::BracedGroup,
                SyntaxKind::CloseBraceToken,
                &[SyntaxKind::CloseBraceToken],
            ),
            _ => {
                self.bump_into(children);
                return;
            }
        };
        children.push(item.into());
    }

    /// Past the nesting limit groups are kept as token runs without recursion.
    fn parse_item_flat(&mut self, children: &mut Vec<GreenElement>) {
        let group = match self.kind() {
            SyntaxKind::OpenParenToken => self.parse_opaque_group(
                SyntaxKind::ParenthesizedGroup,
                SyntaxKind::OpenParenToken,
                SyntaxKind::CloseParenToken,
            ),
            SyntaxKind::OpenBracketToken => self.parse_opaque_group(
                SyntaxKind::BracketGroup,
                SyntaxKind::OpenBracketToken,
                SyntaxKind::CloseBracketToken,
            ),
            SyntaxKind::OpenBraceToken => self.parse_opaque_group(
                SyntaxKind::BracedGroup,
                SyntaxKind::OpenBraceToken,
                SyntaxKind::CloseBraceToken,
            ),
            _ => {
                self.bump_into(children);
                return;
            }
        };
        children.push(group.into());
    }

    /// `open items close`, where the items may not run past `stops`.
    pub(crate) fn parse_group(
        &mut self,
        kind: SyntaxKind,
        close: SyntaxKind,
        stops: &[SyntaxKind],
    ) -> GreenNode {
        let mut children = vec![self.bump().into()];
        self.depth += 1;
        self.parse_items(&mut children, stops);
        self.depth -= 1;
        children.push(self.expect(close).into());
        GreenNode::new(kind, children)
    }

    // -----------------------------------------------------------------------
    // Await
    // -----------------------------------------------------------------------

    /// `await operand`. A missing operand is recorded but still yields an
    /// `AwaitExpression` node, so fixes can see the malformed await.
    fn parse_await_expression(&mut self) -> GreenNode {
        let mut children = vec![self.bump().into()];
        self.depth += 1;
        match self.parse_expression(BODY_STOPS) {
            Some(operand) => children.push(operand.into()),
            None => self.error_here("expression expected after 'await'"),
        }
        self.depth -= 1;
        GreenNode::new(SyntaxKind::AwaitExpression, children)
    }

    // -----------------------------------------------------------------------
    // Lambdas and anonymous methods
    // -----------------------------------------------------------------------

    /// Whether a lambda parameter clause starts at `index`: `x =>` or `(...) =>`.
    pub(crate) fn is_lambda_start(&self, index: usize) -> bool {
        match self.kind_at(index) {
            SyntaxKind::Identifier => self.kind_at(index + 1) == SyntaxKind::EqualsGreaterThanToken,
            SyntaxKind::OpenParenToken => self
                .skip_balanced(index, SyntaxKind::OpenParenToken, SyntaxKind::CloseParenToken)
                .is_some_and(|end| self.kind_at(end) == SyntaxKind::EqualsGreaterThanToken),
            _ => false,
        }
    }

    fn parse_lambda(&mut self) -> GreenNode {
        let mut children = Vec::new();
        if self.at(SyntaxKind::AsyncKeyword) {
            self.bump_into(&mut children);
        }
        let kind = if self.at(SyntaxKind::OpenParenToken) {
            children.push(self.parse_parameter_list().into());
            SyntaxKind::ParenthesizedLambdaExpression
        } else {
            let identifier = self.expect(SyntaxKind::Identifier);
            children.push(GreenNode::new(SyntaxKind::Parameter, vec![identifier.into()]).into());
            SyntaxKind::SimpleLambdaExpression
        };
        children.push(self.expect(SyntaxKind::EqualsGreaterThanToken).into());
        self.depth += 1;
        if self.at(SyntaxKind::OpenBraceToken) {
            children.push(self.parse_block().into());
        } else {
            match self.parse_expression(BODY_STOPS) {
                Some(body) => children.push(body.into()),
                None => self.error_here("lambda body expected"),
            }
        }
        self.depth -= 1;
        GreenNode::new(kind, children)
    }

    /// `[async] delegate [(params)] { ... }`.
    fn parse_anonymous_method(&mut self) -> GreenNode {
        let mut children = Vec::new();
        if self.at(SyntaxKind::AsyncKeyword) {
            self.bump_into(&mut children);
        }
        self.bump_into(&mut children);
        if self.at(SyntaxKind::OpenParenToken) {
            children.push(self.parse_parameter_list().into());
        }
        self.depth += 1;
        if self.at(SyntaxKind::OpenBraceToken) {
            children.push(self.parse_block().into());
        } else {
            self.error_here("'{' expected");
            let block = GreenNode::new(
                SyntaxKind::Block,
                vec![
                    GreenToken::missing(SyntaxKind::OpenBraceToken).into(),
                    GreenToken::missing(SyntaxKind::CloseBraceToken).into(),
                ],
            );
            children.push(block.into());
        }
        self.depth -= 1;
        GreenNode::new(SyntaxKind::AnonymousMethodExpression, children)
    }

    // -----------------------------------------------------------------------
    // Switch expressions
    // -----------------------------------------------------------------------

    /// `{ pattern => value, ... }` after `switch`. Arm patterns are kept as
    /// plain tokens and groups so `Name => value` is not taken for a lambda.
    fn parse_switch_arms(&mut self) -> GreenNode {
        let mut children = vec![self.bump().into()];
        self.depth += 1;
        while !self.at(SyntaxKind::CloseBraceToken) && !self.at_eof() {
            while !matches!(
                self.kind(),
                SyntaxKind::EqualsGreaterThanToken
                    | SyntaxKind::CommaToken
                    | SyntaxKind::CloseBraceToken
                    | SyntaxKind::EndOfFileToken
            ) {
                let group = match self.kind() {
                    SyntaxKind::OpenParenToken => self.parse_group(
                        SyntaxKind::ParenthesizedGroup,
                        SyntaxKind::CloseParenToken,
                        PAREN_STOPS,
                    ),
                    SyntaxKind::OpenBracketToken => self.parse_group(
                        SyntaxKind::BracketGroup,
                        SyntaxKind::CloseBracketToken,
                        BRACKET_STOPS,
                    ),
                    SyntaxKind::OpenBraceToken => self.parse_group(
                        SyntaxKind::BracedGroup,
                        SyntaxKind::CloseBraceToken,
                        &[SyntaxKind::CloseBraceToken],
                    ),
                    _ => {
                        self.bump_into(&mut children);
                        continue;
                    }
                };
                children.push(group.into());
            }
            if self.at(SyntaxKind::EqualsGreaterThanToken) {
                self.bump_into(&mut children);
                self.parse_items(
                    &mut children,
                    &[SyntaxKind::CommaToken, SyntaxKind::CloseBraceToken],
                );
            }
            if self.at(SyntaxKind::CommaToken) {
                self.bump_into(&mut children);
            }
        }
        self.depth -= 1;
        children.push(self.expect(SyntaxKind::CloseBraceToken).into());
        GreenNode::new(SyntaxKind::BracedGroup, children)
    }
}
