//! Source file, namespaces, type declarations and members.

use super::ParserState;
use crate::green::{GreenElement, GreenNode, GreenToken};
use crate::kind::SyntaxKind;

const HEADER_STOPS: &[SyntaxKind] = &[
    SyntaxKind::OpenBraceToken,
    SyntaxKind::SemicolonToken,
    SyntaxKind::CloseBraceToken,
];

const STATEMENT_STOPS: &[SyntaxKind] = &[SyntaxKind::SemicolonToken, SyntaxKind::CloseBraceToken];

const PARAMETER_STOPS: &[SyntaxKind] = &[
    SyntaxKind::CommaToken,
    SyntaxKind::CloseParenToken,
    SyntaxKind::SemicolonToken,
    SyntaxKind::OpenBraceToken,
    SyntaxKind::CloseBraceToken,
];

impl ParserState {
    /// Parse the whole token stream into a `SourceFile` node.
    ///
    /// The end-of-file token is the last child, so the file's trailing
    /// trivia survives printing.
    pub fn parse_source_file(&mut self) -> GreenNode {
        let mut children = Vec::new();
        self.parse_members(&mut children, false);
        children.push(self.bump().into());
        GreenNode::new(SyntaxKind::SourceFile, children)
    }

    /// Members until end of file, or until `}` when `in_braces`. Outside
    /// braces a stray `}` is kept as an incomplete member.
    fn parse_members(&mut self, children: &mut Vec<GreenElement>, in_braces: bool) {
        while !self.at_eof() {
            if self.at(SyntaxKind::CloseBraceToken) {
                if in_braces {
                    return;
                }
                self.error_here("unexpected '}'");
                let stray = self.bump();
                children.push(GreenNode::new(SyntaxKind::IncompleteMember, vec![stray.into()]).into());
                continue;
            }
            let before = self.pos;
            children.push(self.parse_member().into());
            if self.pos == before {
                let stray = self.bump();
                children.push(GreenNode::new(SyntaxKind::IncompleteMember, vec![stray.into()]).into());
            }
        }
    }

    fn parse_member(&mut self) -> GreenNode {
        if self.at(SyntaxKind::UsingKeyword)
            || (self.at_contextual("global") && self.nth_kind(1) == SyntaxKind::UsingKeyword)
        {
            return self.parse_using_directive();
        }

        let mut children: Vec<GreenElement> = Vec::new();
        while self.at(SyntaxKind::OpenBracketToken) {
            children.push(self.parse_attribute_list().into());
        }
        let mut modifiers = Vec::new();
        while self.kind().is_modifier() {
            self.bump_into(&mut modifiers);
        }
        children.push(GreenNode::new(SyntaxKind::ModifierList, modifiers).into());

        match self.kind() {
            SyntaxKind::NamespaceKeyword => self.parse_namespace(children),
            SyntaxKind::ClassKeyword | SyntaxKind::StructKeyword | SyntaxKind::InterfaceKeyword => {
                self.parse_type_declaration(children)
            }
            SyntaxKind::Identifier
                if self.at_contextual("record")
                    && matches!(
                        self.nth_kind(1),
                        SyntaxKind::Identifier | SyntaxKind::ClassKeyword | SyntaxKind::StructKeyword
                    ) =>
            {
                self.parse_type_declaration(children)
            }
            SyntaxKind::EnumKeyword => self.parse_enum(children),
            SyntaxKind::DelegateKeyword => {
                self.bump_into(&mut children);
                self.parse_items(&mut children, STATEMENT_STOPS);
                children.push(self.expect(SyntaxKind::SemicolonToken).into());
                GreenNode::new(SyntaxKind::DelegateDeclaration, children)
            }
            SyntaxKind::TildeToken => self.parse_constructor(children),
            SyntaxKind::Identifier if self.nth_kind(1) == SyntaxKind::OpenParenToken => {
                self.parse_constructor(children)
            }
            SyntaxKind::ImplicitKeyword | SyntaxKind::ExplicitKeyword => {
                self.parse_operator_rest(children)
            }
            SyntaxKind::EventKeyword => {
                self.bump_into(&mut children);
                self.parse_typed_member(children)
            }
            _ => self.parse_typed_member(children),
        }
    }

    pub(crate) fn parse_attribute_list(&mut self) -> GreenNode {
        self.parse_opaque_group(
            SyntaxKind::AttributeList,
            SyntaxKind::OpenBracketToken,
            SyntaxKind::CloseBracketToken,
        )
    }

    /// `[global] using [static] [Alias =] Name;`
    fn parse_using_directive(&mut self) -> GreenNode {
        let mut children = Vec::new();
        if self.at_contextual("global") {
            self.bump_into(&mut children);
        }
        self.bump_into(&mut children);
        if self.at(SyntaxKind::StaticKeyword) {
            self.bump_into(&mut children);
        }
        if self.at(SyntaxKind::Identifier) && self.nth_kind(1) == SyntaxKind::EqualsToken {
            self.bump_into(&mut children);
            self.bump_into(&mut children);
        }
        if self.at(SyntaxKind::Identifier) {
            children.push(self.parse_name().into());
        }
        self.parse_items(&mut children, STATEMENT_STOPS);
        children.push(self.expect(SyntaxKind::SemicolonToken).into());
        GreenNode::new(SyntaxKind::UsingDirective, children)
    }

    /// Block-bodied or file-scoped namespace.
    fn parse_namespace(&mut self, mut children: Vec<GreenElement>) -> GreenNode {
        self.bump_into(&mut children);
        if self.at(SyntaxKind::Identifier) {
            children.push(self.parse_name().into());
        } else {
            children.push(self.expect(SyntaxKind::Identifier).into());
        }
        if self.at(SyntaxKind::OpenBraceToken) {
            self.bump_into(&mut children);
            self.parse_members(&mut children, true);
            children.push(self.expect(SyntaxKind::CloseBraceToken).into());
            if self.at(SyntaxKind::SemicolonToken) {
                self.bump_into(&mut children);
            }
        } else {
            children.push(self.expect(SyntaxKind::SemicolonToken).into());
            self.parse_members(&mut children, false);
        }
        GreenNode::new(SyntaxKind::NamespaceDeclaration, children)
    }

    /// `class`, `struct`, `interface`, `record [class|struct]`.
    fn parse_type_declaration(&mut self, mut children: Vec<GreenElement>) -> GreenNode {
        if self.at_contextual("record") {
            self.bump_into(&mut children);
            if matches!(
                self.kind(),
                SyntaxKind::ClassKeyword | SyntaxKind::StructKeyword
            ) {
                self.bump_into(&mut children);
            }
        } else {
            self.bump_into(&mut children);
        }
        self.parse_items(&mut children, HEADER_STOPS);
        if self.at(SyntaxKind::OpenBraceToken) {
            self.bump_into(&mut children);
            self.parse_members(&mut children, true);
            children.push(self.expect(SyntaxKind::CloseBraceToken).into());
            if self.at(SyntaxKind::SemicolonToken) {
                self.bump_into(&mut children);
            }
        } else {
            children.push(self.expect(SyntaxKind::SemicolonToken).into());
        }
        GreenNode::new(SyntaxKind::TypeDeclaration, children)
    }

    fn parse_enum(&mut self, mut children: Vec<GreenElement>) -> GreenNode {
        self.bump_into(&mut children);
        self.parse_items(&mut children, HEADER_STOPS);
        if self.at(SyntaxKind::OpenBraceToken) {
            let body = self.parse_opaque_group(
                SyntaxKind::BracedGroup,
                SyntaxKind::OpenBraceToken,
                SyntaxKind::CloseBraceToken,
            );
            children.push(body.into());
            if self.at(SyntaxKind::SemicolonToken) {
                self.bump_into(&mut children);
            }
        } else {
            children.push(self.expect(SyntaxKind::SemicolonToken).into());
        }
        GreenNode::new(SyntaxKind::EnumDeclaration, children)
    }

    /// Constructors and destructors: `Name(...)`, `~Name()`.
    fn parse_constructor(&mut self, mut children: Vec<GreenElement>) -> GreenNode {
        if self.at(SyntaxKind::TildeToken) {
            self.bump_into(&mut children);
        }
        children.push(self.expect(SyntaxKind::Identifier).into());
        children.push(self.parse_parameter_list().into());
        if self.at(SyntaxKind::ColonToken) {
            let mut initializer = vec![self.bump().into()];
            self.parse_items(
                &mut initializer,
                &[
                    SyntaxKind::OpenBraceToken,
                    SyntaxKind::EqualsGreaterThanToken,
                    SyntaxKind::SemicolonToken,
                    SyntaxKind::CloseBraceToken,
                ],
            );
            children.push(GreenNode::new(SyntaxKind::ConstructorInitializer, initializer).into());
        }
        self.parse_body(&mut children);
        GreenNode::new(SyntaxKind::ConstructorDeclaration, children)
    }

    /// Everything after the return type of a user-defined operator, or after
    /// the modifiers of a conversion operator.
    fn parse_operator_rest(&mut self, mut children: Vec<GreenElement>) -> GreenNode {
        while !matches!(
            self.kind(),
            SyntaxKind::OpenParenToken
                | SyntaxKind::OpenBraceToken
                | SyntaxKind::SemicolonToken
                | SyntaxKind::CloseBraceToken
                | SyntaxKind::EndOfFileToken
        ) {
            self.bump_into(&mut children);
        }
        if self.at(SyntaxKind::OpenParenToken) {
            children.push(self.parse_parameter_list().into());
        }
        self.parse_body(&mut children);
        GreenNode::new(SyntaxKind::OperatorDeclaration, children)
    }

    /// Members that start with a type: methods, properties, indexers,
    /// operators and fields.
    fn parse_typed_member(&mut self, mut children: Vec<GreenElement>) -> GreenNode {
        if self.scan_type(self.pos, 0).is_none() {
            return self.parse_incomplete_member(children);
        }
        children.push(self.parse_type().into());
        if self.at(SyntaxKind::OperatorKeyword) {
            return self.parse_operator_rest(children);
        }
        if let Some(specifier) = self.parse_explicit_interface_specifier() {
            children.push(specifier.into());
        }
        match self.kind() {
            SyntaxKind::ThisKeyword => {
                self.bump_into(&mut children);
                if self.at(SyntaxKind::OpenBracketToken) {
                    let parameters = self.parse_opaque_group(
                        SyntaxKind::BracketGroup,
                        SyntaxKind::OpenBracketToken,
                        SyntaxKind::CloseBracketToken,
                    );
                    children.push(parameters.into());
                }
                self.parse_property_rest(&mut children);
                GreenNode::new(SyntaxKind::PropertyDeclaration, children)
            }
            SyntaxKind::OperatorKeyword => self.parse_operator_rest(children),
            SyntaxKind::Identifier => match self.nth_kind(1) {
                SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken => {
                    self.bump_into(&mut children);
                    self.parse_function_rest(&mut children);
                    GreenNode::new(SyntaxKind::MethodDeclaration, children)
                }
                SyntaxKind::OpenBraceToken | SyntaxKind::EqualsGreaterThanToken => {
                    self.bump_into(&mut children);
                    self.parse_property_rest(&mut children);
                    GreenNode::new(SyntaxKind::PropertyDeclaration, children)
                }
                _ => self.parse_field(children),
            },
            _ => self.parse_incomplete_member(children),
        }
    }

    /// `IFoo.` or `IFoo<T>.` in front of an explicitly implemented member.
    fn parse_explicit_interface_specifier(&mut self) -> Option<GreenNode> {
        let mut children = Vec::new();
        while self.at(SyntaxKind::Identifier) {
            let Some(end) = self.scan_simple_name(self.pos, 0) else {
                break;
            };
            if self.kind_at(end) != SyntaxKind::DotToken
                || !matches!(
                    self.kind_at(end + 1),
                    SyntaxKind::Identifier | SyntaxKind::ThisKeyword | SyntaxKind::OperatorKeyword
                )
            {
                break;
            }
            children.push(self.parse_simple_name().into());
            self.bump_into(&mut children);
        }
        (!children.is_empty())
            .then(|| GreenNode::new(SyntaxKind::ExplicitInterfaceSpecifier, children))
    }

    fn parse_field(&mut self, mut children: Vec<GreenElement>) -> GreenNode {
        let mut declarator = vec![self.bump().into()];
        if self.at(SyntaxKind::EqualsToken) {
            let mut clause = vec![self.bump().into()];
            self.depth += 1;
            match self.parse_expression(STATEMENT_STOPS) {
                Some(value) => clause.push(value.into()),
                None => self.error_here("expression expected"),
            }
            self.depth -= 1;
            declarator.push(GreenNode::new(SyntaxKind::EqualsValueClause, clause).into());
        }
        children.push(GreenNode::new(SyntaxKind::VariableDeclarator, declarator).into());
        self.parse_items(&mut children, STATEMENT_STOPS);
        children.push(self.expect(SyntaxKind::SemicolonToken).into());
        GreenNode::new(SyntaxKind::FieldDeclaration, children)
    }

    fn parse_incomplete_member(&mut self, mut children: Vec<GreenElement>) -> GreenNode {
        self.parse_items(&mut children, STATEMENT_STOPS);
        if self.at(SyntaxKind::SemicolonToken) {
            self.bump_into(&mut children);
        }
        GreenNode::new(SyntaxKind::IncompleteMember, children)
    }

    // -----------------------------------------------------------------------
    // Properties
    // -----------------------------------------------------------------------

    /// Accessor list with an optional initializer, or an expression body.
    fn parse_property_rest(&mut self, children: &mut Vec<GreenElement>) {
        if self.at(SyntaxKind::EqualsGreaterThanToken) {
            children.push(self.parse_arrow_expression_clause().into());
            children.push(self.expect(SyntaxKind::SemicolonToken).into());
            return;
        }
        if !self.at(SyntaxKind::OpenBraceToken) {
            self.error_here("'{' expected");
            return;
        }
        let mut accessors = vec![self.bump().into()];
        self.depth += 1;
        while !self.at(SyntaxKind::CloseBraceToken) && !self.at_eof() {
            let before = self.pos;
            accessors.push(self.parse_accessor().into());
            if self.pos == before {
                self.bump_into(&mut accessors);
            }
        }
        self.depth -= 1;
        accessors.push(self.expect(SyntaxKind::CloseBraceToken).into());
        children.push(GreenNode::new(SyntaxKind::AccessorList, accessors).into());

        if self.at(SyntaxKind::EqualsToken) {
            let mut clause = vec![self.bump().into()];
            if let Some(value) = self.parse_expression(STATEMENT_STOPS) {
                clause.push(value.into());
            }
            children.push(GreenNode::new(SyntaxKind::EqualsValueClause, clause).into());
            children.push(self.expect(SyntaxKind::SemicolonToken).into());
        }
    }

    /// `[attributes] [modifiers] get|set|init|add|remove body`.
    fn parse_accessor(&mut self) -> GreenNode {
        let mut children: Vec<GreenElement> = Vec::new();
        while self.at(SyntaxKind::OpenBracketToken) {
            children.push(self.parse_attribute_list().into());
        }
        let mut modifiers = Vec::new();
        while self.kind().is_modifier() {
            self.bump_into(&mut modifiers);
        }
        children.push(GreenNode::new(SyntaxKind::ModifierList, modifiers).into());
        if self.at(SyntaxKind::Identifier) {
            self.bump_into(&mut children);
        } else {
            self.error_here("accessor expected");
        }
        self.parse_body(&mut children);
        GreenNode::new(SyntaxKind::AccessorDeclaration, children)
    }

    // -----------------------------------------------------------------------
    // Signatures and bodies
    // -----------------------------------------------------------------------

    /// Type parameters, parameters, constraints and body of a method or
    /// local function, after its name.
    pub(crate) fn parse_function_rest(&mut self, children: &mut Vec<GreenElement>) {
        if self.at(SyntaxKind::LessThanToken) {
            let type_parameters = self.parse_opaque_group(
                SyntaxKind::TypeParameterList,
                SyntaxKind::LessThanToken,
                SyntaxKind::GreaterThanToken,
            );
            children.push(type_parameters.into());
        }
        children.push(self.parse_parameter_list().into());
        if self.at_contextual("where") {
            let mut constraints = Vec::new();
            while !matches!(
                self.kind(),
                SyntaxKind::OpenBraceToken
                    | SyntaxKind::EqualsGreaterThanToken
                    | SyntaxKind::SemicolonToken
                    | SyntaxKind::CloseBraceToken
                    | SyntaxKind::EndOfFileToken
            ) {
                self.bump_into(&mut constraints);
            }
            children.push(GreenNode::new(SyntaxKind::ConstraintClauses, constraints).into());
        }
        self.parse_body(children);
    }

    /// `(parameter, ...)`. Missing parentheses produce an empty list made of
    /// missing tokens.
    pub(crate) fn parse_parameter_list(&mut self) -> GreenNode {
        if !self.at(SyntaxKind::OpenParenToken) {
            self.error_here("'(' expected");
            return GreenNode::new(
                SyntaxKind::ParameterList,
                vec![
                    GreenToken::missing(SyntaxKind::OpenParenToken).into(),
                    GreenToken::missing(SyntaxKind::CloseParenToken).into(),
                ],
            );
        }
        let mut children: Vec<GreenElement> = vec![self.bump().into()];
        self.depth += 1;
        loop {
            match self.kind() {
                SyntaxKind::CloseParenToken
                | SyntaxKind::SemicolonToken
                | SyntaxKind::OpenBraceToken
                | SyntaxKind::CloseBraceToken
                | SyntaxKind::EndOfFileToken => break,
                SyntaxKind::CommaToken => self.bump_into(&mut children),
                _ => children.push(self.parse_parameter().into()),
            }
        }
        self.depth -= 1;
        children.push(self.expect(SyntaxKind::CloseParenToken).into());
        GreenNode::new(SyntaxKind::ParameterList, children)
    }

    fn parse_parameter(&mut self) -> GreenNode {
        let mut children = Vec::new();
        while !self.at_eof() && !PARAMETER_STOPS.contains(&self.kind()) {
            // Type argument lists hold commas that do not separate parameters.
            if self.at(SyntaxKind::LessThanToken) {
                if let Some(end) = self.scan_type_argument_list(self.pos, 0) {
                    while self.pos < end {
                        self.bump_into(&mut children);
                    }
                    continue;
                }
            }
            let before = self.pos;
            self.parse_item(&mut children);
            if self.pos == before {
                self.bump_into(&mut children);
            }
        }
        GreenNode::new(SyntaxKind::Parameter, children)
    }

    /// Block, `=> expression;`, or a bare `;`.
    pub(crate) fn parse_body(&mut self, children: &mut Vec<GreenElement>) {
        match self.kind() {
            SyntaxKind::OpenBraceToken => children.push(self.parse_block().into()),
            SyntaxKind::EqualsGreaterThanToken => {
                children.push(self.parse_arrow_expression_clause().into());
                children.push(self.expect(SyntaxKind::SemicolonToken).into());
            }
            SyntaxKind::SemicolonToken => self.bump_into(children),
            _ => self.error_here("'{' or ';' expected"),
        }
    }

    fn parse_arrow_expression_clause(&mut self) -> GreenNode {
        let mut children = vec![self.bump().into()];
        self.depth += 1;
        match self.parse_expression(STATEMENT_STOPS) {
            Some(body) => children.push(body.into()),
            None => self.error_here("expression expected"),
        }
        self.depth -= 1;
        GreenNode::new(SyntaxKind::ArrowExpressionClause, children)
    }
}
