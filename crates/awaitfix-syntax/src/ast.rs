//! Typed views over syntax nodes.
//!
//! Each view wraps a `SyntaxNode` of one kind and exposes its parts as
//! `Option`s: the parser recovers from errors, so any part may be absent.

use crate::kind::SyntaxKind;
use crate::node::{SyntaxNode, SyntaxToken};

pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;

    fn cast(node: SyntaxNode) -> Option<Self>;

    fn syntax(&self) -> &SyntaxNode;
}

macro_rules! ast_node {
    ($(#[$meta:meta])* $name:ident, $kind:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                Self::can_cast(node.kind()).then(|| Self(node))
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

/// Concatenated token text of `node`, without any trivia.
///
/// `System . Threading.Tasks` and `System.Threading.Tasks` produce the same
/// string, which is what name comparisons want.
pub fn token_text(node: &SyntaxNode) -> String {
    node.tokens().map(|token| token.text().to_string()).collect()
}

// ---------------------------------------------------------------------------
// Functions
// ---------------------------------------------------------------------------

ast_node!(MethodDeclaration, MethodDeclaration);
ast_node!(LocalFunctionStatement, LocalFunctionStatement);
ast_node!(ModifierList, ModifierList);

/// Header accessors shared by methods and local functions.
pub trait FunctionHeader: AstNode {
    fn modifiers(&self) -> Option<ModifierList> {
        self.syntax().children().find_map(ModifierList::cast)
    }

    /// Declared return type. For explicitly implemented members this is the
    /// type in front of the interface specifier.
    fn return_type(&self) -> Option<SyntaxNode> {
        self.syntax().children().find(|child| child.kind().is_type())
    }

    fn identifier(&self) -> Option<SyntaxToken> {
        self.syntax()
            .child_token(SyntaxKind::Identifier)
            .filter(|token| !token.is_missing())
    }

    fn parameter_list(&self) -> Option<SyntaxNode> {
        self.syntax().child_node(SyntaxKind::ParameterList)
    }

    /// Block or `=> expression` body.
    fn body(&self) -> Option<SyntaxNode> {
        self.syntax().children().find(|child| {
            matches!(
                child.kind(),
                SyntaxKind::Block | SyntaxKind::ArrowExpressionClause
            )
        })
    }

    fn has_body(&self) -> bool {
        self.body().is_some()
    }
}

impl FunctionHeader for MethodDeclaration {}
impl FunctionHeader for LocalFunctionStatement {}

impl ModifierList {
    pub fn async_keyword(&self) -> Option<SyntaxToken> {
        self.0.child_token(SyntaxKind::AsyncKeyword)
    }

    pub fn has_async(&self) -> bool {
        self.async_keyword().is_some()
    }
}

// ---------------------------------------------------------------------------
// Anonymous functions
// ---------------------------------------------------------------------------

ast_node!(SimpleLambdaExpression, SimpleLambdaExpression);
ast_node!(ParenthesizedLambdaExpression, ParenthesizedLambdaExpression);
ast_node!(
    /// `delegate (...) { ... }`
    AnonymousMethodExpression,
    AnonymousMethodExpression
);

fn lambda_body(node: &SyntaxNode) -> Option<SyntaxNode> {
    node.children()
        .find(|child| matches!(child.kind(), SyntaxKind::Block | SyntaxKind::Expression))
}

impl SimpleLambdaExpression {
    pub fn async_keyword(&self) -> Option<SyntaxToken> {
        self.0.child_token(SyntaxKind::AsyncKeyword)
    }

    pub fn parameter(&self) -> Option<SyntaxNode> {
        self.0.child_node(SyntaxKind::Parameter)
    }

    pub fn body(&self) -> Option<SyntaxNode> {
        lambda_body(&self.0)
    }
}

impl ParenthesizedLambdaExpression {
    pub fn async_keyword(&self) -> Option<SyntaxToken> {
        self.0.child_token(SyntaxKind::AsyncKeyword)
    }

    pub fn parameter_list(&self) -> Option<SyntaxNode> {
        self.0.child_node(SyntaxKind::ParameterList)
    }

    pub fn body(&self) -> Option<SyntaxNode> {
        lambda_body(&self.0)
    }
}

impl AnonymousMethodExpression {
    pub fn async_keyword(&self) -> Option<SyntaxToken> {
        self.0.child_token(SyntaxKind::AsyncKeyword)
    }

    pub fn delegate_keyword(&self) -> Option<SyntaxToken> {
        self.0.child_token(SyntaxKind::DelegateKeyword)
    }

    pub fn parameter_list(&self) -> Option<SyntaxNode> {
        self.0.child_node(SyntaxKind::ParameterList)
    }

    pub fn body(&self) -> Option<SyntaxNode> {
        self.0.child_node(SyntaxKind::Block)
    }
}

// ---------------------------------------------------------------------------
// Expressions
// ---------------------------------------------------------------------------

ast_node!(AwaitExpression, AwaitExpression);

impl AwaitExpression {
    pub fn await_keyword(&self) -> Option<SyntaxToken> {
        self.0.child_token(SyntaxKind::AwaitKeyword)
    }

    /// `None` when the operand is missing (`await;`).
    pub fn operand(&self) -> Option<SyntaxNode> {
        self.0
            .child_node(SyntaxKind::Expression)
            .filter(|operand| operand.first_token().is_some())
    }
}

// ---------------------------------------------------------------------------
// Names
// ---------------------------------------------------------------------------

ast_node!(GenericName, GenericName);
ast_node!(QualifiedName, QualifiedName);
ast_node!(AliasQualifiedName, AliasQualifiedName);

impl GenericName {
    pub fn identifier(&self) -> Option<SyntaxToken> {
        self.0.child_token(SyntaxKind::Identifier)
    }

    pub fn type_argument_list(&self) -> Option<SyntaxNode> {
        self.0.child_node(SyntaxKind::TypeArgumentList)
    }

    /// Type arguments in order. Omitted arguments (`Task<>`) are not listed.
    pub fn type_arguments(&self) -> Vec<SyntaxNode> {
        self.type_argument_list()
            .map(|list| list.children().filter(|child| child.kind().is_type()).collect())
            .unwrap_or_default()
    }
}

impl QualifiedName {
    pub fn left(&self) -> Option<SyntaxNode> {
        self.0.children().next()
    }

    pub fn right(&self) -> Option<SyntaxNode> {
        self.0.children().nth(1)
    }
}

impl AliasQualifiedName {
    pub fn alias(&self) -> Option<SyntaxNode> {
        self.0.children().next()
    }

    pub fn name(&self) -> Option<SyntaxNode> {
        self.0.children().nth(1)
    }
}

// ---------------------------------------------------------------------------
// Directives and namespaces
// ---------------------------------------------------------------------------

ast_node!(UsingDirective, UsingDirective);
ast_node!(NamespaceDeclaration, NamespaceDeclaration);

impl UsingDirective {
    pub fn is_global(&self) -> bool {
        self.0
            .first_token()
            .is_some_and(|token| token.kind() == SyntaxKind::Identifier && token.text() == "global")
    }

    pub fn is_static(&self) -> bool {
        self.0.child_token(SyntaxKind::StaticKeyword).is_some()
    }

    pub fn is_alias(&self) -> bool {
        self.0.child_token(SyntaxKind::EqualsToken).is_some()
    }

    pub fn name(&self) -> Option<SyntaxNode> {
        self.0.children().find(|child| child.kind().is_type())
    }

    /// Imported name without trivia, e.g. `System.Threading.Tasks`.
    pub fn name_text(&self) -> Option<String> {
        self.name().map(|name| token_text(&name))
    }
}

impl NamespaceDeclaration {
    pub fn name(&self) -> Option<SyntaxNode> {
        self.0.children().find(|child| child.kind().is_type())
    }

    pub fn name_text(&self) -> Option<String> {
        self.name().map(|name| token_text(&name))
    }

    /// Whether the namespace has no braces and spans the rest of the file.
    pub fn is_file_scoped(&self) -> bool {
        self.0.child_token(SyntaxKind::OpenBraceToken).is_none()
    }
}
