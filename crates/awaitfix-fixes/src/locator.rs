//! Container lookup: the nearest enclosing unit an `await` makes async.

use crate::cancellation::CancellationToken;
use crate::error::{FixError, NoFixReason};
use awaitfix_syntax::ast::{
    AnonymousMethodExpression, AstNode, AwaitExpression, FunctionHeader, LocalFunctionStatement,
    MethodDeclaration, ModifierList, ParenthesizedLambdaExpression, SimpleLambdaExpression,
};
use awaitfix_syntax::{SyntaxKind, SyntaxNode, SyntaxToken, TextRange};
use tracing::trace;

/// A unit of executable code that can be marked `async`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Container {
    NamedMethod(MethodDeclaration),
    LocalFunction(LocalFunctionStatement),
    /// Simple or parenthesized lambda.
    Lambda { node: SyntaxNode, is_block_body: bool },
    AnonymousFunction {
        node: AnonymousMethodExpression,
        has_delegate_keyword: bool,
    },
}

impl Container {
    pub fn syntax(&self) -> &SyntaxNode {
        match self {
            Container::NamedMethod(method) => method.syntax(),
            Container::LocalFunction(local) => local.syntax(),
            Container::Lambda { node, .. } => node,
            Container::AnonymousFunction { node, .. } => node.syntax(),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Container::NamedMethod(_) => "method",
            Container::LocalFunction(_) => "local function",
            Container::Lambda { .. } => "lambda",
            Container::AnonymousFunction { .. } => "anonymous method",
        }
    }

    /// Declared name of named units.
    pub fn identifier(&self) -> Option<SyntaxToken> {
        match self {
            Container::NamedMethod(method) => method.identifier(),
            Container::LocalFunction(local) => local.identifier(),
            Container::Lambda { .. } | Container::AnonymousFunction { .. } => None,
        }
    }

    /// Declared return type of named units.
    pub fn return_type(&self) -> Option<SyntaxNode> {
        match self {
            Container::NamedMethod(method) => method.return_type(),
            Container::LocalFunction(local) => local.return_type(),
            Container::Lambda { .. } | Container::AnonymousFunction { .. } => None,
        }
    }

    pub fn modifiers(&self) -> Option<ModifierList> {
        match self {
            Container::NamedMethod(method) => method.modifiers(),
            Container::LocalFunction(local) => local.modifiers(),
            Container::Lambda { .. } | Container::AnonymousFunction { .. } => None,
        }
    }
}

/// Walk outward from `await_node` to the nearest enclosing container.
///
/// The ascent is iterative and checks `cancel` at every step. Members that
/// have a body but cannot be async (constructors, accessors, operators)
/// stop the walk with `UnsupportedContainerKind`; member-level constructs
/// without a body stop it with `NoEnclosingContainer`.
pub fn locate_container(
    await_node: &SyntaxNode,
    cancel: &CancellationToken,
) -> Result<Container, FixError> {
    let await_expression =
        AwaitExpression::cast(await_node.clone()).ok_or(NoFixReason::NotAnAwait)?;
    if await_expression.operand().is_none() {
        return Err(NoFixReason::MalformedAwaitOperand.into());
    }

    let mut child = await_node.clone();
    let mut current = await_node.parent();
    while let Some(node) = current {
        cancel.check()?;
        trace!(kind = ?node.kind(), offset = node.offset(), "container ascent");
        match node.kind() {
            SyntaxKind::SimpleLambdaExpression | SyntaxKind::ParenthesizedLambdaExpression => {
                let (body, async_keyword) = lambda_parts(&node);
                require_body(body.as_ref(), &child)?;
                if async_keyword.is_some() {
                    return Err(NoFixReason::AlreadyAsync.into());
                }
                let is_block_body = body.is_some_and(|b| b.kind() == SyntaxKind::Block);
                return Ok(Container::Lambda {
                    node,
                    is_block_body,
                });
            }
            SyntaxKind::AnonymousMethodExpression => {
                let Some(anonymous) = AnonymousMethodExpression::cast(node) else {
                    return Err(NoFixReason::NoEnclosingContainer.into());
                };
                require_body(anonymous.body().as_ref(), &child)?;
                if anonymous.async_keyword().is_some() {
                    return Err(NoFixReason::AlreadyAsync.into());
                }
                let has_delegate_keyword = anonymous.delegate_keyword().is_some();
                return Ok(Container::AnonymousFunction {
                    node: anonymous,
                    has_delegate_keyword,
                });
            }
            SyntaxKind::LocalFunctionStatement => {
                let Some(local) = LocalFunctionStatement::cast(node) else {
                    return Err(NoFixReason::NoEnclosingContainer.into());
                };
                require_body(local.body().as_ref(), &child)?;
                check_named(&local)?;
                return Ok(Container::LocalFunction(local));
            }
            SyntaxKind::MethodDeclaration => {
                let Some(method) = MethodDeclaration::cast(node) else {
                    return Err(NoFixReason::NoEnclosingContainer.into());
                };
                require_body(method.body().as_ref(), &child)?;
                check_named(&method)?;
                return Ok(Container::NamedMethod(method));
            }
            SyntaxKind::ConstructorDeclaration
            | SyntaxKind::OperatorDeclaration
            | SyntaxKind::AccessorDeclaration => {
                return Err(NoFixReason::UnsupportedContainerKind.into());
            }
            // Expression-bodied property or indexer; initializers arrive
            // through an EqualsValueClause first.
            SyntaxKind::PropertyDeclaration => {
                if child.kind() == SyntaxKind::ArrowExpressionClause {
                    return Err(NoFixReason::UnsupportedContainerKind.into());
                }
                return Err(NoFixReason::NoEnclosingContainer.into());
            }
            SyntaxKind::EqualsValueClause
            | SyntaxKind::FieldDeclaration
            | SyntaxKind::TypeDeclaration
            | SyntaxKind::EnumDeclaration
            | SyntaxKind::DelegateDeclaration
            | SyntaxKind::NamespaceDeclaration
            | SyntaxKind::IncompleteMember
            | SyntaxKind::SourceFile => {
                return Err(NoFixReason::NoEnclosingContainer.into());
            }
            _ => {}
        }
        current = node.parent();
        child = node;
    }
    Err(NoFixReason::NoEnclosingContainer.into())
}

/// Body and `async` keyword of either lambda form.
fn lambda_parts(node: &SyntaxNode) -> (Option<SyntaxNode>, Option<SyntaxToken>) {
    if let Some(lambda) = SimpleLambdaExpression::cast(node.clone()) {
        return (lambda.body(), lambda.async_keyword());
    }
    match ParenthesizedLambdaExpression::cast(node.clone()) {
        Some(lambda) => (lambda.body(), lambda.async_keyword()),
        None => (None, None),
    }
}

/// The path from the await must enter the container through its body.
fn require_body(body: Option<&SyntaxNode>, child: &SyntaxNode) -> Result<(), FixError> {
    match body {
        Some(body) if body == child => Ok(()),
        _ => Err(NoFixReason::NoEnclosingContainer.into()),
    }
}

fn check_named<F: FunctionHeader>(function: &F) -> Result<(), FixError> {
    let Some(modifiers) = function.modifiers() else {
        return Err(NoFixReason::NoEnclosingContainer.into());
    };
    if modifiers.has_async() {
        return Err(NoFixReason::AlreadyAsync.into());
    }
    // The rewriter anchors the async marker on the return type.
    if function
        .return_type()
        .is_none_or(|ty| ty.first_token().is_none())
    {
        return Err(NoFixReason::UnsupportedContainerKind.into());
    }
    Ok(())
}

/// The await expression a host span refers to.
///
/// Takes the smallest node covering `range`; if it is or contains an await
/// expression the first one in pre-order wins, otherwise the nearest await
/// ancestor.
pub fn find_await(root: &SyntaxNode, range: TextRange) -> Option<SyntaxNode> {
    let covering = root.covering_node(range);
    covering
        .descendants()
        .find(|node| node.kind() == SyntaxKind::AwaitExpression)
        .or_else(|| {
            covering
                .ancestors()
                .find(|node| node.kind() == SyntaxKind::AwaitExpression)
        })
}

#[cfg(test)]
#[path = "tests/locator_tests.rs"]
mod tests;
