//! Return type classification.
//!
//! Matching is purely syntactic: a type is task-shaped when its name is the
//! configured task type name, regardless of what that name binds to.

use crate::locator::Container;
use crate::options::{FixOptions, TaskNameMatch};
use awaitfix_syntax::ast::{AliasQualifiedName, AstNode, GenericName, QualifiedName, token_text};
use awaitfix_syntax::{SyntaxKind, SyntaxNode};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReturnTypeClass {
    Void,
    /// `Task`
    TaskShaped,
    /// `Task<T>`, carrying `T`.
    GenericTaskShaped(SyntaxNode),
    /// Any other type, carried so it can be wrapped in `Task<T>`.
    Other(SyntaxNode),
}

/// Classify the declared return type of `container`.
///
/// Lambdas and anonymous methods have no declared return type and classify
/// as `Void`; the planner never rewrites their return type.
pub fn classify_return_type(container: &Container, options: &FixOptions) -> ReturnTypeClass {
    match container {
        Container::NamedMethod(_) | Container::LocalFunction(_) => match container.return_type() {
            Some(ty) => classify_type(&ty, options),
            None => ReturnTypeClass::Void,
        },
        Container::Lambda { .. } | Container::AnonymousFunction { .. } => ReturnTypeClass::Void,
    }
}

pub fn classify_type(ty: &SyntaxNode, options: &FixOptions) -> ReturnTypeClass {
    if ty.kind() == SyntaxKind::PredefinedType
        && ty.child_token(SyntaxKind::VoidKeyword).is_some()
    {
        return ReturnTypeClass::Void;
    }
    // `Task?` and `Task<T>?` are annotated task types; the annotation stays
    // on the declared type.
    if ty.kind() == SyntaxKind::NullableType {
        let element = ty.children().find(|child| child.kind().is_type());
        return match element.map(|element| classify_type(&element, options)) {
            Some(class @ (ReturnTypeClass::TaskShaped | ReturnTypeClass::GenericTaskShaped(_))) => {
                class
            }
            Some(ReturnTypeClass::Void | ReturnTypeClass::Other(_)) | None => {
                ReturnTypeClass::Other(ty.clone())
            }
        };
    }
    match task_name_part(ty, options) {
        Some(name) => classify_task_name(&name, ty, options),
        None => ReturnTypeClass::Other(ty.clone()),
    }
}

/// The simple name to compare against the task type name, honoring the
/// configured match policy. `None` when the qualifier rules it out.
fn task_name_part(ty: &SyntaxNode, options: &FixOptions) -> Option<SyntaxNode> {
    match ty.kind() {
        SyntaxKind::IdentifierName | SyntaxKind::GenericName => Some(ty.clone()),
        SyntaxKind::QualifiedName => {
            let qualified = QualifiedName::cast(ty.clone())?;
            let right = qualified.right()?;
            if options.task_name_match == TaskNameMatch::Qualified {
                let left = token_text(&qualified.left()?);
                let namespace = left.strip_prefix("global::").unwrap_or(&left);
                if namespace != options.task_namespace {
                    return None;
                }
            }
            Some(right)
        }
        SyntaxKind::AliasQualifiedName => {
            let aliased = AliasQualifiedName::cast(ty.clone())?;
            if options.task_name_match == TaskNameMatch::Qualified {
                // `global::Task` is unqualified; any other alias is unknown.
                let alias = token_text(&aliased.alias()?);
                if alias != "global" || !options.task_namespace.is_empty() {
                    return None;
                }
            }
            aliased.name()
        }
        _ => None,
    }
}

fn classify_task_name(name: &SyntaxNode, ty: &SyntaxNode, options: &FixOptions) -> ReturnTypeClass {
    match name.kind() {
        SyntaxKind::IdentifierName if token_text(name) == options.task_type_name => {
            ReturnTypeClass::TaskShaped
        }
        SyntaxKind::GenericName => {
            let Some(generic) = GenericName::cast(name.clone()) else {
                return ReturnTypeClass::Other(ty.clone());
            };
            let is_task = generic
                .identifier()
                .is_some_and(|token| token.text() == options.task_type_name);
            let arguments = generic.type_arguments();
            match arguments.as_slice() {
                [inner] if is_task => ReturnTypeClass::GenericTaskShaped(inner.clone()),
                _ => ReturnTypeClass::Other(ty.clone()),
            }
        }
        _ => ReturnTypeClass::Other(ty.clone()),
    }
}

#[cfg(test)]
#[path = "tests/return_type_tests.rs"]
mod tests;
