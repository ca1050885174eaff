//! Name resolution probe: can the task type be written unqualified here?

use awaitfix_syntax::ast::{AstNode, NamespaceDeclaration, UsingDirective};
use awaitfix_syntax::{SyntaxKind, SyntaxNode};

/// How the task type is spelled in a synthesized return type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NameForm {
    /// `Task`
    #[default]
    Short,
    /// `System.Threading.Tasks.Task`
    FullyQualified,
}

/// Decides the `NameForm` for a container.
///
/// Implemented for `NameForm` (a fixed answer) and for closures, so tests and
/// hosts with real symbol information can plug in their own answer.
pub trait TaskNameResolver {
    fn name_form(&self, container: &SyntaxNode, task_namespace: &str) -> NameForm;
}

impl TaskNameResolver for NameForm {
    fn name_form(&self, _container: &SyntaxNode, _task_namespace: &str) -> NameForm {
        *self
    }
}

impl<F> TaskNameResolver for F
where
    F: Fn(&SyntaxNode) -> NameForm,
{
    fn name_form(&self, container: &SyntaxNode, _task_namespace: &str) -> NameForm {
        self(container)
    }
}

/// Syntactic resolver based on `using` directives and namespace nesting.
///
/// The task namespace is in scope when the file or an enclosing namespace
/// imports it (`global using` included; `using static` and aliases are not
/// namespace imports), or when the container is declared inside the task
/// namespace or one of its sub-namespaces.
#[derive(Clone, Copy, Debug, Default)]
pub struct UsingDirectiveResolver;

impl TaskNameResolver for UsingDirectiveResolver {
    fn name_form(&self, container: &SyntaxNode, task_namespace: &str) -> NameForm {
        if task_namespace.is_empty() {
            return NameForm::Short;
        }
        let mut enclosing_names: Vec<String> = Vec::new();
        for ancestor in container.ancestors() {
            match ancestor.kind() {
                SyntaxKind::SourceFile => {
                    if imports_namespace(&ancestor, task_namespace) {
                        return NameForm::Short;
                    }
                }
                SyntaxKind::NamespaceDeclaration => {
                    if imports_namespace(&ancestor, task_namespace) {
                        return NameForm::Short;
                    }
                    if let Some(name) =
                        NamespaceDeclaration::cast(ancestor).and_then(|ns| ns.name_text())
                    {
                        enclosing_names.push(name);
                    }
                }
                _ => {}
            }
        }
        enclosing_names.reverse();
        let declared_in = enclosing_names.join(".");
        if declared_in == task_namespace
            || declared_in
                .strip_prefix(task_namespace)
                .is_some_and(|rest| rest.starts_with('.'))
        {
            return NameForm::Short;
        }
        NameForm::FullyQualified
    }
}

/// Whether `scope` (a file or namespace) has a namespace import of `namespace`.
fn imports_namespace(scope: &SyntaxNode, namespace: &str) -> bool {
    scope
        .children()
        .filter_map(UsingDirective::cast)
        .filter(|using| !using.is_static() && !using.is_alias())
        .filter_map(|using| using.name_text())
        .any(|name| name.strip_prefix("global::").unwrap_or(&name) == namespace)
}

#[cfg(test)]
#[path = "tests/probe_tests.rs"]
mod tests;
