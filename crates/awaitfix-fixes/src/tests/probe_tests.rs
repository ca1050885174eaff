use crate::probe::{NameForm, TaskNameResolver, UsingDirectiveResolver};
use awaitfix_syntax::{SyntaxKind, SyntaxNode, SyntaxTree};

const TASKS: &str = "System.Threading.Tasks";

fn method(tree: &SyntaxTree) -> SyntaxNode {
    tree.root()
        .descendants()
        .find(|node| node.kind() == SyntaxKind::MethodDeclaration)
        .expect("method")
}

fn probe(source: &str) -> NameForm {
    let tree = SyntaxTree::parse(source);
    UsingDirectiveResolver.name_form(&method(&tree), TASKS)
}

#[test]
fn test_file_level_using() {
    assert_eq!(
        probe("using System;\nusing System.Threading.Tasks;\nclass C { void M() { } }"),
        NameForm::Short
    );
    assert_eq!(probe("using System;\nclass C { void M() { } }"), NameForm::FullyQualified);
}

#[test]
fn test_global_using_and_global_alias_prefix() {
    assert_eq!(
        probe("global using System.Threading.Tasks;\nclass C { void M() { } }"),
        NameForm::Short
    );
    assert_eq!(
        probe("using global::System.Threading.Tasks;\nclass C { void M() { } }"),
        NameForm::Short
    );
}

#[test]
fn test_static_and_alias_usings_do_not_import() {
    assert_eq!(
        probe("using static System.Threading.Tasks.Task;\nclass C { void M() { } }"),
        NameForm::FullyQualified
    );
    assert_eq!(
        probe("using Tasks = System.Threading.Tasks;\nclass C { void M() { } }"),
        NameForm::FullyQualified
    );
}

#[test]
fn test_using_inside_enclosing_namespace() {
    assert_eq!(
        probe("namespace N\n{\n    using System.Threading.Tasks;\n    class C { void M() { } }\n}"),
        NameForm::Short
    );
    // A sibling namespace's imports do not apply.
    assert_eq!(
        probe(
            "namespace A { using System.Threading.Tasks; }\nnamespace B { class C { void M() { } } }"
        ),
        NameForm::FullyQualified
    );
}

#[test]
fn test_declared_inside_task_namespace() {
    assert_eq!(
        probe("namespace System.Threading.Tasks { class C { void M() { } } }"),
        NameForm::Short
    );
    assert_eq!(
        probe("namespace System.Threading.Tasks.Sources;\nclass C { void M() { } }"),
        NameForm::Short
    );
    assert_eq!(
        probe("namespace System { namespace Threading.Tasks { class C { void M() { } } } }"),
        NameForm::Short
    );
    assert_eq!(
        probe("namespace System.Threading.TasksExtra { class C { void M() { } } }"),
        NameForm::FullyQualified
    );
}

#[test]
fn test_fixed_and_closure_resolvers() {
    let tree = SyntaxTree::parse("class C { void M() { } }");
    let node = method(&tree);
    assert_eq!(NameForm::FullyQualified.name_form(&node, TASKS), NameForm::FullyQualified);
    let closure = |container: &SyntaxNode| {
        if container.kind() == SyntaxKind::MethodDeclaration {
            NameForm::Short
        } else {
            NameForm::FullyQualified
        }
    };
    assert_eq!(closure.name_form(&node, TASKS), NameForm::Short);
}

#[test]
fn test_empty_namespace_is_always_short() {
    let tree = SyntaxTree::parse("class C { void M() { } }");
    assert_eq!(UsingDirectiveResolver.name_form(&method(&tree), ""), NameForm::Short);
}
