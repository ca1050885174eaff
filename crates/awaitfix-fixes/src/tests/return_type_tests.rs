use crate::cancellation::CancellationToken;
use crate::locator::locate_container;
use crate::options::{FixOptions, TaskNameMatch};
use crate::return_type::{ReturnTypeClass, classify_return_type, classify_type};
use awaitfix_syntax::{SyntaxKind, SyntaxNode, SyntaxTree};

fn return_type_of(return_type: &str) -> SyntaxNode {
    let tree = SyntaxTree::parse(&format!("class C {{ {return_type} M() {{ }} }}"));
    tree.root()
        .descendants()
        .find(|node| node.kind() == SyntaxKind::MethodDeclaration)
        .and_then(|method| method.children().find(|child| child.kind().is_type()))
        .expect("return type")
}

fn classify(return_type: &str, options: &FixOptions) -> ReturnTypeClass {
    classify_type(&return_type_of(return_type), options)
}

fn describe(class: &ReturnTypeClass) -> String {
    match class {
        ReturnTypeClass::Void => "void".to_string(),
        ReturnTypeClass::TaskShaped => "task".to_string(),
        ReturnTypeClass::GenericTaskShaped(inner) => format!("task<{}>", inner.trimmed_text()),
        ReturnTypeClass::Other(ty) => format!("other({})", ty.trimmed_text()),
    }
}

#[test]
fn test_trailing_name_matching() {
    let options = FixOptions::default();
    let cases = [
        ("void", "void"),
        ("Task", "task"),
        ("Task<int>", "task<int>"),
        ("Task<List<int>>", "task<List<int>>"),
        ("System.Threading.Tasks.Task", "task"),
        ("global::System.Threading.Tasks.Task<string>", "task<string>"),
        ("Foo.Task", "task"),
        ("int", "other(int)"),
        ("Program", "other(Program)"),
        ("ValueTask", "other(ValueTask)"),
        ("Task<int, string>", "other(Task<int, string>)"),
        ("Task[]", "other(Task[])"),
        ("Task?", "task"),
        ("Task<int>?", "task<int>"),
        ("System.Threading.Tasks.Task<int>?", "task<int>"),
        ("int?", "other(int?)"),
        ("ValueTask?", "other(ValueTask?)"),
        ("Task.Foo", "other(Task.Foo)"),
        ("(int, Task)", "other((int, Task))"),
    ];
    for (source, expected) in cases {
        assert_eq!(describe(&classify(source, &options)), expected, "{source}");
    }
}

#[test]
fn test_qualified_matching() {
    let options = FixOptions {
        task_name_match: TaskNameMatch::Qualified,
        ..FixOptions::default()
    };
    let cases = [
        ("Task", "task"),
        ("Task<int>", "task<int>"),
        ("System.Threading.Tasks.Task", "task"),
        ("global::System.Threading.Tasks.Task<int>", "task<int>"),
        ("System . Threading . Tasks . Task", "task"),
        ("Foo.Task", "other(Foo.Task)"),
        ("global::Task", "other(global::Task)"),
    ];
    for (source, expected) in cases {
        assert_eq!(describe(&classify(source, &options)), expected, "{source}");
    }
}

#[test]
fn test_custom_task_type_name() {
    let options = FixOptions {
        task_type_name: "ValueTask".to_string(),
        ..FixOptions::default()
    };
    assert_eq!(describe(&classify("ValueTask<int>", &options)), "task<int>");
    assert_eq!(describe(&classify("Task", &options)), "other(Task)");
}

#[test]
fn test_lambdas_classify_as_void() {
    let tree = SyntaxTree::parse("class C { int M() { Run(() => await F()); return 0; } }");
    let await_node = tree
        .root()
        .descendants()
        .find(|node| node.kind() == SyntaxKind::AwaitExpression)
        .expect("await");
    let container = locate_container(&await_node, &CancellationToken::new()).expect("lambda");
    assert_eq!(
        classify_return_type(&container, &FixOptions::default()),
        ReturnTypeClass::Void
    );
}
