use crate::cancellation::CancellationToken;
use crate::error::FixError;
use crate::locator::{Container, locate_container};
use crate::options::FixOptions;
use crate::planner::{RewritePlan, plan_rewrites};
use crate::probe::NameForm;
use crate::return_type::classify_return_type;
use crate::rewriter::apply_plan;
use awaitfix_syntax::{SyntaxKind, SyntaxTree};

fn prepare(source: &str, form: NameForm) -> (SyntaxTree, Container, Vec<RewritePlan>) {
    let tree = SyntaxTree::parse(source);
    let await_node = tree
        .root()
        .descendants()
        .find(|node| node.kind() == SyntaxKind::AwaitExpression)
        .expect("await");
    let container = locate_container(&await_node, &CancellationToken::new()).expect("container");
    let options = FixOptions::default();
    let class = classify_return_type(&container, &options);
    let plans = plan_rewrites(&container, &class, form, &options);
    (tree, container, plans)
}

fn rewrite(source: &str, form: NameForm, index: usize) -> String {
    let (tree, container, plans) = prepare(source, form);
    apply_plan(&tree, &container, &plans[index], &CancellationToken::new())
        .expect("rewrite")
        .text()
}

#[test]
fn test_async_takes_return_type_indentation() {
    let source = "class C\n{\n    int Test()\n    {\n        await F();\n    }\n}\n";
    assert_eq!(
        rewrite(source, NameForm::FullyQualified, 0),
        "class C\n{\n    async System.Threading.Tasks.Task<int> TestAsync()\n    {\n        await F();\n    }\n}\n"
    );
}

#[test]
fn test_async_follows_existing_modifiers() {
    let source = "class C\n{\n    public static void Test() { await F(); }\n}\n";
    assert_eq!(
        rewrite(source, NameForm::Short, 0),
        "class C\n{\n    public static async Task TestAsync() { await F(); }\n}\n"
    );
    assert_eq!(
        rewrite(source, NameForm::Short, 1),
        "class C\n{\n    public static async void TestAsync() { await F(); }\n}\n"
    );
}

#[test]
fn test_comments_around_header_are_kept() {
    let source = "class C { public/*a*/static/*b*/Task/*c*/Test() { await F(); } }";
    assert_eq!(
        rewrite(source, NameForm::Short, 0),
        "class C { public/*a*/static/*b*/async Task/*c*/TestAsync() { await F(); } }"
    );
}

#[test]
fn test_leading_comment_line_moves_before_async() {
    let source = "class C\n{\n    // does things\n    void Test() { await F(); }\n}\n";
    assert_eq!(
        rewrite(source, NameForm::Short, 0),
        "class C\n{\n    // does things\n    async Task TestAsync() { await F(); }\n}\n"
    );
}

#[test]
fn test_attribute_stays_in_front() {
    let source = "class C\n{\n    [Obsolete]\n    void Test() { await F(); }\n}\n";
    assert_eq!(
        rewrite(source, NameForm::Short, 1),
        "class C\n{\n    [Obsolete]\n    async void TestAsync() { await F(); }\n}\n"
    );
}

#[test]
fn test_lambda_marker_placement() {
    assert_eq!(
        rewrite("class C { void M() { Run(() => await F()); } }", NameForm::Short, 0),
        "class C { void M() { Run(async () => await F()); } }"
    );
    assert_eq!(
        rewrite("class C { void M() { Run(x => await F(x)); } }", NameForm::Short, 0),
        "class C { void M() { Run(async x => await F(x)); } }"
    );
    assert_eq!(
        rewrite("class C { void M() { Run(\n    x => await F(x)); } }", NameForm::Short, 0),
        "class C { void M() { Run(\n    async x => await F(x)); } }"
    );
}

#[test]
fn test_anonymous_method_marker_placement() {
    assert_eq!(
        rewrite(
            "class C { void M() { Run(delegate (int a) { await F(a); }); } }",
            NameForm::Short,
            0
        ),
        "class C { void M() { Run(async delegate (int a) { await F(a); }); } }"
    );
}

#[test]
fn test_input_tree_is_unchanged_and_shared() {
    let source = "class A { void M() { } }\nclass B { void Test() { await F(); } }\n";
    let (tree, container, plans) = prepare(source, NameForm::Short);
    let fixed = apply_plan(&tree, &container, &plans[0], &CancellationToken::new()).expect("rewrite");
    assert_eq!(tree.text(), source);
    assert_eq!(
        fixed.text(),
        "class A { void M() { } }\nclass B { async Task TestAsync() { await F(); } }\n"
    );
    let original_a = tree.green().children()[0].as_node().expect("class A");
    let fixed_a = fixed.green().children()[0].as_node().expect("class A");
    assert!(original_a.ptr_eq(fixed_a));
}

#[test]
fn test_cancelled_rewrite() {
    let (tree, container, plans) = prepare("class C { void Test() { await F(); } }", NameForm::Short);
    let cancel = CancellationToken::new();
    cancel.cancel();
    assert_eq!(
        apply_plan(&tree, &container, &plans[0], &cancel).map(|tree| tree.text()),
        Err(FixError::Cancelled)
    );
}
