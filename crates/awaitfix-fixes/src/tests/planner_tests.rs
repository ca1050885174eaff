use crate::cancellation::CancellationToken;
use crate::locator::{Container, locate_container};
use crate::options::{FixOptions, SuffixPolicy};
use crate::planner::{FIX_NAME, RewritePlan, plan_rewrites};
use crate::probe::NameForm;
use crate::return_type::classify_return_type;
use awaitfix_syntax::{SyntaxKind, SyntaxTree};

fn container(source: &str) -> Container {
    let tree = SyntaxTree::parse(source);
    let await_node = tree
        .root()
        .descendants()
        .find(|node| node.kind() == SyntaxKind::AwaitExpression)
        .expect("await");
    locate_container(&await_node, &CancellationToken::new()).expect("container")
}

fn plans_with(source: &str, form: NameForm, options: &FixOptions) -> Vec<RewritePlan> {
    let container = container(source);
    let class = classify_return_type(&container, options);
    plan_rewrites(&container, &class, form, options)
}

fn plans(source: &str, form: NameForm) -> Vec<RewritePlan> {
    plans_with(source, form, &FixOptions::default())
}

fn return_type_text(plan: &RewritePlan) -> Option<String> {
    plan.new_return_type.as_ref().map(|ty| ty.to_string())
}

#[test]
fn test_void_method_offers_task_then_void() {
    let plans = plans("class C { void Test() { await F(); } }", NameForm::Short);
    assert_eq!(plans.len(), 2);

    assert_eq!(plans[0].label, "Make method async");
    assert!(plans[0].preferred);
    assert!(plans[0].new_modifier_async);
    assert_eq!(return_type_text(&plans[0]).as_deref(), Some("Task"));
    assert_eq!(plans[0].new_identifier.as_deref(), Some("TestAsync"));

    assert_eq!(plans[1].label, "Make method async (stay void)");
    assert!(!plans[1].preferred);
    assert_eq!(plans[1].new_return_type, None);
    assert_eq!(plans[1].new_identifier.as_deref(), Some("TestAsync"));

    assert!(plans.iter().all(|plan| plan.fix_name == FIX_NAME));
}

#[test]
fn test_void_method_fully_qualified() {
    let plans = plans("class C { void Test() { await F(); } }", NameForm::FullyQualified);
    assert_eq!(
        return_type_text(&plans[0]).as_deref(),
        Some("System.Threading.Tasks.Task")
    );
}

#[test]
fn test_task_shaped_returns_single_async_plan() {
    for source in [
        "class C { Task Test() { await F(); } }",
        "class C { Task<int> Test() { await F(); } }",
    ] {
        let plans = plans(source, NameForm::FullyQualified);
        assert_eq!(plans.len(), 1, "{source}");
        assert_eq!(plans[0].new_return_type, None, "{source}");
        assert_eq!(plans[0].new_identifier.as_deref(), Some("TestAsync"));
        assert!(plans[0].preferred);
    }
}

#[test]
fn test_other_type_is_wrapped() {
    let short = plans("class C { int Test() { await F(); } }", NameForm::Short);
    assert_eq!(short.len(), 1);
    assert_eq!(return_type_text(&short[0]).as_deref(), Some("Task<int>"));

    let qualified = plans(
        "class C { Dictionary<string, int> Test() { await F(); } }",
        NameForm::FullyQualified,
    );
    assert_eq!(
        return_type_text(&qualified[0]).as_deref(),
        Some("System.Threading.Tasks.Task<Dictionary<string, int>>")
    );
}

#[test]
fn test_wrapped_type_drops_outer_trivia() {
    let plans = plans(
        "class C { /* lead */ int /* trail */ Test() { await F(); } }",
        NameForm::Short,
    );
    assert_eq!(return_type_text(&plans[0]).as_deref(), Some("Task<int>"));
}

#[test]
fn test_local_function_labels() {
    let plans = plans(
        "class C { void M() { void Local() { await F(); } } }",
        NameForm::Short,
    );
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].label, "Make local function async");
    assert_eq!(plans[1].label, "Make local function async (stay void)");
    assert_eq!(plans[0].new_identifier.as_deref(), Some("LocalAsync"));
}

#[test]
fn test_lambda_and_anonymous_method_are_never_renamed() {
    let lambda = plans("class C { void M() { Run(() => await F()); } }", NameForm::Short);
    assert_eq!(lambda.len(), 1);
    assert_eq!(lambda[0].label, "Make lambda async");
    assert_eq!(lambda[0].new_identifier, None);
    assert_eq!(lambda[0].new_return_type, None);

    let anonymous = plans(
        "class C { void M() { Run(delegate { await F(); }); } }",
        NameForm::Short,
    );
    assert_eq!(anonymous.len(), 1);
    assert_eq!(anonymous[0].label, "Make anonymous method async");
    assert_eq!(anonymous[0].new_identifier, None);
}

#[test]
fn test_suffix_policy() {
    let source = "class C { Task LoadAsync() { await F(); } }";
    let always = plans(source, NameForm::Short);
    assert_eq!(always[0].new_identifier.as_deref(), Some("LoadAsyncAsync"));

    let options = FixOptions {
        suffix_policy: SuffixPolicy::SkipIfPresent,
        ..FixOptions::default()
    };
    let skip = plans_with(source, NameForm::Short, &options);
    assert_eq!(skip[0].new_identifier, None);
}

#[test]
fn test_stay_void_plan_survives_without_rename() {
    let options = FixOptions {
        async_suffix: String::new(),
        ..FixOptions::default()
    };
    let plans = plans_with("class C { void Test() { await F(); } }", NameForm::Short, &options);
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].new_identifier, None);
    assert_eq!(plans[1].new_identifier, None);
}
