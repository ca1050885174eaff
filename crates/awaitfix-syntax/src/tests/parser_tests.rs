//! Tests for the tolerant parser.

use crate::kind::SyntaxKind;
use crate::node::SyntaxNode;
use crate::parser::ParserState;

fn parse(source: &str) -> (SyntaxNode, ParserState) {
    let mut parser = ParserState::new("test.cs".to_string(), source.to_string());
    let root = parser.parse_source_file();
    (SyntaxNode::new_root(root), parser)
}

fn find(root: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxNode> {
    root.descendants().find(|node| node.kind() == kind)
}

fn count(root: &SyntaxNode, kind: SyntaxKind) -> usize {
    root.descendants().filter(|node| node.kind() == kind).count()
}

#[test]
fn test_method_declaration_header() {
    let source = r#"
class C
{
    public static void Test() { await Task.Delay(1); }
}
"#;
    let (root, parser) = parse(source);
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    assert_eq!(root.to_string(), source);

    let method = find(&root, SyntaxKind::MethodDeclaration).expect("method");
    let kinds: Vec<SyntaxKind> = method.children_with_tokens().map(|e| e.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::ModifierList,
            SyntaxKind::PredefinedType,
            SyntaxKind::Identifier,
            SyntaxKind::ParameterList,
            SyntaxKind::Block,
        ]
    );
    let modifiers = method.child_node(SyntaxKind::ModifierList).expect("modifiers");
    assert_eq!(modifiers.trimmed_text(), "public static");
}

#[test]
fn test_await_expression_operand() {
    let (root, _) = parse("class C { void M() { var x = await Foo(a, b) + 1; } }");
    let await_node = find(&root, SyntaxKind::AwaitExpression).expect("await");
    let operand = await_node.child_node(SyntaxKind::Expression).expect("operand");
    assert_eq!(operand.trimmed_text(), "Foo(a, b) + 1");
}

#[test]
fn test_await_without_operand_is_recorded() {
    let (root, parser) = parse("class C { void M() { await; } }");
    let await_node = find(&root, SyntaxKind::AwaitExpression).expect("await");
    assert!(await_node.child_node(SyntaxKind::Expression).is_none());
    assert_eq!(parser.get_diagnostics().len(), 1);
    assert!(
        parser.get_diagnostics()[0]
            .message
            .contains("expression expected"),
        "unexpected diagnostic: {:?}",
        parser.get_diagnostics()
    );
}

#[test]
fn test_lambda_forms() {
    let source = r#"
class C
{
    void M()
    {
        Func<int, Task> a = x => await F(x);
        Func<Task> b = () => { await F(); };
        Action c = async (int y) => await F(y);
    }
}
"#;
    let (root, _) = parse(source);
    assert_eq!(root.to_string(), source);
    assert_eq!(count(&root, SyntaxKind::SimpleLambdaExpression), 1);
    assert_eq!(count(&root, SyntaxKind::ParenthesizedLambdaExpression), 2);
    assert_eq!(count(&root, SyntaxKind::AwaitExpression), 3);

    let with_async = root
        .descendants()
        .filter(|node| node.kind().is_lambda())
        .find(|node| node.child_token(SyntaxKind::AsyncKeyword).is_some())
        .expect("async lambda");
    assert!(with_async.trimmed_text().starts_with("async (int y)"));
}

#[test]
fn test_anonymous_methods() {
    let source = "class C { void M() { Run(delegate { await F(); }); Run(delegate (int x) { }); } }";
    let (root, _) = parse(source);
    assert_eq!(count(&root, SyntaxKind::AnonymousMethodExpression), 2);
    let first = find(&root, SyntaxKind::AnonymousMethodExpression).expect("anonymous method");
    assert!(first.child_node(SyntaxKind::ParameterList).is_none());
    assert!(first.child_node(SyntaxKind::Block).is_some());
}

#[test]
fn test_delegate_type_is_not_an_anonymous_method() {
    let (root, _) = parse("delegate void Handler(int x);");
    assert!(find(&root, SyntaxKind::DelegateDeclaration).is_some());
    assert!(find(&root, SyntaxKind::AnonymousMethodExpression).is_none());
}

#[test]
fn test_local_function_statement() {
    let source = r#"
class C
{
    void M()
    {
        static int Local<T>(T value) where T : class
        {
            return 0;
        }
        Local(1);
    }
}
"#;
    let (root, _) = parse(source);
    let local = find(&root, SyntaxKind::LocalFunctionStatement).expect("local function");
    assert_eq!(
        local.child_token(SyntaxKind::Identifier).map(|t| t.text().to_string()),
        Some("Local".to_string())
    );
    assert!(local.child_node(SyntaxKind::TypeParameterList).is_some());
    assert!(local.child_node(SyntaxKind::ConstraintClauses).is_some());
    assert!(local.child_node(SyntaxKind::Block).is_some());
    // The call is an ordinary statement.
    assert_eq!(count(&root, SyntaxKind::LocalFunctionStatement), 1);
}

#[test]
fn test_call_statement_is_not_a_local_function() {
    let (root, _) = parse("class C { void M() { Foo(x); Bar<int>(y); } }");
    assert_eq!(count(&root, SyntaxKind::LocalFunctionStatement), 0);
    assert_eq!(count(&root, SyntaxKind::ExpressionStatement), 2);
}

#[test]
fn test_member_kinds() {
    let source = r#"
namespace N
{
    class C
    {
        int field = 1;
        int Prop { get; set; } = 2;
        int Expr => 3;
        C() : base() { }
        ~C() { }
        public static C operator +(C a, C b) => a;
        public static implicit operator int(C c) => 0;
        int this[int i] { get { return i; } }
        Task<int> IFoo.Bar() => null;
    }
}
"#;
    let (root, parser) = parse(source);
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    assert_eq!(root.to_string(), source);
    assert_eq!(count(&root, SyntaxKind::FieldDeclaration), 1);
    assert_eq!(count(&root, SyntaxKind::PropertyDeclaration), 3);
    assert_eq!(count(&root, SyntaxKind::ConstructorDeclaration), 2);
    assert_eq!(count(&root, SyntaxKind::ConstructorInitializer), 1);
    assert_eq!(count(&root, SyntaxKind::OperatorDeclaration), 2);
    assert_eq!(count(&root, SyntaxKind::MethodDeclaration), 1);
    assert_eq!(count(&root, SyntaxKind::ExplicitInterfaceSpecifier), 1);
    assert_eq!(count(&root, SyntaxKind::AccessorDeclaration), 3);
}

#[test]
fn test_generic_and_qualified_return_types() {
    let source = r#"
class C
{
    System.Threading.Tasks.Task<List<int>> A() => null;
    global::System.Threading.Tasks.Task B() => null;
    int[] C2() => null;
    (int, string) D() => default;
    int? E() => null;
}
"#;
    let (root, parser) = parse(source);
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    let return_kinds: Vec<SyntaxKind> = root
        .descendants()
        .filter(|node| node.kind() == SyntaxKind::MethodDeclaration)
        .filter_map(|method| method.children().find(|child| child.kind().is_type()))
        .map(|ty| ty.kind())
        .collect();
    assert_eq!(
        return_kinds,
        vec![
            SyntaxKind::QualifiedName,
            SyntaxKind::QualifiedName,
            SyntaxKind::ArrayType,
            SyntaxKind::TupleType,
            SyntaxKind::NullableType,
        ]
    );
    let generic = find(&root, SyntaxKind::GenericName).expect("generic name");
    assert_eq!(generic.trimmed_text(), "Task<List<int>>");
    assert!(find(&root, SyntaxKind::AliasQualifiedName).is_some());
}

#[test]
fn test_control_statements_nest() {
    let source = r#"
class C
{
    void M()
    {
        for (int i = 0; i < 10; i++)
            if (i > 1) await F(i); else { await G(); }
        try { } catch (Exception e) when (e != null) { } finally { }
    }
}
"#;
    let (root, parser) = parse(source);
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    assert_eq!(root.to_string(), source);
    assert_eq!(count(&root, SyntaxKind::AwaitExpression), 2);
    assert!(count(&root, SyntaxKind::ControlStatement) >= 6);
}

#[test]
fn test_switch_expression_arms_are_not_lambdas() {
    let (root, _) = parse("class C { int M(object o) => o switch { Foo => 1, _ => 2 }; }");
    assert_eq!(count(&root, SyntaxKind::SimpleLambdaExpression), 0);
}

#[test]
fn test_stray_close_brace_is_kept() {
    let source = "}\nclass C { }\n}";
    let (root, parser) = parse(source);
    assert_eq!(root.to_string(), source);
    assert_eq!(count(&root, SyntaxKind::IncompleteMember), 2);
    assert_eq!(parser.get_diagnostics().len(), 2);
}

#[test]
fn test_unterminated_block_recovers() {
    let source = "class C { void M() { await F(";
    let (root, parser) = parse(source);
    assert_eq!(root.to_string(), source);
    assert!(!parser.get_diagnostics().is_empty());
    assert!(find(&root, SyntaxKind::AwaitExpression).is_some());
}

#[test]
fn test_deep_nesting_does_not_overflow() {
    let depth = 5_000;
    let source = format!(
        "class C {{ void M() {{ var x = {}1{}; }} }}",
        "(".repeat(depth),
        ")".repeat(depth)
    );
    let (root, _) = parse(&source);
    assert_eq!(root.to_string(), source);
}

#[test]
fn test_file_scoped_namespace_owns_following_members() {
    let (root, _) = parse("namespace A.B;\nclass C { }\nclass D { }\n");
    let namespace = find(&root, SyntaxKind::NamespaceDeclaration).expect("namespace");
    assert_eq!(
        namespace
            .children()
            .filter(|child| child.kind() == SyntaxKind::TypeDeclaration)
            .count(),
        2
    );
}

#[test]
fn test_switch_labels_prefix_statements() {
    let source = r#"
class C
{
    void M(int k)
    {
        switch (k)
        {
            case 1:
            case 2 when k > 0:
                int Local() { return 1; }
                break;
            default:
                goto done;
        }
        done: return;
    }
}
"#;
    let (root, parser) = parse(source);
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    assert_eq!(root.to_string(), source);
    assert_eq!(count(&root, SyntaxKind::LabeledStatement), 4);
    let local = find(&root, SyntaxKind::LocalFunctionStatement).expect("local function");
    assert_eq!(
        local.parent().map(|parent| parent.kind()),
        Some(SyntaxKind::LabeledStatement)
    );
}

#[test]
fn test_conditional_statement_is_not_a_label() {
    let (root, _) = parse("class C { void M() { a ? b() : c(); F(x: 1); } }");
    assert_eq!(count(&root, SyntaxKind::LabeledStatement), 0);
    assert_eq!(count(&root, SyntaxKind::ExpressionStatement), 2);
}

#[test]
fn test_attributed_local_function() {
    let source = "class C { void M() { [Obsolete] [return: NotNull] static string Local() => \"\"; } }";
    let (root, parser) = parse(source);
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    assert_eq!(root.to_string(), source);
    let local = find(&root, SyntaxKind::LocalFunctionStatement).expect("local function");
    let kinds: Vec<SyntaxKind> = local.children().map(|child| child.kind()).collect();
    assert_eq!(
        &kinds[..4],
        &[
            SyntaxKind::AttributeList,
            SyntaxKind::AttributeList,
            SyntaxKind::ModifierList,
            SyntaxKind::IdentifierName,
        ]
    );
}

#[test]
fn test_await_foreach_and_await_using_bodies_are_statements() {
    let source = r#"
class C
{
    async Task M()
    {
        await foreach (var x in Items()) { int A() => 1; }
        await using (var r = Open()) { int B() => 2; }
        await using var s = Open();
    }
}
"#;
    let (root, _) = parse(source);
    assert_eq!(root.to_string(), source);
    assert_eq!(count(&root, SyntaxKind::LocalFunctionStatement), 2);
    assert_eq!(count(&root, SyntaxKind::BracedGroup), 0);
    // Only the declaration's `await` is an expression.
    assert_eq!(count(&root, SyntaxKind::AwaitExpression), 1);
}
