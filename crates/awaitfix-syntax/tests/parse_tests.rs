//! End-to-end tests of the public syntax API: parse, navigate, print.

use awaitfix_syntax::ast::{
    AnonymousMethodExpression, AstNode, AwaitExpression, FunctionHeader, GenericName,
    LocalFunctionStatement, MethodDeclaration, NamespaceDeclaration, ParenthesizedLambdaExpression,
    SimpleLambdaExpression, UsingDirective,
};
use awaitfix_syntax::{SyntaxKind, SyntaxNode, SyntaxTree, TextRange};

fn first<N: AstNode>(tree: &SyntaxTree) -> N {
    tree.root()
        .descendants()
        .find_map(N::cast)
        .expect("node of the requested kind")
}

#[test]
fn parse_print_round_trip_keeps_every_byte() {
    let sources = [
        "",
        "\n\n",
        "using System;\r\nusing System.Threading.Tasks;\r\n\r\nclass Program\r\n{\r\n    // comment\r\n    static void Main() { }\r\n}\r\n",
        "class C { void M() { await",
        "}}}} {{{{ ((( ]]] await => delegate async",
        "class C\n{\n#if DEBUG\n    void M() { }\n#endif\n}\n",
        "/* a */ class /* b */ C /* c */ { /* d */ } /* e */",
        "namespace N; record R(int X); enum E { A, B } interface I { Task M(); }",
        "class C { int this[int i] => i; event Action E { add { } remove { } } }",
        "class C { void M() { var s = $\"{await F()}\"; } }",
    ];
    for source in sources {
        let tree = SyntaxTree::parse(source);
        assert_eq!(tree.text(), source, "round trip failed for {source:?}");
        assert_eq!(tree.root().full_range(), TextRange::new(0, source.len() as u32));
    }
}

#[test]
fn method_view_exposes_header_parts() {
    let tree = SyntaxTree::parse(
        "class C\n{\n    public static Task<int> TestAsync(int x) => Task.FromResult(x);\n}\n",
    );
    let method: MethodDeclaration = first(&tree);
    let modifiers = method.modifiers().expect("modifiers");
    assert!(!modifiers.has_async());
    assert_eq!(modifiers.syntax().trimmed_text(), "public static");
    let return_type = method.return_type().expect("return type");
    assert_eq!(return_type.kind(), SyntaxKind::GenericName);
    let generic = GenericName::cast(return_type).expect("generic");
    assert_eq!(generic.identifier().map(|t| t.text().to_string()), Some("Task".into()));
    assert_eq!(generic.type_arguments().len(), 1);
    assert_eq!(
        method.identifier().map(|t| t.text().to_string()),
        Some("TestAsync".into())
    );
    assert!(method.has_body());
    assert_eq!(
        method.body().map(|body| body.kind()),
        Some(SyntaxKind::ArrowExpressionClause)
    );
}

#[test]
fn abstract_method_has_no_body() {
    let tree = SyntaxTree::parse("abstract class C { protected abstract void M(); }");
    let method: MethodDeclaration = first(&tree);
    assert!(!method.has_body());
}

#[test]
fn async_modifier_is_visible() {
    let tree = SyntaxTree::parse("class C { async void M() { } }");
    let method: MethodDeclaration = first(&tree);
    assert!(method.modifiers().is_some_and(|m| m.has_async()));
}

#[test]
fn local_function_view() {
    let tree = SyntaxTree::parse("class C { void M() { async Task<int> Local() { return 1; } } }");
    let local: LocalFunctionStatement = first(&tree);
    assert!(local.modifiers().is_some_and(|m| m.has_async()));
    assert_eq!(local.identifier().map(|t| t.text().to_string()), Some("Local".into()));
    assert_eq!(local.body().map(|b| b.kind()), Some(SyntaxKind::Block));
}

#[test]
fn lambda_and_anonymous_method_views() {
    let tree = SyntaxTree::parse(
        "class C { void M() { Run(x => x); Run(async () => { }); Run(delegate (int a) { }); } }",
    );
    let simple: SimpleLambdaExpression = first(&tree);
    assert!(simple.async_keyword().is_none());
    assert_eq!(simple.parameter().map(|p| p.trimmed_text()), Some("x".into()));
    assert_eq!(simple.body().map(|b| b.kind()), Some(SyntaxKind::Expression));

    let parenthesized: ParenthesizedLambdaExpression = first(&tree);
    assert!(parenthesized.async_keyword().is_some());
    assert_eq!(parenthesized.body().map(|b| b.kind()), Some(SyntaxKind::Block));

    let anonymous: AnonymousMethodExpression = first(&tree);
    assert!(anonymous.delegate_keyword().is_some());
    assert_eq!(
        anonymous.parameter_list().map(|p| p.trimmed_text()),
        Some("(int a)".into())
    );
}

#[test]
fn await_operand_view() {
    let tree = SyntaxTree::parse("class C { void M() { await Task.Delay(1); await; } }");
    let awaits: Vec<AwaitExpression> = tree
        .root()
        .descendants()
        .filter_map(AwaitExpression::cast)
        .collect();
    assert_eq!(awaits.len(), 2);
    assert_eq!(
        awaits[0].operand().map(|o| o.trimmed_text()),
        Some("Task.Delay(1)".into())
    );
    assert!(awaits[1].operand().is_none());
    assert_eq!(tree.diagnostics().len(), 1);
}

#[test]
fn using_directive_views() {
    let tree = SyntaxTree::parse(
        "global using System.Threading.Tasks;\nusing static System.Math;\nusing T = System.Threading.Tasks.Task;\nusing System . Linq;\n",
    );
    let usings: Vec<UsingDirective> = tree
        .root()
        .children()
        .filter_map(UsingDirective::cast)
        .collect();
    assert_eq!(usings.len(), 4);

    assert!(usings[0].is_global());
    assert_eq!(usings[0].name_text().as_deref(), Some("System.Threading.Tasks"));

    assert!(usings[1].is_static());
    assert!(!usings[1].is_alias());

    assert!(usings[2].is_alias());
    assert_eq!(
        usings[2].name_text().as_deref(),
        Some("System.Threading.Tasks.Task")
    );

    assert!(!usings[3].is_global());
    assert_eq!(usings[3].name_text().as_deref(), Some("System.Linq"));
}

#[test]
fn namespace_views() {
    let tree = SyntaxTree::parse("namespace A.B { class C { } }\nnamespace D;\n");
    let namespaces: Vec<NamespaceDeclaration> = tree
        .root()
        .children()
        .filter_map(NamespaceDeclaration::cast)
        .collect();
    assert_eq!(namespaces.len(), 2);
    assert_eq!(namespaces[0].name_text().as_deref(), Some("A.B"));
    assert!(!namespaces[0].is_file_scoped());
    assert_eq!(namespaces[1].name_text().as_deref(), Some("D"));
    assert!(namespaces[1].is_file_scoped());
}

#[test]
fn ancestors_reach_the_root() {
    let tree = SyntaxTree::parse("class C { void M() { F(() => await G()); } }");
    let await_node: SyntaxNode = first::<AwaitExpression>(&tree).syntax().clone();
    let kinds: Vec<SyntaxKind> = await_node.ancestors().map(|node| node.kind()).collect();
    assert_eq!(kinds.first(), Some(&SyntaxKind::AwaitExpression));
    assert_eq!(kinds.last(), Some(&SyntaxKind::SourceFile));
    let lambda_position = kinds
        .iter()
        .position(|kind| *kind == SyntaxKind::ParenthesizedLambdaExpression)
        .expect("lambda ancestor");
    let method_position = kinds
        .iter()
        .position(|kind| *kind == SyntaxKind::MethodDeclaration)
        .expect("method ancestor");
    assert!(lambda_position < method_position);
}

#[test]
fn covering_node_finds_await() {
    let source = "class C { void M() { await Task.Delay(1); } }";
    let tree = SyntaxTree::parse(source);
    let start = source.find("await").expect("await") as u32;
    let covering = tree
        .root()
        .covering_node(TextRange::new(start, start + "await".len() as u32));
    assert_eq!(covering.kind(), SyntaxKind::AwaitExpression);
}

#[test]
fn edits_share_untouched_subtrees() {
    let tree = SyntaxTree::parse("class A { void M() { } }\nclass B { void N() { } }\n");
    let root = tree.root();
    let first_class = root.children().next().expect("class A");
    let replacement = awaitfix_syntax::GreenNode::new(SyntaxKind::IncompleteMember, Vec::new());
    let edited = tree.with_root(
        tree.green()
            .replace_child(first_class.index(), replacement.into()),
    );
    assert_eq!(edited.text(), "class B { void N() { } }\n");
    assert_eq!(tree.text(), "class A { void M() { } }\nclass B { void N() { } }\n");
    let original_b = tree.green().children()[1].as_node().expect("B");
    let edited_b = edited.green().children()[1].as_node().expect("B");
    assert!(original_b.ptr_eq(edited_b));
}

#[test]
fn tree_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SyntaxTree>();
    assert_send_sync::<SyntaxNode>();
}

#[test]
fn diagnostics_serialize_for_hosts() {
    let source = "class C { void M() { await; } }";
    let tree = SyntaxTree::parse(source);
    let json = serde_json::to_value(tree.diagnostics()).expect("serializable");
    assert_eq!(json.as_array().map(Vec::len), Some(1));
    assert!(
        json[0]["message"]
            .as_str()
            .is_some_and(|message| message.contains("expression expected")),
        "{json}"
    );
    let start = json[0]["range"]["start"].as_u64().expect("range start");
    assert!(start as usize <= source.len());
}
