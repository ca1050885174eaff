use crate::tracing_config::{LogFormat, expand_directives};

#[test]
fn test_log_format_names() {
    assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
    assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
    assert_eq!(LogFormat::parse("text"), LogFormat::Text);
    assert_eq!(LogFormat::parse(""), LogFormat::Text);
    assert_eq!(LogFormat::parse("xml"), LogFormat::Text);
}

#[test]
fn test_shorthands_expand_to_crate_targets() {
    assert_eq!(
        expand_directives("fixes"),
        "awaitfix_fixes=debug,awaitfix_fixes::locator=trace"
    );
    assert_eq!(
        expand_directives("parse, warn"),
        "awaitfix_syntax=trace,warn"
    );
}

#[test]
fn test_plain_directives_pass_through() {
    assert_eq!(
        expand_directives("awaitfix_fixes::rewriter=debug,,info"),
        "awaitfix_fixes::rewriter=debug,info"
    );
    assert_eq!(expand_directives(""), "");
}
