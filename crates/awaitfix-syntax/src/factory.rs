//! Constructors for synthesized tokens and nodes.
//!
//! Synthesized syntax carries no trivia unless a caller adds it; rewrites
//! transfer trivia from the syntax being replaced.

use crate::green::{GreenNode, GreenToken, Trivia};
use crate::kind::SyntaxKind;

/// A trivia-free token with the fixed text of `kind`.
pub fn token(kind: SyntaxKind) -> GreenToken {
    GreenToken::new(kind, kind.fixed_text().unwrap_or_default())
}

/// `kind` followed by a single space.
pub fn token_with_space(kind: SyntaxKind, leading: Trivia) -> GreenToken {
    GreenToken::with_trivia(
        kind,
        kind.fixed_text().unwrap_or_default(),
        leading,
        Trivia::whitespace(" "),
    )
}

pub fn identifier(text: &str) -> GreenToken {
    GreenToken::new(SyntaxKind::Identifier, text)
}

pub fn identifier_name(text: &str) -> GreenNode {
    GreenNode::new(SyntaxKind::IdentifierName, vec![identifier(text).into()])
}

/// `name<argument>`.
pub fn generic_name(name: &str, argument: GreenNode) -> GreenNode {
    let arguments = GreenNode::new(
        SyntaxKind::TypeArgumentList,
        vec![
            token(SyntaxKind::LessThanToken).into(),
            argument.into(),
            token(SyntaxKind::GreaterThanToken).into(),
        ],
    );
    GreenNode::new(
        SyntaxKind::GenericName,
        vec![identifier(name).into(), arguments.into()],
    )
}

/// Left-associative name from dotted text: `A.B.C` is `(A.B).C`. A leading
/// `alias::` becomes an alias-qualified name. Returns `None` for empty text
/// or empty segments.
pub fn qualified_name(dotted: &str) -> Option<GreenNode> {
    let (alias, rest) = match dotted.split_once("::") {
        Some((alias, rest)) => (Some(alias), rest),
        None => (None, dotted),
    };
    let mut segments = rest.split('.');
    let first = segments.next().filter(|segment| !segment.is_empty())?;
    let mut name = identifier_name(first);
    if let Some(alias) = alias {
        if alias.is_empty() {
            return None;
        }
        name = GreenNode::new(
            SyntaxKind::AliasQualifiedName,
            vec![
                identifier_name(alias).into(),
                token(SyntaxKind::ColonColonToken).into(),
                name.into(),
            ],
        );
    }
    for segment in segments {
        if segment.is_empty() {
            return None;
        }
        name = qualify(name, identifier_name(segment));
    }
    Some(name)
}

/// `left.right`.
pub fn qualify(left: GreenNode, right: GreenNode) -> GreenNode {
    GreenNode::new(
        SyntaxKind::QualifiedName,
        vec![left.into(), token(SyntaxKind::DotToken).into(), right.into()],
    )
}

/// `simple` qualified by `namespace`, or `simple` alone for an empty
/// namespace.
pub fn namespace_qualified(namespace: &str, simple: GreenNode) -> GreenNode {
    match qualified_name(namespace) {
        Some(left) => qualify(left, simple),
        None => simple,
    }
}

#[cfg(test)]
#[path = "tests/factory_tests.rs"]
mod tests;
