//! Plan application.
//!
//! The rewriter builds a new container node and then rebuilds the spine up
//! to the root with `replace_child`, so every subtree off that path is shared
//! with the input tree. Trivia moves with the tokens it belongs to: the
//! `async` marker takes over the leading trivia of whatever it is inserted
//! in front of.

use crate::cancellation::CancellationToken;
use crate::error::{FixError, NoFixReason};
use crate::locator::Container;
use crate::planner::RewritePlan;
use awaitfix_syntax::{
    GreenElement, GreenNode, SyntaxKind, SyntaxNode, SyntaxTree, Trivia, factory,
};
use tracing::debug;

/// Apply `plan` to `container`, returning a new tree. `tree` is unchanged.
pub fn apply_plan(
    tree: &SyntaxTree,
    container: &Container,
    plan: &RewritePlan,
    cancel: &CancellationToken,
) -> Result<SyntaxTree, FixError> {
    cancel.check()?;
    let node = container.syntax();
    let rewritten = match container {
        Container::NamedMethod(_) | Container::LocalFunction(_) => rewrite_header(node, plan)?,
        Container::Lambda { .. } => {
            let anchor = node
                .children_with_tokens()
                .position(|element| {
                    matches!(
                        element.kind(),
                        SyntaxKind::ParameterList | SyntaxKind::Parameter
                    )
                })
                .ok_or(NoFixReason::NoEnclosingContainer)?;
            insert_async_before(node.green(), anchor, plan)
        }
        Container::AnonymousFunction { .. } => {
            let anchor = node
                .children_with_tokens()
                .position(|element| element.kind() == SyntaxKind::DelegateKeyword)
                .ok_or(NoFixReason::NoEnclosingContainer)?;
            insert_async_before(node.green(), anchor, plan)
        }
    };
    let root = rebuild_spine(node, rewritten, cancel)?;
    debug!(label = %plan.label, container = container.kind_name(), "applied rewrite plan");
    Ok(tree.with_root(root))
}

/// Modifiers, return type and identifier of a method or local function.
fn rewrite_header(node: &SyntaxNode, plan: &RewritePlan) -> Result<GreenNode, FixError> {
    let green = node.green();
    let mut children: Vec<GreenElement> = green.children().to_vec();

    let type_index = children
        .iter()
        .position(|child| child.kind().is_type())
        .ok_or(NoFixReason::UnsupportedContainerKind)?;
    let old_type = children[type_index]
        .as_node()
        .cloned()
        .ok_or(NoFixReason::UnsupportedContainerKind)?;
    let leading = old_type
        .first_token()
        .map(|token| token.leading().clone())
        .unwrap_or_default();
    let trailing = old_type
        .last_token()
        .map(|token| token.trailing().clone())
        .unwrap_or_default();

    if plan.new_modifier_async {
        let modifiers_index = children[..type_index]
            .iter()
            .position(|child| child.kind() == SyntaxKind::ModifierList)
            .ok_or(NoFixReason::NoEnclosingContainer)?;
        let modifiers = children[modifiers_index]
            .as_node()
            .cloned()
            .ok_or(NoFixReason::NoEnclosingContainer)?;
        let marker = factory::token_with_space(SyntaxKind::AsyncKeyword, leading.clone());
        children[modifiers_index] = modifiers
            .insert_child(modifiers.children().len(), marker.into())
            .into();
    }

    let new_type = match &plan.new_return_type {
        Some(replacement) => replacement
            .map_first_token(|token| token.with_leading(Trivia::new()))
            .and_then(|node| node.map_last_token(|token| token.with_trailing(trailing)))
            .unwrap_or_else(|| replacement.clone()),
        None => old_type.clone(),
    };
    let new_type = if plan.new_modifier_async {
        new_type
            .map_first_token(|token| token.with_leading(Trivia::new()))
            .unwrap_or(new_type)
    } else if plan.new_return_type.is_some() {
        new_type
            .map_first_token(|token| token.with_leading(leading))
            .unwrap_or(new_type)
    } else {
        new_type
    };
    children[type_index] = new_type.into();

    if let Some(identifier) = &plan.new_identifier {
        let identifier_index = children
            .iter()
            .enumerate()
            .skip(type_index + 1)
            .find_map(|(index, child)| {
                child
                    .as_token()
                    .filter(|token| token.kind() == SyntaxKind::Identifier && !token.is_missing())
                    .map(|_| index)
            })
            .ok_or(NoFixReason::NoEnclosingContainer)?;
        if let Some(token) = children[identifier_index].as_token() {
            children[identifier_index] = token.with_text(identifier.as_str()).into();
        }
    }

    Ok(GreenNode::new(green.kind(), children))
}

/// Insert `async` before child `anchor`, moving the anchor's leading trivia
/// onto the marker.
fn insert_async_before(green: &GreenNode, anchor: usize, plan: &RewritePlan) -> GreenNode {
    if !plan.new_modifier_async {
        return green.clone();
    }
    let Some(anchor_element) = green.children().get(anchor) else {
        return green.clone();
    };
    let (leading, stripped): (Trivia, GreenElement) = match anchor_element {
        GreenElement::Token(token) => (
            token.leading().clone(),
            token.with_leading(Trivia::new()).into(),
        ),
        GreenElement::Node(node) => {
            let leading = node
                .first_token()
                .map(|token| token.leading().clone())
                .unwrap_or_default();
            let stripped = node
                .map_first_token(|token| token.with_leading(Trivia::new()))
                .unwrap_or_else(|| node.clone());
            (leading, stripped.into())
        }
    };
    let marker = factory::token_with_space(SyntaxKind::AsyncKeyword, leading);
    green
        .replace_child(anchor, stripped)
        .insert_child(anchor, marker.into())
}

/// Replace `node` with `replacement` and rebuild every ancestor.
fn rebuild_spine(
    node: &SyntaxNode,
    replacement: GreenNode,
    cancel: &CancellationToken,
) -> Result<GreenNode, FixError> {
    let mut current = node.clone();
    let mut green = replacement;
    while let Some(parent) = current.parent() {
        cancel.check()?;
        green = parent.green().replace_child(current.index(), green.into());
        current = parent;
    }
    Ok(green)
}

#[cfg(test)]
#[path = "tests/rewriter_tests.rs"]
mod tests;
