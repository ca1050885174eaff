//! Red cursors over the green tree.
//!
//! A `SyntaxNode` pairs a green node with its absolute offset and a pointer
//! to its parent cursor, which is what makes ancestor walks possible. Cursors
//! are cheap to clone and never mutate the underlying tree.

use crate::green::{GreenElement, GreenNode, GreenToken, Trivia};
use crate::kind::SyntaxKind;
use crate::text_range::TextRange;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

struct NodeData {
    green: GreenNode,
    parent: Option<SyntaxNode>,
    index: usize,
    offset: u32,
}

#[derive(Clone)]
pub struct SyntaxNode(Arc<NodeData>);

#[derive(Clone)]
pub struct SyntaxToken {
    parent: SyntaxNode,
    index: usize,
    offset: u32,
    green: GreenToken,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SyntaxElement {
    Node(SyntaxNode),
    Token(SyntaxToken),
}

impl SyntaxNode {
    pub fn new_root(green: GreenNode) -> SyntaxNode {
        SyntaxNode(Arc::new(NodeData {
            green,
            parent: None,
            index: 0,
            offset: 0,
        }))
    }

    fn new_child(green: GreenNode, parent: SyntaxNode, index: usize, offset: u32) -> SyntaxNode {
        SyntaxNode(Arc::new(NodeData {
            green,
            parent: Some(parent),
            index,
            offset,
        }))
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.0.green.kind()
    }

    #[inline]
    pub fn green(&self) -> &GreenNode {
        &self.0.green
    }

    pub fn parent(&self) -> Option<SyntaxNode> {
        self.0.parent.clone()
    }

    /// Position of this node among its parent's children (tokens included).
    #[inline]
    pub fn index(&self) -> usize {
        self.0.index
    }

    #[inline]
    pub fn offset(&self) -> u32 {
        self.0.offset
    }

    /// This node followed by every ancestor up to the root.
    pub fn ancestors(&self) -> impl Iterator<Item = SyntaxNode> + use<> {
        std::iter::successors(Some(self.clone()), SyntaxNode::parent)
    }

    pub fn root(&self) -> SyntaxNode {
        self.ancestors().last().unwrap_or_else(|| self.clone())
    }

    pub fn children_with_tokens(&self) -> impl Iterator<Item = SyntaxElement> + use<> {
        let parent = self.clone();
        let mut offset = self.offset();
        let children: Vec<GreenElement> = self.green().children().to_vec();
        children
            .into_iter()
            .enumerate()
            .map(move |(index, child)| {
                let start = offset;
                offset += child.full_len();
                match child {
                    GreenElement::Node(green) => SyntaxElement::Node(SyntaxNode::new_child(
                        green,
                        parent.clone(),
                        index,
                        start,
                    )),
                    GreenElement::Token(green) => SyntaxElement::Token(SyntaxToken {
                        parent: parent.clone(),
                        index,
                        offset: start,
                        green,
                    }),
                }
            })
    }

    pub fn children(&self) -> impl Iterator<Item = SyntaxNode> + use<> {
        self.children_with_tokens()
            .filter_map(|element| element.into_node())
    }

    pub fn child_node(&self, kind: SyntaxKind) -> Option<SyntaxNode> {
        self.children().find(|child| child.kind() == kind)
    }

    pub fn child_token(&self, kind: SyntaxKind) -> Option<SyntaxToken> {
        self.children_with_tokens()
            .filter_map(|element| element.into_token())
            .find(|token| token.kind() == kind)
    }

    /// Pre-order traversal of this node and all descendant nodes.
    pub fn descendants(&self) -> impl Iterator<Item = SyntaxNode> + use<> {
        let mut stack = vec![self.clone()];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            let mut children: Vec<SyntaxNode> = node.children().collect();
            children.reverse();
            stack.extend(children);
            Some(node)
        })
    }

    /// Every token under this node, in source order (missing tokens included).
    pub fn tokens(&self) -> impl Iterator<Item = SyntaxToken> + use<> {
        let mut stack = vec![SyntaxElement::Node(self.clone())];
        std::iter::from_fn(move || {
            loop {
                match stack.pop()? {
                    SyntaxElement::Token(token) => return Some(token),
                    SyntaxElement::Node(node) => {
                        let mut children: Vec<SyntaxElement> = node.children_with_tokens().collect();
                        children.reverse();
                        stack.extend(children);
                    }
                }
            }
        })
    }

    /// First token with source text.
    pub fn first_token(&self) -> Option<SyntaxToken> {
        self.tokens().find(|token| !token.is_missing())
    }

    /// Last token with source text.
    pub fn last_token(&self) -> Option<SyntaxToken> {
        self.tokens().filter(|token| !token.is_missing()).last()
    }

    /// Range including the leading and trailing trivia.
    pub fn full_range(&self) -> TextRange {
        TextRange::new(self.offset(), self.offset() + self.green().full_len())
    }

    /// Range of the node's text, excluding its outer trivia.
    pub fn text_range(&self) -> TextRange {
        match (self.first_token(), self.last_token()) {
            (Some(first), Some(last)) => {
                TextRange::new(first.text_range().start, last.text_range().end)
            }
            _ => TextRange::empty(self.offset()),
        }
    }

    /// Smallest descendant node whose text range contains `range`.
    pub fn covering_node(&self, range: TextRange) -> SyntaxNode {
        let mut current = self.clone();
        loop {
            let next = current
                .children()
                .find(|child| child.text_range().contains_range(range) && !child.text_range().is_empty());
            match next {
                Some(child) => current = child,
                None => return current,
            }
        }
    }

    /// Source text of the node without its outer trivia.
    pub fn trimmed_text(&self) -> String {
        self.green().trimmed_text()
    }
}

impl PartialEq for SyntaxNode {
    fn eq(&self, other: &Self) -> bool {
        self.offset() == other.offset() && self.green().ptr_eq(other.green())
    }
}

impl Eq for SyntaxNode {}

impl Hash for SyntaxNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        self.offset().hash(state);
        self.green().full_len().hash(state);
    }
}

impl fmt::Debug for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{}", self.kind(), self.full_range())
    }
}

impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.green(), f)
    }
}

impl SyntaxToken {
    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.green.kind()
    }

    #[inline]
    pub fn text(&self) -> &str {
        self.green.text()
    }

    #[inline]
    pub fn green(&self) -> &GreenToken {
        &self.green
    }

    pub fn parent(&self) -> SyntaxNode {
        self.parent.clone()
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn is_missing(&self) -> bool {
        self.green.is_missing()
    }

    pub fn leading(&self) -> &Trivia {
        self.green.leading()
    }

    pub fn trailing(&self) -> &Trivia {
        self.green.trailing()
    }

    pub fn full_range(&self) -> TextRange {
        TextRange::new(self.offset, self.offset + self.green.full_len())
    }

    /// Range of the token text, excluding trivia.
    pub fn text_range(&self) -> TextRange {
        let start = self.offset + self.green.leading().text_len();
        TextRange::new(start, start + self.green.text().len() as u32)
    }
}

impl PartialEq for SyntaxToken {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset && self.green.ptr_eq(&other.green)
    }
}

impl Eq for SyntaxToken {}

impl Hash for SyntaxToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        self.offset.hash(state);
    }
}

impl fmt::Debug for SyntaxToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{} {:?}", self.kind(), self.text_range(), self.text())
    }
}

impl SyntaxElement {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            SyntaxElement::Node(node) => node.kind(),
            SyntaxElement::Token(token) => token.kind(),
        }
    }

    pub fn into_node(self) -> Option<SyntaxNode> {
        match self {
            SyntaxElement::Node(node) => Some(node),
            SyntaxElement::Token(_) => None,
        }
    }

    pub fn into_token(self) -> Option<SyntaxToken> {
        match self {
            SyntaxElement::Node(_) => None,
            SyntaxElement::Token(token) => Some(token),
        }
    }
}
