//! Green tree: immutable, position-independent node storage.
//!
//! Green nodes know their kind, children and full text length, but not their
//! position or parent. They are reference counted, so an edited tree shares
//! every untouched subtree with the tree it was derived from.

use crate::kind::SyntaxKind;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Trivia
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriviaKind {
    Whitespace,
    EndOfLine,
    SingleLineComment,
    MultiLineComment,
    /// Preprocessor line (`#region`, `#if DEBUG`, ...).
    Directive,
}

impl TriviaKind {
    pub const fn is_comment(self) -> bool {
        matches!(
            self,
            TriviaKind::SingleLineComment | TriviaKind::MultiLineComment
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TriviaPiece {
    pub kind: TriviaKind,
    pub text: String,
}

impl TriviaPiece {
    pub fn new(kind: TriviaKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Ordered trivia attached to one side of a token.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Trivia {
    pieces: SmallVec<[TriviaPiece; 2]>,
}

impl Trivia {
    pub fn new() -> Self {
        Self::default()
    }

    /// A single whitespace piece, or empty trivia for an empty string.
    pub fn whitespace(text: &str) -> Self {
        let mut trivia = Self::new();
        if !text.is_empty() {
            trivia.push(TriviaPiece::new(TriviaKind::Whitespace, text));
        }
        trivia
    }

    pub fn push(&mut self, piece: TriviaPiece) {
        self.pieces.push(piece);
    }

    pub fn pieces(&self) -> &[TriviaPiece] {
        &self.pieces
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn has_comments(&self) -> bool {
        self.pieces.iter().any(|piece| piece.kind.is_comment())
    }

    pub fn text_len(&self) -> u32 {
        self.pieces.iter().map(|piece| piece.text.len() as u32).sum()
    }
}

impl fmt::Display for Trivia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for piece in &self.pieces {
            f.write_str(&piece.text)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Hash)]
struct GreenTokenData {
    kind: SyntaxKind,
    text: String,
    leading: Trivia,
    trailing: Trivia,
    missing: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GreenToken(Arc<GreenTokenData>);

impl GreenToken {
    pub fn new(kind: SyntaxKind, text: impl Into<String>) -> Self {
        Self::with_trivia(kind, text, Trivia::new(), Trivia::new())
    }

    pub fn with_trivia(
        kind: SyntaxKind,
        text: impl Into<String>,
        leading: Trivia,
        trailing: Trivia,
    ) -> Self {
        Self(Arc::new(GreenTokenData {
            kind,
            text: text.into(),
            leading,
            trailing,
            missing: false,
        }))
    }

    /// A zero-width token the parser inserts when an expected token is absent.
    pub fn missing(kind: SyntaxKind) -> Self {
        Self(Arc::new(GreenTokenData {
            kind,
            text: String::new(),
            leading: Trivia::new(),
            trailing: Trivia::new(),
            missing: true,
        }))
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.0.kind
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.0.text
    }

    #[inline]
    pub fn leading(&self) -> &Trivia {
        &self.0.leading
    }

    #[inline]
    pub fn trailing(&self) -> &Trivia {
        &self.0.trailing
    }

    #[inline]
    pub fn is_missing(&self) -> bool {
        self.0.missing
    }

    pub fn full_len(&self) -> u32 {
        self.0.leading.text_len() + self.0.text.len() as u32 + self.0.trailing.text_len()
    }

    pub fn with_leading(&self, leading: Trivia) -> Self {
        self.rebuild(self.0.text.clone(), leading, self.0.trailing.clone())
    }

    pub fn with_trailing(&self, trailing: Trivia) -> Self {
        self.rebuild(self.0.text.clone(), self.0.leading.clone(), trailing)
    }

    /// Same kind and trivia, new text.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        self.rebuild(text.into(), self.0.leading.clone(), self.0.trailing.clone())
    }

    fn rebuild(&self, text: String, leading: Trivia, trailing: Trivia) -> Self {
        Self(Arc::new(GreenTokenData {
            kind: self.0.kind,
            text,
            leading,
            trailing,
            missing: self.0.missing,
        }))
    }

    pub fn ptr_eq(&self, other: &GreenToken) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Display for GreenToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.0.leading, self.0.text, self.0.trailing)
    }
}

// ---------------------------------------------------------------------------
// Nodes
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Hash)]
struct GreenNodeData {
    kind: SyntaxKind,
    full_len: u32,
    children: Vec<GreenElement>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GreenNode(Arc<GreenNodeData>);

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum GreenElement {
    Node(GreenNode),
    Token(GreenToken),
}

impl GreenNode {
    pub fn new(kind: SyntaxKind, children: Vec<GreenElement>) -> Self {
        let full_len = children.iter().map(GreenElement::full_len).sum();
        Self(Arc::new(GreenNodeData {
            kind,
            full_len,
            children,
        }))
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.0.kind
    }

    #[inline]
    pub fn children(&self) -> &[GreenElement] {
        &self.0.children
    }

    #[inline]
    pub fn full_len(&self) -> u32 {
        self.0.full_len
    }

    pub fn ptr_eq(&self, other: &GreenNode) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// A copy with the child at `index` replaced. Out-of-range indices
    /// return the node unchanged.
    pub fn replace_child(&self, index: usize, child: GreenElement) -> GreenNode {
        if index >= self.0.children.len() {
            return self.clone();
        }
        let mut children = self.0.children.clone();
        children[index] = child;
        GreenNode::new(self.0.kind, children)
    }

    /// A copy with `child` inserted before position `index` (clamped).
    pub fn insert_child(&self, index: usize, child: GreenElement) -> GreenNode {
        let mut children = self.0.children.clone();
        let index = index.min(children.len());
        children.insert(index, child);
        GreenNode::new(self.0.kind, children)
    }

    /// First token that carries text, skipping missing tokens.
    pub fn first_token(&self) -> Option<&GreenToken> {
        self.0.children.iter().find_map(|child| match child {
            GreenElement::Token(token) if !token.is_missing() => Some(token),
            GreenElement::Token(_) => None,
            GreenElement::Node(node) => node.first_token(),
        })
    }

    /// Last token that carries text, skipping missing tokens.
    pub fn last_token(&self) -> Option<&GreenToken> {
        self.0.children.iter().rev().find_map(|child| match child {
            GreenElement::Token(token) if !token.is_missing() => Some(token),
            GreenElement::Token(_) => None,
            GreenElement::Node(node) => node.last_token(),
        })
    }

    /// Rebuild the node with its first present token transformed.
    /// Returns `None` when the node holds no present token.
    pub fn map_first_token(&self, f: impl FnOnce(&GreenToken) -> GreenToken) -> Option<GreenNode> {
        let index = self.0.children.iter().position(|child| match child {
            GreenElement::Token(token) => !token.is_missing(),
            GreenElement::Node(node) => node.first_token().is_some(),
        })?;
        let replacement = match &self.0.children[index] {
            GreenElement::Token(token) => GreenElement::Token(f(token)),
            GreenElement::Node(node) => GreenElement::Node(node.map_first_token(f)?),
        };
        Some(self.replace_child(index, replacement))
    }

    /// Rebuild the node with its last present token transformed.
    pub fn map_last_token(&self, f: impl FnOnce(&GreenToken) -> GreenToken) -> Option<GreenNode> {
        let index = self.0.children.iter().rposition(|child| match child {
            GreenElement::Token(token) => !token.is_missing(),
            GreenElement::Node(node) => node.last_token().is_some(),
        })?;
        let replacement = match &self.0.children[index] {
            GreenElement::Token(token) => GreenElement::Token(f(token)),
            GreenElement::Node(node) => GreenElement::Node(node.map_last_token(f)?),
        };
        Some(self.replace_child(index, replacement))
    }

    /// Text of the node without the outer trivia of its first and last tokens.
    pub fn trimmed_text(&self) -> String {
        let stripped = self
            .map_first_token(|token| token.with_leading(Trivia::new()))
            .and_then(|node| node.map_last_token(|token| token.with_trailing(Trivia::new())));
        match stripped {
            Some(node) => node.to_string(),
            None => String::new(),
        }
    }
}

impl fmt::Display for GreenNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for child in &self.0.children {
            write!(f, "{child}")?;
        }
        Ok(())
    }
}

impl GreenElement {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            GreenElement::Node(node) => node.kind(),
            GreenElement::Token(token) => token.kind(),
        }
    }

    pub fn full_len(&self) -> u32 {
        match self {
            GreenElement::Node(node) => node.full_len(),
            GreenElement::Token(token) => token.full_len(),
        }
    }

    pub fn as_node(&self) -> Option<&GreenNode> {
        match self {
            GreenElement::Node(node) => Some(node),
            GreenElement::Token(_) => None,
        }
    }

    pub fn as_token(&self) -> Option<&GreenToken> {
        match self {
            GreenElement::Node(_) => None,
            GreenElement::Token(token) => Some(token),
        }
    }
}

impl fmt::Display for GreenElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GreenElement::Node(node) => fmt::Display::fmt(node, f),
            GreenElement::Token(token) => fmt::Display::fmt(token, f),
        }
    }
}

impl From<GreenNode> for GreenElement {
    fn from(node: GreenNode) -> Self {
        GreenElement::Node(node)
    }
}

impl From<GreenToken> for GreenElement {
    fn from(token: GreenToken) -> Self {
        GreenElement::Token(token)
    }
}
