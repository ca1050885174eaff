//! Lossless C# syntax trees for the awaitfix code fixes.
//!
//! This crate provides the syntax substrate the fixes operate on:
//! - `SyntaxKind` - Token and node kinds
//! - `Scanner` - Trivia-preserving tokenizer
//! - `ParserState` - Tolerant recursive-descent parser for the asynchronization surface
//! - `GreenNode` / `GreenToken` - Immutable, `Arc`-shared tree storage
//! - `SyntaxNode` / `SyntaxToken` - Parent-aware cursors over green nodes
//! - `ast` - Typed views (methods, lambdas, await expressions, ...)
//! - `factory` - Constructors for synthesized nodes and tokens
//!
//! Trees are never mutated. Edits build a new root that shares every
//! untouched subtree with the original.

// Token and node kinds
pub mod kind;
pub use kind::SyntaxKind;

// Byte ranges in source text
pub mod text_range;
pub use text_range::TextRange;

// Recursion limits
pub mod limits;

// Green tree storage and trivia
pub mod green;
pub use green::{GreenElement, GreenNode, GreenToken, Trivia, TriviaKind, TriviaPiece};

// Red cursors
pub mod node;
pub use node::{SyntaxElement, SyntaxNode, SyntaxToken};

// Lexical analysis
pub mod scanner;
pub use scanner::Scanner;

// Parsing
pub mod parser;
pub use parser::{ParseDiagnostic, ParserState};

// Typed views over nodes
pub mod ast;

// Node construction helpers
pub mod factory;

// Parsed tree values
pub mod tree;
pub use tree::SyntaxTree;
