//! Parsed syntax tree values.

use crate::green::GreenNode;
use crate::node::SyntaxNode;
use crate::parser::{ParseDiagnostic, ParserState};
use std::sync::Arc;
use tracing::debug;

/// An immutable tree: the root green node plus the diagnostics recorded
/// while parsing it. Cloning is cheap.
#[derive(Clone, Debug)]
pub struct SyntaxTree {
    file_name: Arc<str>,
    green: GreenNode,
    diagnostics: Arc<[ParseDiagnostic]>,
}

impl SyntaxTree {
    pub fn parse(text: &str) -> SyntaxTree {
        SyntaxTree::parse_file("source.cs", text)
    }

    pub fn parse_file(file_name: &str, text: &str) -> SyntaxTree {
        let mut parser = ParserState::new(file_name.to_string(), text.to_string());
        let green = parser.parse_source_file();
        let diagnostics = parser.take_diagnostics();
        debug!(
            file = file_name,
            len = text.len(),
            diagnostics = diagnostics.len(),
            "parsed syntax tree"
        );
        SyntaxTree {
            file_name: Arc::from(file_name),
            green,
            diagnostics: diagnostics.into(),
        }
    }

    /// A tree over an existing root, without diagnostics.
    pub fn from_root(file_name: &str, green: GreenNode) -> SyntaxTree {
        SyntaxTree {
            file_name: Arc::from(file_name),
            green,
            diagnostics: Arc::from(Vec::new()),
        }
    }

    /// The same file with a new root. Diagnostics belong to the old text and
    /// are not carried over.
    pub fn with_root(&self, green: GreenNode) -> SyntaxTree {
        SyntaxTree {
            file_name: Arc::clone(&self.file_name),
            green,
            diagnostics: Arc::from(Vec::new()),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn green(&self) -> &GreenNode {
        &self.green
    }

    pub fn root(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    /// Source text, trivia included.
    pub fn text(&self) -> String {
        self.green.to_string()
    }

    pub fn diagnostics(&self) -> &[ParseDiagnostic] {
        &self.diagnostics
    }
}
