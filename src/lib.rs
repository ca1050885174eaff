//! awaitfix: make-method-asynchronous code fixes for C#.
//!
//! The workspace is split the same way requests flow through it:
//! - `awaitfix_syntax` - Lossless C# syntax trees (scanner, parser, green/red tree)
//! - `awaitfix_fixes` - Container lookup, planning and rewriting
//!
//! This crate re-exports both and adds the host-side pieces: tracing setup,
//! options files, and a one-call entry point.

pub use awaitfix_fixes as fixes;
pub use awaitfix_syntax as syntax;

pub use awaitfix_fixes::{
    CancellationToken, CodeFix, CodeFixInfo, CodeFixRegistry, FixError, FixOptions,
    MakeAsyncFixProvider, NameForm, NoFixReason, SuffixPolicy, TaskNameMatch, TaskNameResolver,
    TextChange, UsingDirectiveResolver,
};
pub use awaitfix_syntax::{SyntaxTree, TextRange};

// Options files
pub mod config;
pub use config::{load_options, load_options_or_default};

// Tracing subscriber setup
pub mod tracing_config;

/// Parse `text` and compute fixes for the await at `span`, resolving the task
/// name from the file's `using` directives.
pub fn make_async_fixes(
    file_name: &str,
    text: &str,
    span: TextRange,
    options: FixOptions,
    cancel: &CancellationToken,
) -> Result<Vec<CodeFix>, FixError> {
    let tree = SyntaxTree::parse_file(file_name, text);
    MakeAsyncFixProvider::new(tree, UsingDirectiveResolver, options).provide_fixes_for_span(span, cancel)
}
