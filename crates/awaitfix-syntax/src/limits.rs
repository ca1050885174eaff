//! Centralized limits for the syntax crate.
//!
//! The parser is recursive descent, so nesting in the source maps directly
//! onto stack frames. These limits keep pathological input from overflowing
//! the stack; beyond them the parser degrades to flat token runs instead of
//! failing.

/// Maximum nesting depth of groups, blocks, lambdas and await operands.
///
/// Past this depth a bracketed group is collected as an opaque, balanced
/// token run and expression prefixes are kept as plain tokens.
///
/// ```csharp
/// // Each level below costs a few parser frames:
/// var x = F(F(F(F(F(F(/* ... thousands of levels ... */))))));
/// await await await await /* ... */ Task.Delay(1);
/// ```
pub const MAX_PARSE_DEPTH: u32 = 256;

/// Maximum nesting depth accepted by the speculative type scanner.
///
/// Type lookahead (`Dictionary<string, List<Task<int>>>`) recurses per type
/// argument; anything deeper is not treated as a type.
pub const MAX_TYPE_SCAN_DEPTH: u32 = 64;
