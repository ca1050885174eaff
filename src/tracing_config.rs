//! Tracing configuration for debugging fix requests.
//!
//! Supports three output formats controlled by `AWAITFIX_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `tree`: Hierarchical indented output via `tracing-tree`, one level per
//!   provider span
//! - `json`: One JSON object per span/event
//!
//! ## Quick start
//!
//! ```bash
//! # Why did this await get no fix?
//! AWAITFIX_LOG=debug AWAITFIX_LOG_FORMAT=tree cargo test -p awaitfix-fixes
//!
//! # Every step of the container ascent
//! AWAITFIX_LOG="awaitfix_fixes::locator=trace" cargo test
//!
//! # Fix pipeline at debug, parser recovery at trace
//! AWAITFIX_LOG=fixes,parse cargo test
//! ```
//!
//! ## Targets
//!
//! | target | level | what |
//! |---|---|---|
//! | `awaitfix_fixes::provider` | debug | one span per request (`file`, `offset` or `start`/`end`), the no-fix reason, the chosen container |
//! | `awaitfix_fixes::locator` | trace | each ancestor visited while looking for the container |
//! | `awaitfix_fixes::rewriter` | debug | each applied plan label |
//! | `awaitfix_syntax::parser` | trace | parse recovery with the offending range |
//! | `awaitfix_syntax::tree` | debug | one event per parsed file |
//!
//! Besides ordinary `EnvFilter` directives, `AWAITFIX_LOG` accepts the
//! shorthands `fixes` (the fix pipeline at debug, ascent at trace) and
//! `parse` (the syntax crate at trace).
//!
//! The subscriber is only initialised when `AWAITFIX_LOG` (or `RUST_LOG`) is
//! set, so hosts that install their own subscriber are left alone.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Unknown names fall back to `Text`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Read from the `AWAITFIX_LOG_FORMAT` environment variable.
    fn from_env() -> Self {
        Self::parse(&std::env::var("AWAITFIX_LOG_FORMAT").unwrap_or_default())
    }
}

/// Expand the `fixes` and `parse` shorthands in a comma-separated filter
/// string. Other directives pass through untouched.
pub fn expand_directives(value: &str) -> String {
    value
        .split(',')
        .map(str::trim)
        .filter(|directive| !directive.is_empty())
        .map(|directive| match directive {
            "fixes" => "awaitfix_fixes=debug,awaitfix_fixes::locator=trace",
            "parse" => "awaitfix_syntax=trace",
            other => other,
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Build an `EnvFilter` from `AWAITFIX_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("AWAITFIX_LOG") {
        EnvFilter::builder().parse_lossy(expand_directives(&val))
    } else {
        // RUST_LOG is set (caller already checked).
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `AWAITFIX_LOG` nor `RUST_LOG` is set. Calling it
/// again, or after the host installed a subscriber, is a no-op. All output
/// goes to stderr.
pub fn init_tracing() {
    let has_awaitfix_log = std::env::var("AWAITFIX_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_awaitfix_log && !has_rust_log {
        return;
    }

    let filter = build_filter();
    // `try_init` fails only when a global subscriber already exists.
    let _ = match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_span_retrace(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).try_init()
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).try_init()
        }
        LogFormat::Text => {
            let text_layer = fmt::layer().with_writer(std::io::stderr);

            Registry::default().with(filter).with(text_layer).try_init()
        }
    };
}

#[cfg(test)]
#[path = "tests/tracing_config_tests.rs"]
mod tests;
