//! Host-facing fix metadata.
//!
//! Hosts report diagnostics by code; the registry says which fixes apply to
//! a code, and `CodeFixInfo` is the serialized shape of a computed fix.

use crate::planner::FIX_NAME;
use crate::provider::TextChange;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeFixInfo {
    /// The internal name of the code fix ("makeMethodAsynchronous").
    pub fix_name: String,
    /// Human-readable description, the plan label.
    pub description: String,
    pub changes: Vec<CodeFixFileChange>,
    /// Commands to run after applying the fix. Always empty for now.
    pub commands: Vec<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix_all_description: Option<String>,
}

/// The edits a fix makes to one file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeFixFileChange {
    pub file_name: String,
    pub text_changes: Vec<TextChange>,
}

/// Mapping from compiler diagnostic codes to code fix metadata.
pub struct CodeFixRegistry;

impl CodeFixRegistry {
    /// Fixes applicable to a diagnostic code, as
    /// (`fix_name`, `fix_id`, `description`, `fix_all_description`) tuples.
    pub fn fixes_for_diagnostic_code(
        code: &str,
    ) -> Vec<(&'static str, &'static str, &'static str, &'static str)> {
        match code {
            // The 'await' operator can only be used within an async method.
            // Consider marking this method with the 'async' modifier and
            // changing its return type to 'Task<{0}>'.
            "CS4032" |
            // ... changing its return type to 'Task'.
            "CS4033" |
            // The 'await' operator can only be used within an async
            // lambda expression / anonymous method.
            "CS4034" => vec![(
                FIX_NAME,
                FIX_NAME,
                "Make method async",
                "Make all methods async",
            )],
            _ => Vec::new(),
        }
    }

    pub fn supported_diagnostic_codes() -> Vec<&'static str> {
        vec!["CS4032", "CS4033", "CS4034"]
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
