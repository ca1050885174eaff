//! Fix configuration.
//!
//! Options are plain serde data so hosts can embed them in their own settings
//! files. Every field has a default; an empty JSON object is a valid config.

use serde::{Deserialize, Serialize};

/// What to do when the identifier already ends with the async suffix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SuffixPolicy {
    /// Append the suffix unconditionally (`TestAsync` becomes `TestAsyncAsync`).
    #[default]
    Always,
    /// Leave identifiers that already end with the suffix alone.
    SkipIfPresent,
}

/// How a declared return type is matched against the task type name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskNameMatch {
    /// Compare only the rightmost simple name.
    #[default]
    TrailingName,
    /// Unqualified names match; qualified names must use the task namespace.
    Qualified,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FixOptions {
    pub async_suffix: String,
    pub suffix_policy: SuffixPolicy,
    pub task_type_name: String,
    pub task_namespace: String,
    pub task_name_match: TaskNameMatch,
}

impl Default for FixOptions {
    fn default() -> Self {
        Self {
            async_suffix: "Async".to_string(),
            suffix_policy: SuffixPolicy::Always,
            task_type_name: "Task".to_string(),
            task_namespace: "System.Threading.Tasks".to_string(),
            task_name_match: TaskNameMatch::TrailingName,
        }
    }
}

impl FixOptions {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The renamed identifier, or `None` when no rename applies.
    pub fn renamed(&self, identifier: &str) -> Option<String> {
        if self.async_suffix.is_empty() {
            return None;
        }
        if self.suffix_policy == SuffixPolicy::SkipIfPresent
            && identifier.ends_with(self.async_suffix.as_str())
        {
            return None;
        }
        Some(format!("{identifier}{}", self.async_suffix))
    }
}

#[cfg(test)]
#[path = "tests/options_tests.rs"]
mod tests;
