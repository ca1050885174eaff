//! Entry point: await location in, labelled fixed trees out.

use crate::cancellation::CancellationToken;
use crate::error::FixError;
use crate::locator::{find_await, locate_container};
use crate::options::FixOptions;
use crate::planner::{RewritePlan, plan_rewrites};
use crate::probe::TaskNameResolver;
use crate::registry::{CodeFixFileChange, CodeFixInfo, CodeFixRegistry};
use crate::return_type::classify_return_type;
use crate::rewriter::apply_plan;
use awaitfix_syntax::{SyntaxNode, SyntaxTree, TextRange};
use serde::Serialize;
use tracing::debug;

/// A single replacement in the original text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextChange {
    pub range: TextRange,
    pub new_text: String,
}

impl TextChange {
    /// The smallest single edit turning `old` into `new`.
    pub fn between(old: &str, new: &str) -> TextChange {
        let prefix = old
            .char_indices()
            .zip(new.chars())
            .find(|((_, a), b)| a != b)
            .map(|((index, _), _)| index)
            .unwrap_or_else(|| old.len().min(new.len()));
        let prefix = floor_char_boundary(new, prefix);

        let max_suffix = (old.len() - prefix).min(new.len() - prefix);
        let mut suffix = old
            .bytes()
            .rev()
            .zip(new.bytes().rev())
            .take(max_suffix)
            .take_while(|(a, b)| a == b)
            .count();
        while suffix > 0
            && (!old.is_char_boundary(old.len() - suffix)
                || !new.is_char_boundary(new.len() - suffix))
        {
            suffix -= 1;
        }

        TextChange {
            range: TextRange::new(prefix as u32, (old.len() - suffix) as u32),
            new_text: new[prefix..new.len() - suffix].to_string(),
        }
    }

    /// `original` with this change applied.
    pub fn apply(&self, original: &str) -> String {
        let start = self.range.start as usize;
        let end = self.range.end as usize;
        format!("{}{}{}", &original[..start], self.new_text, &original[end..])
    }
}

fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// One computed fix: the plan's label and the rewritten tree.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeFix {
    pub label: String,
    pub fix_name: &'static str,
    pub preferred: bool,
    pub change: TextChange,
    #[serde(skip)]
    pub tree: SyntaxTree,
}

impl CodeFix {
    fn new(original: &SyntaxTree, plan: RewritePlan, tree: SyntaxTree) -> CodeFix {
        let change = TextChange::between(&original.text(), &tree.text());
        CodeFix {
            label: plan.label,
            fix_name: plan.fix_name,
            preferred: plan.preferred,
            change,
            tree,
        }
    }

    /// Text of the fixed file.
    pub fn text(&self) -> String {
        self.tree.text()
    }

    /// Host protocol shape, with fix-all metadata from the registry.
    pub fn to_info(&self, diagnostic_code: &str) -> CodeFixInfo {
        let registered = CodeFixRegistry::fixes_for_diagnostic_code(diagnostic_code)
            .into_iter()
            .find(|(fix_name, ..)| *fix_name == self.fix_name);
        CodeFixInfo {
            fix_name: self.fix_name.to_string(),
            description: self.label.clone(),
            changes: vec![CodeFixFileChange {
                file_name: self.tree.file_name().to_string(),
                text_changes: vec![self.change.clone()],
            }],
            commands: Vec::new(),
            fix_id: registered.map(|(_, fix_id, _, _)| fix_id.to_string()),
            fix_all_description: registered.map(|(_, _, _, all)| all.to_string()),
        }
    }
}

/// Computes make-async fixes for one tree.
pub struct MakeAsyncFixProvider<R> {
    tree: SyntaxTree,
    resolver: R,
    options: FixOptions,
}

impl<R: TaskNameResolver> MakeAsyncFixProvider<R> {
    pub fn new(tree: SyntaxTree, resolver: R, options: FixOptions) -> Self {
        Self {
            tree,
            resolver,
            options,
        }
    }

    pub fn tree(&self) -> &SyntaxTree {
        &self.tree
    }

    pub fn options(&self) -> &FixOptions {
        &self.options
    }

    /// Fixes for the await expression `await_node`, preferred first.
    ///
    /// Returns an empty list when no fix applies; fails only on cancellation.
    #[tracing::instrument(level = "debug", skip_all, fields(file = self.tree.file_name(), offset = await_node.offset()))]
    pub fn provide_fixes(
        &self,
        await_node: &SyntaxNode,
        cancel: &CancellationToken,
    ) -> Result<Vec<CodeFix>, FixError> {
        match self.compute(await_node, cancel) {
            Err(FixError::NoFix(reason)) => {
                debug!(%reason, "no fix");
                Ok(Vec::new())
            }
            result => result,
        }
    }

    /// Fixes for the await expression a host span (usually a diagnostic
    /// range) refers to.
    #[tracing::instrument(level = "debug", skip_all, fields(file = self.tree.file_name(), start = range.start, end = range.end))]
    pub fn provide_fixes_for_span(
        &self,
        range: TextRange,
        cancel: &CancellationToken,
    ) -> Result<Vec<CodeFix>, FixError> {
        cancel.check()?;
        match find_await(&self.tree.root(), range) {
            Some(await_node) => self.provide_fixes(&await_node, cancel),
            None => {
                debug!("no await expression at span");
                Ok(Vec::new())
            }
        }
    }

    fn compute(
        &self,
        await_node: &SyntaxNode,
        cancel: &CancellationToken,
    ) -> Result<Vec<CodeFix>, FixError> {
        cancel.check()?;
        let container = locate_container(await_node, cancel)?;
        let return_type = classify_return_type(&container, &self.options);
        let form = self
            .resolver
            .name_form(container.syntax(), &self.options.task_namespace);
        debug!(
            container = container.kind_name(),
            ?return_type,
            ?form,
            "planning rewrites"
        );
        plan_rewrites(&container, &return_type, form, &self.options)
            .into_iter()
            .map(|plan| -> Result<CodeFix, FixError> {
                let tree = apply_plan(&self.tree, &container, &plan, cancel)?;
                Ok(CodeFix::new(&self.tree, plan, tree))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/provider_tests.rs"]
mod tests;
