//! Rewrite planning: container kind x return type class x name form.

use crate::locator::Container;
use crate::options::FixOptions;
use crate::probe::NameForm;
use crate::return_type::ReturnTypeClass;
use awaitfix_syntax::{GreenNode, SyntaxNode, Trivia, factory};
use rustc_hash::FxHashSet;

/// Fix name reported for every plan.
pub const FIX_NAME: &str = "makeMethodAsynchronous";

/// A fully specified candidate rewrite, not yet applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewritePlan {
    pub label: String,
    pub fix_name: &'static str,
    pub new_modifier_async: bool,
    /// Replacement return type, trivia-free.
    pub new_return_type: Option<GreenNode>,
    pub new_identifier: Option<String>,
    pub preferred: bool,
}

impl RewritePlan {
    fn new(label: String) -> Self {
        Self {
            label,
            fix_name: FIX_NAME,
            new_modifier_async: true,
            new_return_type: None,
            new_identifier: None,
            preferred: false,
        }
    }

    fn with_return_type(mut self, ty: GreenNode) -> Self {
        self.new_return_type = Some(ty);
        self
    }

    fn with_identifier(mut self, identifier: Option<String>) -> Self {
        self.new_identifier = identifier;
        self
    }
}

/// Candidate rewrites for `container`, in presentation order.
///
/// The first plan is the preferred one. For `void` methods and local
/// functions the `Task`-returning plan always comes before the one that
/// stays `void`.
pub fn plan_rewrites(
    container: &Container,
    return_type: &ReturnTypeClass,
    form: NameForm,
    options: &FixOptions,
) -> Vec<RewritePlan> {
    let mut plans = match container {
        Container::NamedMethod(_) => plan_named(container, "method", return_type, form, options),
        Container::LocalFunction(_) => {
            plan_named(container, "local function", return_type, form, options)
        }
        Container::Lambda { .. } => vec![RewritePlan::new("Make lambda async".to_string())],
        Container::AnonymousFunction { .. } => {
            vec![RewritePlan::new("Make anonymous method async".to_string())]
        }
    };

    let mut seen = FxHashSet::default();
    plans.retain(|plan| {
        seen.insert((
            plan.new_modifier_async,
            plan.new_return_type.as_ref().map(GreenNode::to_string),
            plan.new_identifier.clone(),
        ))
    });
    if let Some(first) = plans.first_mut() {
        first.preferred = true;
    }
    plans
}

fn plan_named(
    container: &Container,
    noun: &str,
    return_type: &ReturnTypeClass,
    form: NameForm,
    options: &FixOptions,
) -> Vec<RewritePlan> {
    let identifier = container
        .identifier()
        .and_then(|token| options.renamed(token.text()));
    let label = format!("Make {noun} async");
    match return_type {
        ReturnTypeClass::Void => vec![
            RewritePlan::new(label)
                .with_return_type(task_type(form, options))
                .with_identifier(identifier.clone()),
            RewritePlan::new(format!("Make {noun} async (stay void)")).with_identifier(identifier),
        ],
        ReturnTypeClass::TaskShaped | ReturnTypeClass::GenericTaskShaped(_) => {
            vec![RewritePlan::new(label).with_identifier(identifier)]
        }
        ReturnTypeClass::Other(inner) => vec![
            RewritePlan::new(label)
                .with_return_type(generic_task_type(inner, form, options))
                .with_identifier(identifier),
        ],
    }
}

/// `Task` or `System.Threading.Tasks.Task`.
fn task_type(form: NameForm, options: &FixOptions) -> GreenNode {
    spell(factory::identifier_name(&options.task_type_name), form, options)
}

/// `Task<T>` with `T` reused without its outer trivia.
fn generic_task_type(inner: &SyntaxNode, form: NameForm, options: &FixOptions) -> GreenNode {
    let green = inner.green();
    let stripped = green
        .map_first_token(|token| token.with_leading(Trivia::new()))
        .and_then(|node| node.map_last_token(|token| token.with_trailing(Trivia::new())))
        .unwrap_or_else(|| green.clone());
    spell(
        factory::generic_name(&options.task_type_name, stripped),
        form,
        options,
    )
}

fn spell(simple: GreenNode, form: NameForm, options: &FixOptions) -> GreenNode {
    match form {
        NameForm::Short => simple,
        NameForm::FullyQualified => factory::namespace_qualified(&options.task_namespace, simple),
    }
}

#[cfg(test)]
#[path = "tests/planner_tests.rs"]
mod tests;
