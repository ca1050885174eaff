//! The make-method-async code fix.
//!
//! Given an `await` inside a unit that is not marked `async`, this crate
//! computes the rewrites that make the enclosing unit asynchronous:
//! - `locator` - Nearest enclosing container (method, local function, lambda, anonymous method)
//! - `return_type` - Classification of the container's declared return type
//! - `probe` - Whether the task type can be named without qualification
//! - `planner` - Ordered, labelled rewrite plans
//! - `rewriter` - Applies a plan to produce a new tree
//! - `provider` - Entry point tying the stages together
//! - `registry` - Diagnostic code to fix metadata
//!
//! Malformed syntax never faults: every stage reports a `NoFixReason` that the
//! provider turns into an empty fix list. Only cancellation aborts a request.

pub mod cancellation;
pub use cancellation::CancellationToken;

pub mod error;
pub use error::{FixError, NoFixReason};

pub mod options;
pub use options::{FixOptions, SuffixPolicy, TaskNameMatch};

pub mod locator;
pub use locator::{Container, find_await, locate_container};

pub mod return_type;
pub use return_type::{ReturnTypeClass, classify_return_type, classify_type};

pub mod probe;
pub use probe::{NameForm, TaskNameResolver, UsingDirectiveResolver};

pub mod planner;
pub use planner::{FIX_NAME, RewritePlan, plan_rewrites};

pub mod rewriter;
pub use rewriter::apply_plan;

pub mod registry;
pub use registry::{CodeFixInfo, CodeFixRegistry};

pub mod provider;
pub use provider::{CodeFix, MakeAsyncFixProvider, TextChange};
