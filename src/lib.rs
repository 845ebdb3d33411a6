//! Simulation readiness core.
//!
//! Answers one question for a building-energy configuration: can a
//! simulation be generated and run, and if not, what is missing?
//!
//! - [`validate()`] cross-checks the configuration document against itself
//!   and the geometry zone list and returns [`Diagnostics`].
//! - [`evaluate()`] turns diagnostics into a fixed seven-step checklist.
//! - [`parse_compact`] / [`serialize_compact`] convert compact schedule lines
//!   to and from structured rows.
//!
//! All three are pure: no I/O, no shared state, safe to call concurrently.
//! The [`host`] module is the boundary to the embedding application and the
//! `simready` binary is a file-backed reference host.
pub mod cli;
pub mod compact;
pub mod document;
pub mod guard;
pub mod host;
pub mod output;
pub mod readiness;
pub mod util;
pub mod validate;
pub mod workflow;

pub use compact::{lint_compact, parse_compact, serialize_compact, CompactLintIssue, Row};
pub use document::{ConfigurationDocument, Zone};
pub use guard::DeletionBlocked;
pub use host::{check_readiness, ReadinessReport, SimulationHost};
pub use readiness::{
    evaluate, ActionId, ReadinessAction, ReadinessStep, RuntimeCapabilities, StepId, StepStatus,
};
pub use validate::{validate, Diagnostics, Issue, Severity};
