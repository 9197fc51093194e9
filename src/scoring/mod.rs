//! Company trust scoring: the evaluation domain, per-kind update rules,
//! and the dispatch engine that mutates evaluation batches in place.

pub mod domain;
pub mod engine;
pub mod router;
pub mod rules;

#[cfg(test)]
mod tests;

pub use domain::{AuthorityClient, Evaluation, EvaluationKind, Reason, TrustState, Verdict};
pub use engine::{ScoreUpdateEngine, UpdateRule};
pub use router::evaluation_router;
pub use rules::SirenRule;
