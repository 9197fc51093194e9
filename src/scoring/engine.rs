use std::collections::BTreeMap;

use tracing::debug;

use super::domain::{Evaluation, EvaluationKind};

/// Per-kind update strategy. Each evaluation kind owns its own rule, so
/// additional categories register here without touching dispatch.
pub trait UpdateRule: Send + Sync {
    fn apply(&self, evaluation: &mut Evaluation);
}

/// Dispatches evaluations to the rule registered for their kind and
/// mutates them in place. Kinds without a registered rule are skipped
/// untouched, and no lookup is performed for them.
pub struct ScoreUpdateEngine {
    rules: BTreeMap<EvaluationKind, Box<dyn UpdateRule>>,
}

impl ScoreUpdateEngine {
    pub fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    pub fn with_rule(mut self, kind: EvaluationKind, rule: Box<dyn UpdateRule>) -> Self {
        self.rules.insert(kind, rule);
        self
    }

    /// Run one update pass, sequentially and in input order. Each
    /// evaluation is an independent unit; no update depends on another's.
    pub fn update_all(&self, evaluations: &mut [Evaluation]) {
        for evaluation in evaluations.iter_mut() {
            if let Some(rule) = self.rules.get(&evaluation.kind) {
                rule.apply(evaluation);
            }
        }
        debug!(count = evaluations.len(), "evaluation update pass complete");
    }
}

impl Default for ScoreUpdateEngine {
    fn default() -> Self {
        Self::new()
    }
}
