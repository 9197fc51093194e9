use std::sync::Arc;

use tracing::debug;

use super::domain::{AuthorityClient, Evaluation, Reason, TrustState};
use super::engine::UpdateRule;

/// Update rule for SIREN-backed company evaluations.
///
/// One of four mutually exclusive branches fires per pass, in priority
/// order: the unfavorable floor, a fresh lookup reset, favorable decay,
/// or unreachable-API decay. Every other state/reason combination is a
/// no-op.
pub struct SirenRule {
    authority: Arc<dyn AuthorityClient>,
}

impl SirenRule {
    pub fn new(authority: Arc<dyn AuthorityClient>) -> Self {
        Self { authority }
    }

    /// Lookup triggers: an exhausted score, or a read the authority itself
    /// flagged as stale. The stale-read trigger applies at any score.
    fn needs_lookup(evaluation: &Evaluation) -> bool {
        evaluation.score == 0
            || (evaluation.state == TrustState::Unconfirmed
                && evaluation.reason == Reason::OngoingDatabaseUpdate)
    }
}

impl UpdateRule for SirenRule {
    fn apply(&self, evaluation: &mut Evaluation) {
        // Unfavorable is a monotonic floor; this rule never re-queries
        // from it.
        if evaluation.state == TrustState::Unfavorable {
            return;
        }

        if Self::needs_lookup(evaluation) {
            let verdict = self.authority.lookup(&evaluation.value);
            debug!(siren = %evaluation.value, verdict_state = verdict.state.label(), "resetting evaluation from lookup");
            evaluation.reset_from(verdict);
            return;
        }

        if evaluation.state == TrustState::Favorable {
            evaluation.decrease(1);
        } else if evaluation.state == TrustState::Unconfirmed
            && evaluation.reason == Reason::UnableToReachApi
        {
            let amount = if evaluation.score >= 50 { 5 } else { 1 };
            evaluation.decrease(amount);
        }
        // Any other state/reason combination is a no-op.
    }
}
