use std::sync::{Arc, Mutex};

use crate::scoring::domain::{
    AuthorityClient, Evaluation, EvaluationKind, Reason, TrustState, Verdict,
};
use crate::scoring::engine::ScoreUpdateEngine;
use crate::scoring::rules::SirenRule;

pub(super) fn siren_evaluation(state: TrustState, reason: Reason, score: u8) -> Evaluation {
    Evaluation {
        kind: EvaluationKind::Siren,
        value: "832940670".to_string(),
        score,
        state,
        reason,
    }
}

pub(super) fn vat_evaluation(state: TrustState, reason: Reason, score: u8) -> Evaluation {
    Evaluation {
        kind: EvaluationKind::Other("VAT".to_string()),
        value: "FR32832940670".to_string(),
        score,
        state,
        reason,
    }
}

pub(super) fn siren_engine(authority: Arc<dyn AuthorityClient>) -> ScoreUpdateEngine {
    ScoreUpdateEngine::new().with_rule(EvaluationKind::Siren, Box::new(SirenRule::new(authority)))
}

/// Double returning a fixed verdict while recording every identifier it
/// was asked about.
pub(super) struct StaticAuthority {
    verdict: Verdict,
    calls: Mutex<Vec<String>>,
}

impl StaticAuthority {
    pub(super) fn new(verdict: Verdict) -> Arc<Self> {
        Arc::new(Self {
            verdict,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub(super) fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("authority mutex poisoned").clone()
    }
}

impl AuthorityClient for StaticAuthority {
    fn lookup(&self, identifier: &str) -> Verdict {
        self.calls
            .lock()
            .expect("authority mutex poisoned")
            .push(identifier.to_string());
        self.verdict.clone()
    }
}

pub(super) async fn read_json_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
