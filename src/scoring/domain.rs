use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of check an evaluation tracks. Only `SIREN` drives active
/// update logic today; any other tag is carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EvaluationKind {
    Siren,
    Other(String),
}

impl EvaluationKind {
    pub fn label(&self) -> &str {
        match self {
            EvaluationKind::Siren => "SIREN",
            EvaluationKind::Other(tag) => tag,
        }
    }
}

impl From<String> for EvaluationKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "SIREN" => EvaluationKind::Siren,
            _ => EvaluationKind::Other(value),
        }
    }
}

impl From<EvaluationKind> for String {
    fn from(value: EvaluationKind) -> Self {
        value.label().to_string()
    }
}

/// Trust standing of an evaluated company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustState {
    Favorable,
    Unfavorable,
    Unconfirmed,
}

impl TrustState {
    pub const fn label(self) -> &'static str {
        match self {
            TrustState::Favorable => "favorable",
            TrustState::Unfavorable => "unfavorable",
            TrustState::Unconfirmed => "unconfirmed",
        }
    }
}

/// Classification tag attached to a trust state.
///
/// `OngoingDatabaseUpdate` and `UnableToReachApi` influence the update
/// rules; `CompanyOpened` and `CompanyClosed` are terminal descriptions
/// set by lookup results. Anything else is preserved verbatim and feeds
/// the no-op branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Reason {
    OngoingDatabaseUpdate,
    UnableToReachApi,
    CompanyOpened,
    CompanyClosed,
    Other(String),
}

impl Reason {
    pub fn label(&self) -> &str {
        match self {
            Reason::OngoingDatabaseUpdate => "ongoing_database_update",
            Reason::UnableToReachApi => "unable_to_reach_api",
            Reason::CompanyOpened => "company_opened",
            Reason::CompanyClosed => "company_closed",
            Reason::Other(tag) => tag,
        }
    }
}

impl From<String> for Reason {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ongoing_database_update" => Reason::OngoingDatabaseUpdate,
            "unable_to_reach_api" => Reason::UnableToReachApi,
            "company_opened" => Reason::CompanyOpened,
            "company_closed" => Reason::CompanyClosed,
            _ => Reason::Other(value),
        }
    }
}

impl From<Reason> for String {
    fn from(value: Reason) -> Self {
        value.label().to_string()
    }
}

/// One company's trust assessment for one evaluation kind.
///
/// Constructed by the caller, mutated in place by the engine exactly once
/// per update pass, and handed back for persistence or transmission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    #[serde(rename = "type")]
    pub kind: EvaluationKind,
    pub value: String,
    pub score: u8,
    pub state: TrustState,
    pub reason: Reason,
}

impl Evaluation {
    /// Decay the score, clamped at the zero floor.
    pub fn decrease(&mut self, amount: u8) {
        self.score = self.score.saturating_sub(amount);
    }

    /// Overwrite state, reason, and score with a fresh lookup verdict,
    /// discarding prior decay history.
    pub fn reset_from(&mut self, verdict: Verdict) {
        self.state = verdict.state;
        self.reason = verdict.reason;
        self.score = verdict.score;
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}, {}",
            self.kind.label(),
            self.value,
            self.score,
            self.state.label(),
            self.reason.label()
        )
    }
}

/// Normalized result of one external lookup. Definitive answers and the
/// unreachable fallback all carry the full score, so every fresh verdict
/// restarts decay from the top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub state: TrustState,
    pub reason: Reason,
    pub score: u8,
}

impl Verdict {
    pub const FULL_SCORE: u8 = 100;

    pub fn company_opened() -> Self {
        Self {
            state: TrustState::Favorable,
            reason: Reason::CompanyOpened,
            score: Self::FULL_SCORE,
        }
    }

    pub fn company_closed() -> Self {
        Self {
            state: TrustState::Unfavorable,
            reason: Reason::CompanyClosed,
            score: Self::FULL_SCORE,
        }
    }

    pub fn unreachable() -> Self {
        Self {
            state: TrustState::Unconfirmed,
            reason: Reason::UnableToReachApi,
            score: Self::FULL_SCORE,
        }
    }
}

/// Lookup seam between update rules and the external authority, so tests
/// can substitute a double with no shared state. Implementations are
/// total: transport failures surface as the unreachable verdict, never as
/// an error.
pub trait AuthorityClient: Send + Sync {
    fn lookup(&self, identifier: &str) -> Verdict;
}
