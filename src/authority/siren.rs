use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, error};

use crate::config::AuthorityConfig;
use crate::scoring::{AuthorityClient, Verdict};

const ACTIVE_COMPANY_STATE: &str = "Actif";

/// Client for the public SIRENE record-search endpoint.
///
/// Queries are filtered to headquarters establishments and sorted by
/// last-processed date descending, so the first record is the freshest
/// view of the company. Only the administrative-status field of that
/// record is inspected.
pub struct SirenApiClient {
    http: Client,
    base_url: String,
    dataset: String,
}

/// Error raised while building the underlying HTTP client. Per-lookup
/// failures never surface here; they are absorbed into the unreachable
/// verdict.
#[derive(Debug, thiserror::Error)]
pub enum AuthorityError {
    #[error("failed to build registry http client: {0}")]
    Http(#[from] reqwest::Error),
}

impl SirenApiClient {
    pub fn new(config: &AuthorityConfig) -> Result<Self, AuthorityError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            dataset: config.dataset.clone(),
        })
    }

    fn fetch_company_state(&self, siren: &str) -> Result<String, LookupFailure> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("dataset", self.dataset.as_str()),
                ("q", siren),
                ("sort", "datederniertraitementetablissement"),
                ("refine.etablissementsiege", "oui"),
            ])
            .send()?
            .error_for_status()?;

        let payload: SearchResponse = response.json()?;
        payload
            .records
            .into_iter()
            .next()
            .ok_or(LookupFailure::NoRecords)?
            .fields
            .administrative_state
            .ok_or(LookupFailure::MissingState)
    }
}

impl AuthorityClient for SirenApiClient {
    fn lookup(&self, identifier: &str) -> Verdict {
        match self.fetch_company_state(identifier) {
            Ok(state) if state == ACTIVE_COMPANY_STATE => {
                debug!(siren = identifier, "registry reports an active headquarters");
                Verdict::company_opened()
            }
            Ok(state) => {
                debug!(siren = identifier, %state, "registry reports an inactive headquarters");
                Verdict::company_closed()
            }
            Err(failure) => {
                error!(siren = identifier, error = %failure, "siren registry lookup failed");
                Verdict::unreachable()
            }
        }
    }
}

/// Internal causes absorbed into the unreachable verdict.
#[derive(Debug, thiserror::Error)]
enum LookupFailure {
    #[error("registry transport failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("registry returned no records")]
    NoRecords,
    #[error("registry record is missing the administrative state")]
    MissingState,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    records: Vec<SearchRecord>,
}

#[derive(Debug, Deserialize)]
struct SearchRecord {
    fields: RecordFields,
}

#[derive(Debug, Deserialize)]
struct RecordFields {
    #[serde(rename = "etatadministratifetablissement")]
    administrative_state: Option<String>,
}
