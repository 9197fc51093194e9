//! Decaying trust scores for companies, anchored by occasional lookups
//! against the public SIRENE registry.
//!
//! The scoring engine is the core: it decides, per evaluation, whether to
//! re-query the registry, decay the score, or leave the record untouched.
//! Everything else — the registry client, the HTTP surface, configuration,
//! telemetry — is a thin collaborator around it.

pub mod authority;
pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
