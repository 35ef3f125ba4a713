//! # MetaLens Core
//!
//! This crate provides the two pipelines behind the MetaLens service:
//!
//! 1. **Extraction** ([`fetch_metadata`]): fetch a live page, parse its HTML,
//!    probe `robots.txt` and the conventional sitemap locations, and return a
//!    complete [`MetadataResult`].
//! 2. **Generation** ([`prompts::build_prompt`] → an [`providers::ai::AiProvider`]
//!    → [`parse_ai_payload`] → [`reconcile`]): ask a model for improved
//!    metadata plus a structured critique, defensively recover its JSON, and
//!    pin every verifiable technical field back to the extracted ground truth.

pub mod errors;
pub mod extract;
pub mod generate;
mod probes;
pub mod prompts;
pub mod providers;
pub mod types;

pub use errors::MetadataError;
pub use extract::fetch_metadata;
pub use generate::{parse_ai_payload, reconcile, recover_json};
pub use types::{
    AiAnalysis, AiPayload, GeneratedMetadata, Importance, MetadataResult, MissingField,
};
