//! Atelier Lead Capture
//!
//! This crate provides the lead-capture domain for the Atelier marketing
//! site: the contact form state, the wire payload sent to the automation
//! webhook, and the delivery workflow. It compiles natively and for
//! `wasm32-unknown-unknown`, so the submission semantics exercised by the
//! browser are the same ones covered by the native test suite.

pub mod form;
pub mod payload;
pub mod status;
pub mod webhook;

use thiserror::Error;

pub use form::{CountryCode, FormField, FormState};
pub use payload::LeadPayload;
pub use status::SubmissionStatus;
pub use webhook::WebhookClient;

/// Production endpoint of the automation webhook that receives leads.
pub const WEBHOOK_URL: &str = "https://hook.us1.make.com/ky7lo8srgbhqhj0z29gyfrx8w4kjpsiw";

#[derive(Error, Debug)]
pub enum LeadsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("webhook rejected submission: HTTP {status}")]
    Rejected { status: u16 },
}

pub type LeadsResult<T> = Result<T, LeadsError>;

/// Configuration for webhook delivery
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// Endpoint the lead payload is POSTed to
    pub endpoint: String,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            endpoint: WEBHOOK_URL.to_string(),
        }
    }
}
