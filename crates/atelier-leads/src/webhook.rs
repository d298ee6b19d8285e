//! Webhook delivery client and submit workflow

use crate::form::FormState;
use crate::payload::LeadPayload;
use crate::status::SubmissionStatus;
use crate::{LeadsError, LeadsResult, WebhookConfig};

/// Client that forwards lead submissions to the automation webhook.
///
/// The same client compiles natively and for `wasm32`; in the browser the
/// request goes through the fetch API. No timeout is configured, so the
/// transport default applies.
pub struct WebhookClient {
    config: WebhookConfig,
    client: reqwest::Client,
}

impl WebhookClient {
    pub fn new(config: WebhookConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// POST a payload to the configured endpoint.
    ///
    /// Any 2xx response counts as delivered; the response body is not read.
    pub async fn deliver(&self, payload: &LeadPayload) -> LeadsResult<()> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LeadsError::Rejected {
                status: status.as_u16(),
            });
        }

        tracing::info!("lead delivered to webhook");
        Ok(())
    }

    /// Run one submission attempt to completion.
    ///
    /// Returns the form state to carry forward and the resulting status:
    /// on success the form resets to its defaults, on any failure it is
    /// returned unchanged so the visitor does not have to retype. Every
    /// exit path settles here, which lets the caller clear its submitting
    /// flag at a single point after the await.
    pub async fn submit(&self, form: FormState) -> (FormState, SubmissionStatus) {
        let payload = LeadPayload::from_form(&form);
        match self.deliver(&payload).await {
            Ok(()) => (FormState::default(), SubmissionStatus::Success),
            Err(err) => {
                tracing::warn!("lead delivery failed: {err}");
                (form, SubmissionStatus::Error)
            }
        }
    }
}

impl Default for WebhookClient {
    fn default() -> Self {
        Self::new(WebhookConfig::default())
    }
}
