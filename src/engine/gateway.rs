// Showroom Engine — Webhook Gateway
//
// Single best-effort POST per call against the externally hosted automation
// webhooks. Transport failures, non-2xx statuses, and JSON-decode failures
// are logged and coerced to `None` — callers treat `None` as "no message
// produced", never as an exception. No retries, no timeout enforcement.

use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::atoms::types::{RawReply, TriggerType};
use crate::engine::payload::{
    AssistantForwardPayload, CustomerAgentPayload, LeadIntroPayload, LeadReplyPayload,
    TriggerPayload,
};

// ── Endpoint configuration ─────────────────────────────────────────────────

/// Static trigger-tag → URL table plus the fixed conversation endpoints.
/// An unmapped tag falls back to `default_url`; with nothing configured the
/// send is a logged no-op returning `None`.
///
/// Compile-time defaults come from `.env` via build.rs (`SHOWROOM_*` keys)
/// and can be overridden at runtime through settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Trigger tag → webhook URL.
    #[serde(default)]
    pub triggers: HashMap<String, String>,
    /// Simulated-customer-turn generator.
    #[serde(default)]
    pub customer_agent_url: String,
    /// Forwarding a customer message to the assistant.
    #[serde(default)]
    pub assistant_url: String,
    /// Two-phase lead-generation flow (distinct host).
    #[serde(default)]
    pub lead_url: String,
    /// Fallback for unmapped trigger tags.
    #[serde(default)]
    pub default_url: Option<String>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        let automation = option_env!("SHOWROOM_AUTOMATION_URL").unwrap_or("");
        let mut triggers = HashMap::new();
        if !automation.is_empty() {
            for trigger in TriggerType::ALL {
                triggers.insert(trigger.tag().to_string(), automation.to_string());
            }
        }
        EndpointConfig {
            triggers,
            customer_agent_url: option_env!("SHOWROOM_CUSTOMER_AGENT_URL")
                .unwrap_or("")
                .to_string(),
            assistant_url: automation.to_string(),
            lead_url: option_env!("SHOWROOM_LEAD_URL").unwrap_or("").to_string(),
            default_url: option_env!("SHOWROOM_DEFAULT_WEBHOOK_URL")
                .map(str::to_string)
                .filter(|u| !u.is_empty()),
        }
    }
}

impl EndpointConfig {
    /// Resolve the URL for a trigger tag, falling back to the default URL.
    pub fn url_for_trigger(&self, tag: &str) -> Option<String> {
        self.triggers
            .get(tag)
            .cloned()
            .filter(|u| !u.is_empty())
            .or_else(|| self.default_url.clone().filter(|u| !u.is_empty()))
    }

    fn resolve(&self, url: &str) -> Option<String> {
        if url.is_empty() {
            self.default_url.clone().filter(|u| !u.is_empty())
        } else {
            Some(url.to_string())
        }
    }
}

// ── Gateway ────────────────────────────────────────────────────────────────

pub struct Gateway {
    client: reqwest::Client,
    endpoints: parking_lot::Mutex<EndpointConfig>,
}

impl Gateway {
    pub fn new(endpoints: EndpointConfig) -> Self {
        Gateway {
            client: reqwest::Client::new(),
            endpoints: parking_lot::Mutex::new(endpoints),
        }
    }

    pub fn set_endpoints(&self, endpoints: EndpointConfig) {
        *self.endpoints.lock() = endpoints;
    }

    /// One best-effort POST. Every failure mode degrades to `None`.
    async fn post(&self, url: Option<String>, body: &impl Serialize) -> Option<RawReply> {
        let url = match url {
            Some(u) if !u.is_empty() => u,
            _ => {
                info!("[gateway] no webhook URL configured; skipping send");
                return None;
            }
        };

        let response = match self.client.post(&url).json(body).send().await {
            Ok(r) => r,
            Err(e) => {
                error!("[gateway] webhook request failed: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            warn!("[gateway] webhook returned status {}", response.status());
            return None;
        }

        match response.json::<RawReply>().await {
            Ok(reply) => Some(reply),
            Err(e) => {
                error!("[gateway] webhook response decode failed: {}", e);
                None
            }
        }
    }

    pub async fn send_trigger(&self, payload: &TriggerPayload) -> Option<RawReply> {
        let url = self.endpoints.lock().url_for_trigger(&payload.trigger_type);
        self.post(url, payload).await
    }

    pub async fn send_customer_agent(&self, payload: &CustomerAgentPayload) -> Option<RawReply> {
        let url = {
            let endpoints = self.endpoints.lock();
            endpoints.resolve(&endpoints.customer_agent_url)
        };
        self.post(url, payload).await
    }

    pub async fn send_assistant_forward(
        &self,
        payload: &AssistantForwardPayload,
    ) -> Option<RawReply> {
        let url = {
            let endpoints = self.endpoints.lock();
            endpoints.resolve(&endpoints.assistant_url)
        };
        self.post(url, payload).await
    }

    pub async fn send_lead_intro(&self, payload: &LeadIntroPayload) -> Option<RawReply> {
        let url = {
            let endpoints = self.endpoints.lock();
            endpoints.resolve(&endpoints.lead_url)
        };
        self.post(url, payload).await
    }

    pub async fn send_lead_reply(&self, payload: &LeadReplyPayload) -> Option<RawReply> {
        let url = {
            let endpoints = self.endpoints.lock();
            endpoints.resolve(&endpoints.lead_url)
        };
        self.post(url, payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> EndpointConfig {
        EndpointConfig {
            triggers: HashMap::new(),
            customer_agent_url: String::new(),
            assistant_url: String::new(),
            lead_url: String::new(),
            default_url: None,
        }
    }

    #[test]
    fn unmapped_trigger_falls_back_to_default_url() {
        let mut config = empty();
        config
            .triggers
            .insert("new_sale".to_string(), "https://hooks.example/a".to_string());
        config.default_url = Some("https://hooks.example/default".to_string());

        assert_eq!(
            config.url_for_trigger("new_sale").as_deref(),
            Some("https://hooks.example/a")
        );
        assert_eq!(
            config.url_for_trigger("one_year_followup").as_deref(),
            Some("https://hooks.example/default")
        );
    }

    #[test]
    fn nothing_configured_resolves_to_none() {
        let config = empty();
        assert!(config.url_for_trigger("new_sale").is_none());
        assert!(config.resolve("").is_none());
    }

    #[tokio::test]
    async fn unconfigured_send_is_a_noop_none() {
        let gateway = Gateway::new(empty());
        let payload = crate::engine::payload::lead_reply_payload("s", "hi");
        assert!(gateway.send_lead_reply(&payload).await.is_none());
    }
}
