// Showroom Engine — Webhook Payload Builders
//
// Maps internal context/lead state to the flat wire records the automation
// host expects. No validation beyond shape; absent optional fields are
// omitted from the JSON body. No side effects.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::atoms::constants::CUSTOMER_PERSONALITY;
use crate::atoms::types::{DemoContext, Lead, TriggerType};

/// Dates cross the wire as `YYYY-MM-DD`.
pub fn wire_date(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

// ── Post-purchase trigger ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct TriggerPayload {
    pub session_id: String,
    pub customer_name: String,
    pub salesperson: String,
    pub vehicle: String,
    pub purchase_date: String,
    pub time_since_purchase: String,
    pub vehicle_type: String,
    pub channel: String,
    pub trigger_type: String,
    pub scenario_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_text: Option<String>,
}

pub fn trigger_payload(
    session_id: &str,
    context: &DemoContext,
    trigger: TriggerType,
    message_text: Option<&str>,
) -> TriggerPayload {
    TriggerPayload {
        session_id: session_id.to_string(),
        customer_name: context.customer_name.clone(),
        salesperson: context.salesperson.clone(),
        vehicle: context.vehicle.clone(),
        purchase_date: wire_date(&context.purchase_date),
        time_since_purchase: context.time_since_purchase.clone(),
        vehicle_type: context.vehicle_type.clone(),
        channel: context.channel.clone(),
        trigger_type: trigger.tag().to_string(),
        scenario_type: context.scenario.as_str().to_string(),
        message_text: message_text.map(str::to_string),
    }
}

// ── Simulated-customer generator ───────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct CustomerProfile {
    pub name: String,
    pub personality: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CustomerAgentPayload {
    pub session_id: String,
    pub customer_profile: CustomerProfile,
    pub salesperson: String,
    pub last_assistant_message: String,
}

pub fn customer_agent_payload(
    session_id: &str,
    customer_name: &str,
    salesperson: &str,
    last_assistant_message: &str,
) -> CustomerAgentPayload {
    CustomerAgentPayload {
        session_id: session_id.to_string(),
        customer_profile: CustomerProfile {
            name: customer_name.to_string(),
            personality: CUSTOMER_PERSONALITY.to_string(),
        },
        salesperson: salesperson.to_string(),
        last_assistant_message: last_assistant_message.to_string(),
    }
}

// ── Customer → assistant forward ───────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct AssistantForwardPayload {
    pub session_id: String,
    pub role: String,
    pub customer_name: String,
    pub salesperson: String,
    pub message: String,
}

pub fn assistant_forward_payload(
    session_id: &str,
    customer_name: &str,
    salesperson: &str,
    message: &str,
) -> AssistantForwardPayload {
    AssistantForwardPayload {
        session_id: session_id.to_string(),
        role: "customer".to_string(),
        customer_name: customer_name.to_string(),
        salesperson: salesperson.to_string(),
        message: message.to_string(),
    }
}

// ── Two-phase lead flow ────────────────────────────────────────────────────

/// Phase 1 carries the full lead record.
#[derive(Debug, Clone, Serialize)]
pub struct LeadIntroPayload {
    pub session_id: String,
    pub lead: Lead,
}

pub fn lead_intro_payload(session_id: &str, lead: &Lead) -> LeadIntroPayload {
    LeadIntroPayload {
        session_id: session_id.to_string(),
        lead: lead.clone(),
    }
}

/// Phase 2 carries only the session id and the customer's free-text reply;
/// the automation recalls the lead context from upstream state keyed by
/// session id.
#[derive(Debug, Clone, Serialize)]
pub struct LeadReplyPayload {
    pub session_id: String,
    pub message: String,
}

pub fn lead_reply_payload(session_id: &str, message: &str) -> LeadReplyPayload {
    LeadReplyPayload {
        session_id: session_id.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::generate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn trigger_payload_has_the_flat_wire_shape() {
        let ctx = generate::random_context(&mut StdRng::seed_from_u64(5), TriggerType::NewSale);
        let payload = trigger_payload("sess-1", &ctx, TriggerType::NewSale, None);
        let value = serde_json::to_value(&payload).expect("serialize");

        assert_eq!(value["session_id"], "sess-1");
        assert_eq!(value["trigger_type"], "new_sale");
        assert_eq!(value["scenario_type"], "recent_purchase");
        // YYYY-MM-DD, nothing else
        let date = value["purchase_date"].as_str().expect("purchase_date");
        assert_eq!(date.len(), 10);
        assert_eq!(date.matches('-').count(), 2);
        // absent optional text is omitted, not null
        assert!(value.get("message_text").is_none());
    }

    #[test]
    fn customer_agent_payload_carries_the_fixed_personality() {
        let payload = customer_agent_payload("s", "Pat Smith", "Dylan", "Hello!");
        assert_eq!(payload.customer_profile.personality, CUSTOMER_PERSONALITY);
        assert_eq!(payload.last_assistant_message, "Hello!");
    }

    #[test]
    fn forward_payload_is_tagged_as_customer() {
        let value =
            serde_json::to_value(assistant_forward_payload("s", "Pat", "Dylan", "Sure"))
                .expect("serialize");
        assert_eq!(value["role"], "customer");
        assert_eq!(value["message"], "Sure");
    }
}
