// Showroom Engine — Response Normalizer
//
// Validates raw webhook responses and produces canonical transcript
// messages. Malformed payloads are rejected with `None` — never an error —
// and the companion `should_stop` predicate recognizes the stop sentinels
// that end an automated conversation.

use chrono::{DateTime, Utc};
use log::warn;

use crate::atoms::constants::STOP_SENTINEL;
use crate::atoms::types::{BackgroundActivity, ChatMessage, RawReply, Role};

/// Turn a raw webhook response into a transcript message.
///
/// Returns `None` when the response is missing a role, missing a message, or
/// the message trims to empty. Role `"assistant"` maps to [`Role::Assistant`];
/// anything else is treated as a customer turn. The sender label defaults to
/// `"Assistant"` for assistant messages and to the response's `customer_name`
/// (possibly absent) otherwise. Background activity is attached only to
/// assistant messages.
pub fn normalize(
    raw: &RawReply,
    timestamp: DateTime<Utc>,
    activity: Option<BackgroundActivity>,
) -> Option<ChatMessage> {
    let (role, message, customer_name) = match raw {
        RawReply::Message {
            role,
            message,
            customer_name,
        } => (role, message, customer_name),
        RawReply::Sentinel(_) => return None,
    };

    let Some(role) = role.as_deref() else {
        warn!("[normalizer] response missing role field");
        return None;
    };
    let Some(message) = message.as_deref() else {
        warn!("[normalizer] response missing message field");
        return None;
    };
    let text = message.trim();
    if text.is_empty() {
        warn!("[normalizer] response has empty message");
        return None;
    }

    let role = if role == "assistant" {
        Role::Assistant
    } else {
        Role::Customer
    };

    Some(ChatMessage {
        id: uuid::Uuid::new_v4().to_string(),
        role,
        text: text.to_string(),
        timestamp,
        sender_name: match role {
            Role::Assistant => Some("Assistant".to_string()),
            Role::Customer => customer_name.clone(),
        },
        background_activity: match role {
            Role::Assistant => activity,
            Role::Customer => None,
        },
    })
}

/// True exactly when a webhook response signals natural termination:
/// no response at all, the literal `"STOP"` string, an empty/whitespace-only
/// string, or a structured response with role `"stop"`.
pub fn should_stop(raw: Option<&RawReply>) -> bool {
    match raw {
        None => true,
        Some(RawReply::Sentinel(s)) => s == STOP_SENTINEL || s.trim().is_empty(),
        Some(RawReply::Message { role, .. }) => role.as_deref() == Some("stop"),
    }
}

/// Seed-text variant used by the automated loop before issuing a call.
pub fn should_stop_text(text: &str) -> bool {
    text == STOP_SENTINEL || text.trim().is_empty()
}
