// Showroom Engine — Background Activity Narration
//
// Builds the "what the system decided" bullet traces shown under assistant
// messages. Demo storytelling only; nothing downstream branches on these.

use crate::atoms::types::{BackgroundActivity, DemoContext, Lead, LeadSource, TriggerType};

/// Trace for the first assistant message after a trigger fires.
pub fn trigger_activity(trigger: TriggerType, context: &DemoContext) -> BackgroundActivity {
    let mut actions = vec![
        format!("Trigger detected: {}", trigger.activity_label()),
        format!("Channel selected: {}", context.channel),
        format!("Identity applied: Dealership assistant ({})", context.salesperson),
    ];

    match trigger {
        TriggerType::NewSale => {
            actions.push("Rule applied: Post-purchase engagement protocol".to_string());
            actions.push("Sales momentum action: Satisfaction check initiated".to_string());
        }
        _ => {
            actions.push("Rule applied: Scheduled touchpoint protocol".to_string());
            actions.push("Customer retention action: Relationship maintenance".to_string());
        }
    }

    BackgroundActivity { actions }
}

/// Trace for assistant replies in the lead flow. Phase 1 (`initial`) narrates
/// intake and routing; phase 2 narrates follow-up positioning.
pub fn lead_activity(lead: &Lead, initial: bool) -> BackgroundActivity {
    let mut actions = Vec::new();

    if initial {
        actions.push(format!("Lead source detected: {}", lead.lead_source.channel()));
        if !lead.vehicle_of_interest.is_empty() && lead.vehicle_of_interest != "N/A" {
            actions.push("Intent classified: Vehicle availability inquiry".to_string());
        }
        actions.push("Identity applied: Dealership assistant (Adelyn)".to_string());
        actions.push("Rule applied: Mandatory Response Triad".to_string());
        if lead.lead_source == LeadSource::KbbIco || lead.kbb_offer.is_some() {
            actions.push("Buy Center routing: Trade appraisal path".to_string());
        } else {
            actions.push("Sales momentum action: Trade-in path introduced".to_string());
        }
        actions.push("Conversation phase: Initial contact".to_string());
    } else {
        actions.push("Conversation phase: Follow-up engagement".to_string());
        actions.push("Identity applied: Dealership assistant (Adelyn)".to_string());
        actions.push("Rule applied: Mandatory Response Triad".to_string());
        actions.push("Sales momentum action: Appointment positioning".to_string());
    }

    BackgroundActivity { actions }
}

/// Trace for the assistant reply to a user-typed message.
pub fn manual_activity(salesperson: &str) -> BackgroundActivity {
    BackgroundActivity {
        actions: vec![
            "Mode: Manual response".to_string(),
            format!("Identity applied: Dealership assistant ({})", salesperson),
            "Rule applied: Conversational continuity protocol".to_string(),
            "Sales momentum action: Engagement maintenance".to_string(),
        ],
    }
}

/// Trace for automated-loop turns. `customer_turn` narrates the simulated
/// customer generator; otherwise the assistant side.
pub fn loop_activity(salesperson: &str, customer_turn: bool) -> BackgroundActivity {
    let actions = if customer_turn {
        vec![
            "Simulated customer response generated".to_string(),
            "Personality profile: Realistic dealership customer".to_string(),
        ]
    } else {
        vec![
            "Mode: Automated conversation flow".to_string(),
            format!("Identity applied: Dealership assistant ({})", salesperson),
            "Rule applied: Conversational continuity protocol".to_string(),
            "Sales momentum action: Engagement progression".to_string(),
        ]
    };
    BackgroundActivity { actions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{generate, leads};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_sale_uses_the_post_purchase_protocol() {
        let ctx = generate::random_context(&mut StdRng::seed_from_u64(1), TriggerType::NewSale);
        let activity = trigger_activity(TriggerType::NewSale, &ctx);
        assert!(activity
            .actions
            .iter()
            .any(|a| a == "Rule applied: Post-purchase engagement protocol"));
        assert!(activity.actions[0].starts_with("Trigger detected: New sale"));
    }

    #[test]
    fn kbb_leads_route_to_the_buy_center() {
        let lead = leads::generate(&mut StdRng::seed_from_u64(2), LeadSource::KbbIco);
        let activity = lead_activity(&lead, true);
        assert!(activity
            .actions
            .iter()
            .any(|a| a == "Buy Center routing: Trade appraisal path"));
        // "N/A" vehicle of interest must not classify as an availability inquiry
        assert!(!activity
            .actions
            .iter()
            .any(|a| a.starts_with("Intent classified")));
    }
}
