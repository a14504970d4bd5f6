// ── Showroom Atoms: Pure Data Types ────────────────────────────────────────
// All plain struct/enum definitions with no logic beyond label/range tables.
// Atoms layer rule: no I/O, no side effects, no imports from engine/.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Chat transcript ────────────────────────────────────────────────────────

/// Who a transcript message is attributed to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Assistant,
}

/// Human-readable trace of what the automation believes happened behind a
/// message. Demo narration only — carries no functional weight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackgroundActivity {
    pub actions: Vec<String>,
}

/// A single transcript entry. Immutable once created; the transcript is
/// append-only and insertion order is display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_activity: Option<BackgroundActivity>,
}

// ── Post-purchase triggers ─────────────────────────────────────────────────

/// Scenario classification attached to a generated context.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    RecentPurchase,
    CsiWindow,
}

impl Scenario {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::RecentPurchase => "recent_purchase",
            Scenario::CsiWindow => "csi_window",
        }
    }
}

/// The twelve post-purchase follow-up triggers the demo can fire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TriggerType {
    NewSale,
    OneWeekFollowup,
    TwoWeekFollowup,
    OneMonthFollowup,
    TwoMonthsFollowup,
    ThreeMonthsFollowup,
    SixMonthsFollowup,
    OneYearFollowup,
    BirthdayFollowup,
    ChristmasFollowup,
    NewYearsFollowup,
    ThanksgivingFollowup,
}

impl TriggerType {
    pub const ALL: [TriggerType; 12] = [
        TriggerType::NewSale,
        TriggerType::OneWeekFollowup,
        TriggerType::TwoWeekFollowup,
        TriggerType::OneMonthFollowup,
        TriggerType::TwoMonthsFollowup,
        TriggerType::ThreeMonthsFollowup,
        TriggerType::SixMonthsFollowup,
        TriggerType::OneYearFollowup,
        TriggerType::BirthdayFollowup,
        TriggerType::ChristmasFollowup,
        TriggerType::NewYearsFollowup,
        TriggerType::ThanksgivingFollowup,
    ];

    /// Wire tag, identical to the serde representation.
    pub fn tag(&self) -> &'static str {
        match self {
            TriggerType::NewSale => "new_sale",
            TriggerType::OneWeekFollowup => "one_week_followup",
            TriggerType::TwoWeekFollowup => "two_week_followup",
            TriggerType::OneMonthFollowup => "one_month_followup",
            TriggerType::TwoMonthsFollowup => "two_months_followup",
            TriggerType::ThreeMonthsFollowup => "three_months_followup",
            TriggerType::SixMonthsFollowup => "six_months_followup",
            TriggerType::OneYearFollowup => "one_year_followup",
            TriggerType::BirthdayFollowup => "birthday_followup",
            TriggerType::ChristmasFollowup => "christmas_followup",
            TriggerType::NewYearsFollowup => "new_years_followup",
            TriggerType::ThanksgivingFollowup => "thanksgiving_followup",
        }
    }

    /// Label shown in the system-status panel when the rule fires.
    pub fn label(&self) -> &'static str {
        match self {
            TriggerType::NewSale => "New Sale Follow-Up",
            TriggerType::OneWeekFollowup => "One Week Check-In",
            TriggerType::TwoWeekFollowup => "Two Week Check-In",
            TriggerType::OneMonthFollowup => "One Month Check-In",
            TriggerType::TwoMonthsFollowup => "Two Months Check-In",
            TriggerType::ThreeMonthsFollowup => "Three Months Check-In",
            TriggerType::SixMonthsFollowup => "Six Months Check-In",
            TriggerType::OneYearFollowup => "One Year Anniversary",
            TriggerType::BirthdayFollowup => "Birthday Follow-Up",
            TriggerType::ChristmasFollowup => "Christmas Follow-Up",
            TriggerType::NewYearsFollowup => "New Year's Follow-Up",
            TriggerType::ThanksgivingFollowup => "Thanksgiving Follow-Up",
        }
    }

    /// Sentence-case label used in background-activity narration.
    pub fn activity_label(&self) -> &'static str {
        match self {
            TriggerType::NewSale => "New sale follow-up",
            TriggerType::OneWeekFollowup => "One week check-in",
            TriggerType::TwoWeekFollowup => "Two week check-in",
            TriggerType::OneMonthFollowup => "One month check-in",
            TriggerType::TwoMonthsFollowup => "Two months check-in",
            TriggerType::ThreeMonthsFollowup => "Three months check-in",
            TriggerType::SixMonthsFollowup => "Six months check-in",
            TriggerType::OneYearFollowup => "One year anniversary",
            TriggerType::BirthdayFollowup => "Birthday follow-up",
            TriggerType::ChristmasFollowup => "Christmas follow-up",
            TriggerType::NewYearsFollowup => "New Year's follow-up",
            TriggerType::ThanksgivingFollowup => "Thanksgiving follow-up",
        }
    }

    /// Inclusive days-since-purchase range a synthetic context is drawn from.
    pub fn day_range(&self) -> (u32, u32) {
        match self {
            TriggerType::NewSale => (1, 7),
            TriggerType::OneWeekFollowup => (5, 9),
            TriggerType::TwoWeekFollowup => (12, 16),
            TriggerType::OneMonthFollowup => (28, 32),
            TriggerType::TwoMonthsFollowup => (58, 62),
            TriggerType::ThreeMonthsFollowup => (88, 92),
            TriggerType::SixMonthsFollowup => (178, 182),
            TriggerType::OneYearFollowup => (360, 370),
            TriggerType::BirthdayFollowup
            | TriggerType::ChristmasFollowup
            | TriggerType::NewYearsFollowup
            | TriggerType::ThanksgivingFollowup => (30, 365),
        }
    }

    pub fn scenario(&self) -> Scenario {
        match self {
            TriggerType::NewSale => Scenario::RecentPurchase,
            _ => Scenario::CsiWindow,
        }
    }
}

// ── Demo context & status ──────────────────────────────────────────────────

/// The active post-purchase scenario. Replaced wholesale per trigger,
/// never partially mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoContext {
    pub customer_name: String,
    pub vehicle: String,
    pub purchase_date: DateTime<Utc>,
    pub salesperson: String,
    pub channel: String,
    pub time_since_purchase: String,
    pub vehicle_type: String,
    pub scenario: Scenario,
}

/// Last-activated-rule label and last-activity timestamp. Overwritten on
/// every orchestration step, never historized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemStatus {
    pub rule_activated: String,
    pub last_message_time: Option<DateTime<Utc>>,
    pub is_typing: bool,
}

// ── Inbound leads ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LeadSource {
    Website,
    KbbIco,
    Cargurus,
    Autotrader,
}

impl LeadSource {
    pub fn channel(&self) -> &'static str {
        match self {
            LeadSource::Website => "Website",
            LeadSource::KbbIco => "KBB ICO",
            LeadSource::Cargurus => "CarGurus",
            LeadSource::Autotrader => "AutoTrader",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContactMethod {
    Sms,
    Email,
}

/// Contact block inside a KBB Instant Cash Offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferContact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Appraised vehicle inside a KBB Instant Cash Offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferVehicle {
    pub year: i32,
    pub make: String,
    pub model: String,
    pub trim: String,
    pub color: String,
    pub mileage: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KbbOffer {
    pub customer: OfferContact,
    pub vehicle: OfferVehicle,
    pub offer_amount: i64,
}

/// An inbound-lead record. Created on generation, read-only afterward,
/// replaced on the next generation or reset. Field names are the wire format
/// expected by the lead automation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub lead_source: LeadSource,
    pub channel: String,
    pub preferred_contact_method: ContactMethod,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub vehicle_of_interest: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kbb_offer: Option<KbbOffer>,
}

// ── Webhook wire contract ──────────────────────────────────────────────────

/// Raw parsed webhook response. Every endpoint is expected to return either a
/// structured role/message object, the literal sentinel string `"STOP"`, or
/// an empty string. Field presence is validated by the normalizer, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawReply {
    Message {
        #[serde(default)]
        role: Option<String>,
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        customer_name: Option<String>,
    },
    Sentinel(String),
}

// ── Preferences & modes ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    Auto,
}

/// Which demo tab is active. Switching modes clears the working state but
/// keeps the session id.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DemoMode {
    #[default]
    PostPurchase,
    LeadFollowup,
}
