// Showroom Engine — Synthetic Customer Generator
//
// Stateless fabrication of demo sessions and post-purchase customer
// contexts. Every generator takes `&mut impl Rng` so callers can pass
// `rand::thread_rng()` in production and a seeded `StdRng` in tests.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::atoms::constants::*;
use crate::atoms::types::{DemoContext, TriggerType};

/// New opaque session identifier (UUID v4).
pub fn session_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Uniform pick from a fixed catalog.
pub fn pick<'a, R: Rng>(rng: &mut R, items: &'a [&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

/// "Today" / "1 day ago" / "N days ago" label for a purchase date.
pub fn time_since_purchase(purchase_date: &DateTime<Utc>) -> String {
    let days = (Utc::now() - *purchase_date).num_days();
    match days {
        d if d <= 0 => "Today".to_string(),
        1 => "1 day ago".to_string(),
        d => format!("{} days ago", d),
    }
}

/// Compose a randomized post-purchase context for a trigger. The purchase
/// date falls inside the trigger's days-ago window, at a random morning hour.
pub fn random_context<R: Rng>(rng: &mut R, trigger: TriggerType) -> DemoContext {
    let first = pick(rng, FIRST_NAMES);
    let last = pick(rng, LAST_NAMES);
    let model = pick(rng, SUBARU_MODELS);
    let trim = pick(rng, SUBARU_TRIMS);
    let color = pick(rng, SUBARU_COLORS);
    let salesperson = pick(rng, SALESPERSON_NAMES);

    let (min, max) = trigger.day_range();
    let days_ago = rng.gen_range(min..=max) as i64;
    let day = (Utc::now() - Duration::days(days_ago)).date_naive();
    // Hour 9–15, minute 0–59: always a valid wall-clock time.
    let purchase_date = match day.and_hms_opt(9 + rng.gen_range(0..=6), rng.gen_range(0..60), 0) {
        Some(dt) => dt.and_utc(),
        None => Utc::now() - Duration::days(days_ago),
    };

    let time_since = if days_ago == 1 {
        "1 day ago".to_string()
    } else {
        format!("{} days ago", days_ago)
    };

    DemoContext {
        customer_name: format!("{} {}", first, last),
        vehicle: format!("2025 Subaru {} {}, {}", model, trim, color),
        purchase_date,
        salesperson: salesperson.to_string(),
        channel: "SMS".to_string(),
        time_since_purchase: time_since,
        vehicle_type: "NEW".to_string(),
        scenario: trigger.scenario(),
    }
}
