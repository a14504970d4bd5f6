// Showroom Engine — Inbound Lead Fabrication
//
// Randomized lead records for the lead-followup demo tab: website form,
// KBB Instant Cash Offer, CarGurus, and AutoTrader. Pure functions over an
// injected Rng, same contract as generate.rs.

use rand::Rng;

use crate::atoms::constants::*;
use crate::atoms::types::{ContactMethod, KbbOffer, Lead, LeadSource, OfferContact, OfferVehicle};
use crate::engine::generate::pick;

/// Trade-in offers never go below this floor, no matter how old or
/// high-mileage the synthetic vehicle is.
pub const MIN_OFFER_AMOUNT: i64 = 5_000;

fn email<R: Rng>(rng: &mut R, first: &str, last: &str) -> String {
    let provider = pick(rng, EMAIL_PROVIDERS);
    let local = match rng.gen_range(0..3) {
        0 => format!("{}.{}", first.to_lowercase(), last.to_lowercase()),
        1 => format!("{}{}", first.to_lowercase(), last.to_lowercase()),
        _ => format!("{}{}", first.to_lowercase(), rng.gen_range(1..=99)),
    };
    format!("{}@{}", local, provider)
}

fn phone<R: Rng>(rng: &mut R) -> String {
    format!(
        "({}) {}-{}",
        rng.gen_range(200..=999),
        rng.gen_range(200..=999),
        rng.gen_range(1000..=9999)
    )
}

fn stock_number<R: Rng>(rng: &mut R) -> String {
    format!("{}{}", pick(rng, STOCK_PREFIXES), rng.gen_range(10_000..=99_999))
}

fn contact_method<R: Rng>(rng: &mut R) -> ContactMethod {
    if rng.gen_bool(0.5) {
        ContactMethod::Email
    } else {
        ContactMethod::Sms
    }
}

/// Synthetic trade-in appraisal. Older and higher-mileage vehicles receive a
/// lower offer, floored at [`MIN_OFFER_AMOUNT`].
pub fn offer_amount<R: Rng>(rng: &mut R, year: i32, mileage: u32) -> i64 {
    let base = 25_000.0 - f64::from(2024 - year) * 2_000.0 - (f64::from(mileage) / 10_000.0) * 500.0;
    let jitter = f64::from(rng.gen_range(-2_000..=2_000));
    ((base + jitter).floor() as i64).max(MIN_OFFER_AMOUNT)
}

fn website_lead<R: Rng>(rng: &mut R) -> Lead {
    let first = pick(rng, FIRST_NAMES).to_string();
    let last = pick(rng, LAST_NAMES).to_string();
    let year = rng.gen_range(2020..=2025);
    let make = pick(rng, MAKES);
    let model = pick(rng, MODELS);
    let vehicle = if rng.gen_bool(0.5) {
        format!("{} {} {} (Stock #{})", year, make, model, stock_number(rng))
    } else {
        format!("{} {} {}", year, make, model)
    };

    Lead {
        lead_source: LeadSource::Website,
        channel: LeadSource::Website.channel().to_string(),
        preferred_contact_method: contact_method(rng),
        customer_name: format!("{} {}", first, last),
        email: email(rng, &first, &last),
        phone: phone(rng),
        vehicle_of_interest: vehicle,
        message: pick(rng, WEBSITE_MESSAGES).to_string(),
        kbb_offer: None,
    }
}

fn kbb_ico_lead<R: Rng>(rng: &mut R) -> Lead {
    let first = pick(rng, FIRST_NAMES).to_string();
    let last = pick(rng, LAST_NAMES).to_string();
    let name = format!("{} {}", first, last);
    let year = rng.gen_range(2015..=2022);
    let mileage = rng.gen_range(20_000..=120_000);

    Lead {
        lead_source: LeadSource::KbbIco,
        channel: LeadSource::KbbIco.channel().to_string(),
        preferred_contact_method: contact_method(rng),
        customer_name: name.clone(),
        email: email(rng, &first, &last),
        phone: phone(rng),
        vehicle_of_interest: "N/A".to_string(),
        message: "Customer completed Instant Cash Offer and is looking to sell their vehicle."
            .to_string(),
        kbb_offer: Some(KbbOffer {
            customer: OfferContact {
                name,
                phone: phone(rng),
                email: email(rng, &first, &last),
            },
            vehicle: OfferVehicle {
                year,
                make: pick(rng, MAKES).to_string(),
                model: pick(rng, MODELS).to_string(),
                trim: pick(rng, TRIMS).to_string(),
                color: pick(rng, COLORS).to_string(),
                mileage,
            },
            offer_amount: offer_amount(rng, year, mileage),
        }),
    }
}

fn marketplace_lead<R: Rng>(rng: &mut R, source: LeadSource) -> Lead {
    let first = pick(rng, FIRST_NAMES).to_string();
    let last = pick(rng, LAST_NAMES).to_string();
    let year = rng.gen_range(2020..=2025);
    let make = pick(rng, MAKES);
    let model = pick(rng, MODELS);

    Lead {
        lead_source: source,
        channel: source.channel().to_string(),
        preferred_contact_method: contact_method(rng),
        customer_name: format!("{} {}", first, last),
        email: email(rng, &first, &last),
        phone: phone(rng),
        vehicle_of_interest: format!("{} {} {} (Stock #{})", year, make, model, stock_number(rng)),
        message: pick(rng, THIRD_PARTY_MESSAGES).to_string(),
        kbb_offer: None,
    }
}

/// Fabricate a lead for the requested source.
pub fn generate<R: Rng>(rng: &mut R, source: LeadSource) -> Lead {
    match source {
        LeadSource::Website => website_lead(rng),
        LeadSource::KbbIco => kbb_ico_lead(rng),
        LeadSource::Cargurus | LeadSource::Autotrader => marketplace_lead(rng, source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn kbb_offer_never_dips_below_the_floor() {
        // Worst case: oldest year, maximum mileage, maximum negative jitter.
        // 25000 - 9*2000 - 12*500 - 2000 is deep below zero before flooring.
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..500 {
            assert!(offer_amount(&mut rng, 2015, 120_000) >= MIN_OFFER_AMOUNT);
        }
    }

    #[test]
    fn kbb_lead_always_carries_an_appraisal() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..50 {
            let lead = generate(&mut rng, LeadSource::KbbIco);
            let offer = lead.kbb_offer.expect("kbb_ico lead must include kbb_offer");
            assert!(offer.offer_amount >= MIN_OFFER_AMOUNT);
            assert!((2015..=2022).contains(&offer.vehicle.year));
            assert!((20_000..=120_000).contains(&offer.vehicle.mileage));
            assert_eq!(lead.vehicle_of_interest, "N/A");
        }
    }

    #[test]
    fn marketplace_leads_reference_stocked_inventory() {
        let mut rng = StdRng::seed_from_u64(3);
        let lead = generate(&mut rng, LeadSource::Cargurus);
        assert_eq!(lead.channel, "CarGurus");
        assert!(lead.vehicle_of_interest.contains("Stock #"));
        assert!(lead.kbb_offer.is_none());
    }

    #[test]
    fn website_lead_shape() {
        let mut rng = StdRng::seed_from_u64(4);
        let lead = generate(&mut rng, LeadSource::Website);
        assert_eq!(lead.channel, "Website");
        assert!(lead.email.contains('@'));
        assert!(lead.phone.starts_with('('));
        assert!(!lead.message.is_empty());
    }
}
