use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

use super::error::ScoreError;

/// Price ratio bucket: the first tier whose ceiling is >= the ratio wins.
#[derive(Debug, Clone, Copy)]
pub struct PriceTier {
    pub ceiling: Decimal,
    pub score: u8,
}

/// Score for a ratio above every tier ceiling (more than 20% over budget).
pub const OVER_BUDGET_SCORE: u8 = 30;

/// Ascending price tiers, ceilings inclusive.
pub fn price_tiers() -> [PriceTier; 6] {
    [
        PriceTier {
            ceiling: Decimal::new(80, 2),
            score: 100,
        },
        PriceTier {
            ceiling: Decimal::new(90, 2),
            score: 95,
        },
        PriceTier {
            ceiling: Decimal::new(100, 2),
            score: 90,
        },
        PriceTier {
            ceiling: Decimal::new(105, 2),
            score: 80,
        },
        PriceTier {
            ceiling: Decimal::new(110, 2),
            score: 70,
        },
        PriceTier {
            ceiling: Decimal::new(120, 2),
            score: 50,
        },
    ]
}

const BEDROOM_PENALTY: u32 = 50;
const BATHROOM_PENALTY: i64 = 15;

const SAFE_CRIME_INDEX: i32 = 80;
const UNSAFE_CRIME_INDEX: i32 = 200;

/// Score for a school whose rating is missing or unrecognized.
pub const DEFAULT_SCHOOL_SCORE: u8 = 50;

/// Round half-up to an integer and clamp into 0..=100.
pub fn clamp_score(value: Decimal) -> u8 {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    if rounded <= Decimal::ZERO {
        0
    } else if rounded >= Decimal::ONE_HUNDRED {
        100
    } else {
        rounded.to_u8().unwrap_or(0)
    }
}

/// avmValue / maxPrice, four fractional digits, half-up.
///
/// `None` when the division overflows (a vanishingly small budget), which
/// callers treat as "beyond every tier".
pub fn price_ratio(avm_value: u64, max_price: Decimal) -> Option<Decimal> {
    Decimal::from(avm_value)
        .checked_div(max_price)
        .map(|ratio| ratio.round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero))
}

/// Price fit. Under budget is rewarded, over budget degrades in steps.
pub fn price_fit(avm_value: Option<u64>, max_price: Option<Decimal>) -> Result<u8, ScoreError> {
    let avm_value = avm_value.ok_or(ScoreError::MissingField("avmValue"))?;
    let max_price = max_price.ok_or(ScoreError::MissingField("maxPrice"))?;
    if max_price <= Decimal::ZERO {
        return Err(ScoreError::invalid("maxPrice", "must be > 0"));
    }

    let Some(ratio) = price_ratio(avm_value, max_price) else {
        return Ok(OVER_BUDGET_SCORE);
    };

    Ok(price_tiers()
        .iter()
        .find(|tier| ratio <= tier.ceiling)
        .map(|tier| tier.score)
        .unwrap_or(OVER_BUDGET_SCORE))
}

/// Space fit: -50 per missing bedroom, -15 per missing bathroom (fractional).
/// Rounded only once, at the end.
pub fn space_fit(
    min_bedrooms: Option<u32>,
    min_bathrooms: Option<Decimal>,
    beds: Option<u32>,
    baths_total: Option<Decimal>,
) -> Result<u8, ScoreError> {
    let min_bedrooms = min_bedrooms.ok_or(ScoreError::MissingField("minBedrooms"))?;
    let min_bathrooms = min_bathrooms.ok_or(ScoreError::MissingField("minBathrooms"))?;
    let beds = beds.ok_or(ScoreError::MissingField("beds"))?;
    let baths_total = baths_total.ok_or(ScoreError::MissingField("bathsTotal"))?;

    let missing_bedrooms = min_bedrooms.saturating_sub(beds);
    let bedroom_penalty = Decimal::from(missing_bedrooms) * Decimal::from(BEDROOM_PENALTY);

    // A shortfall too large for a Decimal costs every point; a surplus that
    // large is no shortfall at all.
    let missing_bathrooms = match min_bathrooms.checked_sub(baths_total) {
        Some(diff) => diff.max(Decimal::ZERO),
        None if min_bathrooms > baths_total => return Ok(0),
        None => Decimal::ZERO,
    };
    let remaining = missing_bathrooms
        .checked_mul(Decimal::from(BATHROOM_PENALTY))
        .and_then(|bathroom_penalty| {
            Decimal::ONE_HUNDRED
                .checked_sub(bedroom_penalty)?
                .checked_sub(bathroom_penalty)
        });
    Ok(remaining.map(clamp_score).unwrap_or(0))
}

/// Safety from the crime index: full marks at or below 80, zero at or above
/// 200 (twice the national average), linear in between.
pub fn safety_fit(crime_index: Option<i32>) -> Result<u8, ScoreError> {
    let crime_index = crime_index.ok_or(ScoreError::MissingField("crimeIndex"))?;

    if crime_index >= UNSAFE_CRIME_INDEX {
        return Ok(0);
    }
    if crime_index <= SAFE_CRIME_INDEX {
        return Ok(100);
    }

    let headroom = Decimal::from(UNSAFE_CRIME_INDEX - crime_index);
    let band = Decimal::from(UNSAFE_CRIME_INDEX - SAFE_CRIME_INDEX);
    Ok(clamp_score(headroom * Decimal::ONE_HUNDRED / band))
}

/// Map a letter rating to a score, looking only at the leading letter.
pub fn school_rating_score(rating: Option<&str>) -> u8 {
    let Some(rating) = rating else {
        return DEFAULT_SCHOOL_SCORE;
    };

    match rating.trim().chars().next().map(|c| c.to_ascii_uppercase()) {
        Some('A') => 90,
        Some('B') => 75,
        Some('C') => 60,
        Some('D') | Some('F') => 50,
        _ => DEFAULT_SCHOOL_SCORE,
    }
}

/// Pull the rating out of one schools array element.
///
/// Accepts `{"schoolRating": "B+"}` or a bare `"B+"`; anything else has no
/// rating.
fn school_rating(school: &Value) -> Option<&str> {
    match school {
        Value::String(rating) => Some(rating.as_str()),
        Value::Object(fields) => fields.get("schoolRating").and_then(Value::as_str),
        _ => None,
    }
}

/// Schools fit: mean of the per-school scores.
///
/// The JSON is parsed on every call; there is no shared parser state.
pub fn schools_fit(schools_json: Option<&str>) -> Result<u8, ScoreError> {
    let raw = schools_json
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ScoreError::invalid("schoolsJson", "missing or blank"))?;

    let parsed: Value = serde_json::from_str(raw)
        .map_err(|e| ScoreError::invalid("schoolsJson", format!("not valid JSON ({})", e)))?;

    let Value::Array(schools) = parsed else {
        return Err(ScoreError::invalid("schoolsJson", "must be a JSON array"));
    };
    if schools.is_empty() {
        return Err(ScoreError::invalid("schoolsJson", "empty; cannot score schools"));
    }

    let total: u64 = schools
        .iter()
        .map(|school| u64::from(school_rating_score(school_rating(school))))
        .sum();

    Ok(clamp_score(Decimal::from(total) / Decimal::from(schools.len())))
}
