use serde::Serialize;
use std::fmt;
use tracing::debug;

use super::error::ScoreError;
use super::factors::{self, clamp_score};
use super::summary::{generate_summary, MATCH_THRESHOLD};
use super::weights::Weights;
use crate::listing::{BuyerProfile, House, PriorityMode};

/// Ceiling applied to the total when Space or Safety scores zero.
pub const DEAL_BREAKER_CAP: u8 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Dimension {
    Price,
    Space,
    Safety,
    Schools,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Price => "Price",
            Dimension::Space => "Space",
            Dimension::Safety => "Safety",
            Dimension::Schools => "Schools",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimensionScore {
    #[serde(rename = "name")]
    pub dimension: Dimension,
    pub score: u8, // 0..=100
}

impl DimensionScore {
    pub fn new(dimension: Dimension, score: u8) -> Self {
        Self { dimension, score }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub house: House,
    pub priority_mode: PriorityMode,
    pub total_score: u8,
    /// Always Price, Space, Safety, Schools
    pub dimensions: [DimensionScore; 4],
    /// True when the deal-breaker cap lowered the total
    pub capped: bool,
    pub summary: String,
}

impl ScoreResult {
    pub fn is_match(&self) -> bool {
        self.total_score >= MATCH_THRESHOLD
    }

    pub fn dimension(&self, dimension: Dimension) -> u8 {
        self.dimensions
            .iter()
            .find(|d| d.dimension == dimension)
            .map(|d| d.score)
            .unwrap_or(0)
    }
}

/// Score a house against a buyer profile.
///
/// Fails fast: the first missing or invalid input aborts the whole call and
/// no partial result is produced. Evaluation order is priority mode, Price,
/// Space, Safety, Schools.
pub fn score(profile: &BuyerProfile, house: &House) -> Result<ScoreResult, ScoreError> {
    let mode = profile
        .priority_mode
        .ok_or(ScoreError::MissingField("priorityMode"))?;

    let price = factors::price_fit(house.avm_value, profile.max_price)?;
    let space = factors::space_fit(
        profile.min_bedrooms,
        profile.min_bathrooms,
        house.beds,
        house.baths_total,
    )?;
    let safety = factors::safety_fit(house.crime_index)?;
    let schools = factors::schools_fit(house.schools_json.as_deref())?;

    let dimensions = [
        DimensionScore::new(Dimension::Price, price),
        DimensionScore::new(Dimension::Space, space),
        DimensionScore::new(Dimension::Safety, safety),
        DimensionScore::new(Dimension::Schools, schools),
    ];

    let weighted = weighted_total(mode, price, space, safety, schools);
    let total = apply_cap(weighted, space, safety);
    let capped = total < weighted;

    debug!(
        house = %house.display_address(),
        %mode,
        price,
        space,
        safety,
        schools,
        weighted,
        total,
        "scored house"
    );

    let summary = generate_summary(total, &dimensions, mode);

    Ok(ScoreResult {
        house: house.clone(),
        priority_mode: mode,
        total_score: total,
        dimensions,
        capped,
        summary,
    })
}

/// Weighted sum under the mode's weights, rounded half-up, clamped.
pub fn weighted_total(mode: PriorityMode, price: u8, space: u8, safety: u8, schools: u8) -> u8 {
    clamp_score(Weights::for_mode(mode).apply(price, space, safety, schools))
}

/// A house with no usable space or no safety cannot score above the cap,
/// whatever its other dimensions.
pub fn apply_cap(total: u8, space: u8, safety: u8) -> u8 {
    if space == 0 || safety == 0 {
        total.min(DEAL_BREAKER_CAP)
    } else {
        total
    }
}
