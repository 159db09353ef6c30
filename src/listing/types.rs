use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which scoring dimension matters most to the buyer.
///
/// Serialized with the same names the profile service uses
/// (`BALANCED`, `BUDGET_DRIVEN`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriorityMode {
    Balanced,
    BudgetDriven,
    SafetyFirst,
    EducationFirst,
}

impl PriorityMode {
    pub const ALL: [PriorityMode; 4] = [
        PriorityMode::Balanced,
        PriorityMode::BudgetDriven,
        PriorityMode::SafetyFirst,
        PriorityMode::EducationFirst,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityMode::Balanced => "BALANCED",
            PriorityMode::BudgetDriven => "BUDGET_DRIVEN",
            PriorityMode::SafetyFirst => "SAFETY_FIRST",
            PriorityMode::EducationFirst => "EDUCATION_FIRST",
        }
    }
}

impl fmt::Display for PriorityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriorityMode {
    type Err = String;

    /// Case-insensitive; accepts `budget-driven` as well as `BUDGET_DRIVEN`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        PriorityMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| {
                format!(
                    "unknown priority mode '{}' (expected one of: balanced, budget-driven, \
                     safety-first, education-first)",
                    s.trim()
                )
            })
    }
}

/// The buyer's stated preferences.
///
/// Every field is optional on input because the profile may arrive partially
/// populated; the scoring engine reports whichever required field is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyerProfile {
    #[serde(
        default,
        serialize_with = "rust_decimal::serde::float_option::serialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_bedrooms: Option<u32>,
    /// Fractional bathrooms are allowed (e.g. 1.5)
    #[serde(
        default,
        serialize_with = "rust_decimal::serde::float_option::serialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_bathrooms: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_mode: Option<PriorityMode>,
}

impl BuyerProfile {
    /// Build a fully populated profile.
    pub fn new(
        max_price: Decimal,
        min_bedrooms: u32,
        min_bathrooms: Decimal,
        priority_mode: PriorityMode,
    ) -> Self {
        Self {
            max_price: Some(max_price),
            min_bedrooms: Some(min_bedrooms),
            min_bathrooms: Some(min_bathrooms),
            priority_mode: Some(priority_mode),
        }
    }

    /// Return a copy with the priority mode replaced.
    pub fn with_priority_mode(&self, mode: PriorityMode) -> Self {
        Self {
            priority_mode: Some(mode),
            ..self.clone()
        }
    }
}

/// A house record as supplied by the property-data layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct House {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attom_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,

    /// Automated valuation, whole currency units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avm_value: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beds: Option<u32>,
    #[serde(
        default,
        serialize_with = "rust_decimal::serde::float_option::serialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub baths_total: Option<Decimal>,
    /// 100 = national average, higher is more dangerous
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crime_index: Option<i32>,
    /// Raw JSON array of nearby schools, e.g. `[{"schoolRating":"A"}]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schools_json: Option<String>,
}

impl House {
    /// One-line address for display, "(no address)" when neither line is set
    pub fn display_address(&self) -> String {
        let parts: Vec<&str> = [self.address1.as_deref(), self.address2.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if parts.is_empty() {
            match self.attom_id {
                Some(id) => format!("attom #{}", id),
                None => "(no address)".to_string(),
            }
        } else {
            parts.join(", ")
        }
    }
}
