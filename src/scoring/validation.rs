use crate::listing::BuyerProfile;
use rust_decimal::Decimal;

/// Validate a configured buyer profile at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_profile(profile: &BuyerProfile) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    match profile.max_price {
        None => errors.push("profile.maxPrice: required".to_string()),
        Some(price) if price <= Decimal::ZERO => {
            errors.push(format!("profile.maxPrice: must be > 0 (got {})", price));
        }
        Some(_) => {}
    }

    if profile.min_bedrooms.is_none() {
        errors.push("profile.minBedrooms: required".to_string());
    }

    match profile.min_bathrooms {
        None => errors.push("profile.minBathrooms: required".to_string()),
        Some(baths) if baths < Decimal::ZERO => {
            errors.push(format!("profile.minBathrooms: must be >= 0 (got {})", baths));
        }
        Some(_) => {}
    }

    if profile.priority_mode.is_none() {
        errors.push("profile.priorityMode: required".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
