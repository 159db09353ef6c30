use super::engine::DimensionScore;
use crate::listing::PriorityMode;

/// Totals at or above this count as a match.
pub const MATCH_THRESHOLD: u8 = 60;

/// Build the plain-language explanation for a scored house.
///
/// Dimensions are ranked ascending with a stable sort, so ties keep the
/// Price, Space, Safety, Schools order. The second-weakest dimension is
/// never mentioned.
pub fn generate_summary(total: u8, dimensions: &[DimensionScore; 4], mode: PriorityMode) -> String {
    let mut ranked = *dimensions;
    ranked.sort_by_key(|d| d.score);

    let weakest = &ranked[0];
    let second_strongest = &ranked[2];
    let strongest = &ranked[3];

    let match_status = if total >= MATCH_THRESHOLD {
        "a match"
    } else {
        "not a match"
    };

    format!(
        "This house received a SmartScore of {}. Its strongest areas are {} {} and {} {}. \
         However, the {} score is lower at {}, which may be a concern. \
         Given your priority '{}', this property is {} for you.",
        total,
        strongest.dimension,
        strongest.score,
        second_strongest.dimension,
        second_strongest.score,
        weakest.dimension,
        weakest.score,
        mode,
        match_status
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::engine::Dimension;

    fn dims(price: u8, space: u8, safety: u8, schools: u8) -> [DimensionScore; 4] {
        [
            DimensionScore::new(Dimension::Price, price),
            DimensionScore::new(Dimension::Space, space),
            DimensionScore::new(Dimension::Safety, safety),
            DimensionScore::new(Dimension::Schools, schools),
        ]
    }

    #[test]
    fn test_summary_full_text() {
        let summary = generate_summary(93, &dims(90, 100, 100, 83), PriorityMode::Balanced);
        assert_eq!(
            summary,
            "This house received a SmartScore of 93. \
             Its strongest areas are Safety 100 and Space 100. \
             However, the Schools score is lower at 83, which may be a concern. \
             Given your priority 'BALANCED', this property is a match for you."
        );
    }

    #[test]
    fn test_summary_not_a_match_below_threshold() {
        let summary = generate_summary(59, &dims(30, 50, 60, 90), PriorityMode::BudgetDriven);
        assert!(summary.contains("not a match"));
        assert!(summary.contains("'BUDGET_DRIVEN'"));
    }

    #[test]
    fn test_summary_threshold_is_inclusive() {
        let summary = generate_summary(60, &dims(60, 60, 60, 60), PriorityMode::SafetyFirst);
        assert!(summary.ends_with("this property is a match for you."));
    }

    #[test]
    fn test_summary_skips_second_weakest() {
        let summary = generate_summary(70, &dims(10, 40, 80, 95), PriorityMode::EducationFirst);
        assert!(summary.contains("Schools 95 and Safety 80"));
        assert!(summary.contains("the Price score is lower at 10"));
        assert!(!summary.contains("Space"));
    }

    #[test]
    fn test_summary_ties_keep_dimension_order() {
        let summary = generate_summary(50, &dims(50, 50, 50, 50), PriorityMode::Balanced);
        // ascending stable order: Price, Space, Safety, Schools
        assert!(summary.contains("strongest areas are Schools 50 and Safety 50"));
        assert!(summary.contains("the Price score is lower at 50"));
    }
}
