use crate::listing::PriorityMode;
use rust_decimal::Decimal;

/// Per-dimension weights for one priority mode.
///
/// Every table row sums to exactly 1.0, so the weighted total never needs
/// renormalizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    pub price: Decimal,
    pub space: Decimal,
    pub safety: Decimal,
    pub schools: Decimal,
}

impl Weights {
    /// Look up the weight tuple for a priority mode.
    pub fn for_mode(mode: PriorityMode) -> Self {
        // (price, space, safety, schools) in hundredths
        let (price, space, safety, schools) = match mode {
            PriorityMode::Balanced => (25, 25, 25, 25),
            PriorityMode::BudgetDriven => (50, 20, 20, 10),
            PriorityMode::SafetyFirst => (25, 15, 50, 10),
            PriorityMode::EducationFirst => (20, 15, 15, 50),
        };

        Self {
            price: Decimal::new(price, 2),
            space: Decimal::new(space, 2),
            safety: Decimal::new(safety, 2),
            schools: Decimal::new(schools, 2),
        }
    }

    pub fn sum(&self) -> Decimal {
        self.price + self.space + self.safety + self.schools
    }

    /// Weighted sum of the four dimension scores, unrounded.
    pub fn apply(&self, price: u8, space: u8, safety: u8, schools: u8) -> Decimal {
        Decimal::from(price) * self.price
            + Decimal::from(space) * self.space
            + Decimal::from(safety) * self.safety
            + Decimal::from(schools) * self.schools
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mode_sums_to_one() {
        for mode in PriorityMode::ALL {
            assert_eq!(Weights::for_mode(mode).sum(), Decimal::ONE, "{}", mode);
        }
    }

    #[test]
    fn test_budget_driven_table() {
        let w = Weights::for_mode(PriorityMode::BudgetDriven);
        assert_eq!(w.price, Decimal::new(50, 2));
        assert_eq!(w.space, Decimal::new(20, 2));
        assert_eq!(w.safety, Decimal::new(20, 2));
        assert_eq!(w.schools, Decimal::new(10, 2));
    }

    #[test]
    fn test_dominant_weight_per_mode() {
        assert_eq!(Weights::for_mode(PriorityMode::SafetyFirst).safety, Decimal::new(50, 2));
        assert_eq!(Weights::for_mode(PriorityMode::EducationFirst).schools, Decimal::new(50, 2));
    }

    #[test]
    fn test_apply_balanced() {
        let w = Weights::for_mode(PriorityMode::Balanced);
        // (90 + 100 + 100 + 83) / 4
        assert_eq!(w.apply(90, 100, 100, 83), Decimal::new(9325, 2));
    }
}
