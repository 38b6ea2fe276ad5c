use dietplan_shared::recipe::CarbConstraint;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::nutrition::Macros;
use crate::types::Diet;

/// Absolute macro thresholds for one calorie goal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NutritionTargets {
    pub min_proteins: Decimal,
    pub min_fats: Decimal,
    pub carbs_threshold: Decimal,
    pub carb_constraint: CarbConstraint,
}

impl NutritionTargets {
    /// Hard validity check: proteins and fats are floors, carbs follow the constraint mode.
    pub fn accepts(&self, totals: &Macros) -> bool {
        if totals.proteins < self.min_proteins || totals.fats < self.min_fats {
            return false;
        }

        match self.carb_constraint {
            CarbConstraint::AtMost => totals.carbs <= self.carbs_threshold,
            CarbConstraint::AtLeast => totals.carbs >= self.carbs_threshold,
        }
    }
}

/// `round(coefficient * target_calories / 1000)`, half to even.
pub fn threshold(coefficient_per_1000: Decimal, target_calories: u32) -> Decimal {
    (coefficient_per_1000 * Decimal::from(target_calories) / Decimal::ONE_THOUSAND)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
}

impl Diet {
    pub fn targets(&self, target_calories: u32) -> dietplan_shared::Result<NutritionTargets> {
        if target_calories == 0 {
            dietplan_shared::user!("target calories must be greater than 0");
        }

        Ok(NutritionTargets {
            min_proteins: threshold(self.proteins_per_1000, target_calories),
            min_fats: threshold(self.fats_per_1000, target_calories),
            carbs_threshold: threshold(self.carbs_per_1000, target_calories),
            carb_constraint: self.carbs_constraint,
        })
    }

    pub fn default_targets(&self) -> dietplan_shared::Result<NutritionTargets> {
        self.targets(self.default_calories)
    }
}
