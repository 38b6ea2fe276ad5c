use dietplan_shared::mealplan::MealSlot;
use rust_decimal::Decimal;

/// Serving adjustments attempted per trial.
pub const REFINEMENT_STEPS: usize = 5;

/// Refinement stops once the total is within this share of the target.
pub fn refinement_tolerance() -> Decimal {
    Decimal::new(20, 2)
}

/// Share of the daily calories each slot should ideally carry.
pub fn ideal_share(slot: MealSlot) -> Decimal {
    match slot {
        MealSlot::Breakfast => Decimal::new(30, 2),
        MealSlot::Lunch => Decimal::new(40, 2),
        MealSlot::Dinner => Decimal::new(30, 2),
    }
}

pub fn ideal_calories(target: Decimal) -> [Decimal; 3] {
    MealSlot::ALL.map(|slot| target * ideal_share(slot))
}

pub fn slot_calories(per_serving: [Decimal; 3], servings: [u32; 3]) -> [Decimal; 3] {
    std::array::from_fn(|i| per_serving[i] * Decimal::from(servings[i]))
}

/// Index of the largest value, earliest slot on ties.
fn argmax(values: &[Decimal; 3]) -> usize {
    let mut best = 0;
    for (i, value) in values.iter().enumerate().skip(1) {
        if *value > values[best] {
            best = i;
        }
    }

    best
}

/// Nudges serving multipliers toward `target` calories, starting from one
/// serving per slot.
///
/// Below target, the slot furthest under its ideal share gains a serving.
/// Above target, the slot contributing the most calories loses one, never
/// dropping under a single serving. Every step counts toward the bound, even
/// when nothing changes.
pub fn refine_servings(per_serving: [Decimal; 3], target: Decimal) -> [u32; 3] {
    let ideal = ideal_calories(target);
    let tolerance = target * refinement_tolerance();
    let mut servings = [1u32; 3];

    for _ in 0..REFINEMENT_STEPS {
        let calories = slot_calories(per_serving, servings);
        let total: Decimal = calories.iter().sum();

        if (total - target).abs() <= tolerance {
            break;
        }

        if total < target {
            let deficits: [Decimal; 3] = std::array::from_fn(|i| ideal[i] - calories[i]);
            let slot = argmax(&deficits);
            if deficits[slot] > Decimal::ZERO {
                servings[slot] += 1;
            }
        } else {
            let slot = argmax(&calories);
            if servings[slot] > 1 {
                servings[slot] -= 1;
            }
        }
    }

    servings
}
