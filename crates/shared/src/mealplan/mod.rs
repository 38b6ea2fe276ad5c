use serde::Serialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::recipe::MealType;

/// One of the three required components of a daily plan.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    /// Slots in priority order. Ties in the planner resolve to the earliest slot here.
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    pub fn index(self) -> usize {
        match self {
            MealSlot::Breakfast => 0,
            MealSlot::Lunch => 1,
            MealSlot::Dinner => 2,
        }
    }

    pub fn meal_type(self) -> MealType {
        match self {
            MealSlot::Breakfast => MealType::Breakfast,
            MealSlot::Lunch => MealType::Lunch,
            MealSlot::Dinner => MealType::Dinner,
        }
    }
}

impl TryFrom<MealType> for MealSlot {
    type Error = MealType;

    fn try_from(value: MealType) -> Result<Self, Self::Error> {
        match value {
            MealType::Breakfast => Ok(MealSlot::Breakfast),
            MealType::Lunch => Ok(MealSlot::Lunch),
            MealType::Dinner => Ok(MealSlot::Dinner),
            MealType::Snack => Err(MealType::Snack),
        }
    }
}
