mod plan;
mod refine;
mod search;

pub use plan::*;
pub use refine::*;
pub use search::*;

pub use dietplan_shared::mealplan::MealSlot;
