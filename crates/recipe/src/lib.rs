mod catalog;
mod diet;
mod nutrition;
mod types;

pub use catalog::*;
pub use diet::*;
pub use nutrition::*;
pub use types::*;

pub use dietplan_shared::recipe::{CarbConstraint, MealType};
