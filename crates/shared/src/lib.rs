mod error;
pub mod mealplan;
pub mod recipe;

pub use error::*;
