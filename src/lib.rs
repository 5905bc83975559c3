pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod shopping;
pub mod state;

pub use error::{KitchenError, Result};
pub use models::{PlanEntry, ShoppingItem, ShoppingList, WeekPlan};
