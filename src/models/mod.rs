mod plan;
mod shopping;

pub use plan::{week_day_universe, PlanEntry, WeekPlan, WEEK_DAY_NAMES};
pub use shopping::{
    CheckedItems, PrintLayoutConfig, RawShoppingCategory, ShoppingCategory, ShoppingItem,
    ShoppingList, ShoppingListResponse,
};
