pub mod prompts;
pub mod render;

pub use prompts::{match_recipe, prompt_shopping_action, prompt_yes_no, ShoppingAction};
pub use render::{display_shopping_list, display_week_plan};
