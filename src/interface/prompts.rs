use dialoguer::{Confirm, Select};
use strsim::jaro_winkler;

use crate::error::{KitchenError, Result};
use crate::models::{ShoppingList, WeekPlan};
use crate::state::ChecklistManager;

/// What the user picked in the check-off loop.
pub enum ShoppingAction {
    Toggle { category: String, index: usize },
    Share,
    Done,
}

/// Offer every item of the list for toggling, plus the share and exit
/// actions.
pub fn prompt_shopping_action(
    list: &ShoppingList,
    manager: &ChecklistManager,
) -> Result<ShoppingAction> {
    let mut rows = Vec::new();
    let mut actions = Vec::new();

    for category in &list.categories {
        for (index, item) in category.items.iter().enumerate() {
            let mark = if manager.is_checked(&category.name, index) {
                "x"
            } else {
                " "
            };
            rows.push(format!("[{}] {}: {}", mark, category.name, item.label()));
            actions.push(ShoppingAction::Toggle {
                category: category.name.clone(),
                index,
            });
        }
    }

    rows.push("Show share text".to_string());
    actions.push(ShoppingAction::Share);
    rows.push("Done".to_string());
    actions.push(ShoppingAction::Done);

    let selection = Select::new()
        .with_prompt("Toggle an item")
        .items(&rows)
        .default(0)
        .interact()?;

    Ok(actions.swap_remove(selection))
}

/// Resolve a user-typed recipe title against the plan.
///
/// Tries an exact case-insensitive match first, then fuzzy candidates
/// confirmed interactively.
pub fn match_recipe(plan: &WeekPlan, input: &str) -> Result<String> {
    let titles = plan.titles();
    let wanted = input.trim().to_lowercase();

    if let Some(title) = titles.iter().find(|t| t.to_lowercase() == wanted) {
        return Ok(title.clone());
    }

    let mut candidates: Vec<(&String, f64)> = titles
        .iter()
        .map(|t| (t, jaro_winkler(&t.to_lowercase(), &wanted)))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        return Err(KitchenError::RecipeNotFound(input.to_string()));
    }

    if candidates.len() == 1 {
        let title = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", title))
            .default(true)
            .interact()?;

        if confirm {
            return Ok(title.clone());
        }
        return Err(KitchenError::RecipeNotFound(input.to_string()));
    }

    // Multiple matches - let user select
    let options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(t, _)| (*t).clone())
        .collect();

    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < options.len() {
        Ok(options[selection].clone())
    } else {
        Err(KitchenError::RecipeNotFound(input.to_string()))
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
