use crate::models::{ShoppingList, WeekPlan};
use crate::shopping::{count_remaining, print_layout, remaining_items};
use crate::state::ChecklistManager;

/// Display the shopping list with checkbox marks and a remaining summary.
pub fn display_shopping_list(list: &ShoppingList, manager: &ChecklistManager) {
    if list.is_empty() {
        println!("Shopping list is empty.");
        return;
    }

    println!();
    println!("=== Shopping List ===");

    for category in &list.categories {
        println!();
        println!("{}", category.name);
        for (index, item) in category.items.iter().enumerate() {
            let mark = if manager.is_checked(&category.name, index) {
                "x"
            } else {
                " "
            };
            println!("  [{}] {}", mark, item.label());
        }
    }

    let remaining = remaining_items(Some(list), manager.checked());
    let layout = print_layout(&remaining);

    println!();
    println!("--- Summary ---");
    println!("Remaining items: {}", count_remaining(&remaining));
    println!(
        "Print layout: {} columns, {} pt",
        layout.columns, layout.font_size
    );
    println!();
}

/// Display the weekly plan, one line per selection.
pub fn display_week_plan(plan: &WeekPlan) {
    if plan.is_empty() {
        println!("Plan is empty.");
        return;
    }

    println!();
    println!("=== Week Plan ({} selections) ===", plan.selections.len());
    println!();

    let max_day_len = plan
        .selections
        .iter()
        .filter_map(|s| s.day.as_ref().map(|d| d.len()))
        .max()
        .unwrap_or(1);

    for entry in &plan.selections {
        let day = entry.day.as_deref().unwrap_or("-");
        println!(
            "  {:<width$}  {} ({} porcji)",
            day,
            entry.title,
            entry.portions,
            width = max_day_len
        );
    }

    println!();
}
