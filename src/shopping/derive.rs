use crate::models::{CheckedItems, ShoppingCategory, ShoppingList};

/// Composite checked-state key for the item at `index` within `category`.
pub fn checked_key(category: &str, index: usize) -> String {
    format!("{}-{}", category, index)
}

/// Filter a shopping list down to the items not yet checked off.
///
/// `None` means no list has been generated yet and maps to an empty result.
/// Categories whose items are all checked are dropped entirely; surviving
/// categories and items keep their original order.
pub fn remaining_items(list: Option<&ShoppingList>, checked: &CheckedItems) -> ShoppingList {
    let Some(list) = list else {
        return ShoppingList::default();
    };

    let categories = list
        .categories
        .iter()
        .filter_map(|category| {
            let items: Vec<_> = category
                .items
                .iter()
                .enumerate()
                .filter(|(index, _)| {
                    !checked
                        .get(&checked_key(&category.name, *index))
                        .copied()
                        .unwrap_or(false)
                })
                .map(|(_, item)| item.clone())
                .collect();

            if items.is_empty() {
                None
            } else {
                Some(ShoppingCategory {
                    name: category.name.clone(),
                    items,
                })
            }
        })
        .collect();

    ShoppingList { categories }
}

/// Total number of items left to buy.
pub fn count_remaining(remaining: &ShoppingList) -> usize {
    remaining.categories.iter().map(|c| c.items.len()).sum()
}
