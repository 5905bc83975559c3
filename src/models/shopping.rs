use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Checked-state map keyed by `"<category>-<index>"`.
///
/// An absent key means unchecked. Keys are positional, not content-addressed:
/// if the list is regenerated with items in a different order, old keys apply
/// to the wrong items. The host guards against this by resetting the map
/// whenever the list signature changes (see `ChecklistManager`).
pub type CheckedItems = HashMap<String, bool>;

/// A single shopping item: product name plus a free-text quantity.
///
/// `amount` is empty when the quantity is unknown. Items are immutable once
/// parsed; checked state lives outside the item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub name: String,

    #[serde(default)]
    pub amount: String,
}

impl ShoppingItem {
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
        }
    }

    /// Parse a backend display label into name and amount.
    ///
    /// The generator renders items as `"Cebula (2 sztuki)"`; the trailing
    /// parenthesised group is the amount. A label without one is all name.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();

        if let Some(stripped) = label.strip_suffix(')') {
            if let Some(split_at) = stripped.rfind(" (") {
                let name = stripped[..split_at].trim();
                let amount = stripped[split_at + 2..].trim();
                if !name.is_empty() {
                    return Self::new(name, amount);
                }
            }
        }

        Self::new(label, "")
    }

    /// Display label: `"Name (amount)"`, or just the name when the amount
    /// is empty.
    pub fn label(&self) -> String {
        let amount = self.amount.trim();
        if amount.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, amount)
        }
    }
}

/// A named group of shopping items.
///
/// Item order is fixed at generation time and significant: it defines the
/// positional index used in checked-state keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingCategory {
    pub name: String,
    pub items: Vec<ShoppingItem>,
}

/// A categorized shopping list, in the generator's category order.
///
/// Replaced wholesale whenever the planner regenerates it, never patched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub categories: Vec<ShoppingCategory>,
}

impl ShoppingList {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Raw category entry as the backend serializes it: items are display labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawShoppingCategory {
    pub category: String,
    pub items: Vec<String>,
}

/// The `/api/planner/generate` response document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingListResponse {
    pub shopping_list: Vec<RawShoppingCategory>,

    #[serde(default)]
    pub total_recipes: u32,

    /// Generation timestamp, used as the list's opaque signature.
    pub generated_at: String,
}

impl ShoppingListResponse {
    /// Opaque signature identifying this generated list version.
    pub fn signature(&self) -> &str {
        &self.generated_at
    }

    /// Parse the raw labels into the client-side list structure.
    pub fn to_list(&self) -> ShoppingList {
        let categories = self
            .shopping_list
            .iter()
            .map(|raw| ShoppingCategory {
                name: raw.category.clone(),
                items: raw.items.iter().map(|l| ShoppingItem::from_label(l)).collect(),
            })
            .collect();

        ShoppingList { categories }
    }
}

/// Column/font hints for the print rendering. Display-only, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintLayoutConfig {
    pub columns: u8,
    pub font_size: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_with_amount() {
        let item = ShoppingItem::from_label("Cebula (2 sztuki)");
        assert_eq!(item.name, "Cebula");
        assert_eq!(item.amount, "2 sztuki");
    }

    #[test]
    fn test_from_label_without_amount() {
        let item = ShoppingItem::from_label("Sól");
        assert_eq!(item.name, "Sól");
        assert_eq!(item.amount, "");
    }

    #[test]
    fn test_from_label_nested_parens() {
        // Only the trailing group is the amount
        let item = ShoppingItem::from_label("Ser (żółty) (200 g)");
        assert_eq!(item.name, "Ser (żółty)");
        assert_eq!(item.amount, "200 g");
    }

    #[test]
    fn test_label_roundtrip() {
        let item = ShoppingItem::new("Mleko", "1 l");
        assert_eq!(item.label(), "Mleko (1 l)");
        assert_eq!(ShoppingItem::from_label(&item.label()), item);

        let bare = ShoppingItem::new("Pieprz", "");
        assert_eq!(bare.label(), "Pieprz");
    }

    #[test]
    fn test_response_to_list() {
        let json = r#"{
            "shopping_list": [
                {"category": "Warzywa i owoce", "items": ["Cebula (2 sztuki)", "Koperek"]},
                {"category": "Nabiał i jaja", "items": ["Mleko (1 l)"]}
            ],
            "total_recipes": 2,
            "generated_at": "2026-08-03T10:00:00"
        }"#;

        let response: ShoppingListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.signature(), "2026-08-03T10:00:00");

        let list = response.to_list();
        assert_eq!(list.categories.len(), 2);
        assert_eq!(list.categories[0].name, "Warzywa i owoce");
        assert_eq!(list.categories[0].items[0].name, "Cebula");
        assert_eq!(list.categories[0].items[0].amount, "2 sztuki");
        assert_eq!(list.categories[0].items[1].amount, "");
    }
}
