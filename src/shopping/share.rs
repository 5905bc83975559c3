use crate::models::ShoppingList;
use crate::shopping::constants::SHARE_HEADER;

/// Render the remaining items as plain text for the clipboard or a share
/// sheet.
///
/// Format: the header line, then per category a blank line, the bare
/// category name, and one `- name (amount)` line per item. The amount and
/// its parentheses are suppressed when it trims empty. The result carries
/// no trailing newline.
pub fn share_text(remaining: &ShoppingList) -> String {
    let mut out = String::from(SHARE_HEADER);

    for category in &remaining.categories {
        out.push_str("\n\n");
        out.push_str(&category.name);

        for item in &category.items {
            out.push_str("\n- ");
            out.push_str(&item.name);

            let amount = item.amount.trim();
            if !amount.is_empty() {
                out.push_str(" (");
                out.push_str(amount);
                out.push(')');
            }
        }
    }

    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ShoppingCategory, ShoppingItem};

    #[test]
    fn test_empty_list_is_just_the_header() {
        assert_eq!(share_text(&ShoppingList::default()), SHARE_HEADER);
    }

    #[test]
    fn test_full_format() {
        let remaining = ShoppingList {
            categories: vec![
                ShoppingCategory {
                    name: "Warzywa".to_string(),
                    items: vec![
                        ShoppingItem::new("Cebula", "2 szt"),
                        ShoppingItem::new("Koperek", ""),
                    ],
                },
                ShoppingCategory {
                    name: "Nabiał".to_string(),
                    items: vec![ShoppingItem::new("Mleko", "1 l")],
                },
            ],
        };

        let expected = format!(
            "{}\n\nWarzywa\n- Cebula (2 szt)\n- Koperek\n\nNabiał\n- Mleko (1 l)",
            SHARE_HEADER
        );
        assert_eq!(share_text(&remaining), expected);
    }

    #[test]
    fn test_whitespace_amount_suppressed() {
        let remaining = ShoppingList {
            categories: vec![ShoppingCategory {
                name: "Przyprawy".to_string(),
                items: vec![ShoppingItem::new("Sól", "   ")],
            }],
        };

        let text = share_text(&remaining);
        assert!(text.ends_with("- Sól"));
    }

    #[test]
    fn test_no_trailing_newline() {
        let remaining = ShoppingList {
            categories: vec![ShoppingCategory {
                name: "Warzywa".to_string(),
                items: vec![ShoppingItem::new("Cebula", "2 szt")],
            }],
        };

        assert!(!share_text(&remaining).ends_with('\n'));
    }
}
