use crate::models::{PrintLayoutConfig, ShoppingList};
use crate::shopping::constants::{DEFAULT_FONT_SIZE, FONT_SIZE_RULES, THREE_COLUMN_THRESHOLD};

/// Pick column count and font size for the print rendering.
///
/// Each item takes one line and each category adds a header line. The
/// thresholds are fixed contract values that keep the printed list on a
/// single page.
pub fn print_layout(remaining: &ShoppingList) -> PrintLayoutConfig {
    let total_lines: usize = remaining
        .categories
        .iter()
        .map(|c| c.items.len() + 1)
        .sum();

    let columns = if total_lines > THREE_COLUMN_THRESHOLD {
        3
    } else {
        2
    };

    let font_size = FONT_SIZE_RULES
        .iter()
        .find(|(bound, _)| total_lines > *bound)
        .map(|(_, size)| *size)
        .unwrap_or(DEFAULT_FONT_SIZE);

    PrintLayoutConfig { columns, font_size }
}
