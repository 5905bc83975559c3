/// Header line of the shareable shopping-list text.
pub const SHARE_HEADER: &str = "Lista zakupów (do kupienia):";

/// Line count above which the print rendering switches to three columns.
pub const THREE_COLUMN_THRESHOLD: usize = 40;

/// Font-size rules for the print rendering, evaluated top-down: the first
/// rule whose exclusive lower bound the total line count exceeds wins.
pub const FONT_SIZE_RULES: [(usize, u8); 3] = [(60, 9), (45, 10), (30, 11)];

/// Font size when no rule matches.
pub const DEFAULT_FONT_SIZE: u8 = 12;
