pub mod constants;
pub mod derive;
pub mod layout;
pub mod share;

pub use constants::*;
pub use derive::{checked_key, count_remaining, remaining_items};
pub use layout::print_layout;
pub use share::share_text;
