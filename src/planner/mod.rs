pub mod ics;
pub mod rotation;

pub use ics::{build_ics, ics_escape};
pub use rotation::next_available_day;
