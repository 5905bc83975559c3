use std::collections::HashSet;

/// Find the next weekday to offer for a recipe, rotating forward from
/// `current_day` and wrapping past the end of the week.
///
/// `week_days` is the caller's ordered universe of valid day names; it is
/// usually the seven-day week but any non-empty list of distinct names
/// works. Returns `None` when there is no room left (the count of distinct
/// assigned names already covers the universe), when `current_day` is not a
/// known day, or when the universe is empty. A `None` is a normal outcome
/// for the caller, not a failure.
pub fn next_available_day<'a>(
    assigned_days: &[String],
    week_days: &'a [String],
    current_day: &str,
) -> Option<&'a str> {
    if week_days.is_empty() {
        return None;
    }

    let assigned: HashSet<&str> = assigned_days.iter().map(String::as_str).collect();
    if assigned.len() >= week_days.len() {
        return None;
    }

    let start = week_days.iter().position(|day| day == current_day)?;

    for step in 1..=week_days.len() {
        let candidate = week_days[(start + step) % week_days.len()].as_str();
        if !assigned.contains(candidate) {
            return Some(candidate);
        }
    }

    None
}
