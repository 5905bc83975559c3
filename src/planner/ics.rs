use std::collections::HashMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use crate::error::{KitchenError, Result};
use crate::models::WeekPlan;

/// Ingredients listed in an event description before truncation.
const MAX_DESCRIPTION_INGREDIENTS: usize = 5;

/// Escape a TEXT value per RFC 5545.
pub fn ics_escape(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace("\r\n", "\n")
        .replace('\n', "\\n")
}

/// Build an iCalendar document for a weekly plan.
///
/// Each selection becomes an all-day event on the next occurrence of its
/// weekday on or after `today`; entries without a day fall back to the
/// first day of `week_days`, as does an unrecognized day name. The clock
/// and reference date are arguments so the builder stays deterministic.
///
/// UIDs are stable across re-exports: `<id>-<date>-<occurrence>` counts
/// repeats of the same recipe on the same date, so re-importing the file
/// does not duplicate events.
pub fn build_ics(
    plan: &WeekPlan,
    week_days: &[String],
    today: NaiveDate,
    now: DateTime<Utc>,
) -> Result<String> {
    if plan.is_empty() {
        return Err(KitchenError::EmptyPlan);
    }

    let now_str = now.format("%Y%m%dT%H%M%SZ").to_string();

    let mut ics = String::from(
        "BEGIN:VCALENDAR\r\n\
         VERSION:2.0\r\n\
         PRODID:-//KitchenOS//PL//PL\r\n\
         CALSCALE:GREGORIAN\r\n\
         METHOD:PUBLISH\r\n\
         X-WR-CALNAME:Plan Obiadów KitchenOS\r\n",
    );

    // Same recipe on the same date may occur more than once
    let mut uid_counters: HashMap<(u32, String), u32> = HashMap::new();

    for entry in &plan.selections {
        let day_offset = entry
            .day
            .as_ref()
            .and_then(|day| week_days.iter().position(|d| d == day))
            .unwrap_or(0);

        let days_since_monday = day_offset as i64 - today.weekday().num_days_from_monday() as i64;
        let mut target = today + Duration::days(days_since_monday);
        if target < today {
            target += Duration::days(7);
        }

        let date_str = target.format("%Y%m%d").to_string();
        let end_date_str = (target + Duration::days(1)).format("%Y%m%d").to_string();

        let occurrence = uid_counters
            .entry((entry.id, date_str.clone()))
            .and_modify(|n| *n += 1)
            .or_insert(1);
        let uid = format!("{}-{}-{}@kitchenos.local", entry.id, date_str, occurrence);

        let mut ingredients_str = entry
            .ingredients
            .iter()
            .take(MAX_DESCRIPTION_INGREDIENTS)
            .cloned()
            .collect::<Vec<_>>()
            .join(" | ");
        if entry.ingredients.len() > MAX_DESCRIPTION_INGREDIENTS {
            ingredients_str.push_str("...");
        }

        let summary = ics_escape(&format!("🍳 {} ({} porcji)", entry.title, entry.portions));
        let description = ics_escape(&format!(
            "Składniki: {}\n\nID Przepisu: {}",
            ingredients_str, entry.id
        ));

        ics.push_str(&format!(
            "BEGIN:VEVENT\r\n\
             DTSTART;VALUE=DATE:{}\r\n\
             DTEND;VALUE=DATE:{}\r\n\
             DTSTAMP:{}\r\n\
             UID:{}\r\n\
             SUMMARY:{}\r\n\
             DESCRIPTION:{}\r\n\
             END:VEVENT\r\n",
            date_str, end_date_str, now_str, uid, summary, description
        ));
    }

    ics.push_str("END:VCALENDAR\r\n");

    Ok(ics)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::models::{week_day_universe, PlanEntry};

    fn entry(id: u32, title: &str, day: Option<&str>) -> PlanEntry {
        PlanEntry {
            id,
            title: title.to_string(),
            portions: 2,
            day: day.map(|d| d.to_string()),
            ingredients: vec!["Cebula".to_string(), "Mleko".to_string()],
        }
    }

    fn wednesday() -> NaiveDate {
        // 2026-08-05 is a Wednesday
        NaiveDate::from_ymd_opt(2026, 8, 5).unwrap()
    }

    fn clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 5, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_empty_plan_is_an_error() {
        let result = build_ics(&WeekPlan::default(), &week_day_universe(), wednesday(), clock());
        assert!(matches!(result, Err(KitchenError::EmptyPlan)));
    }

    #[test]
    fn test_escape() {
        assert_eq!(ics_escape("a;b,c\\d"), "a\\;b\\,c\\\\d");
        assert_eq!(ics_escape("line1\r\nline2"), "line1\\nline2");
        assert_eq!(ics_escape(""), "");
    }

    #[test]
    fn test_calendar_envelope() {
        let plan = WeekPlan {
            selections: vec![entry(7, "Żurek", Some("Czwartek"))],
        };
        let ics = build_ics(&plan, &week_day_universe(), wednesday(), clock()).unwrap();

        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(ics.ends_with("END:VCALENDAR\r\n"));
        assert!(ics.contains("PRODID:-//KitchenOS//PL//PL\r\n"));
        assert!(ics.contains("X-WR-CALNAME:Plan Obiadów KitchenOS\r\n"));
        assert!(ics.contains("DTSTAMP:20260805T123000Z\r\n"));
    }

    #[test]
    fn test_event_lands_on_next_occurrence() {
        // Thursday follows the reference Wednesday directly
        let plan = WeekPlan {
            selections: vec![entry(7, "Żurek", Some("Czwartek"))],
        };
        let ics = build_ics(&plan, &week_day_universe(), wednesday(), clock()).unwrap();

        assert!(ics.contains("DTSTART;VALUE=DATE:20260806\r\n"));
        assert!(ics.contains("DTEND;VALUE=DATE:20260807\r\n"));
    }

    #[test]
    fn test_past_weekday_rolls_to_next_week() {
        // Monday already passed this week, so the event lands next Monday
        let plan = WeekPlan {
            selections: vec![entry(7, "Żurek", Some("Poniedziałek"))],
        };
        let ics = build_ics(&plan, &week_day_universe(), wednesday(), clock()).unwrap();

        assert!(ics.contains("DTSTART;VALUE=DATE:20260810\r\n"));
    }

    #[test]
    fn test_unscheduled_entry_falls_back_to_monday() {
        let plan = WeekPlan {
            selections: vec![entry(7, "Żurek", None)],
        };
        let ics = build_ics(&plan, &week_day_universe(), wednesday(), clock()).unwrap();

        // Monday offset 0, already past Wednesday: next Monday
        assert!(ics.contains("DTSTART;VALUE=DATE:20260810\r\n"));
    }

    #[test]
    fn test_repeated_recipe_gets_distinct_uids() {
        let plan = WeekPlan {
            selections: vec![
                entry(7, "Żurek", Some("Czwartek")),
                entry(7, "Żurek", Some("Czwartek")),
            ],
        };
        let ics = build_ics(&plan, &week_day_universe(), wednesday(), clock()).unwrap();

        assert!(ics.contains("UID:7-20260806-1@kitchenos.local\r\n"));
        assert!(ics.contains("UID:7-20260806-2@kitchenos.local\r\n"));
    }

    #[test]
    fn test_ingredient_truncation() {
        let mut long = entry(9, "Bigos", Some("Piątek"));
        long.ingredients = (1..=7).map(|i| format!("Składnik {}", i)).collect();

        let plan = WeekPlan {
            selections: vec![long],
        };
        let ics = build_ics(&plan, &week_day_universe(), wednesday(), clock()).unwrap();

        assert!(ics.contains("Składnik 4 | Składnik 5..."));
        assert!(!ics.contains("Składnik 6"));
    }

    #[test]
    fn test_summary_format() {
        let plan = WeekPlan {
            selections: vec![entry(7, "Żurek", Some("Czwartek"))],
        };
        let ics = build_ics(&plan, &week_day_universe(), wednesday(), clock()).unwrap();

        assert!(ics.contains("SUMMARY:🍳 Żurek (2 porcji)\r\n"));
    }
}
