use serde::{Deserialize, Serialize};

/// Canonical weekday display names in calendar order (Monday-first), as the
/// application shows them.
pub const WEEK_DAY_NAMES: [&str; 7] = [
    "Poniedziałek",
    "Wtorek",
    "Środa",
    "Czwartek",
    "Piątek",
    "Sobota",
    "Niedziela",
];

/// The canonical weekday universe as owned strings, for the rotation helper.
pub fn week_day_universe() -> Vec<String> {
    WEEK_DAY_NAMES.iter().map(|d| d.to_string()).collect()
}

/// A planned recipe selection, one slot of the weekly planner grid.
///
/// `day` is absent while the recipe sits unscheduled in the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub id: u32,

    pub title: String,

    #[serde(default = "default_portions")]
    pub portions: u32,

    #[serde(default)]
    pub day: Option<String>,

    #[serde(default)]
    pub ingredients: Vec<String>,
}

fn default_portions() -> u32 {
    1
}

/// The user's saved weekly plan: the `{"selections": [...]}` document the
/// backend stores and the calendar export consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPlan {
    pub selections: Vec<PlanEntry>,
}

impl WeekPlan {
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Days already assigned to a recipe (matched by title,
    /// case-insensitive). Duplicates are preserved; the rotation helper
    /// collapses them itself.
    pub fn assigned_days(&self, title: &str) -> Vec<String> {
        let wanted = title.to_lowercase();
        self.selections
            .iter()
            .filter(|entry| entry.title.to_lowercase() == wanted)
            .filter_map(|entry| entry.day.clone())
            .collect()
    }

    /// Distinct recipe titles in first-appearance order.
    pub fn titles(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for entry in &self.selections {
            if !seen
                .iter()
                .any(|t: &String| t.to_lowercase() == entry.title.to_lowercase())
            {
                seen.push(entry.title.clone());
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, day: Option<&str>) -> PlanEntry {
        PlanEntry {
            id: 1,
            title: title.to_string(),
            portions: 2,
            day: day.map(|d| d.to_string()),
            ingredients: Vec::new(),
        }
    }

    #[test]
    fn test_assigned_days_case_insensitive() {
        let plan = WeekPlan {
            selections: vec![
                entry("Żurek", Some("Poniedziałek")),
                entry("żurek", Some("Środa")),
                entry("Żurek", None),
                entry("Kotlet", Some("Wtorek")),
            ],
        };

        assert_eq!(plan.assigned_days("Żurek"), vec!["Poniedziałek", "Środa"]);
    }

    #[test]
    fn test_titles_distinct_in_order() {
        let plan = WeekPlan {
            selections: vec![
                entry("Żurek", None),
                entry("Kotlet", None),
                entry("żurek", None),
            ],
        };

        assert_eq!(plan.titles(), vec!["Żurek", "Kotlet"]);
    }

    #[test]
    fn test_plan_deserialize_defaults() {
        let json = r#"{"selections": [{"id": 7, "title": "Żurek"}]}"#;
        let plan: WeekPlan = serde_json::from_str(json).unwrap();

        assert_eq!(plan.selections[0].portions, 1);
        assert_eq!(plan.selections[0].day, None);
        assert!(plan.selections[0].ingredients.is_empty());
    }
}
