use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{ShoppingListResponse, WeekPlan};
use crate::state::ChecklistState;

/// Load a generated shopping list (the backend response document).
pub fn load_shopping_response<P: AsRef<Path>>(path: P) -> Result<ShoppingListResponse> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load the persisted checklist. A missing file is a normal first run and
/// yields an empty state.
pub fn load_checklist<P: AsRef<Path>>(path: P) -> Result<ChecklistState> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(ChecklistState::default());
    }

    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save the checklist as pretty-printed JSON.
pub fn save_checklist<P: AsRef<Path>>(path: P, state: &ChecklistState) -> Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load the saved weekly plan.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<WeekPlan> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save the weekly plan as pretty-printed JSON.
pub fn save_plan<P: AsRef<Path>>(path: P, plan: &WeekPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json)?;
    Ok(())
}
