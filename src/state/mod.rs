mod manager;
mod persistence;

pub use manager::{ChecklistManager, ChecklistState};
pub use persistence::{
    load_checklist, load_plan, load_shopping_response, save_checklist, save_plan,
};
