use clap::{Parser, Subcommand};

/// KitchenOS — meal-planning client: shopping checklist, weekly planner
/// helpers, and calendar export.
#[derive(Parser, Debug)]
#[command(name = "kitchenos")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the generated shopping list JSON file.
    #[arg(long, default_value = "shopping_list.json")]
    pub list: String,

    /// Path to the checklist state JSON file.
    #[arg(long, default_value = "checklist.json")]
    pub checklist: String,

    /// Path to the saved week plan JSON file.
    #[arg(long, default_value = "plan.json")]
    pub plan: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check off items of the current shopping list interactively.
    Shopping,

    /// Print the shareable text of the remaining items.
    Share,

    /// Suggest the next free weekday for a recipe in the plan.
    NextDay {
        /// Recipe title to schedule.
        #[arg(long)]
        recipe: String,

        /// Reference day to rotate from (defaults to the current weekday).
        #[arg(long)]
        today: Option<String>,
    },

    /// Export the saved week plan as an iCalendar file.
    ExportIcs {
        /// Output path for the .ics file.
        #[arg(long, default_value = "kitchenos_plan.ics")]
        output: String,
    },

    /// Clear the persisted checklist.
    Reset,
}

impl Default for Command {
    fn default() -> Self {
        Command::Shopping
    }
}
