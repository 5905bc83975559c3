use std::fs;
use std::path::Path;

use chrono::{Datelike, Local, Utc};
use clap::Parser;

use kitchenos_rs::cli::{Cli, Command};
use kitchenos_rs::error::{KitchenError, Result};
use kitchenos_rs::interface::{
    display_shopping_list, display_week_plan, match_recipe, prompt_shopping_action,
    prompt_yes_no, ShoppingAction,
};
use kitchenos_rs::models::{week_day_universe, ShoppingList, WEEK_DAY_NAMES};
use kitchenos_rs::planner::{build_ics, next_available_day};
use kitchenos_rs::shopping::{count_remaining, remaining_items, share_text};
use kitchenos_rs::state::{
    load_checklist, load_plan, load_shopping_response, save_checklist, ChecklistManager,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Shopping => cmd_shopping(&cli.list, &cli.checklist),
        Command::Share => cmd_share(&cli.list, &cli.checklist),
        Command::NextDay { recipe, today } => cmd_next_day(&cli.plan, &recipe, today.as_deref()),
        Command::ExportIcs { output } => cmd_export_ics(&cli.plan, &output),
        Command::Reset => cmd_reset(&cli.checklist),
    }
}

/// Load the current shopping list and its checklist, resetting stale checks.
fn load_current_list(
    list_path: &str,
    checklist_path: &str,
) -> Result<Option<(ShoppingList, ChecklistManager)>> {
    let path = Path::new(list_path);

    if !path.exists() {
        eprintln!("Shopping list file not found: {}", list_path);
        eprintln!("Generate a list from the planner first.");
        return Ok(None);
    }

    let response = load_shopping_response(path)?;
    let list = response.to_list();

    let mut manager = ChecklistManager::new(load_checklist(checklist_path)?);
    if manager.sync_signature(response.signature()) {
        println!("Shopping list changed since last run, checklist reset.");
    }

    Ok(Some((list, manager)))
}

/// Interactive check-off for the current shopping list.
fn cmd_shopping(list_path: &str, checklist_path: &str) -> Result<()> {
    let Some((list, mut manager)) = load_current_list(list_path, checklist_path)? else {
        return Ok(());
    };

    if list.is_empty() {
        println!("Shopping list is empty.");
        return Ok(());
    }

    loop {
        display_shopping_list(&list, &manager);

        let remaining = remaining_items(Some(&list), manager.checked());
        if count_remaining(&remaining) == 0 {
            println!("All items checked off.");
        }

        match prompt_shopping_action(&list, &manager)? {
            ShoppingAction::Toggle { category, index } => {
                manager.toggle(&category, index);
            }
            ShoppingAction::Share => {
                println!();
                println!("{}", share_text(&remaining));
                println!();
            }
            ShoppingAction::Done => break,
        }
    }

    let save = prompt_yes_no("Save checklist?", true)?;
    if save {
        save_checklist(checklist_path, &manager.to_state())?;
        println!("Checklist saved.");
    }

    Ok(())
}

/// Print the shareable text of the remaining items.
fn cmd_share(list_path: &str, checklist_path: &str) -> Result<()> {
    let Some((list, manager)) = load_current_list(list_path, checklist_path)? else {
        return Ok(());
    };

    let remaining = remaining_items(Some(&list), manager.checked());
    println!("{}", share_text(&remaining));

    Ok(())
}

/// Suggest the next free weekday for a recipe.
fn cmd_next_day(plan_path: &str, recipe: &str, today: Option<&str>) -> Result<()> {
    let path = Path::new(plan_path);

    if !path.exists() {
        eprintln!("Plan file not found: {}", plan_path);
        return Ok(());
    }

    let plan = load_plan(path)?;
    if plan.is_empty() {
        println!("Plan is empty.");
        return Ok(());
    }

    display_week_plan(&plan);

    let title = match_recipe(&plan, recipe)?;
    let week = week_day_universe();
    let today = today.map(str::to_string).unwrap_or_else(current_day_name);

    if !week.iter().any(|d| *d == today) {
        return Err(KitchenError::InvalidInput(format!(
            "Unknown day name: {}",
            today
        )));
    }

    let assigned = plan.assigned_days(&title);
    match next_available_day(&assigned, &week, &today) {
        Some(day) => println!("Next free day for '{}': {}", title, day),
        None => println!("No free day left for '{}'.", title),
    }

    Ok(())
}

/// Export the saved plan as an iCalendar file.
fn cmd_export_ics(plan_path: &str, output: &str) -> Result<()> {
    let path = Path::new(plan_path);

    if !path.exists() {
        eprintln!("Plan file not found: {}", plan_path);
        return Ok(());
    }

    let plan = load_plan(path)?;
    let ics = build_ics(
        &plan,
        &week_day_universe(),
        Local::now().date_naive(),
        Utc::now(),
    )?;

    fs::write(output, ics)?;
    println!("Calendar written to {}", output);

    Ok(())
}

/// Clear the persisted checklist.
fn cmd_reset(checklist_path: &str) -> Result<()> {
    let path = Path::new(checklist_path);

    if !path.exists() {
        println!("No checklist to reset.");
        return Ok(());
    }

    let confirm = prompt_yes_no("Clear all checked items?", false)?;
    if !confirm {
        return Ok(());
    }

    let mut manager = ChecklistManager::new(load_checklist(path)?);
    manager.reset();
    save_checklist(path, &manager.to_state())?;
    println!("Checklist cleared.");

    Ok(())
}

/// Today's weekday as the application displays it.
fn current_day_name() -> String {
    let offset = Local::now().weekday().num_days_from_monday() as usize;
    WEEK_DAY_NAMES[offset].to_string()
}
