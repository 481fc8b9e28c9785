mod commands;
mod render;

use agenda_core::EventStore;
use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;

/// Menu states reachable from the main loop. `Exit` is terminal; every
/// other choice runs one operation and falls back to the menu.
enum MenuChoice {
    Add,
    ListAll,
    ListUpcoming,
    Delete,
    Exit,
}

fn main() -> Result<()> {
    let store = EventStore::default_path();

    loop {
        print_menu();

        let input: String = Input::new()
            .with_prompt("Choose an option (1-5)")
            .allow_empty(true)
            .interact_text()?;

        let choice = match parse_choice(&input) {
            Some(choice) => choice,
            None => {
                println!("{}", "Invalid choice, please try again.".red());
                continue;
            }
        };

        let result = match choice {
            MenuChoice::Add => commands::add::run(&store),
            MenuChoice::ListAll => commands::list::run(&store),
            MenuChoice::ListUpcoming => commands::upcoming::run(&store),
            MenuChoice::Delete => commands::delete::run(&store),
            MenuChoice::Exit => break,
        };

        // Nothing is fatal: report and fall through to the menu.
        if let Err(e) = result {
            println!("{}", format!("Error: {}", e).red());
        }
    }

    println!("Exiting the planner.");
    Ok(())
}

fn print_menu() {
    println!();
    println!("📅 {}", "Agenda, your terminal event planner".bold());
    println!();
    println!("1. Add new event");
    println!("2. Show all events");
    println!("3. Show upcoming events");
    println!("4. Delete an event");
    println!("5. Exit");
}

fn parse_choice(input: &str) -> Option<MenuChoice> {
    match input.trim() {
        "1" => Some(MenuChoice::Add),
        "2" => Some(MenuChoice::ListAll),
        "3" => Some(MenuChoice::ListUpcoming),
        "4" => Some(MenuChoice::Delete),
        "5" => Some(MenuChoice::Exit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_operations() {
        assert!(matches!(parse_choice("1"), Some(MenuChoice::Add)));
        assert!(matches!(parse_choice("2"), Some(MenuChoice::ListAll)));
        assert!(matches!(parse_choice("3"), Some(MenuChoice::ListUpcoming)));
        assert!(matches!(parse_choice("4"), Some(MenuChoice::Delete)));
        assert!(matches!(parse_choice("5"), Some(MenuChoice::Exit)));
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert!(matches!(parse_choice(" 2 "), Some(MenuChoice::ListAll)));
    }

    #[test]
    fn anything_else_is_rejected() {
        assert!(parse_choice("").is_none());
        assert!(parse_choice("0").is_none());
        assert!(parse_choice("6").is_none());
        assert!(parse_choice("add").is_none());
        assert!(parse_choice("12").is_none());
    }
}
