//! Interactive menu handler
//!
//! Lists the available joke categories as a numbered menu with a final
//! Exit entry, reads one choice per iteration, and prints the fetched
//! joke. An earlier version of this tool capped the menu at four entries
//! to fit a roman-numeral symbol table; the menu now enumerates every
//! category the API returns.

use crate::api::JokeClient;
use crate::config::Config;
use crate::error::Result;

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// One parsed menu selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    /// A category, by zero-based index into the listed types
    Category(usize),
    /// The exit entry
    Exit,
    /// Anything unparsable or out of range
    Invalid,
}

/// Run the interactive menu loop
///
/// # Errors
///
/// Returns an error when the client cannot be constructed or the terminal
/// is unusable. API failures are not errors: an empty category list prints
/// a message and returns, and a failed joke fetch prints a retry message.
pub async fn run_menu(config: Config) -> Result<()> {
    let client = JokeClient::new(&config.api)?;

    let joke_types = client.joke_types().await;
    if joke_types.is_empty() {
        println!("Could not fetch joke types from the API.");
        return Ok(());
    }

    let mut rl = DefaultEditor::new()?;
    loop {
        println!("\nSelect a joke type:");
        for line in menu_lines(&joke_types) {
            println!("{}", line);
        }

        let line = match rl.readline("Enter your choice: ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(err) => return Err(err.into()),
        };

        match parse_choice(&line, joke_types.len()) {
            MenuChoice::Exit => {
                println!("Goodbye!");
                break;
            }
            MenuChoice::Category(index) => {
                let selected = &joke_types[index];
                match client.random_joke(Some(selected)).await {
                    Some(joke) => {
                        println!();
                        println!("{}", format!("[{} Joke]", title_case(&joke.joke_type)).bold());
                        println!("{}", joke.setup);
                        println!("{}", joke.punchline.italic());
                    }
                    None => println!("Could not fetch a joke. Try again."),
                }
            }
            MenuChoice::Invalid => println!("Invalid choice. Please try again."),
        }
    }

    Ok(())
}

/// Menu body: one numbered line per category plus the exit entry
pub fn menu_lines(joke_types: &[String]) -> Vec<String> {
    let mut lines: Vec<String> = joke_types
        .iter()
        .enumerate()
        .map(|(i, t)| format!("{}. {}", i + 1, title_case(t)))
        .collect();
    lines.push(format!("{}. Exit", joke_types.len() + 1));
    lines
}

/// Parse one line of input against a menu of `count` categories
pub fn parse_choice(input: &str, count: usize) -> MenuChoice {
    match input.trim().parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => MenuChoice::Category(n - 1),
        Ok(n) if n == count + 1 => MenuChoice::Exit,
        _ => MenuChoice::Invalid,
    }
}

/// Capitalize each word, matching how category labels are displayed
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice_category() {
        assert_eq!(parse_choice("1", 3), MenuChoice::Category(0));
        assert_eq!(parse_choice("3", 3), MenuChoice::Category(2));
        assert_eq!(parse_choice(" 2 ", 3), MenuChoice::Category(1));
    }

    #[test]
    fn test_parse_choice_exit() {
        assert_eq!(parse_choice("4", 3), MenuChoice::Exit);
        assert_eq!(parse_choice("3", 2), MenuChoice::Exit);
    }

    #[test]
    fn test_parse_choice_invalid() {
        assert_eq!(parse_choice("0", 3), MenuChoice::Invalid);
        assert_eq!(parse_choice("5", 3), MenuChoice::Invalid);
        assert_eq!(parse_choice("II", 3), MenuChoice::Invalid);
        assert_eq!(parse_choice("", 3), MenuChoice::Invalid);
        assert_eq!(parse_choice("-1", 3), MenuChoice::Invalid);
    }

    #[test]
    fn test_menu_lines_enumerate_all_categories() {
        let types = vec![
            "general".to_string(),
            "programming".to_string(),
            "knock-knock".to_string(),
            "dad".to_string(),
            "puns".to_string(),
        ];
        let lines = menu_lines(&types);
        // No cap: five categories plus the exit entry
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "1. General");
        assert_eq!(lines[2], "3. Knock-Knock");
        assert_eq!(lines[5], "6. Exit");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("general"), "General");
        assert_eq!(title_case("knock-knock"), "Knock-Knock");
        assert_eq!(title_case("DAD jokes"), "Dad Jokes");
        assert_eq!(title_case(""), "");
    }
}
