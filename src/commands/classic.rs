//! Classic menu-driven mode
//!
//! The plain readline interface: a main menu, a help menu, interactive game
//! setup, and the round loop with its out-of-band `colors` and `memory`
//! commands.

use crate::core::Code;
use crate::game::{GameConfig, Round, RoundStatus};
use crate::output::display::print_palette;
use crate::output::formatters::{code_line, code_names};
use colored::Colorize;
use std::io::{self, Write};

/// Run the classic menu-driven game
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_classic() -> Result<(), String> {
    println!("Welcome to Mastermind! You are on the main menu.");
    println!("Type 'play' to start the game.");
    println!("Type 'help' to bring up the help menu, which will describe the game.");
    println!("Type 'quit' to leave this interface.");
    println!();

    loop {
        let input = get_user_input(">>")?.to_lowercase();

        match input.as_str() {
            "play" => {
                if let Some(config) = prompt_config()? {
                    play_round(&config)?;
                }
            }
            "help" => help_menu()?,
            "quit" => {
                println!("Goodbye!");
                return Ok(());
            }
            _ => println!("Input not recognized. Please try again."),
        }
    }
}

/// Ask for rounds, code slots, and color count
///
/// Any invalid answer aborts the setup and drops back to the main menu, the
/// same as entering an out-of-bounds value.
fn prompt_config() -> Result<Option<GameConfig>, String> {
    let Some(rounds) = parse_count(&get_user_input("Please give the number of rounds for the game")?)
    else {
        return Ok(back_to_menu());
    };
    let Some(slots) = parse_count(&get_user_input("Please give the number of entries in the code")?)
    else {
        return Ok(back_to_menu());
    };
    let Some(colors) = parse_count(&get_user_input("Please give the number of colors used")?) else {
        return Ok(back_to_menu());
    };

    let config = GameConfig::new(rounds, slots, colors);
    if let Err(err) = config.validate() {
        println!("{err}");
        return Ok(back_to_menu());
    }

    Ok(Some(config))
}

fn back_to_menu() -> Option<GameConfig> {
    println!("That input is invalid. Please try again.");
    println!("You have been returned to the main menu.");
    None
}

/// Parse a digits-only positive count, rejecting signs and decimals
fn parse_count(input: &str) -> Option<usize> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

/// Play one round against a freshly generated secret
fn play_round(config: &GameConfig) -> Result<(), String> {
    let mut round = Round::new(config);
    let palette = round.palette();

    println!("Welcome to Mastermind.");
    println!("The solution for this round has been generated. Let's begin, shall we?");
    println!();
    println!(
        "Enter answers as a sequence of {} letters representing colors in the code.",
        config.slots
    );
    println!("To remind yourself of what colors are available for use, type 'colors' here.");
    println!("To remind yourself of your past entries and results, type 'memory' here.");

    while !round.is_over() {
        if round.remaining() == 1 {
            println!("You have 1 round left.");
        } else {
            println!("You have {} rounds left.", round.remaining());
        }

        let input = get_user_input(">>")?;

        // Out-of-band commands cost no round
        match input.to_lowercase().as_str() {
            "colors" => {
                print_palette(palette);
                continue;
            }
            "memory" => {
                print_memory(&round);
                continue;
            }
            _ => {}
        }

        let guess = match Code::parse_guess(&input, config.slots, palette) {
            Ok(guess) => guess,
            Err(err) => {
                println!("That input was invalid. Please try again. ({err})");
                continue;
            }
        };

        let score = round.guess(&guess).map_err(|e| e.to_string())?;

        if round.status() == RoundStatus::Won {
            println!(
                "{}",
                "Congratulations! That was the correct combination! You won!"
                    .bright_green()
                    .bold()
            );
        } else {
            println!("That result was not correct.");
            println!("Your input was: {}.", code_line(&guess));
            println!(
                "The result was: {} colors are correct and {} are in the wrong place.",
                score.exact(),
                score.misplaced()
            );
        }
    }

    if round.status() == RoundStatus::Lost {
        println!("Sorry, you're out of time. This game is over.");
        println!(
            "The winning combination was: {}.",
            code_names(round.secret())
        );
    }

    println!("Returning to the main menu...");
    println!("You are now back on the main menu.");
    println!();
    Ok(())
}

/// Print the log of past entries and their results
fn print_memory(round: &Round) {
    if round.memory().is_empty() {
        println!("There are no former entries to print.");
        return;
    }

    println!("Entry Format: Number of Entry. Input Sequence; Result");
    for (index, record) in round.memory().iter().enumerate() {
        println!(
            "{}. {}; {}",
            index + 1,
            code_line(&record.guess),
            record.score
        );
    }
}

/// The help menu with its game explanation and command reference
fn help_menu() -> Result<(), String> {
    println!("Would you like to hear about the game Mastermind or the game's commands?");
    println!("Type 'mastermind' for the former and 'commands' for the latter.");
    println!("Type 'back' to go back.");

    loop {
        let input = get_user_input(">>")?.to_lowercase();

        match input.as_str() {
            "mastermind" => explain_game()?,
            "commands" => {
                println!("On the main menu, commands are 'help', 'quit', and 'play'.");
                println!("In the game, commands are 'colors' and 'memory'.");
                println!(
                    "Under the 'help' command, the 'mastermind' and 'commands' commands are available."
                );
                println!();
            }
            "back" => {
                println!("Going back to the main menu...");
                println!("You are now back on the main menu.");
                println!();
                return Ok(());
            }
            _ => println!("That input was invalid. Please try again."),
        }
    }
}

/// The paginated walkthrough of the game's rules
fn explain_game() -> Result<(), String> {
    println!("The game of Mastermind works as follows.");
    println!("The goal of the game is for the player to determine a code.");
    println!("This code is randomized by the game at its beginning.");
    println!("In each round, the player guesses a code of a certain length.");
    println!("The player does so by putting in a letter representing a color in the code,");
    println!("supplying a space after that letter, and then another letter up until the last one.");
    get_user_input("Press enter to continue. (1/5)")?;

    println!("Then, based on this input, the program determines two facts about the code.");
    println!("First, it determines how many colors are present and in the right place.");
    println!("Second, it determines how many colors are present but not in the right place.");
    println!("It informs the user of how well his or her code does based on these criteria.");
    get_user_input("Press enter to continue. (2/5)")?;

    println!("Then, the user can guess again. Depending on the user's initial inputs,");
    println!("the user will have a set number of tries to get the code right.");
    println!("The user will be able to see past results and inputs along the way.");
    println!("If the user fails to get the code correct within a limited number of tries,");
    println!("he or she loses. If the user gets the code exactly right, he or she wins.");
    get_user_input("Press enter to continue. (3/5)")?;

    println!("The colors and their representations in this game are as follows.");
    println!("Red is R. Blue is B. Yellow is Y. Green is G. Orange is O. Violet is V.");
    println!("White is W. Black is K. Grey is E. Indigo is I. Pink is P. Brown is N.");
    println!("The default setting for the game is ten rounds with six colors and four code slots.");
    println!("The colors being used can be checked by typing 'colors' during the game.");
    get_user_input("Press enter to continue. (4/5)")?;

    println!("Upon starting the game, you will be prompted to give three inputs.");
    println!("First, you will be asked about the number of rounds you have to guess the correct input.");
    println!("The minimum for this is one. Second, you will be asked about the number of code entries.");
    println!("The minimum for this is also one. Third, you will be asked about the number of colors.");
    println!("The minimum for this is the number of code entries. The maximum is twelve.");
    get_user_input("Press enter to continue. (5/5)")?;
    println!();

    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_parsing_accepts_plain_digits() {
        assert_eq!(parse_count("10"), Some(10));
        assert_eq!(parse_count(" 4 "), Some(4));
        assert_eq!(parse_count("0"), Some(0));
    }

    #[test]
    fn count_parsing_rejects_non_digits() {
        assert_eq!(parse_count(""), None);
        assert_eq!(parse_count("ten"), None);
        assert_eq!(parse_count("-3"), None);
        assert_eq!(parse_count("4.5"), None);
        assert_eq!(parse_count("1 0"), None);
    }
}
