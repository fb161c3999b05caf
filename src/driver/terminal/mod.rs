use log::info;
use std::io::{self, BufRead, Write};
use strum::IntoEnumIterator;
use unicode_segmentation::UnicodeSegmentation;

use super::{Driver, DriverError};
use crate::game::{helpers::format_elapsed, Difficulty, FieldType, Game, Phase};

/// A driver that plays the quiz over stdin/stdout.
pub struct TerminalDriver {
    /// The game itself.
    game: Game,
}

/// One line of player input, parsed.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    /// Start a new game. Also the play-again path after completion.
    Start,
    /// Abandon the session and return to idle.
    Reset,
    /// Redraw the table.
    Table,
    /// Change the difficulty, e.g. "difficulty hard".
    Difficulty(Difficulty),
    /// Toggle a category, e.g. "toggle president".
    Toggle(FieldType),
    /// Answer a hidden field, e.g. "3 Abraham Lincoln".
    Answer(usize, String),
    /// Print the command list.
    Help,
    /// Leave.
    Quit,
}

/// Parse a line of player input. Returns None for anything unrecognized.
fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    match line {
        "" => return None,
        "start" => return Some(Command::Start),
        "reset" => return Some(Command::Reset),
        "table" => return Some(Command::Table),
        "help" => return Some(Command::Help),
        "quit" | "exit" => return Some(Command::Quit),
        _ => {}
    }

    match line.split_once(char::is_whitespace) {
        Some(("difficulty", level)) => serde_plain::from_str(level.trim())
            .ok()
            .map(Command::Difficulty),
        Some(("toggle", category)) => serde_plain::from_str(category.trim())
            .ok()
            .map(Command::Toggle),
        Some((handle, answer)) => handle
            .parse::<usize>()
            .ok()
            .map(|handle| Command::Answer(handle, answer.trim().to_string())),
        // A bare handle clears the field's answer
        None => line
            .parse::<usize>()
            .ok()
            .map(|handle| Command::Answer(handle, String::new())),
    }
}

/// Width of a string as rendered, in grapheme clusters.
fn display_width(text: &str) -> usize {
    text.graphemes(true).count()
}

fn pad(text: &str, width: usize) -> String {
    format!("{}{}", text, " ".repeat(width.saturating_sub(display_width(text))))
}

fn print_help() {
    println!("Commands:");
    println!("  <n> <answer>        fill hidden field [n], e.g. \"3 Abraham Lincoln\"");
    println!("  start               start a new game (discards the current one)");
    println!("  reset               abandon the game and return to the settings");
    println!("  table               redraw the table");
    println!("  difficulty <level>  easy, medium, hard or expert (between games)");
    println!("  toggle <category>   president, term or party (between games)");
    println!("  quit                leave");
}

impl TerminalDriver {
    /// What the table shows for the given cell: the record's value, a
    /// numbered blank sized to the hidden value's width, or the player's
    /// accepted answer.
    fn cell_text(&self, record_index: usize, field_type: FieldType) -> String {
        let visible = self.game.records()[record_index].field(field_type);
        match self.game.hidden_field_at(record_index, field_type) {
            None => visible.to_string(),
            Some(handle) => {
                let field = &self.game.hidden_fields()[handle];
                if field.is_correct {
                    format!("{} *", field.user_value.trim())
                } else {
                    format!(
                        "[{}] {}",
                        handle,
                        "_".repeat(display_width(&field.original_value))
                    )
                }
            }
        }
    }

    fn print_table(&self) {
        let headers = ["President", "Term", "Party"];
        let mut rows = Vec::new();
        for record_index in 0..self.game.records().len() {
            rows.push([
                self.cell_text(record_index, FieldType::President),
                self.cell_text(record_index, FieldType::Term),
                self.cell_text(record_index, FieldType::Party),
            ]);
        }

        let mut widths = [headers[0].len(), headers[1].len(), headers[2].len()];
        for row in &rows {
            for (column, cell) in row.iter().enumerate() {
                widths[column] = widths[column].max(display_width(cell));
            }
        }

        println!();
        println!(
            "{}  {}  {}",
            pad(headers[0], widths[0]),
            pad(headers[1], widths[1]),
            pad(headers[2], widths[2])
        );
        println!("{}", "-".repeat(widths[0] + widths[1] + widths[2] + 4));
        for row in &rows {
            println!(
                "{}  {}  {}",
                pad(&row[0], widths[0]),
                pad(&row[1], widths[1]),
                pad(&row[2], widths[2])
            );
        }
        self.print_status();
    }

    fn print_status(&self) {
        if self.game.phase() != Phase::Active {
            return;
        }
        println!();
        println!(
            "Time {} | {} to go | difficulty {}",
            format_elapsed(self.game.elapsed_seconds()),
            self.game.remaining(),
            format!("{:?}", self.game.difficulty()).to_lowercase()
        );
        if let Some(next) = self.game.hidden_fields().iter().position(|f| !f.is_correct) {
            println!("Next up: [{}]", next);
        }
    }

    fn print_settings(&self) {
        let categories = self.game.categories();
        let enabled: Vec<String> = FieldType::iter()
            .filter(|field_type| categories.includes(*field_type))
            .map(|field_type| format!("{:?}", field_type).to_lowercase())
            .collect();
        let hiding = if enabled.is_empty() {
            "nothing".to_string()
        } else {
            enabled.join(", ")
        };
        println!(
            "Difficulty {} | hiding: {}",
            format!("{:?}", self.game.difficulty()).to_lowercase(),
            hiding
        );
    }

    fn answer(&mut self, handle: usize, text: &str) {
        if self.game.phase() != Phase::Active {
            println!("No game is running. Type start to begin.");
            return;
        }
        if handle >= self.game.hidden_fields().len() {
            println!("There is no field [{}] on the board.", handle);
            return;
        }

        self.game.check_answer(handle, text);
        if self.game.hidden_fields()[handle].is_correct {
            println!("Correct!");
        } else {
            println!("Not quite, try again.");
        }

        if self.game.phase() == Phase::Complete {
            info!(
                "Game complete in {} seconds",
                self.game.elapsed_seconds()
            );
            self.print_table();
            println!();
            println!(
                "Game complete! Finished in {}.",
                format_elapsed(self.game.elapsed_seconds())
            );
            println!("Type start to play again, or quit to leave.");
        } else {
            self.print_status();
        }
    }
}

impl Driver for TerminalDriver {
    fn new(game: Game) -> Result<Self, DriverError> {
        Ok(TerminalDriver { game })
    }

    fn run(&mut self) -> Result<(), DriverError> {
        println!("Learn the presidents: fill every masked cell to win.");
        self.print_settings();
        println!("Type help for the command list.");

        self.game.start_game()?;
        info!(
            "Started game with {} hidden fields",
            self.game.hidden_fields().len()
        );
        self.print_table();

        let stdin = io::stdin();
        let mut input = String::new();
        loop {
            print!("> ");
            io::stdout().flush()?;
            input.clear();
            if stdin.lock().read_line(&mut input)? == 0 {
                break;
            }

            let command = match parse_command(&input) {
                Some(command) => command,
                None => {
                    println!("Unrecognized command. Type help for the command list.");
                    continue;
                }
            };

            match command {
                Command::Quit => break,
                Command::Help => print_help(),
                Command::Table => self.print_table(),
                Command::Start => match self.game.start_game() {
                    Ok(()) => self.print_table(),
                    Err(e) => println!("{}", e),
                },
                Command::Reset => {
                    self.game.reset_game();
                    println!("Game reset.");
                    self.print_settings();
                }
                Command::Difficulty(difficulty) => {
                    if self.game.phase() != Phase::Idle {
                        println!("Settings can only change between games (reset first).");
                    } else {
                        self.game.set_difficulty(difficulty);
                        self.print_settings();
                    }
                }
                Command::Toggle(field_type) => {
                    if self.game.phase() != Phase::Idle {
                        println!("Settings can only change between games (reset first).");
                    } else {
                        self.game.toggle_category(field_type);
                        self.print_settings();
                    }
                }
                Command::Answer(handle, text) => self.answer(handle, &text),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_command, Command, Difficulty, Driver, FieldType, TerminalDriver};
    use crate::game::{data::President, Game};

    #[test]
    fn command_parsing() {
        assert_eq!(parse_command("start"), Some(Command::Start));
        assert_eq!(parse_command("  reset "), Some(Command::Reset));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
        assert_eq!(parse_command("exit"), Some(Command::Quit));
        assert_eq!(
            parse_command("difficulty hard"),
            Some(Command::Difficulty(Difficulty::Hard))
        );
        assert_eq!(
            parse_command("toggle president"),
            Some(Command::Toggle(FieldType::President))
        );
        assert_eq!(
            parse_command("3 Abraham Lincoln"),
            Some(Command::Answer(3, "Abraham Lincoln".to_string()))
        );
        assert_eq!(parse_command("7"), Some(Command::Answer(7, String::new())));

        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("difficulty impossible"), None);
        assert_eq!(parse_command("toggle year"), None);
        assert_eq!(parse_command("lincoln was here"), None);
    }

    /// A one-record game with only the term eligible, so exactly the term
    /// cell ends up masked.
    fn driver_with_masked_term() -> TerminalDriver {
        let mut game = Game::with_records(vec![President {
            name: "Abraham Lincoln".to_string(),
            term: "1861-1865".to_string(),
            party: "Republican".to_string(),
        }]);
        game.toggle_category(FieldType::Party);
        game.start_game().unwrap();
        TerminalDriver::new(game).unwrap()
    }

    #[test]
    fn masked_cells_render_as_numbered_blanks() {
        let driver = driver_with_masked_term();

        assert_eq!(
            driver.cell_text(0, FieldType::President),
            "Abraham Lincoln"
        );
        assert_eq!(driver.cell_text(0, FieldType::Party), "Republican");
        // Blank sized to the hidden value ("1861-1865", 9 wide)
        assert_eq!(driver.cell_text(0, FieldType::Term), "[0] _________");
    }

    #[test]
    fn solved_cells_render_the_typed_answer() {
        let mut driver = driver_with_masked_term();
        driver.game.check_answer(0, "  1861-1865 ");

        assert!(driver.game.hidden_fields()[0].is_correct);
        assert_eq!(driver.cell_text(0, FieldType::Term), "1861-1865 *");
    }
}
