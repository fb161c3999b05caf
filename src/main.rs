use driver::{terminal::TerminalDriver, Driver};
use game::{CategorySelection, Difficulty, FieldType, Game};
use log::error;
use strum::IntoEnumIterator;

mod driver;
mod game;

const USAGE: &str =
    "usage: presidents-quiz [--difficulty easy|medium|hard|expert] [--hide president,term,party]";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::try_init().unwrap_or(());

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{}", USAGE);
        return Ok(());
    }

    let mut game = Game::new();
    if let Err(message) = apply_args(&mut game, args.into_iter()) {
        eprintln!("{}", message);
        eprintln!("{}", USAGE);
        return Err(message.into());
    }

    let mut driver = TerminalDriver::new(game)?;
    if let Err(e) = driver.run() {
        error!("An error occurred: {:?}", e);
        return Err(e.into());
    }

    Ok(())
}

/// Apply command line settings to the game before it starts.
fn apply_args(game: &mut Game, mut args: impl Iterator<Item = String>) -> Result<(), String> {
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--difficulty" => {
                let level = args.next().ok_or("--difficulty needs a value")?;
                let difficulty: Difficulty = serde_plain::from_str(&level)
                    .map_err(|_| format!("unknown difficulty {:?}", level))?;
                game.set_difficulty(difficulty);
            }
            "--hide" => {
                let list = args.next().ok_or("--hide needs a value")?;
                let mut desired = CategorySelection {
                    president: false,
                    term: false,
                    party: false,
                };
                for name in list.split(',').filter(|n| !n.trim().is_empty()) {
                    let field_type: FieldType = serde_plain::from_str(name.trim())
                        .map_err(|_| format!("unknown category {:?}", name))?;
                    if !desired.includes(field_type) {
                        desired.toggle(field_type);
                    }
                }
                for field_type in FieldType::iter() {
                    if game.categories().includes(field_type) != desired.includes(field_type) {
                        game.toggle_category(field_type);
                    }
                }
            }
            _ => return Err(format!("unknown argument {:?}", arg)),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{apply_args, Difficulty, Game};

    fn args(raw: &[&str]) -> impl Iterator<Item = String> {
        raw.iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn difficulty_and_categories_from_args() {
        let mut game = Game::new();
        apply_args(
            &mut game,
            args(&["--difficulty", "expert", "--hide", "president,party"]),
        )
        .unwrap();

        assert_eq!(game.difficulty(), Difficulty::Expert);
        assert!(game.categories().president);
        assert!(!game.categories().term);
        assert!(game.categories().party);
    }

    #[test]
    fn bad_args_are_rejected() {
        let mut game = Game::new();
        assert!(apply_args(&mut game, args(&["--difficulty", "impossible"])).is_err());
        assert!(apply_args(&mut game, args(&["--hide", "year"])).is_err());
        assert!(apply_args(&mut game, args(&["--bogus"])).is_err());
        assert!(apply_args(&mut game, args(&["--difficulty"])).is_err());
    }
}
