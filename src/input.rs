//! Console input for the player's menu choice.

use std::io::{BufRead, Write};

use combat::Dice;
use error::GameError;

use crate::policy::{ActionPolicy, BattleView, PlayerAction};

/// Hidden menu code that triggers [`PlayerAction::Summon`]
pub const DEFAULT_SECRET_CODE: i64 = 131313;

/// Map one line of console input to a menu action.
///
/// Accepts `1`, `2`, `3` and the secret code, with surrounding whitespace;
/// anything else is `None`.
pub fn parse_choice(line: &str, secret_code: i64) -> Option<PlayerAction> {
    let choice: i64 = line.trim().parse().ok()?;
    match choice {
        1 => Some(PlayerAction::Attack),
        2 => Some(PlayerAction::Defend),
        3 => Some(PlayerAction::DrinkPotion),
        code if code == secret_code => Some(PlayerAction::Summon),
        _ => None,
    }
}

/// Interactive player policy reading one line per attempt.
///
/// Invalid input prints an error and asks again; the rest of the bad line is
/// discarded. Only end of input ends the loop, as [`GameError::InputClosed`].
pub struct ConsolePolicy<R: BufRead, W: Write> {
    input: R,
    output: W,
    secret_code: i64,
}

impl<R: BufRead, W: Write> ConsolePolicy<R, W> {
    pub fn new(input: R, output: W, secret_code: i64) -> Self {
        Self {
            input,
            output,
            secret_code,
        }
    }

    fn print_menu(&mut self) -> Result<(), GameError> {
        writeln!(self.output)?;
        writeln!(self.output, "Choose an action:")?;
        writeln!(self.output, "1. Attack")?;
        writeln!(self.output, "2. Defend")?;
        writeln!(self.output, "3. Drink a potion")?;
        write!(self.output, "> ")?;
        self.output.flush()?;
        Ok(())
    }

    /// Block until a valid choice is read
    pub fn read_choice(&mut self) -> Result<PlayerAction, GameError> {
        self.print_menu()?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(GameError::InputClosed);
            }

            if let Some(action) = parse_choice(&line, self.secret_code) {
                return Ok(action);
            }

            tracing::debug!(input = line.trim(), "rejected menu input");
            write!(self.output, "Invalid input. Try again: ")?;
            self.output.flush()?;
        }
    }
}

impl<R: BufRead, W: Write> ActionPolicy for ConsolePolicy<R, W> {
    type Action = PlayerAction;

    fn choose_action(&mut self, _view: BattleView<'_>, _dice: &mut dyn Dice) -> Result<PlayerAction, GameError> {
        self.read_choice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn policy(input: &str) -> ConsolePolicy<Cursor<Vec<u8>>, Vec<u8>> {
        ConsolePolicy::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), DEFAULT_SECRET_CODE)
    }

    #[test]
    fn test_parse_menu_choices() {
        assert_eq!(parse_choice("1\n", DEFAULT_SECRET_CODE), Some(PlayerAction::Attack));
        assert_eq!(parse_choice(" 2 ", DEFAULT_SECRET_CODE), Some(PlayerAction::Defend));
        assert_eq!(parse_choice("3", DEFAULT_SECRET_CODE), Some(PlayerAction::DrinkPotion));
        assert_eq!(parse_choice("131313", DEFAULT_SECRET_CODE), Some(PlayerAction::Summon));
    }

    #[test]
    fn test_parse_rejects_out_of_range_and_text() {
        for bad in ["0", "4", "-1", "attack", "", "1 2", "131314"] {
            assert_eq!(parse_choice(bad, DEFAULT_SECRET_CODE), None, "input {:?}", bad);
        }
    }

    #[test]
    fn test_custom_secret_code() {
        assert_eq!(parse_choice("7", 7), Some(PlayerAction::Summon));
        assert_eq!(parse_choice("131313", 7), None);
    }

    #[test]
    fn test_reprompts_until_valid() {
        let mut console = policy("abc\n9\n2\n");
        assert_eq!(console.read_choice().unwrap(), PlayerAction::Defend);

        let written = String::from_utf8(console.output.clone()).unwrap();
        assert_eq!(written.matches("Invalid input").count(), 2);
        assert_eq!(written.matches("Choose an action").count(), 1);
    }

    #[test]
    fn test_end_of_input_is_reported() {
        let mut console = policy("oops\n");
        let err = console.read_choice().unwrap_err();
        assert!(matches!(err, GameError::InputClosed));
    }
}
