use super::{Console, Listing, Var};
use crate::error;
use crate::lang::{ast::Ident, ast::Statement, Error, LineNumber};
use tracing::trace;

type Result<T> = std::result::Result<T, Error>;

/// ## Evaluation memory
///
/// Variables plus the line cursor. The cursor is a line number, not a
/// reference into the listing, and is resolved against the listing on
/// every step. `None` is the terminal state.

#[derive(Debug, Default)]
pub struct State {
    vars: Var,
    cursor: Option<LineNumber>,
}

impl State {
    pub fn new() -> State {
        State::default()
    }

    pub fn value(&self, var_name: &str) -> Result<i32> {
        self.vars.fetch(var_name)
    }

    pub fn cursor(&self) -> Option<LineNumber> {
        self.cursor
    }

    pub(super) fn restore_cursor(&mut self, cursor: Option<LineNumber>) {
        self.cursor = cursor;
    }
}

/// ## Control flow engine
///
/// `State` bound to the listing it steps through and the console it talks
/// to. Every statement finishes by calling exactly one of `advance`,
/// `jump_to` or `halt`.

pub struct EvalState<'a> {
    listing: &'a Listing,
    state: &'a mut State,
    console: &'a mut dyn Console,
}

impl<'a> EvalState<'a> {
    pub fn new(listing: &'a Listing, state: &'a mut State, console: &'a mut dyn Console) -> Self {
        EvalState {
            listing,
            state,
            console,
        }
    }

    pub fn set_value(&mut self, var_name: &Ident, value: i32) {
        self.state.vars.store(var_name, value)
    }

    pub fn value(&self, var_name: &str) -> Result<i32> {
        self.state.vars.fetch(var_name)
    }

    pub fn is_defined(&self, var_name: &str) -> bool {
        self.state.vars.is_defined(var_name)
    }

    pub fn first_line_number(&self) -> Option<LineNumber> {
        self.listing.first_line_number()
    }

    pub fn next_line_number(&self) -> Option<LineNumber> {
        self.listing.next_line_number(self.state.cursor?)
    }

    pub fn current_line_number(&self) -> Option<LineNumber> {
        self.state.cursor
    }

    /// The line under the cursor and its statement.
    pub fn current(&self) -> Option<(LineNumber, &'a Statement)> {
        let listing: &'a Listing = self.listing;
        let number = self.state.cursor?;
        listing.get(number).map(|statement| (number, statement))
    }

    pub fn start(&mut self) {
        self.state.cursor = self.first_line_number();
    }

    pub fn advance(&mut self) {
        self.state.cursor = self.next_line_number();
    }

    pub fn jump_to(&mut self, number: LineNumber) -> Result<()> {
        if !self.listing.contains(number) {
            return Err(error!(LineNumberError));
        }
        trace!(from = ?self.state.cursor, to = number, "jump");
        self.state.cursor = Some(number);
        Ok(())
    }

    pub fn halt(&mut self) {
        self.state.cursor = None;
    }

    pub fn is_finished(&self) -> bool {
        self.state.cursor.is_none()
    }

    pub fn print(&mut self, value: i32) -> Result<()> {
        self.console.print_line(&value.to_string())?;
        Ok(())
    }

    /// Prompt until the console yields a valid integer.
    pub fn read_integer(&mut self) -> Result<i32> {
        loop {
            let line = match self.console.read_line(" ? ")? {
                Some(line) => line,
                None => return Err(error!(InputPastEnd)),
            };
            match line.trim().parse::<i32>() {
                Ok(value) => return Ok(value),
                Err(_) => self.console.print_line("?REDO FROM START")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;
    use crate::mach::Transcript;

    fn listing(lines: &[(LineNumber, &str)]) -> Listing {
        let mut listing = Listing::default();
        for (number, text) in lines {
            listing.insert(*number, Statement::new(text).unwrap());
        }
        listing
    }

    #[test]
    fn test_stepping() {
        let listing = listing(&[(10, "REM"), (20, "REM"), (30, "END")]);
        let mut state = State::new();
        let mut console = Transcript::new();
        let mut eval = EvalState::new(&listing, &mut state, &mut console);
        assert!(eval.is_finished());
        eval.start();
        assert_eq!(eval.current_line_number(), Some(10));
        assert_eq!(eval.next_line_number(), Some(20));
        eval.advance();
        eval.advance();
        assert_eq!(eval.current().map(|(n, s)| (n, s.text())), Some((30, "END")));
        assert_eq!(eval.next_line_number(), None);
        eval.advance();
        assert!(eval.is_finished());
        eval.advance();
        assert!(eval.is_finished());
    }

    #[test]
    fn test_jump_and_halt() {
        let listing = listing(&[(10, "REM"), (20, "REM")]);
        let mut state = State::new();
        let mut console = Transcript::new();
        let mut eval = EvalState::new(&listing, &mut state, &mut console);
        eval.start();
        eval.jump_to(20).unwrap();
        assert_eq!(eval.current_line_number(), Some(20));
        let e = eval.jump_to(999).unwrap_err();
        assert_eq!(e.code(), ErrorCode::LineNumberError);
        assert_eq!(eval.current_line_number(), Some(20));
        eval.halt();
        assert!(eval.is_finished());
        assert_eq!(eval.first_line_number(), Some(10));
    }

    #[test]
    fn test_empty_listing() {
        let listing = Listing::default();
        let mut state = State::new();
        let mut console = Transcript::new();
        let mut eval = EvalState::new(&listing, &mut state, &mut console);
        eval.start();
        assert!(eval.is_finished());
        assert_eq!(eval.first_line_number(), None);
    }

    #[test]
    fn test_read_integer_retries() {
        let listing = Listing::default();
        let mut state = State::new();
        let mut console = Transcript::new();
        console.push_input("abc");
        console.push_input(" -12 ");
        let mut eval = EvalState::new(&listing, &mut state, &mut console);
        assert_eq!(eval.read_integer().unwrap(), -12);
        assert_eq!(
            eval.read_integer().unwrap_err().code(),
            ErrorCode::InputPastEnd
        );
        assert_eq!(console.output(), " ? abc\n?REDO FROM START\n ?  -12 \n ? \n");
    }

    #[test]
    fn test_variables() {
        let listing = Listing::default();
        let mut state = State::new();
        let mut console = Transcript::new();
        let mut eval = EvalState::new(&listing, &mut state, &mut console);
        assert!(!eval.is_defined("X"));
        eval.set_value(&"X".into(), 7);
        assert_eq!(eval.value("X").unwrap(), 7);
        assert_eq!(state.value("X").unwrap(), 7);
    }
}
