use super::{Console, EvalState, Listing, State};
use crate::error;
use crate::lang::{ast::Statement, Error, LineNumber};
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// ## Stored program
///
/// Owns the listing and the evaluation state bound to it.

#[derive(Debug, Default)]
pub struct Program {
    listing: Listing,
    state: State,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn len(&self) -> usize {
        self.listing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listing.is_empty()
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Parse `text` and store it at `number`, replacing any previous line.
    /// On error the listing is unchanged.
    pub fn insert_line(&mut self, number: LineNumber, text: &str) -> Result<()> {
        let statement = Statement::new(text).map_err(|e| e.in_line_number(number))?;
        let replaced = self.listing.insert(number, statement).is_some();
        debug!(line = number, replaced, "insert line");
        Ok(())
    }

    pub fn remove_line(&mut self, number: LineNumber) {
        if self.listing.remove(number).is_some() {
            debug!(line = number, "remove line");
        }
    }

    pub fn line_text(&self, number: LineNumber) -> Result<&str> {
        match self.listing.get(number) {
            Some(statement) => Ok(statement.text()),
            None => Err(error!(LineNotFound, number)),
        }
    }

    pub fn list(&self) -> impl Iterator<Item = (LineNumber, &str)> + '_ {
        self.listing
            .lines()
            .map(|(number, statement)| (*number, statement.text()))
    }

    /// Drop every line and every variable.
    pub fn clear(&mut self) {
        debug!(lines = self.listing.len(), "clear");
        self.listing.clear();
        self.state = State::new();
    }

    /// Execute from the first line until the cursor reaches the terminal
    /// state. There is no step limit.
    pub fn run(&mut self, console: &mut dyn Console) -> Result<()> {
        let mut state = EvalState::new(&self.listing, &mut self.state, console);
        state.start();
        debug!(first = ?state.current_line_number(), "run");
        while let Some((number, statement)) = state.current() {
            trace!(line = number, "execute");
            statement
                .execute(&mut state)
                .map_err(|e| e.in_line_number(number))?;
        }
        debug!("run finished");
        Ok(())
    }

    /// Execute one statement that is not part of the program. Only
    /// `LET`, `PRINT` and `INPUT` are accepted. The cursor is not moved.
    pub fn run_direct(&mut self, text: &str, console: &mut dyn Console) -> Result<()> {
        let statement = Statement::new(text)?;
        if !statement.is_direct_allowed() {
            return Err(error!(IllegalDirect));
        }
        let cursor = self.state.cursor();
        let mut state = EvalState::new(&self.listing, &mut self.state, console);
        let result = statement.execute(&mut state);
        self.state.restore_cursor(cursor);
        result
    }
}
