use super::{Console, Program};
use crate::lang::{Error, Line};

type Result<T> = std::result::Result<T, Error>;

const HELP: &str = "\
RUN          run the program from its first line
LIST         show the program
CLEAR        delete the program and all variables
QUIT         leave BASIC
<n> <stmt>   store a statement at line <n>
<n>          delete line <n>
<stmt>       run LET, PRINT or INPUT immediately";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Event {
    Ready,
    Quit,
}

/// ## Command processor
///
/// Feeds typed lines to a `Program`: commands, numbered program lines,
/// and direct statements.

#[derive(Debug, Default)]
pub struct Runtime {
    program: Program,
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn enter(&mut self, s: &str, console: &mut dyn Console) -> Result<Event> {
        match s.trim() {
            "" => {}
            "RUN" => self.program.run(console)?,
            "LIST" => {
                for (number, text) in self.program.list() {
                    console.print_line(&format!("{} {}", number, text))?;
                }
            }
            "CLEAR" => self.program.clear(),
            "HELP" => {
                for line in HELP.lines() {
                    console.print_line(line)?;
                }
            }
            "QUIT" => return Ok(Event::Quit),
            _ => {
                let line = Line::new(s)?;
                match line.number() {
                    None => self.program.run_direct(line.text(), console)?,
                    Some(number) if line.is_empty() => self.program.remove_line(number),
                    Some(number) => self.program.insert_line(number, line.text())?,
                }
            }
        }
        Ok(Event::Ready)
    }
}
