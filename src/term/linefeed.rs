use super::enter;
use ansi_term::Style;
use basic::lang::LineNumber;
use basic::mach::{Console, Event, Runtime};
use linefeed::{Completer, Completion, DefaultTerminal, Interface, Prompter, ReadResult, Terminal};
use std::collections::BTreeMap;
use std::io;
use std::sync::Arc;

struct LineConsole {
    input: Interface<DefaultTerminal>,
}

impl Console for LineConsole {
    fn print_line(&mut self, s: &str) -> io::Result<()> {
        self.input.write_fmt(format_args!("{}\n", s))
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.input.set_prompt(prompt)?;
        match self.input.read_line()? {
            ReadResult::Input(string) => {
                self.input.add_history_unique(string.clone());
                Ok(Some(string))
            }
            ReadResult::Signal(_) | ReadResult::Eof => Ok(None),
        }
    }
}

pub fn main_loop() -> io::Result<()> {
    let mut runtime = Runtime::new();
    let command = Interface::new("BASIC")?;
    command.set_prompt("] ")?;
    let mut console = LineConsole {
        input: Interface::new("INPUT")?,
    };
    command.write_fmt(format_args!("BASIC\nREADY.\n"))?;

    loop {
        let saved_completer = command.completer();
        command.set_completer(Arc::new(LineCompleter::new(&runtime)));
        let string = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        command.set_completer(saved_completer);
        if !string.trim().is_empty() {
            command.add_history_unique(string.clone());
        }
        let bold = |e: &basic::lang::Error| {
            Style::new().bold().paint(format!("?{}", e)).to_string()
        };
        if enter(&mut runtime, &string, &mut console, bold)? == Event::Quit {
            break;
        }
    }
    Ok(())
}

/// TAB on a bare line number brings back that line for editing.
struct LineCompleter {
    lines: BTreeMap<LineNumber, String>,
}

impl LineCompleter {
    fn new(runtime: &Runtime) -> LineCompleter {
        let lines = runtime
            .program()
            .list()
            .map(|(number, text)| (number, format!("{} {}", number, text)))
            .collect();
        LineCompleter { lines }
    }
}

impl<Term: Terminal> Completer<Term> for LineCompleter {
    fn complete(
        &self,
        _word: &str,
        prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        let number = prompter.buffer().trim().parse::<LineNumber>().ok()?;
        let line = self.lines.get(&number)?;
        let mut comp = Completion::simple(line.clone());
        comp.suffix = linefeed::complete::Suffix::None;
        Some(vec![comp])
    }
}
