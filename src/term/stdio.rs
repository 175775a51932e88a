use super::enter;
use basic::mach::{Console, Event, Runtime};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use tracing::debug;

/// Console over a buffered reader and stdout. Prompts are written but
/// input is not echoed.
struct Plain<R> {
    input: R,
    output: io::Stdout,
}

impl<R: BufRead> Console for Plain<R> {
    fn print_line(&mut self, s: &str) -> io::Result<()> {
        writeln!(self.output, "{}", s)
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        next_line(&mut self.input)
    }
}

fn next_line(reader: &mut dyn BufRead) -> io::Result<Option<String>> {
    let mut s = String::new();
    if reader.read_line(&mut s)? == 0 {
        return Ok(None);
    }
    let len = s.trim_end_matches(|c| c == '\n' || c == '\r').len();
    s.truncate(len);
    Ok(Some(s))
}

/// Commands come from `script` when given, otherwise from stdin.
/// `INPUT` always reads stdin.
pub fn main_loop(script: Option<&Path>) -> io::Result<()> {
    let mut script = match script {
        Some(path) => {
            debug!(path = %path.display(), "script");
            Some(BufReader::new(File::open(path)?))
        }
        None => None,
    };
    let stdin = io::stdin();
    let mut console = Plain {
        input: stdin.lock(),
        output: io::stdout(),
    };
    let mut runtime = Runtime::new();
    loop {
        let line = match &mut script {
            Some(reader) => next_line(reader)?,
            None => next_line(&mut console.input)?,
        };
        let line = match line {
            Some(line) => line,
            None => break,
        };
        if enter(&mut runtime, &line, &mut console, |e| format!("?{}", e))? == Event::Quit {
            break;
        }
    }
    Ok(())
}

