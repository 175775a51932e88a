use std::collections::VecDeque;
use std::io;

/// ## Terminal access for `PRINT`, `INPUT` and command output

pub trait Console {
    /// Write `s` followed by a newline.
    fn print_line(&mut self, s: &str) -> io::Result<()>;
    /// Prompt and read one line. `None` means there is no more input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// A console with scripted input that records everything written to it.
/// Prompts and consumed input are echoed into the output the way a
/// terminal would show them.
#[derive(Debug, Default)]
pub struct Transcript {
    input: VecDeque<String>,
    output: String,
}

impl Transcript {
    pub fn new() -> Transcript {
        Transcript::default()
    }

    pub fn push_input(&mut self, s: &str) {
        self.input.push_back(s.to_string());
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}

impl Console for Transcript {
    fn print_line(&mut self, s: &str) -> io::Result<()> {
        self.output.push_str(s);
        self.output.push('\n');
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.output.push_str(prompt);
        let line = self.input.pop_front();
        if let Some(s) = &line {
            self.output.push_str(s);
        }
        self.output.push('\n');
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_echo() {
        let mut t = Transcript::new();
        t.push_input("42");
        assert_eq!(t.read_line(" ? ").unwrap(), Some("42".to_string()));
        t.print_line("42").unwrap();
        assert_eq!(t.read_line(" ? ").unwrap(), None);
        assert_eq!(t.take_output(), " ? 42\n42\n ? \n");
        assert_eq!(t.output(), "");
    }
}
