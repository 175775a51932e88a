use super::{Error, LineNumber};

/// A raw line of input split into its optional line number and content.
#[derive(Debug, PartialEq)]
pub struct Line {
    number: Option<LineNumber>,
    text: String,
}

impl Line {
    pub fn new(s: &str) -> Result<Line, Error> {
        let s = s.trim_end_matches(|c| c == '\n' || c == '\r').trim();
        let digits = s.chars().take_while(|c| c.is_ascii_digit()).count();
        if digits == 0 {
            return Ok(Line {
                number: None,
                text: s.to_string(),
            });
        }
        let number = match s[..digits].parse::<LineNumber>() {
            Ok(0) | Err(_) => return Err(error!(SyntaxError; "INVALID LINE NUMBER")),
            Ok(n) => n,
        };
        Ok(Line {
            number: Some(number),
            text: s[digits..].trim().to_string(),
        })
    }

    pub fn number(&self) -> Option<LineNumber> {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_direct(&self) -> bool {
        self.number.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.number {
            Some(number) => write!(f, "{} {}", number, self.text),
            None => write!(f, "{}", self.text),
        }
    }
}
