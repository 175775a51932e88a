use super::token::*;

pub fn lex(s: &str) -> Vec<Token> {
    BasicLexer {
        chars: s.chars().peekable(),
    }
    .collect()
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;

    fn whitespace(&mut self) -> Option<Token> {
        let mut len = 0;
        loop {
            self.chars().next();
            len += 1;
            if let Some(pk) = self.chars().peek() {
                if is_basic_whitespace(*pk) {
                    continue;
                }
            }
            return Some(Token::Whitespace(len));
        }
    }

    fn number(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(pk) = self.chars().peek() {
            if !is_basic_digit(*pk) {
                break;
            }
            s.push(*pk);
            self.chars().next();
        }
        Some(Token::Literal(s))
    }

    fn alphabetic(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(pk) = self.chars().peek() {
            if !(is_basic_alphabetic(*pk) || is_basic_digit(*pk) || *pk == '_') {
                break;
            }
            s.push(*pk);
            self.chars().next();
        }
        Some(Token::Ident(s))
    }

    fn minutia(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(ch) = self.chars().next() {
            if s.is_empty() {
                if let Some(t) = Token::from_char(ch) {
                    return Some(t);
                }
            }
            s.push(ch);
            match self.chars().peek() {
                Some(pk)
                    if !is_basic_alphabetic(*pk)
                        && !is_basic_digit(*pk)
                        && !is_basic_whitespace(*pk)
                        && Token::from_char(*pk).is_none() =>
                {
                    continue
                }
                _ => break,
            }
        }
        Some(Token::Unknown(s))
    }
}

struct BasicLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Tokenizers<'a> for BasicLexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }
}

impl<'a> Iterator for BasicLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let pk = *self.chars.peek()?;
        if is_basic_whitespace(pk) {
            return self.whitespace();
        }
        if is_basic_digit(pk) {
            return self.number();
        }
        if is_basic_alphabetic(pk) {
            return self.alphabetic();
        }
        self.minutia()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment() {
        assert_eq!(
            lex("X = X+1"),
            vec![
                Token::Ident("X".into()),
                Token::Whitespace(1),
                Token::Operator(Operator::Equal),
                Token::Whitespace(1),
                Token::Ident("X".into()),
                Token::Operator(Operator::Plus),
                Token::Literal("1".into()),
            ]
        );
    }

    #[test]
    fn test_ident_with_digits() {
        assert_eq!(
            lex("n2_total*(3)"),
            vec![
                Token::Ident("n2_total".into()),
                Token::Operator(Operator::Multiply),
                Token::LParen,
                Token::Literal("3".into()),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn test_unknown_runs_together() {
        assert_eq!(
            lex("1 #$ 2"),
            vec![
                Token::Literal("1".into()),
                Token::Whitespace(1),
                Token::Unknown("#$".into()),
                Token::Whitespace(1),
                Token::Literal("2".into()),
            ]
        );
    }

    #[test]
    fn test_columns_add_up() {
        let s = "A1 =\t(B - 22) / 7";
        let width: usize = lex(s).iter().map(|t| t.width()).sum();
        assert_eq!(width, s.chars().count());
    }
}
