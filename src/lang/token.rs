#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Whitespace(usize),
    Literal(String),
    Ident(String),
    Operator(Operator),
    LParen,
    RParen,
}

impl Token {
    pub fn from_char(ch: char) -> Option<Token> {
        use Operator::*;
        match ch {
            '(' => Some(Token::LParen),
            ')' => Some(Token::RParen),
            '+' => Some(Token::Operator(Plus)),
            '-' => Some(Token::Operator(Minus)),
            '*' => Some(Token::Operator(Multiply)),
            '/' => Some(Token::Operator(Divide)),
            '=' => Some(Token::Operator(Equal)),
            '<' => Some(Token::Operator(Less)),
            '>' => Some(Token::Operator(Greater)),
            _ => None,
        }
    }

    pub fn width(&self) -> usize {
        self.to_string().chars().count()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Whitespace(u) => write!(f, "{s:>w$}", s = "", w = u),
            Literal(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Equal,
    Less,
    Greater,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Equal => write!(f, "="),
            Less => write!(f, "<"),
            Greater => write!(f, ">"),
        }
    }
}

/// Statement keywords, in the order a line is classified against them.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    Rem,
    Let,
    Print,
    Input,
    End,
    Goto,
    If,
    Then,
}

impl Word {
    pub const STATEMENTS: [Word; 7] = [
        Word::Rem,
        Word::Let,
        Word::Print,
        Word::Input,
        Word::End,
        Word::Goto,
        Word::If,
    ];

    pub fn as_str(&self) -> &'static str {
        use Word::*;
        match self {
            Rem => "REM",
            Let => "LET",
            Print => "PRINT",
            Input => "INPUT",
            End => "END",
            Goto => "GOTO",
            If => "IF",
            Then => "THEN",
        }
    }

    /// Byte offset just past the first occurrence of the word.
    pub fn find_end(&self, s: &str) -> Option<usize> {
        s.find(self.as_str()).map(|i| i + self.as_str().len())
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
