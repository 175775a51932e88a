use super::{ast::*, lex::lex, token::*, Column, Error, LineNumber};
use std::convert::TryFrom;
use std::ops::Range;

type Result<T> = std::result::Result<T, Error>;

/// Parse a whole expression. `offset` is the character position of `s`
/// within its statement so that columns point into the statement text.
pub fn parse_expression(s: &str, offset: usize) -> Result<Expression> {
    let tokens = lex(s);
    let mut parse = Parser {
        token_stream: tokens.iter(),
        peeked: None,
        col: offset..offset,
    };
    let result = parse.expression().and_then(|expr| match parse.peek() {
        None => Ok(expr),
        Some(_) => {
            parse.next();
            Err(error!(SyntaxError; "UNEXPECTED TOKEN"))
        }
    });
    result.map_err(|e| {
        if e.column() == (0..0) && !parse.col.is_empty() {
            e.in_column(&parse.col)
        } else {
            e
        }
    })
}

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, Token>,
    peeked: Option<&'a Token>,
    col: Column,
}

impl<'a> Parser<'a> {
    fn column(&self) -> Column {
        self.col.clone()
    }

    fn next(&mut self) -> Option<&'a Token> {
        if self.peeked.is_some() {
            return self.peeked.take();
        }
        loop {
            self.col.start = self.col.end;
            let t = self.token_stream.next()?;
            self.col.end += t.width();
            match t {
                Token::Whitespace(_) => continue,
                _ => return Some(t),
            }
        }
    }

    fn peek(&mut self) -> Option<&&'a Token> {
        if self.peeked.is_none() {
            self.peeked = self.next();
        }
        self.peeked.as_ref()
    }

    fn expression(&mut self) -> Result<Expression> {
        fn parse(this: &mut Parser, precedence: usize) -> Result<Expression> {
            let mut lhs = match this.next() {
                Some(Token::LParen) => {
                    let expr = this.expression()?;
                    this.expect(Token::RParen)?;
                    expr
                }
                Some(Token::Operator(Operator::Minus)) => {
                    let column = this.column();
                    let expr = parse(this, Expression::UNARY_PRECEDENCE)?;
                    Expression::Negation(column, Box::new(expr))
                }
                Some(Token::Ident(i)) => Expression::Var(this.column(), i.as_str().into()),
                Some(Token::Literal(l)) => Expression::for_literal(this.column(), l)?,
                _ => return Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
            };
            loop {
                let op = match this.peek() {
                    Some(Token::Operator(op)) => *op,
                    _ => break,
                };
                let op_precedence = match Expression::op_precedence(op) {
                    Some(p) if p >= precedence => p,
                    _ => break,
                };
                this.next();
                let column = this.column();
                let rhs = if op == Operator::Equal {
                    parse(this, op_precedence)?
                } else {
                    parse(this, op_precedence + 1)?
                };
                lhs = Expression::for_binary_op(column, op, lhs, rhs)?;
            }
            Ok(lhs)
        }
        parse(self, 0)
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        if let Some(t) = self.next() {
            if *t == token {
                return Ok(());
            }
        }
        use Token::*;
        Err(error!(SyntaxError;
            match token {
                Unknown(_) | Whitespace(_) => "UNEXPECTED TOKEN",
                Literal(_) => "EXPECTED LITERAL",
                Operator(_) => "EXPECTED OPERATOR",
                Ident(_) => "EXPECTED IDENTIFIER",
                LParen => "EXPECTED LEFT PARENTHESIS",
                RParen => "EXPECTED RIGHT PARENTHESIS",
            }
        ))
    }
}

impl Expression {
    const UNARY_PRECEDENCE: usize = 30;

    fn op_precedence(op: Operator) -> Option<usize> {
        use Operator::*;
        match op {
            Equal => Some(1),
            Plus | Minus => Some(10),
            Multiply | Divide => Some(20),
            Less | Greater => None,
        }
    }

    fn for_binary_op(
        col: Column,
        op: Operator,
        lhs: Expression,
        rhs: Expression,
    ) -> Result<Expression> {
        use Operator::*;
        Ok(match op {
            Plus => Expression::Add(col, Box::new(lhs), Box::new(rhs)),
            Minus => Expression::Subtract(col, Box::new(lhs), Box::new(rhs)),
            Multiply => Expression::Multiply(col, Box::new(lhs), Box::new(rhs)),
            Divide => Expression::Divide(col, Box::new(lhs), Box::new(rhs)),
            Equal => match lhs {
                Expression::Var(_, ident) => Expression::Assign(col, ident, Box::new(rhs)),
                _ => return Err(error!(SyntaxError, ..&col; "EXPECTED VARIABLE")),
            },
            Less | Greater => return Err(error!(SyntaxError, ..&col; "UNEXPECTED COMPARISON")),
        })
    }

    fn for_literal(col: Column, lit: &str) -> Result<Expression> {
        match lit.parse::<i32>() {
            Ok(n) => Ok(Expression::Integer(col, n)),
            Err(_) => Err(error!(SyntaxError, ..&col; "NUMBER TOO LARGE")),
        }
    }
}

/// Trimmed slice of `text` plus its character offset.
fn clause(text: &str, range: Range<usize>) -> (&str, usize) {
    let s = &text[range.clone()];
    let trimmed = s.trim_start();
    let start = range.start + (s.len() - trimmed.len());
    (trimmed.trim_end(), text[..start].chars().count())
}

fn parse_clause(text: &str, range: Range<usize>) -> Result<Expression> {
    let (s, offset) = clause(text, range);
    parse_expression(s, offset)
}

fn line_number(text: &str, range: Range<usize>) -> Result<(Column, LineNumber)> {
    let expr = parse_clause(text, range)?;
    if let (ExpressionKind::Constant, Expression::Integer(col, n)) = (expr.kind(), &expr) {
        if let Ok(number) = LineNumber::try_from(*n) {
            return Ok((col.clone(), number));
        }
    }
    Err(error!(SyntaxError, ..&expr.column(); "EXPECTED LINE NUMBER"))
}

impl Statement {
    /// Classify and parse one line of source. Keywords are matched as
    /// substrings, first match wins, in the order of `Word::STATEMENTS`.
    pub fn new(text: &str) -> Result<Statement> {
        let text = text.trim();
        let word = Word::STATEMENTS.iter().find(|word| match word {
            Word::If => text.contains(Word::If.as_str()) && text.contains(Word::Then.as_str()),
            _ => text.contains(word.as_str()),
        });
        let kind = match word {
            Some(word) => StatementKind::for_word(text, *word)?,
            None => return Err(error!(SyntaxError; "UNRECOGNIZED STATEMENT")),
        };
        Ok(Statement {
            text: text.to_string(),
            kind,
        })
    }
}

impl StatementKind {
    fn for_word(text: &str, word: Word) -> Result<StatementKind> {
        let start = word.find_end(text).unwrap_or_else(|| text.len());
        let rest = start..text.len();
        use Word::*;
        match word {
            Rem => Ok(StatementKind::Rem),
            Let => Self::r#let(text, rest),
            Print => Ok(StatementKind::Print(parse_clause(text, rest)?)),
            Input => Self::r#input(text, rest),
            End => Ok(StatementKind::End),
            Goto => {
                let (col, number) = line_number(text, rest)?;
                Ok(StatementKind::Goto(col, number))
            }
            If => Self::r#if(text, rest),
            Then => Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        }
    }

    fn r#let(text: &str, range: Range<usize>) -> Result<StatementKind> {
        let expr = parse_clause(text, range)?;
        if expr.kind() == ExpressionKind::Compound && matches!(expr, Expression::Assign(..)) {
            Ok(StatementKind::Let(expr))
        } else {
            Err(error!(SyntaxError, ..&expr.column(); "EXPECTED ASSIGNMENT"))
        }
    }

    fn r#input(text: &str, range: Range<usize>) -> Result<StatementKind> {
        match parse_clause(text, range)? {
            Expression::Var(col, ident) => Ok(StatementKind::Input(col, ident)),
            expr => Err(error!(SyntaxError, ..&expr.column(); "EXPECTED VARIABLE")),
        }
    }

    fn r#if(text: &str, range: Range<usize>) -> Result<StatementKind> {
        let then = match text[range.clone()].find(Word::Then.as_str()) {
            Some(i) => range.start + i,
            None => return Err(error!(SyntaxError; "EXPECTED THEN")),
        };
        let (target_col, target) = line_number(text, then + Word::Then.as_str().len()..range.end)?;
        let operators: Vec<(usize, Comparison)> = text[range.start..then]
            .char_indices()
            .filter_map(|(i, ch)| Comparison::for_char(ch).map(|op| (range.start + i, op)))
            .collect();
        let (pos, op) = match operators.as_slice() {
            [] => return Err(error!(SyntaxError; "NO COMPARISON OPERATOR FOUND")),
            [one] => *one,
            _ => return Err(error!(SyntaxError; "MULTIPLE COMPARISON OPERATORS FOUND")),
        };
        let lhs = parse_clause(text, range.start..pos)?;
        let rhs = parse_clause(text, pos + 1..then)?;
        Ok(StatementKind::If(lhs, op, rhs, target_col, target))
    }
}
