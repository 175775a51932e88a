use super::{Column, LineNumber};
use std::rc::Rc;

pub type Ident = Rc<str>;

/// One parsed program line. The source text is kept for `LIST`.
#[derive(Debug, PartialEq)]
pub struct Statement {
    pub(super) text: String,
    pub(super) kind: StatementKind,
}

#[derive(Debug, PartialEq)]
pub enum StatementKind {
    Rem,
    Let(Expression),
    Print(Expression),
    Input(Column, Ident),
    End,
    Goto(Column, LineNumber),
    If(Expression, Comparison, Expression, Column, LineNumber),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Category {
    /// Always continues with the next line.
    Sequential,
    /// May jump or stop.
    Control,
}

impl Statement {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> &StatementKind {
        &self.kind
    }

    pub fn category(&self) -> Category {
        use StatementKind::*;
        match self.kind {
            Rem | Let(_) | Print(_) | Input(..) => Category::Sequential,
            End | Goto(..) | If(..) => Category::Control,
        }
    }

    /// Only assignment, output and input make sense outside a program.
    pub fn is_direct_allowed(&self) -> bool {
        self.category() == Category::Sequential && self.kind != StatementKind::Rem
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Comparison {
    Equal,
    Less,
    Greater,
}

impl Comparison {
    pub fn for_char(ch: char) -> Option<Comparison> {
        match ch {
            '=' => Some(Comparison::Equal),
            '<' => Some(Comparison::Less),
            '>' => Some(Comparison::Greater),
            _ => None,
        }
    }

    pub fn test(&self, lhs: i32, rhs: i32) -> bool {
        match self {
            Comparison::Equal => lhs == rhs,
            Comparison::Less => lhs < rhs,
            Comparison::Greater => lhs > rhs,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ExpressionKind {
    Constant,
    Identifier,
    Compound,
}

#[derive(Debug, PartialEq)]
pub enum Expression {
    Integer(Column, i32),
    Var(Column, Ident),
    Negation(Column, Box<Expression>),
    Multiply(Column, Box<Expression>, Box<Expression>),
    Divide(Column, Box<Expression>, Box<Expression>),
    Add(Column, Box<Expression>, Box<Expression>),
    Subtract(Column, Box<Expression>, Box<Expression>),
    Assign(Column, Ident, Box<Expression>),
}

impl Expression {
    pub fn kind(&self) -> ExpressionKind {
        use Expression::*;
        match self {
            Integer(..) => ExpressionKind::Constant,
            Var(..) => ExpressionKind::Identifier,
            Negation(..) | Multiply(..) | Divide(..) | Add(..) | Subtract(..) | Assign(..) => {
                ExpressionKind::Compound
            }
        }
    }

    pub fn column(&self) -> Column {
        use Expression::*;
        match self {
            Integer(col, ..)
            | Var(col, ..)
            | Negation(col, ..)
            | Multiply(col, ..)
            | Divide(col, ..)
            | Add(col, ..)
            | Subtract(col, ..)
            | Assign(col, ..) => col.clone(),
        }
    }
}
