use super::{EvalState, Operation};
use crate::lang::ast::{Expression, Statement, StatementKind};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

impl Statement {
    /// Run this statement once and move the cursor.
    /// On error the cursor is left where it was.
    pub fn execute(&self, state: &mut EvalState) -> Result<()> {
        use StatementKind::*;
        match self.kind() {
            Rem => state.advance(),
            Let(expr) => {
                expr.eval(state)?;
                state.advance();
            }
            Print(expr) => {
                let value = expr.eval(state)?;
                state.print(value)?;
                state.advance();
            }
            Input(_, var_name) => {
                let value = state.read_integer()?;
                state.set_value(var_name, value);
                state.advance();
            }
            End => state.halt(),
            Goto(col, number) => state.jump_to(*number).map_err(|e| e.in_column(col))?,
            If(lhs, op, rhs, col, number) => {
                let lhs = lhs.eval(state)?;
                let rhs = rhs.eval(state)?;
                if op.test(lhs, rhs) {
                    state.jump_to(*number).map_err(|e| e.in_column(col))?;
                } else {
                    state.advance();
                }
            }
        }
        Ok(())
    }
}

impl Expression {
    pub fn eval(&self, state: &mut EvalState) -> Result<i32> {
        use Expression::*;
        match self {
            Integer(_, n) => Ok(*n),
            Var(col, var_name) => state.value(var_name).map_err(|e| e.in_column(col)),
            Negation(col, expr) => {
                let val = expr.eval(state)?;
                Operation::negate(val).map_err(|e| e.in_column(col))
            }
            Multiply(col, lhs, rhs) => {
                let (l, r) = (lhs.eval(state)?, rhs.eval(state)?);
                Operation::multiply(l, r).map_err(|e| e.in_column(col))
            }
            Divide(col, lhs, rhs) => {
                let (l, r) = (lhs.eval(state)?, rhs.eval(state)?);
                Operation::divide(l, r).map_err(|e| e.in_column(col))
            }
            Add(col, lhs, rhs) => {
                let (l, r) = (lhs.eval(state)?, rhs.eval(state)?);
                Operation::add(l, r).map_err(|e| e.in_column(col))
            }
            Subtract(col, lhs, rhs) => {
                let (l, r) = (lhs.eval(state)?, rhs.eval(state)?);
                Operation::subtract(l, r).map_err(|e| e.in_column(col))
            }
            Assign(_, var_name, expr) => {
                let val = expr.eval(state)?;
                state.set_value(var_name, val);
                Ok(val)
            }
        }
    }
}
