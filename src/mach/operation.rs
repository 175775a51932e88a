use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Integer arithmetic
///
/// All operations are checked. Division truncates toward zero.

pub struct Operation {}

impl Operation {
    pub fn negate(val: i32) -> Result<i32> {
        match val.checked_neg() {
            Some(i) => Ok(i),
            None => Err(error!(Overflow)),
        }
    }

    pub fn add(lhs: i32, rhs: i32) -> Result<i32> {
        match lhs.checked_add(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(Overflow)),
        }
    }

    pub fn subtract(lhs: i32, rhs: i32) -> Result<i32> {
        match lhs.checked_sub(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(Overflow)),
        }
    }

    pub fn multiply(lhs: i32, rhs: i32) -> Result<i32> {
        match lhs.checked_mul(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(Overflow)),
        }
    }

    pub fn divide(lhs: i32, rhs: i32) -> Result<i32> {
        match lhs.checked_div(rhs) {
            Some(i) => Ok(i),
            None => {
                if rhs == 0 {
                    Err(error!(DivisionByZero))
                } else {
                    Err(error!(Overflow))
                }
            }
        }
    }
}
