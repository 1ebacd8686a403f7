//! # Number types
//!
//! The arithmetic primitive the algorithms are written against. Any exact rational type can be
//! plugged in; `relp_num::RationalBig` is what the binary and the tests use.
use std::error::Error;
use std::fmt;

use num_traits::{One, Zero};

pub mod traits;

/// A division was attempted with a zero denominator.
///
/// With a tableau that satisfies the preconditions of the simplex method this can not happen, as
/// only strictly positive pivot values are divided by. It is a fatal error, caused by malformed
/// input.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct DivisionByZero;

impl fmt::Display for DivisionByZero {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("division by zero")
    }
}

impl Error for DivisionByZero {}

/// Divide two numbers, failing on a zero denominator.
///
/// # Arguments
///
/// * `numerator`: Value to divide.
/// * `denominator`: Value to divide by.
///
/// # Return value
///
/// The exact quotient, or `DivisionByZero` when `denominator` is zero.
pub fn divide<F: traits::OrderedField>(numerator: F, denominator: &F) -> Result<F, DivisionByZero> {
    if denominator.is_zero() {
        Err(DivisionByZero)
    } else {
        Ok(numerator / denominator)
    }
}

/// Create a number from a machine integer, using only field operations.
///
/// The value is assembled from powers of two, so the number of operations is logarithmic in the
/// magnitude. This keeps reading and constructing tableaus independent of the number type.
pub fn from_integer<F: traits::OrderedField>(value: i64) -> F {
    let mut remaining = value.unsigned_abs();
    let mut power = F::one();
    let mut total = F::zero();

    while remaining > 0 {
        if remaining & 1 == 1 {
            total = total + &power;
        }
        remaining >>= 1;
        if remaining > 0 {
            power = power.clone() + &power;
        }
    }

    if value < 0 { -total } else { total }
}
