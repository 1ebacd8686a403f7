//! # Traits
//!
//! The simplex method only needs to add, subtract, multiply, divide and compare numbers. Those
//! requirements are collected in one trait with a blanket implementation, so that the algorithm
//! never depends on a specific representation. The contract is that of an exact rational type:
//! every result is exact and fully reduced.
use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};

/// The simplex algorithm is defined over the ordered fields.
///
/// All methods containing algorithmic logic are generic over this trait. It is implemented
/// automatically for all types satisfying its bounds, such as `relp_num::RationalBig`.
///
/// Division by zero is not guarded by the type itself; use `number_types::divide` for that.
pub trait OrderedField:
    Zero + // Additive identity
    One + // Multiplicative identity
    Neg<Output=Self> + // Additive inverse

    Add<Self, Output=Self> +
    for<'r> Add<&'r Self, Output=Self> +
    Sub<Self, Output=Self> +
    for<'r> Sub<&'r Self, Output=Self> +
    Mul<Self, Output=Self> +
    for<'r> Mul<&'r Self, Output=Self> +
    Div<Self, Output=Self> +
    for<'r> Div<&'r Self, Output=Self> +

    Eq +
    Ord +

    // Practicalities
    Clone +
    Debug +
    Display +
{
}

impl<T> OrderedField for T
where
    T: Zero + One + Neg<Output=T>
        + Add<T, Output=T> + for<'r> Add<&'r T, Output=T>
        + Sub<T, Output=T> + for<'r> Sub<&'r T, Output=T>
        + Mul<T, Output=T> + for<'r> Mul<&'r T, Output=T>
        + Div<T, Output=T> + for<'r> Div<&'r T, Output=T>
        + Eq + Ord
        + Clone + Debug + Display,
{
}
