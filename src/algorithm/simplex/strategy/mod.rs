//! # Strategies
//!
//! Decisions that are made during the simplex method, independent of the way a pivot is carried
//! out.
pub mod pivot_rule;
