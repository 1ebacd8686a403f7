//! # Storing of tableaus in memory
//!
//! This module provides the data structures the simplex method works on: numbers, the tableau
//! with its basis, and solutions read from a final tableau.
pub mod number_types;
pub mod solution;
pub mod tableau;
