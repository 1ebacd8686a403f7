//! # Exact tableau simplex
//!
//! Solves linear programs that are given as a tableau in canonical form, using the primal simplex
//! method in exact rational arithmetic. The leaving row is chosen with a lexicographic ratio test,
//! so the method does not cycle on degenerate problems.
//!
//! Every tableau that the method passes through is published to an observer, which can for
//! example render it as text.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;
pub mod render;

#[cfg(test)]
mod tests;
