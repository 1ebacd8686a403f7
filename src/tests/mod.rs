//! # Fixtures for tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `fn tableau_form()`: the starting tableau, as it would be read from input
//! * `fn iteration_k_form()`: tableau and basis after `k` pivots
//! * `fn optimal_tableau_form()`: tableau and basis at termination
use relp_num::RationalBig;

use crate::data::tableau::Tableau;


pub type T = RationalBig;

/// Build a tableau without the checks for an initial basis.
pub fn tableau(rows: Vec<Vec<T>>) -> Tableau<T> {
    let height = rows.len();
    let width = rows[0].len();
    Tableau::from_row_major(rows.into_iter().flatten().collect(), height, width)
}
