//! # Basis change
//!
//! Gauss-Jordan elimination around a pivot cell, producing the next tableau.
use num_traits::{One, Zero};

use crate::algorithm::simplex::pivot::PivotCell;
use crate::data::number_types::{divide, DivisionByZero};
use crate::data::number_types::traits::OrderedField;
use crate::data::tableau::{Basis, Tableau};

/// Brings the pivot column into the basis, in place of the basic column of the pivot row.
///
/// Every value not in the pivot row or column becomes
/// `old[i][j] - old[i][column] * old[row][j] / value`, the pivot row is divided by the pivot
/// value, and the pivot column becomes the unit vector of the pivot row.
///
/// # Arguments
///
/// * `tableau`: Tableau before the pivot. It is not modified.
/// * `basis`: Basis of that tableau.
/// * `pivot`: Cell to pivot on, as selected on `tableau`.
///
/// # Return value
///
/// The new tableau and basis, which replace the old ones.
///
/// # Errors
///
/// If the pivot value is zero, which doesn't happen for a pivot that was selected on the tableau.
pub fn pivot<F: OrderedField>(
    tableau: &Tableau<F>,
    basis: &Basis,
    pivot: &PivotCell<F>,
) -> Result<(Tableau<F>, Basis), DivisionByZero> {
    let PivotCell { column, row, ref value } = *pivot;
    debug_assert!(row > 0 && row < tableau.height());
    debug_assert!(column > 0 && column < tableau.width());
    debug_assert_eq!(tableau.get(row, column), value);

    let pivot_row = tableau.row(row);
    let mut data = Vec::with_capacity(tableau.height() * tableau.width());
    for i in 0..tableau.height() {
        let current_row = tableau.row(i);
        let factor = &current_row[column];
        for j in 0..tableau.width() {
            let new_value = if j == column {
                // The pivot column is the unit vector e_row
                if i == row { F::one() } else { F::zero() }
            } else if i == row {
                divide(current_row[j].clone(), value)?
            } else if factor.is_zero() {
                current_row[j].clone()
            } else {
                let product = factor.clone() * &pivot_row[j];
                current_row[j].clone() - divide(product, value)?
            };
            data.push(new_value);
        }
    }

    let tableau = Tableau::from_row_major(data, tableau.height(), tableau.width());
    let basis = basis.with_replaced(row, column);

    Ok((tableau, basis))
}
