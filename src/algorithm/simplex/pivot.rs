//! # Pivot selection
//!
//! Choosing the cell of the tableau to pivot on: an entering column from the pivot rule, and a
//! leaving row from the lexicographic minimum-ratio test.
use num_traits::Zero;
use tracing::trace;

use crate::algorithm::simplex::strategy::pivot_rule::PivotRule;
use crate::data::number_types::{divide, DivisionByZero};
use crate::data::number_types::traits::OrderedField;
use crate::data::tableau::Tableau;

/// The cell a pivot is performed on.
///
/// Created for a single iteration only.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct PivotCell<F> {
    /// Index of the entering column.
    pub column: usize,
    /// Index of the row whose basic variable leaves the basis.
    pub row: usize,
    /// Tableau value at `(row, column)`, always strictly positive.
    pub value: F,
}

/// Outcome of looking for a pivot.
#[derive(Eq, PartialEq, Clone, Debug)]
pub enum Selection<F> {
    /// Pivot on this cell.
    Pivot(PivotCell<F>),
    /// There is no column with a negative reduced cost.
    Optimal,
    /// A column can enter, but no row bounds it: there is no (finite) solution.
    Infeasible,
}

/// Determine the cell to pivot on.
///
/// This function has no side effects other than updating the state of the pivot rule.
///
/// # Arguments
///
/// * `tableau`: Current tableau.
/// * `rule`: Strategy to choose the entering column with.
///
/// # Errors
///
/// Only if the tableau violates its invariants such that a zero would be divided by.
pub fn select<F, PR>(tableau: &Tableau<F>, rule: &mut PR) -> Result<Selection<F>, DivisionByZero>
where
    F: OrderedField,
    PR: PivotRule,
{
    let Some((column, _cost)) = rule.select_primal_pivot_column(tableau) else {
        return Ok(Selection::Optimal);
    };

    let selection = match select_primal_pivot_row(tableau, column)? {
        Some(row) => Selection::Pivot(PivotCell {
            column,
            row,
            value: tableau.get(row, column).clone(),
        }),
        None => Selection::Infeasible,
    };

    Ok(selection)
}

/// Determine the row to pivot on, given the column.
///
/// Only rows with a strictly positive value in the pivot column are candidates. Of each candidate
/// row, the "ratio row" is the row divided by its value in the pivot column. The ratio rows are
/// compared lexicographically, starting at the right-hand side: the candidates are narrowed down
/// to those that have the minimum value in a column, one column at a time, until a single one is
/// left.
///
/// Looking only at the right-hand side column, this is the usual minimum-ratio test. Using the
/// other columns to break ties prevents cycling on degenerate problems.
///
/// # Arguments
///
/// * `tableau`: Tableau to select a row in.
/// * `column`: Index of the entering column, in range `1` until `tableau.width()`.
///
/// # Return value
///
/// Index of the row to pivot on. If not found, the problem is unbounded.
///
/// # Errors
///
/// Not in practice, as only strictly positive values are divided by.
pub fn select_primal_pivot_row<F: OrderedField>(
    tableau: &Tableau<F>,
    column: usize,
) -> Result<Option<usize>, DivisionByZero> {
    debug_assert!(column > 0 && column < tableau.width());

    let mut candidates = (1..tableau.height())
        .filter(|&i| tableau.get(i, column) > &F::zero())
        .collect::<Vec<_>>();
    if candidates.is_empty() {
        return Ok(None);
    }

    for j in 0..tableau.width() {
        if candidates.len() == 1 {
            break;
        }

        let ratios = candidates.iter()
            .map(|&i| divide(tableau.get(i, j).clone(), tableau.get(i, column)))
            .collect::<Result<Vec<_>, _>>()?;
        let Some(minimum) = ratios.iter().min() else { break };
        candidates = candidates.iter()
            .zip(&ratios)
            .filter(|&(_, ratio)| ratio == minimum)
            .map(|(&i, _)| i)
            .collect();

        trace!(column = j, remaining = ?candidates, "lexicographic ratio test");
    }

    // More than one candidate can only remain for rows that are multiples of each other, which
    // a canonical tableau does not have. Stay deterministic regardless.
    Ok(candidates.first().copied())
}
