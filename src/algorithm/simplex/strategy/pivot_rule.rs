//! # Pivot rules
//!
//! Strategies for choosing the column that enters the basis.
use num_traits::Zero;

use crate::data::number_types::traits::OrderedField;
use crate::data::tableau::Tableau;

/// Deciding how to pivot.
///
/// During the simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. This decision is made independent
/// of the strategy, by the lexicographic ratio test.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal simplex method.
    ///
    /// # Return value
    ///
    /// The index of the entering column together with its reduced cost, or `None` if no column has
    /// a negative reduced cost (the tableau is optimal).
    fn select_primal_pivot_column<F: OrderedField>(
        &mut self,
        tableau: &Tableau<F>,
    ) -> Option<(usize, F)>;
}

/// Pivot on the column which has the most negative reduced cost.
///
/// Ties are broken in favor of the lowest column index. Together with the lexicographic ratio
/// test, this makes every choice deterministic.
#[derive(Copy, Clone, Debug)]
pub struct SteepestDescentAlongVariable;

impl PivotRule for SteepestDescentAlongVariable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: OrderedField>(
        &mut self,
        tableau: &Tableau<F>,
    ) -> Option<(usize, F)> {
        let mut smallest: Option<(usize, &F)> = None;
        for (j, cost) in tableau.objective_row().iter().enumerate().skip(1) {
            // Strictly smaller, so the first one seen wins ties
            if cost < &F::zero() && smallest.is_none_or(|(_, existing_cost)| cost < existing_cost) {
                smallest = Some((j, cost));
            }
        }

        smallest.map(|(j, cost)| (j, cost.clone()))
    }
}
