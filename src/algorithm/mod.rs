//! # Algorithms
use crate::data::number_types::traits::OrderedField;
use crate::data::solution::Solution;
use crate::data::tableau::{Basis, Tableau};

pub mod simplex;

/// A tableau either has a finite optimum, or a column that can be increased without bound.
///
/// The latter is reported as `Infeasible`: no (finite) solution exists. Unboundedness is not
/// distinguished from other causes.
#[derive(Eq, PartialEq, Clone, Debug)]
pub enum OptimizationResult<F> {
    /// The final tableau and its basis.
    FiniteOptimum {
        #[allow(missing_docs)]
        tableau: Tableau<F>,
        #[allow(missing_docs)]
        basis: Basis,
    },
    /// No solution.
    Infeasible,
}

impl<F: OrderedField> OptimizationResult<F> {
    /// Read the values of the decision variables off the final tableau.
    ///
    /// # Return value
    ///
    /// `None` if there is no solution.
    pub fn solution(&self) -> Option<Solution<F>> {
        match self {
            OptimizationResult::FiniteOptimum { tableau, basis } => {
                Some(Solution::from_tableau(tableau, basis))
            },
            OptimizationResult::Infeasible => None,
        }
    }
}
