//! # Representation of solutions
//!
//! Once the simplex method reaches an optimal tableau, the values of the decision variables can be
//! read off using the basis.
use std::fmt;

use itertools::Itertools;
use num_traits::Zero;

use crate::data::number_types::traits::OrderedField;
use crate::data::tableau::{Basis, Tableau};

/// Name of a tableau column.
///
/// Columns `1..height` belong to the auxiliary (slack) variables of the initial basis, all columns
/// after that to the decision variables. Both are numbered from one.
#[derive(Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Debug, Hash)]
pub enum Variable {
    /// Auxiliary variable `u_k`.
    Auxiliary(usize),
    /// Decision variable `x_k`.
    Decision(usize),
}

impl Variable {
    /// Name of a column.
    ///
    /// # Arguments
    ///
    /// * `j`: Column index.
    /// * `height`: Number of rows of the tableau, including the objective row.
    ///
    /// # Return value
    ///
    /// `None` for the right-hand side column, which is not a variable.
    pub fn of_column(j: usize, height: usize) -> Option<Self> {
        if j == 0 {
            None
        } else if j < height {
            Some(Variable::Auxiliary(j))
        } else {
            Some(Variable::Decision(j - height + 1))
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Variable::Auxiliary(k) => write!(f, "u{}", k),
            Variable::Decision(k) => write!(f, "x{}", k),
        }
    }
}

/// Values of the decision variables in a basic solution.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Solution<F> {
    /// Right-hand side of the objective row.
    pub objective_value: F,
    /// Value of each decision variable, `x1` first.
    pub decision_values: Vec<F>,
}

impl<F: OrderedField> Solution<F> {
    /// Read the solution off a tableau.
    ///
    /// A decision variable that is basic in row `r` has the right-hand side of that row as its
    /// value, all other decision variables are zero.
    pub fn from_tableau(tableau: &Tableau<F>, basis: &Basis) -> Self {
        debug_assert_eq!(basis.len(), tableau.height());

        let decision_values = (tableau.height()..tableau.width())
            .map(|j| match basis.row_of(j) {
                Some(i) => tableau.right_hand_side(i).clone(),
                None => F::zero(),
            })
            .collect();

        Self {
            objective_value: tableau.objective_value().clone(),
            decision_values,
        }
    }

    /// Value of decision variable `x_k`, numbered from one.
    pub fn value(&self, k: usize) -> Option<&F> {
        k.checked_sub(1).and_then(|index| self.decision_values.get(index))
    }
}

impl<F: fmt::Display> fmt::Display for Solution<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "objective = {}", self.objective_value)?;
        write!(
            f,
            "{}",
            self.decision_values.iter()
                .enumerate()
                .map(|(index, value)| format!("{} = {}", Variable::Decision(index + 1), value))
                .join("\n"),
        )
    }
}
