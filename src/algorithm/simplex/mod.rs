//! # The primal simplex method on a tableau
//!
//! Repeatedly selects a pivot and carries it out, until the tableau is optimal or a column can be
//! increased without bound. Every tableau that is passed through is published to an `Observer`.
use tracing::{debug, info};

use crate::algorithm::OptimizationResult;
use crate::algorithm::simplex::pivot::{PivotCell, Selection};
use crate::algorithm::simplex::strategy::pivot_rule::{PivotRule, SteepestDescentAlongVariable};
use crate::data::number_types::DivisionByZero;
use crate::data::number_types::traits::OrderedField;
use crate::data::tableau::{Basis, debug_assert_in_basic_feasible_solution_state, Tableau};

pub mod pivot;
pub mod strategy;
pub mod update;


/// The data published once per step.
#[derive(Eq, PartialEq, Debug)]
pub struct Snapshot<'a, F> {
    /// Tableau at the start of the step.
    pub tableau: &'a Tableau<F>,
    /// Basis belonging to `tableau`.
    pub basis: &'a Basis,
    /// The cell that `tableau` is pivoted on to get the next tableau, if any.
    ///
    /// Is `None` for the last snapshot.
    pub pivot: Option<&'a PivotCell<F>>,
}

/// Consumer of the tableaus that the simplex method passes through, such as a renderer.
pub trait Observer<F> {
    /// Receive one snapshot. It is only borrowed for the duration of the call.
    fn observe(&mut self, snapshot: Snapshot<'_, F>);
}

impl<F, T> Observer<F> for T
where
    T: FnMut(Snapshot<'_, F>),
{
    fn observe(&mut self, snapshot: Snapshot<'_, F>) {
        self(snapshot)
    }
}

/// Owned copy of a `Snapshot`.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Step<F> {
    #[allow(missing_docs)]
    pub tableau: Tableau<F>,
    #[allow(missing_docs)]
    pub basis: Basis,
    #[allow(missing_docs)]
    pub pivot: Option<PivotCell<F>>,
}

/// Observer that keeps a copy of everything it is shown.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Trace<F> {
    /// All snapshots, in the order they were published.
    pub steps: Vec<Step<F>>,
}

impl<F> Trace<F> {
    /// Create an empty trace.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<F> Default for Trace<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Clone> Observer<F> for Trace<F> {
    fn observe(&mut self, snapshot: Snapshot<'_, F>) {
        self.steps.push(Step {
            tableau: snapshot.tableau.clone(),
            basis: snapshot.basis.clone(),
            pivot: snapshot.pivot.cloned(),
        });
    }
}

/// Where the method is.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum State {
    /// More pivots might be needed.
    Running,
    /// No reduced cost is negative; terminal.
    Optimal,
    /// A column can enter the basis, but no row limits it; terminal.
    Infeasible,
}

/// The iteration state of the primal simplex method.
///
/// Owns the current tableau and basis. Each pivot replaces both with new values.
#[derive(Debug)]
pub struct Simplex<F, PR = SteepestDescentAlongVariable> {
    tableau: Tableau<F>,
    basis: Basis,
    rule: PR,
    state: State,
    nr_iterations: usize,
}

impl<F: OrderedField> Simplex<F> {
    /// Start from a tableau in canonical form for its initial basis.
    pub fn new(tableau: Tableau<F>) -> Self {
        Self::with_rule(tableau)
    }
}

impl<F, PR> Simplex<F, PR>
where
    F: OrderedField,
    PR: PivotRule,
{
    /// Start from a tableau in canonical form for its initial basis, using a specific pivot rule.
    pub fn with_rule(tableau: Tableau<F>) -> Self {
        let basis = Basis::initial(tableau.height());

        Self {
            tableau,
            basis,
            rule: PR::new(),
            state: State::Running,
            nr_iterations: 0,
        }
    }

    /// Take a single step.
    ///
    /// Either the method terminates, in which case the current tableau is published without a
    /// pivot, or a pivot is found, in which case the current tableau is published together with
    /// that pivot before it is replaced by the pivoted tableau.
    ///
    /// Calling this method after termination does nothing.
    ///
    /// # Return value
    ///
    /// The state after this step.
    ///
    /// # Errors
    ///
    /// A division by zero, which only happens when the tableau violates its invariants.
    pub fn step<O: Observer<F>>(&mut self, observer: &mut O) -> Result<State, DivisionByZero> {
        if self.state != State::Running {
            return Ok(self.state);
        }
        debug_assert_in_basic_feasible_solution_state(&self.tableau, &self.basis);

        if self.tableau.is_optimal() {
            info!(
                iterations = self.nr_iterations,
                objective = %self.tableau.objective_value(),
                "optimal tableau found",
            );
            self.publish(None, observer);
            self.state = State::Optimal;
            return Ok(self.state);
        }

        match pivot::select(&self.tableau, &mut self.rule)? {
            Selection::Pivot(cell) => {
                debug!(
                    iteration = self.nr_iterations + 1,
                    column = cell.column,
                    row = cell.row,
                    value = %cell.value,
                    leaving = ?self.basis.get(cell.row),
                    "pivoting",
                );
                let (tableau, basis) = update::pivot(&self.tableau, &self.basis, &cell)?;
                self.publish(Some(&cell), observer);
                self.tableau = tableau;
                self.basis = basis;
                self.nr_iterations += 1;
            },
            Selection::Infeasible => {
                info!(iterations = self.nr_iterations, "no solution, entering column is unbounded");
                self.publish(None, observer);
                self.state = State::Infeasible;
            },
            Selection::Optimal => {
                // Not reached after the optimality check above
                self.publish(None, observer);
                self.state = State::Optimal;
            },
        }

        Ok(self.state)
    }

    /// Take steps until termination.
    ///
    /// # Errors
    ///
    /// A division by zero, which only happens when the tableau violates its invariants.
    pub fn run<O: Observer<F>>(
        mut self,
        observer: &mut O,
    ) -> Result<OptimizationResult<F>, DivisionByZero> {
        loop {
            match self.step(observer)? {
                State::Running => {},
                State::Optimal => break Ok(OptimizationResult::FiniteOptimum {
                    tableau: self.tableau,
                    basis: self.basis,
                }),
                State::Infeasible => break Ok(OptimizationResult::Infeasible),
            }
        }
    }

    fn publish<O: Observer<F>>(&self, pivot: Option<&PivotCell<F>>, observer: &mut O) {
        observer.observe(Snapshot {
            tableau: &self.tableau,
            basis: &self.basis,
            pivot,
        });
    }

    /// The outcome, if the method has terminated.
    pub fn into_result(self) -> Option<OptimizationResult<F>> {
        match self.state {
            State::Running => None,
            State::Optimal => Some(OptimizationResult::FiniteOptimum {
                tableau: self.tableau,
                basis: self.basis,
            }),
            State::Infeasible => Some(OptimizationResult::Infeasible),
        }
    }
}

impl<F, PR> Simplex<F, PR> {
    /// Current tableau.
    pub fn tableau(&self) -> &Tableau<F> {
        &self.tableau
    }

    /// Basis of the current tableau.
    pub fn basis(&self) -> &Basis {
        &self.basis
    }

    /// Current state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Number of pivots done so far.
    pub fn nr_iterations(&self) -> usize {
        self.nr_iterations
    }
}

/// Solve a tableau until termination, with the default pivot rule.
///
/// # Arguments
///
/// * `tableau`: Starting tableau, in canonical form for the initial basis.
/// * `observer`: Receives each tableau the method passes through.
///
/// # Errors
///
/// A division by zero, which only happens when the tableau violates its invariants.
pub fn solve<F, O>(tableau: Tableau<F>, observer: &mut O) -> Result<OptimizationResult<F>, DivisionByZero>
where
    F: OrderedField,
    O: Observer<F>,
{
    Simplex::new(tableau).run(observer)
}
