//! # Properties of the simplex method on random tableaus
//!
//! Tableaus are generated in canonical form for the auxiliary basis: the auxiliary columns form an
//! identity matrix, the right-hand sides are nonnegative and the objective value starts at zero.
use num_traits::Zero;
use proptest::collection::vec;
use proptest::prelude::*;
use relp_num::RationalBig;

use exact_tableau::algorithm::OptimizationResult;
use exact_tableau::algorithm::simplex::{Simplex, State, Trace};
use exact_tableau::algorithm::simplex::pivot::{select, Selection};
use exact_tableau::algorithm::simplex::strategy::pivot_rule::{PivotRule, SteepestDescentAlongVariable};
use exact_tableau::data::number_types::from_integer;
use exact_tableau::data::tableau::{Basis, Tableau};

type T = RationalBig;

/// More than enough for the problem sizes generated below.
const MAX_STEPS: usize = 200;

/// Problem data: reduced costs, constraint coefficients and right-hand sides.
#[derive(Clone, Debug)]
struct Problem {
    costs: Vec<i64>,
    constraints: Vec<Vec<i64>>,
    right_hand_sides: Vec<i64>,
}

impl Problem {
    fn tableau(&self) -> Tableau<T> {
        let m = self.constraints.len();

        let objective = std::iter::once(0)
            .chain(std::iter::repeat_n(0, m))
            .chain(self.costs.iter().copied())
            .map(from_integer::<T>)
            .collect::<Vec<_>>();
        let constraints = self.constraints.iter()
            .zip(&self.right_hand_sides)
            .enumerate()
            .map(|(i, (coefficients, &rhs))| {
                std::iter::once(rhs)
                    .chain((0..m).map(|k| if k == i { 1 } else { 0 }))
                    .chain(coefficients.iter().copied())
                    .map(from_integer::<T>)
                    .collect::<Vec<_>>()
            });

        Tableau::new(std::iter::once(objective).chain(constraints).collect()).unwrap()
    }
}

fn problem() -> impl Strategy<Value = Problem> {
    (1_usize..=3, 1_usize..=3).prop_flat_map(|(m, n)| {
        (
            vec(-5_i64..=5, n),
            vec(vec(-4_i64..=4, n), m),
            vec(0_i64..=10, m),
        ).prop_map(|(costs, constraints, right_hand_sides)| Problem {
            costs,
            constraints,
            right_hand_sides,
        })
    })
}

fn assert_basic_feasible(tableau: &Tableau<T>, basis: &Basis) {
    for i in 1..tableau.height() {
        assert!(tableau.right_hand_side(i) >= &T::zero());
    }
    for (i, j) in basis.iter() {
        assert!(tableau.is_unit_column(j, i), "column {} is not e_{}", j, i);
    }
}

proptest! {
    /// Every intermediate tableau is feasible for its basis, and the objective never decreases.
    #[test]
    fn invariants_along_the_way(problem in problem()) {
        let mut simplex = Simplex::new(problem.tableau());
        let mut nr_steps = 0;

        while simplex.state() == State::Running {
            prop_assert!(nr_steps < MAX_STEPS, "no termination after {} steps", nr_steps);
            let before = simplex.tableau().objective_value().clone();
            simplex.step(&mut Trace::new()).unwrap();
            nr_steps += 1;

            assert_basic_feasible(simplex.tableau(), simplex.basis());
            prop_assert!(simplex.tableau().objective_value() >= &before);
        }
        prop_assert_eq!(simplex.nr_iterations() + 1, nr_steps);
    }

    /// The last snapshot has no pivot, and all others do.
    #[test]
    fn snapshots(problem in problem()) {
        let mut simplex = Simplex::new(problem.tableau());
        let mut trace = Trace::new();
        for _ in 0..MAX_STEPS {
            if simplex.step(&mut trace).unwrap() != State::Running {
                break;
            }
        }
        prop_assert_ne!(simplex.state(), State::Running);

        let (last, rest) = trace.steps.split_last().unwrap();
        prop_assert!(last.pivot.is_none());
        prop_assert!(rest.iter().all(|step| step.pivot.is_some()));
        for window in trace.steps.windows(2) {
            prop_assert!(window[0].tableau.objective_value() <= window[1].tableau.objective_value());
        }
    }

    /// At an optimum nothing is left to do, and the solution satisfies the original constraints.
    #[test]
    fn terminal_state(problem in problem()) {
        let mut simplex = Simplex::new(problem.tableau());
        for _ in 0..MAX_STEPS {
            if simplex.step(&mut Trace::new()).unwrap() != State::Running {
                break;
            }
        }

        match simplex.state() {
            State::Optimal => {
                let tableau = simplex.tableau().clone();
                prop_assert!(tableau.is_optimal());
                prop_assert_eq!(
                    select(&tableau, &mut SteepestDescentAlongVariable::new()).unwrap(),
                    Selection::Optimal,
                );

                // Stepping again publishes nothing and changes nothing
                let mut trace = Trace::new();
                prop_assert_eq!(simplex.step(&mut trace).unwrap(), State::Optimal);
                prop_assert!(trace.steps.is_empty());
                prop_assert_eq!(simplex.tableau(), &tableau);

                let solution = match simplex.into_result() {
                    Some(result @ OptimizationResult::FiniteOptimum { .. }) => result.solution().unwrap(),
                    other => panic!("unexpected result {:?}", other),
                };
                let values = &solution.decision_values;
                prop_assert!(values.iter().all(|value| value >= &T::zero()));
                for (coefficients, &rhs) in problem.constraints.iter().zip(&problem.right_hand_sides) {
                    let lhs = coefficients.iter()
                        .zip(values)
                        .fold(T::zero(), |total, (&a, x)| total + from_integer::<T>(a) * x);
                    prop_assert!(lhs <= from_integer::<T>(rhs));
                }
                let objective = problem.costs.iter()
                    .zip(values)
                    .fold(T::zero(), |total, (&c, x)| total - from_integer::<T>(c) * x);
                prop_assert_eq!(&solution.objective_value, &objective);
            },
            State::Infeasible => {
                let tableau = simplex.tableau();
                let (column, _) = SteepestDescentAlongVariable::new()
                    .select_primal_pivot_column(tableau)
                    .unwrap();
                prop_assert!((1..tableau.height()).all(|i| tableau.get(i, column) <= &T::zero()));
            },
            State::Running => prop_assert!(false, "no termination after {} steps", MAX_STEPS),
        }
    }
}
