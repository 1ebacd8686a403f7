use relp_num::RB;

use exact_tableau::algorithm::OptimizationResult;
use exact_tableau::algorithm::simplex::{solve, Trace};
use exact_tableau::io::builtin_example;

use super::read;

#[test]
fn scenario_a() {
    let tableau = read("scenario_a");
    assert_eq!(tableau, builtin_example());

    let mut trace = Trace::new();
    let result = solve(tableau, &mut trace).unwrap();

    let pivots = trace.steps.iter()
        .map(|step| step.pivot.as_ref().map(|cell| (cell.column, cell.row, cell.value.clone())))
        .collect::<Vec<_>>();
    assert_eq!(pivots, vec![
        Some((6, 2, RB!(3))),
        Some((4, 1, RB!(8, 3))),
        Some((5, 3, RB!(21, 4))),
        None,
    ]);
    let objective_values = trace.steps.iter()
        .map(|step| step.tableau.objective_value().clone())
        .collect::<Vec<_>>();
    assert_eq!(objective_values, vec![RB!(3), RB!(15), RB!(15), RB!(145, 7)]);

    let solution = result.solution().unwrap();
    assert_eq!(solution.objective_value, RB!(145, 7));
    assert_eq!(solution.decision_values, vec![RB!(36, 7), RB!(32, 7), RB!(8, 7)]);
}

#[test]
fn fractions() {
    let mut trace = Trace::new();
    let result = solve(read("fractions"), &mut trace).unwrap();

    let solution = result.solution().unwrap();
    assert_eq!(solution.objective_value, RB!(145, 7));
    assert_eq!(solution.decision_values, vec![RB!(36, 7), RB!(32, 7), RB!(8, 7)]);
    assert_eq!(trace.steps.last().map(|step| step.pivot.is_none()), Some(true));
}

#[test]
fn unbounded() {
    let tableau = read("unbounded");
    let mut trace = Trace::new();
    let result = solve(tableau.clone(), &mut trace).unwrap();

    assert_eq!(result, OptimizationResult::Infeasible);
    assert_eq!(result.solution(), None);
    assert_eq!(trace.steps.len(), 1);
    assert_eq!(trace.steps[0].tableau, tableau);
    assert_eq!(trace.steps[0].pivot, None);
}

#[test]
fn degenerate() {
    let mut trace = Trace::new();
    let result = solve(read("degenerate"), &mut trace).unwrap();

    assert_eq!(trace.steps.len(), 2);
    let pivot = trace.steps[0].pivot.as_ref().unwrap();
    assert_eq!((pivot.column, pivot.row), (3, 2));

    match result {
        OptimizationResult::FiniteOptimum { tableau, basis } => {
            assert!(tableau.is_optimal());
            assert_eq!(basis.get(2), Some(3));
            assert_eq!(tableau.objective_value(), &RB!(2));
        },
        OptimizationResult::Infeasible => panic!("expected an optimum"),
    }
}
