//! # Simplex tableau
//!
//! A dense matrix of exact numbers in canonical form, together with the basis describing which
//! column is basic in which row.
//!
//! Layout: row `0` is the objective row, rows `1..height` are constraints. Column `0` holds the
//! right-hand side of each row, columns `1..width` the coefficients of the auxiliary (slack) and
//! decision variables.
use std::error::Error;
use std::fmt;
use std::ops::Index;

use num_traits::{One, Zero};

use crate::data::number_types::traits::OrderedField;

/// The simplex tableau.
///
/// Instances are not mutated by the algorithm; each pivot produces a new tableau.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Tableau<F> {
    /// Row major values, `height * width` of them.
    data: Vec<F>,
    height: usize,
    width: usize,
}

impl<F: OrderedField> Tableau<F> {
    /// Create a tableau from an input artifact.
    ///
    /// The rows should describe a linear program in canonical form for the initial basis, which
    /// has auxiliary column `r` basic in row `r`. This is checked.
    ///
    /// # Arguments
    ///
    /// * `rows`: Objective row first, followed by the constraint rows. Each row starts with its
    /// right-hand side.
    ///
    /// # Errors
    ///
    /// When the rows are not rectangular, there are too few rows or columns, a constraint has a
    /// negative right-hand side, or an initial basis column is not a unit vector.
    pub fn new(rows: Vec<Vec<F>>) -> Result<Self, TableauError> {
        let height = rows.len();
        if height < 2 {
            return Err(TableauError::TooFewRows(height));
        }
        let width = rows[0].len();
        if let Some((row, values)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(TableauError::Ragged { row, expected: width, found: values.len() });
        }
        if width < height {
            // The initial basis needs columns `1..height`
            return Err(TableauError::TooFewColumns { height, width });
        }

        let tableau = Self::from_row_major(rows.into_iter().flatten().collect(), height, width);

        if let Some(row) = (1..height).find(|&i| tableau.right_hand_side(i) < &F::zero()) {
            return Err(TableauError::NegativeRightHandSide(row));
        }
        if let Some(column) = (1..height).find(|&j| !tableau.is_unit_column(j, j)) {
            return Err(TableauError::NotCanonical(column));
        }

        Ok(tableau)
    }

    /// Wrap already validated data.
    pub(crate) fn from_row_major(data: Vec<F>, height: usize, width: usize) -> Self {
        debug_assert_eq!(data.len(), height * width);

        Self { data, height, width }
    }

    /// Whether no objective row coefficient is negative.
    ///
    /// The right-hand side of the objective row is not a coefficient and is ignored.
    pub fn is_optimal(&self) -> bool {
        self.objective_row()[1..].iter().all(|value| value >= &F::zero())
    }

    /// Whether column `j` has a one in row `i` and zeros everywhere else.
    pub fn is_unit_column(&self, j: usize, i: usize) -> bool {
        debug_assert!(j < self.width);
        debug_assert!(i < self.height);

        (0..self.height).all(|row| {
            let value = self.get(row, j);
            if row == i { value.is_one() } else { value.is_zero() }
        })
    }

    /// Value of the objective function in the current basic solution.
    ///
    /// This is the right-hand side of the objective row.
    pub fn objective_value(&self) -> &F {
        self.get(0, 0)
    }
}

impl<F> Tableau<F> {
    /// Single value.
    ///
    /// # Arguments
    ///
    /// * `i`: Row index, in range `0` until `self.height()`.
    /// * `j`: Column index, in range `0` until `self.width()`.
    pub fn get(&self, i: usize, j: usize) -> &F {
        debug_assert!(i < self.height);
        debug_assert!(j < self.width);

        &self.data[i * self.width + j]
    }

    /// All values of row `i`, right-hand side first.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.height);

        &self.data[i * self.width..(i + 1) * self.width]
    }

    /// Right-hand side followed by the reduced costs.
    pub fn objective_row(&self) -> &[F] {
        self.row(0)
    }

    /// Column `0` of row `i`.
    pub fn right_hand_side(&self, i: usize) -> &F {
        self.get(i, 0)
    }

    /// Iterate over the rows, objective row first.
    pub fn rows(&self) -> impl Iterator<Item=&[F]> {
        self.data.chunks(self.width)
    }

    /// Number of rows, including the objective row.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns, including the right-hand side column.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of constraint rows.
    pub fn nr_constraints(&self) -> usize {
        self.height - 1
    }
}

impl<F> Index<(usize, usize)> for Tableau<F> {
    type Output = F;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        self.get(i, j)
    }
}

/// For each row, the column that is basic in it.
///
/// The objective row has no basic variable; its entry is always `None`.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Basis {
    columns: Vec<Option<usize>>,
}

impl Basis {
    /// The basis of a freshly constructed tableau: auxiliary column `r` is basic in row `r`.
    ///
    /// # Arguments
    ///
    /// * `height`: Number of rows in the tableau, including the objective row.
    pub fn initial(height: usize) -> Self {
        debug_assert!(height > 0);

        Self {
            columns: (0..height).map(|i| if i == 0 { None } else { Some(i) }).collect(),
        }
    }

    /// Create a basis from explicit entries.
    ///
    /// The first entry should be `None` and all others `Some`.
    pub fn new(columns: Vec<Option<usize>>) -> Self {
        debug_assert!(matches!(columns.first(), Some(None)));
        debug_assert!(columns.iter().skip(1).all(Option::is_some));

        Self { columns }
    }

    /// Basic column of row `i`, or `None` for the objective row.
    pub fn get(&self, i: usize) -> Option<usize> {
        self.columns[i]
    }

    /// The row in which column `j` is basic, if it is basic at all.
    pub fn row_of(&self, j: usize) -> Option<usize> {
        self.columns.iter().position(|&column| column == Some(j))
    }

    /// Copy of this basis, where column `j` has become basic in row `i`.
    #[must_use]
    pub fn with_replaced(&self, i: usize, j: usize) -> Self {
        debug_assert!(i > 0 && i < self.columns.len());

        let mut columns = self.columns.clone();
        columns[i] = Some(j);
        Self { columns }
    }

    /// Iterate over `(row, column)` pairs for the constraint rows.
    pub fn iter(&self) -> impl Iterator<Item=(usize, usize)> + '_ {
        self.columns.iter()
            .enumerate()
            .filter_map(|(i, column)| column.map(|j| (i, j)))
    }

    /// Number of entries, including the sentinel of the objective row.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether there are no entries at all.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Check whether the tableau currently describes a basic feasible solution for the basis.
///
/// Only used for debug purposes.
pub fn debug_assert_in_basic_feasible_solution_state<F: OrderedField>(
    tableau: &Tableau<F>,
    basis: &Basis,
) {
    debug_assert_eq!(basis.len(), tableau.height());
    debug_assert_eq!(basis.get(0), None);

    // `b` >= 0
    for i in 1..tableau.height() {
        let value = tableau.right_hand_side(i);
        debug_assert!(
            value >= &F::zero(),
            "rhs (b) is not always nonnegative: at row {} we have {} < 0", i, value,
        );
    }

    // Basis columns are unit vectors
    for (i, j) in basis.iter() {
        debug_assert!(tableau.is_unit_column(j, i), "Column {} is not equal to e_{}", j, i);
    }
}

/// A `TableauError` is created when an input artifact can't be used as a starting tableau.
///
/// This error is not returned when the linear program is unbounded. It is meant only for
/// malformed input.
#[derive(Eq, PartialEq, Clone, Debug)]
pub enum TableauError {
    /// An objective row and at least one constraint row are needed; contains the number of rows.
    TooFewRows(usize),
    /// A row has a different length than the objective row.
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Length of the objective row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// There are not enough columns for an auxiliary variable per constraint.
    TooFewColumns {
        #[allow(missing_docs)]
        height: usize,
        #[allow(missing_docs)]
        width: usize,
    },
    /// A constraint row has a negative right-hand side, so the initial basis is not feasible.
    NegativeRightHandSide(usize),
    /// The contained auxiliary column is not the unit vector of its row.
    NotCanonical(usize),
}

impl fmt::Display for TableauError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TableauError::TooFewRows(height) => write!(
                f, "a tableau needs an objective row and at least one constraint, got {} rows", height,
            ),
            TableauError::Ragged { row, expected, found } => write!(
                f, "row {} has {} values, but the objective row has {}", row, found, expected,
            ),
            TableauError::TooFewColumns { height, width } => write!(
                f, "a tableau with {} rows needs at least {} columns, got {}", height, height, width,
            ),
            TableauError::NegativeRightHandSide(row) => write!(
                f, "row {} has a negative right-hand side, the initial basis is infeasible", row,
            ),
            TableauError::NotCanonical(column) => write!(
                f, "column {} should be the unit vector of row {}", column, column,
            ),
        }
    }
}

impl Error for TableauError {}

#[cfg(test)]
mod test {
    use relp_num::RationalBig;
    use relp_num::RB;

    use crate::data::number_types::from_integer;
    use crate::data::tableau::{Basis, Tableau, TableauError};
    use crate::tests::problem_1;

    type T = RationalBig;

    fn rows(data: &[&[i64]]) -> Vec<Vec<T>> {
        data.iter()
            .map(|row| row.iter().map(|&v| from_integer(v)).collect())
            .collect()
    }

    #[test]
    fn accessors() {
        let tableau = problem_1::tableau_form();
        assert_eq!(tableau.height(), 4);
        assert_eq!(tableau.width(), 7);
        assert_eq!(tableau.nr_constraints(), 3);
        assert_eq!(tableau.objective_value(), &RB!(3));
        assert_eq!(tableau[(2, 5)], RB!(3));
        assert_eq!(tableau.right_hand_side(3), &RB!(4));
        assert_eq!(tableau.row(1), &[RB!(8), RB!(1), RB!(0), RB!(0), RB!(2), RB!(-1), RB!(2)]);
        assert_eq!(tableau.rows().count(), 4);
        assert!(!tableau.is_optimal());
        assert!(tableau.is_unit_column(2, 2));
        assert!(!tableau.is_unit_column(4, 1));
    }

    #[test]
    fn validation() {
        assert_eq!(Tableau::<T>::new(vec![]), Err(TableauError::TooFewRows(0)));
        assert_eq!(Tableau::new(rows(&[&[0, 1]])), Err(TableauError::TooFewRows(1)));
        assert_eq!(
            Tableau::new(rows(&[&[0, 0, -1], &[1, 1]])),
            Err(TableauError::Ragged { row: 1, expected: 3, found: 2 }),
        );
        assert_eq!(
            Tableau::new(rows(&[&[0, 0], &[1, 1], &[1, 0]])),
            Err(TableauError::TooFewColumns { height: 3, width: 2 }),
        );
        assert_eq!(
            Tableau::new(rows(&[&[0, 0, 0, -1], &[1, 1, 0, 1], &[-1, 0, 1, 1]])),
            Err(TableauError::NegativeRightHandSide(2)),
        );
        assert_eq!(
            Tableau::new(rows(&[&[0, 0, 1, -1], &[1, 1, 0, 1], &[1, 0, 1, 1]])),
            Err(TableauError::NotCanonical(2)),
        );
        assert!(Tableau::new(rows(&[&[0, 0, 0, -1], &[1, 1, 0, 1], &[0, 0, 1, 1]])).is_ok());
    }

    #[test]
    fn basis() {
        let basis = Basis::initial(4);
        assert_eq!(basis.get(0), None);
        assert_eq!(basis.get(3), Some(3));
        assert_eq!(basis.row_of(2), Some(2));
        assert_eq!(basis.row_of(5), None);
        assert_eq!(basis.iter().collect::<Vec<_>>(), vec![(1, 1), (2, 2), (3, 3)]);

        let replaced = basis.with_replaced(2, 6);
        assert_eq!(replaced, Basis::new(vec![None, Some(1), Some(6), Some(3)]));
        assert_eq!(replaced.row_of(6), Some(2));
        assert_eq!(replaced.row_of(2), None);
        // The original is untouched
        assert_eq!(basis.get(2), Some(2));
    }
}
