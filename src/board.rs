use std::fmt::{Display, Formatter};
use std::num::NonZero;

use ndarray::Array2;

use crate::cell::{Clue, Diagonal};
use crate::location::{Dimension, Location};
use crate::solver::PuzzleSolver;

/// A Slant puzzle: a grid of `width × height` cells, each to be filled with one [`Diagonal`],
/// and clue digits on some points of the `(width + 1) × (height + 1)` lattice.
///
/// [`Puzzle`]s are built with a [`PuzzleBuilder`](crate::builder::PuzzleBuilder) or produced by
/// [`generate`](crate::generate::generate).
#[derive(Clone)]
pub struct Puzzle {
    // width, height, in cells
    pub(crate) dims: (Dimension, Dimension),
    // (height + 1) × (width + 1), row major
    pub(crate) clues: Array2<Clue>,
}

impl Puzzle {
    /// Board width, in cells.
    pub fn width(&self) -> usize {
        self.dims.0.get()
    }

    /// Board height, in cells.
    pub fn height(&self) -> usize {
        self.dims.1.get()
    }

    pub(crate) fn clues(&self) -> &Array2<Clue> {
        &self.clues
    }

    /// The clue at the lattice point `point`.
    pub fn clue_at(&self, point: Location) -> Clue {
        self.clues[point.as_index()]
    }

    /// Find an assignment of diagonals meeting every clue and closing no loop, or `None` if the
    /// clues admit no such assignment.
    ///
    /// Unsatisfiability is an ordinary outcome, not a fault; a clue exceeding its point's
    /// geometric maximum, for instance, surfaces here as `None`.
    pub fn solve(&self) -> Option<Solution> {
        PuzzleSolver::from(self).solve()
    }

    /// Like [`solve`](Self::solve), but succeeds only when the assignment found is the only
    /// one.
    pub fn solve_unique(&self) -> Option<Solution> {
        PuzzleSolver::from(self).solve_unique()
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.clues.rows() {
            for clue in row {
                write!(f, "{}", clue)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// A resolved assignment of one diagonal per cell.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Solution {
    // height × width, row major
    diagonals: Array2<Diagonal>,
}

impl Solution {
    pub(crate) fn new(diagonals: Array2<Diagonal>) -> Self {
        Self { diagonals }
    }

    /// The diagonal resolved for the cell at `cell`.
    pub fn diagonal_at(&self, cell: Location) -> Diagonal {
        self.diagonals[cell.as_index()]
    }

    /// Number of diagonals touching the lattice point `point`.
    pub fn incident_count(&self, point: Location) -> u8 {
        let (height, width) = self.diagonals.dim();
        let Location(x, y) = point;
        let mut count = 0;

        if y > 0 && x > 0 && self.diagonals[(y - 1, x - 1)] == Diagonal::Backslash {
            count += 1;
        }
        if y > 0 && x < width && self.diagonals[(y - 1, x)] == Diagonal::Slash {
            count += 1;
        }
        if y < height && x > 0 && self.diagonals[(y, x - 1)] == Diagonal::Slash {
            count += 1;
        }
        if y < height && x < width && self.diagonals[(y, x)] == Diagonal::Backslash {
            count += 1;
        }

        count
    }

    /// Re-encode this solution as a puzzle cluing every lattice point with its realized
    /// incident count.
    ///
    /// Resolving the result reproduces this solution exactly.
    pub fn as_clues(&self) -> Puzzle {
        let (height, width) = self.diagonals.dim();

        Puzzle {
            dims: (NonZero::new(width).unwrap(), NonZero::new(height).unwrap()),
            clues: Array2::from_shape_fn((height + 1, width + 1), |index| {
                Clue::Count(self.incident_count(Location::from(index)))
            }),
        }
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.diagonals.rows() {
            for diagonal in row {
                write!(f, "{}", diagonal)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
