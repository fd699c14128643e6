//! Chained construction of [`Puzzle`]s, deferring error reporting until [`PuzzleBuilder::build`].

use std::num::NonZero;
use std::ops::IndexMut;

use ndarray::{Array2, AssignElem};

use crate::board::Puzzle;
use crate::cell::Clue;
use crate::location::{Dimension, Location};

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug)]
pub enum BuilderInvalidReason {
    /// A clue was placed outside the lattice implied by the dimensions given to the builder.
    FeatureOutOfBounds,
    /// A clue was given a count above four, which no lattice point can meet.
    ClueTooLarge,
}

/// A builder for [`Puzzle`]s.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some
/// point.
#[derive(Clone)]
pub struct PuzzleBuilder {
    // width, height, in cells
    dims: (Dimension, Dimension),
    clues: Array2<Clue>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Default for PuzzleBuilder {
    fn default() -> Self {
        Self::with_dims((NonZero::new(5).unwrap(), NonZero::new(5).unwrap()))
    }
}

impl PuzzleBuilder {
    /// Construct a new builder for a board with the specified cell dimensions, in
    /// `(width, height)` order. Clues live on the lattice one point wider and taller.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            clues: Array2::from_shape_simple_fn(
                (dims.1.get() + 1, dims.0.get() + 1),
                Clue::default,
            ),
            invalid_reasons: Default::default(),
        }
    }

    /// Place a clue demanding exactly `count` incident diagonals at the lattice point `point`,
    /// replacing any clue already there.
    ///
    /// A count above four can never be met anywhere and causes the builder to enter a
    /// [`ClueTooLarge`](BuilderInvalidReason::ClueTooLarge) invalid state. A count above the
    /// point's geometric maximum (one at a corner, two on a border) but at most four is
    /// accepted and leaves the finished puzzle unsatisfiable instead.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds)
    /// invalid state if `point` is outside the lattice.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_clue(&mut self, point: Location, count: u8) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if point.0 > self.dims.0.get() || point.1 > self.dims.1.get() {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
            return self;
        }

        if count > 4 {
            self.invalid_reasons.push(BuilderInvalidReason::ClueTooLarge);
            return self;
        }

        self.clues.index_mut(point.as_index()).assign_elem(Clue::Count(count));

        self
    }

    /// Clear the clue at the lattice point `point`, if any.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds)
    /// invalid state if `point` is outside the lattice.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn remove_clue(&mut self, point: Location) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if point.0 > self.dims.0.get() || point.1 > self.dims.1.get() {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
            return self;
        }

        self.clues.index_mut(point.as_index()).assign_elem(Clue::Empty);

        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has
    /// arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Puzzle`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of
    /// [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Puzzle, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        Ok(Puzzle {
            dims: self.dims,
            clues: self.clues.clone(),
        })
    }
}
