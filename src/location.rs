use std::num::NonZero;

use ndarray::Ix;

type Coord = usize;
pub(crate) type Dimension = NonZero<Coord>;

/// A position `(x, y)` on a board. The top left corner is `Location(0, 0)`.
///
/// The same type addresses both cells of the `W × H` cell grid and lattice points of the
/// `(W + 1) × (H + 1)` lattice; which grid is meant follows from context.
#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
pub struct Location(pub Coord, pub Coord);

impl Location {
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.1, self.0)
    }

    /// Flat index of this lattice point on a board `width` cells across, row-major over the
    /// `(width + 1)`-wide lattice.
    pub(crate) fn lattice_index(&self, width: Coord) -> usize {
        self.1 * (width + 1) + self.0
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.1, value.0)
    }
}
