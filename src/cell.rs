use std::fmt::{Display, Formatter};

use strum::VariantArray;
use unordered_pair::UnorderedPair;

use crate::location::Location;

/// The orientation of the diagonal drawn in one cell.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, VariantArray)]
pub enum Diagonal {
    /// Bottom left to top right, printed `/`.
    Slash,
    /// Top left to bottom right, printed `\`.
    Backslash,
}

impl Diagonal {
    pub(crate) fn from_backslash(backslash: bool) -> Self {
        match backslash {
            true => Self::Backslash,
            false => Self::Slash,
        }
    }

    pub(crate) fn is_backslash(&self) -> bool {
        *self == Self::Backslash
    }

    /// Lattice endpoints of this diagonal drawn in the cell at `cell`, as flat indices on a
    /// board `width` cells across.
    pub(crate) fn endpoints(&self, cell: Location, width: usize) -> UnorderedPair<usize> {
        let Location(x, y) = cell;
        match self {
            Self::Backslash => UnorderedPair(
                Location(x, y).lattice_index(width),
                Location(x + 1, y + 1).lattice_index(width),
            ),
            Self::Slash => UnorderedPair(
                Location(x + 1, y).lattice_index(width),
                Location(x, y + 1).lattice_index(width),
            ),
        }
    }
}

impl Display for Diagonal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            Self::Slash => '/',
            Self::Backslash => '\\',
        })
    }
}

/// Contents of one lattice point: a digit constraining how many of the surrounding diagonals
/// touch the point, or nothing.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum Clue {
    /// Exactly this many incident diagonals, between 0 and 4.
    Count(u8),
    /// The point is unconstrained.
    #[default]
    Empty,
}

impl Clue {
    pub(crate) fn value(&self) -> Option<u8> {
        match self {
            Self::Count(count) => Some(*count),
            Self::Empty => None,
        }
    }

    pub(crate) fn is_clued(&self) -> bool {
        matches!(self, Self::Count(_))
    }
}

impl Display for Clue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Count(count) => write!(f, "{}", count),
            Self::Empty => write!(f, "."),
        }
    }
}
