//! Puzzle generation: an annealed local search over candidate clue grids, using the solver as
//! its acceptance oracle.

use itertools::Itertools;
use ndarray::Array2;
use rand::Rng;

use crate::board::Puzzle;
use crate::cell::Clue;
use crate::location::{Dimension, Location};
use crate::solver::PuzzleSolver;

const CLUE_PENALTY_WEIGHT: usize = 2;
const ANNEALING_TEMPERATURE: f64 = 5.0;

/// Knobs for [`generate`].
#[derive(Copy, Clone, Debug)]
pub struct GeneratorOptions {
    /// Forbid clue values that determine their surrounding cells on their own (zero and the
    /// point's geometric maximum), adjacent 1/3 clue pairs, and three clues in a row.
    pub no_easy: bool,
    /// Forbid clues on adjacent lattice points.
    pub no_adjacent: bool,
    /// Candidate mutations attempted before the search gives up.
    pub max_steps: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            no_easy: false,
            no_adjacent: false,
            max_steps: 2000,
        }
    }
}

/// Legal clues for the lattice point `point`, the no-clue default first.
///
/// Without `no_easy`, a point admits anything up to its geometric maximum: one at a corner, two
/// on a border, four in the interior. With `no_easy`, both zero and the maximum itself are
/// dropped, since either determines every surrounding cell by itself.
pub(crate) fn choices(dims: (Dimension, Dimension), point: Location, no_easy: bool) -> Vec<Clue> {
    let (width, height) = (dims.0.get(), dims.1.get());
    let Location(x, y) = point;
    let max = (if y == 0 || y == height { 1 } else { 2 })
        * (if x == 0 || x == width { 1 } else { 2 });

    let range = match no_easy {
        true => 1..max,
        false => 0..max + 1,
    };

    let mut legal = vec![Clue::Empty];
    legal.extend(range.map(|count| Clue::Count(count as u8)));
    legal
}

/// Cheap structural rejection applied to a candidate clue grid before any solver call.
///
/// This only prunes: a grid passing the pretest may still be rejected by the solve oracle, but
/// a grid failing it can never be accepted under the same options.
pub(crate) fn pretest(clues: &Array2<Clue>, options: &GeneratorOptions) -> bool {
    let (rows, cols) = clues.dim();
    // adjacent 1s and 3s resolve the cells between them immediately
    let gives_away = |clue: Clue| matches!(clue, Clue::Count(1) | Clue::Count(3));

    for y in 0..rows {
        for x in 0..cols {
            let here = clues[(y, x)];

            if options.no_adjacent {
                if y + 1 < rows && here.is_clued() && clues[(y + 1, x)].is_clued() {
                    return false;
                }
                if x + 1 < cols && here.is_clued() && clues[(y, x + 1)].is_clued() {
                    return false;
                }
            }

            if options.no_easy {
                if y + 1 < rows && gives_away(here) && gives_away(clues[(y + 1, x)]) {
                    return false;
                }
                if x + 1 < cols && gives_away(here) && gives_away(clues[(y, x + 1)]) {
                    return false;
                }
                // so do three clues in a straight line
                if y + 2 < rows
                    && here.is_clued()
                    && clues[(y + 1, x)].is_clued()
                    && clues[(y + 2, x)].is_clued()
                {
                    return false;
                }
                if x + 2 < cols
                    && here.is_clued()
                    && clues[(y, x + 1)].is_clued()
                    && clues[(y, x + 2)].is_clued()
                {
                    return false;
                }
            }
        }
    }

    true
}

/// Number of clued lattice points, weighted; the quantity the search minimizes among otherwise
/// acceptable candidates.
pub(crate) fn clue_penalty(clues: &Array2<Clue>) -> usize {
    clues.iter().filter(|clue| clue.is_clued()).count() * CLUE_PENALTY_WEIGHT
}

struct Evaluation {
    unique: bool,
    score: i64,
}

/// Score a candidate: solve once, then probe every cell for whether its value is forced across
/// all solutions. Fully forced means the candidate is a finished puzzle. `None` means the clues
/// are unsatisfiable.
fn evaluate(puzzle: &Puzzle) -> Option<Evaluation> {
    let solver = PuzzleSolver::from(puzzle);
    let solution = solver.solve()?;

    let mut determined = 0;
    for y in 0..puzzle.height() {
        for x in 0..puzzle.width() {
            let cell = Location(x, y);
            let flipped = solver.cell_lit(cell, !solution.diagonal_at(cell).is_backslash());
            if solver.solve_excluding(&[vec![flipped]]).is_none() {
                determined += 1;
            }
        }
    }

    let cells = puzzle.width() * puzzle.height();
    Some(Evaluation {
        unique: determined == cells,
        score: determined as i64 - clue_penalty(puzzle.clues()) as i64,
    })
}

/// Search for a puzzle with exactly one solution by annealed local search over candidate clue
/// grids.
///
/// Starting from the all-blank grid, each step mutates one lattice point to a different legal
/// clue, discards the mutation if the structural pretest or the solve oracle rejects it, and otherwise
/// keeps it according to how many cells the clues pin down, discounted by the clue penalty.
/// Worsening mutations survive with probability `exp(Δscore / temperature)`. A candidate whose
/// every cell is forced is returned as a finished puzzle.
///
/// Returns `None` once `options.max_steps` mutations have been tried without one; callers are
/// free to simply try again.
pub fn generate(
    dims: (Dimension, Dimension),
    options: GeneratorOptions,
    rng: &mut impl Rng,
) -> Option<Puzzle> {
    let (width, height) = (dims.0.get(), dims.1.get());
    let mut candidate = Puzzle {
        dims,
        clues: Array2::from_shape_simple_fn((height + 1, width + 1), Clue::default),
    };
    let mut current = evaluate(&candidate)?.score;

    for _ in 0..options.max_steps {
        let point = Location(
            rng.random_range(0..width + 1),
            rng.random_range(0..height + 1),
        );
        let previous = candidate.clue_at(point);
        let legal = choices(dims, point, options.no_easy)
            .into_iter()
            .filter(|clue| *clue != previous)
            .collect_vec();
        if legal.is_empty() {
            continue;
        }

        candidate.clues[point.as_index()] = legal[rng.random_range(0..legal.len())];

        if !pretest(candidate.clues(), &options) {
            candidate.clues[point.as_index()] = previous;
            continue;
        }

        match evaluate(&candidate) {
            None => candidate.clues[point.as_index()] = previous,
            Some(Evaluation { unique: true, .. }) => return Some(candidate),
            Some(Evaluation { score, .. }) => {
                let accept = score >= current
                    || rng.random_bool(((score - current) as f64 / ANNEALING_TEMPERATURE).exp());
                if accept {
                    current = score;
                } else {
                    candidate.clues[point.as_index()] = previous;
                }
            }
        }
    }

    None
}
