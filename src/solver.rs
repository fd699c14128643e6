use std::convert::identity;

use itertools::Itertools;
use ndarray::Array2;
use strum::VariantArray;
use varisat::{CnfFormula, Lit, Solver, Var};

use crate::board::{Puzzle, Solution};
use crate::cell::Diagonal;
use crate::graph::{AcyclicEdges, GatedEdge};
use crate::location::Location;
use crate::logic::exactly_k;

/// One-shot constraint encoding of a [`Puzzle`].
///
/// Every solve call builds a fresh engine instance over fresh decision variables; nothing is
/// shared between calls.
pub(crate) struct PuzzleSolver<'a> {
    puzzle: &'a Puzzle,
    cell_vars: Array2<Var>,
}

impl<'a> From<&'a Puzzle> for PuzzleSolver<'a> {
    fn from(puzzle: &'a Puzzle) -> Self {
        let width = puzzle.width();
        let cell_vars = Array2::from_shape_fn((puzzle.height(), width), |(y, x)| {
            Var::from_index(y * width + x)
        });

        Self { puzzle, cell_vars }
    }
}

impl PuzzleSolver<'_> {
    /// The literal stating that the cell at `cell` holds a backslash (`backslash` true) or a
    /// slash (`backslash` false).
    pub(crate) fn cell_lit(&self, cell: Location, backslash: bool) -> Lit {
        self.cell_vars[cell.as_index()].lit(backslash)
    }

    /// Literals stating that the diagonal in each neighboring cell points toward the lattice
    /// point at `point`; between one and four literals depending on how far into the board the
    /// point sits.
    fn incident_lits(&self, point: Location) -> Vec<Lit> {
        let (width, height) = (self.puzzle.width(), self.puzzle.height());
        let Location(x, y) = point;
        let mut lits = Vec::with_capacity(4);

        if y > 0 && x > 0 {
            // the top left cell's backslash ends here
            lits.push(self.cell_lit(Location(x - 1, y - 1), true));
        }
        if y > 0 && x < width {
            // the top right cell's slash ends here
            lits.push(self.cell_lit(Location(x, y - 1), false));
        }
        if y < height && x > 0 {
            // the bottom left cell's slash starts here
            lits.push(self.cell_lit(Location(x - 1, y), false));
        }
        if y < height && x < width {
            // the bottom right cell's backslash starts here
            lits.push(self.cell_lit(Location(x, y), true));
        }

        lits
    }

    /// Both candidate diagonals of every cell, each gated on the cell variable's polarity for
    /// that orientation.
    fn gated_edges(&self) -> Vec<GatedEdge> {
        let width = self.puzzle.width();

        self.cell_vars
            .indexed_iter()
            .flat_map(|(index, var)| {
                Diagonal::VARIANTS.iter().map(move |diagonal| GatedEdge {
                    endpoints: diagonal.endpoints(Location::from(index), width),
                    gate: var.lit(diagonal.is_backslash()),
                })
            })
            .collect_vec()
    }

    pub(crate) fn solve(&self) -> Option<Solution> {
        self.solve_excluding(&[])
    }

    /// Solve with extra clauses ruling out known assignments; used to probe for alternative
    /// solutions.
    pub(crate) fn solve_excluding(&self, excluded: &[Vec<Lit>]) -> Option<Solution> {
        let mut formulae: Vec<CnfFormula> = Vec::new();

        // the engine must know every cell variable even before any clause mentions it, so the
        // model covers the whole grid
        let mut base = CnfFormula::new();
        base.set_var_count(self.cell_vars.len());
        formulae.push(base);

        for (index, clue) in self.puzzle.clues().indexed_iter() {
            if let Some(count) = clue.value() {
                formulae.push(CnfFormula::from(exactly_k(
                    &self.incident_lits(Location::from(index)),
                    count as usize,
                )));
            }
        }

        formulae.push(CnfFormula::from(excluded.iter().cloned()));

        let acyclic = AcyclicEdges::from(self.gated_edges());

        let mut solver = Solver::new();
        // `add_formula` only registers variables that appear in clauses, so register every cell
        // variable explicitly; otherwise unclued cells would be missing from the model
        self.cell_vars.iter().for_each(|var| solver.sample_var(*var));
        formulae.iter().for_each(|formula| solver.add_formula(formula));

        loop {
            if !solver.solve().is_ok_and(identity) {
                return None;
            }
            let model = solver.model().unwrap();

            match acyclic.find_violation(&model) {
                Some(clause) => solver.add_formula(&CnfFormula::from(vec![clause])),
                None => {
                    return Some(Solution::new(self.cell_vars.map(|var| {
                        Diagonal::from_backslash(model.get(var.index()).unwrap().is_positive())
                    })))
                }
            }
        }
    }

    /// A clause ruling out exactly the assignment behind `solution`.
    pub(crate) fn blocking_clause(&self, solution: &Solution) -> Vec<Lit> {
        self.cell_vars
            .indexed_iter()
            .map(|(index, var)| {
                var.lit(!solution.diagonal_at(Location::from(index)).is_backslash())
            })
            .collect_vec()
    }

    /// Solve, additionally demanding that the assignment found be the only one.
    pub(crate) fn solve_unique(&self) -> Option<Solution> {
        let first = self.solve()?;

        match self.solve_excluding(&[self.blocking_clause(&first)]) {
            Some(_) => None,
            None => Some(first),
        }
    }
}
