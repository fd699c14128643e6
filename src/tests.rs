#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use ndarray::Array2;
    use petgraph::unionfind::UnionFind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::builder::PuzzleBuilder;
    use crate::cell::{Clue, Diagonal};
    use crate::generate::{choices, clue_penalty, generate, pretest, GeneratorOptions};
    use crate::location::Location;
    use crate::board::Puzzle;
    use crate::logic::{at_least_k, exactly_k};

    fn dims(width: usize, height: usize) -> (NonZero<usize>, NonZero<usize>) {
        (NonZero::new(width).unwrap(), NonZero::new(height).unwrap())
    }

    fn reference_puzzle() -> Puzzle {
        // https://puzsq.sakura.ne.jp/main/puzzle_play.php?pid=7862
        PuzzleBuilder::with_dims(dims(7, 7))
            .add_clue(Location(1, 1), 3)
            .add_clue(Location(3, 1), 2)
            .add_clue(Location(4, 1), 3)
            .add_clue(Location(6, 1), 3)
            .add_clue(Location(2, 2), 1)
            .add_clue(Location(5, 2), 1)
            .add_clue(Location(4, 3), 3)
            .add_clue(Location(5, 3), 2)
            .add_clue(Location(1, 4), 3)
            .add_clue(Location(3, 4), 3)
            .add_clue(Location(4, 4), 2)
            .add_clue(Location(6, 4), 3)
            .add_clue(Location(2, 5), 1)
            .add_clue(Location(5, 5), 1)
            .add_clue(Location(1, 6), 3)
            .add_clue(Location(4, 6), 3)
            .add_clue(Location(6, 6), 3)
            .build()
            .unwrap()
    }

    const REFERENCE_SOLUTION: &str = r"\/\\/\/
/////\\
\\/////
\/\/\\/
////\\\
\\/\\//
/\//\/\
";

    #[test]
    fn solve_reference_puzzle() {
        let puzzle = reference_puzzle();

        assert_eq!(format!("{}", puzzle), "........
.3.23.3.
..1..1..
....32..
.3.32.3.
..1..1..
.3..3.3.
........
");

        let solution = puzzle.solve().unwrap();
        assert_eq!(format!("{}", solution), REFERENCE_SOLUTION);
    }

    #[test]
    fn reference_solution_is_unique() {
        let solution = reference_puzzle().solve_unique().unwrap();
        assert_eq!(format!("{}", solution), REFERENCE_SOLUTION);
    }

    #[test]
    fn empty_grids_are_satisfiable() {
        for (width, height) in [(1, 1), (3, 2), (4, 4), (7, 5)] {
            let puzzle = PuzzleBuilder::with_dims(dims(width, height)).build().unwrap();
            assert!(puzzle.solve().is_some(), "no solution for {}x{}", width, height);
        }
    }

    #[test]
    fn solution_graph_is_acyclic() {
        let solution = reference_puzzle().solve().unwrap();
        let mut components = UnionFind::<usize>::new(8 * 8);

        for y in 0..7 {
            for x in 0..7 {
                let (a, b) = match solution.diagonal_at(Location(x, y)) {
                    Diagonal::Backslash => (y * 8 + x, (y + 1) * 8 + x + 1),
                    Diagonal::Slash => (y * 8 + x + 1, (y + 1) * 8 + x),
                };
                assert!(components.union(a, b), "cycle closed at cell ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn clue_counts_match_solution() {
        let puzzle = reference_puzzle();
        let solution = puzzle.solve().unwrap();

        for y in 0..8 {
            for x in 0..8 {
                let point = Location(x, y);
                if let Clue::Count(count) = puzzle.clue_at(point) {
                    assert_eq!(solution.incident_count(point), count, "at ({}, {})", x, y);
                }
            }
        }
    }

    #[test]
    fn recluing_a_solution_reproduces_it() {
        let solution = reference_puzzle().solve().unwrap();
        let reclued = solution.as_clues();
        assert_eq!(reclued.solve_unique().unwrap(), solution);
    }

    #[test]
    fn corner_clue_above_geometric_maximum_is_unsatisfiable() {
        let puzzle = PuzzleBuilder::with_dims(dims(1, 1))
            .add_clue(Location(1, 1), 4)
            .build()
            .unwrap();

        assert!(puzzle.solve().is_none());
    }

    #[test]
    fn single_cell_board() {
        let puzzle = PuzzleBuilder::with_dims(dims(1, 1)).build().unwrap();
        assert!(puzzle.solve().is_some());
        // either orientation works, so no unique solution
        assert!(puzzle.solve_unique().is_none());
    }

    #[test]
    fn cycle_through_four_cells_is_rejected() {
        // 0 at the center of a 2x2 board forces all four diagonals away from it, closing a
        // diamond around the center; every clue is locally satisfiable but no solution exists
        let puzzle = PuzzleBuilder::with_dims(dims(2, 2))
            .add_clue(Location(1, 1), 0)
            .build()
            .unwrap();

        assert!(puzzle.solve().is_none());
    }

    #[test]
    fn four_at_the_center_pins_every_cell() {
        let puzzle = PuzzleBuilder::with_dims(dims(2, 2))
            .add_clue(Location(1, 1), 4)
            .build()
            .unwrap();

        let solution = puzzle.solve_unique().unwrap();
        assert_eq!(format!("{}", solution), r"\/
/\
");
    }

    #[test]
    fn builder_rejects_out_of_lattice_clue() {
        assert!(PuzzleBuilder::with_dims(dims(2, 2))
            .add_clue(Location(3, 0), 1)
            .build()
            .is_err());
    }

    #[test]
    fn builder_rejects_impossible_count() {
        let mut builder = PuzzleBuilder::with_dims(dims(2, 2));
        builder.add_clue(Location(1, 1), 5);
        assert!(builder.is_valid().is_some());
    }

    #[test]
    fn clue_on_lattice_border_is_in_bounds() {
        // the lattice is one point wider and taller than the cell grid
        assert!(PuzzleBuilder::with_dims(dims(2, 2))
            .add_clue(Location(2, 2), 1)
            .build()
            .is_ok());
    }

    #[test]
    fn removing_a_clue_restores_the_blank_point() {
        let puzzle = PuzzleBuilder::with_dims(dims(2, 2))
            .add_clue(Location(1, 1), 2)
            .remove_clue(Location(1, 1))
            .build()
            .unwrap();

        assert_eq!(puzzle.clue_at(Location(1, 1)), Clue::Empty);
    }

    #[test]
    fn cardinality_clause_shapes() {
        let lits: Vec<_> = (0..4).map(|i| varisat::Var::from_index(i).positive()).collect();
        // C(4, 3) each way around
        assert_eq!(exactly_k(&lits, 2).len(), 8);
        // more trues demanded than literals available: the empty clause
        assert_eq!(at_least_k(&lits, 5), vec![Vec::new()]);
        // demanding none adds no lower-bound clauses
        assert_eq!(at_least_k(&lits, 0).len(), 0);
    }

    #[test]
    fn pattern_space_respects_geometry() {
        let board = dims(3, 3);

        // corners admit zero or one incident diagonal
        assert_eq!(
            choices(board, Location(0, 0), false),
            vec![Clue::Empty, Clue::Count(0), Clue::Count(1)]
        );
        // border points admit up to two
        assert_eq!(
            choices(board, Location(1, 0), false),
            vec![Clue::Empty, Clue::Count(0), Clue::Count(1), Clue::Count(2)]
        );
        // interior points admit up to four
        assert_eq!(choices(board, Location(1, 1), false).len(), 6);
        // no-easy drops both trivial extremes; a corner keeps only the blank
        assert_eq!(choices(board, Location(0, 0), true), vec![Clue::Empty]);
        assert_eq!(
            choices(board, Location(1, 1), true),
            vec![Clue::Empty, Clue::Count(1), Clue::Count(2), Clue::Count(3)]
        );
    }

    #[test]
    fn pretest_rejects_adjacent_clues_in_no_adjacent_mode() {
        let mut clues = Array2::from_elem((3, 3), Clue::Empty);
        clues[(0, 0)] = Clue::Count(1);
        clues[(0, 1)] = Clue::Count(2);

        let no_adjacent = GeneratorOptions { no_adjacent: true, ..Default::default() };
        assert!(!pretest(&clues, &no_adjacent));
        assert!(pretest(&clues, &GeneratorOptions::default()));
    }

    #[test]
    fn pretest_rejects_easy_patterns_in_no_easy_mode() {
        let no_easy = GeneratorOptions { no_easy: true, ..Default::default() };

        // a 1 next to a 3
        let mut clues = Array2::from_elem((3, 3), Clue::Empty);
        clues[(1, 0)] = Clue::Count(1);
        clues[(1, 1)] = Clue::Count(3);
        assert!(!pretest(&clues, &no_easy));

        // three clues in a line, regardless of value
        let mut clues = Array2::from_elem((4, 4), Clue::Empty);
        clues[(0, 1)] = Clue::Count(2);
        clues[(1, 1)] = Clue::Count(2);
        clues[(2, 1)] = Clue::Count(2);
        assert!(!pretest(&clues, &no_easy));
        assert!(pretest(&clues, &GeneratorOptions::default()));
    }

    #[test]
    fn pretest_acceptance_survives_clue_removal() {
        let strict = GeneratorOptions { no_easy: true, no_adjacent: true, ..Default::default() };

        let mut clues = Array2::from_elem((4, 4), Clue::Empty);
        clues[(0, 0)] = Clue::Count(1);
        clues[(2, 1)] = Clue::Count(2);
        clues[(0, 3)] = Clue::Count(2);
        assert!(pretest(&clues, &strict));

        for y in 0..4 {
            for x in 0..4 {
                let mut thinned = clues.clone();
                thinned[(y, x)] = Clue::Empty;
                assert!(pretest(&thinned, &strict), "rejected after blanking ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn clue_penalty_weights_clued_points() {
        let mut clues = Array2::from_elem((3, 3), Clue::Empty);
        assert_eq!(clue_penalty(&clues), 0);

        clues[(0, 0)] = Clue::Count(0);
        clues[(2, 2)] = Clue::Count(4);
        clues[(1, 2)] = Clue::Count(2);
        assert_eq!(clue_penalty(&clues), 6);
    }

    #[test]
    fn generate_small_unique_puzzle() {
        let mut rng = StdRng::seed_from_u64(0);
        let puzzle = generate(dims(3, 3), GeneratorOptions::default(), &mut rng)
            .expect("the default budget comfortably covers a 3x3 board");

        assert!(puzzle.solve_unique().is_some());
    }

    #[test]
    fn generated_puzzle_honors_no_adjacent() {
        let mut rng = StdRng::seed_from_u64(7);
        let options = GeneratorOptions { no_adjacent: true, ..Default::default() };
        let puzzle = generate(dims(3, 3), options, &mut rng)
            .expect("the default budget comfortably covers a 3x3 board");

        assert!(pretest(puzzle.clues(), &options));
        assert!(puzzle.solve_unique().is_some());
    }
}
