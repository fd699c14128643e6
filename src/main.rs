use std::num::NonZero;
use std::process::ExitCode;

use argh::FromArgs;
use rand::rngs::StdRng;
use rand::SeedableRng;

use gokigen::builder::PuzzleBuilder;
use gokigen::generate::{generate, GeneratorOptions};
use gokigen::Location;

#[derive(FromArgs)]
/// Solve and generate Slant (gokigen naname) puzzles.
///
/// With no arguments, solves and prints a built-in demonstration puzzle. With --height and
/// --width, generates puzzles instead.
struct Args {
    /// board height in cells, enables generation
    #[argh(option, short = 'h')]
    height: Option<usize>,
    /// board width in cells, enables generation
    #[argh(option, short = 'w')]
    width: Option<usize>,
    /// forbid clue placements that make cells trivially deducible
    #[argh(switch)]
    no_easy: bool,
    /// forbid clues on adjacent lattice points
    #[argh(switch)]
    no_adjacent: bool,
    /// number of puzzles to generate
    #[argh(option, short = 'n', default = "1")]
    count: usize,
    /// generation attempts allowed per puzzle
    #[argh(option, default = "100")]
    attempts: usize,
    /// seed the random source for reproducible output
    #[argh(option)]
    seed: Option<u64>,
    /// report progress of the generation search on stderr
    #[argh(switch, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let args: Args = argh::from_env();

    match (args.height, args.width) {
        (None, None) => demonstrate(),
        (Some(height), Some(width)) => run_generation(width, height, &args),
        _ => {
            eprintln!("--height and --width must be given together");
            ExitCode::FAILURE
        }
    }
}

fn demonstrate() -> ExitCode {
    // https://puzsq.sakura.ne.jp/main/puzzle_play.php?pid=7862
    let puzzle = PuzzleBuilder::with_dims((NonZero::new(7).unwrap(), NonZero::new(7).unwrap()))
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
        .unwrap();

    println!("{}", puzzle);

    match puzzle.solve() {
        Some(solution) => {
            println!("{}", solution);
            ExitCode::SUCCESS
        }
        None => {
            println!("no solution");
            ExitCode::FAILURE
        }
    }
}

fn run_generation(width: usize, height: usize, args: &Args) -> ExitCode {
    let (Some(width), Some(height)) = (NonZero::new(width), NonZero::new(height)) else {
        eprintln!("board dimensions must be nonzero");
        return ExitCode::FAILURE;
    };

    let options = GeneratorOptions {
        no_easy: args.no_easy,
        no_adjacent: args.no_adjacent,
        ..Default::default()
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    for index in 0..args.count {
        let mut found = None;
        for attempt in 0..args.attempts {
            if args.verbose {
                eprintln!("puzzle {}: attempt {}", index + 1, attempt + 1);
            }
            found = generate((width, height), options, &mut rng);
            if found.is_some() {
                break;
            }
        }

        match found {
            Some(puzzle) => println!("{}", puzzle),
            None => {
                eprintln!("search budget exhausted after {} attempts", args.attempts);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
