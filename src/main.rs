use std::io::{self, Write};
use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use serde::Serialize;
use slide_puzzle_solver::generator::RandomStart;
use slide_puzzle_solver::traits::puzzle::DebugPrintable;
use slide_puzzle_solver::util::BoardReader;
use slide_puzzle_solver::{
    HeuristicKind, OrderingKind, Outcome, Puzzle, RestartReason, SearchConfig, SearchEvent, Solver,
};

#[derive(Parser, Debug)]
#[command(name = "slide-puzzle-solver", about = "Best-first solver for the sliding tile puzzle")]
struct Args {
    /// JSON file with a search config; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    heuristic: Option<HeuristicKind>,

    #[arg(long, value_enum)]
    ordering: Option<OrderingKind>,

    /// Board width and height.
    #[arg(long)]
    size: Option<usize>,

    /// Pops allowed before the start board is replaced by a random one.
    #[arg(long)]
    max_iterations: Option<u32>,

    #[arg(long, conflicts_with = "unbounded_restarts")]
    max_restarts: Option<u32>,

    #[arg(long)]
    unbounded_restarts: bool,

    /// Skip the parity test and let the search exhaust unsolvable boards.
    #[arg(long)]
    no_parity_check: bool,

    /// Seed for the random replacement boards.
    #[arg(long)]
    seed: Option<u64>,

    /// Start board, e.g. "1 2 3 4 0 6 7 5 8". Read from stdin when omitted.
    #[arg(long, requires = "goal")]
    start: Option<String>,

    #[arg(long, requires = "start")]
    goal: Option<String>,

    /// Draw boards with box characters.
    #[arg(long)]
    boxed: bool,

    /// Show a spinner instead of every expanded board.
    #[arg(long)]
    quiet: bool,

    /// Print the final report as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    config: &'a SearchConfig,
    start: &'a Puzzle,
    goal: &'a Puzzle,
    expanded: u64,
    #[serde(flatten)]
    outcome: &'a Outcome,
}

impl Args {
    fn search_config(&self) -> Result<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::load(path)?,
            None => SearchConfig::default(),
        };

        if let Some(heuristic) = self.heuristic {
            config.heuristic = heuristic;
        }
        if let Some(ordering) = self.ordering {
            config.ordering = ordering;
        }
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(max_iterations) = self.max_iterations {
            config.max_iterations = max_iterations;
        }
        if self.unbounded_restarts {
            config.max_restarts = None;
        } else if let Some(max_restarts) = self.max_restarts {
            config.max_restarts = Some(max_restarts);
        }
        if self.no_parity_check {
            config.verify_solvability = false;
        }

        config.validate()?;
        Ok(config)
    }

    fn boards(&self, size: usize) -> Result<(Puzzle, Puzzle)> {
        if let (Some(start), Some(goal)) = (&self.start, &self.goal) {
            let start = start.parse::<Puzzle>().context("invalid --start board")?;
            let goal = goal.parse::<Puzzle>().context("invalid --goal board")?;
            return Ok((start, goal));
        }

        let stdin = io::stdin();
        let mut reader = BoardReader::new(stdin.lock());

        println!("Enter the initial state (use 0 for the blank space): ");
        io::stdout().flush()?;
        let start = reader.read_board(size).context("invalid initial state")?;

        println!("Enter the goal state (use 0 for the blank space): ");
        io::stdout().flush()?;
        let goal = reader.read_board(size).context("invalid goal state")?;

        Ok((start, goal))
    }
}

fn print_board(puzzle: &Puzzle, boxed: bool) {
    if boxed {
        puzzle.debug_print(None);
    } else {
        print!("{}", puzzle);
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = args.search_config()?;
    let (start, goal) = args.boards(config.size)?;

    let solver = Solver::new(config.clone())?;
    let generator = match args.seed {
        Some(seed) => RandomStart::seeded(seed),
        None => RandomStart::from_entropy(),
    };

    info!("solving with {:?} / {:?}", config.heuristic, config.ordering);

    let spinner = if args.quiet {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {pos} states expanded, {msg}")
                .context("invalid spinner template")?,
        );
        spinner.set_message("0 restarts");
        Some(spinner)
    } else {
        None
    };

    let mut expanded = 0u64;
    let mut restarts = 0u32;
    let outcome = solver.solve_with(start.clone(), goal.clone(), generator, |event| match event {
        SearchEvent::Expanded(snapshot) => {
            expanded += 1;
            match &spinner {
                Some(spinner) => spinner.inc(1),
                None if !args.json => {
                    println!("Moved to state (heuristic cost: {}):", snapshot.heuristic);
                    print_board(&snapshot.puzzle, args.boxed);
                }
                None => {}
            }
        }
        SearchEvent::Restarted { reason, start } => {
            restarts += 1;
            if let Some(spinner) = &spinner {
                spinner.set_message(format!("{} restarts", restarts));
            } else if !args.json {
                match reason {
                    RestartReason::Unsolvable => {
                        println!("The puzzle is not solvable. Generating a random initial state.")
                    }
                    RestartReason::IterationLimit => println!(
                        "Reached maximum iterations without finding a solution. Generating a random initial state."
                    ),
                }
                print_board(start, args.boxed);
            }
        }
        SearchEvent::Finished(_) => {
            if let Some(spinner) = &spinner {
                spinner.finish_and_clear();
            }
        }
    })?;

    if args.json {
        let report = Report {
            config: &config,
            start: &start,
            goal: &goal,
            expanded,
            outcome: &outcome,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match &outcome {
        Outcome::Found(solution) => {
            println!("Goal state reached in {} moves.", solution.moves);
            println!("Goal state:");
            print_board(&solution.puzzle, args.boxed);
        }
        Outcome::NoSolution { .. } => println!("No solution found."),
    }

    Ok(())
}
