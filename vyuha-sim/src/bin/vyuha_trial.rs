//! Run a two-run maze trial from the command line.
//!
//! Loads a maze file, prints the estimated score range for a perfect-knowledge
//! navigator, then runs the selected strategy through the trial and reports
//! the result.
//!
//! # Usage
//!
//! ```bash
//! vyuha-trial vyuha-sim/mazes/maze_01.txt
//! vyuha-trial vyuha-sim/mazes/maze_02.txt --config configs/vyuha.yaml
//! vyuha-trial vyuha-sim/mazes/maze_03.txt --strategy random --seed 7
//! RUST_LOG=debug vyuha-trial vyuha-sim/mazes/maze_01.txt --show-map
//! ```

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::info;
use vyuha::{NavigationController, NavigationStrategy, RandomWalk, estimate_score};
use vyuha_sim::{Maze, SimConfig, TrialRunner};

/// Navigator to run
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Strategy {
    /// Flood-fill explorer with route validation
    Flood,
    /// Seeded random walk
    Random,
}

/// Two-run maze trial
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maze file
    maze: PathBuf,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Navigator strategy
    #[arg(short, long, value_enum, default_value_t = Strategy::Flood)]
    strategy: Strategy,

    /// Random seed for the random strategy
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Print the navigator's wall map after the trial
    #[arg(long)]
    show_map: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> vyuha_sim::Result<()> {
    let maze = Maze::load(&args.maze)?;
    let config = match &args.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    let navigator = config.navigator_for(&maze)?;
    info!(
        "Loaded {}x{} maze from {}",
        maze.dim(),
        maze.dim(),
        args.maze.display()
    );

    let goals = navigator.goal_cells();
    match estimate_score(
        &maze.to_wall_map(),
        navigator.start,
        &goals,
        config.trial.train_score_ratio,
    ) {
        Some(estimate) => println!(
            "Estimated score is between {:.3} and {:.3}",
            estimate.best, estimate.worst
        ),
        None => println!("Goal region is unreachable from {}", navigator.start),
    }

    let mut strategy: Box<dyn NavigationStrategy> = match args.strategy {
        Strategy::Flood => Box::new(NavigationController::new(navigator.clone())?),
        Strategy::Random => Box::new(RandomWalk::new(&navigator, args.seed)?),
    };

    let runner = TrialRunner::new(&maze, config.trial.clone())
        .with_start(navigator.start, navigator.initial_heading)
        .with_goals(goals);
    let report = runner.run(strategy.as_mut());

    println!("\n=== Trial Result ({}) ===", report.strategy);
    for run in &report.runs {
        println!(
            "Run {}: {} steps{}",
            run.run,
            run.steps,
            if run.completed { "" } else { " (incomplete)" }
        );
    }
    println!("Collisions: {}", report.collisions);
    println!("Rejected resets: {}", report.rejected_resets);
    match report.score {
        Some(score) => println!("Task complete! Score: {:.3}", score),
        None => println!("Task incomplete"),
    }

    if args.show_map {
        println!("\n{}", strategy.wall_map().to_ascii());
    }
    Ok(())
}
