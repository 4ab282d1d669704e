//! Drive the search one expansion at a time and report its progress.
//!
//! Run: cargo run --bin maze-steps -- --ratio 0.2 --every 10

use clap::Parser;
use laby_demos::MazeArgs;
use laby_paths::{PathSearch, SearchError, Step};

/// Step through a maze search, printing the frontier as it grows
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    maze: MazeArgs,

    /// Report every N steps
    #[arg(long, default_value_t = 1)]
    every: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let every = cli.every.max(1);

    let cfg = cli.maze.settings()?;
    let grid = cli.maze.grid(&cfg)?;
    let search = PathSearch::from_config(&cfg.search);
    let mut stepper = search.stepper(&grid)?;

    let mut n = 0;
    loop {
        let step = match stepper.step() {
            Ok(Step::Idle) => break,
            Ok(step) => step,
            Err(SearchError::Unsolvable { expansions }) => {
                println!("{grid}");
                println!("no path ({expansions} expansions)");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        n += 1;
        if n % every == 0 || matches!(step, Step::Reached(_) | Step::Finished) {
            println!(
                "{n:>6} {:<12} {:<16} frontier {:>5} closed {:>5}",
                format!("{:?}", stepper.phase()),
                format!("{step:?}"),
                stepper.frontier().len(),
                stepper.closed().len()
            );
        }
    }

    if let Some(path) = stepper.path() {
        println!("{}", grid.render_path(path.cells()));
        println!(
            "{} expansions, {} steps, cost {:.3}",
            stepper.expansions(),
            path.steps(),
            path.cost()
        );
    }
    Ok(())
}
