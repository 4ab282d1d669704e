//! Generate (or load) a maze, solve it, and print the route.
//!
//! Run: cargo run --bin maze -- --room-rows 8 --room-cols 20 --ratio 0.1

use clap::Parser;
use laby_demos::MazeArgs;
use laby_paths::PathSearch;

/// Solve a maze and print it with the path drawn in
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    maze: MazeArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let cfg = cli.maze.settings()?;
    let grid = cli.maze.grid(&cfg)?;
    let search = PathSearch::from_config(&cfg.search);

    match search.find_path(&grid)? {
        Some(path) => {
            println!("{}", grid.render_path(path.cells()));
            println!(
                "{} heuristic, {} moves: {} steps, cost {:.3}",
                search.heuristic(),
                search.movement(),
                path.steps(),
                path.cost()
            );
        }
        None => {
            println!("{grid}");
            println!("no path");
        }
    }
    Ok(())
}
