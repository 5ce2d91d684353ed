use std::io::Read;

use anyhow::{Context, Result};
use console::style;
use eight_solver::{run_a_star, run_uniform_cost_search, Board, Heuristic};
use indicatif::ProgressBar;

fn main() -> Result<()> {
    let board = match std::env::args().nth(1) {
        Some(path) if path != "-" => std::fs::read_to_string(path)
            .context("Failed to read the board file")?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read the board from stdin")?;
            buf
        }
    }
    .parse::<Board>()
    .context("Failed to parse the board")?;

    println!("{board}\n");

    for heuristic in Heuristic::ALL {
        let bar = ProgressBar::new_spinner().with_message(heuristic.label());
        let (solution, stats) = match heuristic {
            Heuristic::UniformCost => run_uniform_cost_search(&board, || bar.inc(1)),
            _ => run_a_star(&board, heuristic, || bar.inc(1)),
        };
        bar.finish_and_clear();

        let outcome = match &solution {
            Some(solution) => style(format!("solved at depth {}", solution.depth)).green(),
            None => style("no solution".to_owned()).red(),
        };
        println!(
            "{:>12}: {outcome} ({} nodes expanded, max queue {})",
            heuristic, stats.nodes_expanded, stats.max_queue_size,
        );
    }

    Ok(())
}
