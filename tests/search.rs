use std::fmt::Write;

use anyhow::{ensure, Context};
use common::*;
use eight_solver::solve::best_first_search;
use eight_solver::{Board, Heuristic};

mod common;

fn main() {
    run_tests("search", |content| {
        let input = content
            .split_once(SEPARATOR)
            .map_or(content, |(input, _)| input)
            .trim();
        let board = input.parse::<Board>().context("Invalid board")?;

        let mut got = format!("{input}\n\n{SEPARATOR}");
        let mut depths = Vec::new();
        for heuristic in Heuristic::ALL {
            let (solution, stats) = best_first_search(&board, heuristic, || {});
            ensure!(
                stats.max_queue_size > 0,
                "Frontier was seeded, so its high-water mark is at least 1"
            );
            match solution {
                Some(solution) => {
                    // The path must be a legal move sequence of the
                    // reported length, ending on the goal.
                    ensure!(solution.path.len() == solution.depth as usize + 1);
                    ensure!(solution.path.first() == Some(&board));
                    ensure!(solution.path.last().map_or(false, Board::is_goal));
                    for w in solution.path.windows(2) {
                        ensure!(w[0].expand().contains(&w[1]), "Illegal move in path");
                    }
                    ensure!(
                        heuristic.evaluate(&board) <= solution.depth,
                        "Heuristic overestimates the optimal depth"
                    );
                    depths.push(solution.depth);
                    writeln!(got, "{heuristic}: solved at depth {}", solution.depth).unwrap();
                }
                None => {
                    ensure!(
                        stats.nodes_expanded == 181_440,
                        "Failure must exhaust the reachable half of the state space"
                    );
                    writeln!(got, "{heuristic}: no solution").unwrap();
                }
            }
        }
        ensure!(
            depths.windows(2).all(|w| w[0] == w[1]),
            "Admissible heuristics must agree on the optimal depth"
        );

        Ok(got)
    });
}
