use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::{Board, Heuristic};

type IndexSet<K> = indexmap::IndexSet<K, fxhash::FxBuildHasher>;

/// Counters accumulated over one search run, reported on success and on
/// frontier exhaustion alike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Distinct boards popped, goal-tested and expanded.
    pub nodes_expanded: usize,
    /// High-water mark of the frontier, sampled at the top of each loop.
    pub max_queue_size: usize,
}

/// A solved run: the optimal depth and the board sequence from the
/// initial board to the goal, both inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub depth: u32,
    pub path: Vec<Board>,
}

/// One entry of the search tree. Parent links index into the arena of the
/// owning run, so the tree is reclaimed wholesale when the run returns.
struct Node {
    board: Board,
    g: u32,
    h: u32,
    parent: Option<usize>,
}

/// Best-first search from `initial` under `heuristic`, ordering the
/// frontier by `f = g + h` with ties broken by insertion order (FIFO), so
/// repeated runs expand identical node sequences. Returns `None` when the
/// reachable half of the state space is exhausted without hitting the
/// goal; an unsolvable board is a normal negative result, not an error.
///
/// `on_step` is called once per expanded node, for progress reporting.
pub fn best_first_search(
    initial: &Board,
    heuristic: Heuristic,
    mut on_step: impl FnMut(),
) -> (Option<Solution>, Stats) {
    let mut stats = Stats::default();
    let mut nodes = vec![Node {
        board: initial.clone(),
        g: 0,
        h: heuristic.evaluate(initial),
        parent: None,
    }];

    // Reverse-ordered min-heap keyed by (f, arena index). Nodes enter the
    // arena in generation order, so the index doubles as the insertion
    // sequence for the FIFO tie-break and no board is ever compared.
    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse((nodes[0].g + nodes[0].h, 0usize)));

    let mut visited = IndexSet::default();

    loop {
        stats.max_queue_size = stats.max_queue_size.max(frontier.len());

        let Some(Reverse((_, idx))) = frontier.pop() else {
            return (None, stats);
        };

        if nodes[idx].board.is_goal() {
            return (Some(reconstruct(&nodes, idx)), stats);
        }

        // The frontier may hold several entries for one board; only the
        // first pop (the cheapest) is expanded.
        if !visited.insert(nodes[idx].board.clone()) {
            continue;
        }
        stats.nodes_expanded += 1;
        on_step();

        let g = nodes[idx].g + 1;
        for child in nodes[idx].board.expand() {
            if visited.contains(&child) {
                continue;
            }
            let h = heuristic.evaluate(&child);
            frontier.push(Reverse((g + h, nodes.len())));
            nodes.push(Node {
                board: child,
                g,
                h,
                parent: Some(idx),
            });
        }
    }
}

fn reconstruct(nodes: &[Node], goal: usize) -> Solution {
    let mut path = std::iter::successors(Some(goal), |&i| nodes[i].parent)
        .map(|i| nodes[i].board.clone())
        .collect::<Vec<_>>();
    path.reverse();
    Solution {
        depth: nodes[goal].g,
        path,
    }
}

/// Pure path-cost search: A* with the zero heuristic.
pub fn run_uniform_cost_search(
    initial: &Board,
    on_step: impl FnMut(),
) -> (Option<Solution>, Stats) {
    best_first_search(initial, Heuristic::UniformCost, on_step)
}

/// A* under the given heuristic. Also accepts `Heuristic::UniformCost`,
/// which makes it equivalent to [`run_uniform_cost_search`]; the wider
/// domain is intentional, every heuristic runs on the same engine.
pub fn run_a_star(
    initial: &Board,
    heuristic: Heuristic,
    on_step: impl FnMut(),
) -> (Option<Solution>, Stats) {
    best_first_search(initial, heuristic, on_step)
}
