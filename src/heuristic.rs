use std::str::FromStr;

use anyhow::bail;

use crate::Board;

/// Estimate of the remaining cost from a board to the goal. `UniformCost`
/// degenerates A* into uniform-cost search; the other two are admissible
/// and consistent for the sliding-tile puzzle, which is what makes the
/// first goal popped from the frontier optimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heuristic {
    UniformCost,
    MisplacedTiles,
    ManhattanDistance,
}

impl Heuristic {
    pub const ALL: [Self; 3] = [
        Self::UniformCost,
        Self::MisplacedTiles,
        Self::ManhattanDistance,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::UniformCost => "uniform-cost",
            Self::MisplacedTiles => "misplaced",
            Self::ManhattanDistance => "manhattan",
        }
    }

    pub fn evaluate(self, board: &Board) -> u32 {
        match self {
            Self::UniformCost => 0,
            Self::MisplacedTiles => misplaced_tiles(board),
            Self::ManhattanDistance => manhattan_distance(board),
        }
    }
}

impl FromStr for Heuristic {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "uniform" | "uniform-cost" => Self::UniformCost,
            "misplaced" => Self::MisplacedTiles,
            "manhattan" => Self::ManhattanDistance,
            _ => bail!("Unknown heuristic: {s:?}"),
        })
    }
}

/// Non-blank tiles sitting on the wrong cell.
fn misplaced_tiles(board: &Board) -> u32 {
    board
        .cells()
        .iter()
        .zip(Board::GOAL.cells())
        .filter(|(&v, &goal)| v != 0 && v != goal)
        .count() as u32
}

/// Sum of L1 distances from each non-blank tile to its goal cell. Tile
/// `v` belongs at row `(v - 1) / 3`, column `(v - 1) % 3`.
fn manhattan_distance(board: &Board) -> u32 {
    board
        .cells()
        .iter()
        .zip(0u8..)
        .filter(|(&v, _)| v != 0)
        .map(|(&v, i)| {
            let (r, c) = (i / 3, i % 3);
            let (goal_r, goal_c) = ((v - 1) / 3, (v - 1) % 3);
            u32::from(r.abs_diff(goal_r) + c.abs_diff(goal_c))
        })
        .sum()
}
