use std::ops::{Index, IndexMut};

use anyhow::{ensure, Result};
use arrayvec::ArrayVec;

mod fmt;
mod parse;

pub mod heuristic;
pub mod solve;

pub use heuristic::Heuristic;
pub use solve::{run_a_star, run_uniform_cost_search, Solution, Stats};

/// Row/column coordinate on the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos(pub u8, pub u8);

/// A 3x3 tile arrangement. Cells hold 0..=8 exactly once, 0 being the
/// blank. Boards are values: every move produces a fresh board, and a
/// board placed in the frontier or visited set is never touched again.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [u8; 9],
    blank: u8,
}

impl Index<Pos> for Board {
    type Output = u8;
    fn index(&self, pos: Pos) -> &Self::Output {
        &self.cells[pos.0 as usize * 3 + pos.1 as usize]
    }
}
impl IndexMut<Pos> for Board {
    fn index_mut(&mut self, pos: Pos) -> &mut Self::Output {
        &mut self.cells[pos.0 as usize * 3 + pos.1 as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up = 0,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];
}

impl Board {
    /// The solved arrangement every search drives towards.
    pub const GOAL: Self = Self {
        cells: [1, 2, 3, 4, 5, 6, 7, 8, 0],
        blank: 8,
    };

    /// Builds a board from row-major cells, checking the permutation
    /// invariant: each of 0..=8 present exactly once.
    pub fn from_cells(cells: [u8; 9]) -> Result<Self> {
        let mut seen = [false; 9];
        for &v in &cells {
            ensure!(v <= 8, "Cell value out of range: {v}");
            ensure!(!seen[v as usize], "Duplicated cell value: {v}");
            seen[v as usize] = true;
        }
        let blank = cells.iter().position(|&v| v == 0).expect("0 is present") as u8;
        Ok(Self { cells, blank })
    }

    pub fn cells(&self) -> &[u8; 9] {
        &self.cells
    }

    pub fn blank_pos(&self) -> Pos {
        Pos(self.blank / 3, self.blank % 3)
    }

    fn neighbor(pos: Pos, dir: Direction) -> Option<Pos> {
        const DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        let r = pos.0.checked_add_signed(DIRECTIONS[dir as usize].0)?;
        let c = pos.1.checked_add_signed(DIRECTIONS[dir as usize].1)?;
        (r < 3 && c < 3).then_some(Pos(r, c))
    }

    /// Slides the tile at `target` into the blank, returning the new
    /// board. A target that is not orthogonally adjacent to the blank
    /// leaves the board unchanged; `expand` never produces one, so the
    /// no-op only matters for direct callers.
    pub fn slide(&self, target: Pos) -> Self {
        let blank = self.blank_pos();
        let dist = blank.0.abs_diff(target.0) + blank.1.abs_diff(target.1);
        if dist != 1 || target.0 > 2 || target.1 > 2 {
            return self.clone();
        }
        let mut next = self.clone();
        next[blank] = next[target];
        next[target] = 0;
        next.blank = target.0 * 3 + target.1;
        next
    }

    /// All boards reachable by one blank move, in `Direction::ALL` order.
    /// 2 children from a corner, 3 from an edge, 4 from the center.
    pub fn expand(&self) -> ArrayVec<Self, 4> {
        let blank = self.blank_pos();
        Direction::ALL
            .iter()
            .filter_map(|&dir| Self::neighbor(blank, dir))
            .map(|target| self.slide(target))
            .collect()
    }

    pub fn is_goal(&self) -> bool {
        self.cells == Self::GOAL.cells
    }
}
