use std::str::FromStr;

use anyhow::{ensure, Context, Result};

use crate::Board;

impl FromStr for Board {
    type Err = anyhow::Error;

    /// Nine whitespace-separated integers, row by row. Line breaks are
    /// not significant, so `1 2 3 4 5 6 7 8 0` and a three-line grid
    /// parse the same.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [0u8; 9];
        let mut tokens = s.split_whitespace();
        for cell in &mut cells {
            let token = tokens.next().context("Expecting 9 cells")?;
            *cell = token
                .parse::<u8>()
                .with_context(|| format!("Invalid cell {token:?}"))?;
        }
        ensure!(tokens.next().is_none(), "Trailing input after 9 cells");
        Board::from_cells(cells)
    }
}
