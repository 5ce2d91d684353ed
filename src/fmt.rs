use std::fmt;

use crate::{Board, Heuristic};

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.cells.iter().enumerate() {
            if i > 0 {
                if i % 3 == 0 { "\n" } else { " " }.fmt(f)?;
            }
            v.fmt(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.label().fmt(f)
    }
}
