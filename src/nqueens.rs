//! Backtracking N-Queens solver that records every move, so a caller can
//! replay the search one frame at a time.

use log::{debug, trace};

use crate::error::{Error, Result};

pub const MIN_BOARD_SIZE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Place { row: usize, col: usize },
    Remove { row: usize, col: usize },
}

/// One queen per row at most; `queens[row]` is its column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    queens: Vec<Option<usize>>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            queens: vec![None; size],
        }
    }

    pub fn size(&self) -> usize {
        self.queens.len()
    }

    pub fn queen(&self, row: usize) -> Option<usize> {
        self.queens.get(row).copied().flatten()
    }

    /// On the board, and no queen in an earlier row shares the column or a
    /// diagonal.
    pub fn is_safe(&self, row: usize, col: usize) -> bool {
        if row >= self.size() || col >= self.size() {
            return false;
        }
        self.queens[..row].iter().enumerate().all(|(r, q)| match *q {
            Some(c) => c != col && r.abs_diff(row) != c.abs_diff(col),
            None => true,
        })
    }

    /// Returns false and leaves the board alone when the step is off the board.
    pub fn apply(&mut self, step: Step) -> bool {
        let (row, col, queen) = match step {
            Step::Place { row, col } => (row, col, Some(col)),
            Step::Remove { row, col } => (row, col, None),
        };
        if col >= self.size() {
            return false;
        }
        match self.queens.get_mut(row) {
            Some(slot) => {
                *slot = queen;
                true
            }
            None => false,
        }
    }

    /// Column per row, once every row holds a queen.
    pub fn columns(&self) -> Option<Vec<usize>> {
        self.queens.iter().copied().collect()
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.size() * (self.size() * 2 + 1));
        for queen in &self.queens {
            let row: Vec<&str> = (0..self.size())
                .map(|col| if *queen == Some(col) { "Q" } else { "." })
                .collect();
            out.push_str(&row.join(" "));
            out.push('\n');
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub board: Board,
    pub steps: Vec<Step>,
}

/// Places queens row by row, trying columns left to right, and stops at the
/// first complete board.
pub fn solve(n: usize) -> Result<Solution> {
    if n < MIN_BOARD_SIZE {
        return Err(Error::BoardTooSmall(n));
    }
    debug!("Solving {}-queens", n);

    let mut board = Board::new(n);
    let mut steps = Vec::new();
    let solved = place_row(&mut board, 0, &mut steps);
    debug_assert!(solved, "every board of size >= 4 has a solution");
    debug!("Search finished after {} steps", steps.len());

    Ok(Solution { board, steps })
}

fn place_row(board: &mut Board, row: usize, steps: &mut Vec<Step>) -> bool {
    if row == board.size() {
        return true;
    }

    for col in 0..board.size() {
        if !board.is_safe(row, col) {
            continue;
        }
        trace!("Queen at ({}, {})", row, col);
        let place = Step::Place { row, col };
        board.apply(place);
        steps.push(place);

        if place_row(board, row + 1, steps) {
            return true;
        }

        trace!("Backtracking from ({}, {})", row, col);
        let remove = Step::Remove { row, col };
        board.apply(remove);
        steps.push(remove);
    }
    false
}
