use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("expected 81 digits/dots, got {0}")]
    WrongLength(usize),
}

/// A 9x9 grid of cell values, row-major. 0 is the empty sentinel, 1..=9 digits.
///
/// Boards are plain value data: `clone()` is a deep copy, and the engine never
/// hands out aliases into its working state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[u8; 9]; 9],
}

impl Board {
    pub fn empty() -> Self {
        Self { cells: [[0; 9]; 9] }
    }

    pub fn from_rows(rows: [[u8; 9]; 9]) -> Self {
        Self { cells: rows }
    }

    /// Accepts 81 digits with `0`, `.` or `_` for blanks; whitespace and any
    /// other decoration are ignored.
    pub fn parse(text: &str) -> Result<Self, ParseBoardError> {
        let mut digits = Vec::with_capacity(81);
        for ch in text.chars() {
            match ch {
                '1'..='9' => digits.push(ch as u8 - b'0'),
                '0' | '.' | '_' => digits.push(0),
                _ => {}
            }
        }
        if digits.len() != 81 {
            return Err(ParseBoardError::WrongLength(digits.len()));
        }
        let mut b = Self::empty();
        for r in 0..9 {
            for c in 0..9 {
                b.cells[r][c] = digits[r * 9 + c];
            }
        }
        Ok(b)
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        debug_assert!(value <= 9);
        self.cells[row][col] = value;
    }

    pub fn row_values(&self, r: usize) -> [u8; 9] {
        self.cells[r]
    }

    pub fn col_values(&self, c: usize) -> [u8; 9] {
        let mut a = [0; 9];
        for r in 0..9 {
            a[r] = self.cells[r][c];
        }
        a
    }

    /// Values of the 3x3 box containing (row, col); the box origin is
    /// (row - row % 3, col - col % 3).
    pub fn box_values(&self, row: usize, col: usize) -> [u8; 9] {
        let (br, bc) = (row - row % 3, col - col % 3);
        let mut a = [0; 9];
        let mut i = 0;
        for r in br..br + 3 {
            for c in bc..bc + 3 {
                a[i] = self.cells[r][c];
                i += 1;
            }
        }
        a
    }

    /// No duplicate non-zero digit in any row, column or box.
    pub fn is_valid(&self) -> bool {
        for r in 0..9 {
            if !no_dupes(self.row_values(r)) {
                return false;
            }
        }
        for c in 0..9 {
            if !no_dupes(self.col_values(c)) {
                return false;
            }
        }
        for br in (0..9).step_by(3) {
            for bc in (0..9).step_by(3) {
                if !no_dupes(self.box_values(br, bc)) {
                    return false;
                }
            }
        }
        true
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|row| row.iter().all(|&v| v != 0))
    }

    /// Number of filled cells.
    pub fn clue_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != 0).count()
    }

    pub fn to_compact(&self) -> String {
        self.cells
            .iter()
            .flatten()
            .map(|&v| if v == 0 { '.' } else { (b'0' + v) as char })
            .collect()
    }
}

fn no_dupes(vals: [u8; 9]) -> bool {
    let mut seen = [false; 10];
    for v in vals {
        if v != 0 {
            if seen[v as usize] {
                return false;
            }
            seen[v as usize] = true;
        }
    }
    true
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for r in 0..9 {
            if r % 3 == 0 {
                writeln!(f, "+-------+-------+-------+")?;
            }
            for c in 0..9 {
                if c % 3 == 0 {
                    write!(f, "| ")?;
                }
                let v = self.cells[r][c];
                write!(f, "{} ", if v == 0 { '.' } else { (b'0' + v) as char })?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "+-------+-------+-------+")
    }
}
