use crate::board::Board;

/// Conflict scan for a candidate digit: false if `value` already appears in
/// the row, the column, or the 3x3 box containing (row, col).
///
/// The scan covers the target cell itself, so callers clear (or ignore) the
/// cell's own occupant before testing a candidate against it.
pub(crate) fn is_safe(board: &Board, row: usize, col: usize, value: u8) -> bool {
    for i in 0..9 {
        if board.get(row, i) == value || board.get(i, col) == value {
            return false;
        }
    }
    let (br, bc) = (row - row % 3, col - col % 3);
    for r in br..br + 3 {
        for c in bc..bc + 3 {
            if board.get(r, c) == value {
                return false;
            }
        }
    }
    true
}

/// Public entry point for live placement validation: rejects values outside
/// 1..=9, then applies the conflict scan.
pub fn is_placement_valid(board: &Board, row: usize, col: usize, value: u8) -> bool {
    if !(1..=9).contains(&value) {
        return false;
    }
    is_safe(board, row, col, value)
}
