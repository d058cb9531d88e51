use crate::board::Board;
use crate::rules::scan::legal_directions;
use crate::types::{Color, Position};

/// Every legal destination for `color`, in row-major order.
///
/// An empty result means `color` has to pass.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Position> {
    Position::all()
        .filter(|&pos| !legal_directions(board, pos, color).is_empty())
        .collect()
}

pub fn has_legal_move(board: &Board, color: Color) -> bool {
    Position::all().any(|pos| !legal_directions(board, pos, color).is_empty())
}
