use crate::board::Board;
use crate::types::{Cell, Color, Direction, DirectionSet, Position};

/// Returns `true` when placing `color` at `origin` would capture along `direction`.
///
/// The cell next to `origin` must hold the opponent, the run of opponent
/// pieces must continue without a gap, and it must be closed by one of
/// `color`'s own pieces before the edge.
pub fn scan(board: &Board, origin: Position, color: Color, direction: Direction) -> bool {
    let own = Cell::from(color);
    let opponent = Cell::from(color.opponent());
    let mut crossed = 0usize;

    for pos in origin.ray(direction) {
        let cell = board.cell(pos);
        if cell == opponent {
            crossed += 1;
        } else if cell == own {
            return crossed > 0;
        } else {
            return false;
        }
    }

    // Ran off the board without closing the line.
    false
}

/// Directions in which a move by `color` at `origin` captures.
///
/// An occupied `origin` never captures, whatever its neighbors hold. The move
/// is legal iff the returned set is non-empty.
pub fn legal_directions(board: &Board, origin: Position, color: Color) -> DirectionSet {
    if !board.cell(origin).is_empty() {
        return DirectionSet::empty();
    }

    Direction::ALL
        .into_iter()
        .filter(|&direction| scan(board, origin, color, direction))
        .collect()
}
