use tracing::error;

use crate::board::Board;
use crate::error::RulesError;
use crate::types::{Cell, Color, Direction, DirectionSet, PieceCount, Position};

/// Places `color` at `origin` and flips every captured run in `directions`.
/// Returns the flipped positions in direction order, nearest first.
///
/// Caller contract: `directions` comes from
/// [`legal_directions`](super::legal_directions) for this board, origin and
/// color. If any ray fails to close on `color`, nothing is mutated and
/// [`RulesError::InternalInvariantViolation`] is returned.
pub fn apply(
    board: &mut Board,
    counts: &mut PieceCount,
    origin: Position,
    color: Color,
    directions: DirectionSet,
) -> Result<Vec<Position>, RulesError> {
    if !board.cell(origin).is_empty() {
        return Err(violation(format!("capture origin {origin} is occupied")));
    }
    if directions.is_empty() {
        return Err(violation(format!("capture at {origin} has no directions")));
    }

    let mut flipped = Vec::new();
    for direction in directions.iter() {
        collect_run(board, origin, color, direction, &mut flipped)?;
    }

    let own = Cell::from(color);
    board.put(origin, own);
    counts.add(color, 1);

    for &pos in &flipped {
        board.put(pos, own);
    }
    let n = flipped.len() as u8;
    counts.add(color, n);
    counts.sub(color.opponent(), n);

    Ok(flipped)
}

/// Appends the opponent run from `origin` toward `direction` to `out`.
fn collect_run(
    board: &Board,
    origin: Position,
    color: Color,
    direction: Direction,
    out: &mut Vec<Position>,
) -> Result<(), RulesError> {
    let own = Cell::from(color);
    let opponent = Cell::from(color.opponent());
    let start = out.len();

    for pos in origin.ray(direction) {
        match board.cell(pos) {
            cell if cell == opponent => out.push(pos),
            cell if cell == own && out.len() > start => return Ok(()),
            cell => {
                return Err(violation(format!(
                    "capture from {origin} toward {direction:?} hit {cell:?} at {pos}"
                )));
            }
        }
    }

    Err(violation(format!(
        "capture from {origin} toward {direction:?} ran off the board"
    )))
}

fn violation(detail: String) -> RulesError {
    error!(%detail, "capture invariant violated");
    RulesError::InternalInvariantViolation(detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::board;
    use crate::rules::legal_directions;

    fn pos(row: u8, col: u8) -> Position {
        Position { row, col }
    }

    #[test]
    fn place_flips_opponent_stones_and_updates_counts() {
        let mut board = Board::new();
        let mut counts = PieceCount::initial();
        let origin = pos(2, 3);
        let dirs = legal_directions(&board, origin, Color::Black);

        let flipped = apply(&mut board, &mut counts, origin, Color::Black, dirs).unwrap();

        assert_eq!(flipped, vec![pos(3, 3)]);
        assert_eq!(counts, PieceCount { black: 4, white: 1 });
        assert_eq!(board.count(), counts);
        assert_eq!(board.cell(pos(2, 3)), Cell::Black);
        assert_eq!(board.cell(pos(3, 3)), Cell::Black);
        assert_eq!(board.cell(pos(4, 4)), Cell::White);
    }

    #[test]
    fn two_capture_lines_flip_both_runs() {
        let mut board = board(
            "
            ........
            ........
            ..X.....
            ...OO...
            .XOO....
            ........
            ........
            ........
            ",
        );
        let mut counts = board.count();
        let origin = pos(4, 4);
        let dirs = legal_directions(&board, origin, Color::Black);
        assert_eq!(dirs.iter().collect::<Vec<_>>(), vec![Direction::W, Direction::NW]);

        let flipped = apply(&mut board, &mut counts, origin, Color::Black, dirs).unwrap();

        assert_eq!(flipped, vec![pos(4, 3), pos(4, 2), pos(3, 3)]);
        // One placement plus three captures.
        assert_eq!(counts, PieceCount { black: 6, white: 1 });
        assert_eq!(board.count(), counts);
        // The north run was never closed and stays white.
        assert_eq!(board.cell(pos(3, 4)), Cell::White);
    }

    #[test]
    fn stops_at_the_first_own_piece() {
        let mut board = board(
            "
            OXXOXXX.
            ........
            ........
            ........
            ........
            ........
            ........
            ........
            ",
        );
        let mut counts = board.count();
        let dirs = legal_directions(&board, pos(0, 7), Color::White);

        let flipped = apply(&mut board, &mut counts, pos(0, 7), Color::White, dirs).unwrap();

        assert_eq!(flipped, vec![pos(0, 6), pos(0, 5), pos(0, 4)]);
        assert_eq!(board.cell(pos(0, 2)), Cell::Black);
        assert_eq!(board.cell(pos(0, 1)), Cell::Black);
        assert_eq!(counts, PieceCount { black: 2, white: 6 });
    }

    #[test]
    fn unclosed_direction_is_an_invariant_violation_without_mutation() {
        let mut board = Board::new();
        let mut counts = PieceCount::initial();
        let before = (board, counts);
        // South from (2,3) is legal, east is not.
        let dirs: DirectionSet = [Direction::S, Direction::E].into_iter().collect();

        let err = apply(&mut board, &mut counts, pos(2, 3), Color::Black, dirs).unwrap_err();

        assert!(matches!(err, RulesError::InternalInvariantViolation(_)));
        assert_eq!((board, counts), before);
    }

    #[test]
    fn occupied_origin_or_no_directions_is_rejected() {
        let mut board = Board::new();
        let mut counts = PieceCount::initial();
        let all: DirectionSet = Direction::ALL.into_iter().collect();

        assert!(apply(&mut board, &mut counts, pos(3, 3), Color::Black, all).is_err());
        assert!(
            apply(
                &mut board,
                &mut counts,
                pos(2, 3),
                Color::Black,
                DirectionSet::empty()
            )
            .is_err()
        );
        assert_eq!(board, Board::new());
        assert_eq!(counts, PieceCount::initial());
    }
}
