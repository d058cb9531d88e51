use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::RulesError;

pub const BOARD_SIZE: usize = 8;

/// One of the two playable colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    /// Returns the other color.
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Character used for this color's pieces in rendered boards.
    pub fn glyph(self) -> char {
        match self {
            Color::Black => 'X',
            Color::White => 'O',
        }
    }

    /// Returns the lowercase color name.
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::White => "white",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" => Ok(Color::Black),
            "O" => Ok(Color::White),
            other if other.eq_ignore_ascii_case("black") => Ok(Color::Black),
            other if other.eq_ignore_ascii_case("white") => Ok(Color::White),
            other => Err(RulesError::InvalidColor(other.to_string())),
        }
    }
}

/// Content of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// Returns the color of the piece in the cell, if any.
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
        }
    }

    /// Returns `true` when no piece occupies the cell.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Returns `.` for empty, otherwise the color glyph.
    pub fn glyph(self) -> char {
        self.color().map_or('.', Color::glyph)
    }

    /// `0` for empty, `1` for black, `2` for white.
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Black => 1,
            Cell::White => 2,
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// A board coordinate, zero-based, always inside the 8x8 field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Validates a raw coordinate pair.
    pub fn new(row: i32, col: i32) -> Result<Self, RulesError> {
        if in_bounds(row, col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(RulesError::OutOfBounds { row, col })
        }
    }

    /// The neighboring position in `direction`, or `None` past the edge.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.delta();
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        in_bounds(row, col).then(|| Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Positions strictly after `self` walking toward `direction`, up to the edge.
    pub fn ray(self, direction: Direction) -> impl Iterator<Item = Position> {
        std::iter::successors(self.step(direction), move |pos| pos.step(direction))
    }

    /// Every position of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Position { row, col }))
    }

    pub(crate) fn index(self) -> (usize, usize) {
        (self.row as usize, self.col as usize)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}

/// The eight compass directions, in canonical scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::S,
        Direction::E,
        Direction::W,
        Direction::NE,
        Direction::NW,
        Direction::SE,
        Direction::SW,
    ];

    /// `(row, col)` step. North is toward row 0.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::N => (-1, 0),
            Direction::S => (1, 0),
            Direction::E => (0, 1),
            Direction::W => (0, -1),
            Direction::NE => (-1, 1),
            Direction::NW => (-1, -1),
            Direction::SE => (1, 1),
            Direction::SW => (1, -1),
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// A set of directions, iterated in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DirectionSet(u8);

impl DirectionSet {
    /// Returns a set with no directions.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Adds `direction` to the set.
    pub fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    /// Returns `true` if `direction` is in the set.
    pub fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    /// Returns `true` if no direction captures.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of directions in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates the set in canonical order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = Self::empty();
        for direction in iter {
            set.insert(direction);
        }
        set
    }
}

/// Per-color piece tally, maintained incrementally alongside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PieceCount {
    pub black: u8,
    pub white: u8,
}

impl PieceCount {
    /// Returns the opening tallies, 2 and 2.
    pub fn initial() -> Self {
        Self { black: 2, white: 2 }
    }

    /// Returns the tally of `color`.
    pub fn get(&self, color: Color) -> u8 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    /// Returns the number of occupied cells.
    pub fn total(&self) -> u8 {
        self.black + self.white
    }

    pub(crate) fn add(&mut self, color: Color, n: u8) {
        match color {
            Color::Black => self.black += n,
            Color::White => self.white += n,
        }
    }

    pub(crate) fn sub(&mut self, color: Color, n: u8) {
        match color {
            Color::Black => self.black -= n,
            Color::White => self.white -= n,
        }
    }
}

impl Default for PieceCount {
    fn default() -> Self {
        Self::initial()
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Black,
    White,
    Tie,
}

impl Winner {
    /// Strictly greater count wins; equal counts tie.
    pub fn from_counts(counts: PieceCount) -> Self {
        use std::cmp::Ordering;
        match counts.black.cmp(&counts.white) {
            Ordering::Greater => Winner::Black,
            Ordering::Less => Winner::White,
            Ordering::Equal => Winner::Tie,
        }
    }

    /// Returns the winning color, or `None` for a tie.
    pub fn color(self) -> Option<Color> {
        match self {
            Winner::Black => Some(Color::Black),
            Winner::White => Some(Color::White),
            Winner::Tie => None,
        }
    }
}

/// Where the turn state machine stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "camelCase")]
pub enum Status {
    /// No move made yet and no opening color configured: either color may open.
    Opening,
    AwaitingMove(Color),
    Ended(Winner),
}

impl Status {
    /// Returns `true` once no further moves are accepted.
    pub fn is_ended(self) -> bool {
        matches!(self, Status::Ended(_))
    }

    /// Returns the winner once ended.
    pub fn winner(self) -> Option<Winner> {
        match self {
            Status::Ended(winner) => Some(winner),
            _ => None,
        }
    }
}

/// Public game snapshot returned to hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub board: Board,
    pub counts: PieceCount,
    pub status: Status,
    /// Contract: `true` exactly when neither color has a legal move.
    pub terminated: bool,
    /// Contract: `Some` exactly when `terminated`.
    pub winner: Option<Winner>,
}

/// What happened to a single move attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MoveOutcome {
    /// The target is occupied or captures nothing. Nothing changed; the
    /// mover's full set of legal moves is returned so the caller can re-prompt.
    #[serde(rename_all = "camelCase")]
    Rejected { legal_moves: Vec<Position> },
    /// Contract: `next` equals the mover when the opponent was forced to pass.
    #[serde(rename_all = "camelCase")]
    Applied {
        board: Board,
        counts: PieceCount,
        flipped: Vec<Position>,
        next: Color,
    },
    #[serde(rename_all = "camelCase")]
    AppliedAndEnded {
        board: Board,
        counts: PieceCount,
        flipped: Vec<Position>,
        winner: Winner,
    },
}

impl MoveOutcome {
    /// Returns `true` for a rejected attempt.
    pub fn is_rejected(&self) -> bool {
        matches!(self, MoveOutcome::Rejected { .. })
    }
}
