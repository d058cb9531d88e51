use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::RulesError;
use crate::types::{BOARD_SIZE, Cell, Color, PieceCount, Position};

const BORDER: char = '*';

/// The 8x8 playing field. Holds cell contents only; no game logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates the initial board:
    /// (3,3)=white, (3,4)=black, (4,3)=black, (4,4)=white.
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        cells[3][3] = Cell::White;
        cells[3][4] = Cell::Black;
        cells[4][3] = Cell::Black;
        cells[4][4] = Cell::White;
        Self { cells }
    }

    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Parses an 8x8 diagram of `.`, `X` (black) and `O` (white).
    /// Whitespace is ignored.
    pub fn from_diagram(diagram: &str) -> Result<Self, RulesError> {
        let glyphs: Vec<char> = diagram.chars().filter(|c| !c.is_whitespace()).collect();
        if glyphs.len() != BOARD_SIZE * BOARD_SIZE {
            return Err(RulesError::InvalidDiagram(format!(
                "expected {} cells, got {}",
                BOARD_SIZE * BOARD_SIZE,
                glyphs.len()
            )));
        }

        let mut board = Self::empty();
        for (pos, glyph) in Position::all().zip(glyphs) {
            let cell = match glyph {
                '.' => Cell::Empty,
                other => Cell::from(other.to_string().parse::<Color>()?),
            };
            board.put(pos, cell);
        }
        Ok(board)
    }

    /// Returns the cell at `(row, col)`, failing outside the 8x8 field.
    pub fn get(&self, row: i32, col: i32) -> Result<Cell, RulesError> {
        Position::new(row, col).map(|pos| self.cell(pos))
    }

    /// Overwrites the cell at `(row, col)`, failing outside the 8x8 field.
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> Result<(), RulesError> {
        let pos = Position::new(row, col)?;
        self.put(pos, cell);
        Ok(())
    }

    /// Returns the cell at an already validated position.
    pub fn cell(&self, pos: Position) -> Cell {
        let (row, col) = pos.index();
        self.cells[row][col]
    }

    pub(crate) fn put(&mut self, pos: Position, cell: Cell) {
        let (row, col) = pos.index();
        self.cells[row][col] = cell;
    }

    /// Recounts pieces from the grid.
    pub fn count(&self) -> PieceCount {
        let mut counts = PieceCount { black: 0, white: 0 };
        for cell in self.cells.iter().flatten() {
            if let Some(color) = cell.color() {
                counts.add(color, 1);
            }
        }
        counts
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        (BOARD_SIZE * BOARD_SIZE) as u8 - self.count().total()
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; BOARD_SIZE * BOARD_SIZE] {
        let mut out = [0u8; BOARD_SIZE * BOARD_SIZE];
        for (slot, cell) in out.iter_mut().zip(self.cells.iter().flatten()) {
            *slot = cell.code();
        }
        out
    }

    /// Text rendering with a one-cell `*` border, cells separated by two spaces.
    pub fn render(&self) -> String {
        let border_row = vec![BORDER; BOARD_SIZE + 2];
        let mut rows = Vec::with_capacity(BOARD_SIZE + 2);
        rows.push(border_row.clone());
        for line in &self.cells {
            let mut row = Vec::with_capacity(BOARD_SIZE + 2);
            row.push(BORDER);
            row.extend(line.iter().map(|cell| cell.glyph()));
            row.push(BORDER);
            rows.push(row);
        }
        rows.push(border_row);

        rows.iter()
            .map(|row| {
                row.iter()
                    .map(char::to_string)
                    .collect::<Vec<_>>()
                    .join("  ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Serialized as the flat 64-cell array of [`Board::to_array`].
impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.to_array())
    }
}
