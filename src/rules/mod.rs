//! Move legality and capture rules.
//!
//! Every function here takes the board by reference and keeps no state of its
//! own, so independent games never interfere.

pub mod capture;
pub mod moves;
pub mod scan;

pub use capture::apply;
pub use moves::{has_legal_move, legal_moves};
pub use scan::{legal_directions, scan};

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::board::Board;

    /// Builds a board from an 8x8 diagram, panicking on typos.
    pub fn board(diagram: &str) -> Board {
        Board::from_diagram(diagram).expect("valid test diagram")
    }
}
