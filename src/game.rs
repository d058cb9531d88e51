use tracing::{debug, info, instrument};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::{ConfigError, RulesError};
use crate::player::{Player, Players};
use crate::rules;
use crate::types::{Color, GameState, MoveOutcome, PieceCount, Position, Status, Winner};

/// One game of Othello: board, tallies and turn state.
///
/// Each instance owns its board; run several games by creating several values.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    counts: PieceCount,
    status: Status,
    players: Option<Players>,
    strict_turns: bool,
}

impl Game {
    /// Standard opening position. Either color may make the first move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            counts: PieceCount::initial(),
            status: Status::Opening,
            players: None,
            strict_turns: true,
        }
    }

    /// Standard opening position with named players for announcements.
    pub fn with_players(players: Players) -> Self {
        Self {
            players: Some(players),
            ..Self::new()
        }
    }

    /// Builds a game from validated configuration.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            status: config
                .first_player
                .map_or(Status::Opening, Status::AwaitingMove),
            players: config.players()?,
            strict_turns: config.strict_turns,
            ..Self::new()
        })
    }

    /// Starts from an arbitrary position with `to_move` awaited.
    /// Tallies are recounted from the board.
    pub fn from_board(board: Board, to_move: Color) -> Self {
        let mut game = Self {
            counts: board.count(),
            board,
            ..Self::new()
        };
        match game.turn_after(to_move.opponent()) {
            Some(next) => game.status = Status::AwaitingMove(next),
            None => {
                game.finish();
            }
        }
        game
    }

    /// Lets any color move at any time while the game is running.
    pub fn set_strict_turns(&mut self, strict: bool) {
        self.strict_turns = strict;
    }

    /// Attempts a move by `color` at `(row, col)`.
    ///
    /// An illegal target is not an error: it yields [`MoveOutcome::Rejected`]
    /// and leaves the game untouched.
    #[instrument(level = "debug", skip(self))]
    pub fn attempt_move(
        &mut self,
        color: Color,
        row: i32,
        col: i32,
    ) -> Result<MoveOutcome, RulesError> {
        if self.status.is_ended() {
            return Err(RulesError::GameOver);
        }
        let pos = Position::new(row, col)?;
        if let Status::AwaitingMove(expected) = self.status
            && self.strict_turns
            && expected != color
        {
            return Err(RulesError::WrongTurn {
                expected,
                got: color,
            });
        }

        let directions = rules::legal_directions(&self.board, pos, color);
        if directions.is_empty() {
            let legal_moves = rules::legal_moves(&self.board, color);
            debug!(%pos, %color, legal = legal_moves.len(), "move rejected");
            return Ok(MoveOutcome::Rejected { legal_moves });
        }

        let flipped = rules::apply(&mut self.board, &mut self.counts, pos, color, directions)?;
        debug!(%pos, %color, flipped = flipped.len(), "move applied");

        Ok(match self.turn_after(color) {
            Some(next) => {
                self.status = Status::AwaitingMove(next);
                MoveOutcome::Applied {
                    board: self.board,
                    counts: self.counts,
                    flipped,
                    next,
                }
            }
            None => MoveOutcome::AppliedAndEnded {
                winner: self.finish(),
                board: self.board,
                counts: self.counts,
                flipped,
            },
        })
    }

    /// Color awaited after `mover` has played, or `None` when neither color
    /// can move.
    fn turn_after(&self, mover: Color) -> Option<Color> {
        let opponent = mover.opponent();
        if rules::has_legal_move(&self.board, opponent) {
            return Some(opponent);
        }
        if rules::has_legal_move(&self.board, mover) {
            info!(passed = %opponent, "no legal move, turn passes back");
            return Some(mover);
        }
        None
    }

    fn finish(&mut self) -> Winner {
        let winner = Winner::from_counts(self.counts);
        info!(
            black = self.counts.black,
            white = self.counts.white,
            ?winner,
            "game ended"
        );
        self.status = Status::Ended(winner);
        winner
    }

    /// Returns every legal destination for `color`.
    pub fn legal_moves(&self, color: Color) -> Vec<Position> {
        rules::legal_moves(&self.board, color)
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the running piece tallies.
    pub fn counts(&self) -> PieceCount {
        self.counts
    }

    /// Returns where the turn state machine stands.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the registered player of `color`, if any.
    pub fn player(&self, color: Color) -> Option<&Player> {
        self.players.as_ref().map(|players| players.get(color))
    }

    /// Returns a snapshot for hosts.
    pub fn state(&self) -> GameState {
        GameState {
            board: self.board,
            counts: self.counts,
            status: self.status,
            terminated: self.status.is_ended(),
            winner: self.status.winner(),
        }
    }

    /// Final tallies, once the game has ended.
    pub fn score_line(&self) -> Option<String> {
        self.status.winner().map(|_| {
            format!(
                "Game is ended white piece: {} black piece: {}",
                self.counts.white, self.counts.black
            )
        })
    }

    /// Names the winner, once the game has ended.
    pub fn winner_announcement(&self) -> Option<String> {
        let winner = self.status.winner()?;
        let Some(color) = winner.color() else {
            return Some("It's a tie".to_string());
        };
        Some(match self.player(color) {
            Some(player) => format!("Winner is {color} player: {}", player.name()),
            None => format!("Winner is {color} player"),
        })
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, to_move: Color) {
        let players = self.players.take();
        *self = Self {
            players,
            strict_turns: self.strict_turns,
            ..Self::from_board(board, to_move)
        };
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
