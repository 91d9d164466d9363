//! Human-versus-engine game sessions.

use super::action::Move;
use super::engine::Engine;
use super::error::{MoveError, MoveErrorKind};
use super::selector::{RandomTieBreak, Response, TieBreak, respond};
use super::{GameStatus, Grid, Mark, Position, State};
use std::rc::Rc;
use tracing::{info, instrument, warn};

/// What happened when the human moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// The engine answered by filling this square.
    Moved(Position),
    /// The game was over before the call; nothing was applied.
    AlreadyDecided,
    /// The human's move finished the game; the engine did not move.
    HumanEndedGame,
}

impl Reply {
    /// Coordinate pair for callers that speak in integers.
    ///
    /// `(-1, -1)` means the game was already decided and `(-2, -2)` means the
    /// human's move ended it.
    pub fn coords(self) -> (i32, i32) {
        match self {
            Reply::Moved(pos) => (pos.row() as i32, pos.col() as i32),
            Reply::AlreadyDecided => (-1, -1),
            Reply::HumanEndedGame => (-2, -2),
        }
    }
}

impl std::fmt::Display for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reply::Moved(pos) => write!(f, "O plays {}", pos),
            Reply::AlreadyDecided => write!(f, "Game is already over"),
            Reply::HumanEndedGame => write!(f, "Game over after X's move"),
        }
    }
}

/// Starts a session on an empty board with X to move and random tie-breaks.
pub fn new_game(engine: Rc<Engine>) -> CrossAi {
    CrossAi::new(engine, RandomTieBreak::from_entropy())
}

/// A game between a human (X) and the engine (O).
///
/// The current state is replaced after every move. Sessions built on the same
/// [`Engine`] share its memo tables.
#[derive(Debug)]
pub struct CrossAi<T = RandomTieBreak> {
    engine: Rc<Engine>,
    current: State,
    tie: T,
    history: Vec<Move>,
}

impl<T: TieBreak> CrossAi<T> {
    /// Creates a session on an empty board with X to move.
    #[instrument(skip(engine, tie))]
    pub fn new(engine: Rc<Engine>, tie: T) -> Self {
        info!("Starting new game");
        Self {
            engine,
            current: State::initial(),
            tie,
            history: Vec::new(),
        }
    }

    /// Plays the human's mark at (row, col) and answers with the engine's move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if the cell is off the board or occupied. The
    /// session is unchanged in that case. A finished game answers
    /// [`Reply::AlreadyDecided`] before the coordinates are looked at.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn play(&mut self, row: usize, col: usize) -> Result<Reply, MoveError> {
        if self.engine.is_terminal(self.current) {
            info!("Move after game end ignored");
            return Ok(Reply::AlreadyDecided);
        }

        let pos = Position::from_coords(row, col).ok_or_else(|| {
            warn!(row, col, "Rejected off-board move");
            MoveError::new(MoveErrorKind::OutOfRange { row, col })
        })?;
        self.place(pos)
    }

    /// Same as [`play`](Self::play) with a typed position.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if the square is occupied.
    #[instrument(skip(self), fields(position = %pos))]
    pub fn play_position(&mut self, pos: Position) -> Result<Reply, MoveError> {
        if self.engine.is_terminal(self.current) {
            info!("Move after game end ignored");
            return Ok(Reply::AlreadyDecided);
        }
        self.place(pos)
    }

    /// Applies the human move on a live game and lets the engine answer.
    fn place(&mut self, pos: Position) -> Result<Reply, MoveError> {
        if !self.current.grid().is_empty(pos) {
            warn!("Rejected move onto occupied square");
            return Err(MoveError::new(MoveErrorKind::Occupied(pos)));
        }

        let human = self.current.to_move();
        self.current = self.current.play(pos);
        self.history.push(Move::new(human, pos));
        info!(mark = %human, "Human moved");

        match respond(&self.engine, self.current, &mut self.tie) {
            Response::Terminal => {
                info!(status = %self.status(), "Game ended on human move");
                Ok(Reply::HumanEndedGame)
            }
            Response::Move { position, next } => {
                let engine_mark = self.current.to_move();
                self.current = next;
                self.history.push(Move::new(engine_mark, position));
                info!(mark = %engine_mark, position = %position, "Engine moved");
                if self.is_over() {
                    info!(status = %self.status(), "Game ended on engine move");
                }
                Ok(Reply::Moved(position))
            }
        }
    }

    /// The current state.
    pub fn state(&self) -> State {
        self.current
    }

    /// The current grid.
    pub fn grid(&self) -> Grid {
        self.current.grid()
    }

    /// The mark to move next.
    pub fn to_move(&self) -> Mark {
        self.current.to_move()
    }

    /// Status of the current grid.
    pub fn status(&self) -> GameStatus {
        self.current.status()
    }

    /// Whether no further move will be accepted.
    pub fn is_over(&self) -> bool {
        self.engine.is_terminal(self.current)
    }

    /// Moves played so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The engine backing this session.
    pub fn engine(&self) -> &Rc<Engine> {
        &self.engine
    }
}
