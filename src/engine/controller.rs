//! Engine controller implementation.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;

use super::config::{ConfigError, EngineConfig};
use crate::board::{FenError, GameOutcome, Minimax, Move, MoveError, Position, SearchResult};

/// One bot search running on a worker thread.
///
/// The worker owns a clone of the position, so the live game stays usable
/// while it thinks. There is no way to stop it early.
pub struct SearchJob {
    result: Arc<Mutex<Option<SearchResult>>>,
    handle: JoinHandle<()>,
}

impl SearchJob {
    /// Start `searcher` on `position` in the background.
    pub fn spawn(mut position: Position, mut searcher: Minimax) -> io::Result<Self> {
        let result = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&result);
        let handle = thread::Builder::new()
            .name("search".to_string())
            .spawn(move || {
                let found = searcher.best_move(&mut position);
                *slot.lock() = Some(found);
            })?;
        Ok(SearchJob { result, handle })
    }

    /// The result if the search has finished, without blocking.
    #[must_use]
    pub fn poll(&self) -> Option<SearchResult> {
        *self.result.lock()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until the search ends. `None` if the worker panicked.
    pub fn wait(self) -> Option<SearchResult> {
        if self.handle.join().is_err() {
            log::debug!("search thread panicked");
        }
        *self.result.lock()
    }
}

/// A game in progress together with the searchers that drive bot sides.
pub struct Engine {
    config: EngineConfig,
    position: Position,
    /// Plays the bot color
    enemy_bot: Minimax,
    /// Plays the player's color for hints and bot-vs-bot games
    player_bot: Minimax,
    current_job: Option<SearchJob>,
}

impl Engine {
    /// Validate `config` and set up its start position.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let depth = config.search_depth();
        let mut engine = Engine {
            enemy_bot: Minimax::new(config.bot_color(), depth),
            player_bot: Minimax::new(config.player_color, depth),
            position: Position::empty(),
            config,
            current_job: None,
        };
        engine.new_game()?;
        Ok(engine)
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Mutable access for flag updates such as `highlight_moves`.
    pub fn position_mut(&mut self) -> &mut Position {
        &mut self.position
    }

    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        self.position.outcome()
    }

    /// Back to the configured start position with an empty log.
    pub fn new_game(&mut self) -> Result<(), ConfigError> {
        self.current_job = None;
        self.position = Position::new_game(&self.config.start_position).map_err(|error| {
            ConfigError::InvalidStartPosition {
                fen: self.config.start_position.clone(),
                error,
            }
        })?;
        Ok(())
    }

    /// Rewind to a logged position. See `Position::load_snapshot`.
    pub fn load_snapshot(&mut self, fen: &str) -> Result<(), FenError> {
        self.position.load_snapshot(fen)?;
        self.current_job = None;
        Ok(())
    }

    /// Whether a searcher should pick the next move.
    #[must_use]
    pub fn is_bot_turn(&self) -> bool {
        !self.position.outcome().is_over()
            && self.config.is_bot_driven(self.position.side_to_move())
    }

    /// Play a move entered by a human.
    pub fn play(&mut self, mv: Move) -> Result<GameOutcome, MoveError> {
        let outcome = self.position.make_move(mv)?;
        self.current_job = None;
        Ok(outcome)
    }

    /// Best move for the player's color, without playing it.
    pub fn hint(&mut self) -> SearchResult {
        self.player_bot.best_move(&mut self.position)
    }

    /// Search and play one move for the side to move if a bot drives it.
    ///
    /// Returns the move played, or `None` when it is a human's turn, the game
    /// is over, or the searcher found no move.
    pub fn bot(&mut self) -> Result<Option<Move>, MoveError> {
        if !self.is_bot_turn() {
            return Ok(None);
        }
        let searcher = if self.position.side_to_move() == self.config.player_color {
            &mut self.player_bot
        } else {
            &mut self.enemy_bot
        };
        let result = searcher.best_move(&mut self.position);
        self.apply(result)
    }

    /// Start a background search for the side to move.
    ///
    /// Does nothing and returns `false` when no bot is to move or a search is
    /// already running.
    pub fn start_search(&mut self) -> io::Result<bool> {
        if self.current_job.is_some() || !self.is_bot_turn() {
            return Ok(false);
        }
        let searcher = self.searcher_to_move().clone();
        self.current_job = Some(SearchJob::spawn(self.position.clone(), searcher)?);
        Ok(true)
    }

    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.current_job.is_some()
    }

    /// Play the background search's move once it is available.
    pub fn poll_search(&mut self) -> Result<Option<Move>, MoveError> {
        let result = match self.current_job.as_ref().and_then(SearchJob::poll) {
            Some(result) => result,
            None => return Ok(None),
        };
        self.current_job = None;
        self.apply(result)
    }

    /// Block on the background search and play its move.
    pub fn finish_search(&mut self) -> Result<Option<Move>, MoveError> {
        match self.current_job.take().and_then(SearchJob::wait) {
            Some(result) => self.apply(result),
            None => Ok(None),
        }
    }

    fn searcher_to_move(&self) -> &Minimax {
        if self.position.side_to_move() == self.config.player_color {
            &self.player_bot
        } else {
            &self.enemy_bot
        }
    }

    fn apply(&mut self, result: SearchResult) -> Result<Option<Move>, MoveError> {
        match result.best_move {
            Some(mv) => {
                self.position.make_move(mv)?;
                Ok(Some(mv))
            }
            None => Ok(None),
        }
    }
}
