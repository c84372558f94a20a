//! Headless game driver: spawns pieces, feeds brain moves to a board and
//! applies gravity.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use srsbot_core::{Action, MoveResult, Piece, PieceCatalog, PieceType};
use srsbot_engine::Board;
use srsbot_search::Brain;

use crate::config::{ConfigError, GameConfig};
use crate::spawner::{spawn_position, PieceSpawner};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub pieces_placed: u32,
    /// Rows cleared over the whole game.
    pub rows_cleared: u64,
    pub ticks: u64,
    /// Spawned pieces per type.
    pub spawned: FxHashMap<PieceType, u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub seed: u64,
    pub game_over: bool,
    pub max_height: usize,
    pub stats: GameStats,
}

pub struct Game {
    config: GameConfig,
    catalog: Arc<PieceCatalog>,
    seed: u64,
    spawner: PieceSpawner,
    board: Board,
    running: bool,
    piece_ticks: u32,
    stats: GameStats,
}

impl Game {
    pub fn new(config: GameConfig, catalog: Arc<PieceCatalog>, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.width, config.board_height(), Arc::clone(&catalog));
        Ok(Self {
            config,
            catalog,
            seed,
            spawner: PieceSpawner::new(seed),
            board,
            running: false,
            piece_ticks: 0,
            stats: GameStats::default(),
        })
    }

    /// Resets to an empty board, rewinds the spawner and spawns the first piece.
    pub fn start(&mut self) {
        self.board = Board::new(
            self.config.width,
            self.config.board_height(),
            Arc::clone(&self.catalog),
        );
        self.spawner = PieceSpawner::new(self.seed);
        self.stats = GameStats::default();
        self.running = true;
        self.spawn_next();
    }

    /// Applies one action. Returns `None` once the game is over.
    pub fn tick(&mut self, action: Action) -> Option<MoveResult> {
        if !self.running {
            return None;
        }
        let had_piece = self.board.current_piece().is_some();
        let result = self.board.apply(action);
        self.stats.ticks += 1;
        self.piece_ticks += 1;
        self.stats.rows_cleared += self.board.rows_cleared() as u64;
        let placed = had_piece && self.board.current_piece().is_none();
        if placed {
            self.stats.pieces_placed += 1;
        }

        let topped_out = self.board.max_height() > self.config.visible_height;
        match result {
            // a Drop places without a Place result; the next piece waits for NoPiece
            MoveResult::Success | MoveResult::OutBounds => {
                if placed && topped_out {
                    self.running = false;
                }
            }
            MoveResult::Place | MoveResult::NoPiece => {
                if topped_out {
                    self.running = false;
                } else {
                    self.spawn_next();
                }
            }
        }
        Some(result)
    }

    /// Plays from a fresh start until the game ends or `max_pieces` pieces
    /// have been placed.
    pub fn play<B: Brain + ?Sized>(&mut self, brain: &B, max_pieces: u32) -> GameSummary {
        self.start();
        let mut since_gravity = 0;
        while self.running && self.stats.pieces_placed < max_pieces {
            if self.piece_ticks >= self.config.max_ticks_per_piece {
                self.tick(Action::Drop);
                continue;
            }
            let action = brain.next_move(&self.board);
            self.tick(action);
            since_gravity += 1;
            if since_gravity >= self.config.gravity_interval {
                since_gravity = 0;
                self.tick(Action::Down);
            }
        }
        self.summary()
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            seed: self.seed,
            game_over: !self.running,
            max_height: self.board.max_height(),
            stats: self.stats.clone(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    fn spawn_next(&mut self) {
        let piece = Piece::spawn(self.spawner.next_kind());
        let width = self.catalog.shape(piece).width();
        let at = spawn_position(self.config.width, self.config.visible_height, width);
        self.piece_ticks = 0;
        if self.board.next_piece(piece, at).is_err() {
            self.running = false;
            return;
        }
        *self.stats.spawned.entry(piece.kind()).or_insert(0) += 1;
    }
}
