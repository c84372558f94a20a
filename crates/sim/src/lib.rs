//! srsbot sim crate - seeded headless games driven by a [`Brain`].

pub mod config;
pub mod game;
pub mod spawner;

use std::sync::Arc;

#[cfg(feature = "rayon")]
use rayon::prelude::*;
use srsbot_core::{CatalogError, PieceCatalog};
use srsbot_search::Brain;
use thiserror::Error;

pub use config::{ConfigError, GameConfig};
pub use game::{Game, GameStats, GameSummary};
pub use spawner::{spawn_position, PieceSpawner};

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid game config: {0}")]
    Config(#[from] ConfigError),
    #[error("piece catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// A finished game and its final board, rendered.
#[derive(Clone, Debug)]
pub struct GameRecord {
    pub summary: GameSummary,
    pub final_board: String,
}

/// Plays one game per seed, in seed order. Games run in parallel with the
/// `rayon` feature.
pub fn run_batch<B>(
    config: &GameConfig,
    brain: &B,
    seeds: &[u64],
    max_pieces: u32,
) -> Result<Vec<GameRecord>, SimError>
where
    B: Brain + Sync + ?Sized,
{
    config.validate()?;
    let catalog = Arc::new(PieceCatalog::new()?);
    let play_one = |&seed: &u64| -> Result<GameRecord, SimError> {
        let mut game = Game::new(config.clone(), Arc::clone(&catalog), seed)?;
        let summary = game.play(brain, max_pieces);
        Ok(GameRecord {
            summary,
            final_board: game.board().to_string(),
        })
    };

    #[cfg(feature = "rayon")]
    let records = seeds.par_iter().map(play_one).collect();
    #[cfg(not(feature = "rayon"))]
    let records = seeds.iter().map(play_one).collect();
    records
}
