use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use srsbot_eval::EvalWeights;
use srsbot_search::{BaselineBrain, Brain, HeuristicBrain};
use srsbot_sim::{run_batch, GameConfig};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BrainKind {
    /// Weighted heuristics over every reachable placement
    Heuristic,
    /// Slide-and-drop keeping the stack low
    Baseline,
}

/// Plays seeded headless games and reports how each one went.
#[derive(Parser, Debug)]
struct Opts {
    /// Seed of the first game; game i uses seed + i
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: u64,
    /// Stop a game after this many placed pieces
    #[arg(long, default_value_t = 500)]
    max_pieces: u32,
    #[arg(long, value_enum, default_value_t = BrainKind::Heuristic)]
    brain: BrainKind,
    /// JSON file with optional `game` and `weights` sections
    #[arg(long)]
    config: Option<PathBuf>,
    /// One JSON summary per line instead of text
    #[arg(long)]
    json: bool,
    /// Print each final board
    #[arg(long)]
    show: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    game: GameConfig,
    weights: EvalWeights,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<FileConfig> {
    let Some(path) = path else {
        return Ok(FileConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    let file = load_config(opts.config.as_ref())?;

    let brain: Box<dyn Brain + Sync> = match opts.brain {
        BrainKind::Heuristic => Box::new(HeuristicBrain::new(file.weights)),
        BrainKind::Baseline => Box::new(BaselineBrain),
    };
    let seeds: Vec<u64> = (0..opts.games).map(|i| opts.seed.wrapping_add(i)).collect();
    let records = run_batch(&file.game, brain.as_ref(), &seeds, opts.max_pieces)?;

    for record in &records {
        let summary = &record.summary;
        if opts.json {
            println!("{}", serde_json::to_string(summary)?);
        } else {
            println!(
                "seed {}: {} pieces, {} rows, {} ticks, height {}{}",
                summary.seed,
                summary.stats.pieces_placed,
                summary.stats.rows_cleared,
                summary.stats.ticks,
                summary.max_height,
                if summary.game_over { ", topped out" } else { "" },
            );
        }
        if opts.show {
            print!("{}", record.final_board);
        }
    }

    if records.len() > 1 && !opts.json {
        let rows: u64 = records.iter().map(|r| r.summary.stats.rows_cleared).sum();
        let topped = records.iter().filter(|r| r.summary.game_over).count();
        println!(
            "{} games: {:.1} rows per game, {} topped out",
            records.len(),
            rows as f64 / records.len() as f64,
            topped
        );
    }
    Ok(())
}
