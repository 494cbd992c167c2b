mod config;
mod dictionary;
mod game;
mod models;
mod players;
mod utils;

use std::sync::Arc;

use anyhow::{Context, Result};
use config::{BoardFill, Config, PlayerKind};
use dictionary::Dictionary;
use game::{BoardGenerator, GameSession};
use models::PlayableWord;
use players::{FirstWordBot, HumanPlayer, Player};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn build_player(kind: PlayerKind, playable: Arc<Vec<PlayableWord>>) -> Box<dyn Player> {
    match kind {
        PlayerKind::Bot => Box::new(FirstWordBot::new(playable)),
        PlayerKind::Human => Box::new(HumanPlayer::new()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tilepress=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting tilepress...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Load dictionary; a game cannot exist without one
    let dictionary = Dictionary::load(&config.game.dictionary_path)
        .await
        .with_context(|| {
            format!(
                "failed to load dictionary from {}",
                config.game.dictionary_path
            )
        })?;

    let letters = match config.game.board_fill {
        BoardFill::Easy => BoardGenerator::easy(),
        BoardFill::Random => BoardGenerator::random(),
        BoardFill::Balanced => BoardGenerator::balanced(),
    };

    let mut session = GameSession::new(letters, Arc::new(dictionary), config.game.verbose);
    tracing::info!(game_id = %session.game_id(), "Game created");

    let mut red = build_player(config.players.red, session.playable_words());
    let mut blue = build_player(config.players.blue, session.playable_words());

    let report = session.run(red.as_mut(), blue.as_mut()).await?;

    tracing::info!(
        "Game over: {} wins (red {} - blue {} tiles, {} words played{})",
        report.winner,
        report.red_tiles,
        report.blue_tiles,
        report.words_played.len(),
        if report.forfeit { ", by forfeit" } else { "" }
    );

    if let Some(path) = &config.game.report_path {
        let json = serde_json::to_string_pretty(&report)?;
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("failed to write match report to {}", path))?;
        tracing::info!("Match report written to {}", path);
    }

    Ok(())
}
