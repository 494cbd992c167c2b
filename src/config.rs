use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub game: GameConfig,
    pub players: PlayersConfig,
}

/// How the initial letters are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardFill {
    /// Deterministic row-major a..y
    Easy,
    /// Frequency-weighted random letters
    Random,
    /// Vowel/consonant balanced random letters
    Balanced,
}

impl FromStr for BoardFill {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(BoardFill::Easy),
            "random" => Ok(BoardFill::Random),
            "balanced" => Ok(BoardFill::Balanced),
            other => bail!("unknown board fill {:?}", other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Bot,
    Human,
}

impl FromStr for PlayerKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bot" => Ok(PlayerKind::Bot),
            "human" => Ok(PlayerKind::Human),
            other => bail!("unknown player kind {:?}", other),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub dictionary_path: String,
    pub board_fill: BoardFill,
    /// Surface intermediate board state to the log
    pub verbose: bool,
    /// Where to write the final match report as JSON, if anywhere
    pub report_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayersConfig {
    pub red: PlayerKind,
    pub blue: PlayerKind,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let game = GameConfig {
            dictionary_path: env::var("DICTIONARY_PATH")
                .unwrap_or_else(|_| "./dictionary.txt".to_string()),
            board_fill: env::var("BOARD_FILL")
                .unwrap_or_else(|_| "balanced".to_string())
                .parse()
                .context("BOARD_FILL must be easy, random, or balanced")?,
            verbose: env::var("VERBOSE")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .context("VERBOSE must be true or false")?,
            report_path: env::var("REPORT_PATH").ok(),
        };

        let players = PlayersConfig {
            red: env::var("RED_PLAYER")
                .unwrap_or_else(|_| "bot".to_string())
                .parse()
                .context("RED_PLAYER must be bot or human")?,
            blue: env::var("BLUE_PLAYER")
                .unwrap_or_else(|_| "bot".to_string())
                .parse()
                .context("BLUE_PLAYER must be bot or human")?,
        };

        Ok(Config { game, players })
    }
}
