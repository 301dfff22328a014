use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{Field, FormatError, Game, WinRule};

#[derive(thiserror::Error, Debug)]
pub enum LevelError {
    #[error("cannot read level file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse level file: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("no built-in level named {0:?}")]
    UnknownLevel(String),
}

/// A level compiled into the binary.
#[derive(Debug, Clone, Copy)]
pub struct Level {
    pub name: &'static str,
    pub win_rule: WinRule,
    pub data: &'static [u32],
}

/// A level stored on disk as JSON.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LevelFile {
    pub name: String,
    #[serde(default)]
    pub win_rule: WinRule,
    pub data: Vec<u32>,
}

// Both built-in levels contain decoy cats that never leave, so reaching the
// exit with any part of cat 1 is enough.
const BUILTIN: &[Level] = &[
    Level {
        name: "first-steps",
        win_rule: WinRule::AnySegmentOnExit,
        data: &[
            0x000100, 0x000100, 0x000100, 0x000100, 0x000100,
            0x000100, 0x311400, 0x102300, 0x202200, 0x000100,
            0x000100, 0x311300, 0x132300, 0x000000, 0x000100,
            0x000100, 0x311200, 0x132400, 0x000000, 0x000100,
            0x000100, 0x000100, 0x000001, 0x000100, 0x000100,
            5, 5,
        ],
    },
    Level {
        name: "tangle",
        win_rule: WinRule::AnySegmentOnExit,
        data: &[
            0x000100, 0x000100, 0x000100, 0x000100, 0x000100, 0x000100, 0x000100,
            0x000100, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000100,
            0x000100, 0x000000, 0x000000, 0x122200, 0x000100, 0x133200, 0x000100,
            0x000100, 0x102300, 0x202300, 0x232300, 0x000100, 0x133300, 0x000100,
            0x000100, 0x032300, 0x022300, 0x022400, 0x000100, 0x133400, 0x000100,
            0x000100, 0x021200, 0x021300, 0x021400, 0x000100, 0x000001, 0x000100,
            0x000100, 0x000100, 0x000100, 0x000100, 0x000100, 0x000100, 0x000100,
            7, 7,
        ],
    },
];

pub fn builtin() -> &'static [Level] {
    BUILTIN
}

pub fn find(name: &str) -> Result<&'static Level, LevelError> {
    BUILTIN
        .iter()
        .find(|level| level.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| LevelError::UnknownLevel(name.to_string()))
}

impl Level {
    pub fn field(&self) -> Result<Field, FormatError> {
        Field::decode(self.data)
    }

    pub fn start(&self) -> Result<Game, LevelError> {
        Ok(start_game(self.name, self.field()?, self.win_rule))
    }

    pub fn to_file(&self) -> LevelFile {
        LevelFile {
            name: self.name.to_string(),
            win_rule: self.win_rule,
            data: self.data.to_vec(),
        }
    }
}

impl LevelFile {
    pub fn load(path: &Path) -> Result<LevelFile, LevelError> {
        let text = std::fs::read_to_string(path)?;
        LevelFile::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<LevelFile, LevelError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, LevelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn field(&self) -> Result<Field, FormatError> {
        Field::decode(&self.data)
    }

    pub fn start(&self) -> Result<Game, LevelError> {
        Ok(start_game(&self.name, self.field()?, self.win_rule))
    }
}

/// Starts a game on a decoded field. Broken chains are logged but do not stop the level.
pub fn start_game(name: &str, field: Field, win_rule: WinRule) -> Game {
    let chains = field.validate_chains().unwrap_or(0);
    info!(name, width = field.width(), height = field.height(), chains, ?win_rule, "level loaded");
    Game::with_win_rule(field, win_rule)
}
