mod chain;
pub mod error;
mod field;
mod game;
mod model_helpers;
mod models;
mod tile;
mod update;

pub use chain::trace_chain;
pub use error::{ChainError, FormatError};
pub use field::Field;
pub use game::{Game, PLAYER_CAT_ID};
pub use models::{
    BackgroundType, ChainEnd, Direction, ForegroundType, Link, MoveKind, MoveOutcome, Rejection,
    Tile, Vec2, WinRule,
};
pub use update::step;
