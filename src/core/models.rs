use serde::{Deserialize, Serialize};

/// Grid coordinate, `i` is the row and `j` the column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Right = 0x0,
    Down = 0x1,
    Left = 0x2,
    Up = 0x3,
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BackgroundType {
    #[default]
    Floor = 0x0,
    Exit = 0x1,
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ForegroundType {
    #[default]
    Empty = 0x0,
    Wall = 0x1,
    CatHead = 0x2,
    CatBody = 0x3,
    CatTail = 0x4,
}

/// One cell of the field.
///
/// `head_direction` points at the neighbouring segment on the head side and
/// `tail_direction` at the one on the tail side. On the endpoints themselves
/// the outward pointer is the direction the endpoint faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Tile {
    pub background_type: BackgroundType,
    pub background_id: u8,
    pub foreground_type: ForegroundType,
    pub foreground_id: u8,
    pub head_direction: Direction,
    pub tail_direction: Direction,
}

/// The two ends of a cat chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChainEnd {
    Head,
    Tail,
}

/// Which way a pointer leads, relative to the end that is being moved.
/// `Forward` leads toward the moving end, `Backward` toward the fixed one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Link {
    Forward,
    Backward,
}

/// How [`crate::core::Game::is_won`] decides a level is finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WinRule {
    /// Every cat segment on the field belongs to chain 1 and stands on an exit.
    #[default]
    AllSegmentsOnExit,
    /// Some segment of chain 1 stands on an exit.
    AnySegmentOnExit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// The endpoint stepped onto an empty tile and the chain followed.
    Slither,
    /// The endpoint stepped onto its own opposite endpoint, rotating the chain in place.
    Loop,
}

/// Why a drag step was ignored. None of these change the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rejection {
    OutOfBounds,
    NotAnEndpoint,
    NotAdjacent,
    Blocked,
    Reversal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    Moved(MoveKind),
    Rejected(Rejection),
}
