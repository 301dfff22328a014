use crate::core::{ChainEnd, Direction, ForegroundType, Link, MoveOutcome, Vec2};

impl Vec2 {
    pub const fn new(i: i32, j: i32) -> Vec2 {
        Vec2 { i, j }
    }

    pub fn step(self, dir: Direction) -> Vec2 {
        let offset = dir.offset();
        Vec2 {
            i: self.i + offset.i,
            j: self.j + offset.j,
        }
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    pub fn offset(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { i: -1, j: 0 },
            Direction::Down => Vec2 { i: 1, j: 0 },
            Direction::Left => Vec2 { i: 0, j: -1 },
            Direction::Right => Vec2 { i: 0, j: 1 },
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Direction of the unit step leading from `from` to `to`, if they are neighbours.
    pub fn between(from: Vec2, to: Vec2) -> Option<Direction> {
        match (to.i - from.i, to.j - from.j) {
            (-1, 0) => Some(Direction::Up),
            (1, 0) => Some(Direction::Down),
            (0, -1) => Some(Direction::Left),
            (0, 1) => Some(Direction::Right),
            _ => None,
        }
    }
}

impl ChainEnd {
    pub fn from_foreground(foreground_type: ForegroundType) -> Option<ChainEnd> {
        match foreground_type {
            ForegroundType::CatHead => Some(ChainEnd::Head),
            ForegroundType::CatTail => Some(ChainEnd::Tail),
            _ => None,
        }
    }

    pub fn foreground_type(self) -> ForegroundType {
        match self {
            ChainEnd::Head => ForegroundType::CatHead,
            ChainEnd::Tail => ForegroundType::CatTail,
        }
    }

    pub fn opposite(self) -> ChainEnd {
        match self {
            ChainEnd::Head => ChainEnd::Tail,
            ChainEnd::Tail => ChainEnd::Head,
        }
    }
}

impl Link {
    /// Whether this link is stored in `head_direction` when `moving` is the end being dragged.
    pub(crate) fn is_head_pointer(self, moving: ChainEnd) -> bool {
        matches!(
            (moving, self),
            (ChainEnd::Head, Link::Forward) | (ChainEnd::Tail, Link::Backward)
        )
    }
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved(_))
    }
}
