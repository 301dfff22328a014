use crate::core::error::FormatError;
use crate::core::{BackgroundType, ChainEnd, Direction, ForegroundType, Link, Tile};

const NIBBLE: u32 = 0xf;

impl Tile {
    pub fn floor() -> Tile {
        Tile::default()
    }

    pub fn exit() -> Tile {
        Tile {
            background_type: BackgroundType::Exit,
            ..Tile::default()
        }
    }

    pub fn wall() -> Tile {
        Tile {
            foreground_type: ForegroundType::Wall,
            ..Tile::default()
        }
    }

    pub fn cat(
        foreground_type: ForegroundType,
        foreground_id: u8,
        head_direction: Direction,
        tail_direction: Direction,
    ) -> Tile {
        Tile {
            foreground_type,
            foreground_id,
            head_direction,
            tail_direction,
            ..Tile::default()
        }
    }

    /// Packs the tile into six nibbles. Ids wider than four bits lose their high bits.
    pub fn encode(&self) -> u32 {
        (self.background_type as u32)
            | ((self.background_id as u32 & NIBBLE) << 4)
            | ((self.foreground_type as u32) << 8)
            | ((self.foreground_id as u32 & NIBBLE) << 12)
            | ((self.head_direction as u32) << 16)
            | ((self.tail_direction as u32) << 20)
    }

    pub fn decode(n: u32) -> Result<Tile, FormatError> {
        let nibble = |shift: u32| ((n >> shift) & NIBBLE) as u8;
        Ok(Tile {
            background_type: BackgroundType::try_from(nibble(0))?,
            background_id: nibble(4),
            foreground_type: ForegroundType::try_from(nibble(8))?,
            foreground_id: nibble(12),
            head_direction: Direction::try_from(nibble(16))?,
            tail_direction: Direction::try_from(nibble(20))?,
        })
    }

    pub fn has_cat(&self) -> bool {
        matches!(
            self.foreground_type,
            ForegroundType::CatHead | ForegroundType::CatBody | ForegroundType::CatTail
        )
    }

    pub fn is_empty(&self) -> bool {
        self.foreground_type == ForegroundType::Empty
    }

    pub fn link(&self, moving: ChainEnd, link: Link) -> Direction {
        if link.is_head_pointer(moving) {
            self.head_direction
        } else {
            self.tail_direction
        }
    }

    pub fn set_link(&mut self, moving: ChainEnd, link: Link, direction: Direction) {
        if link.is_head_pointer(moving) {
            self.head_direction = direction;
        } else {
            self.tail_direction = direction;
        }
    }

    pub(crate) fn vacate(&mut self) {
        self.foreground_type = ForegroundType::Empty;
        self.foreground_id = 0;
    }
}

impl TryFrom<u8> for Direction {
    type Error = FormatError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x0 => Ok(Direction::Right),
            0x1 => Ok(Direction::Down),
            0x2 => Ok(Direction::Left),
            0x3 => Ok(Direction::Up),
            _ => Err(FormatError::InvalidNibble { what: "direction", value }),
        }
    }
}

impl TryFrom<u8> for BackgroundType {
    type Error = FormatError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x0 => Ok(BackgroundType::Floor),
            0x1 => Ok(BackgroundType::Exit),
            _ => Err(FormatError::InvalidNibble { what: "background type", value }),
        }
    }
}

impl TryFrom<u8> for ForegroundType {
    type Error = FormatError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x0 => Ok(ForegroundType::Empty),
            0x1 => Ok(ForegroundType::Wall),
            0x2 => Ok(ForegroundType::CatHead),
            0x3 => Ok(ForegroundType::CatBody),
            0x4 => Ok(ForegroundType::CatTail),
            _ => Err(FormatError::InvalidNibble { what: "foreground type", value }),
        }
    }
}
