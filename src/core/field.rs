use crate::core::error::FormatError;
use crate::core::{Tile, Vec2};

/// Rectangular grid of tiles. Its size never changes after construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Field {
    width: usize,
    height: usize,
    tiles: Vec<Vec<Tile>>,
}

impl Field {
    pub fn new(width: usize, height: usize, tiles: Vec<Vec<Tile>>) -> Result<Field, FormatError> {
        if tiles.len() != height {
            return Err(FormatError::InvalidHeight { expected: height, actual: tiles.len() });
        }

        for (i, row) in tiles.iter().enumerate() {
            if row.len() != width {
                return Err(FormatError::InvalidWidth { row: i, expected: width, actual: row.len() });
            }
            for (j, tile) in row.iter().enumerate() {
                let at = Vec2 { i: i as i32, j: j as i32 };
                if tile.background_id > 0xf {
                    return Err(FormatError::IdOutOfRange { at, what: "background id", value: tile.background_id });
                }
                if tile.foreground_id > 0xf {
                    return Err(FormatError::IdOutOfRange { at, what: "foreground id", value: tile.foreground_id });
                }
            }
        }

        Ok(Field { width, height, tiles })
    }

    /// A field with every cell set to `tile`.
    pub fn filled(width: usize, height: usize, tile: Tile) -> Field {
        Field {
            width,
            height,
            tiles: vec![vec![tile; width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.tiles
    }

    pub fn contains(&self, pos: Vec2) -> bool {
        pos.i >= 0 && pos.j >= 0 && (pos.i as usize) < self.height && (pos.j as usize) < self.width
    }

    pub fn get(&self, pos: Vec2) -> Option<&Tile> {
        if !self.contains(pos) {
            return None;
        }
        Some(&self[pos])
    }

    /// Every tile with its position, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Vec2, &Tile)> {
        self.tiles.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .map(move |(j, tile)| (Vec2 { i: i as i32, j: j as i32 }, tile))
        })
    }

    pub fn encode(&self) -> Vec<u32> {
        let mut arr = vec![0u32; self.area() + 2];
        let len = arr.len();
        arr[len - 2] = self.width as u32;
        arr[len - 1] = self.height as u32;

        for (row, row_tiles) in self.tiles.iter().enumerate() {
            for (col, tile) in row_tiles.iter().enumerate() {
                arr[row * self.width + col] = tile.encode();
            }
        }
        arr
    }

    pub fn decode(arr: &[u32]) -> Result<Field, FormatError> {
        if arr.len() < 2 {
            return Err(FormatError::MissingTrailer { len: arr.len() });
        }
        let width = arr[arr.len() - 2] as usize;
        let height = arr[arr.len() - 1] as usize;
        if (width == 0) != (height == 0) {
            return Err(FormatError::DegenerateSize { width, height });
        }

        let expected = width.checked_mul(height).and_then(|area| area.checked_add(2));
        if expected != Some(arr.len()) {
            return Err(FormatError::LengthMismatch {
                expected: expected.unwrap_or(usize::MAX),
                actual: arr.len(),
            });
        }

        let mut tiles = Vec::with_capacity(height);
        for row in 0..height {
            let row_tiles = arr[row * width..(row + 1) * width]
                .iter()
                .map(|&n| Tile::decode(n))
                .collect::<Result<Vec<_>, _>>()?;
            tiles.push(row_tiles);
        }

        Field::new(width, height, tiles)
    }

    /// Reads a level descriptor such as `"#0x100, 0x1, 2, 1"`: tile codes then width and height,
    /// separated by commas or whitespace, in decimal or `0x` hexadecimal.
    pub fn parse_descriptor(s: &str) -> Result<Field, FormatError> {
        let s = s.trim().trim_start_matches('#');
        let numbers = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(parse_number)
            .collect::<Result<Vec<_>, _>>()?;
        Field::decode(&numbers)
    }

    pub fn to_descriptor(&self) -> String {
        self.encode()
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

fn parse_number(token: &str) -> Result<u32, FormatError> {
    let parsed = match token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => token.parse::<u32>(),
    };
    parsed.map_err(|_| FormatError::InvalidNumber { token: token.to_string() })
}

impl std::ops::Index<Vec2> for Field {
    type Output = Tile;

    fn index(&self, index: Vec2) -> &Self::Output {
        &self.tiles[index.i as usize][index.j as usize]
    }
}

impl std::ops::IndexMut<Vec2> for Field {
    fn index_mut(&mut self, index: Vec2) -> &mut Self::Output {
        &mut self.tiles[index.i as usize][index.j as usize]
    }
}
