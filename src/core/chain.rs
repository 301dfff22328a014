use tracing::warn;

use crate::core::error::{ChainError, FormatError};
use crate::core::{ChainEnd, Direction, Field, ForegroundType, Link, Tile, Vec2};

/// Follows the chain from the endpoint at `start` to its opposite endpoint.
///
/// `start` must hold the `moving` endpoint. The returned path begins at `start`
/// and ends on the opposite endpoint. The walk is bounded by the field area, so
/// a cycle in the pointers is reported instead of looping forever.
pub fn trace_chain(field: &Field, start: Vec2, moving: ChainEnd) -> Result<Vec<Vec2>, ChainError> {
    let Some(start_tile) = field.get(start) else {
        return Err(ChainError::PointsOffGrid { at: start });
    };
    let id = start_tile.foreground_id;
    let back_end = moving.opposite().foreground_type();
    let limit = field.area();

    let mut path = vec![start];
    let mut at = start;
    loop {
        let tile = field[at];
        if path.len() > 1 && tile.foreground_type == back_end {
            return Ok(path);
        }
        if path.len() >= limit {
            return Err(ChainError::TooLong { id, start, limit });
        }

        let next = at.step(tile.link(moving, Link::Backward));
        let Some(next_tile) = field.get(next) else {
            return Err(ChainError::PointsOffGrid { at });
        };
        let continues = next_tile.foreground_id == id
            && (next_tile.foreground_type == ForegroundType::CatBody
                || next_tile.foreground_type == back_end);
        if !continues {
            return Err(ChainError::Broken { id, at, next });
        }

        path.push(next);
        at = next;
    }
}

impl Field {
    /// Traces every chain from its head. Returns the number of chains found.
    pub fn validate_chains(&self) -> Result<usize, ChainError> {
        let heads: Vec<Vec2> = self
            .iter()
            .filter(|(_, tile)| tile.foreground_type == ForegroundType::CatHead)
            .map(|(pos, _)| pos)
            .collect();

        for &head in &heads {
            if let Err(err) = trace_chain(self, head, ChainEnd::Head) {
                warn!(%err, "level contains a broken chain");
                return Err(err);
            }
        }
        Ok(heads.len())
    }

    /// Writes chain `id` along `path`, head first and tail last, with every
    /// direction pointer linking neighbouring segments. Backgrounds are kept.
    pub fn lay_chain(&mut self, id: u8, path: &[Vec2]) -> Result<(), FormatError> {
        if path.len() < 2 || id == 0 || id > 0xf {
            return Err(FormatError::InvalidChain { id });
        }
        let links = path
            .windows(2)
            .map(|pair| Direction::between(pair[0], pair[1]))
            .collect::<Option<Vec<_>>>()
            .ok_or(FormatError::InvalidChain { id })?;
        if path.iter().any(|&pos| !self.contains(pos)) {
            return Err(FormatError::InvalidChain { id });
        }

        let last = path.len() - 1;
        for (k, &pos) in path.iter().enumerate() {
            let foreground_type = match k {
                0 => ForegroundType::CatHead,
                k if k == last => ForegroundType::CatTail,
                _ => ForegroundType::CatBody,
            };
            // links[k] leads from segment k toward the tail, links[k - 1] from k - 1 toward k.
            let head_direction = if k == 0 { links[0].opposite() } else { links[k - 1].opposite() };
            let tail_direction = if k == last { links[last - 1] } else { links[k] };

            let tile = &mut self[pos];
            *tile = Tile {
                foreground_type,
                foreground_id: id,
                head_direction,
                tail_direction,
                ..*tile
            };
        }
        Ok(())
    }
}
