use tracing::{debug, trace};

use crate::core::chain::trace_chain;
use crate::core::error::ChainError;
use crate::core::{ChainEnd, Direction, Field, Link, MoveKind, MoveOutcome, Rejection, Vec2};

/// Drags the chain endpoint at `from` onto the neighbouring cell `to`.
///
/// Illegal drags come back as [`MoveOutcome::Rejected`] and leave the field
/// untouched. A [`ChainError`] means the chain's pointers were already corrupt;
/// the field is untouched in that case as well.
pub fn step(field: &mut Field, from: Vec2, to: Vec2) -> Result<MoveOutcome, ChainError> {
    let (Some(&source), Some(&dest)) = (field.get(from), field.get(to)) else {
        return Ok(reject(from, to, Rejection::OutOfBounds));
    };

    let Some(moving) = ChainEnd::from_foreground(source.foreground_type) else {
        return Ok(reject(from, to, Rejection::NotAnEndpoint));
    };

    let Some(travel) = Direction::between(from, to) else {
        return Ok(reject(from, to, Rejection::NotAdjacent));
    };

    let back_end = moving.opposite().foreground_type();

    let kind = if dest.is_empty() {
        MoveKind::Slither
    } else if dest.foreground_id == source.foreground_id && dest.foreground_type == back_end {
        if source.link(moving, Link::Backward) == travel {
            return Ok(reject(from, to, Rejection::Reversal));
        }
        MoveKind::Loop
    } else {
        return Ok(reject(from, to, Rejection::Blocked));
    };

    let path = trace_chain(field, from, moving)?;
    if kind == MoveKind::Loop && path.last() != Some(&to) {
        return Err(ChainError::Broken { id: source.foreground_id, at: from, next: to });
    }

    // Slide a window down the chain: each step fills `to_pos` with the segment
    // at `from_pos`, whose cell is filled on the next step.
    let mut last = to;
    let mut to_pos = to;
    let mut from_pos = from;
    let mut k = 0;
    loop {
        let from_tile = field[from_pos];
        let closing = k > 0 && from_tile.foreground_type == moving.foreground_type();
        let written_type = if closing { back_end } else { from_tile.foreground_type };

        let tile = &mut field[to_pos];
        tile.foreground_id = from_tile.foreground_id;
        tile.foreground_type = written_type;
        let front = if k == 0 { Some(travel) } else { Direction::between(to_pos, last) };
        if let Some(front) = front {
            tile.set_link(moving, Link::Forward, front);
        }
        if let Some(back) = Direction::between(to_pos, from_pos) {
            tile.set_link(moving, Link::Backward, back);
        }

        if !closing {
            field[from_pos].vacate();
        }
        trace!(?to_pos, ?written_type, "segment moved");

        if written_type == back_end {
            break;
        }

        last = to_pos;
        to_pos = from_pos;
        k += 1;
        from_pos = path[k];
    }

    debug!(?from, ?to, ?kind, segments = path.len(), "cat moved");
    Ok(MoveOutcome::Moved(kind))
}

fn reject(from: Vec2, to: Vec2, rejection: Rejection) -> MoveOutcome {
    debug!(?from, ?to, ?rejection, "move rejected");
    MoveOutcome::Rejected(rejection)
}
