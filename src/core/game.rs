use crate::core::error::ChainError;
use crate::core::update::step;
use crate::core::{BackgroundType, Field, MoveOutcome, Tile, Vec2, WinRule};

/// Chain id of the cat the player has to lead out.
pub const PLAYER_CAT_ID: u8 = 1;

/// One play session of a level.
#[derive(Clone, Debug)]
pub struct Game {
    field: Field,
    move_count: u32,
    win_rule: WinRule,
}

impl Game {
    pub fn new(field: Field) -> Game {
        Game::with_win_rule(field, WinRule::default())
    }

    pub fn with_win_rule(field: Field, win_rule: WinRule) -> Game {
        Game {
            field,
            move_count: 0,
            win_rule,
        }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn win_rule(&self) -> WinRule {
        self.win_rule
    }

    pub fn is_won(&self) -> bool {
        let on_exit = |tile: &Tile| {
            tile.foreground_id == PLAYER_CAT_ID && tile.background_type == BackgroundType::Exit
        };
        match self.win_rule {
            WinRule::AllSegmentsOnExit => self
                .field
                .iter()
                .all(|(_, tile)| !tile.has_cat() || on_exit(tile)),
            WinRule::AnySegmentOnExit => self
                .field
                .iter()
                .any(|(_, tile)| tile.has_cat() && on_exit(tile)),
        }
    }

    /// Drags the endpoint at `from` one cell to `to`. Counts the move only if the cat moved.
    pub fn move_cat(&mut self, from: Vec2, to: Vec2) -> Result<MoveOutcome, ChainError> {
        let outcome = step(&mut self.field, from, to)?;
        if outcome.is_moved() {
            self.move_count += 1;
        }
        Ok(outcome)
    }
}
