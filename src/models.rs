use crate::core::{ChainEnd, ChainError, Direction, Game, MoveOutcome, Rejection, Vec2};

/// Everything the terminal front end draws in one frame.
pub struct GameRenderState<'a> {
    pub game: &'a Game,
    pub level_name: &'a str,
    pub cursor: DragCursor,
    pub won: bool,
    pub last_rejection: Option<Rejection>,
}

/// Keyboard stand-in for a mouse drag: a cursor that can grab a cat endpoint
/// and then pull it one cell per key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragCursor {
    pub pos: Vec2,
    pub grabbed: bool,
}

impl DragCursor {
    pub fn new(pos: Vec2) -> DragCursor {
        DragCursor { pos, grabbed: false }
    }

    /// Grabs the endpoint under the cursor, or lets go if already holding one.
    /// Returns whether the cursor now holds an endpoint.
    pub fn toggle_grab(&mut self, game: &Game) -> bool {
        self.grabbed = !self.grabbed
            && game
                .field()
                .get(self.pos)
                .is_some_and(|tile| ChainEnd::from_foreground(tile.foreground_type).is_some());
        self.grabbed
    }

    /// Moves the cursor one cell. While holding an endpoint this drags the cat,
    /// and the cursor only follows when the cat actually moved.
    pub fn push(&mut self, game: &mut Game, dir: Direction) -> Result<Option<MoveOutcome>, ChainError> {
        let next = self.pos.step(dir);
        if !self.grabbed {
            if game.field().contains(next) {
                self.pos = next;
            }
            return Ok(None);
        }

        let outcome = game.move_cat(self.pos, next)?;
        if outcome.is_moved() {
            self.pos = next;
        }
        Ok(Some(outcome))
    }
}
