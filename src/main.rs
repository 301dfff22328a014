// Cat Maze in the terminal with ratatui.
// Move the cursor with W/A/S/D or the arrow keys, Space grabs the cat's head or
// tail under it, and the same keys then drag the cat along. R restarts, Q quits.

mod config;
mod logging;

use cat_maze::console_interface::ConsoleInput::*;
use cat_maze::console_interface::{
    cleanup_terminal, handle_input, render_field_to_string, render_game, setup_terminal,
};
use cat_maze::core::{ChainEnd, Game, MoveOutcome, PLAYER_CAT_ID, Vec2};
use cat_maze::levels::{self, start_game};
use cat_maze::models::{DragCursor, GameRenderState};
use clap::Parser;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use tracing::{error, info};

use crate::config::{Cli, Command, LevelArgs, SelectedLevel};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_file)?;

    match cli.command.unwrap_or(Command::Play(LevelArgs::default())) {
        Command::Levels => {
            for level in levels::builtin() {
                println!("{} ({:?})", level.name, level.win_rule);
            }
        }
        Command::Show(args) => {
            let selected = args.select()?;
            print!("{}", render_field_to_string(&selected.field));
            println!("{}", selected.field.to_descriptor());
        }
        Command::Play(args) => {
            let selected = args.select()?;
            let mut terminal = setup_terminal()?;
            let result = run_interactive(&selected, &mut terminal);
            cleanup_terminal()?;
            if let Err(err) = &result {
                error!(%err, "game stopped");
            }
            result?;
        }
    }

    Ok(())
}

/// Cursor starts on the head of the player's cat, or the top left corner.
fn starting_cursor(game: &Game) -> DragCursor {
    let pos = game
        .field()
        .iter()
        .find(|(_, tile)| {
            tile.foreground_id == PLAYER_CAT_ID
                && ChainEnd::from_foreground(tile.foreground_type) == Some(ChainEnd::Head)
        })
        .map(|(pos, _)| pos)
        .unwrap_or(Vec2 { i: 0, j: 0 });
    DragCursor::new(pos)
}

fn run_interactive(
    selected: &SelectedLevel,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut game = start_game(&selected.name, selected.field.clone(), selected.win_rule);
    let mut cursor = starting_cursor(&game);
    let mut last_rejection = None;

    loop {
        let won = game.is_won();
        render_game(terminal, &GameRenderState {
            game: &game,
            level_name: &selected.name,
            cursor,
            won,
            last_rejection,
        })?;

        if won {
            info!(moves = game.move_count(), "level solved");
            // Keep showing the win screen until user inputs
            loop {
                match handle_input()? {
                    Timeout => {}
                    _ => break,
                }
            }
            break;
        }

        match handle_input()? {
            Quit => break,
            Restart => {
                game = start_game(&selected.name, selected.field.clone(), selected.win_rule);
                cursor = starting_cursor(&game);
                last_rejection = None;
            }
            ToggleGrab => {
                cursor.toggle_grab(&game);
                last_rejection = None;
            }
            Push(dir) => {
                last_rejection = match cursor.push(&mut game, dir)? {
                    Some(MoveOutcome::Rejected(rejection)) => Some(rejection),
                    _ => None,
                };
            }
            Timeout | Unknown => {}
        }
    }

    Ok(())
}
