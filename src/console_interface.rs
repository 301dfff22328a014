// Board text: '#' wall, ' ' floor, '=' exit. Cat n is the n-th letter of the
// alphabet: uppercase for its head, lowercase for body and tail.

use crate::core::{
    BackgroundType, Direction, Field, ForegroundType, FormatError, Tile, Vec2,
};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

pub fn parse_level(s: &str) -> Result<Field, FormatError> {
    let lines: Vec<&str> = s
        .lines()
        .map(|line| line.trim_matches('\n'))
        .filter(|line| !line.is_empty())
        .collect();
    let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);

    let mut field = Field::filled(width, lines.len(), Tile::floor());
    let mut heads: Vec<(char, Vec2)> = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        for (j, ch) in line.chars().enumerate() {
            let pos = Vec2 { i: i as i32, j: j as i32 };
            field[pos] = match ch {
                '#' => Tile::wall(),
                ' ' => Tile::floor(),
                '=' => Tile::exit(),
                c if chain_id(c).is_some() => {
                    if c.is_ascii_uppercase() {
                        heads.push((c.to_ascii_lowercase(), pos));
                    }
                    // placeholder until the chain is laid
                    Tile::cat(ForegroundType::CatBody, 0, Direction::Right, Direction::Right)
                }
                symbol => return Err(FormatError::UnknownSymbol { symbol, at: pos }),
            };
        }
    }

    let symbol_at = |pos: Vec2| -> Option<char> {
        if pos.i < 0 || pos.j < 0 {
            return None;
        }
        lines.get(pos.i as usize).and_then(|line| line.chars().nth(pos.j as usize))
    };

    let mut laid: Vec<Vec2> = Vec::new();
    for (n, &(letter, head)) in heads.iter().enumerate() {
        if heads[..n].iter().any(|&(other, _)| other == letter) {
            return Err(FormatError::AmbiguousChain { letter, at: head });
        }

        let mut path = vec![head];
        let mut at = head;
        loop {
            let next: Vec<Vec2> = Direction::ALL
                .iter()
                .map(|&dir| at.step(dir))
                .filter(|pos| !path.contains(pos) && symbol_at(*pos) == Some(letter))
                .collect();
            match next.as_slice() {
                [] => break,
                [pos] => {
                    path.push(*pos);
                    at = *pos;
                }
                _ => return Err(FormatError::AmbiguousChain { letter, at }),
            }
        }
        let id = chain_id(letter).unwrap_or(0);
        field.lay_chain(id, &path)?;
        laid.extend(path);
    }

    // lowercase cells that no head reached
    if let Some((pos, _)) = field
        .iter()
        .find(|(pos, tile)| tile.has_cat() && !laid.contains(pos))
    {
        let letter = symbol_at(pos).map_or('?', |c| c.to_ascii_lowercase());
        return Err(FormatError::AmbiguousChain { letter, at: pos });
    }

    Ok(field)
}

fn chain_id(c: char) -> Option<u8> {
    let lower = c.to_ascii_lowercase();
    if ('a'..='o').contains(&lower) {
        Some(lower as u8 - b'a' + 1)
    } else {
        None
    }
}

fn tile_symbol(tile: &Tile) -> char {
    match tile.foreground_type {
        ForegroundType::Wall => '#',
        ForegroundType::Empty => match tile.background_type {
            BackgroundType::Exit => '=',
            BackgroundType::Floor => ' ',
        },
        ForegroundType::CatHead | ForegroundType::CatBody | ForegroundType::CatTail => {
            let letter = match tile.foreground_id {
                id @ 1..=15 => (b'a' + id - 1) as char,
                _ => '?',
            };
            if tile.foreground_type == ForegroundType::CatHead {
                letter.to_ascii_uppercase()
            } else {
                letter
            }
        }
    }
}

pub fn render_field_to_string(field: &Field) -> String {
    let mut result = String::new();
    for row in field.rows() {
        for tile in row {
            result.push(tile_symbol(tile));
        }
        result.push('\n');
    }
    result
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

fn chain_color(id: u8) -> Color {
    const PALETTE: [Color; 5] = [Color::Cyan, Color::Magenta, Color::Green, Color::Blue, Color::Red];
    match id {
        1 => Color::Yellow,
        id => PALETTE[id as usize % PALETTE.len()],
    }
}

fn field_lines(state: &GameRenderState) -> Vec<Line<'static>> {
    let field = state.game.field();
    field
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let spans: Vec<Span> = row
                .iter()
                .enumerate()
                .map(|(j, tile)| {
                    let mut style = match tile.foreground_type {
                        ForegroundType::Wall => Style::default().fg(Color::DarkGray),
                        _ if tile.has_cat() => Style::default()
                            .fg(chain_color(tile.foreground_id))
                            .add_modifier(Modifier::BOLD),
                        _ => Style::default(),
                    };
                    if tile.background_type == BackgroundType::Exit {
                        style = style.bg(Color::Rgb(40, 90, 40));
                    }
                    if state.cursor.pos == (Vec2 { i: i as i32, j: j as i32 }) {
                        style = if state.cursor.grabbed {
                            style.bg(Color::LightGreen)
                        } else {
                            style.add_modifier(Modifier::REVERSED)
                        };
                    }
                    Span::styled(tile_symbol(tile).to_string(), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let title = format!("Cat Maze: {} | Moves: {}", state.level_name, state.game.move_count());
        let game_paragraph = Paragraph::new(field_lines(state))
            .block(Block::default().borders(Borders::ALL).title(title))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let instructions = if state.won {
            "The cat is out! Press any key to quit."
        } else if state.cursor.grabbed {
            "Arrows/WASD drag the cat, Space lets go, R restarts, Q quits"
        } else {
            "Arrows/WASD move the cursor, Space grabs a head or tail, R restarts, Q quits"
        };

        let instructions = if let Some(rejection) = &state.last_rejection {
            format!("{} | Rejected: {:?}", instructions, rejection)
        } else {
            instructions.to_string()
        };

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(())
}

pub enum ConsoleInput {
    Push(Direction),
    ToggleGrab,
    Restart,
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::Restart,
                KeyCode::Char(' ') | KeyCode::Enter => ConsoleInput::ToggleGrab,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => ConsoleInput::Push(Direction::Up),
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => ConsoleInput::Push(Direction::Down),
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => ConsoleInput::Push(Direction::Left),
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => ConsoleInput::Push(Direction::Right),
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
