use std::path::PathBuf;

use cat_maze::core::{Field, WinRule};
use cat_maze::levels::{self, LevelError, LevelFile};
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "cat-maze", version, about = "Drag the cat through the maze to the exit")]
pub struct Cli {
    /// Where log output goes; the terminal is taken by the game.
    #[arg(long, global = true, default_value = "cat_maze.log")]
    pub log_file: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a level in the terminal
    Play(LevelArgs),
    /// Print a level's board and descriptor
    Show(LevelArgs),
    /// List the built-in levels
    Levels,
}

#[derive(Args, Debug, Clone, Default)]
pub struct LevelArgs {
    /// Name of a built-in level
    pub level: Option<String>,

    /// JSON level file
    #[arg(long, conflicts_with_all = ["level", "data"])]
    pub file: Option<PathBuf>,

    /// Level descriptor: tile codes followed by width and height
    #[arg(long, conflicts_with = "level")]
    pub data: Option<String>,

    /// Override the level's win rule
    #[arg(long, value_enum)]
    pub win_rule: Option<WinRuleArg>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinRuleArg {
    /// every cat segment must be cat 1 standing on an exit
    All,
    /// any segment of cat 1 on an exit wins
    Any,
}

impl From<WinRuleArg> for WinRule {
    fn from(arg: WinRuleArg) -> Self {
        match arg {
            WinRuleArg::All => WinRule::AllSegmentsOnExit,
            WinRuleArg::Any => WinRule::AnySegmentOnExit,
        }
    }
}

/// A level picked on the command line, not yet started.
pub struct SelectedLevel {
    pub name: String,
    pub field: Field,
    pub win_rule: WinRule,
}

impl LevelArgs {
    pub fn select(&self) -> Result<SelectedLevel, LevelError> {
        let mut selected = if let Some(path) = &self.file {
            let file = LevelFile::load(path)?;
            SelectedLevel {
                field: file.field()?,
                name: file.name,
                win_rule: file.win_rule,
            }
        } else if let Some(data) = &self.data {
            // descriptors carry no win rule of their own
            SelectedLevel {
                name: "custom".to_string(),
                field: Field::parse_descriptor(data)?,
                win_rule: WinRule::AnySegmentOnExit,
            }
        } else {
            let level = match &self.level {
                Some(name) => levels::find(name)?,
                None => &levels::builtin()[0],
            };
            SelectedLevel {
                name: level.name.to_string(),
                field: level.field()?,
                win_rule: level.win_rule,
            }
        };

        if let Some(rule) = self.win_rule {
            selected.win_rule = rule.into();
        }
        Ok(selected)
    }
}
