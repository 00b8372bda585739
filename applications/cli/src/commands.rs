//! Transport commands typed at the prompt

use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Help text printed by `help`
pub const HELP: &str = "\
Commands:
  play | pause | toggle      start, pause or flip playback
  next | prev                skip forward / back (wraps around)
  seek <mm:ss|secs>          jump to a position
  drag <mm:ss|secs>          move the position marker without seeking
  release                    seek to the dragged position
  vol <0-100>                set volume
  mode                       cycle sequential / repeat-one / repeat-all / shuffle
  status                     show the current track and position
  list                       show the catalog
  help                       show this text
  quit                       exit";

/// One parsed input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play,
    Pause,
    Toggle,
    Next,
    Previous,
    Seek(Duration),
    Drag(Duration),
    Release,
    Volume(u8),
    Mode,
    Status,
    List,
    Help,
    Quit,
}

/// Why a line could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}' (type 'help')")]
    Unknown(String),

    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    #[error("invalid time '{0}' (use mm:ss or seconds)")]
    InvalidTime(String),

    #[error("invalid volume '{0}' (use 0-100)")]
    InvalidVolume(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(CommandError::Empty);
        };
        let arg = words.next();

        let command = match name.to_ascii_lowercase().as_str() {
            "play" => Command::Play,
            "pause" => Command::Pause,
            "toggle" | "p" => Command::Toggle,
            "next" | "n" => Command::Next,
            "prev" | "previous" | "b" => Command::Previous,
            "seek" => Command::Seek(time_arg("seek", arg)?),
            "drag" => Command::Drag(time_arg("drag", arg)?),
            "release" => Command::Release,
            "vol" | "volume" => {
                let arg = arg.ok_or(CommandError::MissingArgument("vol"))?;
                let level = arg
                    .parse::<u8>()
                    .ok()
                    .filter(|level| *level <= 100)
                    .ok_or_else(|| CommandError::InvalidVolume(arg.to_string()))?;
                Command::Volume(level)
            }
            "mode" | "m" => Command::Mode,
            "status" | "s" => Command::Status,
            "list" | "ls" => Command::List,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}

fn time_arg(command: &'static str, arg: Option<&str>) -> Result<Duration, CommandError> {
    let arg = arg.ok_or(CommandError::MissingArgument(command))?;
    parse_time(arg).ok_or_else(|| CommandError::InvalidTime(arg.to_string()))
}

/// Parse `mm:ss` or a plain number of seconds
pub fn parse_time(text: &str) -> Option<Duration> {
    match text.split_once(':') {
        Some((minutes, seconds)) => {
            let minutes: u64 = minutes.parse().ok()?;
            let seconds: u64 = seconds.parse().ok()?;
            if seconds >= 60 {
                return None;
            }
            Some(Duration::from_secs(minutes * 60 + seconds))
        }
        None => {
            let seconds: f64 = text.parse().ok()?;
            (seconds.is_finite() && seconds >= 0.0).then(|| Duration::from_secs_f64(seconds))
        }
    }
}
