use std::fmt;
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, StrumDisplay)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Action {
    Start,
    Stop,
    Toggle,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, StrumDisplay, clap::ValueEnum,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Target {
    #[default]
    Linear,
    Wave,
    All,
}

/// One line on the control socket: `<action> [target]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlCommand {
    pub action: Action,
    pub target: Target,
}

impl ControlCommand {
    pub fn new(action: Action, target: Target) -> Self {
        Self { action, target }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown action '{0}'")]
    UnknownAction(String),
    #[error("unknown target '{0}'")]
    UnknownTarget(String),
    #[error("unexpected '{0}' after target")]
    Trailing(String),
}

impl FromStr for ControlCommand {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let action = words.next().ok_or(CommandParseError::Empty)?;
        let action = Action::from_str(action)
            .map_err(|_| CommandParseError::UnknownAction(action.to_string()))?;
        let target = match words.next() {
            Some(word) => Target::from_str(word)
                .map_err(|_| CommandParseError::UnknownTarget(word.to_string()))?,
            None => Target::default(),
        };
        if let Some(extra) = words.next() {
            return Err(CommandParseError::Trailing(extra.to_string()));
        }
        Ok(Self { action, target })
    }
}

impl fmt::Display for ControlCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.action, self.target)
    }
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    Control(ControlCommand),
    ConfigReload,
}
