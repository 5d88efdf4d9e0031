//! The command table: keyword to operation.

use super::DispatchError;
use std::fmt;
use std::str::FromStr;

/// Operations the operator can pick at the action prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Buy,
    Fill,
    Take,
    Remaining,
    Exit,
}

impl Command {
    /// Keywords in the order the action prompt lists them. Matching is case-sensitive.
    pub const TABLE: [(&'static str, Command); 5] = [
        ("buy", Command::Buy),
        ("fill", Command::Fill),
        ("take", Command::Take),
        ("remaining", Command::Remaining),
        ("exit", Command::Exit),
    ];

    pub fn lookup(keyword: &str) -> Option<Self> {
        Self::TABLE
            .iter()
            .find(|(name, _)| *name == keyword)
            .map(|(_, command)| *command)
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Command::Buy => "buy",
            Command::Fill => "fill",
            Command::Take => "take",
            Command::Remaining => "remaining",
            Command::Exit => "exit",
        }
    }

    /// `buy, fill, take, remaining, exit`
    pub fn listing() -> String {
        Self::TABLE
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Command {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| DispatchError::UnknownCommand(s.to_string()))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
