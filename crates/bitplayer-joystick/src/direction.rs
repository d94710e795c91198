//! Discrete joystick positions

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::JoystickError;

/// One of the nine positions the thumbstick can be classified into.
///
/// The lower diagonals keep the board's own names (`LowerLeft`,
/// `LowerRight`) rather than `DownLeft`/`DownRight`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    #[default]
    #[serde(alias = "middle")]
    Center,
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    LowerLeft,
    LowerRight,
}

impl Direction {
    /// All directions in 3x3 grid order, top row first.
    pub const ALL: [Direction; 9] = [
        Direction::UpLeft,
        Direction::Up,
        Direction::UpRight,
        Direction::Left,
        Direction::Center,
        Direction::Right,
        Direction::LowerLeft,
        Direction::Down,
        Direction::LowerRight,
    ];

    /// Kebab-case name, matching the serde representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Center => "center",
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::UpLeft => "up-left",
            Direction::UpRight => "up-right",
            Direction::LowerLeft => "lower-left",
            Direction::LowerRight => "lower-right",
        }
    }

    /// Single character used when drawing direction maps.
    pub const fn glyph(self) -> char {
        match self {
            Direction::Center => '.',
            Direction::Up => '↑',
            Direction::Down => '↓',
            Direction::Left => '←',
            Direction::Right => '→',
            Direction::UpLeft => '↖',
            Direction::UpRight => '↗',
            Direction::LowerLeft => '↙',
            Direction::LowerRight => '↘',
        }
    }

    /// Mirror across the vertical axis.
    pub const fn mirror_horizontal(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::UpLeft => Direction::UpRight,
            Direction::UpRight => Direction::UpLeft,
            Direction::LowerLeft => Direction::LowerRight,
            Direction::LowerRight => Direction::LowerLeft,
            other => other,
        }
    }

    pub const fn is_center(self) -> bool {
        matches!(self, Direction::Center)
    }

    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::UpLeft | Direction::UpRight | Direction::LowerLeft | Direction::LowerRight
        )
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = JoystickError;

    /// Accepts kebab-case, snake_case and the block names (`UpRight`,
    /// `Middle`), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "center" | "centre" | "middle" => Ok(Direction::Center),
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            "upleft" => Ok(Direction::UpLeft),
            "upright" => Ok(Direction::UpRight),
            "lowerleft" | "downleft" => Ok(Direction::LowerLeft),
            "lowerright" | "downright" => Ok(Direction::LowerRight),
            _ => Err(JoystickError::UnknownDirection(s.to_string())),
        }
    }
}
