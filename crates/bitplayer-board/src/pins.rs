//! Logical inputs and their physical pin assignment

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::{BoardError, BoardResult};

/// Highest pin on the micro:bit edge connector.
pub const MAX_PIN: u8 = 20;

/// An edge-connector pin (`P0`..=`P20`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Pin(u8);

impl Pin {
    pub const P1: Pin = Pin(1);
    pub const P2: Pin = Pin(2);
    pub const P5: Pin = Pin(5);
    pub const P8: Pin = Pin(8);
    pub const P11: Pin = Pin(11);
    pub const P13: Pin = Pin(13);
    pub const P14: Pin = Pin(14);
    pub const P15: Pin = Pin(15);
    pub const P16: Pin = Pin(16);

    /// # Errors
    ///
    /// Returns [`BoardError::InvalidPin`] above [`MAX_PIN`].
    pub fn new(number: u8) -> BoardResult<Self> {
        if number > MAX_PIN {
            return Err(BoardError::InvalidPin(number));
        }
        Ok(Self(number))
    }

    pub const fn number(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Pin {
    type Error = BoardError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Pin::new(number)
    }
}

impl From<Pin> for u8 {
    fn from(pin: Pin) -> Self {
        pin.0
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// The six keys on the BitPlayer face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BitPlayerKey {
    A,
    B,
    C,
    D,
    L,
    R,
}

impl BitPlayerKey {
    pub const ALL: [BitPlayerKey; 6] = [
        BitPlayerKey::A,
        BitPlayerKey::B,
        BitPlayerKey::C,
        BitPlayerKey::D,
        BitPlayerKey::L,
        BitPlayerKey::R,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            BitPlayerKey::A => "A",
            BitPlayerKey::B => "B",
            BitPlayerKey::C => "C",
            BitPlayerKey::D => "D",
            BitPlayerKey::L => "L",
            BitPlayerKey::R => "R",
        }
    }
}

impl fmt::Display for BitPlayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Key transitions a handler can be registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyEvent {
    Click,
    Pressed,
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PullMode {
    #[default]
    None,
    Up,
    Down,
}

/// Physical wiring of the board's inputs and outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PinMap {
    pub key_a: Pin,
    pub key_b: Pin,
    pub key_c: Pin,
    pub key_d: Pin,
    pub key_l: Pin,
    pub key_r: Pin,
    pub motor: Pin,
    pub joystick_x: Pin,
    pub joystick_y: Pin,
}

impl Default for PinMap {
    fn default() -> Self {
        Self::bitplayer()
    }
}

impl PinMap {
    /// Wiring of the stock BitPlayer board.
    pub const fn bitplayer() -> Self {
        Self {
            key_a: Pin::P5,
            key_b: Pin::P11,
            key_c: Pin::P13,
            key_d: Pin::P14,
            key_l: Pin::P15,
            key_r: Pin::P16,
            motor: Pin::P8,
            joystick_x: Pin::P1,
            joystick_y: Pin::P2,
        }
    }

    pub const fn key(&self, key: BitPlayerKey) -> Pin {
        match key {
            BitPlayerKey::A => self.key_a,
            BitPlayerKey::B => self.key_b,
            BitPlayerKey::C => self.key_c,
            BitPlayerKey::D => self.key_d,
            BitPlayerKey::L => self.key_l,
            BitPlayerKey::R => self.key_r,
        }
    }

    /// Reverse lookup of the key wired to `pin`.
    pub fn key_at(&self, pin: Pin) -> Option<BitPlayerKey> {
        BitPlayerKey::ALL.into_iter().find(|&key| self.key(key) == pin)
    }

    fn assignments(&self) -> [(&'static str, Pin); 9] {
        [
            ("key A", self.key_a),
            ("key B", self.key_b),
            ("key C", self.key_c),
            ("key D", self.key_d),
            ("key L", self.key_l),
            ("key R", self.key_r),
            ("motor", self.motor),
            ("joystick X", self.joystick_x),
            ("joystick Y", self.joystick_y),
        ]
    }

    /// Every input and output must sit on its own pin.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::PinConflict`] for the first shared pin.
    pub fn validate(&self) -> BoardResult<()> {
        let assignments = self.assignments();
        for (i, &(first, pin)) in assignments.iter().enumerate() {
            let clash = assignments
                .iter()
                .skip(i.saturating_add(1))
                .find(|(_, other)| *other == pin);
            if let Some(&(second, _)) = clash {
                return Err(BoardError::PinConflict { pin, first, second });
            }
        }
        Ok(())
    }
}
