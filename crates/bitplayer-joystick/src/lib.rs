//! Joystick direction classification for the BitPlayer gamepad
//!
//! The BitPlayer exposes its thumbstick as two potentiometers on analog
//! pins. This crate turns one sample of those two channels into one of nine
//! discrete positions using quadrant banding: each quadrant is split into
//! three angular bands by comparing one coordinate against `sin 22.5°` and
//! `sin 67.5°` fractions of the sample radius, so no trigonometry runs per
//! sample.
//!
//! # Example
//!
//! ```
//! use bitplayer_joystick::{Direction, DirectionClassifier, JoystickConfig};
//!
//! let classifier = DirectionClassifier::new(JoystickConfig::default())?;
//! assert_eq!(classifier.classify_raw(800, 800), Direction::UpRight);
//! assert!(classifier.is_at_raw(500, 500, Direction::Center));
//! # Ok::<(), bitplayer_joystick::JoystickError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod classifier;
pub mod config;
pub mod direction;

pub use classifier::*;
pub use config::*;
pub use direction::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JoystickError {
    #[error("Invalid joystick config: {field} {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("Unknown direction: {0}")]
    UnknownDirection(String),
}

pub type JoystickResult<T> = Result<T, JoystickError>;
