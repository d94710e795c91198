//! BitPlayer gamepad board support
//!
//! This crate binds the BitPlayer's six keys, vibration motor and thumbstick
//! to a host platform's pin I/O. The platform is reached only through the
//! [`PinIo`] and [`KeyEvents`] traits; [`io::mock`] provides an in-memory
//! implementation for tests and desktop tools.
//!
//! ## Features
//! - Logical keys decoupled from physical pins via [`PinMap`]
//! - Active-low key polling with pull-ups configured once at startup
//! - Key event registration (click, pressed, released)
//! - Vibration motor on/off
//! - Nine-way joystick queries backed by `bitplayer-joystick`

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod board;
pub mod io;
pub mod pins;

pub use board::*;
pub use io::{KeyEvents, KeyHandler, PinIo};
pub use pins::*;

use bitplayer_joystick::JoystickError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("I/O error on pin {pin}: {reason}")]
    Io { pin: Pin, reason: String },

    #[error("Board disconnected")]
    Disconnected,

    #[error("Invalid pin number: {0} (expected 0..=20)")]
    InvalidPin(u8),

    #[error("Pin {pin} is assigned to both {first} and {second}")]
    PinConflict {
        pin: Pin,
        first: &'static str,
        second: &'static str,
    },

    #[error("Joystick error: {0}")]
    Joystick(#[from] JoystickError),
}

pub type BoardResult<T> = Result<T, BoardError>;
