//! Command implementations for bitplayerctl CLI

pub mod config;
pub mod joystick;
pub mod simulate;

use std::path::PathBuf;

use bitplayer_board::BitPlayerKey;
use clap::{Args, Subcommand, ValueEnum};

/// A joystick sample given on the command line.
#[derive(Args, Debug, Clone, Copy)]
pub struct SampleArgs {
    /// X deflection (offset from center, or raw reading with --raw)
    #[arg(allow_negative_numbers = true)]
    pub x: i32,
    /// Y deflection (offset from center, or raw reading with --raw)
    #[arg(allow_negative_numbers = true)]
    pub y: i32,
    /// Treat x and y as raw analog readings
    #[arg(long)]
    pub raw: bool,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Check a configuration file without using it
    Validate {
        /// JSON or YAML config file
        file: PathBuf,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyArg {
    A,
    B,
    C,
    D,
    L,
    R,
}

impl From<KeyArg> for BitPlayerKey {
    fn from(key: KeyArg) -> Self {
        match key {
            KeyArg::A => BitPlayerKey::A,
            KeyArg::B => BitPlayerKey::B,
            KeyArg::C => BitPlayerKey::C,
            KeyArg::D => BitPlayerKey::D,
            KeyArg::L => BitPlayerKey::L,
            KeyArg::R => BitPlayerKey::R,
        }
    }
}
