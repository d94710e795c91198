//! Dry run of the board glue against an in-memory platform

use anyhow::Result;
use bitplayer_board::io::mock::MockPinIo;
use bitplayer_board::{BitPlayerKey, Board, BoardConfig};
use bitplayer_joystick::Direction;
use serde::Serialize;

use crate::commands::KeyArg;
use crate::output;

/// What the board reported for one simulated poll.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationReport {
    pub raw: (u16, u16),
    pub direction: Direction,
    pub pressed: Vec<BitPlayerKey>,
    pub motor: bool,
}

/// Brings up a board on a mock platform with the stick at `raw` and `keys`
/// held, then polls it once. The motor follows any held key.
pub fn run_simulation(
    config: BoardConfig,
    raw: (u16, u16),
    keys: &[KeyArg],
) -> Result<SimulationReport> {
    let mut io = MockPinIo::new();
    io.set_analog(config.pins.joystick_x, raw.0);
    io.set_analog(config.pins.joystick_y, raw.1);
    for &key in keys {
        io.press(config.pins.key(BitPlayerKey::from(key)));
    }

    let mut board = Board::initialize(io, config)?;
    let direction = board.joystick_direction()?;
    let pressed = board.pressed_keys()?;
    board.set_motor(!pressed.is_empty())?;
    let motor = board.io().output_level(config.pins.motor).unwrap_or(false);

    tracing::info!(%direction, pressed = pressed.len(), motor, "simulated poll");

    Ok(SimulationReport {
        raw,
        direction,
        pressed,
        motor,
    })
}

/// Execute simulate command
pub fn execute(config: BoardConfig, raw: (u16, u16), keys: &[KeyArg], json: bool) -> Result<()> {
    let report = run_simulation(config, raw, keys)?;
    output::print_simulation(&report, &config, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulation_idle() -> Result<()> {
        let report = run_simulation(BoardConfig::default(), (500, 500), &[])?;
        assert_eq!(report.direction, Direction::Center);
        assert!(report.pressed.is_empty());
        assert!(!report.motor);
        Ok(())
    }

    #[test]
    fn test_simulation_keys_and_stick() -> Result<()> {
        let report = run_simulation(
            BoardConfig::default(),
            (200, 800),
            &[KeyArg::R, KeyArg::A],
        )?;
        assert_eq!(report.direction, Direction::UpLeft);
        assert_eq!(report.pressed, vec![BitPlayerKey::A, BitPlayerKey::R]);
        assert!(report.motor);
        Ok(())
    }
}
