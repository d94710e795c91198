//! Initialized BitPlayer board

use bitplayer_joystick::{Direction, DirectionClassifier, JoystickConfig, is_at_position};
use serde::{Deserialize, Serialize};

use crate::io::{KeyEvents, PinIo};
use crate::{BitPlayerKey, BoardResult, KeyEvent, PinMap, PullMode};

/// Everything needed to bring up a board: wiring and joystick calibration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoardConfig {
    pub pins: PinMap,
    pub joystick: JoystickConfig,
}

impl BoardConfig {
    /// # Errors
    ///
    /// Returns the first pin conflict or joystick calibration error.
    pub fn validate(&self) -> BoardResult<()> {
        self.pins.validate()?;
        self.joystick.validate()?;
        Ok(())
    }
}

/// A BitPlayer whose pins have been configured.
///
/// The only way to obtain one is [`Board::initialize`], so holding a `Board`
/// means the one-time pin setup has already run.
pub struct Board<P> {
    io: P,
    pins: PinMap,
    classifier: DirectionClassifier,
}

impl<P: PinIo> Board<P> {
    /// Validates the config, enables pull-ups on every key pin and switches
    /// the motor off.
    ///
    /// # Errors
    ///
    /// Fails on an invalid config or the first platform I/O error.
    pub fn initialize(mut io: P, config: BoardConfig) -> BoardResult<Self> {
        config.validate()?;
        let classifier = DirectionClassifier::new(config.joystick)?;
        let pins = config.pins;

        for key in BitPlayerKey::ALL {
            io.set_pull(pins.key(key), PullMode::Up)?;
        }
        io.digital_write(pins.motor, false)?;

        tracing::debug!(
            motor = %pins.motor,
            joystick_x = %pins.joystick_x,
            joystick_y = %pins.joystick_y,
            dead_zone = config.joystick.dead_zone_radius,
            "BitPlayer initialized"
        );

        Ok(Self {
            io,
            pins,
            classifier,
        })
    }

    /// Stock wiring and calibration.
    ///
    /// # Errors
    ///
    /// Fails on the first platform I/O error.
    pub fn bitplayer(io: P) -> BoardResult<Self> {
        Self::initialize(io, BoardConfig::default())
    }

    /// Keys are active-low: pressed reads as logic 0.
    ///
    /// # Errors
    ///
    /// Propagates the platform read error.
    pub fn key_pressed(&mut self, key: BitPlayerKey) -> BoardResult<bool> {
        let level = self.io.digital_read(self.pins.key(key))?;
        tracing::trace!(%key, level, "key read");
        Ok(!level)
    }

    /// Keys currently held down, in [`BitPlayerKey::ALL`] order.
    ///
    /// # Errors
    ///
    /// Propagates the first platform read error.
    pub fn pressed_keys(&mut self) -> BoardResult<Vec<BitPlayerKey>> {
        let mut pressed = Vec::new();
        for key in BitPlayerKey::ALL {
            if self.key_pressed(key)? {
                pressed.push(key);
            }
        }
        Ok(pressed)
    }

    /// # Errors
    ///
    /// Propagates the platform write error.
    pub fn set_motor(&mut self, on: bool) -> BoardResult<()> {
        self.io.digital_write(self.pins.motor, on)?;
        tracing::debug!(on, "vibration motor");
        Ok(())
    }

    /// Samples both joystick channels once, X first.
    ///
    /// # Errors
    ///
    /// Propagates the platform read error.
    pub fn read_joystick(&mut self) -> BoardResult<(u16, u16)> {
        let x = self.io.analog_read(self.pins.joystick_x)?;
        let y = self.io.analog_read(self.pins.joystick_y)?;
        Ok((x, y))
    }

    /// # Errors
    ///
    /// Propagates the platform read error.
    pub fn joystick_direction(&mut self) -> BoardResult<Direction> {
        let (x, y) = self.read_joystick()?;
        Ok(self.classifier.classify_raw(x, y))
    }

    /// Is the stick at `target` right now? Takes a fresh sample.
    ///
    /// # Errors
    ///
    /// Propagates the platform read error.
    pub fn joystick(&mut self, target: Direction) -> BoardResult<bool> {
        Ok(is_at_position(self.joystick_direction()?, target))
    }

    pub fn pins(&self) -> &PinMap {
        &self.pins
    }

    pub fn classifier(&self) -> &DirectionClassifier {
        &self.classifier
    }

    pub fn io(&self) -> &P {
        &self.io
    }

    pub fn io_mut(&mut self) -> &mut P {
        &mut self.io
    }

    pub fn into_inner(self) -> P {
        self.io
    }
}

impl<P: PinIo + KeyEvents> Board<P> {
    /// Runs `handler` whenever `key` produces `event`.
    ///
    /// # Errors
    ///
    /// Propagates the platform registration error.
    pub fn on_key<F>(&mut self, key: BitPlayerKey, event: KeyEvent, handler: F) -> BoardResult<()>
    where
        F: FnMut() + 'static,
    {
        let pin = self.pins.key(key);
        self.io.register(pin, event, Box::new(handler))?;
        tracing::debug!(%key, %pin, ?event, "key handler registered");
        Ok(())
    }
}
