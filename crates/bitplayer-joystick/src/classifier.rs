//! Nine-way direction classifier

use crate::{DEFAULT_DEAD_ZONE, Direction, JoystickConfig, JoystickResult};

/// `sin 22.5°`, as used by the board firmware.
pub const SIN_22_5: f64 = 0.38;
/// `sin 67.5°`, as used by the board firmware.
pub const SIN_67_5: f64 = 0.92;

/// Band boundaries derived from a single sample.
///
/// `value1` and `value2` scale with the sample's own radius, not with the
/// dead zone, so the angular bands are the same at any deflection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// Rounded distance of the sample from the center.
    pub radius: i64,
    pub dead_zone: i64,
    /// `round(radius * sin 22.5°)`
    pub value1: i64,
    /// `round(radius * sin 67.5°)`
    pub value2: i64,
}

impl Thresholds {
    pub fn compute(x: i32, y: i32, dead_zone: u32) -> Self {
        let (xf, yf) = (f64::from(x), f64::from(y));
        // i32 squares summed in f64 stay finite and well below i64::MAX
        let radius = (xf * xf + yf * yf).sqrt().round();

        Self {
            radius: radius as i64,
            dead_zone: i64::from(dead_zone),
            value1: (radius * SIN_22_5).round() as i64,
            value2: (radius * SIN_67_5).round() as i64,
        }
    }

    pub fn in_dead_zone(&self) -> bool {
        self.radius <= self.dead_zone
    }

    /// Picks one of three bands for a quadrant by comparing `v` against the
    /// two boundaries.
    fn band(&self, v: i64, above: Direction, below: Direction, between: Direction) -> Direction {
        if v > self.value2 {
            above
        } else if v < self.value1 {
            below
        } else {
            between
        }
    }
}

/// Classifies an offset sample with the board's default dead zone.
pub fn classify(x: i32, y: i32) -> Direction {
    classify_with_dead_zone(x, y, DEFAULT_DEAD_ZONE)
}

/// Classifies an offset sample `(x, y)` relative to the stick center.
///
/// Samples on an axis (`x == 0` or `y == 0`) outside the dead zone fall in
/// no quadrant and classify as [`Direction::Center`].
pub fn classify_with_dead_zone(x: i32, y: i32, dead_zone: u32) -> Direction {
    let t = Thresholds::compute(x, y, dead_zone);
    if t.in_dead_zone() {
        return Direction::Center;
    }

    let (x, y) = (i64::from(x), i64::from(y));
    match (x.signum(), y.signum()) {
        (1, 1) => t.band(y, Direction::Up, Direction::Right, Direction::UpRight),
        (1, -1) => t.band(x, Direction::Right, Direction::Down, Direction::LowerRight),
        // lower left bands on |y|, unlike lower right which bands on x
        (-1, -1) => t.band(y.abs(), Direction::Down, Direction::Left, Direction::LowerLeft),
        (-1, 1) => t.band(y, Direction::Up, Direction::Left, Direction::UpLeft),
        _ => Direction::Center,
    }
}

/// Is the stick, currently at `current`, in position `target`?
pub fn is_at_position(current: Direction, target: Direction) -> bool {
    current == target
}

/// Classifier bound to a validated calibration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectionClassifier {
    config: JoystickConfig,
}

impl DirectionClassifier {
    /// # Errors
    ///
    /// Returns the config's validation error.
    pub fn new(config: JoystickConfig) -> JoystickResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &JoystickConfig {
        &self.config
    }

    pub fn thresholds(&self, x: i32, y: i32) -> Thresholds {
        Thresholds::compute(x, y, self.config.dead_zone_radius)
    }

    pub fn classify_offset(&self, x: i32, y: i32) -> Direction {
        let direction = classify_with_dead_zone(x, y, self.config.dead_zone_radius);
        tracing::trace!(x, y, %direction, "classified joystick offset");
        direction
    }

    /// Classifies raw analog readings. Readings beyond the ADC scale are
    /// used as-is.
    pub fn classify_raw(&self, raw_x: u16, raw_y: u16) -> Direction {
        let (x, y) = self.config.offset(raw_x, raw_y);
        self.classify_offset(x, y)
    }

    pub fn is_at_raw(&self, raw_x: u16, raw_y: u16, target: Direction) -> bool {
        is_at_position(self.classify_raw(raw_x, raw_y), target)
    }
}
