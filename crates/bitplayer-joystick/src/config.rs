//! Joystick calibration config

use serde::{Deserialize, Serialize};

use crate::{JoystickError, JoystickResult};

/// Raw reading of a centered stick on the BitPlayer (both axes).
pub const DEFAULT_CENTER: u16 = 500;
/// Dead-zone radius in raw ADC units.
pub const DEFAULT_DEAD_ZONE: u32 = 250;
/// Largest value the 10-bit analog inputs report.
pub const DEFAULT_ADC_MAX: u16 = 1023;

/// Calibration of the thumbstick's two analog channels.
///
/// Raw readings are turned into offsets by subtracting the center; the
/// dead-zone radius is measured in the same raw units.
///
/// # Examples
///
/// ```
/// use bitplayer_joystick::JoystickConfig;
///
/// let config = JoystickConfig::default()
///     .with_center(512, 498)
///     .with_dead_zone(200);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.center_x, 512);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JoystickConfig {
    /// Raw X reading when the stick is at rest.
    pub center_x: u16,
    /// Raw Y reading when the stick is at rest.
    pub center_y: u16,
    /// Samples whose radius is at or below this are `Center`.
    pub dead_zone_radius: u32,
    /// Full-scale analog reading.
    pub adc_max: u16,
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self {
            center_x: DEFAULT_CENTER,
            center_y: DEFAULT_CENTER,
            dead_zone_radius: DEFAULT_DEAD_ZONE,
            adc_max: DEFAULT_ADC_MAX,
        }
    }
}

impl JoystickConfig {
    pub fn with_center(mut self, center_x: u16, center_y: u16) -> Self {
        self.center_x = center_x;
        self.center_y = center_y;
        self
    }

    pub fn with_dead_zone(mut self, radius: u32) -> Self {
        self.dead_zone_radius = radius;
        self
    }

    pub fn with_adc_max(mut self, adc_max: u16) -> Self {
        self.adc_max = adc_max;
        self
    }

    /// Checks that the center lies on the ADC scale and the dead zone is
    /// non-empty and smaller than the scale.
    ///
    /// # Errors
    ///
    /// Returns [`JoystickError::InvalidConfig`] naming the first offending
    /// field.
    pub fn validate(&self) -> JoystickResult<()> {
        if self.adc_max == 0 {
            return Err(invalid("adcMax", "must be greater than 0".to_string()));
        }
        if self.center_x > self.adc_max {
            return Err(invalid(
                "centerX",
                format!("{} exceeds adcMax {}", self.center_x, self.adc_max),
            ));
        }
        if self.center_y > self.adc_max {
            return Err(invalid(
                "centerY",
                format!("{} exceeds adcMax {}", self.center_y, self.adc_max),
            ));
        }
        if self.dead_zone_radius == 0 {
            return Err(invalid(
                "deadZoneRadius",
                "must be greater than 0".to_string(),
            ));
        }
        if self.dead_zone_radius > u32::from(self.adc_max) {
            return Err(invalid(
                "deadZoneRadius",
                format!("{} exceeds adcMax {}", self.dead_zone_radius, self.adc_max),
            ));
        }
        Ok(())
    }

    /// Converts a raw reading pair to signed offsets from the center.
    pub fn offset(&self, raw_x: u16, raw_y: u16) -> (i32, i32) {
        (
            i32::from(raw_x) - i32::from(self.center_x),
            i32::from(raw_y) - i32::from(self.center_y),
        )
    }
}

fn invalid(field: &'static str, reason: String) -> JoystickError {
    JoystickError::InvalidConfig { field, reason }
}
