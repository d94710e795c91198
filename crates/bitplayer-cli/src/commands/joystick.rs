//! Joystick classification commands

use anyhow::Result;
use bitplayer_joystick::{Direction, DirectionClassifier, Thresholds, is_at_position};

use crate::commands::SampleArgs;
use crate::error::CliError;
use crate::output;

/// A classified sample, in both coordinate systems.
#[derive(Debug, Clone, Copy)]
pub struct Classification {
    pub offset: (i32, i32),
    pub thresholds: Thresholds,
    pub direction: Direction,
}

/// Resolves a command-line sample to center offsets and classifies it.
pub fn classify_sample(
    classifier: &DirectionClassifier,
    sample: &SampleArgs,
) -> Result<Classification, CliError> {
    let (x, y) = if sample.raw {
        let raw_x = raw_reading("x", sample.x)?;
        let raw_y = raw_reading("y", sample.y)?;
        classifier.config().offset(raw_x, raw_y)
    } else {
        (sample.x, sample.y)
    };

    Ok(Classification {
        offset: (x, y),
        thresholds: classifier.thresholds(x, y),
        direction: classifier.classify_offset(x, y),
    })
}

fn raw_reading(axis: &str, value: i32) -> Result<u16, CliError> {
    u16::try_from(value).map_err(|e| {
        CliError::ValidationError(format!("raw {axis} reading {value} is not a u16: {e}"))
    })
}

/// Execute classify command
pub fn classify(classifier: &DirectionClassifier, sample: &SampleArgs, json: bool) -> Result<()> {
    let result = classify_sample(classifier, sample)?;
    output::print_classification(&result, json);
    Ok(())
}

/// Execute check command. Returns whether the stick is at `target`.
pub fn check(
    classifier: &DirectionClassifier,
    sample: &SampleArgs,
    target: Direction,
    json: bool,
) -> Result<bool> {
    let result = classify_sample(classifier, sample)?;
    let at = is_at_position(result.direction, target);
    output::print_check(&result, target, at, json);
    Ok(at)
}

/// Classifies the raw ADC square on a `step` grid, top row first. The last
/// row and column always sit on `adc_max`.
pub fn direction_map(classifier: &DirectionClassifier, step: u16) -> Result<Vec<String>, CliError> {
    if step == 0 {
        return Err(CliError::ValidationError(
            "step must be greater than 0".to_string(),
        ));
    }

    let adc_max = classifier.config().adc_max;
    let mut coords: Vec<u16> = (0..=adc_max).step_by(usize::from(step)).collect();
    if coords.last() != Some(&adc_max) {
        coords.push(adc_max);
    }

    let rows = coords
        .iter()
        .rev()
        .map(|&raw_y| {
            coords
                .iter()
                .map(|&raw_x| classifier.classify_raw(raw_x, raw_y).glyph())
                .collect()
        })
        .collect();
    Ok(rows)
}

/// Execute map command
pub fn map(classifier: &DirectionClassifier, step: u16, json: bool) -> Result<()> {
    let rows = direction_map(classifier, step)?;
    output::print_map(&rows, step, json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitplayer_joystick::JoystickConfig;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn sample(x: i32, y: i32, raw: bool) -> SampleArgs {
        SampleArgs { x, y, raw }
    }

    #[test]
    fn test_classify_raw_sample() -> TestResult {
        let classifier = DirectionClassifier::default();
        let result = classify_sample(&classifier, &sample(800, 800, true))?;
        assert_eq!(result.offset, (300, 300));
        assert_eq!(result.direction, Direction::UpRight);
        assert_eq!(result.thresholds.radius, 424);
        Ok(())
    }

    #[test]
    fn test_classify_offset_sample() -> TestResult {
        let classifier = DirectionClassifier::default();
        let result = classify_sample(&classifier, &sample(-300, -300, false))?;
        assert_eq!(result.direction, Direction::LowerLeft);
        Ok(())
    }

    #[test]
    fn test_classify_rejects_negative_raw() {
        let classifier = DirectionClassifier::default();
        let result = classify_sample(&classifier, &sample(-1, 500, true));
        assert!(matches!(result, Err(CliError::ValidationError(_))));
    }

    #[test]
    fn test_map_dimensions() -> TestResult {
        let classifier = DirectionClassifier::default();
        let rows = direction_map(&classifier, 100)?;
        // 0, 100, ..., 1000, then the 1023 edge
        assert_eq!(rows.len(), 12);
        assert!(rows.iter().all(|row| row.chars().count() == 12));
        Ok(())
    }

    #[test]
    fn test_map_corners_and_center() -> TestResult {
        let classifier = DirectionClassifier::default();
        let rows = direction_map(&classifier, 100)?;

        let top = rows.first().ok_or("no rows")?;
        // rows run 1023, 1000, ..., 600, 500
        let middle = rows.get(6).ok_or("no middle row")?;
        let bottom = rows.last().ok_or("no rows")?;

        // raw (0, 1023) is (-500, 523): up-left; raw (1023, 0) is lower-right
        assert_eq!(top.chars().next(), Some('↖'));
        assert_eq!(bottom.chars().last(), Some('↘'));
        assert_eq!(bottom.chars().next(), Some('↙'));
        // row y=500 lies on the axis: all center
        assert!(middle.chars().all(|c| c == '.'));
        Ok(())
    }

    #[test]
    fn test_map_coarse_snapshot() -> TestResult {
        let classifier = DirectionClassifier::default();
        let rows = direction_map(&classifier, 256)?;
        insta::assert_snapshot!(rows.join("\n"), @r"
        ↖↖↑↗↗
        ↖↖↑↗↗
        ←..→→
        ↙↙.↘↘
        ↙↙↓↘↘
        ");
        Ok(())
    }

    #[test]
    fn test_map_reaches_adc_edge() -> TestResult {
        let classifier = DirectionClassifier::default();
        // 64 does not divide 1023: 0, 64, ..., 960, then 1023
        let rows = direction_map(&classifier, 64)?;
        assert_eq!(rows.len(), 17);
        assert!(rows.iter().all(|row| row.chars().count() == 17));

        // top-right cell is raw (1023, 1023), the (523, 523) diagonal
        let top = rows.first().ok_or("no rows")?;
        assert_eq!(top.chars().last(), Some('↗'));

        // a step that divides the range does not repeat the edge
        let classifier = DirectionClassifier::new(JoystickConfig::default().with_adc_max(1024))?;
        assert_eq!(direction_map(&classifier, 256)?.len(), 5);
        Ok(())
    }

    #[test]
    fn test_map_rejects_zero_step() {
        let classifier = DirectionClassifier::default();
        assert!(direction_map(&classifier, 0).is_err());
    }

    #[test]
    fn test_map_uses_dead_zone() -> TestResult {
        let classifier = DirectionClassifier::new(JoystickConfig::default().with_dead_zone(1000))?;
        let rows = direction_map(&classifier, 250)?;
        // the farthest corner, raw (1023, 1023), is ~740 from center
        let directional: usize = rows
            .iter()
            .map(|row| row.chars().filter(|&c| c != '.').count())
            .sum();
        assert_eq!(directional, 0);
        Ok(())
    }
}
