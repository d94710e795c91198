//! Output formatting for CLI responses

use std::path::Path;

use anyhow::{Error, Result};
use bitplayer_board::BoardConfig;
use bitplayer_joystick::Direction;
use colored::*;
use serde_json::{Value, json};

use crate::commands::joystick::Classification;
use crate::commands::simulate::SimulationReport;

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format output as JSON: {e}"),
    }
}

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    print_json(&json!({
        "success": false,
        "error": {
            "message": error.to_string(),
        }
    }));
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

fn classification_json(result: &Classification) -> Value {
    let t = result.thresholds;
    json!({
        "direction": result.direction,
        "offset": { "x": result.offset.0, "y": result.offset.1 },
        "thresholds": {
            "radius": t.radius,
            "deadZone": t.dead_zone,
            "value1": t.value1,
            "value2": t.value2,
        }
    })
}

fn print_thresholds_human(result: &Classification) {
    let t = result.thresholds;
    println!(
        "  {} ({}, {})  {} {}  {} {}/{}  {} {}",
        "offset".dimmed(),
        result.offset.0,
        result.offset.1,
        "radius".dimmed(),
        t.radius,
        "bands".dimmed(),
        t.value1,
        t.value2,
        "dead zone".dimmed(),
        t.dead_zone,
    );
}

pub fn print_classification(result: &Classification, json: bool) {
    if json {
        let mut value = classification_json(result);
        value["success"] = Value::Bool(true);
        print_json(&value);
        return;
    }

    println!("{}", direction_label(result.direction));
    print_thresholds_human(result);
}

pub fn print_check(result: &Classification, target: Direction, at: bool, json: bool) {
    if json {
        let mut value = classification_json(result);
        value["success"] = Value::Bool(true);
        value["target"] = json!(target);
        value["atPosition"] = Value::Bool(at);
        print_json(&value);
        return;
    }

    if at {
        println!("{} {}", "true".green().bold(), target);
    } else {
        println!(
            "{} {} (stick is {})",
            "false".red().bold(),
            target,
            result.direction
        );
    }
    print_thresholds_human(result);
}

pub fn print_map(rows: &[String], step: u16, json: bool) {
    if json {
        print_json(&json!({
            "success": true,
            "step": step,
            "rows": rows,
        }));
        return;
    }

    for row in rows {
        println!("{row}");
    }
}

/// Print configuration: JSON with `--json`, YAML otherwise.
pub fn print_config(config: &BoardConfig, json: bool) -> Result<()> {
    if json {
        print_json(&json!({
            "success": true,
            "config": config,
        }));
    } else {
        print!("{}", serde_yaml::to_string(config)?);
    }
    Ok(())
}

pub fn print_config_valid(file: &Path, config: &BoardConfig, json: bool) {
    if json {
        print_json(&json!({
            "success": true,
            "file": file.display().to_string(),
            "config": config,
        }));
    } else {
        println!("{} {}", "✓".green(), format!("{} is valid", file.display()).bold());
    }
}

pub fn print_simulation(report: &SimulationReport, config: &BoardConfig, json: bool) -> Result<()> {
    if json {
        print_json(&json!({
            "success": true,
            "report": report,
        }));
        return Ok(());
    }

    let pins = &config.pins;
    println!("{}", "BitPlayer (simulated)".bold());
    println!(
        "  {:<10} X={} Y={}  raw ({}, {})",
        "joystick", pins.joystick_x, pins.joystick_y, report.raw.0, report.raw.1
    );
    println!("  {:<10} {}", "direction", direction_label(report.direction));

    let pressed = if report.pressed.is_empty() {
        "none".dimmed().to_string()
    } else {
        report
            .pressed
            .iter()
            .map(|key| format!("{key} ({})", pins.key(*key)))
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!("  {:<10} {}", "pressed", pressed);

    let motor = if report.motor { "on".green() } else { "off".dimmed() };
    println!("  {:<10} {} ({})", "motor", motor, pins.motor);
    Ok(())
}

fn direction_label(direction: Direction) -> ColoredString {
    if direction.is_center() {
        direction.as_str().yellow()
    } else {
        direction.as_str().green().bold()
    }
}
