use clap::ValueEnum;
use dialoguer::{Confirm, Input};
use serde::{Deserialize, Serialize};
use std::io;

use crate::error::{Field, InputError};
use crate::geometry::{CircleSpec, SectorSpec};

/// What to do with sector angles outside [0, 360]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, ValueEnum, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AnglePolicy {
    #[default]
    Reject, // InvalidInput outside [0, 360]
    Wrap,   // Reduce modulo 360
}

impl AnglePolicy {
    pub fn apply(&self, angle: f64) -> Result<f64, InputError> {
        match self {
            AnglePolicy::Reject => {
                if (0.0..=360.0).contains(&angle) {
                    Ok(angle)
                } else {
                    Err(InputError::invalid(
                        Field::Angle,
                        format!("must be between 0 and 360 degrees (got {})", angle),
                    ))
                }
            }
            AnglePolicy::Wrap => {
                let wrapped = angle.rem_euclid(360.0);
                // a whole number of turns is still a full circle, not an empty one
                if wrapped == 0.0 && angle != 0.0 {
                    Ok(360.0)
                } else {
                    Ok(wrapped)
                }
            }
        }
    }
}

fn parse_number(field: Field, raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| InputError::invalid(field, format!("not a number: '{}'", trimmed)))?;
    if !value.is_finite() {
        return Err(InputError::invalid(
            field,
            format!("must be a finite number (got {})", trimmed),
        ));
    }
    Ok(value)
}

pub fn parse_radius(raw: &str) -> Result<CircleSpec, InputError> {
    if raw.trim().is_empty() {
        return Err(InputError::invalid(Field::Radius, "a value is required"));
    }
    CircleSpec::new(parse_number(Field::Radius, raw)?)
}

/// Blank input selects `default`.
pub fn parse_angle(raw: &str, default: f64, policy: AnglePolicy) -> Result<SectorSpec, InputError> {
    let angle = if raw.trim().is_empty() {
        default
    } else {
        parse_number(Field::Angle, raw)?
    };
    SectorSpec::new(policy.apply(angle)?)
}

/// Where interactive answers come from.
///
/// A cancelled prompt (Ctrl-C) is reported as `io::ErrorKind::Interrupted`.
pub trait Prompter {
    fn read_radius(&mut self) -> io::Result<String>;

    fn read_angle(&mut self, default_angle: f64) -> io::Result<String>;

    fn confirm_another(&mut self) -> io::Result<bool>;
}

/// Terminal prompts
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn read_radius(&mut self) -> io::Result<String> {
        Input::new()
            .with_prompt("Enter circle radius")
            .allow_empty(true)
            .interact_text()
            .map_err(io::Error::from)
    }

    fn read_angle(&mut self, default_angle: f64) -> io::Result<String> {
        Input::new()
            .with_prompt(format!("Enter sector angle in degrees (default = {})", default_angle))
            .allow_empty(true)
            .interact_text()
            .map_err(io::Error::from)
    }

    fn confirm_another(&mut self) -> io::Result<bool> {
        Confirm::new()
            .with_prompt("Would you like to perform another calculation?")
            .default(true)
            .interact()
            .map_err(io::Error::from)
    }
}

/// Read the radius and the sector angle.
///
/// The outer `Result` carries prompt I/O failures, the inner one validation.
/// An invalid radius is reported before the angle is asked for.
pub fn prompt_inputs(
    prompter: &mut dyn Prompter,
    default_angle: f64,
    policy: AnglePolicy,
) -> io::Result<Result<(CircleSpec, SectorSpec), InputError>> {
    let circle = match parse_radius(&prompter.read_radius()?) {
        Ok(c) => c,
        Err(e) => return Ok(Err(e)),
    };
    let raw_angle = prompter.read_angle(default_angle)?;
    Ok(parse_angle(&raw_angle, default_angle, policy).map(|sector| (circle, sector)))
}
