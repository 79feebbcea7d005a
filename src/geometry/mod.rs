//! Circle and sector geometry
//!
//! Every quantity here is a pure function of a validated radius and a sector
//! angle. Values are computed once per calculation and never mutated.

pub mod ascii;

pub use ascii::{render_ascii_circle, AsciiGrid, RasterSettings};

use std::f64::consts::PI;

use crate::error::{Field, InputError};

/// Sector angle used when the caller supplies none
pub const DEFAULT_ANGLE_DEGREES: f64 = 40.0;

/// A circle with a finite, strictly positive radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleSpec {
    radius: f64,
}

impl CircleSpec {
    pub fn new(radius: f64) -> Result<Self, InputError> {
        validate_radius(radius)?;
        Ok(Self { radius })
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn metrics(&self) -> CircleMetrics {
        CircleMetrics {
            diameter: 2.0 * self.radius,
            circumference: 2.0 * PI * self.radius,
            area: PI * self.radius * self.radius,
        }
    }
}

/// Sweep of a sector in degrees. Any finite value is accepted here; range
/// policy belongs to the input layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorSpec {
    angle_degrees: f64,
}

impl SectorSpec {
    pub fn new(angle_degrees: f64) -> Result<Self, InputError> {
        if !angle_degrees.is_finite() {
            return Err(InputError::invalid(
                Field::Angle,
                format!("must be a finite number (got {})", angle_degrees),
            ));
        }
        Ok(Self { angle_degrees })
    }

    #[inline]
    pub fn angle_degrees(&self) -> f64 {
        self.angle_degrees
    }

    /// Fraction of the full circle covered by this sector
    #[inline]
    pub fn fraction(&self) -> f64 {
        self.angle_degrees / 360.0
    }

    pub fn metrics(&self, circle: &CircleMetrics) -> SectorMetrics {
        SectorMetrics {
            arc_length: circle.circumference * self.fraction(),
            sector_area: circle.area * self.fraction(),
        }
    }
}

impl Default for SectorSpec {
    fn default() -> Self {
        Self {
            angle_degrees: DEFAULT_ANGLE_DEGREES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleMetrics {
    pub diameter: f64,
    pub circumference: f64,
    pub area: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorMetrics {
    pub arc_length: f64,
    pub sector_area: f64,
}

/// Everything derived from one (radius, angle) pair, consumed by the report
/// and the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleProperties {
    pub circle: CircleSpec,
    pub sector: SectorSpec,
    pub circle_metrics: CircleMetrics,
    pub sector_metrics: SectorMetrics,
}

impl CircleProperties {
    pub fn new(circle: CircleSpec, sector: SectorSpec) -> Self {
        let circle_metrics = circle.metrics();
        let sector_metrics = sector.metrics(&circle_metrics);
        Self {
            circle,
            sector,
            circle_metrics,
            sector_metrics,
        }
    }

    pub fn radius(&self) -> f64 {
        self.circle.radius()
    }

    pub fn angle_degrees(&self) -> f64 {
        self.sector.angle_degrees()
    }

    /// Sector area as a percentage of the circle area
    pub fn sector_percentage(&self) -> f64 {
        self.sector_metrics.sector_area / self.circle_metrics.area * 100.0
    }

    /// Arc length as a percentage of the circumference
    pub fn arc_percentage(&self) -> f64 {
        self.sector_metrics.arc_length / self.circle_metrics.circumference * 100.0
    }
}

pub fn validate_radius(radius: f64) -> Result<(), InputError> {
    if radius.is_nan() || radius.is_infinite() {
        return Err(InputError::invalid(
            Field::Radius,
            format!("must be a finite number (got {})", radius),
        ));
    }
    if radius <= 0.0 {
        return Err(InputError::invalid(
            Field::Radius,
            format!("must be greater than zero (got {})", radius),
        ));
    }
    // the area is the largest and smallest derived quantity
    let area = PI * radius * radius;
    if !area.is_finite() {
        return Err(InputError::invalid(
            Field::Radius,
            format!("too large, the area overflows (got {:e})", radius),
        ));
    }
    if area < f64::MIN_POSITIVE {
        return Err(InputError::invalid(
            Field::Radius,
            format!("too small, the area underflows (got {:e})", radius),
        ));
    }
    Ok(())
}

pub fn compute_circle_metrics(radius: f64) -> Result<CircleMetrics, InputError> {
    Ok(CircleSpec::new(radius)?.metrics())
}

pub fn compute_sector_metrics(radius: f64, angle_degrees: f64) -> Result<SectorMetrics, InputError> {
    let circle = CircleSpec::new(radius)?.metrics();
    Ok(SectorSpec::new(angle_degrees)?.metrics(&circle))
}
