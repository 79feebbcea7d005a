//! Sector plot
//!
//! The geometry is reduced to plain primitives (a `PlotScene`) that any
//! `PlotSink` can draw. The terminal sink is the interactive plot window.

pub mod terminal;

use anyhow::Result;

use crate::geometry::CircleProperties;
use crate::report::{format_input, format_value};

pub type Point = (f64, f64);

/// Anything that can display a sector plot
pub trait PlotSink {
    fn present(&mut self, scene: &PlotScene) -> Result<()>;

    fn name(&self) -> &'static str;
}

/// Geometric primitives for one circle with a highlighted sector.
///
/// The sector starts on the positive x axis and sweeps counter-clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotScene {
    pub center: Point,
    pub radius: f64,
    pub start_degrees: f64,
    pub sweep_degrees: f64,
    /// Points along the sector's arc, first to last
    pub arc: Vec<Point>,
    /// Start and end radius segments of the sector
    pub radii: [(Point, Point); 2],
    pub diameter: (Point, Point),
    pub title: String,
    pub legend: Vec<(LegendItem, String)>,
    pub info: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendItem {
    Outline,
    Wedge,
    Arc,
    Radius,
    Diameter,
}

impl PlotScene {
    pub fn new(props: &CircleProperties, arc_samples: usize) -> Self {
        let radius = props.radius();
        let angle = props.angle_degrees();
        let circle = &props.circle_metrics;
        let sector = &props.sector_metrics;
        let center = (0.0, 0.0);

        let samples = arc_samples.max(2);
        let sweep = angle.to_radians();
        let arc: Vec<Point> = (0..samples)
            .map(|i| {
                let theta = sweep * i as f64 / (samples - 1) as f64;
                polar(center, theta, radius)
            })
            .collect();

        let shown_angle = format_input(angle);
        let shown_radius = format_input(radius);
        let legend = vec![
            (LegendItem::Outline, "Circle".to_string()),
            (LegendItem::Wedge, format!("Sector Area ({}°)", shown_angle)),
            (
                LegendItem::Arc,
                format!(
                    "Arc Length ({}°) ≈ {}",
                    shown_angle,
                    format_value(sector.arc_length, 2)
                ),
            ),
            (LegendItem::Radius, format!("Radius = {}", shown_radius)),
            (
                LegendItem::Diameter,
                format!("Diameter = {}", format_input(circle.diameter)),
            ),
        ];

        let info = vec![
            format!("Circle Area ≈ {} (π·r²)", format_value(circle.area, 4)),
            format!(
                "Circumference ≈ {} (2π·r)",
                format_value(circle.circumference, 4)
            ),
            format!(
                "Sector Area ({}°) ≈ {} ({:.2}% of circle area)",
                shown_angle,
                format_value(sector.sector_area, 4),
                props.sector_percentage()
            ),
            format!(
                "Arc Length ({}°) ≈ {} ({:.2}% of circumference)",
                shown_angle,
                format_value(sector.arc_length, 4),
                props.arc_percentage()
            ),
        ];

        Self {
            center,
            radius,
            start_degrees: 0.0,
            sweep_degrees: angle,
            arc,
            radii: [
                (center, polar(center, 0.0, radius)),
                (center, polar(center, sweep, radius)),
            ],
            diameter: ((center.0 - radius, center.1), (center.0 + radius, center.1)),
            title: format!("Circle Visualization – Radius {}", shown_radius),
            legend,
            info,
        }
    }

    /// Points filling the sector wedge, sampled on `rings` concentric arcs
    /// with roughly even spacing along each arc.
    pub fn wedge_points(&self, rings: usize) -> Vec<Point> {
        let rings = rings.max(1);
        let sweep = self.sweep_degrees.to_radians();
        let mut points = vec![self.center];

        for ring in 1..=rings {
            let r = self.radius * ring as f64 / rings as f64;
            let steps = ((sweep.abs() * ring as f64 * 2.0).ceil() as usize).max(1);
            for step in 0..=steps {
                let theta = sweep * step as f64 / steps as f64;
                points.push(polar(self.center, theta, r));
            }
        }

        points
    }

    /// Whether `p` lies inside the sector wedge (with a small tolerance)
    pub fn sector_contains(&self, p: Point) -> bool {
        let dx = p.0 - self.center.0;
        let dy = p.1 - self.center.1;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist > self.radius * (1.0 + 1e-9) {
            return false;
        }
        if dist <= self.radius * 1e-9 || self.sweep_degrees.abs() >= 360.0 {
            return true;
        }

        let theta = dy.atan2(dx).to_degrees().rem_euclid(360.0);
        let (lo, hi) = if self.sweep_degrees >= 0.0 {
            (0.0, self.sweep_degrees)
        } else {
            (360.0 + self.sweep_degrees, 360.0)
        };
        let tol = 1e-6;
        (theta >= lo - tol && theta <= hi + tol) || (theta >= 360.0 - tol && lo <= tol)
    }

    /// Half extent of a square view that shows the whole circle with margin
    pub fn view_extent(&self) -> f64 {
        self.radius * 1.15
    }
}

#[inline]
fn polar(center: Point, angle: f64, radius: f64) -> Point {
    (center.0 + angle.cos() * radius, center.1 + angle.sin() * radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{CircleSpec, SectorSpec};

    fn scene(r: f64, a: f64) -> PlotScene {
        let props = CircleProperties::new(CircleSpec::new(r).unwrap(), SectorSpec::new(a).unwrap());
        PlotScene::new(&props, 100)
    }

    fn close(a: Point, b: Point) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn quarter_sector_primitives() {
        let s = scene(5.0, 90.0);
        assert_eq!(s.center, (0.0, 0.0));
        assert_eq!(s.start_degrees, 0.0);
        assert_eq!(s.sweep_degrees, 90.0);
        assert_eq!(s.arc.len(), 100);
        assert!(close(s.arc[0], (5.0, 0.0)));
        assert!(close(*s.arc.last().unwrap(), (0.0, 5.0)));
        assert!(close(s.radii[1].1, (0.0, 5.0)));
        assert_eq!(s.diameter, ((-5.0, 0.0), (5.0, 0.0)));
    }

    #[test]
    fn info_reports_percentages() {
        let s = scene(5.0, 90.0);
        assert!(s.info[2].contains("19.6350"));
        assert!(s.info[2].contains("25.00% of circle area"));
        assert!(s.info[3].contains("25.00% of circumference"));
        assert_eq!(s.title, "Circle Visualization – Radius 5");
    }

    #[test]
    fn labels_stay_short_for_extreme_radii() {
        let s = scene(1e150, 90.0);
        assert_eq!(s.title, "Circle Visualization – Radius 1e150");
        assert!(s.legend.iter().any(|(_, l)| l == "Radius = 1e150"));
        assert!(s.legend.iter().any(|(_, l)| l == "Diameter = 2e150"));
        assert!(s.info[0].starts_with("Circle Area ≈ 3.1416e300"));
        assert!(s.info.iter().all(|l| l.chars().count() < 80));
    }

    #[test]
    fn wedge_points_stay_inside_the_sector() {
        for angle in [10.0, 40.0, 90.0, 200.0, 359.0] {
            let s = scene(3.0, angle);
            let points = s.wedge_points(12);
            assert!(points.len() > 12);
            for p in points {
                assert!(s.sector_contains(p), "{:?} outside {}° sector", p, angle);
            }
        }
    }

    #[test]
    fn points_outside_the_sector_are_excluded() {
        let s = scene(3.0, 90.0);
        assert!(!s.sector_contains((-1.0, -1.0)));
        assert!(!s.sector_contains((4.0, 0.5)));
        assert!(s.sector_contains((1.0, 1.0)));
    }

    #[test]
    fn arc_spans_a_full_turn_at_360() {
        let s = scene(1.0, 360.0);
        assert!(close(s.arc[0], *s.arc.last().unwrap()));
        assert!(s.sector_contains((-0.5, -0.5)));
    }
}
