//! Step-by-step textual report
//!
//! Each derived quantity is shown with its formula, the formula with the
//! input substituted, and the result.

use std::fmt;

use crate::geometry::CircleProperties;

/// Decimals kept when echoing an input value
const INPUT_DECIMALS: usize = 6;

/// Short form of an input value: trailing zeros dropped, scientific
/// notation outside [1e-4, 1e6).
pub fn format_input(v: f64) -> String {
    let abs = v.abs();
    if abs != 0.0 && !(1e-4..1e6).contains(&abs) {
        let s = format!("{:.*e}", INPUT_DECIMALS, v);
        match s.split_once('e') {
            Some((mantissa, exp)) => format!("{}e{}", trim_zeros(mantissa), exp),
            None => s,
        }
    } else {
        trim_zeros(&format!("{:.*}", INPUT_DECIMALS, v)).to_string()
    }
}

/// A result at `precision` decimals. Values that would print as zero or
/// with more than fifteen integer digits use scientific notation.
pub fn format_value(v: f64, precision: usize) -> String {
    let abs = v.abs();
    let tiny = abs != 0.0 && abs < 0.1f64.powi(precision as i32);
    if v.is_finite() && (abs >= 1e15 || tiny) {
        format!("{:.*e}", precision, v)
    } else {
        format!("{:.*}", precision, v)
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub label: &'static str,
    pub formula: &'static str,
    pub substituted: String,
    pub value: f64,
}

impl ReportLine {
    pub fn render(&self, precision: usize) -> String {
        format!(
            "{} = {} = {} = {}",
            self.label,
            self.formula,
            self.substituted,
            format_value(self.value, precision)
        )
    }
}

/// Report lines in presentation order: diameter, circumference, area,
/// arc length, sector area.
pub fn report_lines(props: &CircleProperties) -> Vec<ReportLine> {
    let r = format_input(props.radius());
    let a = format_input(props.angle_degrees());
    let circle = &props.circle_metrics;
    let sector = &props.sector_metrics;

    vec![
        ReportLine {
            label: "Diameter",
            formula: "2r",
            substituted: format!("2({})", r),
            value: circle.diameter,
        },
        ReportLine {
            label: "Circumference",
            formula: "2πr",
            substituted: format!("2π({})", r),
            value: circle.circumference,
        },
        ReportLine {
            label: "Area",
            formula: "πr²",
            substituted: format!("π({})²", r),
            value: circle.area,
        },
        ReportLine {
            label: "Arc length",
            formula: "(θ/360)·2πr",
            substituted: format!("({}/360)·2π({})", a, r),
            value: sector.arc_length,
        },
        ReportLine {
            label: "Sector area",
            formula: "(θ/360)·πr²",
            substituted: format!("({}/360)·π({})²", a, r),
            value: sector.sector_area,
        },
    ]
}

/// Full report with section headings
pub struct Report<'a> {
    props: &'a CircleProperties,
    precision: usize,
}

impl<'a> Report<'a> {
    pub fn new(props: &'a CircleProperties, precision: usize) -> Self {
        Self { props, precision }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = report_lines(self.props);
        let (basic, sector) = lines.split_at(3);

        writeln!(f, "=== Input Data ===")?;
        writeln!(f, "Radius: {}", format_input(self.props.radius()))?;
        writeln!(f, "Sector angle: {}°", format_input(self.props.angle_degrees()))?;
        writeln!(f)?;
        writeln!(f, "=== Basic Circle Calculations ===")?;
        for line in basic {
            writeln!(f, "{}", line.render(self.precision))?;
        }
        writeln!(f)?;
        writeln!(f, "=== Arc and Sector Calculations ===")?;
        for (i, line) in sector.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line.render(self.precision))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{CircleSpec, SectorSpec};

    fn props(r: f64, a: f64) -> CircleProperties {
        CircleProperties::new(CircleSpec::new(r).unwrap(), SectorSpec::new(a).unwrap())
    }

    #[test]
    fn lines_follow_presentation_order() {
        let labels: Vec<_> = report_lines(&props(5.0, 90.0))
            .iter()
            .map(|l| l.label)
            .collect();
        assert_eq!(
            labels,
            ["Diameter", "Circumference", "Area", "Arc length", "Sector area"]
        );
    }

    #[test]
    fn circumference_shows_the_work() {
        let lines = report_lines(&props(5.0, 90.0));
        assert_eq!(lines[1].render(4), "Circumference = 2πr = 2π(5) = 31.4159");
    }

    #[test]
    fn sector_lines_substitute_the_angle() {
        let lines = report_lines(&props(5.0, 90.0));
        assert_eq!(
            lines[4].render(3),
            "Sector area = (θ/360)·πr² = (90/360)·π(5)² = 19.635"
        );
        assert_eq!(
            lines[3].render(4),
            "Arc length = (θ/360)·2πr = (90/360)·2π(5) = 7.8540"
        );
    }

    #[test]
    fn full_report_has_all_sections() {
        let p = props(2.5, 40.0);
        let text = Report::new(&p, 2).to_string();
        assert!(text.starts_with("=== Input Data ===\nRadius: 2.5\n"));
        assert!(text.contains("=== Basic Circle Calculations ===\nDiameter = 2r = 2(2.5) = 5.00"));
        assert!(text.contains("=== Arc and Sector Calculations ==="));
        assert!(text.ends_with("(40/360)·π(2.5)² = 2.18"));
    }

    #[test]
    fn inputs_are_echoed_in_short_form() {
        assert_eq!(format_input(5.0), "5");
        assert_eq!(format_input(2.5), "2.5");
        assert_eq!(format_input(0.1), "0.1");
        assert_eq!(format_input(1.0 / 3.0), "0.333333");
        assert_eq!(format_input(1234567.0), "1.234567e6");
        assert_eq!(format_input(1e150), "1e150");
        assert_eq!(format_input(1e-5), "1e-5");
    }

    #[test]
    fn extreme_radii_keep_lines_short() {
        let p = props(1e150, 90.0);
        let lines = report_lines(&p);
        assert_eq!(lines[1].render(4), "Circumference = 2πr = 2π(1e150) = 6.2832e150");
        assert_eq!(lines[4].substituted, "(90/360)·π(1e150)²");
        let text = Report::new(&p, 4).to_string();
        assert!(text.starts_with("=== Input Data ===\nRadius: 1e150\n"));
        assert!(text.lines().all(|l| l.chars().count() < 80), "{}", text);

        let lines = report_lines(&props(1e-150, 90.0));
        assert_eq!(lines[2].render(4), "Area = πr² = π(1e-150)² = 3.1416e-300");
    }
}
