use std::fmt;

use super::validate_radius;
use crate::error::InputError;

/// Terminal cells are roughly twice as tall as they are wide.
pub const DEFAULT_ASPECT_RATIO: f64 = 2.0;

/// Half-width of the band around the radius that counts as the outline
pub const DEFAULT_BAND: f64 = 0.5;

/// Largest grid width or height; larger requests are clamped to it
pub const MAX_GRID_DIM: usize = 1001;

pub const BOUNDARY_CHAR: char = '*';
pub const BLANK_CHAR: char = ' ';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Boundary,
    Blank,
}

/// Tuning constants for the rasterizer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterSettings {
    /// Horizontal cells per vertical cell of equal visual length
    pub aspect_ratio: f64,
    pub band: f64,
}

impl Default for RasterSettings {
    fn default() -> Self {
        Self {
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            band: DEFAULT_BAND,
        }
    }
}

/// Immutable character grid approximating a circle outline.
/// Row-major, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct AsciiGrid {
    cells: Vec<Glyph>,
    width: usize,
    height: usize,
    drawing_radius: f64,
}

impl AsciiGrid {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Radius actually drawn, in rows
    pub fn drawing_radius(&self) -> f64 {
        self.drawing_radius
    }

    pub fn get(&self, col: usize, row: usize) -> Option<Glyph> {
        if col < self.width && row < self.height {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Glyph]> {
        self.cells.chunks(self.width)
    }

    pub fn boundary_count(&self) -> usize {
        self.cells.iter().filter(|g| **g == Glyph::Boundary).count()
    }

    /// Render as `height` lines of exactly `width` characters each.
    pub fn to_text(&self, boundary: char, blank: char) -> String {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|g| match g {
                        Glyph::Boundary => boundary,
                        Glyph::Blank => blank,
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for AsciiGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(BOUNDARY_CHAR, BLANK_CHAR))
    }
}

/// Largest radius, in rows, whose outline fits a `width` x `height` grid.
pub fn fit_radius(width: usize, height: usize, aspect_ratio: f64) -> f64 {
    let half_w = (grid_dim(width) - 1) as f64 / 2.0;
    let half_h = (grid_dim(height) - 1) as f64 / 2.0;
    (half_w / aspect_ratio).min(half_h)
}

/// Rasterize the outline of a circle of `radius` with the default settings.
pub fn render_ascii_circle(
    radius: f64,
    grid_width: usize,
    grid_height: usize,
) -> Result<AsciiGrid, InputError> {
    render_ascii_circle_with(radius, grid_width, grid_height, &RasterSettings::default())
}

pub fn render_ascii_circle_with(
    radius: f64,
    grid_width: usize,
    grid_height: usize,
    settings: &RasterSettings,
) -> Result<AsciiGrid, InputError> {
    validate_radius(radius)?;

    let width = grid_dim(grid_width);
    let height = grid_dim(grid_height);
    let drawing_radius = radius.min(fit_radius(width, height, settings.aspect_ratio));
    let half_w = (width / 2) as i64;
    let half_h = (height / 2) as i64;

    let mut cells = Vec::with_capacity(width * height);
    for row in 0..height as i64 {
        let y = row - half_h;
        for col in 0..width as i64 {
            let x = col - half_w;
            let distance = corrected_distance(x, y, settings.aspect_ratio);
            cells.push(if (distance - drawing_radius).abs() < settings.band {
                Glyph::Boundary
            } else {
                Glyph::Blank
            });
        }
    }

    Ok(AsciiGrid {
        cells,
        width,
        height,
        drawing_radius,
    })
}

#[inline]
fn corrected_distance(x: i64, y: i64, aspect_ratio: f64) -> f64 {
    let cx = x as f64 / aspect_ratio;
    let cy = y as f64;
    (cx * cx + cy * cy).sqrt()
}

/// Grid dimensions are clamped to `MAX_GRID_DIM` and forced odd so there
/// is a centre cell.
#[inline]
fn grid_dim(n: usize) -> usize {
    let n = n.min(MAX_GRID_DIM);
    if n % 2 == 0 {
        n + 1
    } else {
        n
    }
}

/// One sampled cell of the rasterizer, for the explain output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSample {
    pub x: i64,
    pub y: i64,
    pub distance: f64,
    pub deviation: f64,
    pub on_circle: bool,
}

/// How a grid was drawn: parameters plus the first few sampled cells.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterTrace {
    pub drawing_radius: f64,
    pub x_range: (i64, i64),
    pub y_range: (i64, i64),
    pub boundary: char,
    pub samples: Vec<CellSample>,
}

pub fn trace_ascii_circle(
    radius: f64,
    grid_width: usize,
    grid_height: usize,
    settings: &RasterSettings,
    sample_count: usize,
) -> Result<RasterTrace, InputError> {
    validate_radius(radius)?;

    let width = grid_dim(grid_width);
    let height = grid_dim(grid_height);
    let drawing_radius = radius.min(fit_radius(width, height, settings.aspect_ratio));
    let half_w = (width / 2) as i64;
    let half_h = (height / 2) as i64;

    let samples = (-half_h..=half_h)
        .flat_map(|y| (-half_w..=half_w).map(move |x| (x, y)))
        .take(sample_count)
        .map(|(x, y)| {
            let distance = corrected_distance(x, y, settings.aspect_ratio);
            let deviation = (distance - drawing_radius).abs();
            CellSample {
                x,
                y,
                distance,
                deviation,
                on_circle: deviation < settings.band,
            }
        })
        .collect();

    Ok(RasterTrace {
        drawing_radius,
        x_range: (-half_w, half_w),
        y_range: (-half_h, half_h),
        boundary: BOUNDARY_CHAR,
        samples,
    })
}

impl fmt::Display for RasterTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Drawing parameters:")?;
        writeln!(f, "Drawing radius: {:.4}", self.drawing_radius)?;
        writeln!(f, "Y range: from {} to {}", self.y_range.0, self.y_range.1)?;
        writeln!(f, "X range: from {} to {}", self.x_range.0, self.x_range.1)?;
        writeln!(f)?;
        writeln!(f, "Circle drawing process (first {} points):", self.samples.len())?;
        for s in &self.samples {
            writeln!(f, "  Point: X={}, Y={}", s.x, s.y)?;
            writeln!(f, "    Distance from center: {:.4}", s.distance)?;
            writeln!(f, "    Difference from radius: {:.4}", s.deviation)?;
        }
        writeln!(f)?;
        write!(
            f,
            "Explanation: The '{}' characters indicate points where the distance \
             from the center (0,0) is approximately equal to the radius.",
            self.boundary
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_has_boundary(grid: &AsciiGrid, row: usize) -> bool {
        (0..grid.width()).any(|c| grid.get(c, row) == Some(Glyph::Boundary))
    }

    #[test]
    fn render_is_deterministic() {
        let a = render_ascii_circle(5.0, 21, 21).unwrap();
        let b = render_ascii_circle(5.0, 21, 21).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
        assert!(a.boundary_count() > 0);
    }

    #[test]
    fn every_row_crossing_the_circle_has_an_outline_cell() {
        let grid = render_ascii_circle(5.0, 21, 21).unwrap();
        let center = grid.height() / 2;
        let r = grid.drawing_radius().floor() as usize;
        for row in (center - r)..=(center + r) {
            assert!(row_has_boundary(&grid, row), "row {} is empty", row);
        }
    }

    #[test]
    fn rows_outside_the_circle_are_blank() {
        let grid = render_ascii_circle(5.0, 21, 21).unwrap();
        assert!(!row_has_boundary(&grid, 0));
        assert!(!row_has_boundary(&grid, 20));
    }

    #[test]
    fn outline_is_not_a_filled_disk() {
        let grid = render_ascii_circle(5.0, 21, 21).unwrap();
        assert_eq!(grid.get(10, 10), Some(Glyph::Blank));
        // top of the circle, straight above the centre
        assert_eq!(grid.get(10, 5), Some(Glyph::Boundary));
    }

    #[test]
    fn outline_is_symmetric() {
        let grid = render_ascii_circle(4.0, 17, 9).unwrap();
        let w = grid.width();
        let h = grid.height();
        for row in 0..h {
            for col in 0..w {
                assert_eq!(grid.get(col, row), grid.get(w - 1 - col, row));
                assert_eq!(grid.get(col, row), grid.get(col, h - 1 - row));
            }
        }
    }

    #[test]
    fn text_has_height_lines_of_width_chars() {
        let grid = render_ascii_circle(3.0, 13, 7).unwrap();
        let text = grid.to_text('#', '.');
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines.iter().all(|l| l.chars().count() == 13));
        assert!(text.contains('#'));
    }

    #[test]
    fn even_dimensions_are_made_odd() {
        let grid = render_ascii_circle(2.0, 10, 6).unwrap();
        assert_eq!(grid.width(), 11);
        assert_eq!(grid.height(), 7);
    }

    #[test]
    fn large_radius_is_scaled_to_fit() {
        let grid = render_ascii_circle(500.0, 41, 21).unwrap();
        assert_eq!(grid.drawing_radius(), 10.0);
        assert!(row_has_boundary(&grid, 0));
        assert!(row_has_boundary(&grid, 20));
    }

    #[test]
    fn oversized_grid_is_clamped() {
        let grid = render_ascii_circle(5.0, 1 << 40, 1 << 40).unwrap();
        assert_eq!(grid.width(), MAX_GRID_DIM);
        assert_eq!(grid.height(), MAX_GRID_DIM);

        let grid = render_ascii_circle(5.0, usize::MAX, 21).unwrap();
        assert_eq!(grid.width(), MAX_GRID_DIM);

        let trace = trace_ascii_circle(5.0, usize::MAX, 21, &RasterSettings::default(), 1).unwrap();
        assert_eq!(trace.x_range, (-500, 500));
    }

    #[test]
    fn invalid_radius_yields_no_grid() {
        assert!(render_ascii_circle(0.0, 21, 21).is_err());
        assert!(render_ascii_circle(-1.0, 21, 21).is_err());
        assert!(render_ascii_circle(f64::NAN, 21, 21).is_err());
    }

    #[test]
    fn trace_reports_ranges_and_samples() {
        let settings = RasterSettings::default();
        let trace = trace_ascii_circle(5.0, 21, 11, &settings, 3).unwrap();
        assert_eq!(trace.x_range, (-10, 10));
        assert_eq!(trace.y_range, (-5, 5));
        assert_eq!(trace.samples.len(), 3);
        assert_eq!((trace.samples[0].x, trace.samples[0].y), (-10, -5));

        let text = trace.to_string();
        assert!(text.contains("Y range: from -5 to 5"));
        assert!(text.contains("Point: X=-9, Y=-5"));
    }
}
