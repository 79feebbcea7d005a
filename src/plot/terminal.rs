use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine, Points};
use ratatui::widgets::{Block, Paragraph, Wrap};
use std::io::{self, stdout};
use std::time::Duration;
use tracing::debug;

use super::{LegendItem, PlotScene, PlotSink};
use crate::color::{ColorScheme, PlotPalette};

const INFO_WIDTH: u16 = 48;

/// Full-screen terminal plot, closed with `q`, `Esc` or `Ctrl-C`.
pub struct TerminalPlot {
    color_scheme: ColorScheme,
    wedge_rings: usize,
}

impl TerminalPlot {
    pub fn new(color_scheme: ColorScheme, wedge_rings: usize) -> Self {
        Self {
            color_scheme,
            wedge_rings,
        }
    }
}

impl PlotSink for TerminalPlot {
    fn present(&mut self, scene: &PlotScene) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let result = self.run_window(&mut terminal, scene);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn name(&self) -> &'static str {
        "terminal"
    }
}

impl TerminalPlot {
    fn run_window(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        scene: &PlotScene,
    ) -> Result<()> {
        let wedge = scene.wedge_points(self.wedge_rings);
        let poll = Duration::from_millis(250);

        loop {
            let scheme = self.color_scheme;
            terminal.draw(|frame| draw_scene(frame, scene, &wedge, scheme))?;

            if !event::poll(poll)? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key {
                    KeyEvent {
                        code: KeyCode::Char('q') | KeyCode::Esc,
                        ..
                    }
                    | KeyEvent {
                        code: KeyCode::Char('c'),
                        modifiers: KeyModifiers::CONTROL,
                        ..
                    } => {
                        break;
                    }
                    KeyEvent {
                        code: KeyCode::Char('c'),
                        ..
                    } => {
                        self.color_scheme = self.color_scheme.next();
                        debug!("Switched plot colors to {}", self.color_scheme.name());
                    }
                    _ => {}
                }
            }
        }

        Ok(())
    }
}

fn rgb(c: (u8, u8, u8)) -> Color {
    Color::Rgb(c.0, c.1, c.2)
}

fn legend_color(item: LegendItem, palette: &PlotPalette) -> Color {
    rgb(match item {
        LegendItem::Outline => palette.outline,
        LegendItem::Wedge => palette.wedge,
        LegendItem::Arc => palette.arc,
        LegendItem::Radius => palette.radius,
        LegendItem::Diameter => palette.diameter,
    })
}

/// Largest rect inside `area` whose cells cover a visually square region,
/// given cells about twice as tall as wide.
pub fn square_cells(area: Rect) -> Rect {
    let height = area.height.min(area.width / 2);
    let width = (height * 2).min(area.width);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn draw_scene(frame: &mut Frame, scene: &PlotScene, wedge: &[(f64, f64)], scheme: ColorScheme) {
    let area = frame.area();
    let palette = scheme.palette();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(INFO_WIDTH)])
        .split(area);

    let plot_area = square_cells(chunks[0]);
    let extent = scene.view_extent();
    let (cx, cy) = scene.center;

    let canvas = Canvas::default()
        .block(Block::bordered().title(scene.title.clone()))
        .marker(Marker::Braille)
        .x_bounds([cx - extent, cx + extent])
        .y_bounds([cy - extent, cy + extent])
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: wedge,
                color: rgb(palette.wedge),
            });
            ctx.layer();
            ctx.draw(&Circle {
                x: cx,
                y: cy,
                radius: scene.radius,
                color: rgb(palette.outline),
            });
            let ((x1, y1), (x2, y2)) = scene.diameter;
            ctx.draw(&CanvasLine {
                x1,
                y1,
                x2,
                y2,
                color: rgb(palette.diameter),
            });
            for ((x1, y1), (x2, y2)) in scene.radii {
                ctx.draw(&CanvasLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    color: rgb(palette.radius),
                });
            }
            for pair in scene.arc.windows(2) {
                ctx.draw(&CanvasLine {
                    x1: pair[0].0,
                    y1: pair[0].1,
                    x2: pair[1].0,
                    y2: pair[1].1,
                    color: rgb(palette.arc),
                });
            }
        });
    frame.render_widget(canvas, plot_area);

    let mut lines: Vec<Line> = scene
        .legend
        .iter()
        .map(|(item, label)| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(legend_color(*item, &palette))),
                Span::raw(label.clone()),
            ])
        })
        .collect();
    lines.push(Line::default());
    lines.extend(scene.info.iter().map(|s| Line::from(s.clone())));
    lines.push(Line::default());
    lines.push(Line::styled(
        format!("[c]olor: {} | [q]uit", scheme.name()),
        Style::default().fg(Color::DarkGray),
    ));

    let info = Paragraph::new(lines)
        .block(Block::bordered().title("Details"))
        .wrap(Wrap { trim: true });
    frame.render_widget(info, chunks[1]);
}
