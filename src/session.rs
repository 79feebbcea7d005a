use anyhow::Result;
use std::io::{self, Write};
use tracing::{debug, info};

use crate::config::Config;
use crate::geometry::ascii::{render_ascii_circle_with, trace_ascii_circle};
use crate::geometry::{CircleProperties, CircleSpec, SectorSpec};
use crate::input::{self, Prompter};
use crate::plot::{PlotScene, PlotSink};
use crate::report::Report;

const RULE_WIDTH: usize = 50;

/// Report, ASCII outline and plot for one validated (radius, angle) pair.
pub fn run_calculation(
    circle: CircleSpec,
    sector: SectorSpec,
    config: &Config,
    explain: bool,
    out: &mut impl Write,
    sink: Option<&mut dyn PlotSink>,
) -> Result<CircleProperties> {
    let props = CircleProperties::new(circle, sector);
    debug!(
        "Computed r={} angle={} area={} sector_area={}",
        props.radius(),
        props.angle_degrees(),
        props.circle_metrics.area,
        props.sector_metrics.sector_area
    );

    writeln!(out)?;
    writeln!(out, "{}", Report::new(&props, config.report.precision))?;

    if config.ascii.enabled {
        let ascii = &config.ascii;
        let settings = ascii.raster_settings();
        writeln!(out)?;
        writeln!(out, "=== ASCII Circle Representation ===")?;
        if explain {
            let mut trace = trace_ascii_circle(
                props.radius(),
                ascii.width,
                ascii.height,
                &settings,
                ascii.trace_points,
            )?;
            trace.boundary = ascii.boundary_glyph;
            writeln!(out, "{}", trace)?;
            writeln!(out)?;
        }
        let grid = render_ascii_circle_with(props.radius(), ascii.width, ascii.height, &settings)?;
        writeln!(out, "{}", grid.to_text(ascii.boundary_glyph, ascii.blank_glyph))?;
    }

    if let Some(sink) = sink {
        writeln!(out)?;
        writeln!(out, "=== Interactive Circle Visualization ===")?;
        writeln!(out, "Launching visualization window...")?;
        out.flush()?;

        info!("Presenting plot with the {} sink", sink.name());
        let scene = PlotScene::new(&props, config.plot.arc_samples);
        sink.present(&scene)?;
    }

    Ok(props)
}

/// Prompt-driven loop: one calculation per round until the user declines
/// another. Invalid input is reported and does not end the session.
///
/// Cancelling an input prompt abandons that calculation only. Cancelling
/// the "another calculation?" prompt ends the session normally. Any other
/// prompt failure, such as a closed stdin, is returned.
pub fn run_interactive(
    config: &Config,
    explain: bool,
    out: &mut impl Write,
    prompter: &mut dyn Prompter,
    mut sink: Option<&mut dyn PlotSink>,
) -> Result<()> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "CIRCLE CALCULATOR AND VISUALIZER")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    loop {
        out.flush()?;
        let policy = config.input.angle_policy;
        match input::prompt_inputs(prompter, config.input.default_angle, policy) {
            Ok(Ok((circle, sector))) => {
                // reborrow so the sink survives into the next round
                let sink = sink.as_mut().map(|s| &mut **s as &mut dyn PlotSink);
                run_calculation(circle, sector, config, explain, out, sink)?;
            }
            Ok(Err(e)) => {
                info!("Rejected {} input: {}", e.field(), e);
                writeln!(out, "Error: {}", e)?;
            }
            Err(e) if is_cancel(&e) => {
                info!("Input cancelled");
                writeln!(out)?;
                writeln!(out, "Operation cancelled by user.")?;
            }
            Err(e) => return Err(e.into()),
        }

        writeln!(out)?;
        writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
        out.flush()?;
        match prompter.confirm_another() {
            Ok(true) => writeln!(out)?,
            Ok(false) => break,
            Err(e) if is_cancel(&e) => {
                info!("Session cancelled");
                writeln!(out)?;
                writeln!(out, "Program terminated by user. Goodbye!")?;
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }
    }

    writeln!(out)?;
    writeln!(out, "Thank you for using the Circle Calculator. Goodbye!")?;
    Ok(())
}

fn is_cancel(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::Interrupted
}
