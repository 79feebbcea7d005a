use anyhow::Result;
use clap::{CommandFactory, Parser};
use is_terminal::IsTerminal;
use tracing::{info, warn};

use circlecalc::config::Config;
use circlecalc::plot::terminal::TerminalPlot;
use circlecalc::plot::PlotSink;
use circlecalc::{input, session, Args};

fn main() -> Result<()> {
    let args = Args::parse();

    let directive = if args.verbose {
        "circlecalc=debug"
    } else {
        "circlecalc=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(directive.parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(shell) = args.completions {
        clap_complete::generate(shell, &mut Args::command(), "circlecalc", &mut std::io::stdout());
        return Ok(());
    }

    if args.init_config {
        let path = Config::init_default_config()?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    // Load or create config
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_from_default_path().unwrap_or_default(),
    };
    config.merge_args(&args);
    config.validate()?;

    let mut terminal_plot = if !config.plot.enabled {
        None
    } else if std::io::stdout().is_terminal() {
        Some(TerminalPlot::new(config.plot.color_scheme, config.plot.wedge_rings))
    } else {
        warn!("stdout is not a terminal, skipping the plot");
        None
    };
    let sink = terminal_plot.as_mut().map(|p| p as &mut dyn PlotSink);

    let mut stdout = std::io::stdout().lock();

    match &args.radius {
        Some(raw_radius) => {
            info!("Running a single calculation");
            let circle = input::parse_radius(raw_radius)?;
            let sector = input::parse_angle(
                args.angle.as_deref().unwrap_or(""),
                config.input.default_angle,
                config.input.angle_policy,
            )?;
            session::run_calculation(circle, sector, &config, args.explain, &mut stdout, sink)?;
        }
        None => {
            session::run_interactive(
                &config,
                args.explain,
                &mut stdout,
                &mut input::DialoguerPrompter,
                sink,
            )?;
        }
    }

    Ok(())
}
