use clap::Parser;
use std::path::PathBuf;

use crate::input::AnglePolicy;

#[derive(Parser, Debug)]
#[command(name = "circlecalc")]
#[command(author, version, about = "Circle geometry calculator with ASCII art and terminal plot")]
pub struct Args {
    /// Circle radius; skips the prompts and runs a single calculation
    #[arg(short, long, allow_hyphen_values = true)]
    pub radius: Option<String>,

    /// Sector angle in degrees (default from config, 40)
    #[arg(short, long, allow_hyphen_values = true, requires = "radius")]
    pub angle: Option<String>,

    /// Config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write a default config file to the XDG config path and exit
    #[arg(long)]
    pub init_config: bool,

    /// How to treat angles outside [0, 360]
    #[arg(long)]
    pub angle_policy: Option<AnglePolicy>,

    /// Decimal places in the report
    #[arg(short, long)]
    pub precision: Option<usize>,

    /// Plot color scheme: classic, spectrum, fire, ocean, forest, monochrome
    #[arg(long)]
    pub colors: Option<String>,

    /// Show how the ASCII circle is drawn
    #[arg(long)]
    pub explain: bool,

    /// Skip the ASCII circle
    #[arg(long)]
    pub no_ascii: bool,

    /// Skip the terminal plot
    #[arg(long)]
    pub no_plot: bool,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_radius_is_accepted_as_a_value() {
        let args = Args::try_parse_from(["circlecalc", "--radius", "-3"]).unwrap();
        assert_eq!(args.radius.as_deref(), Some("-3"));
    }

    #[test]
    fn angle_requires_radius() {
        assert!(Args::try_parse_from(["circlecalc", "--angle", "90"]).is_err());
    }

    #[test]
    fn policy_flag_parses() {
        let args =
            Args::try_parse_from(["circlecalc", "-r", "2", "--angle-policy", "wrap"]).unwrap();
        assert_eq!(args.angle_policy, Some(AnglePolicy::Wrap));
    }
}
