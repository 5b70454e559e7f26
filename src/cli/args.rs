use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "trellis")]
#[command(version, about = "Rectangle layout and animation engine", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Arrange the controls of one or more layout files and report their rectangles
    Arrange(ArrangeArgs),
    /// Interpolate a rectangle between two states and report every frame
    Animate(AnimateArgs),
    /// Write a sample layout file
    Init(InitArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ArrangeArgs {
    /// Layout files or glob patterns
    #[arg(required = true)]
    pub input: Vec<String>,

    /// Write the JSON report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Override the arrangement strategy from the layout files
    #[arg(short, long, value_enum)]
    pub strategy: Option<ArrangementKind>,

    /// Override the number of grid columns
    #[arg(long)]
    pub columns: Option<usize>,

    /// Override the margin in pixels
    #[arg(short, long, allow_negative_numbers = true)]
    pub margin: Option<i32>,

    /// Fail if any control does not fit in its container
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug, Clone)]
pub struct AnimateArgs {
    /// Animation file
    pub input: PathBuf,

    /// Write the JSON report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Override the number of interpolation steps
    #[arg(long)]
    pub steps: Option<u32>,

    /// Only emit every Nth frame (the final frame is always emitted)
    #[arg(long, value_name = "N")]
    pub every: Option<u32>,
}

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Where to write the sample layout
    #[arg(default_value = "layout.json")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

/// Arrangement strategy without its parameters
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ArrangementKind {
    /// Equal cells, N columns per row
    #[value(name = "grid")]
    Grid,
    /// Top to bottom
    #[value(name = "vertical")]
    Vertical,
    /// Left to right
    #[value(name = "horizontal")]
    Horizontal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arrange_overrides() {
        let cli = CliArgs::parse_from([
            "trellis",
            "arrange",
            "a.json",
            "layouts/*.json",
            "--strategy",
            "grid",
            "--columns",
            "3",
            "--margin",
            "-2",
            "-v",
        ]);
        assert!(cli.verbose);
        let Command::Arrange(args) = cli.command else {
            panic!("expected arrange");
        };
        assert_eq!(args.input, vec!["a.json", "layouts/*.json"]);
        assert_eq!(args.strategy, Some(ArrangementKind::Grid));
        assert_eq!(args.columns, Some(3));
        assert_eq!(args.margin, Some(-2));
        assert!(!args.strict);
    }

    #[test]
    fn test_parse_init_default_path() {
        let cli = CliArgs::parse_from(["trellis", "init"]);
        let Command::Init(args) = cli.command else {
            panic!("expected init");
        };
        assert_eq!(args.path, PathBuf::from("layout.json"));
        assert!(!args.force);
    }

    #[test]
    fn test_arrange_requires_input() {
        assert!(CliArgs::try_parse_from(["trellis", "arrange"]).is_err());
    }
}
