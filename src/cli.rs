use std::path::PathBuf;

use clap::{ArgAction, Args, Parser};
use pixelsvg::EncodeOptions;

const EXAMPLES: &str = "\
Examples:
  pixelsvg -i in.png -o out.svg   input from arg, output to file
  pixelsvg -o out.svg             input from stdin, output to file
  pixelsvg -i in.png -q           input from arg, output to stdout (-q/--quiet recommended)
  pixelsvg -q                     input from stdin, output to stdout (-q/--quiet recommended)

takes a PNG, GIF, or JPEG file and outputs a pixel perfect SVG";

/// Command line interface definition.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    disable_help_flag = true,
    disable_version_flag = true,
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Input PNG, JPEG, or GIF file (reads standard input when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// Output SVG file (writes standard output when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Frame of the input image to use
    #[arg(short = 'F', long, default_value_t = 0)]
    pub frame: usize,
    #[command(flatten)]
    pub logging: LoggingArgs,
    #[command(flatten)]
    pub encode: EncodeArgs,
    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct LoggingArgs {
    /// Turn off logging
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
    /// Turn on verbose logging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

#[derive(Args, Debug, Clone)]
pub struct EncodeArgs {
    /// Nicely format the output SVG
    #[arg(short, long)]
    pub pretty: bool,
    /// Do not add metadata tag
    #[arg(short = 'm', long = "no-metadata")]
    pub no_metadata: bool,
    /// Trim blank space on output
    #[arg(short = 'T', long)]
    pub trim: bool,
    /// Maximum amount to trim on the left
    #[arg(short = 'l', long, value_name = "AMOUNT")]
    pub max_left_trim: Option<usize>,
    /// Maximum amount to trim on the right
    #[arg(short = 'r', long, value_name = "AMOUNT")]
    pub max_right_trim: Option<usize>,
    /// Maximum amount to trim on the top
    #[arg(short = 't', long, value_name = "AMOUNT")]
    pub max_top_trim: Option<usize>,
    /// Maximum amount to trim on the bottom
    #[arg(short = 'b', long, value_name = "AMOUNT")]
    pub max_bottom_trim: Option<usize>,
    /// Minimum width of the image after trimming
    #[arg(short = 'w', long, value_name = "AMOUNT")]
    pub min_width: Option<usize>,
    /// Minimum height of the image after trimming
    #[arg(short = 'h', long, value_name = "AMOUNT")]
    pub min_height: Option<usize>,
}

impl From<&EncodeArgs> for EncodeOptions {
    fn from(args: &EncodeArgs) -> Self {
        Self {
            pretty: args.pretty,
            include_metadata: !args.no_metadata,
            trim_alpha: args.trim,
            max_left_trim: args.max_left_trim,
            max_right_trim: args.max_right_trim,
            max_top_trim: args.max_top_trim,
            max_bottom_trim: args.max_bottom_trim,
            min_width: args.min_width.unwrap_or(0),
            min_height: args.min_height.unwrap_or(0),
        }
    }
}
