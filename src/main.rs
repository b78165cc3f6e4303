use anyhow::Result;
use clap::{ArgAction, Parser};
use conv::{convert, Config, ParseMode};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "conv")]
#[command(about = "Convert strings to numbers with strict validation", long_about = None)]
#[command(version)]
#[command(disable_help_flag = true, allow_negative_numbers = true)]
#[command(args_override_self = true)]
struct Cli {
    /// Parse values as decimal floating-point numbers
    #[arg(short = 'd', overrides_with_all = ["long", "human"])]
    double: bool,

    /// Parse values as signed integers
    #[arg(short = 'l', overrides_with_all = ["double", "human"])]
    long: bool,

    /// Parse values as floats with an optional K/M/G/T/P suffix (Ki, Mi, ... for powers of 1024)
    #[arg(short = 'h', overrides_with_all = ["double", "long"])]
    human: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Values to convert; everything from the first value onward is taken literally
    #[arg(num_args = 1.., trailing_var_arg = true)]
    values: Vec<String>,
}

impl Cli {
    /// The flags override each other and themselves, so at most one is still set here.
    fn mode(&self) -> Option<ParseMode> {
        if self.double {
            Some(ParseMode::Double)
        } else if self.long {
            Some(ParseMode::Long)
        } else if self.human {
            Some(ParseMode::Human)
        } else {
            None
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    // RUST_LOG, when set, takes precedence over -v
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config {
        mode: cli.mode(),
        values: cli.values,
    };

    convert(&config, Box::new(std::io::stdout()))?;

    Ok(())
}
