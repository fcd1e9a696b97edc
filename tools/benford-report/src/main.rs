mod report;
mod table;

use argh::FromArgs;
use pkgsize_benford::prelude::*;
use report::{build_report, load_log, render_json, render_text, ReportError};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Compares the leading digits of package sizes in a package manager log against Benford's Law
#[derive(FromArgs, Debug)]
pub struct Args {
    /// path to the log file, e.g. /var/log/pacman.log
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// also analyze each size range separately
    #[argh(switch, short = 'r')]
    ranges: bool,

    /// ignore transfer rates such as `1.5 MiB/s`
    #[argh(switch, short = 's')]
    skip_rates: bool,

    /// print the report as JSON
    #[argh(switch, short = 'j')]
    json: bool,

    /// log progress to stderr
    #[argh(switch, short = 'v')]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<(), ReportError> {
    let args: Args = argh::from_env();
    init_logging(args.verbose);

    tracing::info!(input = %args.input.display(), "reading log");
    let text = load_log(&args.input)?;

    let settings = ExtractorSettings::new().with_skip_transfer_rates(args.skip_rates);
    let report = build_report(&text, settings, args.ranges)?;

    if args.json {
        println!("{}", render_json(&report)?);
    } else {
        print!("{}", render_text(&report));
    }

    Ok(())
}
