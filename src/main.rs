use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use fairteams::error::ConfigError;
use fairteams::report;
use fairteams::restrict::parse_directives;
use fairteams::roster::load_players;
use fairteams::search::{self, SearchConfig};
use fairteams::weights::WeightsTable;

#[derive(Parser, Debug)]
#[command(
    name = "fairteams",
    about = "Split a rated roster into teams of near-equal strength",
    version
)]
struct Cli {
    /// Ratings CSV with Name, PVP, Gamesense and Teamwork columns
    #[arg(short, long, default_value = "players.csv")]
    file: PathBuf,

    /// Weights CSV keyed by situation signature (e.g. 3v3v2)
    #[arg(short, long, default_value = "weights.csv")]
    weights_file: PathBuf,

    /// Number of teams to form
    #[arg(short, long)]
    teams: usize,

    /// How far a team's strength may drift from the target average
    #[arg(short, long, default_value_t = 1.0)]
    max_deviation: f64,

    /// Stop after this many unique team sets
    #[arg(short, long, default_value_t = 1000)]
    limit: usize,

    /// Seconds without progress before giving up
    #[arg(long, default_value_t = 15)]
    timeout: u64,

    /// Collect all team sets and print them ranked, most balanced last;
    /// pass false to print each one as soon as it is found
    #[arg(short, long, default_value_t = true, action = clap::ArgAction::Set)]
    sort: bool,

    /// Keep two handles on different teams, as "a:b" (repeatable)
    #[arg(short = 'r', long = "separate", value_name = "A:B")]
    separate: Vec<String>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Seed the shuffler for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    init_logging();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(error) => {
            error!("{error}");
            let mut source = std::error::Error::source(&error);
            while let Some(inner) = source {
                error!("caused by: {inner}");
                source = inner.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<ExitCode, ConfigError> {
    let roster = load_players(&cli.file)?;
    let table = WeightsTable::load(&cli.weights_file)?;
    let restrictions = parse_directives(&roster, &cli.separate)?;

    let mut config = SearchConfig::new(cli.teams)
        .with_max_deviation(cli.max_deviation)
        .with_output_quota(cli.limit)
        .with_timeout(Duration::from_secs(cli.timeout))
        .with_deferred(cli.sort);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let mut sink = open_sink(cli.output.as_deref())?;

    let mut write_error: Option<io::Error> = None;
    let outcome = if config.deferred {
        search::run(&roster, &table, &restrictions, &config)?
    } else {
        search::run_with_observer(
            &roster,
            &table,
            &restrictions,
            &config,
            |ordinal, assignment, weights| {
                if write_error.is_none() {
                    if let Err(source) =
                        report::render_assignment(&mut sink, ordinal, assignment, &roster, weights)
                    {
                        write_error = Some(source);
                    }
                }
            },
        )?
    };
    if let Some(source) = write_error {
        error!("failed to write the report: {source}");
        return Ok(ExitCode::FAILURE);
    }

    if config.deferred {
        if let Err(source) =
            report::render_ranked(&mut sink, &outcome.assignments, &roster, &outcome.weights)
        {
            error!("failed to write the report: {source}");
            return Ok(ExitCode::FAILURE);
        }
    }

    // A failed run still dumps whatever was collected, but no summary.
    if outcome.stop.is_failure() {
        return Ok(ExitCode::FAILURE);
    }

    if let Err(source) = report::render_summary(&mut sink, &outcome.stats) {
        error!("failed to write the report: {source}");
        return Ok(ExitCode::FAILURE);
    }
    if let Err(source) = sink.flush() {
        error!("failed to write the report: {source}");
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

fn open_sink(path: Option<&Path>) -> Result<Box<dyn Write>, ConfigError> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
