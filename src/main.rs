use std::env;
use std::fs::File;
use std::path::Path;
use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::EnvFilter;

use pitchrank::data_loader::load_matches;
use pitchrank::report::{format_standings, write_stats_csv};
use pitchrank::stats::{calculate_statistics, sort_statistics};
use pitchrank::{RatingContext, RatingError};

fn run() -> Result<(), RatingError> {
    let mut args = env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "data/matches.json".to_string());
    let output = args.next().unwrap_or_else(|| "standings.csv".to_string());

    let matches = load_matches(Path::new(&input))?;
    info!(count = matches.len(), input = %input, "loaded match feed");

    let ctx = RatingContext::default();
    let stats = calculate_statistics(&matches, &ctx);
    let sorted = sort_statistics(&stats);

    print!("{}", format_standings(&sorted));

    write_stats_csv(File::create(&output)?, &sorted)?;
    info!(output = %output, teams = sorted.len(), "wrote standings");

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
