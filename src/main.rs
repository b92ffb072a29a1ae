use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;
use std::str::FromStr;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use transaction_record::batch::{read_records_from_path, write_records};

const USAGE: &str = "\
Usage: transaction-record [records].csv [log_level:optional] > [normalized].csv
Reads id,timestamp,amount,kind,category,note rows and writes them back normalized.
Rejected rows are reported on stderr at the 'warn' level.
Log levels: off, error, warn, info, debug, trace (default: error)";

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let Some(path) = args.get(1) else {
        eprintln!("{USAGE}");
        exit(1);
    };

    setup_logging(args.get(2).map_or(LevelFilter::ERROR, |level| parse_log_level(level)));

    let timer = Instant::now();
    let report = read_records_from_path(path)?;

    info!(
        "Normalized {} records from {path} and rejected {} rows in: {:?}",
        report.records.len(),
        report.rejected.len(),
        timer.elapsed()
    );

    let mut output = BufWriter::new(stdout().lock());
    write_records(&report.records, &mut output)?;
    output.flush()?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Unknown log level '{level}', only errors will be reported");
        LevelFilter::ERROR
    })
}

/// Logs go to stderr so they never mix with the normalized CSV on stdout.
fn setup_logging(level: LevelFilter) {
    let stderr_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(stderr_log)
        .init();
}
