use anyhow::Result;
use clap::Parser;
use exalt_tools::cli::{init_tracing, OutputFormat, SummaryCli};
use exalt_tools::config::SummaryConfig;
use exalt_tools::csv_output::CsvSummaryOutput;
use exalt_tools::json_output::JsonSummary;
use exalt_tools::scan;
use exalt_tools::stats::BpcSummary;
use std::io::{self, Write};

/// Load the table layout from `--config`, or fall back to the defaults
fn load_config(args: &SummaryCli) -> Result<SummaryConfig> {
    match &args.config {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            SummaryConfig::from_file(path)
        }
        None => Ok(SummaryConfig::default()),
    }
}

fn main() -> Result<()> {
    let args = SummaryCli::parse();

    init_tracing(args.debug);

    let config = load_config(&args)?;
    let suffixes = scan::normalize_suffixes(&args.suffixes);
    let summary = BpcSummary::new(scan::scan_directory(&args.dir, &suffixes)?);

    let mut stdout = io::stdout().lock();
    match args.format {
        OutputFormat::Text => summary.write_text(&mut stdout, &config)?,
        OutputFormat::Json => {
            writeln!(stdout, "{}", JsonSummary::from_summary(&summary).to_json()?)?
        }
        OutputFormat::Csv => {
            let mut stderr = io::stderr().lock();
            for name in summary.incomplete() {
                writeln!(stderr, "Some files for {} were not found!", name)?;
            }
            stdout.write_all(
                CsvSummaryOutput::from_summary(&summary, config.precision)
                    .to_csv()
                    .as_bytes(),
            )?;
        }
    }
    stdout.flush()?;

    Ok(())
}
