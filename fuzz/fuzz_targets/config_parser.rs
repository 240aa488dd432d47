#![no_main]

use exalt_tools::config::SummaryConfig;
use exalt_tools::csv_output::CsvSummaryOutput;
use exalt_tools::scan::{FileGroup, ScanResult, SuffixEntry};
use exalt_tools::stats::BpcSummary;
use libfuzzer_sys::fuzz_target;

fn sample_summary() -> BpcSummary {
    BpcSummary::new(ScanResult {
        suffixes: vec!["xml".to_string(), "gz".to_string()],
        complete: vec![
            FileGroup {
                name: "dblp".to_string(),
                entries: vec![SuffixEntry::new("xml", 1000), SuffixEntry::new("gz", 250)],
            },
            FileGroup {
                name: "empty".to_string(),
                entries: vec![SuffixEntry::new("xml", 0), SuffixEntry::new("gz", 20)],
            },
        ],
        incomplete: vec!["orphan".to_string()],
    })
}

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Any accepted layout must render without panicking
        if let Ok(config) = SummaryConfig::from_toml_str(input) {
            let summary = sample_summary();
            let text = summary.to_text(&config);
            assert!(text.ends_with('\n'));
            let _ = CsvSummaryOutput::from_summary(&summary, config.precision).to_csv();
        }
    }
});
