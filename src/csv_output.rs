//! CSV output format for the bpc summary
//!
//! One row per (file, suffix) pair, so the output loads directly into a
//! spreadsheet pivot table.

use crate::stats::BpcSummary;

/// CSV record for a single file of a group
#[derive(Debug, Clone)]
pub struct CsvEntry {
    pub file: String,
    pub suffix: String,
    pub size: u64,
    pub bpc: Option<f64>,
    pub best: bool,
}

/// CSV output formatter
#[derive(Debug)]
pub struct CsvSummaryOutput {
    entries: Vec<CsvEntry>,
    precision: usize,
}

impl CsvSummaryOutput {
    /// Create an empty formatter printing ratios with `precision` decimals
    pub fn new(precision: usize) -> Self {
        Self {
            entries: Vec::new(),
            precision,
        }
    }

    /// Collect every entry of every complete group
    pub fn from_summary(summary: &BpcSummary, precision: usize) -> Self {
        let mut output = Self::new(precision);
        for group in summary.groups() {
            for (index, entry) in group.entries.iter().enumerate() {
                output.add_entry(CsvEntry {
                    file: group.name.clone(),
                    suffix: entry.suffix.clone(),
                    size: entry.size,
                    bpc: BpcSummary::entry_bpc(group, index),
                    best: entry.best,
                });
            }
        }
        output
    }

    pub fn add_entry(&mut self, entry: CsvEntry) {
        self.entries.push(entry);
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn format_entry(&self, entry: &CsvEntry) -> String {
        let bpc = entry
            .bpc
            .map(|value| format!("{:.*}", self.precision, value))
            .unwrap_or_default();

        [
            Self::escape_field(&entry.file),
            Self::escape_field(&entry.suffix),
            entry.size.to_string(),
            bpc,
            entry.best.to_string(),
        ]
        .join(",")
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::from("file,suffix,size,bpc,best\n");

        for entry in &self.entries {
            output.push_str(&self.format_entry(entry));
            output.push('\n');
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::{FileGroup, ScanResult, SuffixEntry};

    #[test]
    fn test_csv_header_only_when_empty() {
        let output = CsvSummaryOutput::new(3);
        assert_eq!(output.to_csv(), "file,suffix,size,bpc,best\n");
    }

    #[test]
    fn test_csv_rows_from_summary() {
        let summary = BpcSummary::new(ScanResult {
            suffixes: vec!["xml".to_string(), "gz".to_string()],
            complete: vec![FileGroup {
                name: "dblp".to_string(),
                entries: vec![SuffixEntry::new("xml", 1000), SuffixEntry::new("gz", 300)],
            }],
            incomplete: Vec::new(),
        });

        let csv = CsvSummaryOutput::from_summary(&summary, 3).to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "dblp,xml,1000,,false");
        assert_eq!(lines[2], "dblp,gz,300,2.400,true");
    }

    #[test]
    fn test_csv_escapes_file_names() {
        let mut output = CsvSummaryOutput::new(2);
        output.add_entry(CsvEntry {
            file: "a,b \"c\"".to_string(),
            suffix: "gz".to_string(),
            size: 4,
            bpc: Some(1.0),
            best: false,
        });

        assert!(output
            .to_csv()
            .contains("\"a,b \"\"c\"\"\",gz,4,1.00,false"));
    }
}
