//! Bits-per-character statistics over complete file groups
//!
//! For every group the smallest entry is marked, every non-baseline entry
//! gets a ratio `size * 8 / baseline_size`, and the ratios are averaged per
//! suffix across all groups.

use crate::config::SummaryConfig;
use crate::scan::{FileGroup, ScanResult, SuffixEntry};
use std::io::{self, Write};

/// Average bpc of one suffix across all groups
#[derive(Debug, Clone, PartialEq)]
pub struct SuffixAverage {
    pub suffix: String,
    /// `None` when no group had a usable (non-empty) baseline
    pub bpc: Option<f64>,
}

/// Bits per character of `size` relative to `baseline_size`
///
/// Undefined for an empty baseline.
pub fn bpc(size: u64, baseline_size: u64) -> Option<f64> {
    if baseline_size == 0 {
        return None;
    }
    Some((size as f64 * 8.0) / baseline_size as f64)
}

/// Mark every entry whose size equals the group minimum
pub fn mark_best(group: &mut FileGroup) {
    let Some(smallest) = group.entries.iter().map(|e| e.size).min() else {
        return;
    };

    for entry in &mut group.entries {
        entry.best = entry.size == smallest;
    }
}

/// Summary of a scan, ready to be rendered
#[derive(Debug, Clone, Default)]
pub struct BpcSummary {
    suffixes: Vec<String>,
    groups: Vec<FileGroup>,
    incomplete: Vec<String>,
}

impl BpcSummary {
    /// Build a summary and run the marking pass
    pub fn new(scan: ScanResult) -> Self {
        let ScanResult {
            suffixes,
            mut complete,
            incomplete,
        } = scan;

        for group in &mut complete {
            mark_best(group);
        }

        Self {
            suffixes,
            groups: complete,
            incomplete,
        }
    }

    /// All suffixes, baseline first
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// The baseline suffix
    pub fn baseline(&self) -> Option<&str> {
        self.suffixes.first().map(String::as_str)
    }

    /// Complete groups in name order
    pub fn groups(&self) -> &[FileGroup] {
        &self.groups
    }

    /// Names of incomplete groups
    pub fn incomplete(&self) -> &[String] {
        &self.incomplete
    }

    /// True when no complete group was found
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Ratio of `entry` within `group`, `None` for the baseline itself
    pub fn entry_bpc(group: &FileGroup, index: usize) -> Option<f64> {
        if index == 0 {
            return None;
        }
        let baseline = group.baseline()?;
        let entry = group.entries.get(index)?;
        bpc(entry.size, baseline.size)
    }

    /// Average ratio of every non-baseline suffix
    pub fn averages(&self) -> Vec<SuffixAverage> {
        self.suffixes
            .iter()
            .enumerate()
            .skip(1)
            .map(|(index, suffix)| {
                let ratios: Vec<f64> = self
                    .groups
                    .iter()
                    .filter_map(|group| Self::entry_bpc(group, index))
                    .collect();

                let bpc = if ratios.is_empty() {
                    None
                } else {
                    Some(ratios.iter().sum::<f64>() / ratios.len() as f64)
                };

                SuffixAverage {
                    suffix: suffix.clone(),
                    bpc,
                }
            })
            .collect()
    }

    /// Format one non-baseline table cell
    fn format_cell(entry: &SuffixEntry, bpc: Option<f64>, config: &SummaryConfig) -> String {
        let marker = if entry.best { config.best_marker } else { ' ' };
        format!(
            "{}{} ({})",
            marker,
            entry.size,
            format_ratio(bpc, config.precision)
        )
    }

    /// Render the text report
    ///
    /// Incomplete groups come first, then either "No files found" or the
    /// table followed by the per-suffix averages.
    pub fn to_text(&self, config: &SummaryConfig) -> String {
        let mut lines: Vec<String> = self
            .incomplete
            .iter()
            .map(|name| format!("Some files for {} were not found!", name))
            .collect();

        if self.is_empty() {
            lines.push("No files found".to_string());
            return join_lines(lines);
        }

        let name_width = config.name_width;
        let width = config.column_width;

        let mut header = format!("{:<name_width$}", "");
        for suffix in &self.suffixes {
            header.push_str(&format!(" {:<width$}", format!(" {}", suffix)));
        }
        lines.push(header);

        for group in &self.groups {
            let mut row = format!("{:<name_width$}", group.name);
            for (index, entry) in group.entries.iter().enumerate() {
                let cell = if index == 0 {
                    entry.size.to_string()
                } else {
                    Self::format_cell(entry, Self::entry_bpc(group, index), config)
                };
                row.push_str(&format!(" {:<width$}", cell));
            }
            lines.push(row);
        }

        lines.push(String::new());
        lines.push("Average bpc:".to_string());
        for average in self.averages() {
            lines.push(format!(
                "{} {}",
                average.suffix,
                format_ratio(average.bpc, config.precision)
            ));
        }

        join_lines(lines)
    }

    /// Write the text report to `out`
    pub fn write_text<W: Write>(&self, out: &mut W, config: &SummaryConfig) -> io::Result<()> {
        out.write_all(self.to_text(config).as_bytes())?;
        out.flush()
    }
}

/// Format a ratio with `precision` decimals, `n/a` when undefined
pub fn format_ratio(bpc: Option<f64>, precision: usize) -> String {
    match bpc {
        Some(value) => format!("{:.precision$}", value),
        None => "n/a".to_string(),
    }
}

fn join_lines(lines: Vec<String>) -> String {
    let mut output = String::new();
    for line in lines {
        output.push_str(line.trim_end());
        output.push('\n');
    }
    output
}
