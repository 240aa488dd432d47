//! JSON output format for the bpc summary

use crate::stats::BpcSummary;
use serde::{Deserialize, Serialize};

/// One suffix of a file group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonEntry {
    pub suffix: String,
    /// Size in bytes
    pub size: u64,
    /// Bits per character (absent for the baseline or an empty baseline)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bpc: Option<f64>,
    /// Smallest entry of the group
    pub best: bool,
}

/// A complete file group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonFile {
    pub name: String,
    pub entries: Vec<JsonEntry>,
}

/// Average bpc of one suffix
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonAverage {
    pub suffix: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bpc: Option<f64>,
}

/// Full summary document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline: Option<String>,
    pub suffixes: Vec<String>,
    /// Base names missing at least one suffix
    pub incomplete: Vec<String>,
    pub files: Vec<JsonFile>,
    pub averages: Vec<JsonAverage>,
}

impl JsonSummary {
    pub fn from_summary(summary: &BpcSummary) -> Self {
        let files = summary
            .groups()
            .iter()
            .map(|group| JsonFile {
                name: group.name.clone(),
                entries: group
                    .entries
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| JsonEntry {
                        suffix: entry.suffix.clone(),
                        size: entry.size,
                        bpc: BpcSummary::entry_bpc(group, index),
                        best: entry.best,
                    })
                    .collect(),
            })
            .collect();

        let averages = summary
            .averages()
            .into_iter()
            .map(|average| JsonAverage {
                suffix: average.suffix,
                bpc: average.bpc,
            })
            .collect();

        Self {
            baseline: summary.baseline().map(str::to_string),
            suffixes: summary.suffixes().to_vec(),
            incomplete: summary.incomplete().to_vec(),
            files,
            averages,
        }
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
