//! Directory scanning and grouping of files by base name
//!
//! A file `NAME.SUFFIX` contributes its size to the group `NAME` for every
//! requested `SUFFIX`. The directory is listed exactly once; files are only
//! stat'ed when their name matches one of the suffixes.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Size of one file of a group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixEntry {
    /// Suffix without the leading dot
    pub suffix: String,
    /// File size in bytes
    pub size: u64,
    /// Whether this entry is (one of) the smallest of its group
    pub best: bool,
}

impl SuffixEntry {
    pub fn new(suffix: impl Into<String>, size: u64) -> Self {
        Self {
            suffix: suffix.into(),
            size,
            best: false,
        }
    }
}

/// Files sharing one base name, one entry per suffix in argument order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileGroup {
    pub name: String,
    pub entries: Vec<SuffixEntry>,
}

impl FileGroup {
    /// The baseline entry (first suffix)
    pub fn baseline(&self) -> Option<&SuffixEntry> {
        self.entries.first()
    }
}

/// Outcome of scanning a directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Requested suffixes, deduplicated, in argument order
    pub suffixes: Vec<String>,
    /// Groups present under every suffix, sorted by name
    pub complete: Vec<FileGroup>,
    /// Names of groups missing at least one suffix, sorted
    pub incomplete: Vec<String>,
}

/// Clean up the suffix arguments
///
/// A leading dot is accepted and dropped, empty suffixes are ignored and
/// repeated suffixes keep only their first occurrence.
pub fn normalize_suffixes<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let mut suffixes: Vec<String> = Vec::with_capacity(raw.len());

    for suffix in raw {
        let suffix = suffix.as_ref();
        let suffix = suffix.strip_prefix('.').unwrap_or(suffix);

        if suffix.is_empty() {
            tracing::warn!("ignoring empty suffix");
            continue;
        }
        if suffixes.iter().any(|s| s == suffix) {
            tracing::warn!(suffix, "ignoring duplicate suffix");
            continue;
        }
        suffixes.push(suffix.to_string());
    }

    suffixes
}

/// List the names of all entries of `dir`, sorted
pub fn list_file_names(dir: &Path) -> Result<Vec<String>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory {}", dir.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => tracing::debug!(?raw, "skipping non UTF-8 file name"),
        }
    }

    names.sort();
    Ok(names)
}

/// Scan `dir` and group its files by base name
pub fn scan_directory(dir: &Path, suffixes: &[String]) -> Result<ScanResult> {
    let names = list_file_names(dir)?;
    tracing::debug!(dir = %dir.display(), entries = names.len(), "directory snapshot taken");

    let mut groups: BTreeMap<String, Vec<SuffixEntry>> = BTreeMap::new();

    for suffix in suffixes {
        let extension = format!(".{}", suffix);

        for name in &names {
            let Some(base) = name.strip_suffix(&extension) else {
                continue;
            };
            if base.is_empty() {
                continue;
            }

            let path = dir.join(name);
            let metadata =
                fs::metadata(&path).with_context(|| format!("Failed to stat {}", path.display()))?;
            if !metadata.is_file() {
                tracing::debug!(path = %path.display(), "skipping non-regular file");
                continue;
            }

            groups
                .entry(base.to_string())
                .or_default()
                .push(SuffixEntry::new(suffix.as_str(), metadata.len()));
        }
    }

    Ok(partition_groups(groups, suffixes))
}

/// Split groups into complete and incomplete ones
pub fn partition_groups(
    groups: BTreeMap<String, Vec<SuffixEntry>>,
    suffixes: &[String],
) -> ScanResult {
    let mut result = ScanResult {
        suffixes: suffixes.to_vec(),
        ..ScanResult::default()
    };

    for (name, entries) in groups {
        if entries.len() == suffixes.len() {
            result.complete.push(FileGroup { name, entries });
        } else {
            tracing::debug!(name = %name, found = entries.len(), "incomplete group");
            result.incomplete.push(name);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, size: usize) {
        fs::write(dir.path().join(name), vec![b'x'; size]).unwrap();
    }

    fn suffixes(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_suffixes() {
        let normalized = normalize_suffixes(&["xml", ".gz", "", "xml", "bz2"]);
        assert_eq!(normalized, vec!["xml", "gz", "bz2"]);
    }

    #[test]
    fn test_scan_groups_complete_files() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "shakespeare.xml", 1000);
        write_file(&dir, "shakespeare.gz", 300);
        write_file(&dir, "dblp.xml", 2000);
        write_file(&dir, "dblp.gz", 400);

        let result = scan_directory(dir.path(), &suffixes(&["xml", "gz"])).unwrap();

        assert_eq!(result.complete.len(), 2);
        assert!(result.incomplete.is_empty());
        assert_eq!(result.complete[0].name, "dblp");
        assert_eq!(result.complete[1].name, "shakespeare");
        assert_eq!(
            result.complete[1].entries,
            vec![SuffixEntry::new("xml", 1000), SuffixEntry::new("gz", 300)]
        );
    }

    #[test]
    fn test_scan_reports_incomplete_groups() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "a.xml", 10);
        write_file(&dir, "a.gz", 5);
        write_file(&dir, "b.xml", 10);

        let result = scan_directory(dir.path(), &suffixes(&["xml", "gz"])).unwrap();

        assert_eq!(result.complete.len(), 1);
        assert_eq!(result.complete[0].name, "a");
        assert_eq!(result.incomplete, vec!["b"]);
    }

    #[test]
    fn test_scan_entries_follow_argument_order() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "a.xml", 10);
        write_file(&dir, "a.gz", 5);

        let result = scan_directory(dir.path(), &suffixes(&["gz", "xml"])).unwrap();
        let order: Vec<&str> = result.complete[0]
            .entries
            .iter()
            .map(|e| e.suffix.as_str())
            .collect();
        assert_eq!(order, vec!["gz", "xml"]);
    }

    #[test]
    fn test_scan_ignores_directories_and_bare_suffix() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("nested.xml")).unwrap();
        write_file(&dir, "nested.gz", 4);
        write_file(&dir, ".xml", 4);

        let result = scan_directory(dir.path(), &suffixes(&["xml", "gz"])).unwrap();

        assert!(result.complete.is_empty());
        assert_eq!(result.incomplete, vec!["nested"]);
    }

    #[test]
    fn test_scan_with_no_suffixes() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "a.xml", 10);

        let result = scan_directory(dir.path(), &[]).unwrap();
        assert!(result.complete.is_empty());
        assert!(result.incomplete.is_empty());
    }

    #[test]
    fn test_scan_missing_directory() {
        let err = scan_directory(Path::new("/nonexistent/dir"), &suffixes(&["xml"])).unwrap_err();
        assert!(err.to_string().contains("Failed to read directory"));
    }

    #[test]
    fn test_overlapping_suffixes() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "a.tar", 100);
        write_file(&dir, "a.tar.gz", 20);

        let result = scan_directory(dir.path(), &suffixes(&["tar", "tar.gz"])).unwrap();
        assert_eq!(result.complete.len(), 1);
        assert_eq!(result.complete[0].entries[1].size, 20);
    }

    #[test]
    fn test_partition_groups() {
        let mut groups = BTreeMap::new();
        groups.insert("x".to_string(), vec![SuffixEntry::new("xml", 1)]);
        groups.insert(
            "y".to_string(),
            vec![SuffixEntry::new("xml", 1), SuffixEntry::new("gz", 1)],
        );

        let result = partition_groups(groups, &suffixes(&["xml", "gz"]));
        assert_eq!(result.complete.len(), 1);
        assert_eq!(result.complete[0].name, "y");
        assert_eq!(result.incomplete, vec!["x"]);
    }
}
