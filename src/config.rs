//! Table layout configuration for the bpc summary
//!
//! The defaults reproduce the classic layout (name column 10 wide, data
//! columns 18 wide, three decimals, `*` for the best entry). A TOML file
//! passed with `--config` may override any subset of the keys:
//!
//! ```toml
//! name_width = 16
//! column_width = 20
//! precision = 4
//! best_marker = "+"
//! ```

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Largest number of decimals accepted for ratios
pub const MAX_PRECISION: usize = 12;

/// Largest accepted column width
pub const MAX_WIDTH: usize = 1024;

/// Layout settings for the text table and ratio formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SummaryConfig {
    /// Width of the leading file-name column
    pub name_width: usize,

    /// Width of every size / ratio column
    pub column_width: usize,

    /// Decimals printed for bpc ratios and averages
    pub precision: usize,

    /// Character prefixed to the smallest entry of a row
    pub best_marker: char,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            name_width: 10,
            column_width: 18,
            precision: 3,
            best_marker: '*',
        }
    }
}

impl SummaryConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Load configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        for (key, width) in [
            ("name_width", self.name_width),
            ("column_width", self.column_width),
        ] {
            if !(1..=MAX_WIDTH).contains(&width) {
                bail!("{} must be in [1, {}], got {}", key, MAX_WIDTH, width);
            }
        }

        if self.precision > MAX_PRECISION {
            bail!(
                "precision must be <= {}, got {}",
                MAX_PRECISION,
                self.precision
            );
        }

        if self.best_marker.is_whitespace() {
            bail!("best_marker must be visible, got {:?}", self.best_marker);
        }

        Ok(())
    }
}
