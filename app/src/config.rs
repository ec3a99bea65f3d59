//! Walkthrough configuration (TOML).
//!
//! Every key is optional; anything missing falls back to the walkthrough
//! defaults.
//!
//! ```toml
//! numbers = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]
//! targets = [12, 7]
//! names = ["Name 1", "Name 2"]
//! table_size = 3
//! ```

use anyhow::{bail, Context, Result};
use halving_search::SortedSlice;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Largest table the walkthrough will print.
pub const MAX_TABLE_SIZE: u32 = 32;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WalkthroughConfig {
    /// Sorted numbers searched in the logarithmic section.
    pub numbers: Vec<i64>,
    /// Values looked up in `numbers`.
    pub targets: Vec<i64>,
    /// Names for the constant and linear sections.
    pub names: Vec<String>,
    /// Side length of the multiplication table.
    pub table_size: u32,
}

impl Default for WalkthroughConfig {
    fn default() -> Self {
        Self {
            numbers: (0..=9).collect(),
            targets: vec![12],
            names: (1..=5).map(|i| format!("Name {i}")).collect(),
            table_size: 2,
        }
    }
}

impl WalkthroughConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        log::debug!("loaded walkthrough config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate TOML content.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        SortedSlice::new(&self.numbers[..]).context("`numbers` must be sorted")?;
        if self.table_size > MAX_TABLE_SIZE {
            bail!(
                "`table_size` is {}, the maximum is {}",
                self.table_size,
                MAX_TABLE_SIZE
            );
        }
        Ok(())
    }
}
