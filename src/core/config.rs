//! Analyzer configuration with documented defaults
//!
//! Every convention the snapshot format and the rule vocabulary rely on is
//! collected here. The defaults match the upstream snapshot provider; a TOML
//! file can override any subset of them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;

/// Top-level configuration for parsing and analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Layout of the text table
    pub format: SnapshotFormat,

    /// Substring that marks a link token in a rule scan line
    ///
    /// Matched anywhere inside the token, not as a whole word, so a word
    /// tile whose name contains it also acts as a link.
    pub link_token: String,

    /// Entity kinds tracked for reachability besides word tiles
    pub relevant_entities: Vec<String>,

    /// Property names with special meaning to the analysis
    pub properties: PropertyNames,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            format: SnapshotFormat::default(),
            link_token: "is".to_string(),
            relevant_entities: ["baba", "rock", "flag", "wall", "water"]
                .into_iter()
                .map(String::from)
                .collect(),
            properties: PropertyNames::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Parse a configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded analyzer config from {}", path.display());
        Ok(config)
    }

    pub fn is_relevant(&self, name: &str) -> bool {
        self.relevant_entities.iter().any(|e| e == name)
    }
}

/// Layout conventions of the snapshot table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotFormat {
    /// Delimits the row label and every cell
    pub cell_separator: char,

    /// Joins entity identifiers stacked in one cell
    pub stack_separator: char,

    /// Prefix that marks an identifier as a word tile
    pub word_marker: String,

    /// Lines before the first board row (header + separator rule)
    pub preamble_lines: usize,

    /// Fixed cell width used when rendering a snapshot
    ///
    /// Longer stacks are truncated, so rendering is only lossless when every
    /// cell fits.
    pub cell_width: usize,
}

impl Default for SnapshotFormat {
    fn default() -> Self {
        Self {
            cell_separator: '|',
            stack_separator: '<',
            word_marker: "text_".to_string(),
            preamble_lines: 2,
            cell_width: 15,
        }
    }
}

/// Names of the properties the analysis interprets
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyNames {
    /// Marks the controlled entity kind
    pub you: String,
    /// Marks winning cells
    pub win: String,
    /// Unconditionally impassable
    pub stop: String,
    /// Unconditionally impassable (touching destroys the controlled entity)
    pub defeat: String,
    /// Impassable while a controlled kind melts
    pub hot: String,
    /// Makes hot terrain impassable for the kind holding it
    pub melt: String,
}

impl Default for PropertyNames {
    fn default() -> Self {
        Self {
            you: "you".to_string(),
            win: "win".to_string(),
            stop: "stop".to_string(),
            defeat: "defeat".to_string(),
            hot: "hot".to_string(),
            melt: "melt".to_string(),
        }
    }
}
