//! Loading rewrite tracking settings from TOML
//!
//! ```toml
//! [diff]
//! renames = "copies"      # false | true | "copies"
//! rename-limit = 1000
//! similarity = 0.5
//! copy-similarity = 0.7
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::rewrites::{Copies, CopySource, DEFAULT_LIMIT, DEFAULT_PERCENTAGE, Rewrites};

/// Which kinds of rewrites to track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenameTracking {
    /// No rename tracking; removals and additions are reported as-is.
    Disabled,
    /// Track renames only.
    #[default]
    Renames,
    /// Track renames, then copies among the changed files.
    RenamesAndCopies,
}

impl FromStr for RenameTracking {
    type Err = Error;

    /// Accepts git's boolean spellings plus `copy`/`copies`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "false" | "no" | "off" | "0" => Ok(RenameTracking::Disabled),
            "true" | "yes" | "on" | "1" | "renames" => Ok(RenameTracking::Renames),
            "copy" | "copies" => Ok(RenameTracking::RenamesAndCopies),
            _ => Err(Error::config(format!(
                "unknown rename tracking mode '{s}', expected a boolean or 'copies'"
            ))),
        }
    }
}

impl fmt::Display for RenameTracking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenameTracking::Disabled => write!(f, "false"),
            RenameTracking::Renames => write!(f, "true"),
            RenameTracking::RenamesAndCopies => write!(f, "copies"),
        }
    }
}

/// Raw `renames` value, either a TOML boolean or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RenamesValue {
    Flag(bool),
    Mode(String),
}

impl Default for RenamesValue {
    fn default() -> Self {
        RenamesValue::Flag(true)
    }
}

impl RenamesValue {
    pub fn tracking(&self) -> Result<RenameTracking> {
        match self {
            RenamesValue::Flag(true) => Ok(RenameTracking::Renames),
            RenamesValue::Flag(false) => Ok(RenameTracking::Disabled),
            RenamesValue::Mode(mode) => mode.parse(),
        }
    }
}

/// The `[diff]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DiffSection {
    #[serde(default)]
    pub renames: RenamesValue,
    #[serde(default = "default_rename_limit")]
    pub rename_limit: usize,
    #[serde(default = "default_similarity")]
    pub similarity: f32,
    #[serde(default)]
    pub copy_similarity: Option<f32>,
}

fn default_rename_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_similarity() -> f32 {
    DEFAULT_PERCENTAGE
}

impl Default for DiffSection {
    fn default() -> Self {
        Self {
            renames: RenamesValue::default(),
            rename_limit: default_rename_limit(),
            similarity: default_similarity(),
            copy_similarity: None,
        }
    }
}

impl DiffSection {
    /// Validated settings, or `None` if rename tracking is disabled.
    pub fn to_rewrites(&self) -> Result<Option<Rewrites>> {
        let copies = match self.renames.tracking()? {
            RenameTracking::Disabled => return Ok(None),
            RenameTracking::Renames => None,
            RenameTracking::RenamesAndCopies => Some(Copies {
                source: CopySource::FromSetOfChangedFiles,
                percentage: self.copy_similarity,
            }),
        };

        let rewrites = Rewrites {
            copies,
            percentage: Some(self.similarity),
            limit: self.rename_limit,
        };
        rewrites.validate()?;
        Ok(Some(rewrites))
    }
}

/// A configuration document holding rewrite settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RewritesConfig {
    #[serde(default)]
    pub diff: DiffSection,
}

impl RewritesConfig {
    /// Parse `content` and return the settings it describes.
    ///
    /// A document without a `[diff]` table yields the defaults.
    pub fn from_toml_str(content: &str) -> Result<Option<Rewrites>> {
        let config: RewritesConfig = toml::from_str(content)?;
        config.diff.to_rewrites()
    }

    /// Read and parse the TOML file at `path`.
    pub fn load(path: &Path) -> Result<Option<Rewrites>> {
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(?path, "Loading rewrite settings");
        Self::from_toml_str(&content)
    }
}
