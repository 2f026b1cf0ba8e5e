//! Settings controlling rename and copy tracking

use crate::error::{Error, Result};

/// Default minimum similarity for a rename.
pub const DEFAULT_PERCENTAGE: f32 = 0.5;

/// Default cap on the number of sources and destinations considered by the
/// similarity pass. See [`Rewrites::limit`].
pub const DEFAULT_LIMIT: usize = 1000;

/// From where to source copies
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum CopySource {
    /// Find copies among the removed and modified files of the same change only.
    #[default]
    FromSetOfChangedFiles,
}

/// How to determine copied files.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Copies {
    /// The set of files to search when finding the source of copies.
    pub source: CopySource,
    /// Equivalent to [`Rewrites::percentage`], but used for copy tracking.
    ///
    /// `None` keeps copy tracking to identical content only.
    pub percentage: Option<f32>,
}

impl Default for Copies {
    fn default() -> Self {
        Copies {
            source: CopySource::FromSetOfChangedFiles,
            percentage: None,
        }
    }
}

/// Rename and copy tracking settings.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rewrites {
    /// If set, added files that were not renames are also checked for being
    /// copies of changed files.
    pub copies: Option<Copies>,
    /// Minimum similarity in `(0, 1]` for a removed/added pair to count as
    /// a rename. `None`, or `1.0`, restricts tracking to identical content.
    pub percentage: Option<f32>,
    /// The similarity pass is skipped if `sources * destinations` exceeds
    /// `limit * limit`. Identical content is always paired. `0` disables
    /// the limit.
    pub limit: usize,
}

impl Default for Rewrites {
    fn default() -> Self {
        Rewrites {
            copies: None,
            percentage: Some(DEFAULT_PERCENTAGE),
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Rewrites {
    /// Default settings with the rename threshold set to `threshold`.
    pub fn with_threshold(threshold: f32) -> Result<Self> {
        check_threshold(threshold)?;
        Ok(Rewrites {
            percentage: Some(threshold),
            ..Default::default()
        })
    }

    /// Verify every configured threshold lies in `(0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if let Some(percentage) = self.percentage {
            check_threshold(percentage)?;
        }
        if let Some(percentage) = self.copies.and_then(|copies| copies.percentage) {
            check_threshold(percentage)?;
        }
        Ok(())
    }

    /// The rename threshold, or `None` if only identical content is paired.
    pub fn fuzzy_percentage(&self) -> Option<f32> {
        fuzzy(self.percentage)
    }

    /// Whether `sources * destinations` candidate pairs fit within the limit.
    pub fn within_limit(&self, sources: usize, destinations: usize) -> bool {
        self.limit == 0
            || sources.saturating_mul(destinations) <= self.limit.saturating_mul(self.limit)
    }
}

/// `Some(p)` if `p` asks for similarity matching rather than identity.
pub(crate) fn fuzzy(percentage: Option<f32>) -> Option<f32> {
    percentage.filter(|p| *p < 1.0)
}

/// Reject thresholds outside `(0, 1]`, including NaN.
pub fn check_threshold(value: f32) -> Result<()> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(Error::InvalidThreshold { value })
    }
}
