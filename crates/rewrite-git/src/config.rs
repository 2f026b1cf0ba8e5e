//! Rewrite settings from git configuration
//!
//! Reads `diff.renames` (a boolean, or `copy`/`copies`) and
//! `diff.renameLimit`. Nothing is tracked unless `diff.renames` is set; a
//! missing limit defaults the way git does.

use git2::{Config, ErrorCode, Repository};
use rewrite_core::{Copies, CopySource, RenameTracking, Rewrites};

use crate::{Error, Result};

const RENAMES_KEY: &str = "diff.renames";
const RENAME_LIMIT_KEY: &str = "diff.renameLimit";

/// Build [`Rewrites`] from `config`.
///
/// Returns `Ok(None)` if `diff.renames` is unset or false. With `lenient`,
/// invalid values are logged and treated as unset instead of failing.
pub fn rewrites_from_git_config(config: &Config, lenient: bool) -> Result<Option<Rewrites>> {
    let default = Rewrites::default();

    let tracking = match config_string(config, RENAMES_KEY)? {
        Some(value) => match value.parse::<RenameTracking>() {
            Ok(tracking) => tracking,
            Err(_) if lenient => {
                tracing::warn!(key = RENAMES_KEY, %value, "Ignoring invalid config value");
                return Ok(None);
            }
            Err(_) => return Err(invalid(RENAMES_KEY, value)),
        },
        None => return Ok(None),
    };

    let copies = match tracking {
        RenameTracking::Disabled => return Ok(None),
        RenameTracking::Renames => None,
        RenameTracking::RenamesAndCopies => Some(Copies {
            source: CopySource::FromSetOfChangedFiles,
            percentage: None,
        }),
    };

    let limit = match config.get_i64(RENAME_LIMIT_KEY) {
        Ok(value) => match usize::try_from(value) {
            Ok(limit) => limit,
            Err(_) if lenient => {
                tracing::warn!(key = RENAME_LIMIT_KEY, value, "Ignoring invalid config value");
                default.limit
            }
            Err(_) => return Err(invalid(RENAME_LIMIT_KEY, value.to_string())),
        },
        Err(e) if e.code() == ErrorCode::NotFound => default.limit,
        Err(_) if lenient => {
            tracing::warn!(key = RENAME_LIMIT_KEY, "Ignoring invalid config value");
            default.limit
        }
        Err(_) => {
            let value = config_string(config, RENAME_LIMIT_KEY)?.unwrap_or_default();
            return Err(invalid(RENAME_LIMIT_KEY, value));
        }
    };

    Ok(Some(Rewrites {
        copies,
        limit,
        ..default
    }))
}

/// Read the settings from `repo`'s configuration (local, global, system).
pub fn rewrites_for_repo(repo: &Repository, lenient: bool) -> Result<Option<Rewrites>> {
    let config = repo.config()?;
    rewrites_from_git_config(&config, lenient)
}

fn config_string(config: &Config, key: &str) -> Result<Option<String>> {
    match config.get_string(key) {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn invalid(key: &str, value: String) -> Error {
    Error::InvalidConfig {
        key: key.to_string(),
        value,
    }
}
