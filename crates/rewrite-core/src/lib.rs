//! Rename and copy detection for repository change sets
//!
//! Given the paths removed and added between two snapshots, pairs them up
//! into renames when their content is identical or similar enough, leaving
//! genuine additions and deletions otherwise.

pub mod blob;
pub mod change_set;
pub mod config;
pub mod detect;
pub mod error;
pub mod rewrites;
pub mod similarity;

pub use blob::{Blob, BlobId};
pub use change_set::{ChangeSet, Modification};
pub use config::{DiffSection, RenameTracking, RewritesConfig};
pub use detect::{CopyPair, DetectionResult, RenameDetector, RenamePair, detect};
pub use error::{Error, Result};
pub use rewrites::{Copies, CopySource, Rewrites};
pub use similarity::similarity;
