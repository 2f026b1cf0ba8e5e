//! Shared test utilities for the rewrite-tracking workspace.
//!
//! This crate provides git fixtures used by the crate and integration test
//! suites. It is a dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`git`] — [`FixtureRepo`](git::FixtureRepo), a scratch repository driven through `git2`
//! - [`fixture`] — the scripted history exercising renames

pub mod fixture;
pub mod git;

pub use fixture::diff_fixture;
pub use git::FixtureRepo;
