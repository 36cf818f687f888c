//! # GitHub client
//!
//! Read-only access to a repository's file tree, blob contents, and
//! per-path commit history, behind the [`RepoTreeClient`] trait so the
//! sync pipelines can run against a fake in tests.

pub mod client;
pub mod error;

pub use client::{EntryKind, GithubClient, RepoEntry, RepoTreeClient, UNKNOWN_LAST_UPDATED};
pub use error::{GithubError, GithubResult};
