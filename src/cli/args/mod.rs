//! Shared CLI argument types
//!
//! Reusable argument structs that can be flattened into commands using
//! `#[command(flatten)]`.

mod common;
mod global;
mod repo;

pub use common::OutputFormat;
pub use global::GlobalOptions;
pub use repo::{JobArgs, RepoArgs};
