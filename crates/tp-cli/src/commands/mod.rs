//! CLI command implementations.

pub mod coverage;
pub mod delete;
pub mod export;
pub mod import;
pub mod list;
pub mod score;
pub mod stats;
pub mod status;
