//! Bowling series tracker CLI library.
//!
//! This crate provides the CLI interface for the series tracker.

mod cli;
pub mod commands;
mod config;
mod store;

pub use cli::{Cli, Commands};
pub use config::{Backend, Config};
pub use store::{RemoteStore, SeriesStore, open_store};
