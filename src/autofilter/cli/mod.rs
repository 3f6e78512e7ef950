//! # CLI Layer
//!
//! One possible UI client for autofilter. This is the only place that:
//! - Parses arguments (clap)
//! - Initialises logging (env_logger)
//! - Writes to stdout/stderr
//!
//! It has no way to change a project other than the `FilterManager` methods.

mod commands;
mod render;
mod setup;

pub use commands::run;
