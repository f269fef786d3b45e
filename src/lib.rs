//! Renders the last year of a GitHub user's contributions as a calendar heatmap SVG. Meant to be
//! run from a scheduled CI job: it reads its configuration from the environment, makes a single
//! api request and writes the image, optionally keeping a dated copy once a month.
//!

pub mod calendar;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod fs;
pub mod graph;
pub mod render;
pub mod snapshot;
pub mod utils;

pub use error::{Error, Result};
