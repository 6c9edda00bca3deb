//! Scripted catalog walkthrough: drives the catalog service end to end and
//! renders each step for a console.

pub mod config;
pub mod render;
pub mod walkthrough;

pub use config::{DemoConfig, OutputFormat};
pub use walkthrough::run_walkthrough;
