//! git-httpd-config: configuration loading for the git-httpd proxy
//!
//! Reads YAML or JSON config files into typed records, renders records back
//! to YAML, and assembles usage text around a rendered example config.

pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod service;

pub use config::{load_file, load_slice};
pub use error::{EncodeError, LoadError};
pub use render::{build_usage, render_example, HelpPage};
