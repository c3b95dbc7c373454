//! Rendering of example configuration and usage text

pub mod example;
pub mod usage;

pub use example::render_example;
pub use usage::{build_usage, HelpPage};
