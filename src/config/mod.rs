//! Configuration loading
//!
//! Decodes YAML or JSON config files into caller-defined records. Values
//! already present on the record act as defaults for anything the file omits.

pub mod loader;

pub use loader::{load_file, load_slice};
