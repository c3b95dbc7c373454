//! Example config rendering

use crate::error::EncodeError;
use serde::Serialize;

/// Serialize `defaults` as YAML, in the same syntax [`crate::config::load_file`] reads.
pub fn render_example<T: Serialize>(defaults: &T) -> Result<String, EncodeError> {
    Ok(serde_yaml::to_string(defaults)?)
}
