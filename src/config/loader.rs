//! Config file loading

use crate::error::{EncodeError, LoadError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Load the file at `path` and decode it into `target`.
///
/// YAML and JSON are both accepted; JSON is parsed as YAML flow syntax, so the
/// file extension does not matter. Fields missing from the file keep whatever
/// `target` held before the call, and fields the record does not know about
/// are ignored. On error `target` is left untouched.
///
/// The pre-call values are taken from `target`'s own serialized form, so a
/// field the record does not serialize (`#[serde(skip_serializing)]`, or a
/// `skip_serializing_if` that fires) comes back from its `Default` rather than
/// keeping its previous value. An explicit `null` in the file keeps the
/// previous value, including the `Some` of an `Option` field.
pub fn load_file<T>(target: &mut T, path: impl AsRef<Path>) -> Result<(), LoadError>
where
    T: Serialize + DeserializeOwned,
{
    let path = path.as_ref();
    let buf = fs::read(path)?;
    tracing::debug!(path = %path.display(), bytes = buf.len(), "read config file");
    load_slice(target, &buf, path)
}

/// Decode already-read config text into `target`.
///
/// `path` is only used to label decode errors. Same caveats as [`load_file`].
pub fn load_slice<T>(target: &mut T, buf: &[u8], path: &Path) -> Result<(), LoadError>
where
    T: Serialize + DeserializeOwned,
{
    let decode_err = |source| LoadError::Decode { path: path.to_path_buf(), source };

    // An empty document carries no fields, so there is nothing to apply.
    if buf.iter().all(u8::is_ascii_whitespace) {
        return Ok(());
    }

    let mut source: Value = serde_yaml::from_slice(buf).map_err(decode_err)?;
    source.apply_merge().map_err(decode_err)?;

    let mut merged = serde_yaml::to_value(&*target).map_err(EncodeError)?;
    overlay(&mut merged, source);

    *target = serde_yaml::from_value(merged).map_err(decode_err)?;
    tracing::debug!(path = %path.display(), "decoded config");
    Ok(())
}

/// Apply `source` on top of `base`.
///
/// Mappings merge key by key, a `null` keeps the base value, anything else
/// replaces it.
fn overlay(base: &mut Value, source: Value) {
    match (base, source) {
        (_, Value::Null) => {}
        (Value::Mapping(base), Value::Mapping(source)) => {
            for (key, value) in source {
                match existing_key(base, &key) {
                    Some(existing) => {
                        if let Some(slot) = base.get_mut(&existing) {
                            overlay(slot, value);
                        }
                    }
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, source) => *base = source,
    }
}

/// Find the key in `base` that `key` addresses: an exact match first, then a
/// string key equal ignoring ASCII case.
fn existing_key(base: &Mapping, key: &Value) -> Option<Value> {
    if base.contains_key(key) {
        return Some(key.clone());
    }
    let wanted = key.as_str()?;
    base.keys()
        .find(|candidate| candidate.as_str().is_some_and(|name| name.eq_ignore_ascii_case(wanted)))
        .cloned()
}
