//! This is a library that provides objects and functionality to help you keep
//! records of geological field samples inside of a single on-disk collection.

use serde::{Deserialize, Deserializer, Serializer};

pub mod error;
pub mod export;
pub mod id;
pub mod maplink;
pub mod sample;
pub mod store;
pub mod validate;
pub mod view;

pub use error::Error;
pub use error::Result;

/// Collection files persist absent optional fields as empty strings rather
/// than omitting the key, so map `""` back to `None` when reading a stored
/// collection.
pub fn empty_string_as_none<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => Ok(Some(s.to_string())),
    }
}

/// Inverse of [empty_string_as_none]: write `None` as `""` so that a loaded
/// collection saves back byte-identically.
pub fn none_as_empty_string<S>(val: &Option<String>, ser: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    ser.serialize_str(val.as_deref().unwrap_or(""))
}
