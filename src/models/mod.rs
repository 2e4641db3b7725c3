pub mod department;
pub mod employee;
pub mod schedule;
pub mod settings;

use serde::{Deserialize, Deserializer};

/// Lets a patch tell "field absent" (`None`) apart from "field set to null"
/// (`Some(None)`).
pub(crate) fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
