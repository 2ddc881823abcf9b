use std::fmt::Display;
use std::str::FromStr;

use serde::de::Error;
use serde::{Deserialize, Deserializer};

/// Deserializes a CSV cell where an empty string or `NA` marks a missing value.
pub fn deserialize_nullable_cell<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let cell = String::deserialize(deserializer)?;
    match cell.trim() {
        "" | "NA" => Ok(None),
        cell => cell.parse().map(Some).map_err(D::Error::custom),
    }
}
