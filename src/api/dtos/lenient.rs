//! Query-string helpers for browser clients that send `undefined`, `null`
//! or empty values for unset filters.

use std::fmt::Display;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer};

pub fn option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") | Some("undefined") | Some("null") => Ok(None),
        Some(value) => value.parse::<T>().map(Some).map_err(de::Error::custom),
    }
}

pub fn option_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty() && value != "undefined" && value != "null"))
}
