//! Front-matter parsing

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_yaml::{Mapping, Value};
use thiserror::Error;

/// Line that opens and closes a YAML front-matter block
const DELIMITER: &str = "---";

/// Errors raised while splitting or reading a front-matter block
#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("front-matter block opened with '---' is never closed")]
    Unterminated,

    #[error("invalid YAML front-matter: {0}")]
    Yaml(serde_yaml::Error),

    #[error("front-matter must be a mapping of keys to values")]
    NotAMapping,

    #[error("{0}")]
    Schema(serde_yaml::Error),
}

/// Split a leading front-matter block from the body.
///
/// Returns `(metadata, body)`. Text without an opening `---` line has no
/// front-matter and is returned whole as the body with an empty mapping.
pub fn split(content: &str) -> Result<(Mapping, &str), FrontMatterError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let Some(rest) = strip_opening_delimiter(content) else {
        return Ok((Mapping::new(), content));
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            let metadata = parse_block(&rest[..offset])?;
            let body = &rest[offset + line.len()..];
            return Ok((metadata, body));
        }
        offset += line.len();
    }

    Err(FrontMatterError::Unterminated)
}

fn strip_opening_delimiter(content: &str) -> Option<&str> {
    let first_end = content.find('\n').map(|i| i + 1).unwrap_or(content.len());
    if content[..first_end].trim_end() == DELIMITER {
        Some(&content[first_end..])
    } else {
        None
    }
}

fn parse_block(yaml: &str) -> Result<Mapping, FrontMatterError> {
    if yaml.trim().is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(yaml).map_err(FrontMatterError::Yaml)? {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        _ => Err(FrontMatterError::NotAMapping),
    }
}

/// Map an untyped front-matter block onto a typed schema
pub fn extract<T: DeserializeOwned>(metadata: Mapping) -> Result<T, FrontMatterError> {
    serde_yaml::from_value(Value::Mapping(metadata)).map_err(FrontMatterError::Schema)
}

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Accepts any YAML scalar and keeps its textual form.
///
/// Authors write `date: 2024-01-01` unquoted, which YAML reads as a string,
/// but `date: 2024` reads as an integer and must not be rejected here.
fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct ScalarString;

    impl<'de> Visitor<'de> for ScalarString {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, number or boolean")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Ok(value.to_string())
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
            Ok(value.to_string())
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
            Ok(value.to_string())
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
            Ok(value.to_string())
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(ScalarString)
}

/// Accepts an integer, or a string holding one (`priority: "2"`).
fn integer_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Unexpected, Visitor};
    use std::fmt;

    struct IntegerOrString;

    impl<'de> Visitor<'de> for IntegerOrString {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer")
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
            Ok(value)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
            i64::try_from(value).map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &self))
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value
                .trim()
                .parse()
                .map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
        }
    }

    deserializer.deserialize_any(IntegerOrString)
}

/// Front-matter schema of a blog post
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostFrontMatter {
    #[serde(deserialize_with = "scalar_string")]
    pub title: String,
    #[serde(deserialize_with = "integer_or_string")]
    pub priority: i64,
    #[serde(deserialize_with = "scalar_string")]
    pub date: String,
    pub banner_path: Option<String>,
    #[serde(deserialize_with = "string_or_vec", default)]
    pub tags: Vec<String>,
    pub author: Option<String>,
    pub description: Option<String>,
}

/// Front-matter schema of a portfolio project
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFrontMatter {
    #[serde(deserialize_with = "scalar_string")]
    pub title: String,
    #[serde(deserialize_with = "integer_or_string")]
    pub priority: i64,
    pub image_name: Option<String>,
    pub icon_name: Option<String>,
    pub stack: Option<String>,
    pub github_url: Option<String>,
    pub access_url: Option<String>,
    pub adapt_logo_theme: Option<bool>,
}

/// Parse a date string in the formats authors use in front-matter
pub fn parse_date_string(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    let formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];

    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    // RFC 3339 / ISO 8601 with offset, then RFC 2822 as used in feeds
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.naive_utc());
    }

    None
}
