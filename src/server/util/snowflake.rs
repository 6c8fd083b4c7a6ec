//! Serde helpers for Discord snowflakes stored as decimal strings.
//!
//! Discord ids exceed the integer precision of JavaScript, so the persisted store keeps them
//! as strings. Reading accepts either a string or a JSON number.

use serde::{de::Error, Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(u64),
}

impl RawId {
    fn into_u64<E: Error>(self) -> Result<u64, E> {
        match self {
            RawId::Text(text) => text.trim().parse::<u64>().map_err(E::custom),
            RawId::Number(number) => Ok(number),
        }
    }
}

pub mod string_id {
    use super::*;

    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawId::deserialize(deserializer)?.into_u64()
    }
}

pub mod option_string_id {
    use super::*;

    pub fn serialize<S>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(id) => serializer.serialize_some(&id.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<RawId>::deserialize(deserializer)?
            .map(RawId::into_u64)
            .transpose()
    }
}

pub mod string_ids {
    use super::*;
    use serde::ser::SerializeSeq;

    pub fn serialize<S>(values: &[u64], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(values.len()))?;
        for value in values {
            seq.serialize_element(&value.to_string())?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<RawId>::deserialize(deserializer)?
            .into_iter()
            .map(RawId::into_u64)
            .collect()
    }
}
