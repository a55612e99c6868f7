//! Serde helpers for Discord snowflake ids.
//!
//! Ids serialize as strings. Deserialization accepts either a string or a number.
//!
//! ```rust,ignore
//! #[serde(with = "crate::model::snowflake")]
//! pub guild_id: u64,
//! ```

use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr {
    Str(String),
    Num(u64),
}

impl Repr {
    fn into_u64<E: serde::de::Error>(self) -> Result<u64, E> {
        match self {
            Repr::Str(s) => s.parse::<u64>().map_err(E::custom),
            Repr::Num(n) => Ok(n),
        }
    }
}

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
    Repr::deserialize(deserializer)?.into_u64()
}

/// Same encoding for `Option<u64>`.
pub mod option {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Repr;

    pub fn serialize<S>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_some(&v.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<Repr>::deserialize(deserializer)?
            .map(Repr::into_u64)
            .transpose()
    }
}

/// Same encoding for `Vec<u64>`.
pub mod vec {
    use serde::{ser::SerializeSeq, Deserialize, Deserializer, Serializer};

    use super::Repr;

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
        Vec::<Repr>::deserialize(deserializer)?
            .into_iter()
            .map(Repr::into_u64)
            .collect()
    }
}
