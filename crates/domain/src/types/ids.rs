//! Obfuscated identifiers

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque identifier used in every path parameter.
///
/// The backend encodes numeric keys into short hash strings. A few payloads
/// (the login response) still carry a raw integer, so deserialisation
/// accepts both and normalises to the string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct HashId(String);

impl HashId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HashId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HashId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for HashId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for HashId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for HashId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct HashIdVisitor;

        impl Visitor<'_> for HashIdVisitor {
            type Value = HashId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a hash string or an integer id")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<HashId, E> {
                Ok(HashId(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<HashId, E> {
                Ok(HashId(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<HashId, E> {
                Ok(HashId(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<HashId, E> {
                Ok(HashId(v.to_string()))
            }
        }

        deserializer.deserialize_any(HashIdVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_string_and_integer_forms() {
        let from_str: HashId = serde_json::from_str("\"xK9p2\"").unwrap();
        let from_int: HashId = serde_json::from_str("42").unwrap();
        assert_eq!(from_str.as_str(), "xK9p2");
        assert_eq!(from_int.as_str(), "42");
    }

    #[test]
    fn always_serialises_as_string() {
        let id: HashId = serde_json::from_str("7").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"7\"");
    }

    #[test]
    fn rejects_other_json_shapes() {
        assert!(serde_json::from_str::<HashId>("{\"id\": 1}").is_err());
    }
}
