//! `#[serde(with = ...)]` adapters for [`SnowflakeId`].
//!
//! Snowflakes exceed 2^53, so JSON APIs usually transport them as decimal
//! strings; [`as_str`] produces and parses that form. [`as_u64`] keeps the
//! native integer representation for formats with real 64-bit integers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serialize a snowflake as its native integer representation.
pub mod as_u64 {
    use super::{Deserialize, Deserializer, Serialize, Serializer};
    use crate::SnowflakeId;

    /// Serialize a snowflake as a `u64`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<S>(id: &SnowflakeId, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        id.to_raw().serialize(s)
    }

    /// Deserialize a snowflake from a `u64`.
    ///
    /// Every 64-bit value is a valid snowflake, so this only fails when the
    /// underlying deserializer does.
    pub fn deserialize<'de, D>(d: D) -> Result<SnowflakeId, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(d).map(SnowflakeId::from_raw)
    }
}

/// Serialize a snowflake as a decimal string.
pub mod as_str {
    use super::{Deserializer, Serializer};
    use crate::SnowflakeId;

    /// Serialize a snowflake as a decimal string.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<S>(id: &SnowflakeId, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.collect_str(id)
    }

    /// Deserialize a snowflake from a decimal string.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The underlying deserializer fails
    /// - The string is not a decimal integer in the 64-bit range
    pub fn deserialize<'de, D>(d: D) -> Result<SnowflakeId, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DecimalVisitor;

        impl serde::de::Visitor<'_> for DecimalVisitor {
            type Value = SnowflakeId;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a decimal snowflake string")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse::<u64>()
                    .map(SnowflakeId::from_raw)
                    .map_err(serde::de::Error::custom)
            }
        }

        d.deserialize_str(DecimalVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DeconstructedSnowflake, SnowflakeId};
    use serde_json::json;

    #[test]
    fn native_round_trip() {
        #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
        struct Row {
            #[serde(with = "as_u64")]
            event_id: SnowflakeId,
        }
        let row = Row {
            event_id: SnowflakeId::from_raw(55_067_856_076_804_096),
        };

        let json = serde_json::to_string(&row).expect("serialize");
        assert_eq!(json, r#"{"event_id":55067856076804096}"#);
        let back: Row = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, row);
    }

    #[test]
    fn string_round_trip() {
        #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
        struct Row {
            #[serde(with = "as_str")]
            event_id: SnowflakeId,
        }
        let row = Row {
            event_id: SnowflakeId::from_raw(55_067_856_077_201_608),
        };

        let json = serde_json::to_string(&row).expect("serialize");
        assert_eq!(json, r#"{"event_id":"55067856077201608"}"#);
        let back: Row = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, row);
    }

    #[test]
    fn string_rejects_non_decimal_input() {
        #[derive(Debug, Serialize, Deserialize)]
        struct Row {
            #[serde(with = "as_str")]
            event_id: SnowflakeId,
        }
        let json = json!({"event_id": "not-a-snowflake"});
        serde_json::from_value::<Row>(json).expect_err("should fail");
    }

    #[test]
    fn deconstructed_snowflake_derives() {
        let parts = DeconstructedSnowflake {
            worker_id: 3,
            process_id: 2,
            increment: 200,
            timestamp: 1_654_124_400_000,
        };
        let json = serde_json::to_value(parts).expect("serialize");
        assert_eq!(
            json,
            json!({
                "worker_id": 3,
                "process_id": 2,
                "increment": 200,
                "timestamp": 1_654_124_400_000u64,
            })
        );
        let back: DeconstructedSnowflake = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, parts);
    }
}
