use crate::{Codec, Steam3, Steam64, SteamId};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serializes as the SteamID64 integer, like [`as_steam64`].
impl Serialize for SteamId {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        as_steam64::serialize(self, s)
    }
}

/// Deserializes from the SteamID64 integer, like [`as_steam64`].
impl<'de> Deserialize<'de> for SteamId {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        as_steam64::deserialize(d)
    }
}

pub mod as_steam64 {
    use super::{Codec, Deserialize, Deserializer, Serialize, Serializer, Steam64, SteamId};

    /// Serialize a Steam ID as its SteamID64 integer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The ID is not a valid public individual
    /// - The underlying serializer fails
    pub fn serialize<S>(id: &SteamId, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Steam64::encode(id)
            .map_err(serde::ser::Error::custom)?
            .serialize(s)
    }

    /// Deserialize a Steam ID from its SteamID64 integer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The underlying deserializer fails
    /// - The integer does not unpack to a valid ID
    pub fn deserialize<'de, D>(d: D) -> Result<SteamId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id64 = u64::deserialize(d)?;
        Steam64::unpack(id64).map_err(serde::de::Error::custom)
    }
}

pub mod as_steam3 {
    use super::{Codec, Deserializer, Serializer, Steam3, SteamId};

    /// Serialize a Steam ID as a `[C:U:N]` string.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The ID cannot be written in Steam3 notation
    /// - The underlying serializer fails
    pub fn serialize<S>(id: &SteamId, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let id3 = Steam3::encode(id).map_err(serde::ser::Error::custom)?;
        s.serialize_str(&id3)
    }

    /// Deserialize a Steam ID from a `[C:U:N]` string.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The underlying deserializer fails
    /// - The string is not a valid Steam3 identifier
    pub fn deserialize<'de, D>(d: D) -> Result<SteamId, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Steam3Visitor;

        impl serde::de::Visitor<'_> for Steam3Visitor {
            type Value = SteamId;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a Steam3 identifier such as [U:1:1]")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Steam3::decode(v).map_err(serde::de::Error::custom)
            }
        }

        d.deserialize_str(Steam3Visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AccountType, Error, Format, Instance};
    use serde_json::json;

    #[test]
    fn steam_id_is_an_integer_by_default() {
        let id = SteamId::new(1);
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "76561197960265729");
        let back: SteamId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }

    #[test]
    fn steam64_roundtrip() {
        #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
        struct Row {
            #[serde(with = "as_steam64")]
            owner: SteamId,
        }
        let row = Row {
            owner: SteamId::new(1266042636),
        };

        let json = serde_json::to_value(&row).expect("serialize");
        assert_eq!(json, json!({"owner": 76561199226308364_u64}));
        let back: Row = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, row);
    }

    #[test]
    fn steam64_rejects_invalid_words() {
        let err = serde_json::from_value::<SteamId>(json!(0)).expect_err("should fail");
        assert_eq!(err.to_string(), Error::invalid(Format::Steam64).to_string());
    }

    #[test]
    fn steam64_refuses_to_serialize_invalid_ids() {
        let err = serde_json::to_string(&SteamId::empty()).expect_err("should fail");
        assert_eq!(err.to_string(), Error::invalid(Format::Steam64).to_string());
    }

    #[test]
    fn steam3_roundtrip() {
        #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
        struct Row {
            #[serde(with = "as_steam3")]
            room: SteamId,
        }
        let row = Row {
            room: SteamId::new(7)
                .with_account_type(AccountType::Chat)
                .with_instance(Instance::Lobby),
        };

        let json = serde_json::to_value(&row).expect("serialize");
        assert_eq!(json, json!({"room": "[L:1:7]"}));
        let back: Row = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, row);
    }

    #[test]
    fn steam3_rejects_bad_strings() {
        #[derive(Debug, Deserialize)]
        struct Row {
            #[serde(with = "as_steam3")]
            #[allow(dead_code)]
            room: SteamId,
        }
        let err = serde_json::from_value::<Row>(json!({"room": "[U:1]"})).expect_err("should fail");
        assert!(err.to_string().starts_with("malformed id3 input"));
    }

    #[test]
    fn categories_serialize_by_name() {
        assert_eq!(
            serde_json::to_value(AccountType::AnonGameServer).expect("serialize"),
            json!("AnonGameServer")
        );
        assert_eq!(
            serde_json::to_value(Format::FriendCode).expect("serialize"),
            json!("friend")
        );
    }
}
