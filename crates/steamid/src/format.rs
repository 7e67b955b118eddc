use core::fmt;
use core::str::FromStr;

/// Every notation a [`crate::SteamId`] can be read from or written to.
///
/// The string names (`id64`, `id2`, ...) are the ones accepted by
/// [`Format::from_str`] and printed by [`fmt::Display`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Format {
    /// A bare 32-bit account number.
    Xuid,
    /// Packed 64-bit integer, or its 17 digit decimal string.
    #[cfg_attr(feature = "serde", serde(rename = "id64"))]
    Steam64,
    /// `STEAM_U:A:N`
    #[cfg_attr(feature = "serde", serde(rename = "id2"))]
    Steam2,
    /// `[C:U:N]` or `[C:U:N:I]`
    #[cfg_attr(feature = "serde", serde(rename = "id3"))]
    Steam3,
    /// Substitution-cipher hex code, e.g. `gqkj-gkbr`.
    #[cfg_attr(feature = "serde", serde(rename = "invite"))]
    InviteCode,
    /// CS:GO friend code, e.g. `AJJJS-ABAA`.
    #[cfg_attr(feature = "serde", serde(rename = "friend"))]
    FriendCode,
    /// `https://steamcommunity.com/profiles/<id64 or id3>/`
    ProfileUrl,
    /// `https://steamcommunity.com/user/<invite code>/` or `https://s.team/p/<invite code>/`
    UserUrl,
    /// A profile URL or a user URL.
    Url,
    /// Any of the above, tried in a fixed order.
    Any,
}

impl Format {
    /// The formats a [`crate::SteamId`] can be rendered to, in display order.
    pub const RENDERABLE: [Self; 5] = [
        Self::Steam64,
        Self::Steam2,
        Self::Steam3,
        Self::InviteCode,
        Self::FriendCode,
    ];

    /// The short name used by `Display` and `FromStr`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Xuid => "xuid",
            Self::Steam64 => "id64",
            Self::Steam2 => "id2",
            Self::Steam3 => "id3",
            Self::InviteCode => "invite",
            Self::FriendCode => "friend",
            Self::ProfileUrl => "profile-url",
            Self::UserUrl => "user-url",
            Self::Url => "url",
            Self::Any => "any",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known [`Format`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown format `{0}`")]
pub struct UnknownFormat(pub String);

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format = match s.trim().to_ascii_lowercase().as_str() {
            "xuid" => Self::Xuid,
            "id64" | "steam64" => Self::Steam64,
            "id2" | "steam2" => Self::Steam2,
            "id3" | "steam3" => Self::Steam3,
            "invite" | "invite-code" => Self::InviteCode,
            "friend" | "friend-code" => Self::FriendCode,
            "profile-url" => Self::ProfileUrl,
            "user-url" => Self::UserUrl,
            "url" => Self::Url,
            "any" => Self::Any,
            _ => return Err(UnknownFormat(s.to_owned())),
        };
        Ok(format)
    }
}
