use crate::ACCOUNT_INSTANCE;
use core::fmt;

// The chat flags occupy the top three bits of the 20-bit instance field.
const CHAT_FLAG_BASE: u32 = (ACCOUNT_INSTANCE.mask + 1) as u32;

/// Instance of an account.
///
/// Ordinary accounts use one of the four session instances. Chat accounts
/// may instead carry one of the chat flags, which tell a clan chat or a
/// lobby apart from a plain chat room.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u32)]
pub enum Instance {
    All = 0,
    Desktop = 1,
    Console = 2,
    Web = 4,
    Clan = CHAT_FLAG_BASE >> 1,
    Lobby = CHAT_FLAG_BASE >> 2,
    MmLobby = CHAT_FLAG_BASE >> 3,
}

impl Instance {
    /// Every named instance, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::All,
        Self::Desktop,
        Self::Console,
        Self::Web,
        Self::Clan,
        Self::Lobby,
        Self::MmLobby,
    ];

    /// The raw integer stored in the instance bits of a SteamID64.
    pub const fn value(self) -> u32 {
        self as u32
    }

    /// Looks up an instance by its raw integer.
    pub const fn from_value(value: u64) -> Option<Self> {
        match value {
            0 => Some(Self::All),
            1 => Some(Self::Desktop),
            2 => Some(Self::Console),
            4 => Some(Self::Web),
            0x8_0000 => Some(Self::Clan),
            0x4_0000 => Some(Self::Lobby),
            0x2_0000 => Some(Self::MmLobby),
            _ => None,
        }
    }

    /// Looks up an instance by its position in [`Instance::ALL`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns true for the instances only chat accounts carry.
    pub const fn is_chat_flag(self) -> bool {
        matches!(self, Self::Clan | Self::Lobby | Self::MmLobby)
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::All => "All",
            Self::Desktop => "Desktop",
            Self::Console => "Console",
            Self::Web => "Web",
            Self::Clan => "Clan",
            Self::Lobby => "Lobby",
            Self::MmLobby => "MMLobby",
        };
        f.write_str(name)
    }
}
