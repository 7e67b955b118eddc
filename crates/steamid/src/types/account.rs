use crate::Instance;
use core::fmt;

/// Kind of entity a SteamID names.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum AccountType {
    Invalid = 0,
    Individual = 1,
    Multiseat = 2,
    GameServer = 3,
    AnonGameServer = 4,
    Pending = 5,
    ContentServer = 6,
    Clan = 7,
    Chat = 8,
    ConsoleUser = 9,
    AnonUser = 10,
    Unknown = 11,
}

impl AccountType {
    /// Every account type, ordered by value.
    pub const ALL: [Self; 12] = [
        Self::Invalid,
        Self::Individual,
        Self::Multiseat,
        Self::GameServer,
        Self::AnonGameServer,
        Self::Pending,
        Self::ContentServer,
        Self::Clan,
        Self::Chat,
        Self::ConsoleUser,
        Self::AnonUser,
        Self::Unknown,
    ];

    /// Steam3 letter of a chat account whose instance is [`Instance::Clan`].
    pub const CLAN_CHAT_CHAR: char = 'c';

    /// Steam3 letter of a chat account whose instance is [`Instance::Lobby`].
    pub const LOBBY_CHAT_CHAR: char = 'L';

    /// Every letter that may open a Steam3 identifier.
    pub const CHAR_SET: &'static str = "IUMGAPCgTiaLc";

    /// The raw integer stored in the type bits of a SteamID64.
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Looks up an account type by its raw integer.
    pub const fn from_value(value: u64) -> Option<Self> {
        match value {
            0 => Some(Self::Invalid),
            1 => Some(Self::Individual),
            2 => Some(Self::Multiseat),
            3 => Some(Self::GameServer),
            4 => Some(Self::AnonGameServer),
            5 => Some(Self::Pending),
            6 => Some(Self::ContentServer),
            7 => Some(Self::Clan),
            8 => Some(Self::Chat),
            9 => Some(Self::ConsoleUser),
            10 => Some(Self::AnonUser),
            11 => Some(Self::Unknown),
            _ => None,
        }
    }

    /// Looks up an account type by its position in [`AccountType::ALL`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The Steam3 letter of this account type.
    ///
    /// Console users have no letter and cannot be written as Steam3.
    pub const fn char(self) -> Option<char> {
        match self {
            Self::Invalid => Some('I'),
            Self::Individual => Some('U'),
            Self::Multiseat => Some('M'),
            Self::GameServer => Some('G'),
            Self::AnonGameServer => Some('A'),
            Self::Pending => Some('P'),
            Self::ContentServer => Some('C'),
            Self::Clan => Some('g'),
            Self::Chat => Some('T'),
            Self::ConsoleUser => None,
            Self::AnonUser => Some('a'),
            Self::Unknown => Some('i'),
        }
    }

    /// Looks up an account type by its Steam3 letter.
    ///
    /// The clan-chat and lobby-chat letters are not table entries; see
    /// [`AccountType::from_steam3_char`].
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'I' => Some(Self::Invalid),
            'U' => Some(Self::Individual),
            'M' => Some(Self::Multiseat),
            'G' => Some(Self::GameServer),
            'A' => Some(Self::AnonGameServer),
            'P' => Some(Self::Pending),
            'C' => Some(Self::ContentServer),
            'g' => Some(Self::Clan),
            'T' => Some(Self::Chat),
            'a' => Some(Self::AnonUser),
            'i' => Some(Self::Unknown),
            _ => None,
        }
    }

    /// Resolves any Steam3 letter, including the chat aliases.
    ///
    /// Returns the account type and, for `c` and `L`, the chat instance the
    /// letter implies.
    pub const fn from_steam3_char(ch: char) -> Option<(Self, Option<Instance>)> {
        match ch {
            Self::CLAN_CHAT_CHAR => Some((Self::Chat, Some(Instance::Clan))),
            Self::LOBBY_CHAT_CHAR => Some((Self::Chat, Some(Instance::Lobby))),
            _ => match Self::from_char(ch) {
                Some(account) => Some((account, None)),
                None => None,
            },
        }
    }

    /// The letter written for this account type with the given instance.
    ///
    /// Chat accounts substitute the clan-chat or lobby-chat letter when the
    /// instance carries the matching flag.
    pub const fn steam3_char(self, instance: Instance) -> Option<char> {
        match (self, instance) {
            (Self::Chat, Instance::Clan) => Some(Self::CLAN_CHAT_CHAR),
            (Self::Chat, Instance::Lobby) => Some(Self::LOBBY_CHAT_CHAR),
            _ => self.char(),
        }
    }

    /// Returns true for account types that default to [`Instance::All`]
    /// when a Steam3 identifier omits the instance.
    pub const fn is_chat_like(self) -> bool {
        matches!(self, Self::Clan | Self::Chat)
    }

    /// Returns true for account types whose Steam3 form spells out the
    /// instance.
    pub const fn writes_instance(self) -> bool {
        matches!(self, Self::AnonGameServer | Self::Multiseat)
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Invalid => "Invalid",
            Self::Individual => "Individual",
            Self::Multiseat => "Multiseat",
            Self::GameServer => "GameServer",
            Self::AnonGameServer => "AnonGameServer",
            Self::Pending => "Pending",
            Self::ContentServer => "ContentServer",
            Self::Clan => "Clan",
            Self::Chat => "Chat",
            Self::ConsoleUser => "ConsoleUser",
            Self::AnonUser => "AnonUser",
            Self::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}
