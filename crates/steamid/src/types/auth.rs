/// Low bit of the account number as written in `STEAM_U:A:N`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Auth {
    No = 0,
    Yes = 1,
}

impl Auth {
    pub const ALL: [Self; 2] = [Self::No, Self::Yes];

    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn from_value(value: u64) -> Option<Self> {
        match value {
            0 => Some(Self::No),
            1 => Some(Self::Yes),
            _ => None,
        }
    }

    /// The auth bit of an account number.
    pub const fn of_xuid(xuid: u32) -> Self {
        if xuid & 1 == 1 { Self::Yes } else { Self::No }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}
