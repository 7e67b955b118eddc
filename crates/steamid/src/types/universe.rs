use core::fmt;

/// Top-level deployment partition an account lives in.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Universe {
    Invalid = 0,
    Public = 1,
    Beta = 2,
    Internal = 3,
    Dev = 4,
    Rc = 5,
}

impl Universe {
    /// Every universe, ordered by value.
    pub const ALL: [Self; 6] = [
        Self::Invalid,
        Self::Public,
        Self::Beta,
        Self::Internal,
        Self::Dev,
        Self::Rc,
    ];

    /// Smallest usable universe.
    pub const MIN: Self = Self::Public;

    /// Largest universe.
    pub const MAX: Self = Self::Rc;

    /// The raw integer stored in the universe bits of a SteamID64.
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Looks up a universe by its raw integer.
    pub const fn from_value(value: u64) -> Option<Self> {
        match value {
            0 => Some(Self::Invalid),
            1 => Some(Self::Public),
            2 => Some(Self::Beta),
            3 => Some(Self::Internal),
            4 => Some(Self::Dev),
            5 => Some(Self::Rc),
            _ => None,
        }
    }

    /// Looks up a universe by its position in [`Universe::ALL`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Invalid => "Invalid",
            Self::Public => "Public",
            Self::Beta => "Beta",
            Self::Internal => "Internal",
            Self::Dev => "Dev",
            Self::Rc => "RC",
        };
        f.write_str(name)
    }
}
