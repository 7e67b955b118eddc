//! Bit layout of a packed SteamID64.
//!
//! ```text
//!  Bit Index:  63          56 55       52 51          32 31             0
//!              +-------------+-----------+--------------+----------------+
//!  Field:      | universe (8)| type (4)  | instance (20)| account id (32)|
//!              +-------------+-----------+--------------+----------------+
//!              |<------------ MSB ------ 64 bits ------ LSB ------------>|
//! ```

/// A named sub-field of a packed 64-bit word.
///
/// Range checking is the caller's job: `insert` truncates the value to the
/// field width and `extract` never fails.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitField {
    /// Number of bits to shift the field to its position.
    pub offset: u32,
    /// Bitmask for the field once shifted down to bit 0.
    pub mask: u64,
}

impl BitField {
    pub const fn new(offset: u32, mask: u64) -> Self {
        Self { offset, mask }
    }

    /// Extracts this field from the packed word.
    pub const fn extract(self, word: u64) -> u64 {
        (word >> self.offset) & self.mask
    }

    /// ORs `value` into this field of `word`.
    pub const fn insert(self, word: u64, value: u64) -> u64 {
        word | ((value & self.mask) << self.offset)
    }

    /// Width of the field in bits.
    pub const fn bits(self) -> u32 {
        self.mask.count_ones()
    }
}

/// 32-bit account number. Occupies bits 0 through 31.
pub const ACCOUNT_ID: BitField = BitField::new(0, 0xFFFF_FFFF);

/// 20-bit instance. Occupies bits 32 through 51.
pub const ACCOUNT_INSTANCE: BitField = BitField::new(32, 0x000F_FFFF);

/// 4-bit account type. Occupies bits 52 through 55.
pub const ACCOUNT_TYPE: BitField = BitField::new(52, 0x0000_000F);

/// 8-bit universe. Occupies bits 56 through 63.
pub const ACCOUNT_UNIVERSE: BitField = BitField::new(56, 0x0000_00FF);

const _: () = {
    // The four fields must tile the word exactly.
    assert!(ACCOUNT_ID.offset == 0);
    assert!(ACCOUNT_INSTANCE.offset == ACCOUNT_ID.offset + ACCOUNT_ID.bits());
    assert!(ACCOUNT_TYPE.offset == ACCOUNT_INSTANCE.offset + ACCOUNT_INSTANCE.bits());
    assert!(ACCOUNT_UNIVERSE.offset == ACCOUNT_TYPE.offset + ACCOUNT_TYPE.bits());
    assert!(ACCOUNT_UNIVERSE.offset + ACCOUNT_UNIVERSE.bits() == u64::BITS);
};
