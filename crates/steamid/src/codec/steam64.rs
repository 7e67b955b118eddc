use crate::{
    ACCOUNT_ID, ACCOUNT_INSTANCE, ACCOUNT_TYPE, ACCOUNT_UNIVERSE, AccountType, Codec, Error,
    Format, Instance, Result, SteamId, Universe, pattern::STEAM64,
};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// The SteamID64 of a public desktop individual with account number zero.
pub const BASE_STEAM64: u64 = 0x0110_0001_0000_0000;

/// `[U:1:1]` as a SteamID64.
pub const MIN_STEAM64: u64 = 0x0110_0001_0000_0001;

/// `[U:1:4294967295]` as a SteamID64.
pub const MAX_STEAM64: u64 = 0x0110_0001_FFFF_FFFF;

/// Returns true if `id64` is a public desktop individual's SteamID64.
pub const fn is_steam64_valid(id64: u64) -> bool {
    id64 >= MIN_STEAM64 && id64 <= MAX_STEAM64
}

/// The packed 64-bit form, e.g. `76561197960265729`.
///
/// The text form is exactly 17 decimal digits.
///
/// ```
/// use steamid::{Codec, Steam64, SteamId};
///
/// let id = Steam64::decode("76561197960265729").unwrap();
/// assert_eq!(id, SteamId::new(1));
/// assert_eq!(Steam64::encode(&id).unwrap(), 76561197960265729);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Steam64;

impl Steam64 {
    /// Packs the four fields of a valid identifier into one word.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidState`] if `id` is not valid, or if the packed word
    ///   falls outside [`MIN_STEAM64`]..=[`MAX_STEAM64`]
    pub fn pack(id: &SteamId) -> Result<u64> {
        let (xuid, universe, instance, account) = id.parts(Format::Steam64)?;

        let mut id64 = 0;
        id64 = ACCOUNT_ID.insert(id64, u64::from(xuid));
        id64 = ACCOUNT_INSTANCE.insert(id64, u64::from(instance.value()));
        id64 = ACCOUNT_TYPE.insert(id64, u64::from(account.value()));
        id64 = ACCOUNT_UNIVERSE.insert(id64, u64::from(universe.value()));

        if is_steam64_valid(id64) {
            Ok(id64)
        } else {
            Err(Error::invalid(Format::Steam64))
        }
    }

    /// Splits a word into its four fields.
    ///
    /// Any word whose fields name known categories and form a valid
    /// identifier is accepted, including clans and game servers that
    /// [`Steam64::pack`] will not emit.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidState`] if a field names no known category or the
    ///   result is not valid
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "trace", err(level = "debug"))
    )]
    pub fn unpack(id64: u64) -> Result<SteamId> {
        let invalid = || Error::invalid(Format::Steam64);

        let xuid = ACCOUNT_ID.extract(id64) as u32;
        let instance = Instance::from_value(ACCOUNT_INSTANCE.extract(id64)).ok_or_else(invalid)?;
        let account = AccountType::from_value(ACCOUNT_TYPE.extract(id64)).ok_or_else(invalid)?;
        let universe = Universe::from_value(ACCOUNT_UNIVERSE.extract(id64)).ok_or_else(invalid)?;

        SteamId::from_parts(xuid, universe, instance, account).validated(Format::Steam64)
    }
}

impl Codec for Steam64 {
    type Encoded = u64;
    const FORMAT: Format = Format::Steam64;

    fn encode(id: &SteamId) -> Result<u64> {
        Self::pack(id)
    }

    #[cfg_attr(
        feature = "tracing",
        instrument(level = "trace", err(level = "debug"))
    )]
    fn decode(input: &str) -> Result<SteamId> {
        let input = super::trimmed(input, Self::FORMAT)?;
        if !STEAM64.is_match(input) {
            return Err(Error::malformed(Self::FORMAT, "expected 17 decimal digits"));
        }
        let id64 = input
            .parse::<u64>()
            .map_err(|_| Error::malformed(Self::FORMAT, "expected 17 decimal digits"))?;
        Self::unpack(id64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_public_desktop_individuals() {
        assert_eq!(BASE_STEAM64, 76561197960265728);
        assert_eq!(MIN_STEAM64, 76561197960265729);
        assert_eq!(MAX_STEAM64, 76561202255233023);
        assert_eq!(Steam64::pack(&SteamId::new(1)), Ok(MIN_STEAM64));
        assert_eq!(Steam64::pack(&SteamId::new(u32::MAX)), Ok(MAX_STEAM64));
    }

    #[test]
    fn validator_is_an_inclusive_range() {
        assert!(!is_steam64_valid(BASE_STEAM64));
        assert!(is_steam64_valid(MIN_STEAM64));
        assert!(is_steam64_valid(MAX_STEAM64));
        assert!(!is_steam64_valid(MAX_STEAM64 + 1));
        assert!(!is_steam64_valid(0));
    }

    #[test]
    fn pack_refuses_values_outside_the_individual_range() {
        let clan = SteamId::new(4).with_account_type(AccountType::Clan);
        assert!(clan.is_valid());
        assert_eq!(Steam64::pack(&clan), Err(Error::invalid(Format::Steam64)));

        let beta = SteamId::new(4).with_universe(Universe::Beta);
        assert_eq!(Steam64::pack(&beta), Err(Error::invalid(Format::Steam64)));
    }

    #[test]
    fn pack_refuses_invalid_values() {
        assert_eq!(
            Steam64::pack(&SteamId::new(0)),
            Err(Error::invalid(Format::Steam64))
        );
        assert_eq!(
            Steam64::pack(&SteamId::empty()),
            Err(Error::invalid(Format::Steam64))
        );
    }

    #[test]
    fn unpack_accepts_other_valid_categories() {
        // [g:1:4:1]
        let id = Steam64::unpack(0x0170_0001_0000_0004).unwrap();
        assert_eq!(id.account_type(), Some(AccountType::Clan));
        assert_eq!(id.instance(), Some(Instance::Desktop));
        assert_eq!(id.xuid(), Some(4));
        assert_eq!(Steam64::pack(&id), Err(Error::invalid(Format::Steam64)));

        // clans on instance 0 fail the validity predicate
        assert_eq!(
            Steam64::unpack(0x0170_0000_0000_0004),
            Err(Error::invalid(Format::Steam64))
        );
    }

    #[test]
    fn unpack_rejects_unknown_categories() {
        // instance 3 is not named
        let word = ACCOUNT_INSTANCE.insert(MIN_STEAM64, 3);
        assert_eq!(Steam64::unpack(word), Err(Error::invalid(Format::Steam64)));
        // universe 6 is not named
        let word = ACCOUNT_UNIVERSE.insert(MIN_STEAM64, 6);
        assert_eq!(Steam64::unpack(word), Err(Error::invalid(Format::Steam64)));
        // account type 12 is not named
        let word = ACCOUNT_TYPE.insert(MIN_STEAM64, 12);
        assert_eq!(Steam64::unpack(word), Err(Error::invalid(Format::Steam64)));
    }

    #[test]
    fn unpack_rejects_invalid_results() {
        assert_eq!(
            Steam64::unpack(BASE_STEAM64),
            Err(Error::invalid(Format::Steam64))
        );
        assert_eq!(Steam64::unpack(0), Err(Error::invalid(Format::Steam64)));
    }

    #[test]
    fn decode_requires_seventeen_digits() {
        assert_eq!(Steam64::decode(" 76561197960265729\n"), Ok(SteamId::new(1)));
        for input in [
            "",
            "   ",
            "7656119796026572",
            "765611979602657290",
            "7656119796026572x",
            "-7656119796026572",
        ] {
            let err = Steam64::decode(input).unwrap_err();
            assert!(err.is_malformed(), "{input:?}");
            assert_eq!(err.format(), Format::Steam64);
        }
    }

    #[test]
    fn decode_rejects_well_formed_invalid_words() {
        assert_eq!(
            Steam64::decode("76561197960265728"),
            Err(Error::invalid(Format::Steam64))
        );
    }
}
