use crate::{
    Auth, Codec, Error, Format, Result, SteamId, is_xuid_valid,
    pattern::{STEAM2, group},
};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// `[U:1:1]` in Steam2 notation.
pub const MIN_STEAM2: &str = "STEAM_1:1:0";

/// `[U:1:4294967295]` in Steam2 notation.
pub const MAX_STEAM2: &str = "STEAM_1:1:2147483647";

/// Splits `STEAM_U:A:N` into universe digit and account number
/// `N * 2 + A`.
fn split(id2: &str) -> Option<(u64, u64)> {
    let caps = STEAM2.captures(id2)?;
    let universe = caps[group::UNIVERSE].parse::<u64>().ok()?;
    let auth = caps[group::AUTH].parse::<u64>().ok()?;
    let xuid = caps[group::ID]
        .parse::<u64>()
        .ok()?
        .checked_mul(2)?
        .checked_add(auth)?;
    Some((universe, xuid))
}

/// Returns true if `id2` is well formed and names a usable account number.
pub fn is_steam2_valid(id2: &str) -> bool {
    split(id2).is_some_and(|(_, xuid)| is_xuid_valid(xuid))
}

/// The legacy `STEAM_U:A:N` notation, where the account number is
/// `N * 2 + A`.
///
/// Decoding always yields a public desktop individual; the universe digit
/// is checked against the grammar and then discarded. Encoding writes the
/// identifier's own universe digit.
///
/// ```
/// use steamid::{Codec, Steam2, SteamId};
///
/// assert_eq!(Steam2::decode("STEAM_0:1:0").unwrap(), SteamId::new(1));
/// assert_eq!(Steam2::encode(&SteamId::new(4)).unwrap(), "STEAM_1:0:2");
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Steam2;

impl Codec for Steam2 {
    type Encoded = String;
    const FORMAT: Format = Format::Steam2;

    fn encode(id: &SteamId) -> Result<String> {
        let (xuid, universe, ..) = id.parts(Self::FORMAT)?;
        let id2 = format!(
            "STEAM_{}:{}:{}",
            universe.value(),
            Auth::of_xuid(xuid).value(),
            xuid >> 1
        );

        if is_steam2_valid(&id2) {
            Ok(id2)
        } else {
            Err(Error::invalid(Self::FORMAT))
        }
    }

    #[cfg_attr(
        feature = "tracing",
        instrument(level = "trace", err(level = "debug"))
    )]
    fn decode(input: &str) -> Result<SteamId> {
        let input = super::trimmed(input, Self::FORMAT)?;
        if !STEAM2.is_match(input) {
            return Err(Error::malformed(Self::FORMAT, "expected STEAM_U:A:N"));
        }
        let (_, xuid) = split(input).ok_or(Error::invalid(Self::FORMAT))?;
        SteamId::individual_as(xuid, Self::FORMAT)
    }
}
