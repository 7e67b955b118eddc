use crate::{
    Codec, Error, Format, InviteCode, Result, Steam3, Steam64, SteamId,
    pattern::{PROFILE_URL, USER_URL, group},
};
#[cfg(feature = "tracing")]
use tracing::instrument;

const EXPECTED_PROFILE: &str = "expected a profile URL";
const EXPECTED_USER: &str = "expected a user URL";
const EXPECTED_EITHER: &str = "expected a profile or user URL";

/// Decodes `https://steamcommunity.com/profiles/<id>`.
///
/// `www.` and the `my.steamchina.com` host are accepted, as is the `gid`
/// path and a trailing slash. A numeric `<id>` is read as a SteamID64;
/// anything else as a Steam3 identifier.
///
/// ```
/// use steamid::{SteamId, decode_profile_url};
///
/// let url = "https://steamcommunity.com/profiles/[U:1:1]/";
/// assert_eq!(decode_profile_url(url).unwrap(), SteamId::new(1));
/// ```
///
/// # Errors
///
/// - [`Error::MalformedInput`] if `url` is not a profile URL
/// - otherwise, the error of the embedded identifier's decoder
#[cfg_attr(
    feature = "tracing",
    instrument(level = "trace", err(level = "debug"))
)]
pub fn decode_profile_url(url: &str) -> Result<SteamId> {
    let url = super::trimmed(url, Format::ProfileUrl)?;
    let caps = PROFILE_URL
        .captures(url)
        .ok_or(Error::malformed(Format::ProfileUrl, EXPECTED_PROFILE))?;
    let id = &caps[group::ID];

    match id.parse::<u64>() {
        Ok(id64) => Steam64::unpack(id64),
        Err(_) => Steam3::decode(id),
    }
}

/// Decodes `https://steamcommunity.com/user/<code>` and
/// `https://s.team/p/<code>`, where `<code>` is an invite code.
///
/// # Errors
///
/// - [`Error::MalformedInput`] if `url` is not a user URL
/// - otherwise, the error of [`InviteCode`]
#[cfg_attr(
    feature = "tracing",
    instrument(level = "trace", err(level = "debug"))
)]
pub fn decode_user_url(url: &str) -> Result<SteamId> {
    let url = super::trimmed(url, Format::UserUrl)?;
    let caps = USER_URL
        .captures(url)
        .ok_or(Error::malformed(Format::UserUrl, EXPECTED_USER))?;
    InviteCode::decode(&caps[group::ID])
}

/// Decodes a profile URL, falling back to a user URL.
///
/// # Errors
///
/// - [`Error::MalformedInput`] for [`Format::Url`] if `url` is neither
/// - otherwise, the error of whichever URL form matched
pub fn decode_url(url: &str) -> Result<SteamId> {
    let trimmed = super::trimmed(url, Format::Url)?;
    if PROFILE_URL.is_match(trimmed) {
        decode_profile_url(trimmed)
    } else if USER_URL.is_match(trimmed) {
        decode_user_url(trimmed)
    } else {
        Err(Error::malformed(Format::Url, EXPECTED_EITHER))
    }
}
