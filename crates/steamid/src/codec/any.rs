use crate::{
    Codec, Error, Format, FriendCode, InviteCode, Result, Steam2, Steam3, Steam64, SteamId,
    decode_profile_url, decode_url, decode_user_url,
};

type Decoder = fn(&str) -> Result<SteamId>;

/// Formats tried by [`decode_any`], in order.
pub const DECODE_ORDER: [Format; 6] = [
    Format::Steam64,
    Format::Steam2,
    Format::Steam3,
    Format::InviteCode,
    Format::FriendCode,
    Format::Url,
];

fn decoder(format: Format) -> Decoder {
    match format {
        Format::Xuid => decode_xuid,
        Format::Steam64 => Steam64::decode,
        Format::Steam2 => Steam2::decode,
        Format::Steam3 => Steam3::decode,
        Format::InviteCode => InviteCode::decode,
        Format::FriendCode => FriendCode::decode,
        Format::ProfileUrl => decode_profile_url,
        Format::UserUrl => decode_user_url,
        Format::Url => decode_url,
        Format::Any => decode_any,
    }
}

/// A bare decimal account number, read as a public desktop individual.
fn decode_xuid(input: &str) -> Result<SteamId> {
    let input = super::trimmed(input, Format::Xuid)?;
    if !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::malformed(Format::Xuid, "expected decimal digits"));
    }
    let xuid = input
        .parse::<u64>()
        .map_err(|_| Error::malformed(Format::Xuid, "account number out of range"))?;
    SteamId::individual(xuid)
}

/// Decodes `input` as the given format.
///
/// # Errors
///
/// Returns the decoder's error.
pub fn decode_as(format: Format, input: &str) -> Result<SteamId> {
    decoder(format)(input)
}

/// Tries every format of [`DECODE_ORDER`] and returns the first success.
///
/// Bare account numbers are not tried; a 17 digit number is always read as
/// a SteamID64.
///
/// ```
/// use steamid::{SteamId, decode_any};
///
/// for input in ["76561197960265729", "STEAM_1:1:0", "[U:1:1]", "c", "AJJJS-ABAA"] {
///     assert_eq!(decode_any(input).unwrap(), SteamId::new(1));
/// }
/// ```
///
/// # Errors
///
/// - [`Error::InvalidState`] of the first format whose grammar matched, if
///   any did
/// - [`Error::MalformedInput`] for [`Format::Any`] otherwise
pub fn decode_any(input: &str) -> Result<SteamId> {
    let mut recognized = None;
    for format in DECODE_ORDER {
        match decoder(format)(input) {
            Ok(id) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(%format, %id, "decoded");
                return Ok(id);
            }
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(%format, %err, "decoder rejected input");
                if err.is_invalid_state() && recognized.is_none() {
                    recognized = Some(err);
                }
            }
        }
    }

    Err(recognized.unwrap_or(Error::malformed(Format::Any, "no format matched")))
}
