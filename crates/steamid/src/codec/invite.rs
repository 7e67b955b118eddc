use crate::{Codec, Error, Format, Result, SteamId, is_xuid_valid, pattern::INVITE_CODE};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// The sixteen invite-code symbols, in hex digit order.
pub const INVITE_CODE_ALPHABET: &str = "bcdfghjkmnpqrtvw";

/// Separates the two halves of an invite code longer than two symbols.
pub const INVITE_CODE_DELIMITER: char = '-';

/// The invite code of account number 1.
pub const MIN_INVITE_CODE: &str = "c";

/// The invite code of account number `0xFFFF_FFFF`.
pub const MAX_INVITE_CODE: &str = "wwww-wwww";

const ALPHABET: &[u8; 16] = b"bcdfghjkmnpqrtvw";
const NO_VALUE: u8 = 255;
const BITS_PER_CHAR: u32 = 4;

const OUT_OF_RANGE: &str = "account number out of range";
const MALFORMED_CODE: &str = "expected invite-code symbols";

/// Lookup table for invite-code symbols
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    while i < 16 {
        lut[ALPHABET[i as usize] as usize] = i;
        i += 1;
    }
    lut
};

const _: () = {
    let bytes = INVITE_CODE_ALPHABET.as_bytes();
    assert!(bytes.len() == ALPHABET.len());
    let mut i = 0;
    while i < bytes.len() {
        assert!(bytes[i] == ALPHABET[i]);
        i += 1;
    }
};

/// Renders an account number as an invite code.
///
/// The number is written as lower-case hex without leading zeros, each
/// digit is substituted by its invite-code symbol, and codes longer than two
/// symbols are split in half by [`INVITE_CODE_DELIMITER`].
///
/// ```
/// assert_eq!(steamid::encode_invite_code(1266042636).unwrap(), "gqkj-gkbr");
/// ```
///
/// # Errors
///
/// - [`Error::MalformedInput`] if `xuid` is zero or wider than 32 bits
pub fn encode_invite_code(xuid: u64) -> Result<String> {
    if !is_xuid_valid(xuid) {
        return Err(Error::malformed(Format::InviteCode, OUT_OF_RANGE));
    }

    let digits = (u64::BITS - xuid.leading_zeros()).div_ceil(BITS_PER_CHAR) as usize;
    let mut symbols: Vec<char> = (0..digits)
        .rev()
        .map(|i| {
            let nibble = (xuid >> (i as u32 * BITS_PER_CHAR)) & 0xF;
            char::from(ALPHABET[nibble as usize])
        })
        .collect();
    if symbols.len() > 2 {
        symbols.insert(symbols.len() / 2, INVITE_CODE_DELIMITER);
    }
    let code: String = symbols.into_iter().collect();

    if INVITE_CODE.is_match(&code) {
        Ok(code)
    } else {
        Err(Error::invalid(Format::InviteCode))
    }
}

/// Parses an invite code back into an account number.
///
/// Surrounding whitespace is ignored. The delimiter may appear once anywhere
/// strictly inside the code.
///
/// # Errors
///
/// - [`Error::MalformedInput`] if the code does not match the invite-code
///   grammar, or if it decodes to zero or to more than 32 bits
pub fn decode_invite_code(code: &str) -> Result<u32> {
    let code = super::trimmed(code, Format::InviteCode)?;
    if !INVITE_CODE.is_match(code) {
        return Err(Error::malformed(Format::InviteCode, MALFORMED_CODE));
    }

    let out_of_range = || Error::malformed(Format::InviteCode, OUT_OF_RANGE);
    let mut acc = 0_u64;
    for b in code.bytes().filter(|&b| b != INVITE_CODE_DELIMITER as u8) {
        let val = LOOKUP[b as usize];
        if val == NO_VALUE {
            return Err(Error::malformed(Format::InviteCode, MALFORMED_CODE));
        }
        acc = (acc << BITS_PER_CHAR) | u64::from(val);
        if acc > u64::from(u32::MAX) {
            return Err(out_of_range());
        }
    }

    match u32::try_from(acc) {
        Ok(xuid) if xuid != 0 => Ok(xuid),
        _ => Err(out_of_range()),
    }
}

/// The short invite code used by `https://s.team/p/<code>`.
///
/// Only the account number is encoded; decoding yields a public desktop
/// individual.
#[derive(Copy, Clone, Debug)]
pub struct InviteCode;

impl Codec for InviteCode {
    type Encoded = String;
    const FORMAT: Format = Format::InviteCode;

    fn encode(id: &SteamId) -> Result<String> {
        let (xuid, ..) = id.parts(Self::FORMAT)?;
        encode_invite_code(u64::from(xuid))
    }

    #[cfg_attr(
        feature = "tracing",
        instrument(level = "trace", err(level = "debug"))
    )]
    fn decode(input: &str) -> Result<SteamId> {
        let xuid = decode_invite_code(input)?;
        SteamId::individual_as(u64::from(xuid), Self::FORMAT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_known_codes() {
        assert_eq!(encode_invite_code(1).unwrap(), MIN_INVITE_CODE);
        assert_eq!(encode_invite_code(0xF).unwrap(), "w");
        assert_eq!(encode_invite_code(0x10).unwrap(), "cb");
        assert_eq!(encode_invite_code(0x123).unwrap(), "c-df");
        assert_eq!(encode_invite_code(0x1234).unwrap(), "cd-fg");
        assert_eq!(encode_invite_code(1266042636).unwrap(), "gqkj-gkbr");
        assert_eq!(
            encode_invite_code(u64::from(u32::MAX)).unwrap(),
            MAX_INVITE_CODE
        );
    }

    #[test]
    fn encode_rejects_out_of_range() {
        for xuid in [0, u64::from(u32::MAX) + 1, u64::MAX] {
            let err = encode_invite_code(xuid).unwrap_err();
            assert!(err.is_malformed());
            assert_eq!(err.format(), Format::InviteCode);
        }
    }

    #[test]
    fn decode_known_codes() {
        assert_eq!(decode_invite_code(MIN_INVITE_CODE), Ok(1));
        assert_eq!(decode_invite_code("gqkj-gkbr"), Ok(1266042636));
        assert_eq!(decode_invite_code("gqkjgkbr"), Ok(1266042636));
        assert_eq!(decode_invite_code("g-qkjgkbr"), Ok(1266042636));
        assert_eq!(decode_invite_code(MAX_INVITE_CODE), Ok(u32::MAX));
        assert_eq!(decode_invite_code("  c-df\n"), Ok(0x123));
    }

    #[test]
    fn decode_allows_leading_zero_symbols() {
        assert_eq!(decode_invite_code("bbbbbbbbbbc"), Ok(1));
    }

    #[test]
    fn decode_rejects_bad_grammar() {
        for input in ["", "-c", "c-", "c--c", "c-c-c", "a", "C", "g k", "g_k"] {
            let err = decode_invite_code(input).unwrap_err();
            assert!(err.is_malformed(), "{input:?}");
        }
    }

    #[test]
    fn decode_rejects_out_of_range() {
        assert!(decode_invite_code("b").unwrap_err().is_malformed());
        assert!(decode_invite_code("bbbb-bbbb").unwrap_err().is_malformed());
        assert!(decode_invite_code("cbbbb-bbbb").unwrap_err().is_malformed());
    }

    #[test]
    fn codec_yields_individuals() {
        let id = InviteCode::decode("gqkj-gkbr").unwrap();
        assert_eq!(id, SteamId::new(1266042636));
        assert_eq!(InviteCode::encode(&id).unwrap(), "gqkj-gkbr");
        assert_eq!(
            InviteCode::encode(&SteamId::empty()),
            Err(Error::invalid(Format::InviteCode))
        );
    }
}
