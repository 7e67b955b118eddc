use crate::{Codec, Error, Format, Result, SteamId, is_xuid_valid, pattern::FRIEND_CODE};
use md5::{Digest, Md5};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// The 32 friend-code symbols.
pub const FRIEND_CODE_ALPHABET: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Separates symbol groups of a friend code.
pub const FRIEND_CODE_DELIMITER: char = '-';

/// The friend code of account number 1.
pub const MIN_FRIEND_CODE: &str = "AJJJS-ABAA";

/// The friend code of account number `0xFFFF_FFFF`.
///
/// Older encoders shifted the packed value with sign extension and wrote
/// `S9ZZR-9997` instead. That form still decodes to the same account.
pub const MAX_FRIEND_CODE: &str = "S9ZZR-999P";

const ALPHABET: &[u8; 32] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const NO_VALUE: u8 = 255;
const BITS_PER_CHAR: u32 = 5;

/// Symbols in the full, unshortened code.
const SYMBOLS: usize = 13;

/// Positions before which a delimiter is written.
const DELIMITERS: [usize; 2] = [4, 9];

/// The leading group every full code of a 32-bit account number starts
/// with. It is dropped from the short form.
const PREFIX: &str = "AAAA-";

const OUT_OF_RANGE: &str = "account number out of range";
const MALFORMED_CODE: &str = "expected XXXXX-XXXX friend-code symbols";

/// `"CSGO"` in the high word of the hashed value.
const HASH_TAG: u64 = 0x4353_474F_0000_0000;

/// Lookup table for friend-code symbols
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    while i < 32 {
        lut[ALPHABET[i as usize] as usize] = i;
        i += 1;
    }
    lut
};

const _: () = {
    let bytes = FRIEND_CODE_ALPHABET.as_bytes();
    assert!(bytes.len() == ALPHABET.len());
    let mut i = 0;
    while i < bytes.len() {
        assert!(bytes[i] == ALPHABET[i]);
        i += 1;
    }
};

/// The first eight bytes of `md5("CSGO" | xuid)`, little-endian.
fn parity_bits(xuid: u32) -> u64 {
    let digest = Md5::digest((HASH_TAG | u64::from(xuid)).to_le_bytes());
    let mut head = [0_u8; 8];
    head.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(head)
}

/// Interleaves the eight nibbles of `xuid`, lowest first, with one parity
/// bit each.
fn pack(xuid: u32) -> u64 {
    let parity = parity_bits(xuid);
    let mut rest = xuid;
    let mut acc = 0_u64;
    for i in 0..8 {
        let nibble = u64::from(rest & 0xF);
        acc = (acc << BITS_PER_CHAR) | (nibble << 1) | ((parity >> i) & 1);
        rest >>= 4;
    }
    acc
}

/// Recovers the account number from a packed value, ignoring parity.
fn unpack(mut acc: u64) -> u32 {
    let mut xuid = 0_u32;
    for _ in 0..8 {
        acc >>= 1;
        xuid = (xuid << 4) | (acc & 0xF) as u32;
        acc >>= 4;
    }
    xuid
}

/// Writes a packed value as the full 13 symbol code.
fn render(acc: u64) -> String {
    let mut word = acc.swap_bytes();
    let mut code = String::with_capacity(SYMBOLS + DELIMITERS.len());
    for i in 0..SYMBOLS {
        if DELIMITERS.contains(&i) {
            code.push(FRIEND_CODE_DELIMITER);
        }
        code.push(char::from(ALPHABET[(word & 0x1F) as usize]));
        word >>= BITS_PER_CHAR;
    }
    code
}

/// Reads a full code back into a packed value.
///
/// The thirteenth symbol only contributes its low four bits.
fn parse(code: &str) -> Option<u64> {
    let mut word = 0_u64;
    let mut count = 0;
    for b in code.bytes().filter(|&b| b != FRIEND_CODE_DELIMITER as u8) {
        let val = LOOKUP[b as usize];
        if val == NO_VALUE || count == SYMBOLS {
            return None;
        }
        word |= u64::from(val) << (BITS_PER_CHAR as usize * count);
        count += 1;
    }
    (count == SYMBOLS).then(|| word.swap_bytes())
}

/// Renders an account number as a CS:GO friend code.
///
/// ```
/// assert_eq!(steamid::encode_friend_code(1).unwrap(), "AJJJS-ABAA");
/// ```
///
/// # Errors
///
/// - [`Error::MalformedInput`] if `xuid` is zero or wider than 32 bits
pub fn encode_friend_code(xuid: u64) -> Result<String> {
    let xuid = match u32::try_from(xuid) {
        Ok(xuid) if is_xuid_valid(u64::from(xuid)) => xuid,
        _ => {
            return Err(Error::malformed(Format::FriendCode, OUT_OF_RANGE));
        }
    };

    let full = render(pack(xuid));
    match full.strip_prefix(PREFIX) {
        Some(code) if FRIEND_CODE.is_match(code) => Ok(code.to_owned()),
        _ => Err(Error::invalid(Format::FriendCode)),
    }
}

/// Parses a friend code back into an account number.
///
/// The parity bits are not checked; see [`verify_friend_code`].
///
/// # Errors
///
/// - [`Error::MalformedInput`] if the code does not match the friend-code
///   grammar
pub fn decode_friend_code(code: &str) -> Result<u32> {
    let code = super::trimmed(code, Format::FriendCode)?;
    if !FRIEND_CODE.is_match(code) {
        return Err(Error::malformed(Format::FriendCode, MALFORMED_CODE));
    }

    parse(&format!("{PREFIX}{code}"))
        .map(unpack)
        .ok_or(Error::malformed(Format::FriendCode, MALFORMED_CODE))
}

/// Returns true if the parity bits of `code` match its account number.
///
/// # Errors
///
/// Fails when [`decode_friend_code`] does.
pub fn verify_friend_code(code: &str) -> Result<bool> {
    let xuid = decode_friend_code(code)?;
    let full = format!("{PREFIX}{}", code.trim());
    Ok(parse(&full) == Some(pack(xuid)))
}

/// The CS:GO friend code, e.g. `AJJJS-ABAA`.
///
/// Only the account number is encoded; decoding yields a public desktop
/// individual.
#[derive(Copy, Clone, Debug)]
pub struct FriendCode;

impl Codec for FriendCode {
    type Encoded = String;
    const FORMAT: Format = Format::FriendCode;

    fn encode(id: &SteamId) -> Result<String> {
        let (xuid, ..) = id.parts(Self::FORMAT)?;
        encode_friend_code(u64::from(xuid))
    }

    #[cfg_attr(
        feature = "tracing",
        instrument(level = "trace", err(level = "debug"))
    )]
    fn decode(input: &str) -> Result<SteamId> {
        let xuid = decode_friend_code(input)?;
        SteamId::individual_as(u64::from(xuid), Self::FORMAT)
    }
}
