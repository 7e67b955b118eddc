use crate::{
    AccountType, Codec, Error, Format, Instance, Result, SteamId, Universe, is_xuid_valid,
    pattern::{STEAM3, group},
};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// `[U:1:1]`
pub const MIN_STEAM3: &str = "[U:1:1]";

/// `[U:1:4294967295]`
pub const MAX_STEAM3: &str = "[U:1:4294967295]";

const MALFORMED_ID: &str = "expected [C:U:N] or [C:U:N:I]";

/// Returns true if `id3` is well formed and names a usable account number.
pub fn is_steam3_valid(id3: &str) -> bool {
    STEAM3
        .captures(id3)
        .and_then(|caps| caps[group::ID].parse::<u64>().ok())
        .is_some_and(is_xuid_valid)
}

/// The bracketed `[C:U:N]` notation, with an optional `:I` instance suffix.
///
/// `C` is the account-type letter, `U` the universe digit, `N` the account
/// number and `I` the instance value. The letters `c` and `L` name chat
/// accounts and force the clan-chat or lobby-chat instance.
///
/// When the suffix is absent the instance defaults to `All` for clans and
/// chats, and to `Desktop` otherwise. The suffix is only written for
/// anonymous game servers and multiseat accounts, so other identifiers
/// round-trip only when their instance is the default one.
///
/// ```
/// use steamid::{AccountType, Codec, Instance, Steam3};
///
/// let id = Steam3::decode("[L:1:7]").unwrap();
/// assert_eq!(id.account_type(), Some(AccountType::Chat));
/// assert_eq!(id.instance(), Some(Instance::Lobby));
/// assert_eq!(Steam3::encode(&id).unwrap(), "[L:1:7]");
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Steam3;

impl Steam3 {
    const fn default_instance(account: AccountType) -> Instance {
        if account.is_chat_like() {
            Instance::All
        } else {
            Instance::Desktop
        }
    }
}

impl Codec for Steam3 {
    type Encoded = String;
    const FORMAT: Format = Format::Steam3;

    fn encode(id: &SteamId) -> Result<String> {
        let (xuid, universe, instance, account) = id.parts(Self::FORMAT)?;
        let letter = account
            .steam3_char(instance)
            .ok_or(Error::invalid(Self::FORMAT))?;

        let (universe, instance) = (universe.value(), instance.value());
        let id3 = if account.writes_instance() {
            format!("[{letter}:{universe}:{xuid}:{instance}]")
        } else {
            format!("[{letter}:{universe}:{xuid}]")
        };

        if is_steam3_valid(&id3) {
            Ok(id3)
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
        let caps = STEAM3
            .captures(input)
            .ok_or(Error::malformed(Self::FORMAT, MALFORMED_ID))?;
        let invalid = || Error::invalid(Self::FORMAT);

        let (account, forced) = caps[group::ACCOUNT]
            .chars()
            .next()
            .and_then(AccountType::from_steam3_char)
            .ok_or_else(invalid)?;
        let universe = caps[group::UNIVERSE]
            .parse::<u64>()
            .ok()
            .and_then(Universe::from_value)
            .ok_or_else(invalid)?;
        let xuid = caps[group::ID].parse::<u32>().map_err(|_| invalid())?;
        let instance = match (forced, caps.name(group::INSTANCE)) {
            (Some(instance), _) => instance,
            (None, Some(value)) => value
                .as_str()
                .parse::<u64>()
                .ok()
                .and_then(Instance::from_value)
                .ok_or_else(invalid)?,
            (None, None) => Self::default_instance(account),
        };

        SteamId::from_parts(xuid, universe, instance, account).validated(Self::FORMAT)
    }
}
