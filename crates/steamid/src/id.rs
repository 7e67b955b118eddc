use crate::{
    AccountType, Codec, Error, Format, FriendCode, Instance, InviteCode, Result, Steam2, Steam3,
    Steam64, SteamUrl, Universe,
};
use core::fmt;
use core::str::FromStr;

/// The reserved account number. Valid only for a few account types.
pub const BASE_XUID: u32 = 0x0000_0000;

/// Smallest account number an individual may have.
pub const MIN_XUID: u32 = 0x0000_0001;

/// Largest account number.
pub const MAX_XUID: u32 = 0xFFFF_FFFF;

/// Returns true if `xuid` is a usable account number, `1..=0xFFFF_FFFF`.
pub const fn is_xuid_valid(xuid: u64) -> bool {
    xuid >= MIN_XUID as u64 && xuid <= MAX_XUID as u64
}

/// A Steam account identifier.
///
/// A `SteamId` is the aggregate of four fields, any of which may be unset:
/// the 32-bit account number (`xuid`), the [`Universe`], the [`Instance`]
/// and the [`AccountType`]. It has no identity beyond these values;
/// equality and hashing compare all four.
///
/// Values built with [`SteamId::new`] describe a public individual account.
/// Values produced by the `from_*` decoders are always valid. Everything
/// else can be assembled field by field and checked with
/// [`SteamId::is_valid`]; every `to_*` conversion refuses invalid values.
///
/// # Example
///
/// ```
/// use steamid::{AccountType, Instance, SteamId, Universe};
///
/// let id = SteamId::from_steam3("[g:1:4:1]").unwrap();
/// assert_eq!(id.account_type(), Some(AccountType::Clan));
/// assert_eq!(id.instance(), Some(Instance::Desktop));
/// assert_eq!(id.universe(), Some(Universe::Public));
/// assert_eq!(id.xuid(), Some(4));
///
/// let chat = id.with_account_type(AccountType::Chat).with_instance(Instance::Clan);
/// assert_eq!(chat.to_steam3().unwrap(), "[c:1:4]");
/// ```
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct SteamId {
    xuid: Option<u32>,
    universe: Option<Universe>,
    instance: Option<Instance>,
    account: Option<AccountType>,
}

impl SteamId {
    /// A value with every field unset. Never valid.
    pub const fn empty() -> Self {
        Self {
            xuid: None,
            universe: None,
            instance: None,
            account: None,
        }
    }

    /// A public desktop individual with the given account number.
    ///
    /// `SteamId::new(0)` is constructed but not valid.
    pub const fn new(xuid: u32) -> Self {
        Self::from_parts(
            xuid,
            Universe::Public,
            Instance::Desktop,
            AccountType::Individual,
        )
    }

    /// Assembles a value from all four fields without validating it.
    pub const fn from_parts(
        xuid: u32,
        universe: Universe,
        instance: Instance,
        account: AccountType,
    ) -> Self {
        Self {
            xuid: Some(xuid),
            universe: Some(universe),
            instance: Some(instance),
            account: Some(account),
        }
    }

    /// A public desktop individual, rejecting out-of-range account numbers.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidState`] if `xuid` is zero or does not fit in 32 bits
    pub fn individual(xuid: u64) -> Result<Self> {
        Self::individual_as(xuid, Format::Xuid)
    }

    pub(crate) fn individual_as(xuid: u64, format: Format) -> Result<Self> {
        let xuid = u32::try_from(xuid).map_err(|_| Error::invalid(format))?;
        Self::new(xuid).validated(format)
    }

    /// Returns true if every field is set and the combination is legal.
    ///
    /// - universe and account type must not be `Invalid`
    /// - an individual needs a non-zero account number and a non-web instance
    /// - a clan needs a non-zero account number and an instance other than `All`
    /// - a game server needs a non-zero account number
    pub const fn is_valid(&self) -> bool {
        let (Some(xuid), Some(universe), Some(instance), Some(account)) =
            (self.xuid, self.universe, self.instance, self.account)
        else {
            return false;
        };

        if matches!(account, AccountType::Invalid) || matches!(universe, Universe::Invalid) {
            return false;
        }

        match account {
            AccountType::Individual => xuid >= MIN_XUID && !matches!(instance, Instance::Web),
            AccountType::Clan => xuid >= MIN_XUID && !matches!(instance, Instance::All),
            AccountType::GameServer => xuid >= MIN_XUID,
            _ => true,
        }
    }

    /// Returns `self` if valid, otherwise an [`Error::InvalidState`] for
    /// `format`.
    pub(crate) fn validated(self, format: Format) -> Result<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(Error::invalid(format))
        }
    }

    /// The four fields of a valid value.
    pub(crate) fn parts(&self, format: Format) -> Result<(u32, Universe, Instance, AccountType)> {
        match (self.xuid, self.universe, self.instance, self.account) {
            (Some(xuid), Some(universe), Some(instance), Some(account)) if self.is_valid() => {
                Ok((xuid, universe, instance, account))
            }
            _ => Err(Error::invalid(format)),
        }
    }

    pub const fn xuid(&self) -> Option<u32> {
        self.xuid
    }

    pub const fn universe(&self) -> Option<Universe> {
        self.universe
    }

    pub const fn instance(&self) -> Option<Instance> {
        self.instance
    }

    pub const fn account_type(&self) -> Option<AccountType> {
        self.account
    }

    /// The Steam3 letter of the account type, ignoring chat aliases.
    pub fn account_char(&self) -> Option<char> {
        self.account.and_then(AccountType::char)
    }

    pub fn set_xuid(&mut self, xuid: u32) -> &mut Self {
        self.xuid = Some(xuid);
        self
    }

    pub fn set_universe(&mut self, universe: Universe) -> &mut Self {
        self.universe = Some(universe);
        self
    }

    pub fn set_instance(&mut self, instance: Instance) -> &mut Self {
        self.instance = Some(instance);
        self
    }

    pub fn set_account_type(&mut self, account: AccountType) -> &mut Self {
        self.account = Some(account);
        self
    }

    /// Turns this value into a public desktop individual.
    ///
    /// Leaves `self` untouched on error.
    ///
    /// # Errors
    ///
    /// See [`SteamId::individual`].
    pub fn set_individual(&mut self, xuid: u64) -> Result<&mut Self> {
        *self = Self::individual(xuid)?;
        Ok(self)
    }

    /// Replaces this value with one decoded from `input`.
    ///
    /// Leaves `self` untouched on error.
    ///
    /// # Errors
    ///
    /// See [`SteamId::decode`].
    pub fn set_from(&mut self, format: Format, input: &str) -> Result<&mut Self> {
        *self = Self::decode(format, input)?;
        Ok(self)
    }

    #[must_use]
    pub const fn with_xuid(mut self, xuid: u32) -> Self {
        self.xuid = Some(xuid);
        self
    }

    #[must_use]
    pub const fn with_universe(mut self, universe: Universe) -> Self {
        self.universe = Some(universe);
        self
    }

    #[must_use]
    pub const fn with_instance(mut self, instance: Instance) -> Self {
        self.instance = Some(instance);
        self
    }

    #[must_use]
    pub const fn with_account_type(mut self, account: AccountType) -> Self {
        self.account = Some(account);
        self
    }

    /// Decodes `input` as the given format. [`Format::Any`] tries every
    /// format in turn; see [`crate::decode_any`].
    ///
    /// # Errors
    ///
    /// Returns the decoder's error.
    pub fn decode(format: Format, input: &str) -> Result<Self> {
        crate::decode_as(format, input)
    }

    /// Decodes any supported notation.
    ///
    /// # Errors
    ///
    /// See [`crate::decode_any`].
    pub fn from_any(input: &str) -> Result<Self> {
        crate::decode_any(input)
    }

    /// Decodes any supported notation, discarding the error.
    pub fn parse(input: &str) -> Option<Self> {
        Self::from_any(input).ok()
    }

    /// Unpacks a SteamID64 integer.
    ///
    /// # Errors
    ///
    /// See [`Steam64::unpack`].
    pub fn from_steam64(id64: u64) -> Result<Self> {
        Steam64::unpack(id64)
    }

    /// Parses the 17 digit decimal form of a SteamID64.
    ///
    /// # Errors
    ///
    /// See [`Steam64`].
    pub fn from_steam64_str(id64: &str) -> Result<Self> {
        Steam64::decode(id64)
    }

    /// Parses `STEAM_U:A:N`.
    ///
    /// # Errors
    ///
    /// See [`Steam2`].
    pub fn from_steam2(id2: &str) -> Result<Self> {
        Steam2::decode(id2)
    }

    /// Parses `[C:U:N]` or `[C:U:N:I]`.
    ///
    /// # Errors
    ///
    /// See [`Steam3`].
    pub fn from_steam3(id3: &str) -> Result<Self> {
        Steam3::decode(id3)
    }

    /// Parses an invite code such as `gqkj-gkbr`.
    ///
    /// # Errors
    ///
    /// See [`InviteCode`].
    pub fn from_invite_code(code: &str) -> Result<Self> {
        InviteCode::decode(code)
    }

    /// Parses a CS:GO friend code such as `AJJJS-ABAA`.
    ///
    /// # Errors
    ///
    /// See [`FriendCode`].
    pub fn from_friend_code(code: &str) -> Result<Self> {
        FriendCode::decode(code)
    }

    /// Parses `https://steamcommunity.com/profiles/<id64 or id3>`.
    ///
    /// # Errors
    ///
    /// See [`crate::decode_profile_url`].
    pub fn from_profile_url(url: &str) -> Result<Self> {
        crate::decode_profile_url(url)
    }

    /// Parses `https://steamcommunity.com/user/<code>` or `https://s.team/p/<code>`.
    ///
    /// # Errors
    ///
    /// See [`crate::decode_user_url`].
    pub fn from_user_url(url: &str) -> Result<Self> {
        crate::decode_user_url(url)
    }

    /// Parses a profile URL, falling back to a user URL.
    ///
    /// # Errors
    ///
    /// See [`crate::decode_url`].
    pub fn from_url(url: &str) -> Result<Self> {
        crate::decode_url(url)
    }

    /// # Errors
    ///
    /// See [`Steam64::pack`].
    pub fn to_steam64(&self) -> Result<u64> {
        Steam64::encode(self)
    }

    /// # Errors
    ///
    /// See [`Steam2`].
    pub fn to_steam2(&self) -> Result<String> {
        Steam2::encode(self)
    }

    /// # Errors
    ///
    /// See [`Steam3`].
    pub fn to_steam3(&self) -> Result<String> {
        Steam3::encode(self)
    }

    /// # Errors
    ///
    /// See [`InviteCode`].
    pub fn to_invite_code(&self) -> Result<String> {
        InviteCode::encode(self)
    }

    /// # Errors
    ///
    /// See [`FriendCode`].
    pub fn to_friend_code(&self) -> Result<String> {
        FriendCode::encode(self)
    }

    /// `https://steamcommunity.com/profiles/<id64>`
    ///
    /// # Errors
    ///
    /// Fails when [`SteamId::to_steam64`] does.
    pub fn to_steam64_url(&self) -> Result<String> {
        let id64 = self.to_steam64()?;
        Ok(SteamUrl::Profile.render(id64))
    }

    /// `https://steamcommunity.com/profiles/<id3>`
    ///
    /// # Errors
    ///
    /// Fails when [`SteamId::to_steam3`] does.
    pub fn to_steam3_url(&self) -> Result<String> {
        let id3 = self.to_steam3()?;
        Ok(SteamUrl::Profile.render(id3))
    }

    /// `https://steamcommunity.com/user/<invite code>`
    ///
    /// # Errors
    ///
    /// Fails when [`SteamId::to_invite_code`] does.
    pub fn to_user_url(&self) -> Result<String> {
        let code = self.to_invite_code()?;
        Ok(SteamUrl::User.render(code))
    }

    /// `https://s.team/p/<invite code>`
    ///
    /// # Errors
    ///
    /// Fails when [`SteamId::to_invite_code`] does.
    pub fn to_invite_url(&self) -> Result<String> {
        let code = self.to_invite_code()?;
        Ok(SteamUrl::Invite.render(code))
    }

    /// `https://my.steamchina.com/profiles/<id64>`
    ///
    /// # Errors
    ///
    /// Fails when [`SteamId::to_steam64`] does.
    pub fn to_china_url(&self) -> Result<String> {
        let id64 = self.to_steam64()?;
        Ok(SteamUrl::China.render(id64))
    }

    /// Renders this value in the given format.
    ///
    /// URL formats render as the profile URL (`Url`, `ProfileUrl`) or the
    /// user URL (`UserUrl`); `Any` renders Steam3.
    ///
    /// # Errors
    ///
    /// Returns the encoder's error.
    pub fn render(&self, format: Format) -> Result<String> {
        match format {
            Format::Xuid => self.parts(format).map(|(xuid, ..)| xuid.to_string()),
            Format::Steam64 => self.to_steam64().map(|id64| id64.to_string()),
            Format::Steam2 => self.to_steam2(),
            Format::Steam3 | Format::Any => self.to_steam3(),
            Format::InviteCode => self.to_invite_code(),
            Format::FriendCode => self.to_friend_code(),
            Format::ProfileUrl | Format::Url => self.to_steam64_url(),
            Format::UserUrl => self.to_user_url(),
        }
    }
}

impl FromStr for SteamId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_any(s)
    }
}

impl TryFrom<u64> for SteamId {
    type Error = Error;

    fn try_from(id64: u64) -> Result<Self, Self::Error> {
        Self::from_steam64(id64)
    }
}

impl TryFrom<SteamId> for u64 {
    type Error = Error;

    fn try_from(id: SteamId) -> Result<Self, Self::Error> {
        id.to_steam64()
    }
}

impl fmt::Display for SteamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_steam3() {
            Ok(id3) => f.write_str(&id3),
            Err(_) => write!(f, "{self:?}"),
        }
    }
}

impl fmt::Debug for SteamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SteamId")
            .field("xuid", &self.xuid)
            .field("universe", &self.universe)
            .field("instance", &self.instance)
            .field("account", &self.account)
            .finish()
    }
}
