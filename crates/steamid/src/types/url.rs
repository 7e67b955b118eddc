use core::fmt;

/// Hosts serving Steam community pages.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Domain {
    Community,
    Invite,
    China,
}

impl Domain {
    pub const ALL: [Self; 3] = [Self::Community, Self::Invite, Self::China];

    pub const fn host(self) -> &'static str {
        match self {
            Self::Community => "steamcommunity.com",
            Self::Invite => "s.team",
            Self::China => "my.steamchina.com",
        }
    }

    pub fn from_host(host: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|domain| domain.host() == host)
    }
}

/// First path segment of a community URL.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Vanity names.
    Id,
    /// SteamID64 or Steam3.
    Profiles,
    /// Invite codes on the community domain.
    User,
    /// Invite codes on the short domain.
    P,
}

impl Endpoint {
    pub const ALL: [Self; 4] = [Self::Id, Self::Profiles, Self::User, Self::P];

    pub const fn path(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Profiles => "profiles",
            Self::User => "user",
            Self::P => "p",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|endpoint| endpoint.path() == path)
    }
}

/// URL templates for linking to a profile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SteamUrl {
    /// `https://steamcommunity.com/id/<vanity name>`
    Vanity,
    /// `https://steamcommunity.com/profiles/<id64 or id3>`
    Profile,
    /// `https://steamcommunity.com/user/<invite code>`
    User,
    /// `https://s.team/p/<invite code>`
    Invite,
    /// `https://my.steamchina.com/profiles/<id64>`
    China,
}

impl SteamUrl {
    pub const ALL: [Self; 5] = [
        Self::Vanity,
        Self::Profile,
        Self::User,
        Self::Invite,
        Self::China,
    ];

    pub const fn domain(self) -> Domain {
        match self {
            Self::Vanity | Self::Profile | Self::User => Domain::Community,
            Self::Invite => Domain::Invite,
            Self::China => Domain::China,
        }
    }

    pub const fn endpoint(self) -> Endpoint {
        match self {
            Self::Vanity => Endpoint::Id,
            Self::Profile | Self::China => Endpoint::Profiles,
            Self::User => Endpoint::User,
            Self::Invite => Endpoint::P,
        }
    }

    /// Appends `fragment` to this template.
    pub fn render(self, fragment: impl fmt::Display) -> String {
        format!("{self}{fragment}")
    }
}

impl fmt::Display for SteamUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (host, path) = (self.domain().host(), self.endpoint().path());
        write!(f, "https://{host}/{path}/")
    }
}
