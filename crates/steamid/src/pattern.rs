//! Regular expressions that gate every decoder.
//!
//! A decoder first checks its input against one of these patterns and only
//! then attempts semantic decoding. The patterns are compiled once, on first
//! use, and shared read-only afterwards.

use crate::codec::{FRIEND_CODE_ALPHABET, INVITE_CODE_ALPHABET};
use crate::{AccountType, Universe};
use regex::Regex;
use std::sync::LazyLock;

/// Capture group names.
pub(crate) mod group {
    pub const AUTH: &str = "auth";
    pub const UNIVERSE: &str = "universe";
    pub const ID: &str = "id";
    pub const ACCOUNT: &str = "account";
    pub const INSTANCE: &str = "instance";
}

fn compile(pattern: &str) -> Regex {
    // Every pattern is built from constants in this module.
    Regex::new(pattern).expect("static pattern must compile")
}

fn universe_range() -> String {
    format!("{}-{}", Universe::Invalid.value(), Universe::MAX.value())
}

/// `STEAM_<universe>:<auth>:<id>`
pub(crate) static STEAM2: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"^STEAM_(?P<{}>[{}]):(?P<{}>[0-1]):(?P<{}>[0-9]+)$",
        group::UNIVERSE,
        universe_range(),
        group::AUTH,
        group::ID,
    ))
});

/// `[<letter>:<universe>:<id>]` with an optional `:<instance>` suffix.
pub(crate) static STEAM3: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"^\[(?P<{}>[{}]):(?P<{}>[{}]):(?P<{}>[0-9]+)(?::(?P<{}>[0-9]+))?\]$",
        group::ACCOUNT,
        AccountType::CHAR_SET,
        group::UNIVERSE,
        universe_range(),
        group::ID,
        group::INSTANCE,
    ))
});

/// 17 decimal digits.
pub(crate) static STEAM64: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]{17}$"));

pub(crate) static VANITY_NAME: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[a-zA-Z0-9_-]{2,32}$"));

/// Invite-code symbols with at most one delimiter strictly inside.
pub(crate) static INVITE_CODE: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        "^[{alphabet}]+(?:-[{alphabet}]+)?$",
        alphabet = INVITE_CODE_ALPHABET
    ))
});

/// Five friend-code symbols, a delimiter, then four more.
pub(crate) static FRIEND_CODE: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        "^[{alphabet}]{{5}}-[{alphabet}]{{4}}$",
        alphabet = FRIEND_CODE_ALPHABET
    ))
});

/// `https://steamcommunity.com/profiles/<id>` and friends.
pub(crate) static PROFILE_URL: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"^https?://(?:www\.)?(?:my\.steamchina|steamcommunity)\.com/(?:profiles|gid)/(?P<{}>.+?)/?$",
        group::ID,
    ))
});

/// `https://steamcommunity.com/user/<code>` or `https://s.team/p/<code>`.
pub(crate) static USER_URL: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"^https?://(?:www\.)?(?:(?:my\.steamchina|steamcommunity)\.com/user|s\.team/p)/(?P<{}>[\w-]+)/?$",
        group::ID,
    ))
});

/// Returns true if `name` could be a custom profile name
/// (`https://steamcommunity.com/id/<name>`).
///
/// Vanity names cannot be resolved offline; this only checks the syntax.
pub fn is_vanity_name(name: &str) -> bool {
    VANITY_NAME.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steam2_grammar() {
        assert!(STEAM2.is_match("STEAM_1:1:0"));
        assert!(STEAM2.is_match("STEAM_0:0:2147483647"));
        assert!(!STEAM2.is_match("STEAM_6:0:1"));
        assert!(!STEAM2.is_match("STEAM_1:2:1"));
        assert!(!STEAM2.is_match("steam_1:1:0"));
        assert!(!STEAM2.is_match("STEAM_1:1:"));
    }

    #[test]
    fn steam3_grammar() {
        let caps = STEAM3.captures("[A:1:2:3]").unwrap();
        assert_eq!(&caps[group::ACCOUNT], "A");
        assert_eq!(&caps[group::UNIVERSE], "1");
        assert_eq!(&caps[group::ID], "2");
        assert_eq!(&caps[group::INSTANCE], "3");

        let caps = STEAM3.captures("[U:1:1]").unwrap();
        assert!(caps.name(group::INSTANCE).is_none());

        assert!(STEAM3.is_match("[c:1:5]"));
        assert!(STEAM3.is_match("[L:1:5]"));
        assert!(!STEAM3.is_match("[X:1:5]"));
        assert!(!STEAM3.is_match("[UU:1:5]"));
        assert!(!STEAM3.is_match("U:1:5"));
    }

    #[test]
    fn steam64_grammar() {
        assert!(STEAM64.is_match("76561197960265729"));
        assert!(!STEAM64.is_match("7656119796026572"));
        assert!(!STEAM64.is_match("765611979602657290"));
        assert!(!STEAM64.is_match("+6561197960265729"));
    }

    #[test]
    fn invite_grammar() {
        assert!(INVITE_CODE.is_match("c"));
        assert!(INVITE_CODE.is_match("gqkj-gkbr"));
        assert!(INVITE_CODE.is_match("gqkjgkbr"));
        assert!(!INVITE_CODE.is_match("-c"));
        assert!(!INVITE_CODE.is_match("c-"));
        assert!(!INVITE_CODE.is_match("b-c-d"));
        assert!(!INVITE_CODE.is_match("a"));
        assert!(!INVITE_CODE.is_match(""));
    }

    #[test]
    fn friend_grammar() {
        assert!(FRIEND_CODE.is_match("AJJJS-ABAA"));
        assert!(FRIEND_CODE.is_match("S9ZZR-999P"));
        assert!(!FRIEND_CODE.is_match("AJJJSABAA"));
        assert!(!FRIEND_CODE.is_match("AJJJ-SABAA"));
        assert!(!FRIEND_CODE.is_match("AJJJS-ABA0"));
        assert!(!FRIEND_CODE.is_match("ajjjs-abaa"));
    }

    #[test]
    fn profile_url_captures_id() {
        let caps = PROFILE_URL
            .captures("https://steamcommunity.com/profiles/76561197960265729/")
            .unwrap();
        assert_eq!(&caps[group::ID], "76561197960265729");

        let caps = PROFILE_URL
            .captures("http://www.steamcommunity.com/profiles/[U:1:1]")
            .unwrap();
        assert_eq!(&caps[group::ID], "[U:1:1]");

        assert!(PROFILE_URL.is_match("https://my.steamchina.com/gid/1"));
        assert!(!PROFILE_URL.is_match("https://steamcommunity.com/id/gabe"));
        assert!(!PROFILE_URL.is_match("https://wwwsteamcommunity.com/profiles/1"));
    }

    #[test]
    fn user_url_captures_code() {
        let caps = USER_URL.captures("https://s.team/p/gqkj-gkbr").unwrap();
        assert_eq!(&caps[group::ID], "gqkj-gkbr");

        let caps = USER_URL
            .captures("https://steamcommunity.com/user/c/")
            .unwrap();
        assert_eq!(&caps[group::ID], "c");

        assert!(!USER_URL.is_match("https://s.team/user/c"));
    }

    #[test]
    fn vanity_names() {
        assert!(is_vanity_name("gabelogannewell"));
        assert!(is_vanity_name("a_b-c"));
        assert!(!is_vanity_name("a"));
        assert!(!is_vanity_name("has space"));
        assert!(!is_vanity_name(&"x".repeat(33)));
    }
}
