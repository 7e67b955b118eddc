//! # steamid
//!
//! Lossless conversion of Steam account identifiers between the packed
//! SteamID64 integer and every human-facing notation Valve uses:
//!
//! - `Steam64`: `76561197960265729`
//! - `Steam2`: `STEAM_1:1:0`
//! - `Steam3`: `[U:1:1]`
//! - invite codes: `c`, `gqkj-gkbr`
//! - CS:GO friend codes: `AJJJS-ABAA`
//! - community URLs: `https://steamcommunity.com/profiles/76561197960265729`
//!
//! ```
//! use steamid::SteamId;
//!
//! let id = SteamId::from_steam2("STEAM_1:1:0").unwrap();
//! assert_eq!(id.to_steam64().unwrap(), 76561197960265729);
//! assert_eq!(id.to_steam3().unwrap(), "[U:1:1]");
//! assert_eq!(id.to_friend_code().unwrap(), "AJJJS-ABAA");
//! assert_eq!(id.to_invite_code().unwrap(), "c");
//! ```
//!
//! All conversions are pure: no I/O, no shared mutable state. The regular
//! expressions used to validate input are compiled once on first use.

mod bits;
mod codec;
mod error;
mod format;
mod id;
mod pattern;
#[cfg(feature = "serde")]
mod serde;
mod types;

pub use crate::bits::*;
pub use crate::codec::*;
pub use crate::error::*;
pub use crate::format::*;
pub use crate::id::*;
pub use crate::pattern::is_vanity_name;
#[cfg(feature = "serde")]
pub use crate::serde::*;
pub use crate::types::*;
