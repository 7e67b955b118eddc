//! Encoders and decoders for every textual and numeric notation.
//!
//! Each notation is a unit type implementing [`Codec`]. Decoders first gate
//! their input through a regular expression, then decode it and check
//! the result with [`SteamId::is_valid`]. Encoders refuse invalid values
//! and re-check their own output against the same grammar.

mod any;
mod friend;
mod invite;
mod steam2;
mod steam3;
mod steam64;
mod url;

pub use any::*;
pub use friend::*;
pub use invite::*;
pub use steam2::*;
pub use steam3::*;
pub use steam64::*;
pub use url::*;

use crate::{Format, Result, SteamId};

/// A reversible notation for a [`SteamId`].
pub trait Codec {
    /// The encoded form.
    type Encoded;

    /// The format reported in errors.
    const FORMAT: Format;

    /// Renders a valid identifier.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::InvalidState`] if `id` is not valid or cannot be
    ///   expressed in this notation
    fn encode(id: &SteamId) -> Result<Self::Encoded>;

    /// Parses text in this notation. Leading and trailing whitespace is
    /// ignored.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::MalformedInput`] if the text does not match the
    ///   notation's grammar or range
    /// - [`crate::Error::InvalidState`] if it parses to an invalid identifier
    fn decode(input: &str) -> Result<SteamId>;
}

/// Trims `input`, rejecting it if nothing is left.
pub(crate) fn trimmed(input: &str, format: Format) -> Result<&str> {
    let input = input.trim();
    if input.is_empty() {
        Err(crate::Error::malformed(format, "empty input"))
    } else {
        Ok(input)
    }
}
