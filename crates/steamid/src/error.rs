use crate::Format;

/// A result type defaulting to the crate [`enum@Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All possible errors that `steamid` can produce.
///
/// Every fallible conversion reports one of two kinds:
///
/// - [`Error::MalformedInput`]: the input was empty, did not match the
///   grammar of its format, or carried a raw number outside the range the
///   format allows.
/// - [`Error::InvalidState`]: the input was well formed, but the identifier
///   it describes (or the value produced from it) failed a semantic check,
///   such as the validity predicate of [`crate::SteamId::is_valid`].
///
/// Errors are values; no conversion panics on bad input.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The input could not be parsed as the requested format.
    #[error("malformed {format} input: {reason}")]
    MalformedInput {
        /// The format being decoded or encoded.
        format: Format,
        /// Short description of what was wrong.
        reason: &'static str,
    },

    /// The input parsed, but the resulting identifier is not valid.
    #[error("invalid {format} state")]
    InvalidState {
        /// The format being decoded or encoded.
        format: Format,
    },
}

impl Error {
    pub(crate) const fn malformed(format: Format, reason: &'static str) -> Self {
        Self::MalformedInput { format, reason }
    }

    pub(crate) const fn invalid(format: Format) -> Self {
        Self::InvalidState { format }
    }

    /// The format the failing operation was working with.
    pub const fn format(&self) -> Format {
        match self {
            Self::MalformedInput { format, .. } | Self::InvalidState { format } => *format,
        }
    }

    /// Returns true if the input itself was rejected.
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }

    /// Returns true if the input parsed but failed validation.
    pub const fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }
}
