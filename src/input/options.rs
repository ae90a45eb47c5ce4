//! Decoder and reader configuration.

/// How SGR decimal fields that fail to parse are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NumberPolicy {
    /// Unparsable numbers decode as zero.
    #[default]
    Lenient,
    /// Unparsable numbers make the fragment malformed.
    Strict,
}

/// What to do with coordinates that normalize below zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CoordinatePolicy {
    /// Return them as reported.
    #[default]
    PassThrough,
    /// Clamp to zero.
    Clamp,
    /// Fail with [`DecodeError::NegativeCoordinate`](crate::DecodeError::NegativeCoordinate).
    Reject,
}

impl CoordinatePolicy {
    pub(crate) fn apply(self, x: i32, y: i32) -> Option<(i32, i32)> {
        match self {
            Self::PassThrough => Some((x, y)),
            Self::Clamp => Some((x.max(0), y.max(0))),
            Self::Reject if x < 0 || y < 0 => None,
            Self::Reject => Some((x, y)),
        }
    }
}

/// Options for [`Decoder`](super::Decoder).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecoderOptions {
    /// SGR numeric field handling.
    pub numbers: NumberPolicy,
    /// Negative coordinate handling.
    pub coordinates: CoordinatePolicy,
}

impl DecoderOptions {
    /// Reject anything that does not parse cleanly.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            numbers: NumberPolicy::Strict,
            coordinates: CoordinatePolicy::Reject,
        }
    }

    /// Set the numeric field policy.
    #[must_use]
    pub fn with_numbers(mut self, numbers: NumberPolicy) -> Self {
        self.numbers = numbers;
        self
    }

    /// Set the coordinate policy.
    #[must_use]
    pub fn with_coordinates(mut self, coordinates: CoordinatePolicy) -> Self {
        self.coordinates = coordinates;
        self
    }
}

/// Default read size for [`InputReader`](super::InputReader).
pub const DEFAULT_CHUNK_SIZE: usize = 256;

/// Options for [`InputReader`](super::InputReader).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Maximum bytes read per chunk.
    pub chunk_size: usize,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}
