use derive_more::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors reported by the rendering core
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Character value has no entry in the glyph font
    #[display("no glyph for character {_0}")]
    UnknownGlyph(#[error(not(source))] u8),

    /// Digit place is not part of the layout
    #[display("digit place {_0} is out of range")]
    DigitOutOfRange(#[error(not(source))] u8),

    /// Segment index is not in 0..7
    #[display("segment {_0} is out of range")]
    SegmentOutOfRange(#[error(not(source))] u8),

    /// Pixel buffer size does not match the layout
    #[display("layout has {expected} pixels, buffer has {actual}")]
    LayoutMismatch { expected: u16, actual: usize },

    /// Persisted settings are not valid JSON
    #[display("settings could not be parsed")]
    SettingsParse,

    /// Settings do not fit the output buffer
    #[display("settings could not be serialized")]
    SettingsSerialize,

    /// Settings storage is unavailable
    #[display("settings storage failed")]
    Storage,
}
