//! Errors that may occur when validating fishing-control configuration

use derive_more::{Display, Error};

/// The supplied bar height percent was outside the supported range
///
/// This error is produced when constructing a
/// [`BarHeightPercent`](crate::settings::BarHeightPercent) from a raw integer,
/// including through deserialization of host-persisted settings.
///
/// In almost all cases, the correct way to handle this error is to fall back to
/// the default percent and let the player pick a new value in the settings UI.
#[derive(Debug, Clone, Copy, Error, Display, PartialEq, Eq)]
#[display(fmt = "bar height percent {} is outside the supported 30..=100 range", _0)]
pub struct BarHeightPercentOutOfRange(
    /// The rejected percent value.
    #[error(not(source))]
    pub u32,
);
