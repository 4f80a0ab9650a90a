//! Player-facing configuration for the mouse fishing control scheme

use bevy::prelude::{Reflect, Resource};
use serde::{Deserialize, Serialize};

use crate::errors::BarHeightPercentOutOfRange;

/// Settings that control whether and how the plugin takes over the bobber bar
///
/// Initialized with defaults by the [`MouseFishingPlugin`](crate::plugin::MouseFishingPlugin);
/// mutation (through a settings screen) and persistence (through a config file)
/// are owned by the host game, which is why this type derives [`Serialize`] and
/// [`Deserialize`].
///
/// Toggling [`enabled`](Self::enabled) takes effect on the next frame: no new
/// sessions begin while disabled, and an in-progress session stops mutating
/// cursor or menu state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Reflect)]
pub struct MouseFishingSettings {
    /// Master switch for the entire control scheme.
    pub enabled: bool,
    /// How tall the bobber bar should be, as a percentage of its natural height.
    pub bar_height_percent: BarHeightPercent,
}

impl Default for MouseFishingSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            bar_height_percent: BarHeightPercent::default(),
        }
    }
}

/// A bar height percentage, restricted to the supported `30..=100` range
///
/// The bar can be shrunk for a harder minigame, but never below 30% of its
/// natural height and never above its natural height. Values outside the range
/// are rejected on construction and on deserialization.
///
/// # Example
/// ```rust
/// use bevy_mouse_fishing::settings::BarHeightPercent;
///
/// assert_eq!(BarHeightPercent::new(75).unwrap().scale(200), 150);
/// assert!(BarHeightPercent::new(20).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Reflect)]
#[serde(try_from = "u32", into = "u32")]
pub struct BarHeightPercent(u32);

impl BarHeightPercent {
    /// The smallest supported percentage.
    pub const MIN: Self = Self(30);

    /// The largest supported percentage (the bar's natural height).
    pub const MAX: Self = Self(100);

    /// Creates a new [`BarHeightPercent`], rejecting values outside `30..=100`.
    pub fn new(percent: u32) -> Result<Self, BarHeightPercentOutOfRange> {
        if (Self::MIN.0..=Self::MAX.0).contains(&percent) {
            Ok(Self(percent))
        } else {
            Err(BarHeightPercentOutOfRange(percent))
        }
    }

    /// Returns the percentage as a plain integer.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Scales a raw bar height by this percentage, flooring to whole pixels
    ///
    /// Raw heights are never negative, so truncating integer division is a
    /// floor.
    #[inline]
    #[must_use]
    pub const fn scale(self, raw_height: i32) -> i32 {
        raw_height * self.0 as i32 / 100
    }
}

// The default is 75%, not MAX, so this cannot be derived
impl Default for BarHeightPercent {
    fn default() -> Self {
        Self(75)
    }
}

impl TryFrom<u32> for BarHeightPercent {
    type Error = BarHeightPercentOutOfRange;

    fn try_from(percent: u32) -> Result<Self, Self::Error> {
        Self::new(percent)
    }
}

impl From<BarHeightPercent> for u32 {
    fn from(percent: BarHeightPercent) -> Self {
        percent.get()
    }
}
