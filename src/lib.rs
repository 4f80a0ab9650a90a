#![forbid(missing_docs)]
#![forbid(unsafe_code)]
#![warn(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

use bevy::prelude::{Reflect, Resource};

pub mod bobber_bar;
pub mod common_conditions;
pub mod errors;
pub mod nudge;
pub mod plugin;
pub mod session;
pub mod settings;
pub mod systems;

/// Everything you need to get started
pub mod prelude {
    pub use crate::bobber_bar::{BobberBarMenu, PLAYFIELD_HEIGHT};
    pub use crate::nudge::NudgeControl;
    pub use crate::plugin::{MouseFishingPlugin, MouseFishingSystem};
    pub use crate::session::FishingSession;
    pub use crate::settings::{BarHeightPercent, MouseFishingSettings};
    pub use crate::SaveLoaded;
}

/// Marker resource indicating that a save file is loaded and gameplay is active
///
/// Insert it once the player is in a loaded world and remove it on returning
/// to the title screen. While it is absent, no fishing session will begin and
/// no host state is touched; check it with the
/// [`resource_exists`](bevy::ecs::schedule::common_conditions::resource_exists)
/// run condition to gate your own systems the same way.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub struct SaveLoaded;
