//! Contains the main plugin exported by this crate.

use bevy::app::{App, Plugin, PreUpdate};
use bevy::ecs::prelude::*;
use bevy::input::{ButtonInput, InputSystem};

use crate::bobber_bar::BobberBarMenu;
use crate::common_conditions::mouse_fishing_enabled;
use crate::nudge::NudgeControl;
use crate::session::FishingSession;
use crate::settings::{BarHeightPercent, MouseFishingSettings};
use crate::SaveLoaded;

/// A [`Plugin`] that maps cursor motion onto an open bobber-bar minigame,
/// overriding the host's own bar physics for as long as the minigame is open
///
/// The host contributes three things: a [`BobberBarMenu`] component spawned
/// while the minigame is open, the [`SaveLoaded`] marker resource while
/// gameplay is active, and its own bar simulation running no earlier than
/// [`Update`](bevy::app::Update). Everything else (session lifecycle, cursor
/// clamping, gamepad nudges, the per-frame physics override) is handled here.
///
/// ## Systems
///
/// All systems run during [`PreUpdate`], after [`InputSystem`], in the order
/// given by [`MouseFishingSystem`]:
///
/// - [`end_session`](crate::systems::end_session) and
///   [`begin_session`](crate::systems::begin_session) watch the
///   [`BobberBarMenu`] lifetime and maintain the [`FishingSession`] resource
///   - labeled [`MouseFishingSystem::Session`]
/// - [`refresh_nudge_controls`](crate::systems::refresh_nudge_controls) and
///   [`apply_nudges`](crate::systems::apply_nudges) turn d-pad and stick input
///   into fixed-step bar movement
///   - labeled [`MouseFishingSystem::Nudge`]
/// - [`track_cursor`](crate::systems::track_cursor) maps cursor motion onto
///   the bar and clamps the cursor to the minigame's active region
///   - labeled [`MouseFishingSystem::Cursor`]
/// - [`override_bar_physics`](crate::systems::override_bar_physics) reasserts
///   the commanded bar position and zeroes the bar's speed and acceleration
///   - labeled [`MouseFishingSystem::PhysicsOverride`]
///
/// If the host runs bobber-bar systems during [`PreUpdate`], it must order
/// them after [`MouseFishingSystem::PhysicsOverride`] or behavior will be very
/// erratic.
pub struct MouseFishingPlugin;

impl Plugin for MouseFishingPlugin {
    fn build(&self, app: &mut App) {
        use crate::systems::*;

        app.init_resource::<MouseFishingSettings>()
            .init_resource::<ButtonInput<NudgeControl>>()
            .register_type::<MouseFishingSettings>()
            .register_type::<BarHeightPercent>()
            .register_type::<BobberBarMenu>()
            .register_type::<FishingSession>()
            .register_type::<SaveLoaded>()
            .configure_sets(
                PreUpdate,
                (
                    MouseFishingSystem::Session,
                    MouseFishingSystem::Nudge,
                    MouseFishingSystem::Cursor,
                    MouseFishingSystem::PhysicsOverride,
                )
                    .chain()
                    .after(InputSystem),
            )
            .add_systems(
                PreUpdate,
                (end_session, begin_session)
                    .chain()
                    .in_set(MouseFishingSystem::Session),
            )
            .add_systems(
                PreUpdate,
                (
                    refresh_nudge_controls,
                    apply_nudges.run_if(
                        mouse_fishing_enabled
                            .and_then(resource_exists::<SaveLoaded>)
                            .and_then(resource_exists::<FishingSession>),
                    ),
                )
                    .chain()
                    .in_set(MouseFishingSystem::Nudge),
            )
            .add_systems(PreUpdate, track_cursor.in_set(MouseFishingSystem::Cursor))
            .add_systems(
                PreUpdate,
                override_bar_physics
                    .run_if(
                        mouse_fishing_enabled
                            .and_then(resource_exists::<SaveLoaded>)
                            .and_then(resource_exists::<FishingSession>),
                    )
                    .in_set(MouseFishingSystem::PhysicsOverride),
            );
    }
}

/// [`SystemSet`]s for the [`crate::systems`] used by this crate
///
/// `Session` must occur before the other sets so that the same frame that
/// opens a menu already clamps, nudges, and overrides against the new session.
#[derive(SystemSet, Clone, Copy, Hash, Debug, PartialEq, Eq)]
pub enum MouseFishingSystem {
    /// Watches [`BobberBarMenu`] add/remove edges and maintains the
    /// [`FishingSession`] resource
    Session,
    /// Collects gamepad nudge input and applies it to the commanded bar
    /// position
    Nudge,
    /// Maps cursor motion onto the bar and clamps the cursor
    Cursor,
    /// Reasserts the commanded bar position over the host's physics
    PhysicsOverride,
}
