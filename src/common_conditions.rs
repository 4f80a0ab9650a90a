//! Run conditions for fishing-control systems.

use crate::session::FishingSession;
use crate::settings::MouseFishingSettings;
use bevy::prelude::Res;

/// Run condition that is active while the control scheme is enabled in
/// [`MouseFishingSettings`].
pub fn mouse_fishing_enabled(settings: Res<MouseFishingSettings>) -> bool {
    settings.enabled
}

/// Run condition that is active while a [`FishingSession`] is in progress
///
/// Equivalent to `resource_exists::<FishingSession>`, exported so hosts can
/// gate their own systems on the session without naming the resource.
pub fn fishing_session_active(session: Option<Res<FishingSession>>) -> bool {
    session.is_some()
}
