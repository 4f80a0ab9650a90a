//! Per-minigame session state held while a bobber-bar menu is open

use bevy::math::Vec2;
use bevy::prelude::{Entity, Reflect, Resource};

/// State for the fishing session currently in progress
///
/// This resource exists if and only if a [`BobberBarMenu`](crate::bobber_bar::BobberBarMenu)
/// is open and a session was started for it: it is inserted exactly once per
/// menu-open by [`begin_session`](crate::systems::begin_session) and removed
/// exactly once per menu-close by [`end_session`](crate::systems::end_session).
/// Its presence is the "session active" half of the readiness checks.
///
/// The menu is referenced by [`Entity`] handle rather than borrowed: the host
/// owns the menu's storage, and every access goes back through a query.
#[derive(Resource, Debug, Clone, PartialEq, Reflect)]
pub struct FishingSession {
    menu: Entity,
    starting_cursor: Vec2,
    bar_top: f32,
    last_commanded: f32,
}

impl FishingSession {
    /// Creates a session for the given menu entity
    ///
    /// The commanded bar position starts at `bar_top`, where the cursor is
    /// parked when the minigame opens.
    #[must_use]
    pub fn new(menu: Entity, starting_cursor: Vec2, bar_top: f32) -> Self {
        Self {
            menu,
            starting_cursor,
            bar_top,
            last_commanded: bar_top,
        }
    }

    /// Handle to the host-owned menu entity this session controls.
    #[inline]
    #[must_use]
    pub fn menu(&self) -> Entity {
        self.menu
    }

    /// Where the cursor was when the minigame opened
    ///
    /// Restored exactly on menu-close; its x-coordinate is also the pinned
    /// cursor column for every in-session reposition.
    #[inline]
    #[must_use]
    pub fn starting_cursor(&self) -> Vec2 {
        self.starting_cursor
    }

    /// The lowest pixel row the bar's top edge (and the cursor) may occupy
    ///
    /// Computed once at session start as the play-field height minus the
    /// scaled bar height, and held fixed for the whole session.
    #[inline]
    #[must_use]
    pub fn bar_top(&self) -> f32 {
        self.bar_top
    }

    /// The most recently commanded bar position
    ///
    /// Reasserted onto the menu every frame by
    /// [`override_bar_physics`](crate::systems::override_bar_physics).
    #[inline]
    #[must_use]
    pub fn last_commanded_bar_position(&self) -> f32 {
        self.last_commanded
    }

    /// Records `position` as the authoritative bar position.
    #[inline]
    pub fn command_bar_position(&mut self, position: f32) {
        self.last_commanded = position;
    }

    /// Shifts the commanded bar position by `offset` pixels
    ///
    /// No clamping is applied; out-of-range values stand until the next
    /// cursor move replaces them.
    #[inline]
    pub fn nudge_by(&mut self, offset: f32) {
        self.last_commanded += offset;
    }
}
