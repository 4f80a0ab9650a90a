//! The systems that power the [`MouseFishingPlugin`](crate::plugin::MouseFishingPlugin).

use bevy::ecs::prelude::*;
use bevy::input::gamepad::{GamepadAxis, GamepadButton, Gamepads};
use bevy::input::{Axis, ButtonInput};
use bevy::log::{debug, warn};
use bevy::math::Vec2;
use bevy::window::{CursorMoved, PrimaryWindow, Window};

use crate::bobber_bar::{BobberBarMenu, PLAYFIELD_HEIGHT};
use crate::nudge::NudgeControl;
use crate::session::FishingSession;
use crate::settings::MouseFishingSettings;
use crate::SaveLoaded;

/// Starts a fishing session when a bobber-bar minigame opens
///
/// For the first newly-added [`BobberBarMenu`], this system:
/// 1. captures the cursor position to restore on menu-close,
/// 2. shrinks the menu's bar height by the configured percentage (a permanent
///    mutation of the menu's geometry for the session),
/// 3. parks the cursor at the top of the shrunken bar's travel range, and
/// 4. inserts a [`FishingSession`] commanding that same position.
///
/// This system runs every frame rather than behind a run condition, so each
/// menu-open edge is observed exactly once: a menu opened while the scheme is
/// disabled (or before a save is loaded) never gets a session, even if the
/// setting is flipped later.
pub fn begin_session(
    mut commands: Commands,
    mut opened: Query<(Entity, &mut BobberBarMenu), Added<BobberBarMenu>>,
    session: Option<Res<FishingSession>>,
    settings: Res<MouseFishingSettings>,
    save: Option<Res<SaveLoaded>>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let Some((menu_entity, mut menu)) = opened.iter_mut().next() else {
        return;
    };
    if !settings.enabled || save.is_none() || session.is_some() {
        return;
    }
    let Ok(mut window) = windows.get_single_mut() else {
        return;
    };

    let starting_cursor = window.cursor_position().unwrap_or_default();

    let scaled_height = settings.bar_height_percent.scale(menu.bar_height());
    menu.set_bar_height(scaled_height);

    let bar_top = (PLAYFIELD_HEIGHT - scaled_height) as f32;
    window.set_cursor_position(Some(Vec2::new(starting_cursor.x, bar_top)));

    commands.insert_resource(FishingSession::new(menu_entity, starting_cursor, bar_top));
    debug!(
        "fishing session started for {:?} with bar top {}",
        menu_entity, bar_top
    );
}

/// Ends the fishing session when its bobber-bar minigame closes
///
/// Restores the cursor to exactly where it was before the minigame opened and
/// removes the [`FishingSession`] resource. Teardown is deliberately not gated
/// on the `enabled` setting: the session must never outlive its menu, even
/// when the scheme is switched off mid-minigame.
pub fn end_session(
    mut commands: Commands,
    mut closed: RemovedComponents<BobberBarMenu>,
    session: Option<Res<FishingSession>>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let Some(session) = session else {
        closed.clear();
        return;
    };
    if closed.read().any(|entity| entity == session.menu()) {
        if let Ok(mut window) = windows.get_single_mut() {
            window.set_cursor_position(Some(session.starting_cursor()));
        }
        commands.remove_resource::<FishingSession>();
        debug!("fishing session ended");
    }
}

/// Rebuilds [`ButtonInput<NudgeControl>`] from the raw gamepad resources
///
/// Runs whether or not a session is active so that pressed/just-pressed edges
/// are already correct on the first frame of a session. Mirrors how the
/// engine's own input-collection systems maintain [`ButtonInput`] state: clear
/// the transient sets, then press or release on state changes only.
pub fn refresh_nudge_controls(
    buttons: Res<ButtonInput<GamepadButton>>,
    axes: Res<Axis<GamepadAxis>>,
    gamepads: Res<Gamepads>,
    mut nudges: ResMut<ButtonInput<NudgeControl>>,
) {
    nudges.bypass_change_detection().clear();
    for control in NudgeControl::variants() {
        let raw = control.raw_pressed(&buttons, &axes, &gamepads);
        if raw && !nudges.pressed(control) {
            nudges.press(control);
        } else if !raw && nudges.pressed(control) {
            nudges.release(control);
        }
    }
}

/// Applies just-pressed and held nudge controls to the commanded bar position
///
/// The just-pressed set and the held set are scanned independently and both
/// contribute, so the first frame of a press moves the bar by two steps (the
/// held set includes the just-pressed control) and every held frame after
/// that moves it by one. The commanded position is left unclamped.
pub fn apply_nudges(
    nudges: Res<ButtonInput<NudgeControl>>,
    mut session: ResMut<FishingSession>,
) {
    let mut offset = 0.0;
    for control in nudges.get_just_pressed() {
        offset += control.offset();
    }
    for control in nudges.get_pressed() {
        offset += control.offset();
    }
    if offset != 0.0 {
        session.nudge_by(offset);
    }
}

/// Maps cursor motion onto the bar and clamps the cursor to the active region
///
/// For each cursor move at height `y`:
/// - past the bar's travel range (`y > bar_top`), the cursor is put back at
///   the bar top, on the session's pinned cursor column;
/// - above the play-field (`y < 0`), the cursor is put back at row zero;
/// - in range, the cursor is left alone.
///
/// The menu's bar position and the session's commanded position always receive
/// the raw `y`; only the cursor itself is clamped.
pub fn track_cursor(
    mut moves: EventReader<CursorMoved>,
    settings: Res<MouseFishingSettings>,
    save: Option<Res<SaveLoaded>>,
    session: Option<ResMut<FishingSession>>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    mut menus: Query<&mut BobberBarMenu>,
) {
    // Drained unconditionally: cursor motion while not ready is a handled
    // no-op, not motion deferred to the next ready frame.
    let moves: Vec<CursorMoved> = moves.read().cloned().collect();
    if moves.is_empty() || !settings.enabled || save.is_none() {
        return;
    }
    let Some(mut session) = session else {
        return;
    };
    let Ok(mut window) = windows.get_single_mut() else {
        return;
    };
    let Ok(mut menu) = menus.get_mut(session.menu()) else {
        warn!("fishing session points at a despawned bobber-bar menu");
        return;
    };

    for cursor_move in &moves {
        let y = cursor_move.position.y;
        if y > session.bar_top() {
            window.set_cursor_position(Some(Vec2::new(
                session.starting_cursor().x,
                session.bar_top(),
            )));
        } else if y < 0.0 {
            window.set_cursor_position(Some(Vec2::new(session.starting_cursor().x, 0.0)));
        }
        // The bar tracks the raw cursor height; only the cursor is clamped.
        menu.set_bar_position(y);
        session.command_bar_position(y);
    }
}

/// Reasserts the commanded bar position and cancels the bar's own motion
///
/// Runs every frame of an active session, in [`PreUpdate`](bevy::app::PreUpdate)
/// ahead of the host's simulation, so the bar starts each frame at a dead stop
/// on the commanded position and the host's gravity never accumulates.
pub fn override_bar_physics(
    session: Res<FishingSession>,
    mut menus: Query<&mut BobberBarMenu>,
) {
    let Ok(mut menu) = menus.get_mut(session.menu()) else {
        warn!("fishing session points at a despawned bobber-bar menu");
        return;
    };
    menu.freeze_motion();
    menu.set_bar_position(session.last_commanded_bar_position());
}
