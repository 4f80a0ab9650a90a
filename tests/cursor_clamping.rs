use bevy::input::InputPlugin;
use bevy::prelude::*;
use bevy::window::{CursorMoved, PrimaryWindow, WindowPlugin};
use bevy_mouse_fishing::prelude::*;

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(WindowPlugin::default())
        .add_plugins(InputPlugin)
        .add_plugins(MouseFishingPlugin)
        .insert_resource(SaveLoaded);
    app
}

fn primary_window(app: &mut App) -> Entity {
    let mut windows = app
        .world_mut()
        .query_filtered::<Entity, With<PrimaryWindow>>();
    windows.single(app.world())
}

fn set_cursor(app: &mut App, position: Vec2) {
    let window = primary_window(app);
    let mut window = app.world_mut().get_mut::<Window>(window).unwrap();
    window.set_cursor_position(Some(position));
}

fn cursor_position(app: &mut App) -> Option<Vec2> {
    let window = primary_window(app);
    app.world().get::<Window>(window).unwrap().cursor_position()
}

fn move_cursor(app: &mut App, position: Vec2) {
    set_cursor(app, position);
    let window = primary_window(app);
    app.world_mut().send_event(CursorMoved {
        window,
        position,
        delta: None,
    });
}

/// Opens a 200-pixel menu with the cursor at (320, 240): scaled height 150,
/// bar top 418.
fn open_session(app: &mut App) -> Entity {
    set_cursor(app, Vec2::new(320.0, 240.0));
    let menu = app.world_mut().spawn(BobberBarMenu::new(200)).id();
    app.update();
    menu
}

#[test]
fn in_range_motion_drives_the_bar_and_leaves_the_cursor_alone() {
    let mut app = test_app();
    let menu = open_session(&mut app);

    move_cursor(&mut app, Vec2::new(500.0, 100.0));
    app.update();

    assert_eq!(cursor_position(&mut app), Some(Vec2::new(500.0, 100.0)));
    let menu_state = app.world().get::<BobberBarMenu>(menu).unwrap();
    assert_eq!(menu_state.bar_position(), 100.0);
    let session = app.world().resource::<FishingSession>();
    assert_eq!(session.last_commanded_bar_position(), 100.0);
}

#[test]
fn motion_past_the_bar_bottom_clamps_the_cursor_but_not_the_bar() {
    let mut app = test_app();
    let menu = open_session(&mut app);

    move_cursor(&mut app, Vec2::new(500.0, 450.0));
    app.update();

    // The cursor snaps back to the bar top on the pinned column, while the
    // bar itself receives the raw height.
    assert_eq!(cursor_position(&mut app), Some(Vec2::new(320.0, 418.0)));
    let menu_state = app.world().get::<BobberBarMenu>(menu).unwrap();
    assert_eq!(menu_state.bar_position(), 450.0);
    let session = app.world().resource::<FishingSession>();
    assert_eq!(session.last_commanded_bar_position(), 450.0);
}

#[test]
fn motion_above_the_playfield_clamps_to_row_zero() {
    let mut app = test_app();
    let menu = open_session(&mut app);

    move_cursor(&mut app, Vec2::new(500.0, -25.0));
    app.update();

    assert_eq!(cursor_position(&mut app), Some(Vec2::new(320.0, 0.0)));
    let menu_state = app.world().get::<BobberBarMenu>(menu).unwrap();
    assert_eq!(menu_state.bar_position(), -25.0);
}

#[test]
fn the_bar_top_itself_is_in_range() {
    let mut app = test_app();
    let _menu = open_session(&mut app);

    move_cursor(&mut app, Vec2::new(320.0, 418.0));
    app.update();

    // y == bar_top is not "past" the region, so the cursor stays put
    assert_eq!(cursor_position(&mut app), Some(Vec2::new(320.0, 418.0)));
}
