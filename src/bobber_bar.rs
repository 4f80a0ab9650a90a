//! The bobber-bar minigame state that this plugin reads and overrides

use bevy::prelude::{Component, Reflect};

/// Fixed pixel height of the bobber bar's vertical play-field
///
/// The bar's top edge travels between pixel row 0 and
/// `PLAYFIELD_HEIGHT - bar_height`.
pub const PLAYFIELD_HEIGHT: i32 = 568;

/// The interactive state of an open bobber-bar minigame
///
/// The host game spawns an entity with this component when the minigame opens
/// and despawns it (or removes the component) when the minigame closes; the
/// [`MouseFishingPlugin`](crate::plugin::MouseFishingPlugin) treats the
/// component's lifetime as the session boundary.
///
/// Fields are private: the host's own simulation and this plugin both go
/// through the accessor methods, keeping the component usable as an opaque
/// handle to host-owned minigame state.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
pub struct BobberBarMenu {
    bar_height: i32,
    bar_position: f32,
    bar_speed: f32,
    bar_acceleration: f32,
}

impl BobberBarMenu {
    /// Creates a menu whose bar starts at rest at the top of the play-field.
    #[must_use]
    pub fn new(bar_height: i32) -> Self {
        Self {
            bar_height,
            bar_position: 0.0,
            bar_speed: 0.0,
            bar_acceleration: 0.0,
        }
    }

    /// Height of the bar's interactive region, in pixels.
    #[inline]
    #[must_use]
    pub fn bar_height(&self) -> i32 {
        self.bar_height
    }

    /// Sets the height of the bar's interactive region, in pixels.
    #[inline]
    pub fn set_bar_height(&mut self, bar_height: i32) {
        self.bar_height = bar_height;
    }

    /// Vertical position of the bar's top edge, in pixels from the top of the play-field.
    #[inline]
    #[must_use]
    pub fn bar_position(&self) -> f32 {
        self.bar_position
    }

    /// Sets the vertical position of the bar's top edge.
    #[inline]
    pub fn set_bar_position(&mut self, bar_position: f32) {
        self.bar_position = bar_position;
    }

    /// Current vertical speed of the bar, in pixels per tick.
    #[inline]
    #[must_use]
    pub fn bar_speed(&self) -> f32 {
        self.bar_speed
    }

    /// Sets the bar's vertical speed.
    #[inline]
    pub fn set_bar_speed(&mut self, bar_speed: f32) {
        self.bar_speed = bar_speed;
    }

    /// Current vertical acceleration of the bar, in pixels per tick squared.
    #[inline]
    #[must_use]
    pub fn bar_acceleration(&self) -> f32 {
        self.bar_acceleration
    }

    /// Sets the bar's vertical acceleration.
    #[inline]
    pub fn set_bar_acceleration(&mut self, bar_acceleration: f32) {
        self.bar_acceleration = bar_acceleration;
    }

    /// Brings the bar to a dead stop by zeroing both speed and acceleration.
    #[inline]
    pub fn freeze_motion(&mut self) {
        self.bar_speed = 0.0;
        self.bar_acceleration = 0.0;
    }
}

impl Default for BobberBarMenu {
    fn default() -> Self {
        Self::new(PLAYFIELD_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_bar_starts_at_rest() {
        let menu = BobberBarMenu::new(200);
        assert_eq!(menu.bar_height(), 200);
        assert_eq!(menu.bar_position(), 0.0);
        assert_eq!(menu.bar_speed(), 0.0);
        assert_eq!(menu.bar_acceleration(), 0.0);
    }

    #[test]
    fn freeze_motion_zeroes_speed_and_acceleration() {
        let mut menu = BobberBarMenu::new(200);
        menu.set_bar_speed(3.5);
        menu.set_bar_acceleration(-0.5);
        menu.freeze_motion();
        assert_eq!(menu.bar_speed(), 0.0);
        assert_eq!(menu.bar_acceleration(), 0.0);
    }

    #[test]
    fn default_bar_fills_the_playfield() {
        assert_eq!(BobberBarMenu::default().bar_height(), PLAYFIELD_HEIGHT);
    }
}
