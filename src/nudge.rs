//! Gamepad controls that nudge the bobber bar in fixed steps

use bevy::input::gamepad::{
    GamepadAxis, GamepadAxisType, GamepadButton, GamepadButtonType, Gamepads,
};
use bevy::input::{Axis, ButtonInput};
use bevy::prelude::Reflect;

/// How far a single nudge moves the commanded bar position, in pixels.
pub const NUDGE_STEP: f32 = 5.0;

/// Stick deflection (on the `0.0..=1.0` scale) past which a stick direction
/// counts as pressed.
pub const STICK_PRESS_THRESHOLD: f32 = 0.5;

/// A gamepad control that nudges the bobber bar vertically
///
/// These are the fixed "up"/"down" inputs of the control scheme: the d-pad and
/// the vertical direction of either analog stick, each treated as a virtual
/// button. Their pressed/held state lives in a [`ButtonInput<NudgeControl>`]
/// resource rebuilt every frame by
/// [`refresh_nudge_controls`](crate::systems::refresh_nudge_controls), which is
/// what gives stick directions just-pressed edges like real buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum NudgeControl {
    /// Up on the d-pad of any connected gamepad.
    DPadUp,
    /// Down on the d-pad of any connected gamepad.
    DPadDown,
    /// Upward deflection of the left analog stick.
    LeftStickUp,
    /// Downward deflection of the left analog stick.
    LeftStickDown,
    /// Upward deflection of the right analog stick.
    RightStickUp,
    /// Downward deflection of the right analog stick.
    RightStickDown,
}

impl NudgeControl {
    /// All nudge controls, in a fixed order.
    #[must_use]
    pub const fn variants() -> [Self; 6] {
        [
            Self::DPadUp,
            Self::DPadDown,
            Self::LeftStickUp,
            Self::LeftStickDown,
            Self::RightStickUp,
            Self::RightStickDown,
        ]
    }

    /// The vertical offset one activation contributes, in pixels
    ///
    /// Pixel rows grow downward, so "up" controls are negative.
    #[inline]
    #[must_use]
    pub const fn offset(self) -> f32 {
        match self {
            Self::DPadUp | Self::LeftStickUp | Self::RightStickUp => -NUDGE_STEP,
            Self::DPadDown | Self::LeftStickDown | Self::RightStickDown => NUDGE_STEP,
        }
    }

    /// Whether this control is currently active on the raw gamepad state
    ///
    /// D-pad controls consult the button state of every gamepad at once; stick
    /// controls consult the matching axis of each registered gamepad against
    /// [`STICK_PRESS_THRESHOLD`].
    #[must_use]
    pub fn raw_pressed(
        self,
        buttons: &ButtonInput<GamepadButton>,
        axes: &Axis<GamepadAxis>,
        gamepads: &Gamepads,
    ) -> bool {
        match self {
            Self::DPadUp => button_pressed_anywhere(buttons, GamepadButtonType::DPadUp),
            Self::DPadDown => button_pressed_anywhere(buttons, GamepadButtonType::DPadDown),
            // Stick Y grows upward in gamepad space
            Self::LeftStickUp => stick_deflected(axes, gamepads, GamepadAxisType::LeftStickY, 1.0),
            Self::LeftStickDown => {
                stick_deflected(axes, gamepads, GamepadAxisType::LeftStickY, -1.0)
            }
            Self::RightStickUp => {
                stick_deflected(axes, gamepads, GamepadAxisType::RightStickY, 1.0)
            }
            Self::RightStickDown => {
                stick_deflected(axes, gamepads, GamepadAxisType::RightStickY, -1.0)
            }
        }
    }
}

fn button_pressed_anywhere(
    buttons: &ButtonInput<GamepadButton>,
    button_type: GamepadButtonType,
) -> bool {
    buttons
        .get_pressed()
        .any(|button| button.button_type == button_type)
}

fn stick_deflected(
    axes: &Axis<GamepadAxis>,
    gamepads: &Gamepads,
    axis_type: GamepadAxisType,
    sign: f32,
) -> bool {
    gamepads.iter().any(|gamepad| {
        let value = axes.get(GamepadAxis::new(gamepad, axis_type)).unwrap_or(0.0);
        value * sign > STICK_PRESS_THRESHOLD
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_controls_move_toward_row_zero() {
        assert_eq!(NudgeControl::DPadUp.offset(), -NUDGE_STEP);
        assert_eq!(NudgeControl::LeftStickUp.offset(), -NUDGE_STEP);
        assert_eq!(NudgeControl::RightStickUp.offset(), -NUDGE_STEP);
        assert_eq!(NudgeControl::DPadDown.offset(), NUDGE_STEP);
        assert_eq!(NudgeControl::LeftStickDown.offset(), NUDGE_STEP);
        assert_eq!(NudgeControl::RightStickDown.offset(), NUDGE_STEP);
    }

    #[test]
    fn every_control_is_enumerated_once() {
        let variants = NudgeControl::variants();
        for (index, control) in variants.iter().enumerate() {
            assert!(!variants[index + 1..].contains(control));
        }
    }
}
