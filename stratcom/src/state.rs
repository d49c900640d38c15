//! The decoded input state of the device.

use crate::{
    axis::{Axis, RawAxis},
    button::{BUTTON_MASK, Button},
};

/// Represents the position of the three-way slider.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SliderState {
    /// The position is not known yet.
    ///
    /// No input report decodes to this value. It is only used before the first
    /// report was received.
    #[default]
    Unknown,

    /// The slider is set to the position marked with one circle.
    Position1,

    /// The slider is set to the position marked with two circles.
    Position2,

    /// The slider is set to the position marked with three circles.
    Position3,
}

/// Represents a snapshot of all inputs of the device.
///
/// A state is usually obtained by decoding an input report using
/// [`crate::report::decode_input_report`]. The [`Default`] state has all
/// buttons released, all axes centered and an [`SliderState::Unknown`]
/// slider.
///
/// All values stay within what the device is able to report: axes are within
/// [`crate::axis::AXIS_MIN`]`..=`[`crate::axis::AXIS_MAX`] and the button word
/// never contains bits not belonging to a [`Button`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DeviceState {
    buttons: u16,
    slider: SliderState,
    axis_x: i16,
    axis_y: i16,
    axis_z: i16,
}

impl DeviceState {
    /// Returns a copy of the state with the button word replaced.
    ///
    /// Bits not belonging to a [`Button`] are discarded.
    #[must_use]
    pub const fn with_buttons(mut self, buttons: u16) -> Self {
        self.buttons = buttons & BUTTON_MASK;
        self
    }

    /// Returns a copy of the state with a single button pressed or released.
    #[must_use]
    pub const fn with_button(mut self, button: Button, pressed: bool) -> Self {
        if pressed {
            self.buttons |= button.mask();
        } else {
            self.buttons &= !button.mask();
        }
        self
    }

    /// Returns a copy of the state with the slider set to `slider`.
    #[must_use]
    pub const fn with_slider(mut self, slider: SliderState) -> Self {
        self.slider = slider;
        self
    }

    /// Returns a copy of the state with an axis set to `value`.
    ///
    /// Values outside of the range the device is able to report are clamped.
    #[must_use]
    pub const fn with_axis(mut self, axis: Axis, value: i16) -> Self {
        let value = RawAxis::from_signed(value).to_signed();
        match axis {
            Axis::X => self.axis_x = value,
            Axis::Y => self.axis_y = value,
            Axis::Z => self.axis_z = value,
        }
        self
    }

    /// The button word. Every [`Button`] occupies the bit of its
    /// discriminant; a set bit means the button is pressed.
    #[inline]
    pub const fn buttons(&self) -> u16 {
        self.buttons
    }

    /// The position of the slider.
    #[inline]
    pub const fn slider(&self) -> SliderState {
        self.slider
    }

    /// The value of a specific axis.
    pub const fn axis(&self, axis: Axis) -> i16 {
        match axis {
            Axis::X => self.axis_x,
            Axis::Y => self.axis_y,
            Axis::Z => self.axis_z,
        }
    }

    #[inline]
    pub const fn axis_x(&self) -> i16 {
        self.axis_x
    }

    #[inline]
    pub const fn axis_y(&self) -> i16 {
        self.axis_y
    }

    #[inline]
    pub const fn axis_z(&self) -> i16 {
        self.axis_z
    }

    /// Checks whether a specific button is pressed.
    #[inline]
    pub const fn is_pressed(&self, button: Button) -> bool {
        self.buttons & button.mask() != 0
    }

    /// Checks whether at least one button is pressed.
    pub fn any_pressed(&self) -> bool {
        Button::iter().any(|button| self.is_pressed(button))
    }

    /// Iterates over all pressed buttons in the canonical button order.
    pub fn pressed(&self) -> impl Iterator<Item = Button> + '_ {
        Button::iter().filter(move |&button| self.is_pressed(button))
    }
}
