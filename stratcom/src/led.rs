//! Keeps track of the LEDs built into some of the buttons.
//!
//! LEDs are set by sending a single feature report containing a 16-bit mask
//! (see [`crate::report::encode_led_feature_report`]). Every LED occupies two
//! adjacent bits of that mask: a low bit indicating a lit LED and the next
//! higher bit indicating a blinking LED. The two are mutually exclusive; the
//! device rejects reports having both bits set for the same LED.

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::{button::Button, report::FeatureReport};

/// Represents an LED, a group of LEDs or no LED at all.
///
/// The discriminant of every variant is the mask of its "on" bits. The
/// "blink" bits are the same mask shifted left by one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u16)]
pub enum Led {
    /// The LED of the button labeled `1`.
    One = 0x0001,

    /// The LED of the button labeled `2`.
    Two = 0x0004,

    /// The LED of the button labeled `3`.
    Three = 0x0010,

    /// The LED of the button labeled `4`.
    Four = 0x0040,

    /// The LED of the button labeled `5`.
    Five = 0x0100,

    /// The LED of the button labeled `6`.
    Six = 0x0400,

    /// The LED of the button labeled `REC`.
    Rec = 0x1000,

    /// Addresses all LEDs at once.
    All = 0x1555,

    /// Addresses no LED.
    None = 0x0000,
}

impl Led {
    /// All individually addressable LEDs, excluding [`Led::All`] and
    /// [`Led::None`].
    pub const INDIVIDUAL: [Led; 7] = [
        Led::One,
        Led::Two,
        Led::Three,
        Led::Four,
        Led::Five,
        Led::Six,
        Led::Rec,
    ];

    /// The mask of the "on" bits of this LED.
    #[inline]
    pub const fn on_mask(self) -> u16 {
        self as u16
    }

    /// The mask of the "blink" bits of this LED.
    #[inline]
    pub const fn blink_mask(self) -> u16 {
        (self as u16) << 1
    }

    /// Looks up the LED built into a button.
    ///
    /// Returns [`Led::None`] for buttons without an LED.
    pub const fn for_button(button: Button) -> Led {
        match button {
            Button::One => Led::One,
            Button::Two => Led::Two,
            Button::Three => Led::Three,
            Button::Four => Led::Four,
            Button::Five => Led::Five,
            Button::Six => Led::Six,
            Button::Rec => Led::Rec,
            _ => Led::None,
        }
    }
}

/// Represents the state of a single LED.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LedState {
    /// The LED is constantly lit.
    On,

    /// The LED is constantly dark.
    Off,

    /// The LED is blinking.
    ///
    /// The blink interval is shared by all LEDs, see
    /// [`crate::report::encode_blink_interval_report`].
    Blink,
}

/// Tracks the desired state of all LEDs of a device.
///
/// The tracker mirrors the mask sent to the device and remembers whether that
/// mask changed since it was last transmitted. It is created with all LEDs
/// switched off and marked dirty, so the first transmission synchronizes the
/// device with the tracker.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct LedStateTracker {
    mask: u16,
    dirty: bool,
}

impl Default for LedStateTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl LedStateTracker {
    pub const fn new() -> Self {
        Self {
            mask: 0,
            dirty: true,
        }
    }

    /// Sets the state of an LED.
    ///
    /// [`Led::All`] sets every LED to `state` at once. The tracker is marked
    /// dirty even if the mask did not change.
    pub fn set(&mut self, led: Led, state: LedState) {
        match state {
            LedState::On => {
                self.mask &= !led.blink_mask();
                self.mask |= led.on_mask();
            },
            LedState::Blink => {
                self.mask &= !led.on_mask();
                self.mask |= led.blink_mask();
            },
            LedState::Off => {
                self.mask &= !(led.on_mask() | led.blink_mask());
            },
        }

        self.dirty = true;
    }

    /// Retrieves the state of an LED.
    ///
    /// Querying [`Led::All`] or [`Led::None`] always reports
    /// [`LedState::Off`], as a group of LEDs has no single state.
    pub fn get(&self, led: Led) -> LedState {
        if matches!(led, Led::All | Led::None) {
            LedState::Off
        } else if self.mask & led.on_mask() != 0 {
            LedState::On
        } else if self.mask & led.blink_mask() != 0 {
            LedState::Blink
        } else {
            LedState::Off
        }
    }

    /// The mask of all LEDs in the form the device expects it.
    #[inline]
    pub const fn snapshot(&self) -> u16 {
        self.mask
    }

    /// The feature report transmitting the current mask.
    pub const fn feature_report(&self) -> FeatureReport {
        FeatureReport::Led { mask: self.mask }
    }

    /// Checks whether the mask changed since [`Self::clear_dirty`] was last
    /// called.
    #[inline]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Marks the current mask as transmitted.
    #[inline]
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}
