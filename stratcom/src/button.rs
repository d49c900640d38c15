//! Defines the buttons of the device and the canonical order they are
//! iterated in.

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Represents one of the twelve buttons of the device.
///
/// The discriminant of every variant is the bit the button occupies in the
/// button word of an input report (see [`crate::state::DeviceState::buttons`]).
///
/// The order of the variants (ascending by bit value) is the order buttons are
/// iterated in by [`Button::iter`] and reported in by [`crate::event::diff`].
/// Changing it changes the observable order of events.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, IntoPrimitive, TryFromPrimitive,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u16)]
pub enum Button {
    /// The button labeled `1`.
    One = 0x0001,

    /// The button labeled `2`.
    Two = 0x0002,

    /// The button labeled `3`.
    Three = 0x0004,

    /// The button labeled `4`.
    Four = 0x0008,

    /// The button labeled `5`.
    Five = 0x0010,

    /// The button labeled `6`.
    Six = 0x0020,

    /// The button labeled `+`.
    Plus = 0x0040,

    /// The button labeled `-`.
    Minus = 0x0080,

    /// The top shift button.
    Shift1 = 0x0100,

    /// The middle shift button.
    Shift2 = 0x0200,

    /// The lower shift button.
    Shift3 = 0x0400,

    /// The button labeled `REC`.
    Rec = 0x0800,
}

/// The bits of the button word that belong to a button.
pub const BUTTON_MASK: u16 = 0x0fff;

impl Button {
    /// All buttons in ascending order of their bit value.
    pub const ALL: [Button; 12] = [
        Button::One,
        Button::Two,
        Button::Three,
        Button::Four,
        Button::Five,
        Button::Six,
        Button::Plus,
        Button::Minus,
        Button::Shift1,
        Button::Shift2,
        Button::Shift3,
        Button::Rec,
    ];

    /// The first button of the iteration order.
    pub const fn first() -> Self {
        Button::One
    }

    /// Returns the button following `self` in the iteration order.
    ///
    /// Returns [`None`] after [`Button::Rec`], which terminates the iteration.
    pub const fn next(self) -> Option<Self> {
        match self {
            Button::One => Some(Button::Two),
            Button::Two => Some(Button::Three),
            Button::Three => Some(Button::Four),
            Button::Four => Some(Button::Five),
            Button::Five => Some(Button::Six),
            Button::Six => Some(Button::Plus),
            Button::Plus => Some(Button::Minus),
            Button::Minus => Some(Button::Shift1),
            Button::Shift1 => Some(Button::Shift2),
            Button::Shift2 => Some(Button::Shift3),
            Button::Shift3 => Some(Button::Rec),
            Button::Rec => None,
        }
    }

    /// Iterates over all buttons in ascending order of their bit value.
    pub fn iter() -> impl Iterator<Item = Button> + Clone {
        std::iter::successors(Some(Self::first()), |button| button.next())
    }

    /// The bit of the button word this button occupies.
    #[inline]
    pub const fn mask(self) -> u16 {
        self as u16
    }

    /// The label printed on the button.
    pub const fn label(self) -> &'static str {
        match self {
            Button::One => "1",
            Button::Two => "2",
            Button::Three => "3",
            Button::Four => "4",
            Button::Five => "5",
            Button::Six => "6",
            Button::Plus => "+",
            Button::Minus => "-",
            Button::Shift1 => "Shift1",
            Button::Shift2 => "Shift2",
            Button::Shift3 => "Shift3",
            Button::Rec => "REC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iteration_is_ascending_and_complete() {
        let buttons: Vec<Button> = Button::iter().collect();
        assert_eq!(buttons, Button::ALL);

        for pair in buttons.windows(2) {
            assert!(pair[0].mask() < pair[1].mask());
        }
    }

    #[test]
    fn rec_terminates_iteration() {
        assert_eq!(Button::Rec.next(), None);
        assert_eq!(Button::Shift3.next(), Some(Button::Rec));
    }

    #[test]
    fn masks_cover_exactly_twelve_bits() {
        let combined = Button::iter().fold(0u16, |acc, button| {
            assert_eq!(acc & button.mask(), 0);
            acc | button.mask()
        });
        assert_eq!(combined, BUTTON_MASK);
    }

    #[test]
    fn converts_from_raw_bits() {
        assert_eq!(Button::try_from(0x0004u16).ok(), Some(Button::Three));
        assert!(Button::try_from(0x0003u16).is_err());
        assert!(Button::try_from(0x1000u16).is_err());
        assert_eq!(u16::from(Button::Rec), 0x0800);
    }
}
