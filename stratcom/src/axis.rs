//! Axis identifiers and the 10-bit two's complement values the device reports
//! for them.

/// Represents one of the three axes of the device.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Axis {
    /// The horizontal X axis.
    X,

    /// The vertical Y axis.
    Y,

    /// The rotational Z axis.
    Z,
}

impl Axis {
    /// All axes in the order they are reported in by [`crate::event::diff`].
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// A short name of the axis.
    pub const fn name(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

/// The smallest value an axis can report.
pub const AXIS_MIN: i16 = -512;

/// The largest value an axis can report.
pub const AXIS_MAX: i16 = 511;

/// Represents a raw, unsigned 10-bit axis value as it is packed into an input
/// report.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct RawAxis(u16);

impl RawAxis {
    const BITS: u16 = 0x03ff;
    const SIGN: u16 = 0x0200;

    /// Constructs a raw value from the 10 low bits of `raw`.
    pub const fn from_bits(raw: u16) -> Self {
        Self(raw & Self::BITS)
    }

    /// Returns the 10 raw bits.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Interprets the raw bits as a two's complement number.
    ///
    /// The result is always within [`AXIS_MIN`]`..=`[`AXIS_MAX`].
    pub const fn to_signed(self) -> i16 {
        if self.0 & Self::SIGN != 0 {
            -(((self.0 ^ Self::BITS) + 1) as i16)
        } else {
            self.0 as i16
        }
    }

    /// Encodes a signed axis value as raw bits, clamping it to the range the
    /// device can represent.
    pub const fn from_signed(value: i16) -> Self {
        let value = if value < AXIS_MIN {
            AXIS_MIN
        } else if value > AXIS_MAX {
            AXIS_MAX
        } else {
            value
        };

        Self::from_bits(value as u16)
    }
}
