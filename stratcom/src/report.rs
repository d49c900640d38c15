//! Implements the wire format of the reports exchanged with the device.
//!
//! The device sends a single kind of input report and accepts two kinds of
//! feature reports:
//!
//! | report         | length | layout                                 |
//! |----------------|--------|----------------------------------------|
//! | input          | 7      | `0x01`, axes, buttons and slider       |
//! | LED feature    | 3      | `0x01`, LED mask low, LED mask high    |
//! | blink feature  | 3      | `0x02`, on time, off time              |
//!
//! All functions in this module are pure. Transmitting the buffers is left to a
//! [`crate::channel::RawHidChannel`].

use thiserror::Error;

use crate::{
    axis::{Axis, RawAxis},
    state::{DeviceState, SliderState},
};

/// The exact length of an input report.
pub const INPUT_REPORT_LENGTH: usize = 7;

/// The exact length of both kinds of feature reports.
pub const FEATURE_REPORT_LENGTH: usize = 3;

/// The report ID every input report starts with.
pub const INPUT_REPORT_ID: u8 = 0x01;

/// The report ID of the feature report setting the LED states.
pub const LED_REPORT_ID: u8 = 0x01;

/// The report ID of the feature report setting the blink interval.
pub const BLINK_REPORT_ID: u8 = 0x02;

/// Decodes a raw input report into a [`DeviceState`].
///
/// The report is laid out as follows, with the bits of higher bytes being the
/// higher-order bits of the respective axis:
///
/// ```text
///   b1         b2         b3         b4         b5         b6
///   XXXX XXXX  YYYY YYXX  ZZZZ YYYY  --ZZ ZZZZ  BBBB BBBB  SSSS BBBB
/// ```
///
/// Every axis is a 10-bit two's complement number. The upper nibble of `b6`
/// contains the slider position and is not part of the button word.
///
/// Bytes following the first [`INPUT_REPORT_LENGTH`] bytes are ignored.
///
/// Returns [`ProtocolError::ShortBuffer`] if `raw` is shorter than
/// [`INPUT_REPORT_LENGTH`] and [`ProtocolError::BadHeader`] if it does not
/// start with [`INPUT_REPORT_ID`].
pub fn decode_input_report(raw: &[u8]) -> Result<DeviceState, ProtocolError> {
    let Some(&[id, b1, b2, b3, b4, b5, b6]) = raw.first_chunk::<INPUT_REPORT_LENGTH>() else {
        return Err(ProtocolError::ShortBuffer {
            expected: INPUT_REPORT_LENGTH,
            actual: raw.len(),
        });
    };

    if id != INPUT_REPORT_ID {
        return Err(ProtocolError::BadHeader {
            expected: INPUT_REPORT_ID,
            found: id,
        });
    }

    let buttons = ((b6 as u16 & 0x0f) << 8) | b5 as u16;

    let slider = if b6 & 0x30 == 0x30 {
        SliderState::Position1
    } else if b6 & 0x20 != 0 {
        SliderState::Position2
    } else {
        SliderState::Position3
    };

    let x = RawAxis::from_bits(((b2 as u16 & 0x03) << 8) | b1 as u16);
    let y = RawAxis::from_bits(((b3 as u16 & 0x0f) << 6) | ((b2 as u16 & 0xfc) >> 2));
    let z = RawAxis::from_bits(((b4 as u16 & 0x3f) << 4) | ((b3 as u16 & 0xf0) >> 4));

    Ok(DeviceState::default()
        .with_buttons(buttons)
        .with_slider(slider)
        .with_axis(Axis::X, x.to_signed())
        .with_axis(Axis::Y, y.to_signed())
        .with_axis(Axis::Z, z.to_signed()))
}

/// Encodes the feature report setting the LED states to `mask`.
///
/// See [`crate::led::LedStateTracker`] for the meaning of the mask bits.
pub fn encode_led_feature_report(mask: u16) -> [u8; FEATURE_REPORT_LENGTH] {
    let [lo, hi] = mask.to_le_bytes();
    [LED_REPORT_ID, lo, hi]
}

/// Encodes the feature report setting the blink interval of all LEDs.
pub fn encode_blink_interval_report(on_time: u8, off_time: u8) -> [u8; FEATURE_REPORT_LENGTH] {
    [BLINK_REPORT_ID, on_time, off_time]
}

/// Represents a feature report accepted by the device.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FeatureReport {
    /// Sets the state of all LEDs at once.
    Led {
        /// The on and blink bits of every LED.
        mask: u16,
    },

    /// Sets the blink interval shared by all blinking LEDs.
    BlinkInterval {
        /// The time a blinking LED stays lit.
        on_time: u8,

        /// The time a blinking LED stays dark.
        off_time: u8,
    },
}

impl FeatureReport {
    /// Tries to read a feature report from raw data.
    ///
    /// Bytes following the first [`FEATURE_REPORT_LENGTH`] bytes are ignored.
    pub fn read_raw(raw: &[u8]) -> Result<Self, ProtocolError> {
        let Some(&[id, b1, b2]) = raw.first_chunk::<FEATURE_REPORT_LENGTH>() else {
            return Err(ProtocolError::ShortBuffer {
                expected: FEATURE_REPORT_LENGTH,
                actual: raw.len(),
            });
        };

        match id {
            LED_REPORT_ID => Ok(Self::Led {
                mask: u16::from_le_bytes([b1, b2]),
            }),
            BLINK_REPORT_ID => Ok(Self::BlinkInterval {
                on_time: b1,
                off_time: b2,
            }),
            found => Err(ProtocolError::BadHeader {
                expected: LED_REPORT_ID,
                found,
            }),
        }
    }

    /// Encodes the report in its raw byte form.
    pub fn to_bytes(&self) -> [u8; FEATURE_REPORT_LENGTH] {
        match *self {
            Self::Led { mask } => encode_led_feature_report(mask),
            Self::BlinkInterval { on_time, off_time } => {
                encode_blink_interval_report(on_time, off_time)
            },
        }
    }
}

/// Represents an error that occurred when decoding a report.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum ProtocolError {
    /// Indicates that the report does not start with the expected report ID.
    #[error("the report starts with {found:#04x} instead of {expected:#04x}")]
    BadHeader { expected: u8, found: u8 },

    /// Indicates that fewer bytes than required for a report were supplied.
    #[error("the report is {actual} bytes long, but at least {expected} bytes are required")]
    ShortBuffer { expected: usize, actual: usize },
}
