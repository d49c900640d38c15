//! An implementation of the USB HID protocol spoken by the Microsoft
//! SideWinder Strategic Commander.
//!
//! The Strategic Commander is a desktop input device featuring
//!
//! - three axes (sliding the device horizontally and vertically and twisting
//!   it),
//! - a three-position slider,
//! - twelve buttons, seven of which have LEDs that can be lit or set to blink.
//!
//! The device talks a small proprietary protocol on top of HID: a single 7-byte
//! input report carries the state of all inputs, and two 3-byte feature
//! reports control the LEDs. This crate decodes and encodes these reports and
//! derives discrete input events from successive input states.
//!
//! # Quickstart
//!
//! ## Establish HID communication
//!
//! This crate implements the protocol, not the underlying HID communication,
//! which is left to an external crate of your choice. The trait used for
//! bridging your HID implementation to this crate is
//! [`channel::RawHidChannel`]. The `stratctl` tool in this repository contains
//! an implementation based on [`hidapi`](https://crates.io/crates/hidapi) and
//! looks devices up using [`channel::VENDOR_ID`] and [`channel::PRODUCT_ID`].
//!
//! ## Talk to the device
//!
//! Once you have an opened channel, start a [`device::Device`] session on it:
//!
//! ```no_run
//! use stratcom::{
//!     button::Button,
//!     channel::RawHidChannel,
//!     device::{Device, DeviceError},
//!     led::{Led, LedState},
//! };
//!
//! fn run<T: RawHidChannel>(chan: T) -> Result<(), DeviceError<T::Error>> {
//!     let mut device = Device::new(chan);
//!
//!     // LED changes can be collected and sent using a single report...
//!     device.set_led_state_without_flushing(Led::One, LedState::On);
//!     device.set_led_state_without_flushing(Led::Rec, LedState::Blink);
//!     device.flush_led_state()?;
//!
//!     // ...and the interval blinking LEDs use is shared by all of them.
//!     device.set_led_blink_interval(0x20, 0x20)?;
//!
//!     // Every read returns the events that happened since the last one.
//!     loop {
//!         for event in device.read_input()? {
//!             println!("{event:?}");
//!         }
//!
//!         if device.is_button_pressed(Button::Rec) {
//!             break;
//!         }
//!     }
//!
//!     device.set_led_state(Led::All, LedState::Off)
//! }
//! ```
//!
//! ## Without a session
//!
//! The codec is usable on its own. [`report::decode_input_report`] turns raw
//! bytes into a [`state::DeviceState`], [`event::diff`] compares two states
//! and [`led::LedStateTracker`] together with
//! [`report::encode_led_feature_report`] produces the bytes to send.

pub mod axis;
pub mod button;
pub mod channel;
pub mod device;
pub mod event;
pub mod led;
pub mod report;
pub mod state;
