//! Implements a session with a single opened device.

use std::{error::Error, time::Duration};

use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::{
    axis::Axis,
    button::Button,
    channel::RawHidChannel,
    event::{self, EventEmitter, InputEvent},
    led::{Led, LedState, LedStateTracker},
    report::{self, FeatureReport, INPUT_REPORT_LENGTH, ProtocolError},
    state::{DeviceState, SliderState},
};

/// Represents a session with a device connected to a [`RawHidChannel`].
///
/// The session remembers the last input state read from the device and the
/// desired state of all LEDs. Reading input replaces the remembered state and
/// returns the events explaining the change (see [`event::diff`]).
pub struct Device<T: RawHidChannel> {
    /// The underlying HID channel.
    chan: T,

    /// The desired LED states, which may not have been sent yet.
    leds: LedStateTracker,

    /// The state decoded from the last successfully read input report.
    state: DeviceState,

    /// The emitter used to emit input events to listeners.
    emitter: EventEmitter<InputEvent>,
}

impl<T: RawHidChannel> Device<T> {
    /// Starts a session on an opened channel.
    ///
    /// The input state starts out as [`DeviceState::default`] and all LEDs are
    /// considered off, with the LED state marked as unflushed.
    pub fn new(chan: T) -> Self {
        Self {
            chan,
            leds: LedStateTracker::new(),
            state: DeviceState::default(),
            emitter: EventEmitter::new(),
        }
    }

    /// Ends the session and returns the underlying channel.
    pub fn into_inner(self) -> T {
        self.chan
    }

    /// Creates a receiver for all input events produced by subsequent reads.
    pub fn listen(&self) -> flume::Receiver<InputEvent> {
        self.emitter.create_receiver()
    }

    /// Blocks until an input report was read and updates the input state.
    ///
    /// Returns the events explaining the change from the previous state.
    ///
    /// Reading fewer bytes than an input report consists of results in
    /// [`DeviceError::Protocol`].
    pub fn read_input(&mut self) -> Result<Vec<InputEvent>, DeviceError<T::Error>> {
        let mut buf = [0u8; INPUT_REPORT_LENGTH];
        let len = self
            .chan
            .read_report(&mut buf, None)
            .map_err(DeviceError::Channel)?;

        self.evaluate(&buf[..len.min(buf.len())])
    }

    /// Waits at most `timeout` for an input report and updates the input
    /// state if one was read.
    ///
    /// Returns `Ok(None)` if no report arrived in time.
    pub fn read_input_timeout(
        &mut self,
        timeout: Duration,
    ) -> Result<Option<Vec<InputEvent>>, DeviceError<T::Error>> {
        let mut buf = [0u8; INPUT_REPORT_LENGTH];
        let len = self
            .chan
            .read_report(&mut buf, Some(timeout))
            .map_err(DeviceError::Channel)?;

        if len == 0 {
            return Ok(None);
        }

        self.evaluate(&buf[..len.min(buf.len())]).map(Some)
    }

    /// Updates the input state if an input report is already available.
    ///
    /// Returns `Ok(None)` without waiting otherwise.
    pub fn read_input_non_blocking(
        &mut self,
    ) -> Result<Option<Vec<InputEvent>>, DeviceError<T::Error>> {
        self.read_input_timeout(Duration::ZERO)
    }

    fn evaluate(&mut self, raw: &[u8]) -> Result<Vec<InputEvent>, DeviceError<T::Error>> {
        let state = report::decode_input_report(raw).inspect_err(|err| {
            warn!(%err, len = raw.len(), "rejected input report");
        })?;
        trace!(?state, "decoded input report");

        let events = event::diff(&self.state, &state);
        self.state = state;

        for event in &events {
            self.emitter.emit(*event);
        }

        Ok(events)
    }

    /// The input state decoded from the last successfully read report.
    #[inline]
    pub fn input_state(&self) -> DeviceState {
        self.state
    }

    /// Checks whether a button was pressed according to the last read report.
    pub fn is_button_pressed(&self, button: Button) -> bool {
        self.state.is_pressed(button)
    }

    /// Checks whether any button was pressed according to the last read
    /// report.
    pub fn any_button_pressed(&self) -> bool {
        self.state.any_pressed()
    }

    /// The value of an axis according to the last read report.
    pub fn axis_value(&self, axis: Axis) -> i16 {
        self.state.axis(axis)
    }

    /// The slider position according to the last read report.
    pub fn slider_state(&self) -> SliderState {
        self.state.slider()
    }

    /// Sets the state of an LED and sends the state of all LEDs to the device.
    pub fn set_led_state(&mut self, led: Led, state: LedState) -> Result<(), DeviceError<T::Error>> {
        self.set_led_state_without_flushing(led, state);
        self.flush_led_state()
    }

    /// Sets the state of an LED without sending it to the device.
    ///
    /// This is useful to change several LEDs at once using a single report.
    /// Call [`Self::flush_led_state`] to send the accumulated changes.
    pub fn set_led_state_without_flushing(&mut self, led: Led, state: LedState) {
        self.leds.set(led, state);
    }

    /// Sends the state of all LEDs to the device.
    ///
    /// The LED state stays marked as unflushed if the channel fails.
    pub fn flush_led_state(&mut self) -> Result<(), DeviceError<T::Error>> {
        self.send(self.leds.feature_report())?;
        self.leds.clear_dirty();
        Ok(())
    }

    /// Retrieves the desired state of an LED.
    ///
    /// This reflects changes that have not been flushed yet.
    pub fn led_state(&self, led: Led) -> LedState {
        self.leds.get(led)
    }

    /// Checks whether LED changes were made since the last flush.
    pub fn has_unflushed_led_changes(&self) -> bool {
        self.leds.is_dirty()
    }

    /// Sets the time blinking LEDs stay lit and dark.
    ///
    /// The interval is shared by all LEDs and takes effect immediately.
    pub fn set_led_blink_interval(
        &self,
        on_time: u8,
        off_time: u8,
    ) -> Result<(), DeviceError<T::Error>> {
        self.send(FeatureReport::BlinkInterval { on_time, off_time })
    }

    fn send(&self, report: FeatureReport) -> Result<(), DeviceError<T::Error>> {
        debug!(?report, "sending feature report");
        self.chan
            .send_feature_report(&report.to_bytes())
            .map_err(DeviceError::Channel)
    }
}

/// Represents an error that occurred when interacting with a [`Device`].
#[derive(Debug, Error)]
pub enum DeviceError<E: Error + 'static> {
    /// Indicates that the [`RawHidChannel`] implementation returned an error.
    #[error("the HID channel implementation returned an error")]
    Channel(#[source] E),

    /// Indicates that the device sent a report that could not be decoded.
    #[error("the device sent an invalid report")]
    Protocol(#[from] ProtocolError),
}
