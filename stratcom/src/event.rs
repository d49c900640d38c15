//! Derives input events from successive device states.

use std::sync::Mutex;

use crate::{
    axis::Axis,
    button::Button,
    state::{DeviceState, SliderState},
};

/// Represents a single change of an input of the device.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum InputEvent {
    /// A button was pressed or released.
    Button { button: Button, pressed: bool },

    /// The slider was moved to a new position.
    Slider { position: SliderState },

    /// An axis was moved to a new value.
    Axis { axis: Axis, value: i16 },
}

/// Computes the events explaining the transition from `old` to `new`.
///
/// The events are ordered as follows:
///
/// 1. a [`InputEvent::Slider`] event if the slider moved,
/// 2. a [`InputEvent::Axis`] event for every moved axis, in the order X, Y, Z,
/// 3. a [`InputEvent::Button`] event for every pressed or released button, in
///    the order of [`Button::iter`].
///
/// Inputs that did not change produce no event, so diffing a state with itself
/// returns an empty vector.
pub fn diff(old: &DeviceState, new: &DeviceState) -> Vec<InputEvent> {
    let mut events = Vec::new();

    if old.slider() != new.slider() {
        events.push(InputEvent::Slider {
            position: new.slider(),
        });
    }

    for axis in Axis::ALL {
        let value = new.axis(axis);
        if old.axis(axis) != value {
            events.push(InputEvent::Axis { axis, value });
        }
    }

    let changed = old.buttons() ^ new.buttons();
    if changed != 0 {
        events.extend(
            Button::iter()
                .filter(|button| changed & button.mask() != 0)
                .map(|button| InputEvent::Button {
                    button,
                    pressed: new.is_pressed(button),
                }),
        );
    }

    events
}

/// A simple event emitter sending every event to multiple receivers.
#[derive(Debug)]
pub struct EventEmitter<T: Clone> {
    senders: Mutex<Vec<flume::Sender<T>>>,
}

impl<T: Clone> Default for EventEmitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> EventEmitter<T> {
    pub fn new() -> Self {
        Self {
            senders: Mutex::new(Vec::new()),
        }
    }

    /// Creates a new receiver and adds the corresponding sender to the sender
    /// list.
    pub fn create_receiver(&self) -> flume::Receiver<T> {
        let (tx, rx) = flume::unbounded();
        self.lock().push(tx);
        rx
    }

    /// Emits an event to all senders. Senders whose receivers were dropped are
    /// removed from the list.
    pub fn emit(&self, event: T) {
        self.lock()
            .retain(|sender| sender.send(event.clone()).is_ok());
    }

    /// The amount of receivers that have not been dropped yet.
    pub fn receiver_count(&self) -> usize {
        self.lock()
            .iter()
            .filter(|sender| !sender.is_disconnected())
            .count()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<flume::Sender<T>>> {
        // A poisoned sender list is still consistent.
        self.senders
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
