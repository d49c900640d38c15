//! Property-based tests for report decoding, LED tracking and event diffing.

use proptest::prelude::*;
use stratcom::{
    axis::{AXIS_MAX, AXIS_MIN, Axis},
    button::{BUTTON_MASK, Button},
    event::{InputEvent, diff},
    led::{Led, LedState, LedStateTracker},
    report::{
        FeatureReport,
        INPUT_REPORT_LENGTH,
        ProtocolError,
        decode_input_report,
        encode_blink_interval_report,
        encode_led_feature_report,
    },
    state::{DeviceState, SliderState},
};

fn any_led() -> impl Strategy<Value = Led> {
    prop_oneof![
        Just(Led::One),
        Just(Led::Two),
        Just(Led::Three),
        Just(Led::Four),
        Just(Led::Five),
        Just(Led::Six),
        Just(Led::Rec),
        Just(Led::All),
        Just(Led::None),
    ]
}

fn any_led_state() -> impl Strategy<Value = LedState> {
    prop_oneof![Just(LedState::On), Just(LedState::Off), Just(LedState::Blink)]
}

fn any_slider() -> impl Strategy<Value = SliderState> {
    prop_oneof![
        Just(SliderState::Unknown),
        Just(SliderState::Position1),
        Just(SliderState::Position2),
        Just(SliderState::Position3),
    ]
}

fn any_state() -> impl Strategy<Value = DeviceState> {
    (
        any::<u16>(),
        any_slider(),
        AXIS_MIN..=AXIS_MAX,
        AXIS_MIN..=AXIS_MAX,
        AXIS_MIN..=AXIS_MAX,
    )
        .prop_map(|(buttons, slider, x, y, z)| {
            DeviceState::default()
                .with_buttons(buttons)
                .with_slider(slider)
                .with_axis(Axis::X, x)
                .with_axis(Axis::Y, y)
                .with_axis(Axis::Z, z)
        })
}

/// Describes which input an event belongs to, without its new value.
fn dimension(event: &InputEvent) -> String {
    match event {
        InputEvent::Slider { .. } => "slider".to_string(),
        InputEvent::Axis { axis, .. } => format!("axis {}", axis.name()),
        InputEvent::Button { button, .. } => format!("button {}", button.label()),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Every 7-byte buffer starting with the report ID decodes to a state
    /// within the device's value ranges.
    #[test]
    fn prop_decoded_states_stay_in_range(payload in any::<[u8; 6]>()) {
        let mut raw = [0x01u8; INPUT_REPORT_LENGTH];
        raw[1..].copy_from_slice(&payload);

        let state = decode_input_report(&raw).unwrap();

        prop_assert_eq!(state.buttons() & !BUTTON_MASK, 0);
        prop_assert_ne!(state.slider(), SliderState::Unknown);
        for axis in Axis::ALL {
            prop_assert!((AXIS_MIN..=AXIS_MAX).contains(&state.axis(axis)));
        }
    }

    /// The top two bits of b4 never influence the decoded state.
    #[test]
    fn prop_reserved_bits_are_ignored(payload in any::<[u8; 6]>(), reserved in 0u8..4) {
        let mut raw = [0x01u8; INPUT_REPORT_LENGTH];
        raw[1..].copy_from_slice(&payload);
        raw[4] &= 0x3f;
        let clean = decode_input_report(&raw).unwrap();

        raw[4] |= reserved << 6;
        prop_assert_eq!(decode_input_report(&raw).unwrap(), clean);
    }

    /// Any buffer not starting with `0x01` is rejected.
    #[test]
    fn prop_bad_header_is_rejected(id in any::<u8>(), payload in any::<[u8; 6]>()) {
        prop_assume!(id != 0x01);
        let mut raw = [id; INPUT_REPORT_LENGTH];
        raw[1..].copy_from_slice(&payload);

        prop_assert_eq!(
            decode_input_report(&raw),
            Err(ProtocolError::BadHeader { expected: 0x01, found: id })
        );
    }

    /// Any buffer shorter than an input report is rejected.
    #[test]
    fn prop_short_buffer_is_rejected(raw in proptest::collection::vec(any::<u8>(), 0..INPUT_REPORT_LENGTH)) {
        prop_assert_eq!(
            decode_input_report(&raw),
            Err(ProtocolError::ShortBuffer { expected: INPUT_REPORT_LENGTH, actual: raw.len() })
        );
    }

    /// The on and blink bits of an LED are never set at the same time.
    #[test]
    fn prop_on_and_blink_are_exclusive(
        changes in proptest::collection::vec((any_led(), any_led_state()), 0..64),
    ) {
        let mut tracker = LedStateTracker::new();
        for (led, state) in changes {
            tracker.set(led, state);
        }

        let mask = tracker.snapshot();
        for led in Led::INDIVIDUAL {
            prop_assert!(
                mask & led.on_mask() == 0 || mask & led.blink_mask() == 0,
                "{:?} has both bits set in {:#06x}", led, mask
            );
        }
        prop_assert_eq!(mask & 0xc000, 0);
    }

    /// The last state set for an LED is the state reported for it, unless it
    /// was overridden by a later change of all LEDs.
    #[test]
    fn prop_last_change_wins(
        changes in proptest::collection::vec((any_led(), any_led_state()), 1..32),
    ) {
        let mut tracker = LedStateTracker::new();
        for &(led, state) in &changes {
            tracker.set(led, state);
        }

        for led in Led::INDIVIDUAL {
            let expected = changes
                .iter()
                .rev()
                .find(|(changed, _)| *changed == led || *changed == Led::All)
                .map_or(LedState::Off, |&(_, state)| state);
            prop_assert_eq!(tracker.get(led), expected);
        }
    }

    /// The LED feature report survives decoding.
    #[test]
    fn prop_feature_reports_read_back(mask in any::<u16>(), on_time in any::<u8>(), off_time in any::<u8>()) {
        prop_assert_eq!(
            FeatureReport::read_raw(&encode_led_feature_report(mask)),
            Ok(FeatureReport::Led { mask })
        );
        prop_assert_eq!(
            FeatureReport::read_raw(&encode_blink_interval_report(on_time, off_time)),
            Ok(FeatureReport::BlinkInterval { on_time, off_time })
        );
    }

    /// Diffing a state with itself never produces events.
    #[test]
    fn prop_diff_of_identical_states_is_empty(state in any_state()) {
        prop_assert!(diff(&state, &state).is_empty());
    }

    /// Swapping the states reports the same inputs, carrying the values of the
    /// other state.
    #[test]
    fn prop_diff_is_symmetric(a in any_state(), b in any_state()) {
        let forward = diff(&a, &b);
        let backward = diff(&b, &a);

        prop_assert_eq!(
            forward.iter().map(dimension).collect::<Vec<_>>(),
            backward.iter().map(dimension).collect::<Vec<_>>()
        );

        for (f, r) in forward.iter().zip(&backward) {
            match (f, r) {
                (InputEvent::Button { pressed: p, .. }, InputEvent::Button { pressed: q, .. }) => {
                    prop_assert_ne!(p, q);
                },
                (InputEvent::Axis { axis, value }, InputEvent::Axis { value: old, .. }) => {
                    prop_assert_eq!(*value, b.axis(*axis));
                    prop_assert_eq!(*old, a.axis(*axis));
                },
                (InputEvent::Slider { position }, InputEvent::Slider { position: old }) => {
                    prop_assert_eq!(*position, b.slider());
                    prop_assert_eq!(*old, a.slider());
                },
                _ => prop_assert!(false, "mismatched events {:?} and {:?}", f, r),
            }
        }
    }

    /// Applying the events of a diff to the old state yields the new state.
    #[test]
    fn prop_diff_explains_transition(a in any_state(), b in any_state()) {
        let mut state = a;
        for event in diff(&a, &b) {
            state = match event {
                InputEvent::Button { button, pressed } => state.with_button(button, pressed),
                InputEvent::Slider { position } => state.with_slider(position),
                InputEvent::Axis { axis, value } => state.with_axis(axis, value),
            };
        }

        prop_assert_eq!(state, b);
    }

    /// Button events appear after all other events and in button order.
    #[test]
    fn prop_diff_ordering(a in any_state(), b in any_state()) {
        let events = diff(&a, &b);

        let first_button = events
            .iter()
            .position(|event| matches!(event, InputEvent::Button { .. }))
            .unwrap_or(events.len());
        let buttons_last = events[first_button..]
            .iter()
            .all(|event| matches!(event, InputEvent::Button { .. }));
        prop_assert!(buttons_last, "button events must come last: {:?}", events);

        let slider_first = events
            .iter()
            .skip(1)
            .all(|event| !matches!(event, InputEvent::Slider { .. }));
        prop_assert!(slider_first, "a slider event must come first: {:?}", events);

        let buttons: Vec<Button> = events
            .iter()
            .filter_map(|event| match event {
                InputEvent::Button { button, .. } => Some(*button),
                _ => None,
            })
            .collect();
        let expected: Vec<Button> = Button::iter()
            .filter(|button| a.is_pressed(*button) != b.is_pressed(*button))
            .collect();
        prop_assert_eq!(buttons, expected);
    }
}

#[test]
fn diff_orders_slider_axis_and_button() {
    let old = DeviceState::default();
    let new = decode_input_report(&[0x01, 0x05, 0x00, 0x00, 0x00, 0x04, 0x30]).unwrap();

    assert_eq!(
        diff(&old, &new),
        vec![
            InputEvent::Slider {
                position: SliderState::Position1
            },
            InputEvent::Axis {
                axis: Axis::X,
                value: 5
            },
            InputEvent::Button {
                button: Button::Three,
                pressed: true
            },
        ]
    );
}
