use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use owo_colors::OwoColorize;
use stratcom::led::{Led, LedState};

use super::Env;

/// Light some LEDs and switch them off again once a button is pressed.
#[derive(Args)]
pub struct LedDemoCommand {}

impl LedDemoCommand {
    pub fn execute(&self, env: &Env) -> Result<()> {
        let mut stdout = anstream::stdout().lock();
        let mut device = env.open_device()?;

        for led in [Led::One, Led::Three, Led::Five] {
            device.set_led_state_without_flushing(led, LedState::On);
        }
        device.set_led_state_without_flushing(Led::Rec, LedState::Blink);
        device
            .flush_led_state()
            .context("could not set the LED state")?;

        if !env.cli.json {
            writeln!(
                stdout,
                "{}",
                "Press any button on the Strategic Commander to continue.".bright_black()
            )?;
            stdout.flush()?;
        }

        // The state from before the LEDs changed may still show a pressed
        // button, so at least one report is read.
        loop {
            device
                .read_input()
                .context("lost connection to the Strategic Commander")?;

            if device.any_button_pressed() {
                break;
            }
        }

        device
            .set_led_state(Led::All, LedState::Off)
            .context("could not switch the LEDs off")
    }
}
