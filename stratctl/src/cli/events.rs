use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use owo_colors::OwoColorize;
use serde_json::json;
use stratcom::{button::Button, event::InputEvent, state::SliderState};

use super::Env;

/// Print every input event until the REC button is pressed.
#[derive(Args)]
pub struct EventsCommand {}

impl EventsCommand {
    pub fn execute(&self, env: &Env) -> Result<()> {
        let mut stdout = anstream::stdout().lock();
        let mut device = env.open_device()?;

        if !env.cli.json {
            writeln!(
                stdout,
                "{}",
                "Press the REC button on the Strategic Commander to quit.".bright_black()
            )?;
        }

        loop {
            let events = device
                .read_input()
                .context("lost connection to the Strategic Commander")?;

            for event in &events {
                if env.cli.json {
                    writeln!(stdout, "{}", json!(event))?;
                } else {
                    writeln!(stdout, "{}", describe(event))?;
                }
            }
            stdout.flush()?;

            if device.is_button_pressed(Button::Rec) {
                return Ok(());
            }
        }
    }
}

/// Renders an event as a human-readable sentence.
fn describe(event: &InputEvent) -> String {
    match *event {
        InputEvent::Button { button, pressed } => format!(
            "Button {} was {}.",
            button.label().bold(),
            if pressed {
                "pressed".green().into_styled()
            } else {
                "released".red().into_styled()
            }
        ),
        InputEvent::Slider { position } => format!(
            "Slider changed position to {}.",
            slider_position(position).blue()
        ),
        InputEvent::Axis { axis, value } => {
            format!("{}-Axis moved to {}.", axis.name(), value.blue())
        },
    }
}

/// The number of circles printed next to a slider position, or `0` if the
/// position is unknown.
fn slider_position(position: SliderState) -> u8 {
    match position {
        SliderState::Unknown => 0,
        SliderState::Position1 => 1,
        SliderState::Position2 => 2,
        SliderState::Position3 => 3,
    }
}
