use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use stratcom::led::{Led, LedState};

use super::Env;

/// Set the state of an LED.
///
/// The device does not report the state of its LEDs, so all other LEDs are
/// switched off.
#[derive(Args)]
pub struct LedCommand {
    /// The LED to change
    led: LedArg,

    /// The state to set the LED to
    state: LedStateArg,
}

impl LedCommand {
    pub fn execute(&self, env: &Env) -> Result<()> {
        let mut device = env.open_device()?;

        device
            .set_led_state(self.led.into(), self.state.into())
            .context("could not set the LED state")
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
enum LedArg {
    #[value(name = "1")]
    One,
    #[value(name = "2")]
    Two,
    #[value(name = "3")]
    Three,
    #[value(name = "4")]
    Four,
    #[value(name = "5")]
    Five,
    #[value(name = "6")]
    Six,
    Rec,
    All,
}

impl From<LedArg> for Led {
    fn from(value: LedArg) -> Self {
        match value {
            LedArg::One => Led::One,
            LedArg::Two => Led::Two,
            LedArg::Three => Led::Three,
            LedArg::Four => Led::Four,
            LedArg::Five => Led::Five,
            LedArg::Six => Led::Six,
            LedArg::Rec => Led::Rec,
            LedArg::All => Led::All,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
enum LedStateArg {
    On,
    Off,
    Blink,
}

impl From<LedStateArg> for LedState {
    fn from(value: LedStateArg) -> Self {
        match value {
            LedStateArg::On => LedState::On,
            LedStateArg::Off => LedState::Off,
            LedStateArg::Blink => LedState::Blink,
        }
    }
}
