use anyhow::{Context, Result};
use clap::Args;

use super::Env;

/// Set the time blinking LEDs stay lit and dark.
///
/// The interval is shared by all LEDs. Values missing on the command line are
/// taken from the configuration file.
#[derive(Args)]
pub struct BlinkCommand {
    /// The time a blinking LED stays lit
    on_time: Option<u8>,

    /// The time a blinking LED stays dark
    off_time: Option<u8>,
}

impl BlinkCommand {
    pub fn execute(&self, env: &Env) -> Result<()> {
        let device = env.open_device()?;

        let on_time = self.on_time.unwrap_or(env.config.blink.on_time);
        let off_time = self.off_time.unwrap_or(env.config.blink.off_time);

        device
            .set_led_blink_interval(on_time, off_time)
            .context("could not set the blink interval")
    }
}
