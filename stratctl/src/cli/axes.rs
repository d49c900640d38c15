use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use owo_colors::OwoColorize;
use serde_json::json;
use stratcom::axis::Axis;

use super::Env;

/// Print the value of every axis after each report until any button is
/// pressed.
#[derive(Args)]
pub struct AxesCommand {}

impl AxesCommand {
    pub fn execute(&self, env: &Env) -> Result<()> {
        let mut stdout = anstream::stdout().lock();
        let mut device = env.open_device()?;

        if !env.cli.json {
            writeln!(
                stdout,
                "{}",
                "Press any button on the Strategic Commander to quit.".bright_black()
            )?;
        }

        while !device.any_button_pressed() {
            device
                .read_input()
                .context("lost connection to the Strategic Commander")?;

            let [x, y, z] = Axis::ALL.map(|axis| device.axis_value(axis));
            if env.cli.json {
                writeln!(stdout, "{}", json!({ "x": x, "y": y, "z": z }))?;
            } else {
                writeln!(
                    stdout,
                    "Axis X: {:>4}  --  Y: {:>4}  --  Z: {:>4}",
                    x.blue(),
                    y.blue(),
                    z.blue()
                )?;
            }
            stdout.flush()?;
        }

        Ok(())
    }
}
