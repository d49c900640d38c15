use std::io::{BufWriter, Write};

use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;
use serde_json::json;

use super::Env;
use crate::hid::{self, DeviceListing};

/// Detect and view general information about connected devices.
#[derive(Args)]
pub struct ProbeCommand {}

impl ProbeCommand {
    pub fn execute(&self, env: &Env) -> Result<()> {
        let mut stdout = BufWriter::new(anstream::stdout());

        let devices = hid::enumerate(&env.api, &env.config.device);

        if env.cli.json {
            writeln!(stdout, "{}", json!(devices))?;
            stdout.flush()?;
            return Ok(());
        }

        if devices.is_empty() {
            writeln!(
                stdout,
                "{}",
                "No Strategic Commander was found.".bright_black()
            )?;
            stdout.flush()?;
            return Ok(());
        }

        for (device_i, device) in devices.into_iter().enumerate() {
            if device_i != 0 {
                writeln!(stdout)?;
            }

            writeln!(
                stdout,
                "{} ({:#06x}:{:#06x})",
                device.product.as_deref().unwrap_or("Unknown device"),
                device.vendor_id.bright_black(),
                device.product_id.bright_black()
            )?;

            let properties = properties(&device);
            let properties_len = properties.len();
            for (property_i, property) in properties.into_iter().enumerate() {
                writeln!(
                    stdout,
                    " {} {}",
                    if property_i == properties_len - 1 {
                        "╰─"
                    } else {
                        "├─"
                    },
                    property
                )?;
            }
        }

        stdout.flush()?;

        Ok(())
    }
}

fn properties(device: &DeviceListing) -> Vec<String> {
    let mut properties = vec![format!("PATH: {}", device.path.bright_blue())];

    if let Some(manufacturer) = &device.manufacturer {
        properties.push(format!("MANUFACTURER: {}", manufacturer.bright_black()));
    }
    if let Some(serial_number) = &device.serial_number {
        properties.push(format!("SERIAL NUMBER: {}", serial_number.bright_black()));
    }

    properties
}
