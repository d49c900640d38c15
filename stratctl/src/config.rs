//! Loads the optional TOML configuration file.
//!
//! ```toml
//! [device]
//! vendor_id = 0x045e
//! product_id = 0x0033
//! path = "/dev/hidraw3"
//!
//! [blink]
//! on_time = 32
//! off_time = 32
//! ```
//!
//! Every key is optional.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;
use stratcom::channel::{PRODUCT_ID, VENDOR_ID};

#[derive(Clone, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub device: DeviceConfig,
    pub blink: BlinkConfig,
}

/// Selects the device to talk to.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeviceConfig {
    pub vendor_id: u16,
    pub product_id: u16,

    /// A platform-specific HID path, skipping the lookup by ID.
    pub path: Option<String>,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            vendor_id: VENDOR_ID,
            product_id: PRODUCT_ID,
            path: None,
        }
    }
}

/// The blink interval used when none is given on the command line.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlinkConfig {
    pub on_time: u8,
    pub off_time: u8,
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self {
            on_time: 0x20,
            off_time: 0x20,
        }
    }
}

impl Config {
    /// Reads the configuration from `path`, or returns the defaults if no path
    /// was given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("could not read the configuration file {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("invalid configuration file {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
