//! Implements HID communication using the `hidapi` crate.

use std::{ffi::CString, time::Duration};

use anyhow::{Context, Result, anyhow};
use hidapi::{HidApi, HidDevice, HidError};
use itertools::Itertools;
use serde::Serialize;
use stratcom::channel::RawHidChannel;
use tracing::debug;

use crate::config::DeviceConfig;

/// An opened device, readable and writable through `hidapi`.
pub struct HidChannel(HidDevice);

impl RawHidChannel for HidChannel {
    type Error = HidError;

    fn read_report(&self, buf: &mut [u8], timeout: Option<Duration>) -> Result<usize, Self::Error> {
        match timeout {
            None => self.0.read(buf),
            Some(timeout) => self.0.read_timeout(buf, timeout_millis(timeout)),
        }
    }

    fn send_feature_report(&self, data: &[u8]) -> Result<(), Self::Error> {
        self.0.send_feature_report(data)
    }
}

/// Converts a timeout to the milliseconds `hidapi` expects.
///
/// Non-zero timeouts are rounded up, as `0` only polls.
fn timeout_millis(timeout: Duration) -> i32 {
    let millis = timeout.as_nanos().div_ceil(1_000_000);
    i32::try_from(millis).unwrap_or(i32::MAX)
}

/// Describes an attached device without opening it.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct DeviceListing {
    pub path: String,
    pub vendor_id: u16,
    pub product_id: u16,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
}

/// Lists all attached devices matching the configured vendor and product ID.
///
/// A device exposing multiple interfaces is only listed once.
pub fn enumerate(api: &HidApi, config: &DeviceConfig) -> Vec<DeviceListing> {
    api.device_list()
        .filter(|info| {
            info.vendor_id() == config.vendor_id && info.product_id() == config.product_id
        })
        .map(|info| DeviceListing {
            path: info.path().to_string_lossy().into_owned(),
            vendor_id: info.vendor_id(),
            product_id: info.product_id(),
            manufacturer: info.manufacturer_string().map(str::to_owned),
            product: info.product_string().map(str::to_owned),
            serial_number: info.serial_number().map(str::to_owned),
        })
        .unique_by(|listing| listing.path.clone())
        .collect()
}

/// Opens a device.
///
/// An explicit `path` takes precedence over the path in the configuration,
/// which in turn takes precedence over looking the device up by its vendor and
/// product ID.
pub fn open(api: &HidApi, config: &DeviceConfig, path: Option<&str>) -> Result<HidChannel> {
    let device = match path.or(config.path.as_deref()) {
        Some(path) => {
            debug!(path, "opening device by path");
            let c_path = CString::new(path)
                .map_err(|_| anyhow!("the device path {path:?} contains a NUL byte"))?;
            api.open_path(&c_path)
                .with_context(|| format!("could not open the device at {path}"))?
        },
        None => {
            debug!(
                vendor_id = config.vendor_id,
                product_id = config.product_id,
                "opening device by ID"
            );
            api.open(config.vendor_id, config.product_id).with_context(|| {
                format!(
                    "the Strategic Commander ({:04x}:{:04x}) was not found",
                    config.vendor_id, config.product_id
                )
            })?
        },
    };

    Ok(HidChannel(device))
}
