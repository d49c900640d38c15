//! Defines the seam between this crate and the HID implementation actually
//! talking to the device.

use std::{error::Error, time::Duration};

/// The USB vendor ID of the device.
pub const VENDOR_ID: u16 = 0x045e;

/// The USB product ID of the device.
pub const PRODUCT_ID: u16 = 0x0033;

/// Represents an opened HID communication channel to the device that is both
/// readable and writable.
///
/// Enumerating, opening and closing devices, as well as any process-wide
/// initialization the HID library requires, are the responsibility of the
/// implementor. Implementations must not retry failed transfers.
pub trait RawHidChannel {
    /// An implementation-specific error type.
    type Error: Error + 'static;

    /// Reads a single input report into `buf`.
    ///
    /// With a `timeout` of [`None`] the call blocks until a report arrives.
    /// Otherwise it waits at most `timeout`; [`Duration::ZERO`] only checks for
    /// an already queued report.
    ///
    /// If the buffer is not large enough to fit the whole report, its remainder
    /// should be discarded.
    ///
    /// Returns the exact amount of read bytes on success, which is `0` if no
    /// report arrived in time.
    fn read_report(&self, buf: &mut [u8], timeout: Option<Duration>) -> Result<usize, Self::Error>;

    /// Sends a feature report, including its leading report ID, to the device.
    fn send_feature_report(&self, data: &[u8]) -> Result<(), Self::Error>;
}

impl<T: RawHidChannel + ?Sized> RawHidChannel for &T {
    type Error = T::Error;

    fn read_report(&self, buf: &mut [u8], timeout: Option<Duration>) -> Result<usize, Self::Error> {
        (**self).read_report(buf, timeout)
    }

    fn send_feature_report(&self, data: &[u8]) -> Result<(), Self::Error> {
        (**self).send_feature_report(data)
    }
}
