use audio_debug_shared::MalformedRecord;
use std::future::Future;
use std::time::Duration;

mod history;
mod session;
mod usb;

pub use history::{History, HISTORY_CAPACITY};
pub use session::{Session, BATCH_SIZE, READ_TIMEOUT};
pub use usb::UsbReportSource;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No audio debug device connected (is the firmware built with CFG_AUDIO_DEBUG=1?)")]
    DeviceUnavailable,
    #[error("Audio debug device disconnected")]
    Disconnected,
    #[error("Reading debug reports is only supported on Linux, not on {0}")]
    UnsupportedPlatform(&'static str),
    #[error("The device doesn't expose a HID interface with an interrupt IN endpoint")]
    NoHidInterface,
    #[error("USB error while {0}")]
    UsbError(&'static str, #[source] nusb::Error),
    #[error("USB transfer error while {0}")]
    UsbTransferError(&'static str, #[source] nusb::transfer::TransferError),
    #[error("Can't read the active USB configuration")]
    Configuration(#[from] nusb::descriptors::ActiveConfigurationError),
    #[error(transparent)]
    MalformedRecord(#[from] MalformedRecord),
}

/// Anything debug reports can be read from. A read that times out or comes up
/// short returns whatever it got, possibly nothing; decoding decides whether
/// that's usable.
pub trait ReportSource {
    fn read_report(&mut self, timeout: Duration) -> impl Future<Output = Result<Vec<u8>, Error>>;
}
