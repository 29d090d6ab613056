use crate::{Error, ReportSource};
use audio_debug_shared::{HID_REPORT_SIZE, USB_PID, USB_VID};
use nusb::transfer::{Direction, EndpointType, RequestBuffer, TransferError};
use std::time::Duration;
use tokio::time::{sleep, timeout};

const HID_CLASS: u8 = 0x03;

/// The HID interface is bound to the OS HID driver, and only on Linux can nusb
/// detach it. Elsewhere claiming the interface fails.
fn ensure_supported_platform() -> Result<(), Error> {
    if cfg!(target_os = "linux") {
        Ok(())
    } else {
        Err(Error::UnsupportedPlatform(std::env::consts::OS))
    }
}

pub struct UsbReportSource {
    // the device must outlive the claimed interface
    _device: nusb::Device,
    interface: nusb::Interface,
    endpoint: u8,
}

impl UsbReportSource {
    /// Opens the first connected device with the debug VID/PID. With `wait` set,
    /// keeps polling until one is plugged in instead of failing.
    pub async fn acquire(wait: bool) -> Result<Self, Error> {
        ensure_supported_platform()?;

        let mut first_attempt = true;

        loop {
            let connected_devices = nusb::list_devices()
                .map_err(|e| Error::UsbError("listing devices", e))?
                .filter(|di| di.vendor_id() == USB_VID && di.product_id() == USB_PID)
                .collect::<Vec<_>>();

            if connected_devices.is_empty() {
                if !wait {
                    return Err(Error::DeviceUnavailable);
                }
                if first_attempt {
                    eprintln!("No audio debug device detected, waiting for it to be connected");
                    first_attempt = false;
                }
                sleep(Duration::from_secs(1)).await;
                continue;
            }

            let first = &connected_devices[0];

            let n = connected_devices.len();
            if n > 1 {
                eprintln!(
                    "More than one audio debug device detected ({}), using {}",
                    n,
                    first.serial_number().unwrap_or("the first one")
                );
            }

            let device = first
                .open()
                .map_err(|e| Error::UsbError("opening the device", e))?;

            return Self::claim(device);
        }
    }

    fn claim(device: nusb::Device) -> Result<Self, Error> {
        let (interface_number, endpoint) = find_hid_endpoint(&device)?;
        tracing::debug!("Using HID interface {interface_number}, endpoint {endpoint:#04x}");

        // the kernel HID driver grabs the interface first, it has to be detached (Linux only)
        let interface = device
            .detach_and_claim_interface(interface_number)
            .map_err(|e| {
                Error::UsbError("detaching the kernel HID driver and claiming the interface", e)
            })?;

        Ok(Self {
            _device: device,
            interface,
            endpoint,
        })
    }
}

fn find_hid_endpoint(device: &nusb::Device) -> Result<(u8, u8), Error> {
    let configuration = device.active_configuration()?;

    configuration
        .interface_alt_settings()
        .filter(|alt| alt.class() == HID_CLASS)
        .find_map(|alt| {
            alt.endpoints()
                .find(|ep| {
                    ep.direction() == Direction::In && ep.transfer_type() == EndpointType::Interrupt
                })
                .map(|ep| (alt.interface_number(), ep.address()))
        })
        .ok_or(Error::NoHidInterface)
}

impl ReportSource for UsbReportSource {
    async fn read_report(&mut self, read_timeout: Duration) -> Result<Vec<u8>, Error> {
        let transfer = self
            .interface
            .interrupt_in(self.endpoint, RequestBuffer::new(HID_REPORT_SIZE));

        // dropping the transfer future on timeout cancels the transfer
        let completion = match timeout(read_timeout, transfer).await {
            Ok(completion) => completion,
            Err(_) => {
                tracing::debug!("HID read timed out after {read_timeout:?}");
                return Ok(Vec::new());
            }
        };

        match completion.status {
            Ok(()) => Ok(completion.data),
            Err(TransferError::Disconnected) => {
                tracing::error!("USB device disconnected");
                Err(Error::Disconnected)
            }
            Err(e) => Err(Error::UsbTransferError("reading a debug report", e)),
        }
    }
}
