#![cfg_attr(all(not(test), not(feature = "std")), no_std)]

mod report;

pub use crate::report::{DebugReport, MalformedRecord};

// TinyUSB example VID, PID has the audio (bit 4) and HID (bit 2) class bits set
// on top of the 0x4000 base, see the firmware's usb_descriptors.c
pub const USB_VID: u16 = 0xCAFE;
pub const USB_PID: u16 = 0x4014;

/// Number of audio channels on the RX side, the firmware's CFG_TUD_AUDIO_FUNC_1_N_CHANNELS_RX
pub const CHANNEL_COUNT: usize = 2;
/// Mute and volume carry one extra slot in front for the master channel
pub const CHANNEL_SLOTS: usize = CHANNEL_COUNT + 1;

/// Size of the packed debug record at the front of every report
pub const REPORT_SIZE: usize = 4 + 1 + CHANNEL_SLOTS + 2 * CHANNEL_SLOTS + 2 + 2 + 2;

/// Size of a single HID report as sent by the device. Everything past
/// `REPORT_SIZE` is padding.
pub const HID_REPORT_SIZE: usize = 64;

const _: () = assert!(REPORT_SIZE <= HID_REPORT_SIZE);
