use crate::{CHANNEL_SLOTS, REPORT_SIZE};
use core::fmt;

// Field offsets within the record. All multi-byte fields are little-endian.
// They coincide with the natural alignment of the firmware's C struct, which is
// why there's no padding to skip: volume starts at 8, already 2-aligned.
const SAMPLE_RATE: usize = 0;
const ALT_SETTINGS: usize = 4;
const MUTE: usize = 5;
const VOLUME: usize = MUTE + CHANNEL_SLOTS;
const FIFO_SIZE: usize = VOLUME + 2 * CHANNEL_SLOTS;
const FIFO_COUNT: usize = FIFO_SIZE + 2;
const FIFO_COUNT_AVG: usize = FIFO_COUNT + 2;

const _: () = assert!(FIFO_COUNT_AVG + 2 == REPORT_SIZE);

#[derive(Debug, Eq, PartialEq, Copy, Clone, thiserror::Error)]
#[error("Malformed debug report: expected at least {expected} bytes, got {actual}")]
pub struct MalformedRecord {
    pub expected: usize,
    pub actual: usize,
}

/// Debug snapshot of the audio function, as reported by the firmware over HID.
///
/// Index 0 of `mute` and `volume` is the master channel, the rest follow
/// channel numbers.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct DebugReport {
    pub sample_rate: u32,
    pub alt_settings: u8,
    pub mute: [i8; CHANNEL_SLOTS],
    pub volume: [i16; CHANNEL_SLOTS],
    pub fifo_size: u16,
    pub fifo_count: u16,
    pub fifo_count_avg: u16,
}

fn u16_at(buf: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([buf[offset], buf[offset + 1]])
}

fn i16_at(buf: &[u8], offset: usize) -> i16 {
    i16::from_le_bytes([buf[offset], buf[offset + 1]])
}

fn u32_at(buf: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([buf[offset], buf[offset + 1], buf[offset + 2], buf[offset + 3]])
}

impl DebugReport {
    /// Decodes the record from the front of `buf`.
    ///
    /// Trailing bytes are ignored since the device pads the record up to a full
    /// HID report. Anything shorter than `REPORT_SIZE` is rejected as a whole.
    pub fn decode(buf: &[u8]) -> Result<Self, MalformedRecord> {
        if buf.len() < REPORT_SIZE {
            return Err(MalformedRecord {
                expected: REPORT_SIZE,
                actual: buf.len(),
            });
        }

        let mut mute = [0i8; CHANNEL_SLOTS];
        for (i, slot) in mute.iter_mut().enumerate() {
            *slot = buf[MUTE + i] as i8;
        }

        let mut volume = [0i16; CHANNEL_SLOTS];
        for (i, slot) in volume.iter_mut().enumerate() {
            *slot = i16_at(buf, VOLUME + 2 * i);
        }

        Ok(Self {
            sample_rate: u32_at(buf, SAMPLE_RATE),
            alt_settings: buf[ALT_SETTINGS],
            mute,
            volume,
            fifo_size: u16_at(buf, FIFO_SIZE),
            fifo_count: u16_at(buf, FIFO_COUNT),
            fifo_count_avg: u16_at(buf, FIFO_COUNT_AVG),
        })
    }

    pub fn encode(&self) -> [u8; REPORT_SIZE] {
        let mut buf = [0u8; REPORT_SIZE];

        buf[SAMPLE_RATE..SAMPLE_RATE + 4].copy_from_slice(&self.sample_rate.to_le_bytes());
        buf[ALT_SETTINGS] = self.alt_settings;
        for (i, m) in self.mute.iter().enumerate() {
            buf[MUTE + i] = *m as u8;
        }
        for (i, v) in self.volume.iter().enumerate() {
            let offset = VOLUME + 2 * i;
            buf[offset..offset + 2].copy_from_slice(&v.to_le_bytes());
        }
        buf[FIFO_SIZE..FIFO_SIZE + 2].copy_from_slice(&self.fifo_size.to_le_bytes());
        buf[FIFO_COUNT..FIFO_COUNT + 2].copy_from_slice(&self.fifo_count.to_le_bytes());
        buf[FIFO_COUNT_AVG..FIFO_COUNT_AVG + 2].copy_from_slice(&self.fifo_count_avg.to_le_bytes());

        buf
    }
}

impl fmt::Display for DebugReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sample rate: {} Hz", self.sample_rate)?;
        writeln!(f, "Alt setting: {}", self.alt_settings)?;
        writeln!(f, "Mute: {:?}", self.mute)?;
        writeln!(f, "Volume: {:?}", self.volume)?;
        write!(
            f,
            "FIFO size:{} | FIFO count:{} | FIFO avg:{}",
            self.fifo_size, self.fifo_count, self.fifo_count_avg
        )
    }
}
