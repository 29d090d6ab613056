use crate::history::History;
use crate::usb::UsbReportSource;
use crate::{Error, ReportSource};
use audio_debug_shared::DebugReport;
use std::time::Duration;

/// Reads per batch; the history is reported on once per batch.
pub const BATCH_SIZE: usize = 30;
pub const READ_TIMEOUT: Duration = Duration::from_millis(50);

/// One open debug device together with the FIFO history collected from it.
pub struct Session<S> {
    source: S,
    history: History,
}

impl Session<UsbReportSource> {
    pub async fn open(wait: bool) -> Result<Self, Error> {
        let source = UsbReportSource::acquire(wait).await?;
        tracing::info!("Audio debug device opened");
        Ok(Self::new(source))
    }
}

impl<S: ReportSource> Session<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            history: History::new(),
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Performs `BATCH_SIZE` reads, recording each decoded report.
    ///
    /// There's no retry: the first failed read or undecodable report ends the
    /// batch with an error. Returns the last report read.
    pub async fn read_batch(&mut self) -> Result<DebugReport, Error> {
        let mut last = self.read_one().await?;
        for _ in 1..BATCH_SIZE {
            last = self.read_one().await?;
        }

        Ok(last)
    }

    async fn read_one(&mut self) -> Result<DebugReport, Error> {
        let buf = self.source.read_report(READ_TIMEOUT).await?;
        let report = DebugReport::decode(&buf)?;
        self.history.push(&report);
        Ok(report)
    }

    /// Reads batches until something fails, calling `on_batch` after each one.
    pub async fn run<F>(&mut self, mut on_batch: F) -> Result<(), Error>
    where
        F: FnMut(&DebugReport, &History),
    {
        loop {
            let report = self.read_batch().await?;
            on_batch(&report, &self.history);
        }
    }

    /// Releases the source, handing back whatever history was collected.
    pub fn close(self) -> History {
        drop(self.source);
        self.history
    }
}
