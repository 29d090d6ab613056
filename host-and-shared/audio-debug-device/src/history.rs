use audio_debug_shared::DebugReport;
use std::collections::VecDeque;

pub const HISTORY_CAPACITY: usize = 1000;

/// FIFO fill levels of the most recent reports, oldest first.
#[derive(Debug, Clone)]
pub struct History {
    fifo_count_avg: VecDeque<u16>,
    fifo_count: VecDeque<u16>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

fn push_bounded(series: &mut VecDeque<u16>, value: u16) {
    if series.len() == HISTORY_CAPACITY {
        series.pop_front();
    }
    series.push_back(value);
}

impl History {
    pub fn new() -> Self {
        Self {
            fifo_count_avg: VecDeque::with_capacity(HISTORY_CAPACITY),
            fifo_count: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Records both FIFO levels of `report`, evicting the oldest entry once full.
    pub fn push(&mut self, report: &DebugReport) {
        push_bounded(&mut self.fifo_count_avg, report.fifo_count_avg);
        push_bounded(&mut self.fifo_count, report.fifo_count);
    }

    pub fn len(&self) -> usize {
        self.fifo_count.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fifo_count.is_empty()
    }

    pub fn fifo_count_avg(&self) -> impl ExactSizeIterator<Item = u16> + '_ {
        self.fifo_count_avg.iter().copied()
    }

    pub fn fifo_count(&self) -> impl ExactSizeIterator<Item = u16> + '_ {
        self.fifo_count.iter().copied()
    }
}
