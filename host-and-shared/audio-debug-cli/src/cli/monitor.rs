use anyhow::Context;
use audio_debug_device::Session;
use audio_debug_shared::DebugReport;
use console::style;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Wait for the device to be connected instead of failing right away
    #[arg(long)]
    wait: bool,

    /// Print every field of the report, not just the FIFO state
    #[arg(long, conflicts_with = "json")]
    full: bool,

    /// Print one JSON object per batch
    #[arg(long)]
    json: bool,
}

impl Args {
    fn format_batch(&self, report: &DebugReport) -> String {
        if self.json {
            serde_json::to_string(report).expect("DebugReport must serialise to JSON")
        } else if self.full {
            format!("{report}\n")
        } else {
            format!(
                "FIFO size:{} | FIFO count:{}",
                report.fifo_size, report.fifo_count
            )
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let mut session = Session::open(self.wait)
            .await
            .context("Error while opening the audio debug device")?;

        let result = session
            .run(|report, _history| println!("{}", self.format_batch(report)))
            .await;

        let history = session.close();
        if !history.is_empty() {
            tracing::debug!("{} FIFO samples collected", history.len());
        }

        if let Err(e) = result {
            println!("{}", style("Error").red());
            return Err(e).context("Error while reading debug reports");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> DebugReport {
        DebugReport {
            sample_rate: 48_000,
            alt_settings: 1,
            mute: [0, 0, 1],
            volume: [0, -2560, 0],
            fifo_size: 1536,
            fifo_count: 770,
            fifo_count_avg: 768,
        }
    }

    fn args(full: bool, json: bool) -> Args {
        Args {
            wait: false,
            full,
            json,
        }
    }

    #[test]
    fn test_default_line() {
        assert_eq!(
            args(false, false).format_batch(&report()),
            "FIFO size:1536 | FIFO count:770"
        );
    }

    #[test]
    fn test_full_output() {
        let text = args(true, false).format_batch(&report());
        assert!(text.starts_with("Sample rate: 48000 Hz\n"), "{text}");
        assert!(text.contains("Mute: [0, 0, 1]"), "{text}");
        assert!(text.ends_with("FIFO size:1536 | FIFO count:770 | FIFO avg:768\n"), "{text}");
    }

    #[test]
    fn test_json_output() {
        let line = args(false, true).format_batch(&report());
        assert!(!line.contains('\n'), "one object per line");
        let json: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "sample_rate": 48000,
                "alt_settings": 1,
                "mute": [0, 0, 1],
                "volume": [0, -2560, 0],
                "fifo_size": 1536,
                "fifo_count": 770,
                "fifo_count_avg": 768,
            })
        );
    }
}
