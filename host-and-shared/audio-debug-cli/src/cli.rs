mod monitor;
mod sine;

#[derive(clap::Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Poll the device's debug HID reports and print the FIFO state.
    /// The firmware must be built with CFG_AUDIO_DEBUG=1.
    Monitor(monitor::Args),
    /// Print one period of a sine wave as a C array of int16_t samples
    Sine(sine::Args),
}

impl Command {
    pub async fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Monitor(cmd) => cmd.run().await,
            Command::Sine(cmd) => cmd.run(),
        }
    }
}
