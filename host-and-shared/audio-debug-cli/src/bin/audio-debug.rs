// single-threaded is plenty: there's one device and one blocking-style read loop
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    audio_debug_cli::run().await
}
