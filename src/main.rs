use anyhow::Result;
use tracing::info;

use hexsolve_gtp::GtpEngine;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("hexsolve starting");

    let gfx = std::env::args().any(|a| a == "--gtp-gfx");
    let mut engine = GtpEngine::new();
    engine.set_gfx(gfx);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    engine.run(stdin.lock(), stdout.lock())?;

    info!("hexsolve shutting down");
    Ok(())
}
