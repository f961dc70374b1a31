use anyhow::Context;
use log::{error, LevelFilter};
use sqlprobe::ProbeConfig;

// Fixed at info: the version line and fatal errors must always be printed.
fn init_logging() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .try_init()
        .context("failed to initialise logger")
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    // The probe is closed inside run(), so exiting here leaks nothing.
    if let Err(err) = sqlprobe::run(&ProbeConfig::default()) {
        error!("{}", err);
        std::process::exit(err.exit_code());
    }

    Ok(())
}
