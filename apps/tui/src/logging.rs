use color_eyre::eyre::eyre;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log lines go. The interactive UI owns the terminal, so it logs to a
/// file; headless runs log to stderr next to their output.
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
}

pub fn init_logging(debug: bool, target: LogTarget<'_>) -> color_eyre::eyre::Result<()> {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match target {
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
    };

    result.map_err(|error| eyre!("Failed to initialise logging: {error}"))
}
