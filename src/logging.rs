use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::error::Result;

/// Sends tracing output to `log_file`, appending. `RUST_LOG` overrides the
/// default `info` level.
pub fn init(log_file: &Path) -> Result<()> {
    if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    if let Err(err) = installed {
        debug!(%err, "keeping the subscriber that was already installed");
    }

    Ok(())
}
