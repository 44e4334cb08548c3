use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::model::CsrsyncError;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise `--verbose` means debug and the
/// default is warn, so nothing is logged over the live display.
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<(), CsrsyncError> {
  let default_level = if verbose { "debug" } else { "warn" };
  let filter =
    EnvFilter::try_from_default_env()
      .unwrap_or_else(|_| EnvFilter::new(default_level));

  let builder =
    tracing_subscriber::fmt()
      .with_env_filter(filter)
      .with_target(false);

  let installed = match log_file {
    Some(path) => {
      let file =
        OpenOptions::new()
          .create(true)
          .append(true)
          .open(path)
          .map_err(|e| CsrsyncError::CouldNotOpenLogFile { path: path.to_path_buf(), source: e })?;

      builder
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
    },

    None => {
      builder
        .with_writer(std::io::stderr)
        .try_init()
    }
  };

  installed.map_err(|e| CsrsyncError::CouldNotStartLogging(e.to_string()))
}
