use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Setup failures. Any of these ends the run with exit code 1.
#[derive(Error, Debug)]
pub enum CsrsyncError {
  #[error("Source file or directory does not exist: {}", .0.display())]
  SourceMissing(PathBuf),

  #[error("Permission denied: Could not create destination directory: {}", .0.display())]
  DestinationPermissionDenied(PathBuf),

  #[error("An error occurred while creating the destination directory '{}': {source}", .path.display())]
  CouldNotCreateDestination {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("Could not open log file '{}': {source}", .path.display())]
  CouldNotOpenLogFile {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("Could not start logging: {0}")]
  CouldNotStartLogging(String),
}

/// Failures of a single disk usage query.
#[derive(Error, Debug)]
pub enum SizeError {
  #[error("could not run '{}': {source}", .program.display())]
  CouldNotRun {
    program: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("'{}' failed for '{}' ({status}): {stderr}", .program.display(), .path.display())]
  Failed {
    program: PathBuf,
    path: PathBuf,
    status: ExitStatus,
    stderr: String,
  },

  #[error("could not read a size for '{}' from '{output}'", .path.display())]
  Unparseable {
    path: PathBuf,
    output: String,
  },
}
