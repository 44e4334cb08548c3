use std::fs::DirBuilder;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::CsrsyncError;

/// What to copy and where to. Fixed for the lifetime of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferRequest {
  source: PathBuf,
  destination_dir: PathBuf,
  target_path: PathBuf,
}

impl TransferRequest {

  pub fn new<S: AsRef<Path>, D: AsRef<Path>>(source: S, destination_dir: D) -> Result<Self, CsrsyncError> {
    let source = source.as_ref().to_path_buf();
    let destination_dir = destination_dir.as_ref().to_path_buf();

    if !source.exists() {
      return Err(CsrsyncError::SourceMissing(source))
    }

    let target_path = Self::resolve_target_path(&source, &destination_dir);

    Ok(
      Self {
        source,
        destination_dir,
        target_path
      }
    )
  }

  /// The destination-side path whose size tells how much has been copied.
  ///
  /// A file lands inside the destination directory under its own name. A
  /// directory is measured through the destination directory itself.
  fn resolve_target_path(source: &Path, destination_dir: &Path) -> PathBuf {
    if source.is_file() {
      source
        .file_name()
        .map(|name| destination_dir.join(name))
        .unwrap_or_else(|| destination_dir.to_path_buf())
    } else {
      destination_dir.to_path_buf()
    }
  }

  pub fn source(&self) -> &Path {
    self.source.as_path()
  }

  pub fn destination_dir(&self) -> &Path {
    self.destination_dir.as_path()
  }

  pub fn target_path(&self) -> &Path {
    self.target_path.as_path()
  }

  /// Creates the destination directory (and any parents) if it is missing.
  pub fn prepare_destination(&self) -> Result<(), CsrsyncError> {
    if self.destination_dir.exists() {
      return Ok(())
    }

    DirBuilder::new()
      .recursive(true)
      .create(&self.destination_dir)
      .map_err(|e| {
        match e.kind() {
          ErrorKind::PermissionDenied => CsrsyncError::DestinationPermissionDenied(self.destination_dir.clone()),
          _ => CsrsyncError::CouldNotCreateDestination { path: self.destination_dir.clone(), source: e }
        }
      })
  }
}
