use std::fmt;

use crate::progress;
use crate::size::SizeProbe;
use super::{megabytes, SizeError, TransferRequest};

/// One point-in-time measurement of a transfer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeSnapshot {
  total_bytes: u64,
  copied_bytes: u64,
}

impl SizeSnapshot {

  pub fn new(total_bytes: u64, copied_bytes: u64) -> Self {
    Self {
      total_bytes,
      copied_bytes
    }
  }

  /// Measures the source and whatever has arrived at the target path so far.
  pub async fn measure<P: SizeProbe>(probe: &P, request: &TransferRequest) -> Result<Self, SizeError> {
    let total_bytes = probe.measure(request.source()).await?;

    // Nothing has been copied until the copy program creates the target
    let copied_bytes =
      if tokio::fs::try_exists(request.target_path()).await.unwrap_or(false) {
        probe.measure(request.target_path()).await?
      } else {
        0
      };

    Ok(Self::new(total_bytes, copied_bytes))
  }

  pub fn total_bytes(&self) -> u64 {
    self.total_bytes
  }

  pub fn copied_bytes(&self) -> u64 {
    self.copied_bytes
  }

  pub fn remaining_bytes(&self) -> u64 {
    self.total_bytes.saturating_sub(self.copied_bytes)
  }

  pub fn progress_bar(&self) -> String {
    progress::progress_bar(self.copied_bytes, self.total_bytes)
  }
}

impl fmt::Display for SizeSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
          f,
          "Total size: {} MB | Copied: {} MB | Remaining: {} MB",
          megabytes(self.total_bytes),
          megabytes(self.copied_bytes),
          megabytes(self.remaining_bytes())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MB;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    struct FixedSizes(HashMap<PathBuf, u64>);

    impl SizeProbe for FixedSizes {
      async fn measure(&self, path: &Path) -> Result<u64, SizeError> {
        Ok(self.0.get(path).copied().unwrap_or(0))
      }
    }

    #[test]
    fn formats_summary_line() {
      let snapshot = SizeSnapshot::new(2 * MB, MB);

      assert_eq!(snapshot.to_string(), "Total size: 2.00 MB | Copied: 1.00 MB | Remaining: 1.00 MB")
    }

    #[test]
    fn remaining_never_goes_below_zero() {
      let snapshot = SizeSnapshot::new(100, 4196);

      assert_eq!(snapshot.remaining_bytes(), 0)
    }

    #[tokio::test]
    async fn copied_is_zero_before_target_exists() {
      let work = tempdir().unwrap();
      let source = work.path().join("b.txt");
      fs::write(&source, "hello").unwrap();
      let destination = work.path().join("out");
      let request = TransferRequest::new(&source, &destination).unwrap();

      let probe =
        FixedSizes(
          HashMap::from([
            (source.clone(), 3 * MB),
            (destination.join("b.txt"), MB)
          ])
        );

      let snapshot = SizeSnapshot::measure(&probe, &request).await.unwrap();

      assert_eq!(snapshot, SizeSnapshot::new(3 * MB, 0))
    }

    #[tokio::test]
    async fn measures_target_once_it_exists() {
      let work = tempdir().unwrap();
      let source = work.path().join("b.txt");
      fs::write(&source, "hello").unwrap();
      let destination = work.path().join("out");
      fs::create_dir(&destination).unwrap();
      fs::write(destination.join("b.txt"), "he").unwrap();
      let request = TransferRequest::new(&source, &destination).unwrap();

      let probe =
        FixedSizes(
          HashMap::from([
            (source.clone(), 3 * MB),
            (destination.join("b.txt"), MB)
          ])
        );

      let snapshot = SizeSnapshot::measure(&probe, &request).await.unwrap();

      assert_eq!(snapshot.copied_bytes(), MB);
      assert_eq!(snapshot.remaining_bytes(), 2 * MB);
    }
}
