use std::future::Future;
use std::path::Path;

use crate::model::SizeError;

/// Measures how many bytes a file or directory occupies.
pub trait SizeProbe {
  fn measure(&self, path: &Path) -> impl Future<Output = Result<u64, SizeError>> + Send;
}
