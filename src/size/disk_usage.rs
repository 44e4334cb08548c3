use std::path::{Path, PathBuf};
use std::process::Stdio;

use once_cell::sync::Lazy;
use regex::Regex;
use tokio::process::Command;

use crate::model::{SizeError, KB};
use super::SizeProbe;

static LEADING_SIZE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(\d+)(?:\s|$)").unwrap());

/// `du` on hosts whose `du` can report bytes directly (`-sb`).
#[derive(Debug, Clone)]
pub struct ByteDiskUsage {
  program: PathBuf,
}

/// `du` on hosts that only report kilobytes (`-sk`). Scaled to bytes.
#[derive(Debug, Clone)]
pub struct KilobyteDiskUsage {
  program: PathBuf,
}

/// The disk usage flavour for the current host, picked once at startup.
#[derive(Debug, Clone)]
pub enum HostDiskUsage {
  Bytes(ByteDiskUsage),
  Kilobytes(KilobyteDiskUsage),
}

impl ByteDiskUsage {
  const FLAG: &'static str = "-sb";

  pub fn new<P: AsRef<Path>>(program: P) -> Self {
    Self {
      program: program.as_ref().to_path_buf()
    }
  }
}

impl KilobyteDiskUsage {
  const FLAG: &'static str = "-sk";

  pub fn new<P: AsRef<Path>>(program: P) -> Self {
    Self {
      program: program.as_ref().to_path_buf()
    }
  }
}

impl HostDiskUsage {

  pub fn for_host<P: AsRef<Path>>(program: P) -> Self {
    if cfg!(target_os = "linux") {
      HostDiskUsage::Bytes(ByteDiskUsage::new(program))
    } else {
      HostDiskUsage::Kilobytes(KilobyteDiskUsage::new(program))
    }
  }
}

impl SizeProbe for ByteDiskUsage {
  async fn measure(&self, path: &Path) -> Result<u64, SizeError> {
    run_du(&self.program, Self::FLAG, path).await
  }
}

impl SizeProbe for KilobyteDiskUsage {
  async fn measure(&self, path: &Path) -> Result<u64, SizeError> {
    let kilobytes = run_du(&self.program, Self::FLAG, path).await?;
    Ok(kilobytes.saturating_mul(KB))
  }
}

impl SizeProbe for HostDiskUsage {
  async fn measure(&self, path: &Path) -> Result<u64, SizeError> {
    match self {
      HostDiskUsage::Bytes(du) => du.measure(path).await,
      HostDiskUsage::Kilobytes(du) => du.measure(path).await,
    }
  }
}

async fn run_du(program: &Path, flag: &str, path: &Path) -> Result<u64, SizeError> {
  let output =
    Command::new(program)
      .arg(flag)
      .arg(path)
      .stdin(Stdio::null())
      .kill_on_drop(true)
      .output()
      .await
      .map_err(|e| SizeError::CouldNotRun { program: program.to_path_buf(), source: e })?;

  if !output.status.success() {
    return Err(
      SizeError::Failed {
        program: program.to_path_buf(),
        path: path.to_path_buf(),
        status: output.status,
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
      }
    )
  }

  let stdout = String::from_utf8_lossy(&output.stdout);
  parse_leading_size(&stdout)
    .ok_or_else(|| SizeError::Unparseable { path: path.to_path_buf(), output: stdout.trim().to_owned() })
}

/// The first whitespace-delimited token of `du` output, as a number.
fn parse_leading_size(output: &str) -> Option<u64> {
  LEADING_SIZE
    .captures(output)
    .and_then(|c| c[1].parse::<u64>().ok())
}
