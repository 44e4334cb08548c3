use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::{crate_name, Parser};

/// Copy a file or directory with rsync while watching how much has arrived
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
   /// Source file or directory to copy
   pub source: PathBuf,

   /// Destination directory to copy into. Created when it does not exist
   pub destination_dir: PathBuf,

   /// Verbose debug logging
   #[arg(long)]
   pub verbose: bool,

   /// Write log output to this file instead of stderr
   #[arg(long, env = "CSRSYNC_LOG_FILE")]
   pub log_file: Option<PathBuf>,

   /// The copy program to run
   #[arg(long, env = "CSRSYNC_RSYNC", default_value = "rsync")]
   pub rsync: PathBuf,

   /// The disk usage program used to measure progress
   #[arg(long, env = "CSRSYNC_DU", default_value = "du")]
   pub du: PathBuf,

   /// Stop refreshing the display after this many milliseconds without output.
   ///
   /// The copy itself keeps running until it is done.
   #[arg(long, default_value = "1000", value_parser = clap::value_parser!(u64).range(1..))]
   pub idle_timeout_ms: u64,

   /// Pause between disk usage measurements, in milliseconds
   #[arg(long, default_value = "0")]
   pub poll_interval_ms: u64,
}

impl Args {

  pub fn idle_timeout(&self) -> Duration {
    Duration::from_millis(self.idle_timeout_ms)
  }

  pub fn poll_interval(&self) -> Duration {
    Duration::from_millis(self.poll_interval_ms)
  }
}

/// Both ways of invoking the tool.
pub fn usage() -> String {
  let name = crate_name!();
  format!(
    "Usage: {name} <source_file_or_directory> <destination_directory>\n-or-\ncargo run -- <source_file_or_directory> <destination_directory>"
  )
}

/// Parses the command line. Help and version exit as usual; any other
/// problem prints the usage and asks for exit code 1.
pub fn get_cli_args() -> Result<Args, ExitCode> {
  parse_from(std::env::args_os())
}

fn parse_from<I, T>(args: I) -> Result<Args, ExitCode>
where
  I: IntoIterator<Item = T>,
  T: Into<std::ffi::OsString> + Clone,
{
  Args::try_parse_from(args)
    .or_else(|e| {
      match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => {
          eprintln!("{}", usage());
          Err(ExitCode::from(1))
        }
      }
    })
}
