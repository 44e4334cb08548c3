use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tracing::debug;

use crate::model::{SizeSnapshot, TransferRequest};
use crate::monitor::OutputSender;
use crate::size::SizeProbe;
use super::LineSplitter;

/// Runs the copy program and forwards everything it prints to the display.
pub struct TransferRunner<P> {
  program: PathBuf,
  request: TransferRequest,
  probe: P,
}

impl<P: SizeProbe> TransferRunner<P> {

  pub fn new<R: AsRef<Path>>(program: R, request: TransferRequest, probe: P) -> Self {
    Self {
      program: program.as_ref().to_path_buf(),
      request,
      probe
    }
  }

  fn command(&self) -> Command {
    let mut command = Command::new(&self.program);
    command
      .arg("-av")
      .arg("--progress")
      .arg(self.request.source())
      .arg(self.request.destination_dir())
      .stdin(Stdio::null())
      .stdout(Stdio::piped())
      .stderr(Stdio::piped());

    command
  }

  /// Streams the copy program's output until it exits, then queues one last
  /// size snapshot.
  pub async fn run(self, sender: OutputSender) {
    let spawned = self.command().spawn();

    match spawned {
      Ok(mut child) => {
        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        let (stdout_result, stderr_result) =
          tokio::join!(
            forward_lines(stdout, &sender),
            forward_lines(stderr, &sender)
          );

        if let Err(e) = stdout_result.and(stderr_result) {
          debug!(error = %e, "reading copy output failed");
        }

        match child.wait().await {
          Ok(status) => debug!(%status, "copy program exited"),
          Err(e) => debug!(error = %e, "could not wait for copy program"),
        }
      },

      Err(e) => {
        debug!(program = %self.program.display(), error = %e, "could not start copy program");
        sender.send_error(format!("could not start '{}': {e}", self.program.display()));
      }
    }

    match SizeSnapshot::measure(&self.probe, &self.request).await {
      Ok(snapshot) => {
        sender.send_snapshot(&snapshot);
      },
      Err(e) => {
        sender.send_error(e);
      }
    }
  }
}

async fn forward_lines<R: AsyncRead + Unpin>(reader: Option<R>, sender: &OutputSender) -> io::Result<()> {
  let mut reader = match reader {
    Some(reader) => reader,
    None => return Ok(())
  };

  let mut splitter = LineSplitter::default();
  let mut buffer = vec![0; 8 * 1024];

  loop {
    let bytes_read = reader.read(&mut buffer).await?;
    if bytes_read == 0 {
      break
    }

    for line in splitter.push(&buffer[..bytes_read]) {
      sender.send_line(line);
    }
  }

  if let Some(line) = splitter.finish() {
    sender.send_line(line);
  }

  Ok(())
}
