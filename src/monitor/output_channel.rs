use std::fmt::Display;
use std::ops::{Deref, DerefMut};

use tokio::sync::mpsc::{self};

use crate::model::SizeSnapshot;

/// Producer side of the display queue. Cloned into every task that writes
/// lines for the display.
#[derive(Debug, Clone)]
pub struct OutputSender(mpsc::UnboundedSender<String>);

/// Consumer side of the display queue. Owned by the renderer.
#[derive(Debug)]
pub struct OutputReceiver(mpsc::UnboundedReceiver<String>);

pub fn output_channel() -> (OutputSender, OutputReceiver) {
  let (tx, rx) = mpsc::unbounded_channel::<String>();
  (OutputSender(tx), OutputReceiver(rx))
}

impl OutputSender {

  /// Queues a line with surrounding whitespace removed. Returns false once
  /// the receiver is gone.
  pub fn send_line<L: AsRef<str>>(&self, line: L) -> bool {
    self.0.send(line.as_ref().trim().to_owned()).is_ok()
  }

  /// Queues the summary line followed by the progress bar line.
  pub fn send_snapshot(&self, snapshot: &SizeSnapshot) -> bool {
    self.send_line(snapshot.to_string()) && self.send_line(snapshot.progress_bar())
  }

  pub fn send_error<E: Display>(&self, error: E) -> bool {
    self.send_line(format!("An error occurred: {error}"))
  }
}

impl Deref for OutputReceiver {
  type Target = mpsc::UnboundedReceiver<String>;

  fn deref(&self) -> &Self::Target {
      &self.0
  }
}

impl DerefMut for OutputReceiver {
  fn deref_mut(&mut self) -> &mut Self::Target {
      &mut self.0
  }
}
