use std::io::{self, Write};
use std::time::Duration;

use tokio::time::timeout;
use tracing::debug;

use crate::monitor::OutputReceiver;
use super::DisplayState;

/// Why rendering stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
  /// The transfer ended and the final frame was written.
  Finished,
  /// Nothing arrived within the idle timeout. The last frame was left as is.
  Idle,
}

/// Redraws the four line block in place for every line on the queue.
pub struct DisplayRenderer {
  state: DisplayState,
  idle_timeout: Duration,
  width: Option<usize>,
}

impl DisplayRenderer {

  pub fn new(idle_timeout: Duration, width: Option<usize>) -> Self {
    Self {
      state: DisplayState::default(),
      idle_timeout,
      width
    }
  }

  pub fn state(&self) -> &DisplayState {
    &self.state
  }

  /// Consumes the queue until the transfer is over or goes quiet.
  ///
  /// `transfer_active` is asked after every line and on every timeout. Once
  /// it says no, whatever is already queued is folded in and one final frame
  /// is written. A timeout while the transfer is still active stops the
  /// display without a final frame.
  pub async fn render<W: Write, F: Fn() -> bool>(&mut self, rx: &mut OutputReceiver, out: &mut W, transfer_active: F) -> io::Result<RenderOutcome> {
    let mut frames = 0_u64;

    loop {
      let line =
        match timeout(self.idle_timeout, rx.recv()).await {
          Ok(Some(line)) => line,

          // every producer is gone, so the transfer is too
          Ok(None) => return self.finish(rx, out, frames),

          // the last lines may have arrived just before the transfer ended
          Err(_) if !transfer_active() => return self.finish(rx, out, frames),

          Err(_) => {
            debug!(frames, idle_timeout = ?self.idle_timeout, "no output within idle timeout, display stopped");
            return Ok(RenderOutcome::Idle)
          }
        };

      self.state.accept(line);

      if !transfer_active() {
        return self.finish(rx, out, frames)
      }

      out.write_all(self.state.active_frame(self.width).as_bytes())?;
      out.flush()?;
      frames += 1;
    }
  }

  fn finish<W: Write>(&mut self, rx: &mut OutputReceiver, out: &mut W, frames: u64) -> io::Result<RenderOutcome> {
    while let Ok(line) = rx.try_recv() {
      self.state.accept(line);
    }

    out.write_all(self.state.final_frame(self.width).as_bytes())?;
    out.flush()?;
    debug!(frames = frames + 1, "transfer finished, final frame written");

    Ok(RenderOutcome::Finished)
  }
}
