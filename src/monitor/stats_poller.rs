use std::time::Duration;

use tracing::debug;

use crate::model::{SizeSnapshot, TransferRequest};
use crate::size::SizeProbe;
use super::OutputSender;

/// Keeps measuring the transfer and queueing size lines for the display.
pub struct StatsPoller<P> {
  request: TransferRequest,
  probe: P,
  interval: Duration,
}

impl<P: SizeProbe> StatsPoller<P> {

  pub fn new(request: TransferRequest, probe: P, interval: Duration) -> Self {
    Self {
      request,
      probe,
      interval
    }
  }

  /// Polls until a measurement fails or nobody is listening any more.
  ///
  /// A failed measurement is shown once and stops further updates. The copy
  /// itself is unaffected.
  pub async fn poll(self, sender: OutputSender) {
    let mut polls = 0_u64;

    loop {
      match SizeSnapshot::measure(&self.probe, &self.request).await {
        Ok(snapshot) => {
          polls += 1;
          if !sender.send_snapshot(&snapshot) {
            debug!(polls, "display closed, stopping stats poller");
            return
          }
        },

        Err(e) => {
          debug!(polls, error = %e, "disk usage query failed, stopping stats poller");
          sender.send_error(e);
          return
        }
      }

      if !self.interval.is_zero() {
        tokio::time::sleep(self.interval).await
      }
    }
  }
}
