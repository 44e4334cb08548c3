use ::console::Term;
use tracing::{debug, warn};

use crate::args::cli::Args;
use crate::console::{DisplayRenderer, RenderOutcome};
use crate::copy::TransferRunner;
use crate::model::{CsrsyncError, TransferRequest};
use crate::monitor::{output_channel, StatsPoller};
use crate::size::HostDiskUsage;

pub struct CsrsyncWorkflow {
  args: Args
}

impl CsrsyncWorkflow {

  pub fn new(args: Args) -> Self {
    Self {
      args
    }
  }

  pub async fn run(self) -> Result<(), CsrsyncError> {
    let args = self.args;

    let request = TransferRequest::new(&args.source, &args.destination_dir)?;
    // Must exist before the copy starts or anything gets measured
    request.prepare_destination()?;

    debug!(
      source = %request.source().display(),
      destination = %request.destination_dir().display(),
      target = %request.target_path().display(),
      "starting transfer"
    );

    let probe = HostDiskUsage::for_host(&args.du);
    let (tx, mut rx) = output_channel();

    let runner = TransferRunner::new(&args.rsync, request.clone(), probe.clone());
    let runner_handle = tokio::spawn(runner.run(tx.clone()));

    // Never joined, it goes away with the runtime
    let poller = StatsPoller::new(request, probe, args.poll_interval());
    tokio::spawn(poller.poll(tx));

    let mut term = Term::stdout();
    let width = term.size_checked().map(|(_, columns)| columns as usize);
    let mut renderer = DisplayRenderer::new(args.idle_timeout(), width);

    match renderer.render(&mut rx, &mut term, || !runner_handle.is_finished()).await {
      Ok(RenderOutcome::Finished) => (),
      Ok(RenderOutcome::Idle) => debug!("display went idle before the copy finished"),
      Err(e) => warn!(error = %e, "could not write to the terminal"),
    }

    // Closes the queue so the stats poller stops at its next send
    drop(rx);

    // The copy always runs to completion, whether or not it is still shown
    if let Err(e) = runner_handle.await {
      warn!(error = %e, "copy task did not complete");
    }

    Ok(())
  }
}
