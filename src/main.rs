use std::process::ExitCode;

use ansi_term::Colour::Red;
use args::cli;
use workflow::CsrsyncWorkflow;

mod args;
mod console;
mod copy;
mod logging;
mod model;
mod monitor;
mod progress;
mod size;
mod workflow;

#[tokio::main]
async fn main() -> ExitCode {
  let args = match cli::get_cli_args() {
    Ok(args) => args,
    Err(code) => return code
  };

  let result =
    match logging::init(args.verbose, args.log_file.as_deref()) {
      Ok(()) => CsrsyncWorkflow::new(args).run().await,
      Err(e) => Err(e)
    };

  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("{}", Red.paint(e.to_string()));
      ExitCode::from(1)
    }
  }
}
