mod line_splitter;
mod transfer_runner;

pub use line_splitter::LineSplitter;
pub use transfer_runner::TransferRunner;
