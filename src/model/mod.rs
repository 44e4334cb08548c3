mod csrsync_error;
mod size_snapshot;
mod sizes;
mod transfer_request;

pub use csrsync_error::{CsrsyncError, SizeError};
pub use size_snapshot::SizeSnapshot;
pub use sizes::{megabytes, KB, MB};
pub use transfer_request::TransferRequest;
