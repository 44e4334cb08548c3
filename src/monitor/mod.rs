mod output_channel;
mod stats_poller;

pub use output_channel::{output_channel, OutputReceiver, OutputSender};
pub use stats_poller::StatsPoller;
