mod disk_usage;
mod size_probe;

pub use disk_usage::HostDiskUsage;
pub use size_probe::SizeProbe;
