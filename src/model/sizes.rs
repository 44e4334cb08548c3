pub const KB: u64 = 1024;
pub const MB: u64 = 1048576;

/// Bytes as megabytes with two decimals, without a unit suffix.
pub fn megabytes(size: u64) -> String {
  format!("{:.2}", size as f64 / MB as f64)
}
