/// Splits a byte stream into text lines.
///
/// Lines end at `\n`, `\r` or `\r\n`. Progress meters redraw themselves with
/// a bare `\r`, so each redraw comes out as its own line.
#[derive(Debug, Default)]
pub struct LineSplitter {
  pending: Vec<u8>,
  after_carriage_return: bool,
}

impl LineSplitter {

  /// Feeds a chunk and returns every line it completed.
  pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
    let mut lines = vec![];

    for &byte in chunk {
      match byte {
        b'\n' if self.after_carriage_return => {
          // second half of a \r\n, the line was already emitted
          self.after_carriage_return = false;
        },

        b'\n' | b'\r' => {
          self.after_carriage_return = byte == b'\r';
          lines.push(self.take_pending());
        },

        other => {
          self.after_carriage_return = false;
          self.pending.push(other);
        }
      }
    }

    lines
  }

  /// Whatever is left once the stream has ended without a line break.
  pub fn finish(mut self) -> Option<String> {
    if self.pending.is_empty() {
      None
    } else {
      Some(self.take_pending())
    }
  }

  fn take_pending(&mut self) -> String {
    let line = String::from_utf8_lossy(&self.pending).into_owned();
    self.pending.clear();
    line
  }
}
