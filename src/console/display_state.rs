use std::borrow::Cow;

use super::{CLEAR_TO_END_OF_LINE, CURSOR_TO_PREVIOUS_LINE};

/// Which line of the four line block a piece of output belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
  Stats,
  FileOutput,
  FilePercent,
  ProgressBar,
}

impl Slot {

  /// First match wins, so a stats line mentioning a percentage is still a
  /// stats line.
  pub fn classify(line: &str) -> Self {
    if line.contains("Total size:") {
      Slot::Stats
    } else if line.contains('[') && line.contains(']') {
      Slot::ProgressBar
    } else if line.contains('%') {
      Slot::FilePercent
    } else {
      Slot::FileOutput
    }
  }
}

/// The latest line seen for each slot.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DisplayState {
  stats: String,
  file_output: String,
  file_percent: String,
  progress_bar: String,
}

impl DisplayState {

  pub fn accept(&mut self, line: String) {
    match Slot::classify(&line) {
      Slot::Stats => self.stats = line,
      Slot::FileOutput => self.file_output = line,
      Slot::FilePercent => self.file_percent = line,
      Slot::ProgressBar => self.progress_bar = line,
    }
  }

  pub fn slot(&self, slot: Slot) -> &str {
    match slot {
      Slot::Stats => &self.stats,
      Slot::FileOutput => &self.file_output,
      Slot::FilePercent => &self.file_percent,
      Slot::ProgressBar => &self.progress_bar,
    }
  }

  /// A frame that leaves the cursor on the first line so the next frame
  /// draws over it.
  pub fn active_frame(&self, width: Option<usize>) -> String {
    format!("{}{}", self.block(width), CURSOR_TO_PREVIOUS_LINE.repeat(3))
  }

  /// The frame that stays on screen once the transfer is over.
  pub fn final_frame(&self, width: Option<usize>) -> String {
    format!("{}\n", self.block(width))
  }

  fn block(&self, width: Option<usize>) -> String {
    [Slot::Stats, Slot::FileOutput, Slot::FilePercent, Slot::ProgressBar]
      .iter()
      .map(|slot| format!("{}{}", Self::fit(self.slot(*slot), width), CLEAR_TO_END_OF_LINE))
      .collect::<Vec<_>>()
      .join("\n")
  }

  // A wrapped line would push the block down and break the redraw
  fn fit(line: &str, width: Option<usize>) -> Cow<'_, str> {
    match width {
      Some(columns) => ::console::truncate_str(line, columns.saturating_sub(1), ""),
      None => Cow::Borrowed(line),
    }
  }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_state() -> DisplayState {
      let mut state = DisplayState::default();
      state.accept("Total size: 1.00 MB | Copied: 0.50 MB | Remaining: 0.50 MB".to_owned());
      state.accept("b.txt".to_owned());
      state.accept("512 50%".to_owned());
      state.accept("[=====     ]".to_owned());
      state
    }

    #[test]
    fn classifies_stats_before_percent() {
      assert_eq!(Slot::classify("Total size: 1.00 MB | 50%"), Slot::Stats)
    }

    #[test]
    fn classifies_bracketed_lines_as_progress_bar() {
      assert_eq!(Slot::classify("[====    ]"), Slot::ProgressBar);
      assert_eq!(Slot::classify("[==  ] 40%"), Slot::ProgressBar);
    }

    #[test]
    fn classifies_percent_lines() {
      assert_eq!(Slot::classify("32,768  50%   31.25MB/s    0:00:00"), Slot::FilePercent)
    }

    #[test]
    fn classifies_everything_else_as_file_output() {
      assert_eq!(Slot::classify("sending incremental file list"), Slot::FileOutput);
      assert_eq!(Slot::classify("[only opening"), Slot::FileOutput);
      assert_eq!(Slot::classify(""), Slot::FileOutput);
    }

    #[test]
    fn newer_lines_overwrite_their_slot_only() {
      let mut state = filled_state();
      state.accept("c.txt".to_owned());

      assert_eq!(state.slot(Slot::FileOutput), "c.txt");
      assert_eq!(state.slot(Slot::FilePercent), "512 50%");
    }

    #[test]
    fn active_frame_moves_back_to_the_first_line() {
      let frame = filled_state().active_frame(None);

      assert_eq!(
        frame,
        "Total size: 1.00 MB | Copied: 0.50 MB | Remaining: 0.50 MB\x1b[K\nb.txt\x1b[K\n512 50%\x1b[K\n[=====     ]\x1b[K\x1b[F\x1b[F\x1b[F"
      )
    }

    #[test]
    fn final_frame_ends_with_a_cleared_line_and_no_cursor_movement() {
      let frame = filled_state().final_frame(None);

      assert_eq!(
        frame,
        "Total size: 1.00 MB | Copied: 0.50 MB | Remaining: 0.50 MB\x1b[K\nb.txt\x1b[K\n512 50%\x1b[K\n[=====     ]\x1b[K\n"
      );
      assert!(!frame.contains(CURSOR_TO_PREVIOUS_LINE));
    }

    #[test]
    fn empty_state_still_draws_four_lines() {
      assert_eq!(DisplayState::default().final_frame(None), "\x1b[K\n\x1b[K\n\x1b[K\n\x1b[K\n")
    }

    #[test]
    fn truncates_to_terminal_width() {
      let mut state = DisplayState::default();
      state.accept("a/very/long/path/to/some/file.txt".to_owned());

      let frame = state.final_frame(Some(7));

      assert_eq!(::console::strip_ansi_codes(&frame), "\na/very\n\n\n")
    }
}
