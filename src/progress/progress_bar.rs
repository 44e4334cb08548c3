use std::cmp::Ordering;

/// Number of cells between the brackets.
pub const BAR_WIDTH: usize = 50;

/// How many of the cells are filled for `copied` out of `total` bytes.
///
/// Ties round to the even cell. An empty source is already complete, and
/// the count never passes `BAR_WIDTH` even if the target outgrows the source.
pub fn filled_cells(copied: u64, total: u64) -> usize {
  if total == 0 {
    return BAR_WIDTH
  }

  let scaled = copied as u128 * BAR_WIDTH as u128;
  let total = total as u128;
  let (quotient, remainder) = (scaled / total, scaled % total);

  let cells =
    match (2 * remainder).cmp(&total) {
      Ordering::Greater => quotient + 1,
      Ordering::Equal => quotient + quotient % 2,
      Ordering::Less => quotient,
    };

  cells.min(BAR_WIDTH as u128) as usize
}

/// A fixed width ASCII bar such as `[=====     ]`.
pub fn progress_bar(copied: u64, total: u64) -> String {
  let filled = filled_cells(copied, total);
  format!("[{}{}]", "=".repeat(filled), " ".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn count_filled(bar: &str) -> usize {
      bar.chars().filter(|c| *c == '=').count()
    }

    #[test]
    fn empty_bar_when_nothing_copied() {
      let bar = progress_bar(0, 100);

      assert_eq!(count_filled(&bar), 0);
      assert_eq!(bar.len(), BAR_WIDTH + 2);
    }

    #[test]
    fn half_bar_at_half_way() {
      assert_eq!(count_filled(&progress_bar(50, 100)), 25)
    }

    #[test]
    fn full_bar_when_complete() {
      assert_eq!(progress_bar(100, 100), format!("[{}]", "=".repeat(BAR_WIDTH)))
    }

    #[test]
    fn never_overflows_when_target_is_larger() {
      assert_eq!(filled_cells(4196, 100), BAR_WIDTH)
    }

    #[test]
    fn empty_source_is_complete() {
      assert_eq!(filled_cells(0, 0), BAR_WIDTH)
    }

    #[test]
    fn rounds_ties_to_even() {
      assert_eq!(filled_cells(1, 100), 0);
      assert_eq!(filled_cells(3, 100), 2);
    }

    #[test]
    fn bar_keeps_fixed_width() {
      let bar = progress_bar(37, 100);

      assert_eq!(bar.len(), BAR_WIDTH + 2);
      assert!(bar.starts_with('['));
      assert!(bar.ends_with(']'));
    }
}
