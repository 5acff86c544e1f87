/// Return an iterator over the running totals of `changes`, applied over and
/// over again from the start.
///
/// The first item is always `0`, the total before any change has been applied.
/// After that, each item is the previous total plus the next change, wrapping
/// back to the first change after the last one. Given any changes at all, the
/// iterator only ends if a total would overflow `i64`; each total is computed
/// only when asked for. Given no changes, it produces only the initial `0`.
///
/// For example:
///
///     # extern crate chronal_calibration as cal;
///     # use cal::running::running_totals;
///     let totals = running_totals(&[1, -2, 3]);
///     assert_eq!(totals.take(7).collect::<Vec<_>>(), vec![0, 1, -1, 2, 3, 1, 4]);
pub fn running_totals(changes: &[i64]) -> RunningTotals {
    RunningTotals {
        changes,
        next: 0,
        total: None,
        steps: 0,
        overflowed: false,
    }
}

#[derive(Debug, Clone)]
pub struct RunningTotals<'a> {
    changes: &'a [i64],
    /// Index of the change to apply on the following call to `next`.
    next: usize,
    /// The most recently produced total, or `None` before the first.
    total: Option<i64>,
    steps: usize,
    overflowed: bool,
}

impl<'a> RunningTotals<'a> {
    /// The number of changes applied so far to reach the most recently
    /// produced total.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The number of complete passes over the changes made so far.
    pub fn cycles(&self) -> usize {
        if self.changes.is_empty() {
            0
        } else {
            self.steps / self.changes.len()
        }
    }

    /// True if iteration stopped because the next total didn't fit in an
    /// `i64`.
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }
}

impl<'a> Iterator for RunningTotals<'a> {
    type Item = i64;
    fn next(&mut self) -> Option<i64> {
        if self.overflowed {
            return None;
        }
        let total = match self.total {
            None => 0,
            Some(_) if self.changes.is_empty() => return None,
            Some(prev) => match prev.checked_add(self.changes[self.next]) {
                None => {
                    self.overflowed = true;
                    return None;
                }
                Some(sum) => {
                    self.next = (self.next + 1) % self.changes.len();
                    self.steps += 1;
                    sum
                }
            },
        };
        self.total = Some(total);
        Some(total)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_running_totals() {
        assert_eq!(
            running_totals(&[1, -2, 3, 1]).take(10).collect::<Vec<_>>(),
            vec![0, 1, -1, 2, 3, 4, 2, 5, 6, 7]
        );
        assert_eq!(
            running_totals(&[5]).take(4).collect::<Vec<_>>(),
            vec![0, 5, 10, 15]
        );
    }

    #[test]
    fn test_running_totals_empty() {
        assert_eq!(running_totals(&[]).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_running_totals_overflow() {
        let max = i64::max_value();
        let changes = [max, 1];
        let mut totals = running_totals(&changes);
        assert_eq!(totals.next(), Some(0));
        assert_eq!(totals.next(), Some(max));
        assert!(!totals.overflowed());
        assert_eq!(totals.next(), None);
        assert!(totals.overflowed());
        assert_eq!(totals.next(), None);
        assert_eq!(totals.steps(), 1);
    }

    #[test]
    fn test_steps_and_cycles() {
        let mut totals = running_totals(&[1, 1, 1]);
        assert_eq!(totals.steps(), 0);
        assert_eq!(totals.next(), Some(0));
        assert_eq!((totals.steps(), totals.cycles()), (0, 0));
        assert_eq!(totals.nth(2), Some(3));
        assert_eq!((totals.steps(), totals.cycles()), (3, 1));
        assert_eq!(totals.nth(3), Some(7));
        assert_eq!((totals.steps(), totals.cycles()), (7, 2));
    }
}
