use std::collections::HashSet;

use running::running_totals;
use CalibrationError;

/// The resulting frequency after applying every change once.
pub fn total(changes: &[i64]) -> i64 {
    changes.iter().sum()
}

/// The first running total reached twice, applying `changes` over and over.
///
/// The starting total of zero counts as reached. There is no limit on how many
/// passes over `changes` this will make; if no total ever repeats, it doesn't
/// return. The only way the search gives up is if a running total would
/// overflow `i64`.
pub fn first_repeat(changes: &[i64]) -> Result<i64, CalibrationError> {
    if changes.is_empty() {
        return Err(CalibrationError::EmptyInput);
    }

    let mut seen = HashSet::new();
    let mut totals = running_totals(changes);
    match totals.by_ref().find(|&total| !seen.insert(total)) {
        Some(repeat) => {
            debug!(
                "first repeat {} after {} steps ({} full cycles), {} distinct totals",
                repeat,
                totals.steps(),
                totals.cycles(),
                seen.len()
            );
            Ok(repeat)
        }
        None => {
            debug_assert!(totals.overflowed());
            Err(CalibrationError::Overflow { steps: totals.steps() })
        }
    }
}
