//! Advisory check of a chosen planting date against the resolved window.

use chrono::NaiveDate;

use crate::agronomy::planting_window::PlantingWindow;

/// Whether `candidate` falls inside the planting window (inclusive).
///
/// No window means no recommendation, so the answer is `false`. Dates past
/// the end of the supplied series are outside the window and also `false`.
#[inline]
pub fn is_favorable(candidate: NaiveDate, window: Option<&PlantingWindow>) -> bool {
    window.is_some_and(|w| w.contains(candidate))
}
