use crate::error::{with_last_error_mut, AgroError, AgroErrorCode};
use chrono::{Datelike, NaiveDate};
use std::ffi::CString;

/// Days from 0001-01-01 (CE day 1) to 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Set the thread-local error message and code.
/// Accepts any type implementing `AgroError` trait.
pub(crate) fn set_last_error(error: &impl AgroError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl AgroError) -> AgroErrorCode {
    tracing::debug!(code = ?error.code(), msg = error.msg(), "ffi call failed");
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
/// Called by every entry point on success.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = AgroErrorCode::Ok;
    });
}

/// Resolve a `Result` into an FFI return code, recording the failure if any.
pub(crate) fn handle_ffi_result<E: AgroError>(result: Result<(), E>) -> AgroErrorCode {
    match result {
        Ok(()) => {
            clear_last_error();
            AgroErrorCode::Ok
        }
        Err(error) => track_error(&error),
    }
}

/// Convert days since 1970-01-01 to a calendar date.
pub(crate) fn date_from_unix_days(days: i32) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(days.checked_add(UNIX_EPOCH_DAYS_FROM_CE)?)
}

/// Convert a calendar date to days since 1970-01-01.
pub(crate) fn unix_days_from_date(date: NaiveDate) -> i32 {
    date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE
}
