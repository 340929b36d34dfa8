use agro_engine_core::InputError;
use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// Gives every failure an error code for the return value and a message for
/// `agro_get_last_error`.
///
/// # Example
/// ```rust,ignore
/// let err = DefaultAgroError::null_pointer("out_estimate");
/// assert_eq!(err.code(), AgroErrorCode::NullPointer);
/// assert_eq!(err.msg(), "Parameter 'out_estimate' cannot be null");
/// ```
pub(crate) trait AgroError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> AgroErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `AgroError` for the FFI entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultAgroError {
    code: AgroErrorCode,
    msg: String,
}

impl DefaultAgroError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"out_window"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: AgroErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for a parameter that cannot be used as given.
    ///
    /// # Arguments
    /// * `param_name` - The offending parameter (e.g., `"crop_name"`)
    /// * `message` - A description of the problem
    pub fn invalid_parameter(param_name: &str, message: &str) -> Self {
        Self {
            code: AgroErrorCode::InvalidParameter,
            msg: format!("Parameter {param_name}: {message}"),
        }
    }

    /// Create error for data rejected by input validation.
    pub fn invalid_input(error: &InputError) -> Self {
        Self {
            code: AgroErrorCode::InvalidInput,
            msg: error.to_string(),
        }
    }
}

impl AgroError for DefaultAgroError {
    fn code(&self) -> AgroErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by engine functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgroErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Invalid parameter: a scalar or string argument cannot be used
    /// (e.g. a crop name that is not UTF-8, a day number out of range).
    InvalidParameter = 2,

    /// Invalid input data: the temperature series failed validation
    /// (non-finite value or dates not strictly ascending).
    InvalidInput = 3,
}

impl From<DefaultAgroError> for AgroErrorCode {
    fn from(error: DefaultAgroError) -> Self {
        error.code
    }
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The CString is stored here so the pointer handed out stays valid.
    static LAST_ERROR: RefCell<(Option<CString>, AgroErrorCode)> = const { RefCell::new((None, AgroErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, AgroErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, AgroErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last call on this thread failed.
/// - `null` if the last call succeeded.
///
/// # Lifetime
/// The returned pointer is valid until the next engine call on this thread.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// AgroPlantingWindow window;
/// AgroErrorCode err = agro_planting_window(days, len, "Maize", &window);
/// if (err != Ok) {
///     const char* error = agro_get_last_error();
///     if (error) {
///         printf("Planting window failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn agro_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code for this thread.
#[no_mangle]
pub extern "C" fn agro_get_last_error_code() -> AgroErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
