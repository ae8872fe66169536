/// Input validation utilities for scope service
///
/// The derive-based length checks on the request model cannot catch inputs
/// that satisfy the length bounds with whitespace alone, so blankness is
/// checked separately.

/// True if the value contains at least one non-whitespace character
pub fn has_content(value: &str) -> bool {
    !value.trim().is_empty()
}
