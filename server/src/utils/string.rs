//! String utility functions

/// Trim a borrowed optional string, treating blank input as absent.
///
/// Query strings like `?location=` or `?search=%20` arrive as `Some("")`;
/// callers want those to behave exactly like a missing parameter.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
