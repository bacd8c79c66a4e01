//! Record flag evaluation

/// Whether a resolved `record` value enables recording
///
/// Launch arguments are string-typed; recording is enabled only by the exact
/// value "true". Anything else, including "1" and "True", leaves it off.
pub fn record_enabled(value: &str) -> bool {
    value == "true"
}
