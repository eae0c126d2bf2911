//! Clock access for document timestamps.
//!
//! The `grid` crate is deliberately clock-free; the client supplies epoch
//! milliseconds at the load/save boundaries.

/// Current time in epoch milliseconds. Zero on the server, where the value
/// is never persisted.
#[must_use]
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}
