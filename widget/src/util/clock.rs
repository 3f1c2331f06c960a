//! Wall-clock access.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current unix time in milliseconds.
///
/// Uses `Date.now()` in the browser and the system clock elsewhere.
#[allow(clippy::cast_possible_truncation)]
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
    }
}
