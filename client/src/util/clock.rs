//! Wall-clock helpers for message timestamps.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current time in epoch milliseconds.
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}

/// Locale time-of-day label shown under assistant messages.
pub fn time_label(ms: f64) -> String {
    #[cfg(feature = "csr")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(ms));
        String::from(date.to_locale_time_string("en-US"))
    }
    #[cfg(not(feature = "csr"))]
    {
        utc_time_label(ms)
    }
}

/// `HH:MM:SS` in UTC, used where no browser locale is available.
#[cfg_attr(feature = "csr", allow(dead_code))]
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn utc_time_label(ms: f64) -> String {
    let secs = (ms / 1000.0).floor() as i64;
    let of_day = secs.rem_euclid(86_400);
    format!("{:02}:{:02}:{:02}", of_day / 3600, (of_day % 3600) / 60, of_day % 60)
}
