//! Go-style duration strings ("1m30s", "500ms", "1.5h") to milliseconds.

use std::sync::LazyLock;

use regex::Regex;

static SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d*)?|\.\d+)(ns|us|µs|μs|ms|s|m|h)").expect("valid duration regex")
});

/// Parses a duration string into whole milliseconds, truncating.
///
/// Returns `None` for anything that is not a well-formed, non-negative
/// duration. A bare `"0"` is accepted.
pub fn parse_duration_ms(raw: &str) -> Option<u64> {
    let s = raw.trim();
    let s = s.strip_prefix('+').unwrap_or(s);
    if s == "0" {
        return Some(0);
    }
    if s.is_empty() {
        return None;
    }

    let mut consumed = 0;
    let mut total_ns = 0f64;
    for caps in SEGMENT.captures_iter(s) {
        let whole = caps.get(0)?;
        // segments must be contiguous, no junk in between
        if whole.start() != consumed {
            return None;
        }
        consumed = whole.end();

        let value: f64 = caps[1].parse().ok()?;
        let unit_ns = match &caps[2] {
            "ns" => 1.0,
            "us" | "µs" | "μs" => 1e3,
            "ms" => 1e6,
            "s" => 1e9,
            "m" => 60e9,
            "h" => 3600e9,
            _ => return None,
        };
        total_ns += value * unit_ns;
    }

    if consumed != s.len() || !total_ns.is_finite() {
        return None;
    }
    Some((total_ns / 1e6) as u64)
}
