use chrono::Local;
use regex::Regex;
use std::sync::LazyLock;

/// Layout of snapshot timestamps, e.g. `20240131_235959`
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

static UNSAFE_FILENAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_-]").expect("valid filename regex"));

/// Replaces every character outside `[A-Za-z0-9_-]` with `_`
pub fn sanitize_host(host: &str) -> String {
    UNSAFE_FILENAME_CHARS.replace_all(host, "_").into_owned()
}

/// Current local time as a snapshot timestamp
pub fn timestamp_now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
