use crate::error::{Result, ScrapeError};
use url::Url;

/// Turns user input into a fully-qualified URL.
///
/// Input without an `http://` or `https://` prefix gets `https://` prepended.
/// Nothing else is validated here; a malformed result surfaces later as a
/// fetch failure.
pub fn normalize_input(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ScrapeError::InvalidInput("please enter a URL".to_string()));
    }

    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("https://{}", trimmed))
    }
}

/// Resolves `reference` against `base` (RFC 3986).
///
/// Returns `None` when the base is not an absolute URL or the reference
/// cannot be joined, so callers never see a relative result.
pub fn resolve(base: &str, reference: &str) -> Option<String> {
    let base = Url::parse(base).ok()?;
    resolve_against(&base, reference)
}

/// Same as [`resolve`] with an already parsed base.
pub fn resolve_against(base: &Url, reference: &str) -> Option<String> {
    let reference = clean_reference(reference);

    // Absolute references are returned as written, minus stray whitespace
    if Url::parse(&reference).is_ok() {
        return Some(reference);
    }

    match base.join(&reference) {
        Ok(joined) => Some(joined.to_string()),
        Err(e) => {
            ::log::debug!("Cannot resolve {:?} against {}: {}", reference, base, e);
            None
        }
    }
}

/// Strips leading/trailing C0 controls and spaces, and drops tab, CR and LF
/// anywhere, the same way the URL parser does before resolving.
fn clean_reference(reference: &str) -> String {
    reference
        .trim_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .collect()
}

/// Network location of `url`: the host plus an explicit port, if any.
///
/// User info is never included. Unparseable input yields an empty string.
pub fn host_of(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return String::new();
    };

    match (parsed.host_str(), parsed.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    }
}
