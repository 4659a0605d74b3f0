/// Client-side checks on the URL typed into the form
use url::Url;

/// Trim the raw input; `None` when nothing is left
pub fn normalize_input(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Whether the value parses as an absolute URL
///
/// Any scheme the WHATWG parser accepts passes (`ftp://`, `mailto:` ...).
/// The backend may still reject it.
pub fn is_valid_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}

/// What the input listener uses to enable or dim the submit control
pub fn accepts_input(raw: &str) -> bool {
    normalize_input(raw).is_some_and(|url| is_valid_url(&url))
}
