use std::path::Path;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Escape HTML special characters
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape HTML attribute values
pub fn escape_attr(text: &str) -> String {
    escape_html(text)
}

/// Serialize a JSON value so it can sit inside a `<script>` element
pub fn script_safe_json(value: &serde_json::Value) -> String {
    value.to_string().replace("</", "<\\/")
}

/// Normalize request path
pub fn normalize_path(path: &str) -> String {
    path.trim_matches('/').to_string()
}

/// Slugs are lowercase ASCII words joined by single dashes
pub fn is_url_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Parse a post date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339, and `YYYY-MM-DDTHH:MM:SS` without an
/// offset. Values without an offset are taken as UTC.
pub fn parse_date(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(dt.to_offset(UtcOffset::UTC));
    }
    let local = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    if let Ok(dt) = PrimitiveDateTime::parse(raw, local) {
        return Some(dt.assume_utc());
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .ok()
        .map(|d| d.midnight().assume_utc())
}

/// Long calendar form, e.g. "January 5, 2025". Unparseable input is returned as is.
pub fn format_long_date(raw: &str) -> String {
    parse_date(raw)
        .and_then(|dt| dt.format(format_description!("[month repr:long] [day padding:none], [year]")).ok())
        .unwrap_or_else(|| raw.to_string())
}

/// UTC timestamp with milliseconds, e.g. "2025-01-05T00:00:00.000Z".
/// Unparseable input is returned as is.
pub fn format_iso_date(raw: &str) -> String {
    parse_date(raw)
        .and_then(|dt| {
            dt.format(format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"))
                .ok()
        })
        .unwrap_or_else(|| raw.to_string())
}

/// Determine content type for a file based on its extension
pub fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|s| s.to_str()).map(|s| s.to_ascii_lowercase()) {
        Some(ref ext) if ext == "html" => "text/html; charset=utf-8",
        Some(ref ext) if ext == "css" => "text/css; charset=utf-8",
        Some(ref ext) if ext == "js" => "application/javascript; charset=utf-8",
        Some(ref ext) if ext == "json" => "application/json; charset=utf-8",
        Some(ref ext) if ext == "svg" => "image/svg+xml",
        Some(ref ext) if ext == "png" => "image/png",
        Some(ref ext) if ext == "jpg" || ext == "jpeg" => "image/jpeg",
        Some(ref ext) if ext == "gif" => "image/gif",
        Some(ref ext) if ext == "webp" => "image/webp",
        Some(ref ext) if ext == "ico" => "image/x-icon",
        Some(ref ext) if ext == "txt" => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_date_has_no_day_padding() {
        assert_eq!(format_long_date("2025-01-05"), "January 5, 2025");
        assert_eq!(format_long_date("2024-11-20T09:30:00Z"), "November 20, 2024");
    }

    #[test]
    fn iso_date_is_utc() {
        assert_eq!(format_iso_date("2025-01-05"), "2025-01-05T00:00:00.000Z");
        assert_eq!(format_iso_date("2025-01-05T02:00:00+05:30"), "2025-01-04T20:30:00.000Z");
        assert_eq!(format_iso_date("2025-01-05T08:15:00"), "2025-01-05T08:15:00.000Z");
        assert_eq!(format_iso_date("2024-11-20T09:30:00.25Z"), "2024-11-20T09:30:00.250Z");
    }

    #[test]
    fn unparseable_dates_pass_through() {
        assert!(parse_date("someday").is_none());
        assert_eq!(format_long_date("someday"), "someday");
    }

    #[test]
    fn slug_rules() {
        assert!(is_url_safe_slug("rust-in-production-2025"));
        assert!(!is_url_safe_slug("Has Space"));
        assert!(!is_url_safe_slug("-leading"));
        assert!(!is_url_safe_slug(""));
    }

    #[test]
    fn script_json_cannot_close_the_tag() {
        let value = serde_json::json!({ "headline": "</script><b>" });
        assert!(!script_safe_json(&value).contains("</script>"));
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_html("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }
}
