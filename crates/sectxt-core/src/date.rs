//! RFC 5322 date lines.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::error::{Result, SecTxtError};

const DATE_LINE_PATTERN: &str =
    r"^[A-Za-z]{3}, \d{1,2} [A-Za-z]{3} \d{4} \d{2}:\d{2}:\d{2} [+-]\d{4}$";

fn date_line() -> Result<&'static Regex> {
    static RE: OnceLock<std::result::Result<Regex, regex::Error>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(DATE_LINE_PATTERN))
        .as_ref()
        .map_err(|e| SecTxtError::Internal(format!("date-line pattern: {e}")))
}

/// Whether `s` already has the `ddd, d Mon yyyy HH:MM:SS +zzzz` shape.
pub fn is_date_line(s: &str) -> Result<bool> {
    Ok(date_line()?.is_match(s))
}

/// Format in UTC, e.g. `Fri, 2 Jan 1970 13:14:15 +0000`.
pub fn format_rfc5322(t: &DateTime<Utc>) -> String {
    t.format("%a, %-d %b %Y %H:%M:%S +0000").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_unpadded_day_in_utc() {
        let t = Utc.with_ymd_and_hms(1970, 1, 2, 13, 14, 15).single();
        assert_eq!(
            t.map(|t| format_rfc5322(&t)).as_deref(),
            Some("Fri, 2 Jan 1970 13:14:15 +0000")
        );
    }

    #[test]
    fn pads_time_fields() {
        let t = Utc.with_ymd_and_hms(2031, 12, 25, 4, 5, 6).single();
        assert_eq!(
            t.map(|t| format_rfc5322(&t)).as_deref(),
            Some("Thu, 25 Dec 2031 04:05:06 +0000")
        );
    }

    #[test]
    fn date_line_grammar() {
        assert!(matches!(is_date_line("Fri, 2 Jan 1970 13:14:15 +0000"), Ok(true)));
        assert!(matches!(is_date_line("Thu, 31 Dec 2099 23:59:59 -0500"), Ok(true)));
        assert!(matches!(is_date_line("1970-01-02T13:14:15Z"), Ok(false)));
        assert!(matches!(is_date_line("Fri, 2 Jan 1970 13:14:15"), Ok(false)));
    }
}
