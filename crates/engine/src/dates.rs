//! Date tokenization for year-month period strings.
//!
//! Period values arrive as `"YYYY-MM"` (occasionally `"YYYY.MM"`) or are
//! absent entirely. Parsing is deliberately lenient: the documents must render
//! with blank date cells rather than fail when a period is malformed, so the
//! malformed branch here returns empty tokens instead of an error. Tests
//! assert on that branch directly.

/// Fixed label substituted for the departure row of an ongoing entry.
pub const ONGOING_MARKER: &str = "現在に至る";

/// Label used in period displays for an entry with no end date.
pub const PRESENT_LABEL: &str = "現在";

/// Year and month tokens for one table cell pair. Either token may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateTokens {
    pub year: String,
    pub month: String,
}

impl DateTokens {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Splits a `"YYYY-MM"` period string into year/month tokens.
///
/// Absent input → both tokens empty. Malformed input (wrong token count,
/// non-numeric parts) → both tokens empty, no error raised. An `is_ongoing`
/// flag on the entry does not change how its `start_period` tokenizes;
/// callers substitute [`ONGOING_MARKER`] instead of tokenizing `end_period`.
pub fn tokenize_period(period: Option<&str>) -> DateTokens {
    let Some(raw) = period else {
        return DateTokens::empty();
    };

    let parts: Vec<&str> = raw.trim().split(['-', '.']).collect();
    if parts.len() != 2 {
        // Lenient-parsing fallback: degrade to blank cells.
        return DateTokens::empty();
    }

    let (year, month) = (parts[0].trim(), parts[1].trim());
    let numeric =
        |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    if !numeric(year) || !numeric(month) {
        return DateTokens::empty();
    }

    DateTokens {
        year: year.to_string(),
        month: month.to_string(),
    }
}

/// Formats a period for inline display (`"2018年1月"`). Blank tokens collapse
/// to an empty string rather than a dangling unit suffix.
pub fn display_period(period: Option<&str>) -> String {
    let tokens = tokenize_period(period);
    if tokens.year.is_empty() || tokens.month.is_empty() {
        return String::new();
    }
    // Trim the leading zero from the month for display (04 → 4).
    let month = tokens.month.trim_start_matches('0');
    let month = if month.is_empty() { "0" } else { month };
    format!("{}年{}月", tokens.year, month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_well_formed_period() {
        let tokens = tokenize_period(Some("2020-04"));
        assert_eq!(tokens.year, "2020");
        assert_eq!(tokens.month, "04");
    }

    #[test]
    fn test_tokenize_dot_separated_period() {
        let tokens = tokenize_period(Some("2019.11"));
        assert_eq!(tokens.year, "2019");
        assert_eq!(tokens.month, "11");
    }

    #[test]
    fn test_tokenize_absent_period_is_blank() {
        assert_eq!(tokenize_period(None), DateTokens::empty());
    }

    #[test]
    fn test_tokenize_malformed_period_is_blank_not_error() {
        assert_eq!(tokenize_period(Some("notadate")), DateTokens::empty());
        assert_eq!(tokenize_period(Some("2020")), DateTokens::empty());
        assert_eq!(tokenize_period(Some("2020-04-01")), DateTokens::empty());
        assert_eq!(tokenize_period(Some("20xx-04")), DateTokens::empty());
        assert_eq!(tokenize_period(Some("-")), DateTokens::empty());
    }

    #[test]
    fn test_display_period_formats_and_trims_zero() {
        assert_eq!(display_period(Some("2018-01")), "2018年1月");
        assert_eq!(display_period(Some("2014-12")), "2014年12月");
    }

    #[test]
    fn test_display_period_blank_for_malformed() {
        assert_eq!(display_period(Some("soon")), "");
        assert_eq!(display_period(None), "");
    }
}
