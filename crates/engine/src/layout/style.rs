//! Immutable style configuration shared by both layout engines.
//!
//! Constructed once per generation call and passed in explicitly — there is
//! no module-level mutable style state, so the two engines can be built and
//! tested independently.

/// Sizes are docx half-points (22 = 11pt); widths are twentieths of a point
/// (dxa; the standard A4 usable width with default margins is ~9640 dxa).
#[derive(Debug, Clone)]
pub struct DocStyle {
    pub title_size: usize,
    pub name_size: usize,
    pub heading_size: usize,
    pub body_size: usize,

    /// History / certification tables: year, month, free-text entry.
    pub year_col_dxa: usize,
    pub month_col_dxa: usize,
    pub entry_col_dxa: usize,

    /// Identity grid: label, value, photo frame.
    pub label_col_dxa: usize,
    pub value_col_dxa: usize,
    pub photo_col_dxa: usize,
}

impl Default for DocStyle {
    fn default() -> Self {
        Self {
            title_size: 44,
            name_size: 32,
            heading_size: 26,
            body_size: 21,
            year_col_dxa: 1100,
            month_col_dxa: 700,
            entry_col_dxa: 7200,
            label_col_dxa: 1600,
            value_col_dxa: 5400,
            photo_col_dxa: 2000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_columns_fit_a4_usable_width() {
        let style = DocStyle::default();
        assert!(style.year_col_dxa + style.month_col_dxa + style.entry_col_dxa <= 9640);
        assert!(style.label_col_dxa + style.value_col_dxa + style.photo_col_dxa <= 9640);
    }
}
