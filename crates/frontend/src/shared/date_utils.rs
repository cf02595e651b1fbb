/// Date formatting helpers for tables and detail views.
use chrono::{DateTime, Utc};

/// Render an optional timestamp for a table cell, DD/MM/YYYY.
pub fn cell_date(value: &Option<DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Same, with the time of day. Used where the hour matters (complaints).
pub fn cell_datetime(value: &Option<DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_dates() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).single();
        assert_eq!(cell_date(&dt), "15/03/2024");
        assert_eq!(cell_datetime(&dt), "15/03/2024 14:02");
    }

    #[test]
    fn missing_dates_render_as_dash() {
        assert_eq!(cell_date(&None), "-");
        assert_eq!(cell_datetime(&None), "-");
    }
}
