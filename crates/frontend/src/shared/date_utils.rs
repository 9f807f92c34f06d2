/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application

/// Format an optional timestamp for table cells; "-" when missing
pub fn format_optional_datetime(value: Option<&chrono::DateTime<chrono::Utc>>) -> String {
    value
        .map(|dt| dt.format("%d.%m.%Y %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_optional_datetime() {
        assert_eq!(format_optional_datetime(None), "-");
        let dt = chrono::DateTime::parse_from_rfc3339("2026-03-15T14:02:26Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        assert_eq!(format_optional_datetime(Some(&dt)), "15.03.2026 14:02:26");
    }
}
