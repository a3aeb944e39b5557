use chrono::Local;

/// Format of [`WeatherReport::updated_at`].
pub const UPDATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// What one page scrape produced.
///
/// Every field is trimmed text taken straight from the page. A field the page
/// did not have is an empty string. Only `temperature` is guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherReport {
    pub temperature: String,
    pub condition: String,
    pub feels_like: String,
    pub pressure: String,
    pub humidity: String,
    pub wind: String,
    /// Local time of extraction, not of the observation on the page.
    pub updated_at: String,
}

/// Current local time in [`UPDATED_AT_FORMAT`].
pub fn local_timestamp() -> String {
    Local::now().format(UPDATED_AT_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_timestamp(s: &str) -> bool {
        let shape = "dddd-dd-dd dd:dd:dd";
        s.len() == shape.len()
            && s.chars().zip(shape.chars()).all(|(c, p)| match p {
                'd' => c.is_ascii_digit(),
                _ => c == p,
            })
    }

    #[test]
    fn local_timestamp_has_fixed_shape() {
        let ts = local_timestamp();
        assert!(is_timestamp(&ts), "unexpected timestamp: {ts}");
    }

    #[test]
    fn timestamp_checker_rejects_other_shapes() {
        assert!(!is_timestamp("2024-1-01 00:00:00"));
        assert!(!is_timestamp("2024-01-01T00:00:00"));
    }
}
