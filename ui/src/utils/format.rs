use chrono::{DateTime, Utc};

/// Renders a timestamp the way the table and detail view show it,
/// en-US style: `4/1/2023, 12:30:00 PM`.
pub fn display_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamps_render_en_us_style() {
        let ts = Utc.with_ymd_and_hms(2023, 4, 1, 14, 5, 9).unwrap();
        assert_eq!(display_timestamp(&ts), "4/1/2023, 2:05:09 PM");
    }
}
