//! Formatting utilities for file sizes and dates.

/// Format file size for display (e.g., "1.2K", "3.4M").
///
/// Directories and unknown sizes render as "-".
pub fn format_size(size: Option<u64>) -> String {
    match size {
        None => "-".to_string(),
        Some(bytes) if bytes >= 1_000_000_000 => {
            format!("{:.1}G", bytes as f64 / 1_000_000_000.0)
        }
        Some(bytes) if bytes >= 1_000_000 => format!("{:.1}M", bytes as f64 / 1_000_000.0),
        Some(bytes) if bytes >= 1_000 => format!("{:.1}K", bytes as f64 / 1_000.0),
        Some(bytes) => format!("{}B", bytes),
    }
}

/// Last second of 9999-12-31 UTC.
const MAX_TIMESTAMP: f64 = 253_402_300_799.0;

/// Format a Unix timestamp as ISO date (YYYY-MM-DD).
///
/// Fractional seconds are dropped; missing, negative or post-9999
/// timestamps render as an empty string.
pub fn format_date_iso(timestamp: Option<f64>) -> String {
    let Some(ts) = timestamp.filter(|t| (0.0..=MAX_TIMESTAMP).contains(t)) else {
        return String::new();
    };
    let (year, month, day) = civil_from_days(ts as i64 / 86400);
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Days since 1970-01-01 to a proleptic Gregorian (year, month, day).
fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}
