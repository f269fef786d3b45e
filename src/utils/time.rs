use chrono::{Datelike, NaiveDate};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// This is the standard way of converting a date to a string in activity-graph.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Returns `Jan`..`Dec` for months 1..=12.
pub fn short_month_name(month: u32) -> &'static str {
    MONTHS[(month.clamp(1, 12) - 1) as usize]
}

/// Name used for a monthly snapshot, e.g. `activity-2025-03.svg`.
pub fn snapshot_file_name(date: NaiveDate, extension: &str) -> String {
    format!(
        "activity-{:04}-{:02}.{extension}",
        date.year(),
        date.month()
    )
}
