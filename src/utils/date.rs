use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Today as `YYYY-MM-DD`, the default date of a new application.
pub fn today_str() -> String {
    today().format("%Y-%m-%d").to_string()
}
