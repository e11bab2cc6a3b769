use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Layout of SQLite's `DATETIME()` output. Stored values are UTC.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
    pub expires: DateTime<Utc>,
}

pub fn parse_timestamp(column: &'static str, value: &str) -> Result<DateTime<Utc>, StoreError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map(|ts| ts.and_utc())
        .map_err(|source| StoreError::InvalidTimestamp {
            column,
            value: value.to_owned(),
            source,
        })
}

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    #[test]
    fn test_parse_sqlite_datetime() {
        let ts = parse_timestamp("created", "2024-03-09 17:45:02").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2024, 3, 9));
        assert_eq!((ts.hour(), ts.minute(), ts.second()), (17, 45, 2));
    }

    #[test]
    fn test_parse_rejects_other_layouts() {
        for value in ["", "2024-03-09", "2024-03-09T17:45:02Z", "not a date"] {
            let err = parse_timestamp("expires", value).unwrap_err();
            match err {
                StoreError::InvalidTimestamp { column, value: v, .. } => {
                    assert_eq!(column, "expires");
                    assert_eq!(v, value);
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_format_matches_parse() {
        let ts = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_timestamp(&ts), "2023-12-31 23:59:59");
        assert_eq!(parse_timestamp("created", &format_timestamp(&ts)).unwrap(), ts);
    }
}
