use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// No visible row matched: it was never inserted, or it has expired.
    #[error("no matching record found")]
    NoRecord,
    #[error("insert returned no id")]
    MissingId,
    #[error("invalid {column} timestamp {value:?}: {source}")]
    InvalidTimestamp {
        column: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("database error: {0}")]
    Database(#[from] libsql::Error),
}

impl StoreError {
    pub fn is_no_record(&self) -> bool {
        matches!(self, StoreError::NoRecord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_timestamp_display() {
        let source = chrono::NaiveDateTime::parse_from_str("garbage", "%Y-%m-%d %H:%M:%S").unwrap_err();
        let err = StoreError::InvalidTimestamp {
            column: "created",
            value: "garbage".to_string(),
            source,
        };

        assert!(err.to_string().starts_with("invalid created timestamp \"garbage\""));
        assert!(std::error::Error::source(&err).is_some());
        assert!(!err.is_no_record());
    }

    #[test]
    fn test_no_record() {
        assert!(StoreError::NoRecord.is_no_record());
        assert_eq!(StoreError::NoRecord.to_string(), "no matching record found");
    }
}
