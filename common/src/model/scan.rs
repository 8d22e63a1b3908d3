use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Column titles of the scan log, in file order.
pub const LOG_HEADER: [&str; 3] = ["QR Code", "Scan Date", "Scan Time"];

/// A single scan as it is stored in the daily log.
///
/// Rows are serialized with the column titles from [`LOG_HEADER`], so a log
/// written by one version of the server reads back field by field. Dates use
/// `YYYY-MM-DD` and times `HH:MM:SS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRecord {
    #[serde(rename = "QR Code")]
    pub identifier: String,
    #[serde(rename = "Scan Date")]
    pub date: NaiveDate,
    #[serde(rename = "Scan Time")]
    pub time: NaiveTime,
}

impl ScanRecord {
    /// Builds a record stamped with the server-local clock.
    pub fn now(identifier: impl Into<String>) -> Self {
        Self::at(identifier, Local::now().naive_local())
    }

    /// Builds a record for the given local timestamp, dropping sub-second precision.
    pub fn at(identifier: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        let time = timestamp.time();
        Self {
            identifier: identifier.into(),
            date: timestamp.date(),
            time: time.with_nanosecond(0).unwrap_or(time),
        }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// `YYYY-MM-DD HH:MM:SS`, as shown on the confirmation page.
    pub fn display_timestamp(&self) -> String {
        self.timestamp().format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_truncates_to_whole_seconds() {
        let ts = NaiveDate::from_ymd_opt(2024, 7, 1)
            .unwrap()
            .and_hms_milli_opt(18, 5, 9, 750)
            .unwrap();
        let record = ScanRecord::at("Checkpoint_1", ts);

        assert_eq!(record.time, NaiveTime::from_hms_opt(18, 5, 9).unwrap());
        assert_eq!(record.display_timestamp(), "2024-07-01 18:05:09");
    }

    #[test]
    fn serializes_with_log_column_titles() {
        let ts = NaiveDate::from_ymd_opt(2024, 7, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let json = serde_json::to_value(ScanRecord::at("VISITOR_123", ts)).unwrap();

        assert_eq!(json[LOG_HEADER[0]], "VISITOR_123");
        assert_eq!(json[LOG_HEADER[1]], "2024-07-01");
        assert_eq!(json[LOG_HEADER[2]], "08:00:00");
    }
}
