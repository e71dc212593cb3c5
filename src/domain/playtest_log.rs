//! Response log artifact written after a successful request.

use chrono::{NaiveDateTime, Timelike};

const FILE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const HEADER_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const HEADER_MICROS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
const SEPARATOR_WIDTH: usize = 50;

/// Log of one playtest response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaytestLog<'a> {
    pub test_type: &'a str,
    pub timestamp: NaiveDateTime,
    pub response: &'a str,
}

impl PlaytestLog<'_> {
    /// `playtest_log_<YYYYMMDD_HHMMSS>_<label>.txt`
    pub fn file_name(&self) -> String {
        format!(
            "playtest_log_{}_{}.txt",
            self.timestamp.format(FILE_TIMESTAMP_FORMAT),
            file_name_label(self.test_type)
        )
    }

    /// Metadata header followed by the verbatim response.
    pub fn render(&self) -> String {
        format!(
            "Test Type: {}\nTimestamp: {}\nResponse Length: {} characters\n{}\n{}",
            self.test_type,
            self.header_timestamp(),
            self.response.chars().count(),
            "=".repeat(SEPARATOR_WIDTH),
            self.response
        )
    }

    /// ISO-8601 local time; the fraction is omitted when microseconds are zero.
    fn header_timestamp(&self) -> String {
        let format = if self.timestamp.nanosecond() / 1_000 == 0 {
            HEADER_TIMESTAMP_FORMAT
        } else {
            HEADER_MICROS_FORMAT
        };
        self.timestamp.format(format).to_string()
    }
}

/// Replace characters that cannot appear in a file name component.
fn file_name_label(label: &str) -> String {
    label
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}
