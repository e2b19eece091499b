// src/util/time.rs
use chrono::{Local, SecondsFormat, Utc};

/// Current UTC time as RFC 3339 with microseconds, e.g. `2024-05-01T09:30:12.345678Z`.
pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Current local wall-clock time without offset, e.g. `2024-05-01T11:30:12.345678`.
pub fn local_timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDateTime};

    #[test]
    fn given_utc_timestamp_when_parsing_as_rfc3339_then_succeeds() {
        let ts = utc_timestamp();

        let parsed = DateTime::parse_from_rfc3339(&ts);

        assert!(parsed.is_ok(), "not RFC 3339: {ts}");
        assert!(ts.ends_with('Z'));
    }

    #[test]
    fn given_local_timestamp_when_parsing_as_naive_datetime_then_succeeds() {
        let ts = local_timestamp();

        let parsed = NaiveDateTime::parse_from_str(&ts, "%Y-%m-%dT%H:%M:%S%.f");

        assert!(parsed.is_ok(), "not ISO-8601: {ts}");
    }
}
