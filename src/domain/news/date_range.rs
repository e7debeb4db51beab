use chrono::{DateTime, Duration, Utc};

/// ISO 8601 with fractional seconds, the encoding GNews expects for the
/// `from`/`to` parameters.
const UPSTREAM_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// Concrete search window, `from <= to` by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl DateRange {
    pub fn from_param(&self) -> String {
        self.from.format(UPSTREAM_DATE_FORMAT).to_string()
    }

    pub fn to_param(&self) -> String {
        self.to.format(UPSTREAM_DATE_FORMAT).to_string()
    }
}

/// Maps a symbolic time window to a concrete date range ending at `now`.
/// Unrecognized labels behave like "dias". Total function, no error path.
pub fn resolve(time_window: &str, now: DateTime<Utc>) -> DateRange {
    let offset = match time_window {
        "semanas" => Duration::weeks(4),
        "meses" => Duration::days(90),
        "anos" => Duration::days(365),
        // "dias" and anything unrecognized
        _ => Duration::days(7),
    };

    DateRange {
        from: now - offset,
        to: now,
    }
}
