//! Wall-clock access for result timestamps.

use chrono::{DateTime, FixedOffset, Local, SecondsFormat};

/// Source of the analysis timestamp.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;

    /// Timestamp in RFC 3339 with microseconds
    fn timestamp(&self) -> String {
        self.now().to_rfc3339_opts(SecondsFormat::Micros, false)
    }
}

/// Local system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_timestamp() {
        let at = DateTime::parse_from_rfc3339("2024-03-01T12:30:00+01:00").unwrap();
        assert_eq!(
            FixedClock(at).timestamp(),
            "2024-03-01T12:30:00.000000+01:00"
        );
    }

    #[test]
    fn test_system_clock_is_parseable() {
        let stamp = SystemClock.timestamp();
        assert!(DateTime::parse_from_rfc3339(&stamp).is_ok(), "{stamp}");
    }
}
