//! Meter reading entity and the consumption delta calculation

use chrono::{DateTime, Datelike, Utc};

/// A meter reading (lectura) captured for a member.
///
/// Immutable once created: corrections happen through the next period's
/// reading, never by editing history.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub id: i32,
    pub member_id: i32,
    pub previous_reading: i64,
    pub current_reading: i64,
    /// Derived: `max(0, current_reading - previous_reading)`
    pub consumption: i64,
    /// Set when the meter appeared to run backwards; flagged for manual
    /// review, never blocks the save.
    pub anomaly: bool,
    pub reading_date: DateTime<Utc>,
    pub recorded_by: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Reading {
    /// Billing period of this reading as `(year, month)`.
    pub fn period(&self) -> (i32, u32) {
        (self.reading_date.year(), self.reading_date.month())
    }
}

/// Result of the reading delta computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingDelta {
    pub consumption: i64,
    pub anomaly: bool,
}

/// Compute consumption between two meter readings.
///
/// A meter replacement or misread can produce an apparent decrease; the
/// delta is clamped to zero instead of rejected, and the `anomaly` flag is
/// raised so the occurrence can be reviewed manually. When a member has no
/// previous reading, callers pass `previous = 0`.
pub fn compute_consumption(previous: i64, current: i64) -> ReadingDelta {
    ReadingDelta {
        consumption: (current - previous).max(0),
        anomaly: current < previous,
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_delta() {
        let d = compute_consumption(100, 125);
        assert_eq!(d.consumption, 25);
        assert!(!d.anomaly);
    }

    #[test]
    fn no_previous_reading_defaults_to_zero() {
        let d = compute_consumption(0, 42);
        assert_eq!(d.consumption, 42);
        assert!(!d.anomaly);
    }

    #[test]
    fn equal_readings_mean_zero_consumption() {
        let d = compute_consumption(50, 50);
        assert_eq!(d.consumption, 0);
        assert!(!d.anomaly);
    }

    #[test]
    fn backwards_meter_clamps_to_zero_and_flags_anomaly() {
        let d = compute_consumption(100, 95);
        assert_eq!(d.consumption, 0);
        assert!(d.anomaly);
    }

    #[test]
    fn consumption_is_never_negative() {
        for prev in 0..20 {
            for curr in 0..20 {
                assert!(compute_consumption(prev, curr).consumption >= 0);
            }
        }
    }

    #[test]
    fn reading_period_is_calendar_month() {
        let reading = Reading {
            id: 1,
            member_id: 7,
            previous_reading: 0,
            current_reading: 10,
            consumption: 10,
            anomaly: false,
            reading_date: "2026-02-15T12:00:00Z".parse().unwrap(),
            recorded_by: "operador".into(),
            notes: None,
            created_at: Utc::now(),
        };
        assert_eq!(reading.period(), (2026, 2));
    }
}
