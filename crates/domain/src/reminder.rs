use crate::shared::entity::ID;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;

/// The three relative-timing categories of payment reminders. No other
/// timings exist; an invoice whose day offset matches none of them gets no
/// reminder that day.
///
/// The serialized values double as the persisted dedup-key component in the
/// `reminders_sent` table, so they must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReminderKind {
    #[serde(rename = "3_dias_antes")]
    ThreeDaysBefore,
    #[serde(rename = "dia_vencimiento")]
    DueToday,
    #[serde(rename = "7_dias_despues")]
    SevenDaysAfter,
}

impl ReminderKind {
    /// Maps a day offset to the reminder kind due that day, if any. This is
    /// an exact match on days 3, 0 and -7, not a window: a run that skips
    /// the matching day skips that reminder kind for good.
    pub fn classify(day_offset: i64) -> Option<Self> {
        match day_offset {
            3 => Some(Self::ThreeDaysBefore),
            0 => Some(Self::DueToday),
            -7 => Some(Self::SevenDaysAfter),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ThreeDaysBefore => "3_dias_antes",
            Self::DueToday => "dia_vencimiento",
            Self::SevenDaysAfter => "7_dias_despues",
        }
    }
}

impl Display for ReminderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Signed day distance from `today` to `due_date`. Positive means the due
/// date is in the future, zero means due today, negative means overdue by
/// that many days.
///
/// Both dates are whole calendar days (midnight-normalized in the timezone
/// the caller resolved "today" in), so the difference is an exact number of
/// days and the classification does not depend on the time-of-day a
/// reminder run happens to execute.
pub fn day_offset(due_date: NaiveDate, today: NaiveDate) -> i64 {
    (due_date - today).num_days()
}

/// Records that a reminder of `kind` was sent for an invoice. The
/// (invoice_id, kind) pair is the dedup key: at most one record per pair
/// exists over the system's lifetime, and therefore at most one email of
/// that kind is ever dispatched for the invoice.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderRecord {
    pub invoice_id: ID,
    pub kind: ReminderKind,
    /// Dispatch timestamp in millis
    pub sent_at: i64,
}

#[derive(Debug, Error)]
pub enum InsertReminderRecordError {
    #[error("A reminder of this kind has already been recorded for this invoice")]
    Duplicate,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn classifies_exactly_three_offsets() {
        assert_eq!(
            ReminderKind::classify(3),
            Some(ReminderKind::ThreeDaysBefore)
        );
        assert_eq!(ReminderKind::classify(0), Some(ReminderKind::DueToday));
        assert_eq!(
            ReminderKind::classify(-7),
            Some(ReminderKind::SevenDaysAfter)
        );

        for offset in [-30, -8, -6, -1, 1, 2, 4, 7, 30] {
            assert_eq!(ReminderKind::classify(offset), None);
        }
    }

    #[test]
    fn day_offset_is_signed_day_distance() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();

        let due = NaiveDate::from_ymd_opt(2024, 3, 13).unwrap();
        assert_eq!(day_offset(due, today), 3);

        assert_eq!(day_offset(today, today), 0);

        let due = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
        assert_eq!(day_offset(due, today), -7);
    }

    #[test]
    fn day_offset_crosses_month_and_year_boundaries() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
        let due = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        assert_eq!(day_offset(due, today), 3);

        // 2024 is a leap year
        let today = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
        let due = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(day_offset(due, today), 3);
    }

    #[test]
    fn wire_values_are_stable() {
        assert_eq!(ReminderKind::ThreeDaysBefore.as_str(), "3_dias_antes");
        assert_eq!(ReminderKind::DueToday.as_str(), "dia_vencimiento");
        assert_eq!(ReminderKind::SevenDaysAfter.as_str(), "7_dias_despues");
    }
}
