//! Driver working-hours budget.
//!
//! Tracks consumed daily and weekly minutes against fixed caps. The caps
//! are simplified fixed thresholds, not jurisdiction-aware labor rules.
//! Quantities are capped on write, never rejected, so the invariants
//! `0 <= daily <= max_daily` and `0 <= weekly <= max_weekly` hold at all
//! times.
//!
//! `shift_start_time` is present exactly when the driver is clocked in.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Default daily cap: 15 hours.
pub const DEFAULT_MAX_DAILY_MINUTES: i64 = 900;
/// Default weekly cap: 60 hours.
pub const DEFAULT_MAX_WEEKLY_MINUTES: i64 = 3600;

/// A driver's working-hours state. All quantities are minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingHours {
    /// Minutes worked in the current day.
    pub daily_minutes_worked: i64,
    /// Minutes worked in the current week.
    pub weekly_minutes_worked: i64,
    /// Actual clock-in time of the current shift, if on shift.
    pub shift_start_time: Option<DateTime<Utc>>,
    /// Shift start scheduled by the planner.
    pub planned_shift_start: Option<DateTime<Utc>>,
    /// Shift end scheduled by the planner.
    pub planned_shift_end: Option<DateTime<Utc>>,
    /// Last date the driver worked.
    pub last_work_date: NaiveDate,
    /// Daily cap in minutes.
    pub max_daily_minutes: i64,
    /// Weekly cap in minutes.
    pub max_weekly_minutes: i64,
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self {
            daily_minutes_worked: 0,
            weekly_minutes_worked: 0,
            shift_start_time: None,
            planned_shift_start: None,
            planned_shift_end: None,
            last_work_date: NaiveDate::default(),
            max_daily_minutes: DEFAULT_MAX_DAILY_MINUTES,
            max_weekly_minutes: DEFAULT_MAX_WEEKLY_MINUTES,
        }
    }
}

impl WorkingHours {
    /// Creates a fresh budget with default caps, starting on the given date.
    pub fn starting_on(date: NaiveDate) -> Self {
        Self {
            last_work_date: date,
            ..Self::default()
        }
    }

    /// Remaining minutes in the daily budget.
    #[inline]
    pub fn available_daily_minutes(&self) -> i64 {
        self.max_daily_minutes - self.daily_minutes_worked
    }

    /// Remaining minutes in the weekly budget.
    #[inline]
    pub fn available_weekly_minutes(&self) -> i64 {
        self.max_weekly_minutes - self.weekly_minutes_worked
    }

    /// Whether the driver is currently clocked in.
    #[inline]
    pub fn is_clocked_in(&self) -> bool {
        self.shift_start_time.is_some()
    }

    /// Writes the daily total, clamped into `[0, max_daily_minutes]`.
    pub fn set_daily_minutes(&mut self, minutes: i64) {
        self.daily_minutes_worked = minutes.clamp(0, self.max_daily_minutes);
    }

    /// Writes the weekly total, clamped into `[0, max_weekly_minutes]`.
    pub fn set_weekly_minutes(&mut self, minutes: i64) {
        self.weekly_minutes_worked = minutes.clamp(0, self.max_weekly_minutes);
    }
}
