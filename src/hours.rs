//! Working-hours accountant.
//!
//! Validates whether a driver can absorb a plan's duration within the
//! remaining daily and weekly minute budgets, and applies clock-in /
//! clock-out transitions. The daily budget is checked before the weekly
//! one, so a plan that breaks both reports the daily limit.
//!
//! Validation outcomes are returned as values ([`HoursCheck`],
//! [`ClockError`]); nothing on these paths panics, because they run
//! continuously while rendering.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::{Driver, ReservationStatus};
use crate::store::FleetStore;

/// Outcome of a working-hours admission check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoursCheck {
    /// Whether the plan fits the remaining budget.
    pub can_take: bool,
    /// Failure explanation, when `can_take` is false.
    pub reason: Option<String>,
    /// Remaining minutes: min(daily, weekly) on success, the violated
    /// budget's remainder on failure, 0 for unknown drivers.
    pub available_minutes: i64,
}

/// Why a clock transition was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    #[error("driver '{0}' not found")]
    DriverNotFound(String),
    #[error("no plans assigned")]
    NoPlansAssigned,
    #[error("no planned shift time")]
    NoPlannedShift,
    #[error("too early to clock in: planned start is {planned_start} ({minutes_until} minutes from now)")]
    TooEarly {
        planned_start: DateTime<Utc>,
        minutes_until: i64,
    },
}

/// Formats minutes as "Xh Ym" for human-readable reasons.
fn format_minutes(minutes: i64) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Checks whether a driver can take on `duration_minutes` more work.
///
/// The daily budget is checked first; the weekly budget only when the
/// daily check passes. Unknown drivers cannot take anything.
pub fn can_take_plan(store: &FleetStore, driver_id: &str, duration_minutes: i64) -> HoursCheck {
    let Some(driver) = store.driver(driver_id) else {
        return HoursCheck {
            can_take: false,
            reason: Some("driver not found".into()),
            available_minutes: 0,
        };
    };

    let wh = &driver.working_hours;
    let available_daily = wh.available_daily_minutes();
    let available_weekly = wh.available_weekly_minutes();

    if duration_minutes > available_daily {
        return HoursCheck {
            can_take: false,
            reason: Some(format!(
                "plan duration {} exceeds daily limit; available: {}",
                format_minutes(duration_minutes),
                format_minutes(available_daily)
            )),
            available_minutes: available_daily,
        };
    }

    if duration_minutes > available_weekly {
        return HoursCheck {
            can_take: false,
            reason: Some(format!(
                "plan duration {} exceeds weekly limit; available: {}",
                format_minutes(duration_minutes),
                format_minutes(available_weekly)
            )),
            available_minutes: available_weekly,
        };
    }

    HoursCheck {
        can_take: true,
        reason: None,
        available_minutes: available_daily.min(available_weekly),
    }
}

/// Adds committed plan minutes to the driver's consumed tally, capped on
/// write. Called by the lifecycle manager when a new plan is saved.
pub(crate) fn record_planned_minutes(store: &mut FleetStore, driver_id: &str, minutes: i64) {
    if let Some(driver) = store.driver_mut(driver_id) {
        let wh = &mut driver.working_hours;
        wh.set_daily_minutes(wh.daily_minutes_worked + minutes);
        wh.set_weekly_minutes(wh.weekly_minutes_worked + minutes);
    }
}

/// Clocks a driver in.
///
/// Requires at least one saved plan, a planner-set shift start, and a
/// current time at or past that start. On success records the actual
/// start, marks the driver busy, and stamps the work date.
pub fn clock_in(store: &mut FleetStore, driver_id: &str, now: DateTime<Utc>) -> Result<(), ClockError> {
    let Some(driver) = store.driver(driver_id) else {
        return Err(ClockError::DriverNotFound(driver_id.into()));
    };

    if store.plans_for_driver(driver_id).is_empty() {
        return Err(ClockError::NoPlansAssigned);
    }

    let Some(planned_start) = driver.working_hours.planned_shift_start else {
        return Err(ClockError::NoPlannedShift);
    };

    if now < planned_start {
        return Err(ClockError::TooEarly {
            planned_start,
            minutes_until: (planned_start - now).num_minutes(),
        });
    }

    store.update_driver(driver_id, |d| {
        d.working_hours.shift_start_time = Some(now);
        d.working_hours.last_work_date = now.date_naive();
        d.is_available = false;
    });
    log::debug!("driver '{driver_id}' clocked in at {now}");
    Ok(())
}

/// Clocks a driver out and returns the shift duration in minutes.
///
/// The shift duration REPLACES the recorded daily total (one clock cycle
/// per day is assumed) and accumulates into the weekly total; both are
/// capped on write. A driver who never clocked in books zero minutes.
pub fn clock_out(
    store: &mut FleetStore,
    driver_id: &str,
    now: DateTime<Utc>,
) -> Result<i64, ClockError> {
    let Some(driver) = store.driver(driver_id) else {
        return Err(ClockError::DriverNotFound(driver_id.into()));
    };

    let shift_minutes = driver
        .working_hours
        .shift_start_time
        .map(|start| (now - start).num_minutes().max(0))
        .unwrap_or(0);

    store.update_driver(driver_id, |d| {
        let wh = &mut d.working_hours;
        wh.set_daily_minutes(shift_minutes);
        wh.set_weekly_minutes(wh.weekly_minutes_worked + shift_minutes);
        wh.shift_start_time = None;
        wh.last_work_date = now.date_naive();
        d.is_available = true;
    });
    log::debug!("driver '{driver_id}' clocked out after {shift_minutes} minutes");
    Ok(shift_minutes)
}

/// Whether the driver is busy right now.
///
/// True iff any in-progress reservation covers `now`. This is the
/// authoritative signal the reconciler uses to refresh the cached
/// `is_available` flag.
pub fn is_currently_working(driver: &Driver, now: DateTime<Utc>) -> bool {
    driver
        .schedule
        .iter()
        .any(|r| r.status == ReservationStatus::InProgress && r.window().contains(now))
}

/// Sets the planner-scheduled shift window. Returns whether the driver
/// was found.
pub fn set_planned_shift(
    store: &mut FleetStore,
    driver_id: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> bool {
    store.update_driver(driver_id, |d| {
        d.working_hours.planned_shift_start = Some(start);
        d.working_hours.planned_shift_end = Some(end);
    })
}

/// Clears the planner-scheduled shift window. Returns whether the driver
/// was found.
pub fn clear_planned_shift(store: &mut FleetStore, driver_id: &str) -> bool {
    store.update_driver(driver_id, |d| {
        d.working_hours.planned_shift_start = None;
        d.working_hours.planned_shift_end = None;
    })
}

/// Driver-facing classification of the current shift situation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShiftStatus {
    /// Clocked in.
    OnShift {
        since: DateTime<Utc>,
        minutes_worked: i64,
    },
    /// Shift planned but not yet due.
    AwaitingShift {
        planned_start: DateTime<Utc>,
        minutes_until: i64,
    },
    /// Shift planned, start time passed, not clocked in.
    ShiftMissed { planned_start: DateTime<Utc> },
    /// Nothing planned.
    NoPlannedShift,
}

/// Classifies a driver's shift situation at `now`.
pub fn shift_status(driver: &Driver, now: DateTime<Utc>) -> ShiftStatus {
    if let Some(since) = driver.working_hours.shift_start_time {
        return ShiftStatus::OnShift {
            since,
            minutes_worked: (now - since).num_minutes().max(0),
        };
    }

    match driver.working_hours.planned_shift_start {
        Some(planned_start) if now < planned_start => ShiftStatus::AwaitingShift {
            planned_start,
            minutes_until: (planned_start - now).num_minutes(),
        },
        Some(planned_start) => ShiftStatus::ShiftMissed { planned_start },
        None => ShiftStatus::NoPlannedShift,
    }
}
