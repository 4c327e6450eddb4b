//! Periodic state reconciliation.
//!
//! Two cooperative passes keep derived driver state in line with the
//! ledgers:
//!
//! - **Availability** (~every minute): each driver's cached
//!   `is_available` flag is recomputed from the authoritative
//!   [`hours::is_currently_working`] signal.
//! - **Hours** (~every five minutes): clocked-in drivers get their daily
//!   minutes recomputed from elapsed shift time, written only when the
//!   work date rolled over or the drift exceeds a small threshold.
//!
//! Every tick reads the live store passed in at call time — never a
//! snapshot captured earlier — so a pass always observes the latest
//! committed state. The [`Reconciler`] is a cancellable handle: once
//! cancelled it never writes again.

use chrono::{DateTime, Duration, Utc};

use crate::hours;
use crate::store::FleetStore;

/// Drift (minutes) beyond which the hours pass rewrites a daily total.
pub const HOURS_DRIFT_MINUTES: i64 = 5;

/// What a [`Reconciler::tick`] call did.
///
/// `None` means the pass was not due; `Some(n)` means it ran and wrote
/// `n` drivers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Drivers whose availability flag changed.
    pub availability_updates: Option<usize>,
    /// Drivers whose daily hours were rewritten.
    pub hours_updates: Option<usize>,
}

/// Refreshes every driver's cached `is_available` flag from schedule
/// state. Returns the number of flags that changed.
pub fn refresh_availability(store: &mut FleetStore, now: DateTime<Utc>) -> usize {
    let stale: Vec<(String, bool)> = store
        .drivers()
        .iter()
        .filter_map(|driver| {
            let should_be_available = !hours::is_currently_working(driver, now);
            (driver.is_available != should_be_available)
                .then(|| (driver.id.clone(), should_be_available))
        })
        .collect();

    let changed = stale.len();
    for (driver_id, available) in stale {
        store.set_driver_availability(&driver_id, available);
    }
    if changed > 0 {
        log::debug!("availability pass updated {changed} driver(s)");
    }
    changed
}

/// Recomputes daily minutes for clocked-in drivers from elapsed shift
/// time. Writes only on day rollover or drift beyond
/// [`HOURS_DRIFT_MINUTES`], to avoid redundant churn. Returns the number
/// of drivers rewritten.
pub fn refresh_working_hours(store: &mut FleetStore, now: DateTime<Utc>) -> usize {
    let today = now.date_naive();
    let due: Vec<(String, i64)> = store
        .drivers()
        .iter()
        .filter_map(|driver| {
            let start = driver.working_hours.shift_start_time?;
            let elapsed = (now - start).num_minutes().max(0);
            let drifted =
                (elapsed - driver.working_hours.daily_minutes_worked).abs() > HOURS_DRIFT_MINUTES;
            let rolled_over = driver.working_hours.last_work_date != today;
            (drifted || rolled_over).then(|| (driver.id.clone(), elapsed))
        })
        .collect();

    let changed = due.len();
    for (driver_id, elapsed) in due {
        store.update_driver(&driver_id, |d| {
            d.working_hours.set_daily_minutes(elapsed);
            d.working_hours.last_work_date = today;
        });
    }
    if changed > 0 {
        log::debug!("hours pass rewrote {changed} driver(s)");
    }
    changed
}

/// Cancellable scheduler for the two reconciliation passes.
#[derive(Debug, Clone)]
pub struct Reconciler {
    availability_every: Duration,
    hours_every: Duration,
    last_availability: Option<DateTime<Utc>>,
    last_hours: Option<DateTime<Utc>>,
    cancelled: bool,
}

impl Default for Reconciler {
    fn default() -> Self {
        Self::new()
    }
}

impl Reconciler {
    /// Creates a reconciler with the standard cadences: availability
    /// every minute, hours every five minutes.
    pub fn new() -> Self {
        Self {
            availability_every: Duration::minutes(1),
            hours_every: Duration::minutes(5),
            last_availability: None,
            last_hours: None,
            cancelled: false,
        }
    }

    /// Overrides both cadences.
    pub fn with_intervals(mut self, availability_every: Duration, hours_every: Duration) -> Self {
        self.availability_every = availability_every;
        self.hours_every = hours_every;
        self
    }

    /// Tears the handle down; subsequent ticks are no-ops.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Whether the handle has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Runs whichever passes are due at `now` against the live store.
    ///
    /// Both passes run on the first tick after creation.
    pub fn tick(&mut self, store: &mut FleetStore, now: DateTime<Utc>) -> TickReport {
        if self.cancelled {
            return TickReport::default();
        }

        let mut report = TickReport::default();

        let availability_due = self
            .last_availability
            .is_none_or(|last| now - last >= self.availability_every);
        if availability_due {
            report.availability_updates = Some(refresh_availability(store, now));
            self.last_availability = Some(now);
        }

        let hours_due = self
            .last_hours
            .is_none_or(|last| now - last >= self.hours_every);
        if hours_due {
            report.hours_updates = Some(refresh_working_hours(store, now));
            self.last_hours = Some(now);
        }

        report
    }
}
