//! Reservation model.
//!
//! A reservation is a time-bounded claim on one resource tied to one plan.
//! Saving a plan writes one reservation per resource (driver, truck,
//! trailer) — three independent records sharing a `plan_id`, not a shared
//! object — so editing a plan removes and reinserts on all three ledgers
//! in lockstep.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TimeWindow;

/// Lifecycle state of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReservationStatus {
    /// Booked, not yet started.
    Scheduled,
    /// Currently being executed.
    InProgress,
    /// Finished; historical, never blocks new bookings.
    Completed,
}

/// A time-bounded claim on a resource's schedule.
///
/// Invariant: `start_time < end_time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    /// Unique reservation identifier.
    pub id: String,
    /// Claim start (inclusive).
    pub start_time: DateTime<Utc>,
    /// Claim end (exclusive).
    pub end_time: DateTime<Utc>,
    /// The plan this claim belongs to.
    pub plan_id: String,
    /// The driver executing the plan.
    pub driver_id: String,
    /// Lifecycle state.
    pub status: ReservationStatus,
    /// Free-form annotation.
    pub notes: Option<String>,
}

impl Reservation {
    /// Creates a scheduled reservation with a generated ID.
    pub fn new(plan_id: impl Into<String>, driver_id: impl Into<String>, window: TimeWindow) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            start_time: window.start,
            end_time: window.end,
            plan_id: plan_id.into(),
            driver_id: driver_id.into(),
            status: ReservationStatus::Scheduled,
            notes: None,
        }
    }

    /// Sets the status.
    pub fn with_status(mut self, status: ReservationStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// The claimed interval as a window.
    #[inline]
    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.start_time, self.end_time)
    }

    /// Whether this reservation blocks other bookings.
    ///
    /// Completed reservations are historical and never block.
    #[inline]
    pub fn blocks(&self) -> bool {
        self.status != ReservationStatus::Completed
    }
}
