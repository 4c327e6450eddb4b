//! Plan assembly.
//!
//! Builds stops from addresses and booking times, keeps the 1-based
//! `sequence` dense across reorders, and synthesizes the trailer-exchange
//! stop. Admission against the driver's hour budget is the caller's job
//! (the draft checks before appending); these functions only construct.
//!
//! # Stop durations
//! Delivery 60 min, collection 45 min, trailer exchange 90 min.

use chrono::{DateTime, Duration, Utc};

use crate::models::{CustomerAddress, JobType, PlanItem};
use crate::store::{new_id, FleetStore};

/// Fixed duration of a delivery stop.
pub const DELIVERY_MINUTES: i64 = 60;
/// Fixed duration of a collection stop.
pub const COLLECTION_MINUTES: i64 = 45;
/// Fixed duration of a trailer exchange.
pub const TRAILER_CHANGE_MINUTES: i64 = 90;

/// Estimated duration for a job type, in minutes.
pub fn duration_for(job_type: JobType) -> i64 {
    match job_type {
        JobType::Delivery => DELIVERY_MINUTES,
        JobType::Collection => COLLECTION_MINUTES,
        JobType::TrailerChange => TRAILER_CHANGE_MINUTES,
    }
}

/// Total estimated duration of a stop list, in minutes.
pub fn total_duration(items: &[PlanItem]) -> i64 {
    items.iter().map(|i| i.estimated_duration).sum()
}

/// Resource selection carried onto stops as they are built.
#[derive(Debug, Clone, Copy, Default)]
pub struct StopContext<'a> {
    /// 1-based position the new stop takes.
    pub sequence: u32,
    /// Currently selected trailer.
    pub assigned_trailer: Option<&'a str>,
    /// Currently selected driver.
    pub driver_id: Option<&'a str>,
    /// Currently selected truck.
    pub truck_id: Option<&'a str>,
}

/// A trailer swap awaiting drop-off/pick-up confirmation.
///
/// Selecting a different trailer while stops exist does not mutate the
/// plan; it produces this pending value. Only confirmation synthesizes
/// the exchange stop; cancellation discards it with no side effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTrailerChange {
    /// Trailer currently tracked for the plan.
    pub old_trailer: String,
    /// Trailer the planner wants to switch to.
    pub new_trailer: String,
}

/// Builds a delivery or collection stop at the given address.
///
/// The stop occupies `[booking_time, booking_time + duration)`.
pub fn build_stop(
    address: &CustomerAddress,
    job_type: JobType,
    booking_time: DateTime<Utc>,
    ctx: &StopContext,
) -> PlanItem {
    let minutes = duration_for(job_type);
    PlanItem {
        id: new_id(),
        address_id: address.id.clone(),
        sequence: ctx.sequence,
        start_time: booking_time,
        end_time: booking_time + Duration::minutes(minutes),
        estimated_duration: minutes,
        job_type,
        booking_time,
        assigned_trailer: ctx.assigned_trailer.map(str::to_owned),
        driver_id: ctx.driver_id.map(str::to_owned),
        truck_id: ctx.truck_id.map(str::to_owned),
        notes: None,
        previous_trailer: None,
        new_trailer: None,
        drop_off_location: None,
        pick_up_location: None,
    }
}

/// Builds a trailer-exchange stop.
///
/// Unknown locations fall back to the default depot. The drop-off address
/// doubles as the stop's anchor address; the generated notes name the
/// trailer plates and location companies involved.
pub fn build_trailer_change_stop(
    store: &FleetStore,
    old_trailer_id: &str,
    new_trailer_id: &str,
    drop_off_id: &str,
    pick_up_id: &str,
    booking_time: DateTime<Utc>,
    ctx: &StopContext,
) -> PlanItem {
    let drop_off = store.location(drop_off_id).or_else(|| store.default_depot());
    let pick_up = store.location(pick_up_id).or_else(|| store.default_depot());

    let place_name = |addr: Option<&CustomerAddress>, raw: &str| -> String {
        addr.map(|a| a.company_name.clone()).unwrap_or_else(|| raw.into())
    };
    let plate = |trailer_id: &str| -> String {
        store
            .trailer(trailer_id)
            .map(|t| t.plate_number.clone())
            .unwrap_or_else(|| trailer_id.into())
    };

    let notes = format!(
        "Drop {} at {}, pick up {} from {}",
        plate(old_trailer_id),
        place_name(drop_off, drop_off_id),
        plate(new_trailer_id),
        place_name(pick_up, pick_up_id),
    );

    let anchor_id = drop_off.map(|a| a.id.clone()).unwrap_or_else(|| drop_off_id.into());
    let pick_up_anchor = pick_up.map(|a| a.id.clone()).unwrap_or_else(|| pick_up_id.into());

    PlanItem {
        id: new_id(),
        address_id: anchor_id.clone(),
        sequence: ctx.sequence,
        start_time: booking_time,
        end_time: booking_time + Duration::minutes(TRAILER_CHANGE_MINUTES),
        estimated_duration: TRAILER_CHANGE_MINUTES,
        job_type: JobType::TrailerChange,
        booking_time,
        assigned_trailer: Some(new_trailer_id.into()),
        driver_id: ctx.driver_id.map(str::to_owned),
        truck_id: ctx.truck_id.map(str::to_owned),
        notes: Some(notes),
        previous_trailer: Some(old_trailer_id.into()),
        new_trailer: Some(new_trailer_id.into()),
        drop_off_location: Some(anchor_id),
        pick_up_location: Some(pick_up_anchor),
    }
}

/// Renumbers `sequence` densely 1..N in list order.
pub fn renumber(items: &mut [PlanItem]) {
    for (index, item) in items.iter_mut().enumerate() {
        item.sequence = index as u32 + 1;
    }
}

/// Moves one stop from `from` to `to`, then renumbers densely.
///
/// Returns `false` (no mutation) when either index is out of range.
pub fn reorder(items: &mut Vec<PlanItem>, from: usize, to: usize) -> bool {
    if from >= items.len() || to >= items.len() {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    renumber(items);
    true
}
