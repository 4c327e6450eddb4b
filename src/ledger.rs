//! Resource schedule ledger.
//!
//! Append/remove/query operations over each resource's reservation list.
//! The ledger performs no conflict checking on insert: callers validate
//! availability against all three resources of a plan before committing
//! any reservation, so a partial write can never occur.
//!
//! Lookups fail closed: an unknown resource is reported unavailable, never
//! an error, because availability is queried continuously on read paths
//! that must not fail.

use crate::models::{Reservation, ResourceKind, TimeWindow};
use crate::store::FleetStore;

fn schedule_of<'a>(
    store: &'a FleetStore,
    resource_id: &str,
    kind: ResourceKind,
) -> Option<&'a [Reservation]> {
    match kind {
        ResourceKind::Driver => store.driver(resource_id).map(|d| d.schedule.as_slice()),
        ResourceKind::Truck => store.truck(resource_id).map(|t| t.schedule.as_slice()),
        ResourceKind::Trailer => store.trailer(resource_id).map(|t| t.schedule.as_slice()),
    }
}

fn schedule_mut<'a>(
    store: &'a mut FleetStore,
    resource_id: &str,
    kind: ResourceKind,
) -> Option<&'a mut Vec<Reservation>> {
    match kind {
        ResourceKind::Driver => store.driver_mut(resource_id).map(|d| &mut d.schedule),
        ResourceKind::Truck => store.truck_mut(resource_id).map(|t| &mut t.schedule),
        ResourceKind::Trailer => store.trailer_mut(resource_id).map(|t| &mut t.schedule),
    }
}

/// Whether a resource is free for the whole window.
///
/// Returns `false` iff any reservation on the resource's schedule still
/// blocks (status is not completed), does not belong to `exclude_plan`,
/// and strictly overlaps the window. Unknown resources are unavailable.
pub fn is_available(
    store: &FleetStore,
    resource_id: &str,
    kind: ResourceKind,
    window: &TimeWindow,
    exclude_plan: Option<&str>,
) -> bool {
    let Some(schedule) = schedule_of(store, resource_id, kind) else {
        log::warn!("availability check on unknown {kind} '{resource_id}'; treating as unavailable");
        return false;
    };

    !schedule.iter().any(|r| {
        if exclude_plan.is_some_and(|skip| r.plan_id == skip) {
            return false;
        }
        r.blocks() && window.overlaps(&r.window())
    })
}

/// Appends a reservation to a resource's schedule.
///
/// No conflict check is performed here; validate with [`is_available`]
/// against every affected resource first. Unknown resources are a logged
/// no-op.
pub fn add_reservation(
    store: &mut FleetStore,
    resource_id: &str,
    kind: ResourceKind,
    reservation: Reservation,
) {
    match schedule_mut(store, resource_id, kind) {
        Some(schedule) => schedule.push(reservation),
        None => log::warn!("add_reservation on unknown {kind} '{resource_id}' dropped"),
    }
}

/// Removes every reservation belonging to `plan_id` from a resource.
pub fn remove_reservations(
    store: &mut FleetStore,
    resource_id: &str,
    kind: ResourceKind,
    plan_id: &str,
) {
    if let Some(schedule) = schedule_mut(store, resource_id, kind) {
        schedule.retain(|r| r.plan_id != plan_id);
    }
}
