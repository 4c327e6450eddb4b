//! Plan lifecycle management.
//!
//! A [`PlanDraft`] collects a driver/truck/trailer selection and an
//! ordered stop list, then [`PlanDraft::save`] validates and commits it:
//! working hours first, then availability of all three resources, and
//! only after every check passes are reservations written. Failures
//! therefore never leave a partial reservation behind — atomicity by
//! construction, not rollback.
//!
//! Saving an edited plan removes the plan's reservations from the
//! resources recorded on the stored plan before inserting fresh ones, so
//! a changed selection cannot strand stale claims on a deselected
//! resource.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::assembler::{self, PendingTrailerChange, StopContext};
use crate::hours;
use crate::ledger;
use crate::models::{
    plan_time_bounds, DriverPlan, JobType, PlanItem, PlanType, Reservation, ResourceKind,
};
use crate::store::{new_id, FleetStore};

/// Where a draft stands in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftPhase {
    /// Nothing selected, no stops.
    Empty,
    /// Resources and/or stops are being gathered.
    Building,
}

/// Outcome of a trailer selection on a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailerSelection {
    /// The selection took effect directly.
    Applied,
    /// A trailer exchange is pending; confirm or cancel it.
    ConfirmationRequired,
}

/// Why a draft mutation was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("unknown address '{0}'")]
    UnknownAddress(String),
    #[error("address '{0}' is already in the plan")]
    DuplicateAddress(String),
    #[error("customer country '{0}' does not match the plan type")]
    IneligibleCountry(String),
    #[error("working hours exceeded: {0}")]
    WorkingHours(String),
    #[error("no trailer change awaiting confirmation")]
    NoPendingChange,
}

/// Why a save was refused. Every failure aborts the whole save.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("incomplete plan: select a driver, truck, and trailer and add at least one stop")]
    IncompletePlan,
    #[error("working hours exceeded: {0}")]
    WorkingHours(String),
    #[error("cannot determine plan timing")]
    CannotDetermineTiming,
    #[error("selected {0} is not available during the planned time period")]
    ResourceUnavailable(ResourceKind),
}

/// An in-progress dispatch plan being assembled for one driver/truck/
/// trailer triple.
#[derive(Debug, Clone, Default)]
pub struct PlanDraft {
    plan_type: Option<PlanType>,
    driver_id: Option<String>,
    truck_id: Option<String>,
    trailer_id: Option<String>,
    items: Vec<PlanItem>,
    /// Saved-plan ID when editing; a save then updates instead of inserts.
    editing: Option<String>,
    /// Trailer implicitly tracked for exchange detection.
    tracked_trailer: Option<String>,
    pending_change: Option<PendingTrailerChange>,
}

impl PlanDraft {
    /// Creates an empty draft of the given plan type.
    pub fn new(plan_type: PlanType) -> Self {
        Self {
            plan_type: Some(plan_type),
            ..Self::default()
        }
    }

    /// Current phase of the draft.
    pub fn phase(&self) -> DraftPhase {
        let empty = self.driver_id.is_none()
            && self.truck_id.is_none()
            && self.trailer_id.is_none()
            && self.items.is_empty();
        if empty {
            DraftPhase::Empty
        } else {
            DraftPhase::Building
        }
    }

    /// The draft's stops, in sequence order.
    pub fn items(&self) -> &[PlanItem] {
        &self.items
    }

    /// Selected driver.
    pub fn driver_id(&self) -> Option<&str> {
        self.driver_id.as_deref()
    }

    /// Selected truck.
    pub fn truck_id(&self) -> Option<&str> {
        self.truck_id.as_deref()
    }

    /// Selected trailer.
    pub fn trailer_id(&self) -> Option<&str> {
        self.trailer_id.as_deref()
    }

    /// Whether a save will update an existing plan.
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// The trailer exchange awaiting confirmation, if any.
    pub fn pending_trailer_change(&self) -> Option<&PendingTrailerChange> {
        self.pending_change.as_ref()
    }

    /// Re-hydrates the draft from a committed plan.
    ///
    /// The draft is tagged with the plan's ID so the next save becomes an
    /// update rather than an insert.
    pub fn load_for_editing(&mut self, plan: &DriverPlan) {
        self.plan_type = Some(plan.plan_type);
        self.driver_id = Some(plan.driver_id.clone());
        self.truck_id = Some(plan.truck_id.clone());
        self.trailer_id = Some(plan.trailer_id.clone());
        self.tracked_trailer = Some(plan.trailer_id.clone());
        self.items = plan.items.clone();
        self.editing = Some(plan.id.clone());
        self.pending_change = None;
    }

    /// Selects a driver. Changing drivers discards the gathered stops and
    /// any editing tag; the draft starts over for the new driver.
    pub fn select_driver(&mut self, driver_id: impl Into<String>) {
        let driver_id = driver_id.into();
        if self.driver_id.as_deref() == Some(driver_id.as_str()) {
            return;
        }
        self.driver_id = Some(driver_id);
        self.items.clear();
        self.editing = None;
        self.tracked_trailer = None;
        self.pending_change = None;
    }

    /// Selects a truck.
    pub fn select_truck(&mut self, truck_id: impl Into<String>) {
        self.truck_id = Some(truck_id.into());
    }

    /// Selects a trailer.
    ///
    /// Switching to a different trailer while stops already exist does not
    /// take effect directly: it parks a [`PendingTrailerChange`] and
    /// returns [`TrailerSelection::ConfirmationRequired`]. The caller
    /// confirms with drop-off/pick-up locations or cancels.
    pub fn select_trailer(&mut self, trailer_id: impl Into<String>) -> TrailerSelection {
        let trailer_id = trailer_id.into();

        let needs_confirmation = !self.items.is_empty()
            && self
                .trailer_id
                .as_deref()
                .is_some_and(|current| current != trailer_id)
            && self
                .tracked_trailer
                .as_deref()
                .is_some_and(|tracked| tracked != trailer_id);

        if needs_confirmation {
            // tracked_trailer is Some here per the guard above
            let old_trailer = self.tracked_trailer.clone().unwrap_or_default();
            self.pending_change = Some(PendingTrailerChange {
                old_trailer,
                new_trailer: trailer_id,
            });
            return TrailerSelection::ConfirmationRequired;
        }

        self.tracked_trailer = Some(trailer_id.clone());
        self.trailer_id = Some(trailer_id);
        TrailerSelection::Applied
    }

    /// Confirms the pending trailer exchange, appending the synthesized
    /// 90-minute stop and switching the selection to the new trailer.
    pub fn confirm_trailer_change(
        &mut self,
        store: &FleetStore,
        drop_off_id: &str,
        pick_up_id: &str,
        booking_time: DateTime<Utc>,
    ) -> Result<(), DraftError> {
        let Some(pending) = self.pending_change.take() else {
            return Err(DraftError::NoPendingChange);
        };

        let ctx = StopContext {
            sequence: self.items.len() as u32 + 1,
            assigned_trailer: Some(pending.new_trailer.as_str()),
            driver_id: self.driver_id.as_deref(),
            truck_id: self.truck_id.as_deref(),
        };
        let stop = assembler::build_trailer_change_stop(
            store,
            &pending.old_trailer,
            &pending.new_trailer,
            drop_off_id,
            pick_up_id,
            booking_time,
            &ctx,
        );
        self.items.push(stop);
        assembler::renumber(&mut self.items);
        self.trailer_id = Some(pending.new_trailer.clone());
        self.tracked_trailer = Some(pending.new_trailer);
        Ok(())
    }

    /// Discards the pending trailer exchange; the selection stays as it
    /// was.
    pub fn cancel_trailer_change(&mut self) {
        self.pending_change = None;
    }

    /// Adds a delivery or collection stop at a customer address.
    ///
    /// Rejects addresses already in the plan, customers outside the plan
    /// type's territory, and stops whose duration no longer fits the
    /// selected driver's remaining hour budget.
    pub fn add_stop(
        &mut self,
        store: &FleetStore,
        address_id: &str,
        job_type: JobType,
        booking_time: DateTime<Utc>,
    ) -> Result<(), DraftError> {
        let Some(address) = store.customer(address_id) else {
            return Err(DraftError::UnknownAddress(address_id.into()));
        };

        if self.items.iter().any(|i| i.address_id == address_id) {
            return Err(DraftError::DuplicateAddress(address_id.into()));
        }

        if let Some(plan_type) = self.plan_type {
            if !plan_type.admits(&address.country, store.home_country()) {
                return Err(DraftError::IneligibleCountry(address.country.clone()));
            }
        }

        if let Some(driver_id) = self.driver_id.as_deref() {
            let projected =
                assembler::total_duration(&self.items) + assembler::duration_for(job_type);
            let check = hours::can_take_plan(store, driver_id, projected);
            if !check.can_take {
                return Err(DraftError::WorkingHours(check.reason.unwrap_or_default()));
            }
        }

        let ctx = StopContext {
            sequence: self.items.len() as u32 + 1,
            assigned_trailer: self.trailer_id.as_deref(),
            driver_id: self.driver_id.as_deref(),
            truck_id: self.truck_id.as_deref(),
        };
        let stop = assembler::build_stop(address, job_type, booking_time, &ctx);
        self.items.push(stop);
        assembler::renumber(&mut self.items);

        // First stop pins the trailer tracked for exchange detection.
        if self.items.len() == 1 && self.tracked_trailer.is_none() {
            self.tracked_trailer = self.trailer_id.clone();
        }

        Ok(())
    }

    /// Removes a stop by ID, renumbering the remainder densely.
    pub fn remove_stop(&mut self, item_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != item_id);
        if self.items.len() < before {
            assembler::renumber(&mut self.items);
            true
        } else {
            false
        }
    }

    /// Moves a stop to a new position, renumbering densely.
    pub fn reorder_stops(&mut self, from: usize, to: usize) -> bool {
        assembler::reorder(&mut self.items, from, to)
    }

    /// Resets the draft to empty, dropping any editing tag.
    pub fn clear(&mut self) {
        *self = Self {
            plan_type: self.plan_type,
            ..Self::default()
        };
    }

    /// Validates and commits the draft.
    ///
    /// Checks run in a fixed order — completeness, working hours, timing,
    /// then driver/truck/trailer availability — and all of them complete
    /// before any ledger write. On success the reservations are written to
    /// all three resources, the plan record is inserted (or replaced when
    /// editing), the draft is cleared, and the plan ID is returned.
    pub fn save(&mut self, store: &mut FleetStore, now: DateTime<Utc>) -> Result<String, SaveError> {
        let (Some(driver_id), Some(truck_id), Some(trailer_id)) = (
            self.driver_id.clone(),
            self.truck_id.clone(),
            self.trailer_id.clone(),
        ) else {
            return Err(SaveError::IncompletePlan);
        };
        if self.items.is_empty() {
            return Err(SaveError::IncompletePlan);
        }

        let duration = assembler::total_duration(&self.items);
        let check = hours::can_take_plan(store, &driver_id, duration);
        if !check.can_take {
            return Err(SaveError::WorkingHours(check.reason.unwrap_or_default()));
        }

        let Some(bounds) = plan_time_bounds(&self.items) else {
            // Unreachable after the non-empty check, handled defensively.
            return Err(SaveError::CannotDetermineTiming);
        };

        let exclude = self.editing.as_deref();
        let triple = [
            (driver_id.as_str(), ResourceKind::Driver),
            (truck_id.as_str(), ResourceKind::Truck),
            (trailer_id.as_str(), ResourceKind::Trailer),
        ];
        for (id, kind) in triple {
            if !ledger::is_available(store, id, kind, &bounds, exclude) {
                return Err(SaveError::ResourceUnavailable(kind));
            }
        }

        // All checks passed; mutations start here.
        let editing = self
            .editing
            .as_ref()
            .and_then(|id| store.plan(id))
            .map(|p| {
                (
                    p.id.clone(),
                    p.driver_id.clone(),
                    p.truck_id.clone(),
                    p.trailer_id.clone(),
                    p.created_at,
                )
            });

        let plan_id = match &editing {
            Some((id, ..)) => id.clone(),
            None => new_id(),
        };

        if let Some((id, old_driver, old_truck, old_trailer, _)) = &editing {
            // Release the stored plan's claims before re-inserting, from
            // the resources it actually held (the selection may have
            // changed since).
            ledger::remove_reservations(store, old_driver, ResourceKind::Driver, id);
            ledger::remove_reservations(store, old_truck, ResourceKind::Truck, id);
            ledger::remove_reservations(store, old_trailer, ResourceKind::Trailer, id);
        }

        for (id, kind) in triple {
            let reservation = Reservation::new(plan_id.clone(), driver_id.clone(), bounds)
                .with_notes("Plan execution");
            ledger::add_reservation(store, id, kind, reservation);
        }

        let plan = DriverPlan {
            id: plan_id.clone(),
            driver_id: driver_id.clone(),
            truck_id,
            trailer_id,
            plan_type: self.plan_type.unwrap_or(PlanType::Local),
            items: std::mem::take(&mut self.items),
            created_at: editing.as_ref().map(|(.., created)| *created).unwrap_or(now),
            updated_at: now,
        };

        if editing.is_some() {
            store.replace_plan(plan);
        } else {
            store.insert_plan(plan);
            hours::record_planned_minutes(store, &driver_id, duration);
        }

        self.clear();
        log::debug!("plan '{plan_id}' saved for driver '{driver_id}'");
        Ok(plan_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CustomerAddress, Driver, TimeWindow, Trailer, Truck};
    use chrono::TimeZone;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, h, m, 0).unwrap()
    }

    fn sample_store() -> FleetStore {
        let mut store = FleetStore::new();
        store.add_driver(Driver::new("drv-1", "John Smith"));
        store.add_driver(Driver::new("drv-2", "Maria Garcia"));
        store.add_truck(Truck::new("trk-1", "TRK-001"));
        store.add_truck(Truck::new("trk-2", "TRK-002"));
        store.add_trailer(Trailer::new("trl-1", "TRL-001"));
        store.add_trailer(Trailer::new("trl-2", "TRL-002"));
        store.add_customer(CustomerAddress::new("cust-1", "ACME").with_country("USA"));
        store.add_customer(CustomerAddress::new("cust-2", "Globex").with_country("USA"));
        store.add_customer(CustomerAddress::new("cust-3", "Maple Freight").with_country("Canada"));
        store.add_depot(CustomerAddress::new("depot-1", "Main Depot").with_country("USA"));
        store
    }

    fn building_draft(store: &FleetStore) -> PlanDraft {
        let mut draft = PlanDraft::new(PlanType::Local);
        draft.select_driver("drv-1");
        draft.select_truck("trk-1");
        assert_eq!(draft.select_trailer("trl-1"), TrailerSelection::Applied);
        draft
            .add_stop(store, "cust-1", JobType::Delivery, at(9, 0))
            .unwrap();
        draft
    }

    #[test]
    fn test_phase_transitions() {
        let store = sample_store();
        let mut draft = PlanDraft::new(PlanType::Local);
        assert_eq!(draft.phase(), DraftPhase::Empty);
        draft.select_driver("drv-1");
        assert_eq!(draft.phase(), DraftPhase::Building);
        draft.select_truck("trk-1");
        draft.select_trailer("trl-1");
        draft
            .add_stop(&store, "cust-1", JobType::Delivery, at(9, 0))
            .unwrap();
        draft.clear();
        assert_eq!(draft.phase(), DraftPhase::Empty);
    }

    #[test]
    fn test_incomplete_plan_rejected() {
        let mut store = sample_store();
        let mut draft = PlanDraft::new(PlanType::Local);
        assert_eq!(draft.save(&mut store, at(12, 0)), Err(SaveError::IncompletePlan));

        draft.select_driver("drv-1");
        draft.select_truck("trk-1");
        draft.select_trailer("trl-1");
        // No stops yet.
        assert_eq!(draft.save(&mut store, at(12, 0)), Err(SaveError::IncompletePlan));
    }

    #[test]
    fn test_save_commits_reservations_plan_and_hours() {
        let mut store = sample_store();
        let mut draft = building_draft(&store);
        draft
            .add_stop(&store, "cust-2", JobType::Collection, at(10, 30))
            .unwrap();

        let plan_id = draft.save(&mut store, at(12, 0)).unwrap();
        assert_eq!(draft.phase(), DraftPhase::Empty);

        let plan = store.plan(&plan_id).unwrap();
        assert_eq!(plan.driver_id, "drv-1");
        assert_eq!(plan.items.len(), 2);
        assert_eq!(plan.created_at, at(12, 0));

        // One reservation per resource, sharing the plan ID but not the
        // record.
        for (schedule, _) in [
            (&store.driver("drv-1").unwrap().schedule, "driver"),
            (&store.truck("trk-1").unwrap().schedule, "truck"),
            (&store.trailer("trl-1").unwrap().schedule, "trailer"),
        ] {
            assert_eq!(schedule.len(), 1);
            assert_eq!(schedule[0].plan_id, plan_id);
            assert_eq!(schedule[0].start_time, at(9, 0));
            assert_eq!(schedule[0].end_time, at(11, 15));
        }
        let driver_res_id = &store.driver("drv-1").unwrap().schedule[0].id;
        let truck_res_id = &store.truck("trk-1").unwrap().schedule[0].id;
        assert_ne!(driver_res_id, truck_res_id);

        // New-plan save adds the duration to the consumed tally.
        let wh = &store.driver("drv-1").unwrap().working_hours;
        assert_eq!(wh.daily_minutes_worked, 105);
        assert_eq!(wh.weekly_minutes_worked, 105);
    }

    #[test]
    fn test_save_rejects_exhausted_hours() {
        let mut store = sample_store();
        let mut draft = building_draft(&store);
        // The budget collapses between drafting and saving; the save-time
        // check still catches it (60-minute stop > 30 left).
        store.update_driver("drv-1", |d| d.working_hours.set_daily_minutes(870));

        let err = draft.save(&mut store, at(12, 0)).unwrap_err();
        assert!(matches!(err, SaveError::WorkingHours(ref r) if r.contains("daily limit")));
        // Nothing was written.
        assert!(store.driver("drv-1").unwrap().schedule.is_empty());
        assert!(store.saved_plans().is_empty());
    }

    #[test]
    fn test_conflict_checks_run_before_any_write() {
        let mut store = sample_store();

        // Occupy the trailer for the whole day under another plan.
        ledger::add_reservation(
            &mut store,
            "trl-1",
            ResourceKind::Trailer,
            Reservation::new("other-plan", "drv-2", TimeWindow::new(at(0, 0), at(23, 0))),
        );

        let mut draft = building_draft(&store);
        let err = draft.save(&mut store, at(12, 0)).unwrap_err();
        assert_eq!(err, SaveError::ResourceUnavailable(ResourceKind::Trailer));

        // Driver and truck ledgers stay untouched: no partial write.
        assert!(store.driver("drv-1").unwrap().schedule.is_empty());
        assert!(store.truck("trk-1").unwrap().schedule.is_empty());
        assert!(store.saved_plans().is_empty());
    }

    #[test]
    fn test_resources_checked_driver_first() {
        let mut store = sample_store();
        let whole_day = TimeWindow::new(at(0, 0), at(23, 0));
        ledger::add_reservation(
            &mut store,
            "drv-1",
            ResourceKind::Driver,
            Reservation::new("other-plan", "drv-1", whole_day),
        );
        ledger::add_reservation(
            &mut store,
            "trl-1",
            ResourceKind::Trailer,
            Reservation::new("other-plan", "drv-1", whole_day),
        );

        let mut draft = building_draft(&store);
        // Both driver and trailer conflict; the driver is reported.
        assert_eq!(
            draft.save(&mut store, at(12, 0)),
            Err(SaveError::ResourceUnavailable(ResourceKind::Driver))
        );
    }

    #[test]
    fn test_edit_resave_does_not_conflict_with_itself() {
        let mut store = sample_store();
        let mut draft = building_draft(&store);
        let plan_id = draft.save(&mut store, at(12, 0)).unwrap();

        let plan = store.plan(&plan_id).unwrap().clone();
        draft.load_for_editing(&plan);
        assert!(draft.is_editing());

        // Same resources, same bounds: the exclude-plan path must let it
        // through and the ledger must end up with exactly one claim per
        // resource.
        let resaved_id = draft.save(&mut store, at(13, 0)).unwrap();
        assert_eq!(resaved_id, plan_id);
        assert_eq!(store.driver("drv-1").unwrap().schedule.len(), 1);
        assert_eq!(store.truck("trk-1").unwrap().schedule.len(), 1);
        assert_eq!(store.trailer("trl-1").unwrap().schedule.len(), 1);

        let plan = store.plan(&plan_id).unwrap();
        assert_eq!(plan.created_at, at(12, 0)); // preserved
        assert_eq!(plan.updated_at, at(13, 0));
        assert_eq!(store.saved_plans().len(), 1);
    }

    #[test]
    fn test_edit_with_new_resources_releases_old_claims() {
        let mut store = sample_store();
        let mut draft = building_draft(&store);
        let plan_id = draft.save(&mut store, at(12, 0)).unwrap();

        let plan = store.plan(&plan_id).unwrap().clone();
        draft.load_for_editing(&plan);
        draft.select_truck("trk-2");
        assert_eq!(draft.select_trailer("trl-2"), TrailerSelection::ConfirmationRequired);
        draft
            .confirm_trailer_change(&store, "depot-1", "depot-1", at(11, 30))
            .unwrap();

        draft.save(&mut store, at(13, 0)).unwrap();

        // Old truck and trailer hold no stale reservations.
        assert!(store.truck("trk-1").unwrap().schedule.is_empty());
        assert!(store.trailer("trl-1").unwrap().schedule.is_empty());
        assert_eq!(store.truck("trk-2").unwrap().schedule.len(), 1);
        assert_eq!(store.trailer("trl-2").unwrap().schedule.len(), 1);

        let plan = store.plan(&plan_id).unwrap();
        assert_eq!(plan.truck_id, "trk-2");
        assert_eq!(plan.trailer_id, "trl-2");
        assert_eq!(plan.items.len(), 2); // original stop + exchange stop
    }

    #[test]
    fn test_add_stop_rejections() {
        let store = sample_store();
        let mut draft = building_draft(&store);

        assert_eq!(
            draft.add_stop(&store, "cust-1", JobType::Delivery, at(10, 0)),
            Err(DraftError::DuplicateAddress("cust-1".into()))
        );
        assert_eq!(
            draft.add_stop(&store, "nowhere", JobType::Delivery, at(10, 0)),
            Err(DraftError::UnknownAddress("nowhere".into()))
        );
        assert_eq!(
            draft.add_stop(&store, "cust-3", JobType::Delivery, at(10, 0)),
            Err(DraftError::IneligibleCountry("Canada".into()))
        );
    }

    #[test]
    fn test_add_stop_enforces_hour_budget() {
        let mut store = sample_store();
        store.update_driver("drv-1", |d| d.working_hours.set_daily_minutes(810));

        let mut draft = PlanDraft::new(PlanType::Local);
        draft.select_driver("drv-1");
        draft.select_truck("trk-1");
        draft.select_trailer("trl-1");

        // 90 minutes remain: one delivery fits, a second (120 projected)
        // does not.
        draft
            .add_stop(&store, "cust-1", JobType::Delivery, at(9, 0))
            .unwrap();
        let result = draft.add_stop(&store, "cust-2", JobType::Delivery, at(10, 0));
        assert!(matches!(result, Err(DraftError::WorkingHours(ref r)) if r.contains("daily limit")));
        assert_eq!(draft.items().len(), 1);
    }

    #[test]
    fn test_trailer_change_two_phase() {
        let store = sample_store();
        let mut draft = building_draft(&store);

        assert_eq!(draft.select_trailer("trl-2"), TrailerSelection::ConfirmationRequired);
        // Selection unchanged until confirmed.
        assert_eq!(draft.trailer_id(), Some("trl-1"));
        let pending = draft.pending_trailer_change().unwrap();
        assert_eq!(pending.old_trailer, "trl-1");
        assert_eq!(pending.new_trailer, "trl-2");

        draft
            .confirm_trailer_change(&store, "cust-1", "depot-1", at(11, 0))
            .unwrap();
        assert_eq!(draft.trailer_id(), Some("trl-2"));
        assert!(draft.pending_trailer_change().is_none());

        let exchange = draft.items().last().unwrap();
        assert_eq!(exchange.job_type, JobType::TrailerChange);
        assert_eq!(exchange.estimated_duration, 90);
        assert_eq!(exchange.sequence, 2);
    }

    #[test]
    fn test_trailer_change_cancel_discards() {
        let store = sample_store();
        let mut draft = building_draft(&store);

        assert_eq!(draft.select_trailer("trl-2"), TrailerSelection::ConfirmationRequired);
        draft.cancel_trailer_change();
        assert!(draft.pending_trailer_change().is_none());
        assert_eq!(draft.trailer_id(), Some("trl-1"));
        assert_eq!(draft.items().len(), 1);

        assert_eq!(
            draft.confirm_trailer_change(&store, "depot-1", "depot-1", at(11, 0)),
            Err(DraftError::NoPendingChange)
        );
    }

    #[test]
    fn test_trailer_swap_without_stops_applies_directly() {
        let mut draft = PlanDraft::new(PlanType::Local);
        draft.select_driver("drv-1");
        draft.select_truck("trk-1");
        assert_eq!(draft.select_trailer("trl-1"), TrailerSelection::Applied);
        // No stops yet, so switching needs no ceremony.
        assert_eq!(draft.select_trailer("trl-2"), TrailerSelection::Applied);
        assert_eq!(draft.trailer_id(), Some("trl-2"));
    }

    #[test]
    fn test_remove_and_reorder_renumber() {
        let store = sample_store();
        let mut draft = building_draft(&store);
        draft
            .add_stop(&store, "cust-2", JobType::Collection, at(10, 30))
            .unwrap();
        let first_id = draft.items()[0].id.clone();

        assert!(draft.reorder_stops(0, 1));
        assert_eq!(draft.items()[1].id, first_id);
        assert_eq!(draft.items()[0].sequence, 1);
        assert_eq!(draft.items()[1].sequence, 2);

        assert!(draft.remove_stop(&first_id));
        assert_eq!(draft.items().len(), 1);
        assert_eq!(draft.items()[0].sequence, 1);
        assert!(!draft.remove_stop("missing"));
    }

    #[test]
    fn test_changing_driver_resets_draft() {
        let store = sample_store();
        let mut draft = building_draft(&store);
        draft.select_driver("drv-2");
        assert_eq!(draft.items().len(), 0);
        assert!(!draft.is_editing());
        assert_eq!(draft.driver_id(), Some("drv-2"));

        // Re-selecting the same driver keeps everything.
        draft
            .add_stop(&store, "cust-1", JobType::Delivery, at(9, 0))
            .unwrap();
        draft.select_driver("drv-2");
        assert_eq!(draft.items().len(), 1);
    }
}
