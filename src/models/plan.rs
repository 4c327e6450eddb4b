//! Plan and stop models.
//!
//! A plan is an ordered set of stops assigned to one driver/truck/trailer
//! triple. Stops carry a dense 1-based `sequence` that is renumbered on
//! every add, remove, and reorder.
//!
//! Plan identity is an explicit generated ID assigned at creation and
//! never derived from mutable fields; `created_at` is never mutated once
//! assigned.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TimeWindow;

/// Kind of work performed at a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    /// Deliver goods to the customer.
    Delivery,
    /// Collect goods from the customer.
    Collection,
    /// Drop one trailer and pick up another.
    TrailerChange,
}

/// Plan classification; restricts which customers' stops are eligible,
/// not which resources may be chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    /// Stops within the home country only.
    Local,
    /// Stops outside the home country only.
    International,
}

impl PlanType {
    /// Whether a customer in `country` may be added to a plan of this type.
    pub fn admits(&self, country: &str, home_country: &str) -> bool {
        match self {
            PlanType::Local => country == home_country,
            PlanType::International => country != home_country,
        }
    }
}

/// One stop (delivery, collection, or trailer exchange) within a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanItem {
    /// Unique stop identifier.
    pub id: String,
    /// Anchor address. Trailer exchanges reuse the drop-off location here.
    pub address_id: String,
    /// 1-based position within the plan; dense and contiguous.
    pub sequence: u32,
    /// Stop start (the booking time).
    pub start_time: DateTime<Utc>,
    /// Stop end (start + estimated duration).
    pub end_time: DateTime<Utc>,
    /// Estimated duration in minutes.
    pub estimated_duration: i64,
    /// Kind of work at this stop.
    pub job_type: JobType,
    /// When the stop was booked.
    pub booking_time: DateTime<Utc>,
    /// Trailer assigned when the stop was created.
    pub assigned_trailer: Option<String>,
    /// Driver assigned when the stop was created.
    pub driver_id: Option<String>,
    /// Truck assigned when the stop was created.
    pub truck_id: Option<String>,
    /// Free-form annotation (auto-generated for trailer exchanges).
    pub notes: Option<String>,
    /// Trailer being dropped (trailer exchanges only).
    pub previous_trailer: Option<String>,
    /// Trailer being picked up (trailer exchanges only).
    pub new_trailer: Option<String>,
    /// Address where the old trailer is dropped.
    pub drop_off_location: Option<String>,
    /// Address where the new trailer is picked up.
    pub pick_up_location: Option<String>,
}

impl PlanItem {
    /// The stop's occupied interval.
    #[inline]
    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.start_time, self.end_time)
    }
}

/// A saved dispatch plan: one driver/truck/trailer triple plus its stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverPlan {
    /// Unique plan identifier, assigned at creation.
    pub id: String,
    /// Assigned driver.
    pub driver_id: String,
    /// Assigned truck.
    pub truck_id: String,
    /// Assigned trailer.
    pub trailer_id: String,
    /// Local or international.
    pub plan_type: PlanType,
    /// Ordered stops.
    pub items: Vec<PlanItem>,
    /// Creation timestamp; immutable once assigned.
    pub created_at: DateTime<Utc>,
    /// Last save timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Overall time bounds of a stop list.
///
/// Returns `None` for an empty list. Otherwise stops are sorted by start
/// time ascending and the window runs from the first stop's start to the
/// LAST-SORTED stop's end. This is deliberately not a min/max over ends:
/// when stops are not chronologically contiguous the window can span gaps
/// or end before a longer middle stop does.
pub fn plan_time_bounds(items: &[PlanItem]) -> Option<TimeWindow> {
    if items.is_empty() {
        return None;
    }

    let mut sorted: Vec<&PlanItem> = items.iter().collect();
    sorted.sort_by_key(|item| item.start_time);

    let first = sorted.first()?;
    let last = sorted.last()?;
    Some(TimeWindow::new(first.start_time, last.end_time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, h, m, 0).unwrap()
    }

    fn stop(id: &str, start: DateTime<Utc>, minutes: i64) -> PlanItem {
        PlanItem {
            id: id.into(),
            address_id: format!("addr-{id}"),
            sequence: 1,
            start_time: start,
            end_time: start + chrono::Duration::minutes(minutes),
            estimated_duration: minutes,
            job_type: JobType::Delivery,
            booking_time: start,
            assigned_trailer: None,
            driver_id: None,
            truck_id: None,
            notes: None,
            previous_trailer: None,
            new_trailer: None,
            drop_off_location: None,
            pick_up_location: None,
        }
    }

    #[test]
    fn test_bounds_empty() {
        assert_eq!(plan_time_bounds(&[]), None);
    }

    #[test]
    fn test_bounds_single() {
        let items = vec![stop("a", at(9, 0), 60)];
        let bounds = plan_time_bounds(&items).unwrap();
        assert_eq!(bounds.start, at(9, 0));
        assert_eq!(bounds.end, at(10, 0));
    }

    #[test]
    fn test_bounds_sorted_by_start() {
        // Out of order input; bounds follow start-time order, not input order.
        let items = vec![
            stop("late", at(13, 0), 45),
            stop("early", at(8, 0), 60),
            stop("mid", at(10, 30), 60),
        ];
        let bounds = plan_time_bounds(&items).unwrap();
        assert_eq!(bounds.start, at(8, 0));
        assert_eq!(bounds.end, at(13, 45));
    }

    #[test]
    fn test_bounds_use_last_sorted_end_not_max() {
        // A long middle stop outlasts the latest-starting stop; bounds
        // still end at the latest-starting stop's end.
        let items = vec![
            stop("long", at(9, 0), 300), // ends 14:00
            stop("late", at(12, 0), 60), // ends 13:00
        ];
        let bounds = plan_time_bounds(&items).unwrap();
        assert_eq!(bounds.end, at(13, 0));
    }

    #[test]
    fn test_plan_type_admits() {
        assert!(PlanType::Local.admits("USA", "USA"));
        assert!(!PlanType::Local.admits("Canada", "USA"));
        assert!(PlanType::International.admits("Canada", "USA"));
        assert!(!PlanType::International.admits("USA", "USA"));
    }
}
