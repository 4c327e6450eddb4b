//! Dispatch domain models.
//!
//! Core data types for fleet-dispatch planning: resources with reservation
//! ledgers, driver working-hours budgets, customer addresses, and plans
//! composed of ordered stops.
//!
//! # Time Model
//! Timestamps are `chrono::DateTime<Utc>` and serialize as ISO-8601
//! strings. All durations and hour budgets are integer minutes. Intervals
//! are half-open `[start, end)`; touching endpoints never conflict.

mod customer;
mod plan;
mod reservation;
mod resource;
mod time_window;
mod working_hours;

pub use customer::{CustomerAddress, GeoPoint};
pub use plan::{plan_time_bounds, DriverPlan, JobType, PlanItem, PlanType};
pub use reservation::{Reservation, ReservationStatus};
pub use resource::{
    Driver, FuelType, ResourceKind, Trailer, TrailerDimensions, TrailerType, Truck,
};
pub use time_window::TimeWindow;
pub use working_hours::{
    WorkingHours, DEFAULT_MAX_DAILY_MINUTES, DEFAULT_MAX_WEEKLY_MINUTES,
};
