//! Fleet-dispatch planning core.
//!
//! Assigns a driver, truck, and trailer to an ordered sequence of stops
//! (deliveries, collections, trailer exchanges) and tracks resource
//! reservations and driver working-hour budgets over time. The crate is a
//! pure in-process core: the presentation layer calls it directly, and
//! every validation outcome comes back as a value rather than a panic.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Driver`, `Truck`, `Trailer`,
//!   `Reservation`, `WorkingHours`, `PlanItem`, `DriverPlan`, `TimeWindow`
//! - **`store`**: `FleetStore`, the canonical in-memory repository
//! - **`ledger`**: reservation add/remove/availability over the store
//! - **`hours`**: working-hours admission checks and clock transitions
//! - **`assembler`**: stop construction, durations, reordering
//! - **`lifecycle`**: `PlanDraft` assembly and atomic save orchestration
//! - **`reconcile`**: periodic availability / hours reconciliation passes
//!
//! # Architecture
//!
//! The store is the single source of truth and is passed by reference
//! into every operation — there are no ambient singletons and no
//! background threads. Execution is single-writer and synchronous: each
//! user action or timer tick is one immediate state transition.

pub mod assembler;
pub mod hours;
pub mod ledger;
pub mod lifecycle;
pub mod models;
pub mod reconcile;
pub mod store;
