//! Canonical in-memory fleet store.
//!
//! All resources, customers, depots, and saved plans live in one explicit
//! repository passed by reference into the scheduling core — no ambient
//! singletons. The store's reservation ledgers and working-hours state are
//! the single source of truth; the cached `is_available` flags on
//! resources are derived summaries refreshed by the reconciler.
//!
//! CRUD here is deliberately simple. The scheduling logic lives in the
//! `ledger`, `hours`, `assembler`, and `lifecycle` modules.

use uuid::Uuid;

use crate::models::{
    CustomerAddress, Driver, DriverPlan, PlanType, Trailer, Truck,
};

/// Generates an opaque unique identifier.
pub(crate) fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// In-memory repository for the whole fleet.
#[derive(Debug, Clone, Default)]
pub struct FleetStore {
    drivers: Vec<Driver>,
    trucks: Vec<Truck>,
    trailers: Vec<Trailer>,
    customers: Vec<CustomerAddress>,
    depots: Vec<CustomerAddress>,
    plans: Vec<DriverPlan>,
    home_country: String,
}

impl FleetStore {
    /// Creates an empty store with `home_country` = "USA".
    pub fn new() -> Self {
        Self {
            home_country: "USA".into(),
            ..Self::default()
        }
    }

    /// Sets the home country used for local/international eligibility.
    pub fn with_home_country(mut self, country: impl Into<String>) -> Self {
        self.home_country = country.into();
        self
    }

    /// The home country.
    pub fn home_country(&self) -> &str {
        &self.home_country
    }

    // ----- query surface -----

    /// All drivers.
    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    /// All trucks.
    pub fn trucks(&self) -> &[Truck] {
        &self.trucks
    }

    /// All trailers.
    pub fn trailers(&self) -> &[Trailer] {
        &self.trailers
    }

    /// All customer addresses.
    pub fn customers(&self) -> &[CustomerAddress] {
        &self.customers
    }

    /// All depot addresses.
    pub fn depots(&self) -> &[CustomerAddress] {
        &self.depots
    }

    /// All saved plans.
    pub fn saved_plans(&self) -> &[DriverPlan] {
        &self.plans
    }

    /// Looks up a driver.
    pub fn driver(&self, id: &str) -> Option<&Driver> {
        self.drivers.iter().find(|d| d.id == id)
    }

    /// Looks up a truck.
    pub fn truck(&self, id: &str) -> Option<&Truck> {
        self.trucks.iter().find(|t| t.id == id)
    }

    /// Looks up a trailer.
    pub fn trailer(&self, id: &str) -> Option<&Trailer> {
        self.trailers.iter().find(|t| t.id == id)
    }

    /// Looks up a customer address.
    pub fn customer(&self, id: &str) -> Option<&CustomerAddress> {
        self.customers.iter().find(|c| c.id == id)
    }

    /// Looks up an address among customers, then depots.
    pub fn location(&self, id: &str) -> Option<&CustomerAddress> {
        self.customer(id)
            .or_else(|| self.depots.iter().find(|d| d.id == id))
    }

    /// The default trailer-exchange location (first depot).
    pub fn default_depot(&self) -> Option<&CustomerAddress> {
        self.depots.first()
    }

    /// Looks up a saved plan by ID.
    pub fn plan(&self, plan_id: &str) -> Option<&DriverPlan> {
        self.plans.iter().find(|p| p.id == plan_id)
    }

    /// All saved plans assigned to a driver.
    pub fn plans_for_driver(&self, driver_id: &str) -> Vec<&DriverPlan> {
        self.plans
            .iter()
            .filter(|p| p.driver_id == driver_id)
            .collect()
    }

    /// Customers eligible for a plan of the given type.
    pub fn customers_for_plan_type(&self, plan_type: PlanType) -> Vec<&CustomerAddress> {
        self.customers
            .iter()
            .filter(|c| plan_type.admits(&c.country, &self.home_country))
            .collect()
    }

    pub(crate) fn driver_mut(&mut self, id: &str) -> Option<&mut Driver> {
        self.drivers.iter_mut().find(|d| d.id == id)
    }

    pub(crate) fn truck_mut(&mut self, id: &str) -> Option<&mut Truck> {
        self.trucks.iter_mut().find(|t| t.id == id)
    }

    pub(crate) fn trailer_mut(&mut self, id: &str) -> Option<&mut Trailer> {
        self.trailers.iter_mut().find(|t| t.id == id)
    }

    // ----- mutation surface (simple CRUD) -----

    /// Adds a driver, assigning a generated ID when blank. Returns the ID.
    pub fn add_driver(&mut self, mut driver: Driver) -> String {
        if driver.id.is_empty() {
            driver.id = new_id();
        }
        let id = driver.id.clone();
        self.drivers.push(driver);
        id
    }

    /// Edits a driver in place. Returns whether the driver was found.
    pub fn update_driver(&mut self, id: &str, edit: impl FnOnce(&mut Driver)) -> bool {
        match self.driver_mut(id) {
            Some(driver) => {
                edit(driver);
                true
            }
            None => false,
        }
    }

    /// Removes a driver. Returns whether the driver was found.
    pub fn delete_driver(&mut self, id: &str) -> bool {
        let before = self.drivers.len();
        self.drivers.retain(|d| d.id != id);
        self.drivers.len() < before
    }

    /// Adds a truck, assigning a generated ID when blank. Returns the ID.
    pub fn add_truck(&mut self, mut truck: Truck) -> String {
        if truck.id.is_empty() {
            truck.id = new_id();
        }
        let id = truck.id.clone();
        self.trucks.push(truck);
        id
    }

    /// Edits a truck in place. Returns whether the truck was found.
    pub fn update_truck(&mut self, id: &str, edit: impl FnOnce(&mut Truck)) -> bool {
        match self.truck_mut(id) {
            Some(truck) => {
                edit(truck);
                true
            }
            None => false,
        }
    }

    /// Removes a truck. Returns whether the truck was found.
    pub fn delete_truck(&mut self, id: &str) -> bool {
        let before = self.trucks.len();
        self.trucks.retain(|t| t.id != id);
        self.trucks.len() < before
    }

    /// Adds a trailer, assigning a generated ID when blank. Returns the ID.
    pub fn add_trailer(&mut self, mut trailer: Trailer) -> String {
        if trailer.id.is_empty() {
            trailer.id = new_id();
        }
        let id = trailer.id.clone();
        self.trailers.push(trailer);
        id
    }

    /// Edits a trailer in place. Returns whether the trailer was found.
    pub fn update_trailer(&mut self, id: &str, edit: impl FnOnce(&mut Trailer)) -> bool {
        match self.trailer_mut(id) {
            Some(trailer) => {
                edit(trailer);
                true
            }
            None => false,
        }
    }

    /// Removes a trailer. Returns whether the trailer was found.
    pub fn delete_trailer(&mut self, id: &str) -> bool {
        let before = self.trailers.len();
        self.trailers.retain(|t| t.id != id);
        self.trailers.len() < before
    }

    /// Adds a customer, assigning a generated ID when blank. Returns the ID.
    pub fn add_customer(&mut self, mut customer: CustomerAddress) -> String {
        if customer.id.is_empty() {
            customer.id = new_id();
        }
        let id = customer.id.clone();
        self.customers.push(customer);
        id
    }

    /// Edits a customer in place. Returns whether the customer was found.
    pub fn update_customer(&mut self, id: &str, edit: impl FnOnce(&mut CustomerAddress)) -> bool {
        match self.customers.iter_mut().find(|c| c.id == id) {
            Some(customer) => {
                edit(customer);
                true
            }
            None => false,
        }
    }

    /// Removes a customer. Returns whether the customer was found.
    pub fn delete_customer(&mut self, id: &str) -> bool {
        let before = self.customers.len();
        self.customers.retain(|c| c.id != id);
        self.customers.len() < before
    }

    /// Adds a depot address, assigning a generated ID when blank.
    pub fn add_depot(&mut self, mut depot: CustomerAddress) -> String {
        if depot.id.is_empty() {
            depot.id = new_id();
        }
        let id = depot.id.clone();
        self.depots.push(depot);
        id
    }

    /// Overwrites a driver's cached availability flag.
    pub fn set_driver_availability(&mut self, driver_id: &str, is_available: bool) -> bool {
        self.update_driver(driver_id, |d| d.is_available = is_available)
    }

    /// Inserts a new saved plan.
    pub(crate) fn insert_plan(&mut self, plan: DriverPlan) {
        self.plans.push(plan);
    }

    /// Replaces a saved plan by ID. Returns whether it was found.
    pub(crate) fn replace_plan(&mut self, plan: DriverPlan) -> bool {
        match self.plans.iter_mut().find(|p| p.id == plan.id) {
            Some(slot) => {
                *slot = plan;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CustomerAddress, Driver, PlanType, Trailer, Truck};

    fn sample_store() -> FleetStore {
        let mut store = FleetStore::new();
        store.add_driver(Driver::new("drv-1", "John Smith"));
        store.add_truck(Truck::new("trk-1", "TRK-001"));
        store.add_trailer(Trailer::new("trl-1", "TRL-001"));
        store.add_customer(CustomerAddress::new("cust-1", "ACME").with_country("USA"));
        store.add_customer(CustomerAddress::new("cust-2", "Maple Freight").with_country("Canada"));
        store.add_depot(CustomerAddress::new("depot-1", "Main Depot").with_country("USA"));
        store
    }

    #[test]
    fn test_lookups() {
        let store = sample_store();
        assert!(store.driver("drv-1").is_some());
        assert!(store.driver("missing").is_none());
        assert!(store.truck("trk-1").is_some());
        assert!(store.trailer("trl-1").is_some());
        assert_eq!(store.location("cust-1").unwrap().company_name, "ACME");
        assert_eq!(store.location("depot-1").unwrap().company_name, "Main Depot");
        assert_eq!(store.default_depot().unwrap().id, "depot-1");
    }

    #[test]
    fn test_blank_id_is_generated() {
        let mut store = FleetStore::new();
        let id = store.add_driver(Driver::new("", "Maria Garcia"));
        assert!(!id.is_empty());
        assert!(store.driver(&id).is_some());
    }

    #[test]
    fn test_update_and_delete() {
        let mut store = sample_store();
        assert!(store.update_driver("drv-1", |d| d.experience_years = 12));
        assert_eq!(store.driver("drv-1").unwrap().experience_years, 12);
        assert!(!store.update_driver("missing", |d| d.experience_years = 1));

        assert!(store.delete_truck("trk-1"));
        assert!(!store.delete_truck("trk-1"));
        assert!(store.truck("trk-1").is_none());
    }

    #[test]
    fn test_customers_for_plan_type() {
        let store = sample_store();
        let local = store.customers_for_plan_type(PlanType::Local);
        assert_eq!(local.len(), 1);
        assert_eq!(local[0].id, "cust-1");

        let international = store.customers_for_plan_type(PlanType::International);
        assert_eq!(international.len(), 1);
        assert_eq!(international[0].id, "cust-2");
    }

    #[test]
    fn test_set_driver_availability() {
        let mut store = sample_store();
        assert!(store.set_driver_availability("drv-1", false));
        assert!(!store.driver("drv-1").unwrap().is_available);
        assert!(!store.set_driver_availability("missing", false));
    }
}
