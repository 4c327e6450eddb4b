//! Fleet resource models.
//!
//! Resources are the entities a plan claims: drivers, trucks, and
//! trailers. Each owns a `schedule` of reservations, which is the ground
//! truth for conflict checks. The `is_available` flag is a derived, cached
//! summary ("no in-progress reservation covers the current instant") that
//! the reconciler refreshes from the schedule; it must never be consulted
//! for conflict decisions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Reservation, WorkingHours};

/// Resource classification used by the schedule ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Driver,
    Truck,
    Trailer,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResourceKind::Driver => "driver",
            ResourceKind::Truck => "truck",
            ResourceKind::Trailer => "trailer",
        };
        f.write_str(s)
    }
}

/// Truck fuel type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Diesel,
    Electric,
    Hybrid,
}

/// Trailer body type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailerType {
    Flatbed,
    Enclosed,
    Refrigerated,
    Tanker,
}

/// Trailer dimensions in meters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrailerDimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

/// A driver: the only resource that carries a working-hours budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    /// Unique driver identifier.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Commercial license number.
    pub license_number: String,
    /// Phone number.
    pub phone: String,
    /// Email address.
    pub email: String,
    /// Cached availability summary; refreshed from the schedule.
    pub is_available: bool,
    /// Years of driving experience.
    pub experience_years: u32,
    /// Reservation ledger for this driver.
    pub schedule: Vec<Reservation>,
    /// Daily/weekly minute budget.
    pub working_hours: WorkingHours,
}

impl Driver {
    /// Creates an available driver with a fresh working-hours budget.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            license_number: String::new(),
            phone: String::new(),
            email: String::new(),
            is_available: true,
            experience_years: 0,
            schedule: Vec::new(),
            working_hours: WorkingHours::default(),
        }
    }

    /// Sets the license number.
    pub fn with_license(mut self, license_number: impl Into<String>) -> Self {
        self.license_number = license_number.into();
        self
    }

    /// Sets contact details.
    pub fn with_contact(mut self, phone: impl Into<String>, email: impl Into<String>) -> Self {
        self.phone = phone.into();
        self.email = email.into();
        self
    }

    /// Sets years of experience.
    pub fn with_experience(mut self, years: u32) -> Self {
        self.experience_years = years;
        self
    }

    /// Sets the working-hours budget.
    pub fn with_working_hours(mut self, working_hours: WorkingHours) -> Self {
        self.working_hours = working_hours;
        self
    }
}

/// A truck (tractor unit).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Truck {
    /// Unique truck identifier.
    pub id: String,
    /// Registration plate.
    pub plate_number: String,
    /// Manufacturer model.
    pub model: String,
    /// Model year.
    pub year: u32,
    /// Towing capacity in tons.
    pub capacity_tons: f64,
    /// Cached availability summary; refreshed from the schedule.
    pub is_available: bool,
    /// Fuel type.
    pub fuel_type: FuelType,
    /// Reservation ledger for this truck.
    pub schedule: Vec<Reservation>,
}

impl Truck {
    /// Creates an available diesel truck.
    pub fn new(id: impl Into<String>, plate_number: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            plate_number: plate_number.into(),
            model: String::new(),
            year: 0,
            capacity_tons: 0.0,
            is_available: true,
            fuel_type: FuelType::Diesel,
            schedule: Vec::new(),
        }
    }

    /// Sets model and year.
    pub fn with_model(mut self, model: impl Into<String>, year: u32) -> Self {
        self.model = model.into();
        self.year = year;
        self
    }

    /// Sets the capacity in tons.
    pub fn with_capacity(mut self, capacity_tons: f64) -> Self {
        self.capacity_tons = capacity_tons;
        self
    }

    /// Sets the fuel type.
    pub fn with_fuel(mut self, fuel_type: FuelType) -> Self {
        self.fuel_type = fuel_type;
        self
    }
}

/// A trailer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trailer {
    /// Unique trailer identifier.
    pub id: String,
    /// Registration plate.
    pub plate_number: String,
    /// Body type.
    pub trailer_type: TrailerType,
    /// Load capacity in tons.
    pub capacity_tons: f64,
    /// Cached availability summary; refreshed from the schedule.
    pub is_available: bool,
    /// Where the trailer currently sits (depot or customer address ID).
    pub current_location: String,
    /// Physical dimensions.
    pub dimensions: TrailerDimensions,
    /// Reservation ledger for this trailer.
    pub schedule: Vec<Reservation>,
}

impl Trailer {
    /// Creates an available enclosed trailer.
    pub fn new(id: impl Into<String>, plate_number: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            plate_number: plate_number.into(),
            trailer_type: TrailerType::Enclosed,
            capacity_tons: 0.0,
            is_available: true,
            current_location: String::new(),
            dimensions: TrailerDimensions::default(),
            schedule: Vec::new(),
        }
    }

    /// Sets the body type.
    pub fn with_type(mut self, trailer_type: TrailerType) -> Self {
        self.trailer_type = trailer_type;
        self
    }

    /// Sets the capacity in tons.
    pub fn with_capacity(mut self, capacity_tons: f64) -> Self {
        self.capacity_tons = capacity_tons;
        self
    }

    /// Sets the current location (address ID).
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.current_location = location.into();
        self
    }

    /// Sets the dimensions in meters.
    pub fn with_dimensions(mut self, length: f64, width: f64, height: f64) -> Self {
        self.dimensions = TrailerDimensions {
            length,
            width,
            height,
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_builder() {
        let d = Driver::new("drv-1", "John Smith")
            .with_license("CDL123456")
            .with_contact("+1 555-0101", "john.smith@example.com")
            .with_experience(8);

        assert_eq!(d.id, "drv-1");
        assert_eq!(d.name, "John Smith");
        assert_eq!(d.license_number, "CDL123456");
        assert_eq!(d.experience_years, 8);
        assert!(d.is_available);
        assert!(d.schedule.is_empty());
        assert_eq!(d.working_hours.max_daily_minutes, 900);
        assert_eq!(d.working_hours.max_weekly_minutes, 3600);
    }

    #[test]
    fn test_truck_builder() {
        let t = Truck::new("trk-1", "TRK-001")
            .with_model("Volvo FH16", 2022)
            .with_capacity(44.0)
            .with_fuel(FuelType::Electric);

        assert_eq!(t.plate_number, "TRK-001");
        assert_eq!(t.year, 2022);
        assert_eq!(t.fuel_type, FuelType::Electric);
    }

    #[test]
    fn test_trailer_builder() {
        let t = Trailer::new("trl-1", "TRL-001")
            .with_type(TrailerType::Refrigerated)
            .with_capacity(24.0)
            .with_location("depot-1")
            .with_dimensions(13.6, 2.48, 2.7);

        assert_eq!(t.trailer_type, TrailerType::Refrigerated);
        assert_eq!(t.current_location, "depot-1");
        assert!((t.dimensions.length - 13.6).abs() < 1e-10);
    }

    #[test]
    fn test_resource_kind_display() {
        assert_eq!(ResourceKind::Driver.to_string(), "driver");
        assert_eq!(ResourceKind::Truck.to_string(), "truck");
        assert_eq!(ResourceKind::Trailer.to_string(), "trailer");
    }
}
