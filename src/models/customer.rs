//! Customer address model.
//!
//! Addresses are both delivery/collection destinations and trailer-exchange
//! locations. Depots are plain addresses held separately by the store and
//! used as fallback exchange locations.

use serde::{Deserialize, Serialize};

/// A geographic coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A customer (or depot) address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerAddress {
    /// Unique address identifier.
    pub id: String,
    /// Company name shown on cards and in exchange notes.
    pub company_name: String,
    /// Contact person.
    pub contact_person: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Postal code.
    pub zip_code: String,
    /// Country; drives local/international plan eligibility.
    pub country: String,
    /// Phone number.
    pub phone: String,
    /// Email address.
    pub email: String,
    /// Map coordinates.
    pub coordinates: GeoPoint,
}

impl CustomerAddress {
    /// Creates an address with the given ID and company name.
    pub fn new(id: impl Into<String>, company_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            company_name: company_name.into(),
            contact_person: String::new(),
            address: String::new(),
            city: String::new(),
            zip_code: String::new(),
            country: String::new(),
            phone: String::new(),
            email: String::new(),
            coordinates: GeoPoint::default(),
        }
    }

    /// Sets the country.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Sets the city.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Sets street address and postal code.
    pub fn with_street(mut self, address: impl Into<String>, zip_code: impl Into<String>) -> Self {
        self.address = address.into();
        self.zip_code = zip_code.into();
        self
    }

    /// Sets the contact person.
    pub fn with_contact(mut self, contact_person: impl Into<String>) -> Self {
        self.contact_person = contact_person.into();
        self
    }

    /// Sets the coordinates.
    pub fn with_coordinates(mut self, lat: f64, lng: f64) -> Self {
        self.coordinates = GeoPoint { lat, lng };
        self
    }
}
