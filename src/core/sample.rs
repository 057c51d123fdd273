//! # Sample Data
//!
//! The fixed record sets shown on the root screen. Built once at startup
//! and only read afterwards.

use crate::core::record::{Manufacturer, Record, VehicleEntry};

#[derive(Debug, Clone)]
pub struct SampleData {
    pub manufacturers: Vec<Manufacturer>,
    pub vehicles: Vec<VehicleEntry>,
}

impl SampleData {
    pub fn new() -> Self {
        let manufacturers = ["Ford", "GM", "Toyota", "Chrysler"]
            .into_iter()
            .map(Manufacturer::new)
            .collect();

        let vehicles = vec![
            VehicleEntry::new("Ford", "Escape", 2022),
            VehicleEntry::new("GM", "Trailblazer", 1996),
            VehicleEntry::new("Chrysler", "SeaBreeze", 2002),
        ];

        Self {
            manufacturers,
            vehicles,
        }
    }

    /// Find a record by the text its row shows. Manufacturers are checked
    /// before vehicles.
    pub fn find_by_title(&self, title: &str) -> Option<Record> {
        self.manufacturers
            .iter()
            .find(|m| m.name() == title)
            .cloned()
            .map(Record::from)
            .or_else(|| {
                self.vehicles
                    .iter()
                    .find(|v| v.label() == title)
                    .cloned()
                    .map(Record::from)
            })
    }
}

impl Default for SampleData {
    fn default() -> Self {
        Self::new()
    }
}
