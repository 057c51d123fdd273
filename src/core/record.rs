//! # Records
//!
//! The two kinds of sample record the app navigates between, plus the
//! `Record` union that the navigation path and the destination resolver
//! work with.
//!
//! ```text
//! Record
//! ├── Manufacturer { id, name }
//! └── Vehicle(VehicleEntry { id, make, model, year })
//! ```
//!
//! Both record types carry a random identity assigned at construction.
//! Equality and hashing go through that identity only, so two manufacturers
//! that happen to share a name are still different records.

use std::fmt;
use std::hash::{Hash, Hasher};

use uuid::Uuid;

/// A vehicle manufacturer. Its `name` is the discriminant the destination
/// resolver branches on.
#[derive(Debug, Clone)]
pub struct Manufacturer {
    id: Uuid,
    name: String,
}

impl Manufacturer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Manufacturer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Manufacturer {}

impl Hash for Manufacturer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A single vehicle. The display label is derived on every read.
#[derive(Debug, Clone)]
pub struct VehicleEntry {
    id: Uuid,
    make: String,
    model: String,
    year: i32,
}

impl VehicleEntry {
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            make: make.into(),
            model: model.into(),
            year,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// `"{year} {make} {model}"`, e.g. `"2022 Ford Escape"`.
    pub fn label(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}

impl PartialEq for VehicleEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for VehicleEntry {}

impl Hash for VehicleEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Anything that can sit on the navigation path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Record {
    Manufacturer(Manufacturer),
    Vehicle(VehicleEntry),
}

impl Record {
    /// Text used for list rows and breadcrumbs.
    pub fn title(&self) -> String {
        match self {
            Record::Manufacturer(m) => m.name().to_string(),
            Record::Vehicle(v) => v.label(),
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            Record::Manufacturer(m) => m.id(),
            Record::Vehicle(v) => v.id(),
        }
    }
}

impl From<Manufacturer> for Record {
    fn from(m: Manufacturer) -> Self {
        Record::Manufacturer(m)
    }
}

impl From<VehicleEntry> for Record {
    fn from(v: VehicleEntry) -> Self {
        Record::Vehicle(v)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title())
    }
}
