//! # Destination Resolver
//!
//! Maps a record to the view shown when it is on top of the navigation
//! path. Pure: same record in, same description out.
//!
//! | Record                      | Tint     | Caption        |
//! |-----------------------------|----------|----------------|
//! | Manufacturer "Ford"         | Blue     | none           |
//! | Manufacturer "GM"           | Indigo   | none           |
//! | Manufacturer "Toyota"       | Yellow   | none           |
//! | Manufacturer "Chrysler"     | Purple   | none           |
//! | Manufacturer (anything else)| Gray     | none           |
//! | Vehicle                     | Red      | vehicle label  |
//!
//! Colors are abstract here; the TUI decides what RGB or ANSI value a
//! `Tint` becomes.

use crate::core::record::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tint {
    Blue,
    Indigo,
    Yellow,
    Purple,
    Gray,
    Red,
}

/// Everything the renderer needs to draw a destination screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationView {
    pub title: String,
    pub tint: Tint,
    /// Text overlaid on the color fill, if any.
    pub caption: Option<String>,
}

pub fn resolve(record: &Record) -> DestinationView {
    match record {
        Record::Manufacturer(m) => DestinationView {
            title: m.name().to_string(),
            tint: manufacturer_tint(m.name()),
            caption: None,
        },
        Record::Vehicle(v) => {
            let label = v.label();
            DestinationView {
                title: label.clone(),
                tint: Tint::Red,
                caption: Some(label),
            }
        }
    }
}

/// Case-sensitive; unknown names fall back to gray.
pub fn manufacturer_tint(name: &str) -> Tint {
    match name {
        "Ford" => Tint::Blue,
        "GM" => Tint::Indigo,
        "Toyota" => Tint::Yellow,
        "Chrysler" => Tint::Purple,
        _ => Tint::Gray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::{Manufacturer, VehicleEntry};

    #[test]
    fn test_known_manufacturers() {
        assert_eq!(manufacturer_tint("Ford"), Tint::Blue);
        assert_eq!(manufacturer_tint("GM"), Tint::Indigo);
        assert_eq!(manufacturer_tint("Toyota"), Tint::Yellow);
        assert_eq!(manufacturer_tint("Chrysler"), Tint::Purple);
    }

    #[test]
    fn test_unknown_manufacturers_fall_back_to_gray() {
        for name in ["", "ford", "FORD", "Honda", "GM ", "Chrysler Corp"] {
            assert_eq!(manufacturer_tint(name), Tint::Gray, "name = {name:?}");
        }
    }

    #[test]
    fn test_known_tints_are_distinct() {
        let tints = ["Ford", "GM", "Toyota", "Chrysler"].map(manufacturer_tint);
        let unique: std::collections::HashSet<_> = tints.iter().collect();
        assert_eq!(unique.len(), 4);
        assert!(!tints.contains(&Tint::Gray));
    }

    #[test]
    fn test_resolve_manufacturer_has_no_caption() {
        let view = resolve(&Record::from(Manufacturer::new("GM")));
        assert_eq!(
            view,
            DestinationView {
                title: "GM".to_string(),
                tint: Tint::Indigo,
                caption: None,
            }
        );
    }

    #[test]
    fn test_resolve_vehicle_ignores_make() {
        // A Ford vehicle is still red, not blue
        let view = resolve(&Record::from(VehicleEntry::new("Ford", "Escape", 2022)));
        assert_eq!(view.tint, Tint::Red);
        assert_eq!(view.caption.as_deref(), Some("2022 Ford Escape"));
        assert_eq!(view.title, "2022 Ford Escape");
    }
}
