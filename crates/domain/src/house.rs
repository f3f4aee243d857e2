//! House: the root of a smart-home installation.

use crate::aggregate::{AggregateRoot, identity_equality};
use crate::id::HouseId;
use crate::location::Location;

#[derive(Debug, Clone)]
pub struct House {
    id: HouseId,
    location: Location,
}

impl House {
    #[must_use]
    pub fn new(id: HouseId, location: Location) -> Self {
        Self { id, location }
    }

    #[must_use]
    pub fn id(&self) -> &HouseId {
        &self.id
    }

    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Replace the house location, e.g. after the owner corrects the address.
    pub fn configure_location(&mut self, location: Location) {
        self.location = location;
    }
}

impl AggregateRoot for House {
    type Id = HouseId;

    fn identity(&self) -> &HouseId {
        &self.id
    }

    fn same_as(&self, other: &Self) -> bool {
        self.id == other.id && self.location == other.location
    }
}

identity_equality!(House);

/// Builds [`House`] aggregates.
pub trait HouseFactory {
    fn create_house(&self, id: HouseId, location: Location) -> House;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHouseFactory;

impl HouseFactory for DefaultHouseFactory {
    fn create_house(&self, id: HouseId, location: Location) -> House {
        House::new(id, location)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::location::{Address, Country, GpsCoordinates, Latitude, Longitude, ZipCode};

    fn location(address: &str) -> Location {
        Location::new(
            Address::new(address).unwrap(),
            ZipCode::new(Country::Portugal, "4200-072").unwrap(),
            GpsCoordinates::new(Latitude::new(41.1).unwrap(), Longitude::new(-8.6).unwrap()),
        )
    }

    fn house(id: &str, address: &str) -> House {
        DefaultHouseFactory.create_house(HouseId::new(id).unwrap(), location(address))
    }

    #[test]
    fn should_equal_itself() {
        let a = house("h1", "Rua A");
        assert_eq!(a, a.clone());
        assert!(a.same_as(&a));
        assert_ne!(Some(&a), None);
    }

    #[test]
    fn should_be_equal_but_not_same_when_location_differs() {
        let a = house("h1", "Rua A");
        let b = house("h1", "Rua B");
        assert_eq!(a, b);
        assert!(!a.same_as(&b));
    }

    #[test]
    fn should_not_be_equal_when_ids_differ() {
        assert_ne!(house("h1", "Rua A"), house("h2", "Rua A"));
    }

    #[test]
    fn should_hash_by_identity() {
        let set: HashSet<House> = [house("h1", "Rua A"), house("h1", "Rua B")].into();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn should_replace_location_when_configured() {
        let mut h = house("h1", "Rua A");
        h.configure_location(location("Rua B"));
        assert_eq!(h.location().address().as_str(), "Rua B");
        assert_eq!(h.id().as_str(), "h1");
    }
}
