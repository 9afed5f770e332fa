use crate::player::PlayerId;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a city on the map.
///
/// # JSON
/// Cities are serialized as their index.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct CityId(pub usize);

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "city #{}", self.0)
    }
}

/// Top-level representation of a connection between two cities.
pub type CityToCity = (CityId, CityId);

/// A city of the map, which can hold at most one station.
#[derive(Clone, Debug, PartialEq)]
pub struct City {
    name: String,
    station_owner: Option<PlayerId>,
}

impl City {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            station_owner: None,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player who built a station in this city, if any.
    #[inline]
    pub fn station_owner(&self) -> Option<PlayerId> {
        self.station_owner
    }

    /// Panics if a station is already built here; stations are never rebuilt nor released.
    pub(crate) fn set_station_owner(&mut self, player_id: PlayerId) {
        assert!(
            self.station_owner.is_none(),
            "A station is already built in {}.",
            self.name
        );
        self.station_owner = Some(player_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_id_to_json() -> serde_json::Result<()> {
        assert_eq!(serde_json::to_string(&CityId(12))?, "12");
        assert_eq!(serde_json::from_str::<CityId>("3")?, CityId(3));
        Ok(())
    }

    #[test]
    fn city_station_owner() {
        let mut city = City::new("Wien");
        assert_eq!(city.name(), "Wien");
        assert!(city.station_owner().is_none());

        city.set_station_owner(2);
        assert_eq!(city.station_owner(), Some(2));
    }

    #[test]
    #[should_panic]
    fn city_station_cannot_be_rebuilt() {
        let mut city = City::new("Wien");
        city.set_station_owner(0);
        city.set_station_owner(1);
    }
}
