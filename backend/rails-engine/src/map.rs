use crate::card::TrainColor;
use crate::city::{City, CityId, CityToCity};
use crate::destination::{DestinationCard, DestinationKind};
use crate::error::MapError;
use crate::player::PlayerId;

use serde::Serialize;
use smallvec::SmallVec;
use std::cmp::max;
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use std::sync::{mpsc, Arc, Mutex};
use threadpool::ThreadPool;

lazy_static! {
    static ref THREAD_POOL: Mutex<ThreadPool> = Mutex::new(ThreadPool::default());
}

// Paris has the highest number of neighbors in Europe, with ten routes.
const MAX_ROUTES_PER_CITY: usize = 10;

/// Parallel routes can be claimed by different players iff there are at least that many players.
pub const MIN_PLAYERS_FOR_PARALLEL_ROUTES: usize = 4;

/// Index of a route on the map.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct RouteId(pub usize);

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "route #{}", self.0)
    }
}

/// Raw description of a route, before its cities are resolved against the map.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteDefinition {
    pub start: String,
    pub end: String,
    pub length: u8,
    /// `None` for gray routes, which can be claimed with any single color.
    pub color: Option<TrainColor>,
    pub ferry_locomotives: Option<u8>,
    pub is_tunnel: bool,
}

impl RouteDefinition {
    pub fn new(
        start: impl Into<String>,
        end: impl Into<String>,
        length: u8,
        color: Option<TrainColor>,
    ) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            length,
            color,
            ferry_locomotives: None,
            is_tunnel: false,
        }
    }

    pub fn tunnel(mut self) -> Self {
        self.is_tunnel = true;
        self
    }

    pub fn ferry(mut self, locomotives: u8) -> Self {
        self.ferry_locomotives = Some(locomotives);
        self
    }

    fn validate(&self) -> Result<(), MapError> {
        let invalid = |reason| {
            Err(MapError::InvalidRoute {
                start: self.start.clone(),
                end: self.end.clone(),
                reason,
            })
        };

        if self.start == self.end {
            return invalid("a route must connect two different cities");
        }
        if self.length == 0 {
            return invalid("a route cannot be empty");
        }
        if self.color == Some(TrainColor::Locomotive) {
            return invalid("locomotive is not a route color");
        }

        match self.ferry_locomotives {
            Some(_) if self.color.is_some() => invalid("only gray routes can be ferries"),
            Some(0) => invalid("a ferry needs at least one locomotive"),
            Some(locomotives) if locomotives > self.length => {
                invalid("a ferry cannot need more locomotives than its length")
            }
            _ => Ok(()),
        }
    }
}

/// Convenience macro to declare a route between two cities, by name.
///
/// ```ignore
/// route! {"Paris", "Wien", 3, Red}
/// route! {"Paris", "Zurich", 3, Gray, tunnel}
/// route! {"London", "Dieppe", 2, Gray, ferry 1}
/// ```
macro_rules! route {
    ($start:literal, $end:literal, $length:literal, Gray) => {
        $crate::map::RouteDefinition::new($start, $end, $length, None)
    };
    ($start:literal, $end:literal, $length:literal, $color:ident) => {
        $crate::map::RouteDefinition::new(
            $start,
            $end,
            $length,
            Some($crate::card::TrainColor::$color),
        )
    };
    ($start:literal, $end:literal, $length:literal, $color:ident, tunnel) => {
        route!($start, $end, $length, $color).tunnel()
    };
    ($start:literal, $end:literal, $length:literal, Gray, ferry $locomotives:literal) => {
        route!($start, $end, $length, Gray).ferry($locomotives)
    };
}

/// A route between two cities. There can be multiple "parallel" routes between the same two cities.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    /// Unique name, e.g. `"Paris - Wien"`. The second route of a parallel pair gets a `" (2)"` suffix.
    name: String,
    cities: CityToCity,
    /// Analogous to the number of train cards and trains needed to claim the route.
    length: u8,
    /// `None` means that any single color matches.
    color: Option<TrainColor>,
    /// How many of the cards paid must be locomotives, on ferries.
    ferry_locomotives: Option<u8>,
    is_tunnel: bool,
    /// Set once, when the route is claimed, and never released.
    owner: Option<PlayerId>,
}

impl Route {
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn cities(&self) -> CityToCity {
        self.cities
    }

    #[inline]
    pub fn length(&self) -> u8 {
        self.length
    }

    #[inline]
    pub fn color(&self) -> Option<TrainColor> {
        self.color
    }

    #[inline]
    pub fn ferry_locomotives(&self) -> Option<u8> {
        self.ferry_locomotives
    }

    #[inline]
    pub fn is_tunnel(&self) -> bool {
        self.is_tunnel
    }

    #[inline]
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    /// Whether this route connects the same two cities as `other`, in any direction.
    fn is_parallel_to(&self, other: &Route) -> bool {
        let (start, end) = self.cities;
        other.cities == (start, end) || other.cities == (end, start)
    }
}

/// Points granted when claiming a route of the given length.
///
/// Lengths 5 and 7 do not occur on the map, and grant nothing.
///
/// # Example
/// ```
/// use rails_engine::map::points_for_route_length;
///
/// assert_eq!(points_for_route_length(4), 7);
/// assert_eq!(points_for_route_length(8), 21);
/// assert_eq!(points_for_route_length(5), 0);
/// ```
pub fn points_for_route_length(length: u8) -> u8 {
    match length {
        1 => 1,
        2 => 2,
        3 => 4,
        4 => 7,
        6 => 15,
        8 => 21,
        _ => 0,
    }
}

/// The authoritative state of the map, per game.
/// Cities and routes never change after construction, only their owners do.
#[derive(Clone, Debug)]
pub struct Map {
    cities: Vec<City>,
    routes: Vec<Route>,
    city_ids: HashMap<String, CityId>,
    /// Depending on the number of players, parallel routes might be claimed simultaneously.
    /// In all cases, parallel routes cannot be claimed by the same player.
    parallel_routes_allowed: bool,
}

impl Map {
    /// Builds a map from city names and route definitions, validating that every route
    /// connects two known cities.
    ///
    /// # Example
    /// ```
    /// use rails_engine::map::{Map, RouteDefinition};
    ///
    /// let map = Map::new(["Paris", "Wien"], vec![RouteDefinition::new("Paris", "Wien", 3, None)]);
    /// assert!(map.is_ok());
    ///
    /// let map = Map::new(["Paris"], vec![RouteDefinition::new("Paris", "Wien", 3, None)]);
    /// assert!(map.is_err());
    /// ```
    pub fn new<S: Into<String>>(
        city_names: impl IntoIterator<Item = S>,
        route_definitions: Vec<RouteDefinition>,
    ) -> Result<Self, MapError> {
        let mut cities = Vec::new();
        let mut city_ids = HashMap::new();

        for name in city_names {
            let city = City::new(name);
            if city_ids.contains_key(city.name()) {
                return Err(MapError::DuplicateCity(city.name().to_owned()));
            }

            city_ids.insert(city.name().to_owned(), CityId(cities.len()));
            cities.push(city);
        }

        let mut routes: Vec<Route> = Vec::with_capacity(route_definitions.len());
        for definition in route_definitions {
            definition.validate()?;

            let lookup = |name: &String| {
                city_ids
                    .get(name)
                    .copied()
                    .ok_or_else(|| MapError::UnknownCity(name.clone()))
            };
            let endpoints = (lookup(&definition.start)?, lookup(&definition.end)?);

            let mut route = Route {
                name: format!("{} - {}", definition.start, definition.end),
                cities: endpoints,
                length: definition.length,
                color: definition.color,
                ferry_locomotives: definition.ferry_locomotives,
                is_tunnel: definition.is_tunnel,
                owner: None,
            };

            let num_parallel_routes = routes
                .iter()
                .filter(|other| other.is_parallel_to(&route))
                .count();
            if num_parallel_routes > 0 {
                route.name = format!("{} ({})", route.name, num_parallel_routes + 1);
            }

            routes.push(route);
        }

        Ok(Self {
            cities,
            routes,
            city_ids,
            parallel_routes_allowed: true,
        })
    }

    /// Parallel routes can be claimed by two different players iff there are enough players.
    /// Otherwise, only one of the routes connecting two cities can be claimed.
    pub fn set_num_players(&mut self, num_players: usize) {
        self.parallel_routes_allowed = num_players >= MIN_PLAYERS_FOR_PARALLEL_ROUTES;
    }

    /// Builds a destination card between two cities of this map.
    pub fn destination(
        &self,
        start: &str,
        end: &str,
        points: u8,
        kind: DestinationKind,
    ) -> Result<DestinationCard, MapError> {
        let start_id = self.city_id(start).ok_or_else(|| MapError::UnknownCity(start.to_owned()))?;
        let end_id = self.city_id(end).ok_or_else(|| MapError::UnknownCity(end.to_owned()))?;

        if start_id == end_id {
            return Err(MapError::InvalidDestination {
                start: start.to_owned(),
                end: end.to_owned(),
                reason: "a destination must connect two different cities",
            });
        }

        Ok(DestinationCard {
            name: format!("{} - {} ({})", start, end, points),
            destination: (start_id, end_id),
            points,
            kind,
        })
    }

    #[inline]
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    #[inline]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    #[inline]
    pub fn city(&self, city_id: CityId) -> &City {
        &self.cities[city_id.0]
    }

    #[inline]
    pub fn route(&self, route_id: RouteId) -> &Route {
        &self.routes[route_id.0]
    }

    pub fn city_id(&self, name: &str) -> Option<CityId> {
        self.city_ids.get(name).copied()
    }

    pub fn route_id(&self, name: &str) -> Option<RouteId> {
        self.routes
            .iter()
            .position(|route| route.name == name)
            .map(RouteId)
    }

    pub fn route_ids(&self) -> impl Iterator<Item = RouteId> {
        (0..self.routes.len()).map(RouteId)
    }

    pub fn city_ids(&self) -> impl Iterator<Item = CityId> {
        (0..self.cities.len()).map(CityId)
    }

    fn parallel_routes(&self, route_id: RouteId) -> impl Iterator<Item = &Route> {
        let route = self.route(route_id);
        self.routes
            .iter()
            .enumerate()
            .filter(move |(index, other)| *index != route_id.0 && route.is_parallel_to(other))
            .map(|(_, other)| other)
    }

    /// Whether ownership rules let `player_id` claim the route, regardless of their cards and trains.
    ///
    /// A route can be claimed if nobody owns it, if the player owns none of its parallel routes,
    /// and, in smaller games, if nobody owns any of its parallel routes.
    pub fn can_route_be_claimed_by_player(&self, route_id: RouteId, player_id: PlayerId) -> bool {
        if self.route(route_id).owner.is_some() {
            return false;
        }

        self.parallel_routes(route_id)
            .all(|parallel_route| match parallel_route.owner {
                Some(owner) if owner == player_id => false,
                Some(_) => self.parallel_routes_allowed,
                None => true,
            })
    }

    /// Marks the route as claimed by `player_id`.
    ///
    /// Panics if the route is already owned: ownership is set once and never changes.
    pub(crate) fn claim_route_for_player(&mut self, route_id: RouteId, player_id: PlayerId) {
        let route = &mut self.routes[route_id.0];
        assert!(
            route.owner.is_none(),
            "Route {} is already claimed.",
            route.name
        );
        route.owner = Some(player_id);
    }

    pub(crate) fn build_station_for_player(&mut self, city_id: CityId, player_id: PlayerId) {
        self.cities[city_id.0].set_station_owner(player_id);
    }

    /// Predicate that assess whether a given player has connected two cities on the map, based on their claimed routes.
    ///
    /// # Example
    /// ```
    /// use rails_engine::map::{Map, RouteDefinition};
    ///
    /// let map = Map::new(["Paris", "Wien"], vec![RouteDefinition::new("Paris", "Wien", 3, None)]).unwrap();
    /// let destination = (map.city_id("Paris").unwrap(), map.city_id("Wien").unwrap());
    ///
    /// // Player has not claimed any route.
    /// assert!(!map.has_player_connected(destination, 0));
    /// ```
    pub fn has_player_connected(
        &self,
        (destination_start, destination_end): CityToCity,
        player_id: PlayerId,
    ) -> bool {
        let neighbors = self.build_neighbors_of_player(player_id);
        let mut cities_visited = vec![false; self.cities.len()];
        let mut cities_to_visit = VecDeque::with_capacity(self.cities.len());

        cities_visited[destination_start.0] = true;
        cities_to_visit.push_back(destination_start);

        while let Some(city) = cities_to_visit.pop_front() {
            if city == destination_end {
                return true;
            }

            for (neighbor, _, _) in &neighbors[city.0] {
                if !cities_visited[neighbor.0] {
                    cities_visited[neighbor.0] = true;
                    cities_to_visit.push_back(*neighbor);
                }
            }
        }

        false
    }

    /// Maps each city to its adjacent cities through routes claimed by `player_id`,
    /// along with the length and id of the connecting route.
    fn build_neighbors_of_player(&self, player_id: PlayerId) -> Vec<Neighbors> {
        let mut neighbors = vec![SmallVec::new(); self.cities.len()];

        for (index, route) in self.routes.iter().enumerate() {
            if route.owner != Some(player_id) {
                continue;
            }

            let (start, end) = route.cities;
            neighbors[start.0].push((end, route.length, RouteId(index)));
            neighbors[end.0].push((start, route.length, RouteId(index)));
        }

        neighbors
    }

    /// Returns the longest continuous path spanned from the routes claimed by `player_id`.
    ///
    /// Note that a continous path may visit a city multiple times, but may not repeat a path
    /// through a route.
    pub fn get_longest_route(&self, player_id: PlayerId) -> u16 {
        let neighbors = self.build_neighbors_of_player(player_id);
        let cities_to_visit: Vec<CityId> = self
            .city_ids()
            .filter(|city| !neighbors[city.0].is_empty())
            .collect();

        // Prepare multi-threading.
        let neighbors = Arc::new(neighbors);
        let (tx, rx) = mpsc::channel();
        let num_cities_to_visit = cities_to_visit.len();
        let thread_pool = match THREAD_POOL.lock() {
            Ok(thread_pool) => thread_pool,
            Err(poisoned) => poisoned.into_inner(),
        };

        // Each city will spawn a separate job on the pool, and compute the longest route
        // starting at that city.
        for city in cities_to_visit {
            let neighbors = neighbors.clone();
            let tx = tx.clone();

            thread_pool.execute(move || {
                let longest_route =
                    Self::get_longest_route_from_city(city, &neighbors, HashSet::new(), 0);
                // The receiver only hangs up once every job has reported back.
                let _ = tx.send(longest_route);
            });
        }
        drop(tx);

        rx.iter()
            .take(num_cities_to_visit)
            .fold(0, |longest_route, length| max(longest_route, length))
    }

    fn get_longest_route_from_city(
        start: CityId,
        neighbors: &[Neighbors],
        routes_visited: HashSet<RouteId>,
        current_length: u16,
    ) -> u16 {
        let mut longest_route_from_city = current_length;

        for (end, length, route_id) in &neighbors[start.0] {
            if routes_visited.contains(route_id) {
                continue;
            }

            let mut routes_visited = routes_visited.clone();
            routes_visited.insert(*route_id);

            longest_route_from_city = max(
                longest_route_from_city,
                Self::get_longest_route_from_city(
                    *end,
                    neighbors,
                    routes_visited,
                    current_length + *length as u16,
                ),
            );
        }

        longest_route_from_city
    }
}

type Neighbors = SmallVec<[(CityId, u8, RouteId); MAX_ROUTES_PER_CITY]>;

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    fn small_map() -> Map {
        Map::new(
            ["Amsterdam", "Bruxelles", "Paris", "Frankfurt", "Essen", "Berlin"],
            vec![
                route! {"Amsterdam", "Bruxelles", 1, Black},
                route! {"Bruxelles", "Paris", 2, Yellow},
                route! {"Bruxelles", "Paris", 2, Red},
                route! {"Paris", "Frankfurt", 3, White},
                route! {"Frankfurt", "Essen", 2, Green},
                route! {"Essen", "Berlin", 2, Blue},
                route! {"Frankfurt", "Berlin", 3, Gray, tunnel},
                route! {"Amsterdam", "Essen", 3, Gray, ferry 1},
            ],
        )
        .unwrap()
    }

    fn claim(map: &mut Map, name: &str, player_id: PlayerId) {
        let route_id = map.route_id(name).unwrap();
        map.claim_route_for_player(route_id, player_id);
    }

    // Tests for `route!`.

    #[test]
    fn route_macro() {
        assert_eq!(
            route! {"Paris", "Wien", 3, Red},
            RouteDefinition::new("Paris", "Wien", 3, Some(TrainColor::Red))
        );
        assert_eq!(
            route! {"Paris", "Zurich", 3, Gray, tunnel},
            RouteDefinition {
                start: String::from("Paris"),
                end: String::from("Zurich"),
                length: 3,
                color: None,
                ferry_locomotives: None,
                is_tunnel: true,
            }
        );
        assert_eq!(
            route! {"London", "Dieppe", 2, Gray, ferry 1}.ferry_locomotives,
            Some(1)
        );
    }

    // Tests for `Map::new`.

    #[test]
    fn new_map() {
        let map = small_map();

        assert_eq!(map.cities().len(), 6);
        assert_eq!(map.routes().len(), 8);
        assert_eq!(map.city_id("Paris"), Some(CityId(2)));
        assert_eq!(map.city_id("Wien"), None);
        assert!(map.routes().iter().all(|route| route.owner().is_none()));
    }

    #[test]
    fn new_map_names_parallel_routes() {
        let map = small_map();

        assert_eq!(map.route(RouteId(1)).name(), "Bruxelles - Paris");
        assert_eq!(map.route(RouteId(2)).name(), "Bruxelles - Paris (2)");
        assert_eq!(map.route_id("Bruxelles - Paris (2)"), Some(RouteId(2)));
    }

    #[test]
    fn new_map_with_unknown_city() {
        assert_eq!(
            Map::new(["Paris"], vec![route! {"Paris", "Wien", 3, Red}]).err(),
            Some(MapError::UnknownCity(String::from("Wien")))
        );
    }

    #[test]
    fn new_map_with_duplicate_city() {
        assert_eq!(
            Map::new(["Paris", "Paris"], vec![]).err(),
            Some(MapError::DuplicateCity(String::from("Paris")))
        );
    }

    #[test]
    fn new_map_with_invalid_routes() {
        let invalid_routes = [
            route! {"Paris", "Paris", 3, Red},
            route! {"Paris", "Wien", 0, Red},
            route! {"Paris", "Wien", 2, Locomotive},
            RouteDefinition::new("Paris", "Wien", 2, Some(TrainColor::Red)).ferry(1),
            route! {"Paris", "Wien", 2, Gray, ferry 3},
            route! {"Paris", "Wien", 2, Gray, ferry 0},
        ];

        for route in invalid_routes {
            assert!(
                matches!(
                    Map::new(["Paris", "Wien"], vec![route.clone()]),
                    Err(MapError::InvalidRoute { .. })
                ),
                "Should be invalid: {:?}",
                route
            );
        }
    }

    #[test]
    fn map_destination() {
        let map = small_map();

        assert_eq!(
            map.destination("Paris", "Berlin", 9, DestinationKind::Short),
            Ok(DestinationCard {
                name: String::from("Paris - Berlin (9)"),
                destination: (CityId(2), CityId(5)),
                points: 9,
                kind: DestinationKind::Short,
            })
        );
        assert!(map
            .destination("Paris", "Roma", 9, DestinationKind::Short)
            .is_err());
        assert!(map
            .destination("Paris", "Paris", 9, DestinationKind::Short)
            .is_err());
    }

    // Tests for `points_for_route_length`.

    #[test]
    fn route_points() {
        let points: Vec<_> = [1, 2, 3, 4, 6, 8]
            .into_iter()
            .map(points_for_route_length)
            .collect();
        assert_eq!(points, vec![1, 2, 4, 7, 15, 21]);
        assert_eq!(points_for_route_length(5), 0);
        assert_eq!(points_for_route_length(7), 0);
    }

    // Tests for `Map::can_route_be_claimed_by_player`.

    #[test]
    fn claimed_route_cannot_be_claimed_again() {
        let mut map = small_map();
        claim(&mut map, "Paris - Frankfurt", 0);

        let route_id = map.route_id("Paris - Frankfurt").unwrap();
        assert_eq!(map.route(route_id).owner(), Some(0));
        assert!(!map.can_route_be_claimed_by_player(route_id, 0));
        assert!(!map.can_route_be_claimed_by_player(route_id, 1));
    }

    #[test]
    #[should_panic]
    fn claiming_owned_route_panics() {
        let mut map = small_map();
        claim(&mut map, "Paris - Frankfurt", 0);
        claim(&mut map, "Paris - Frankfurt", 1);
    }

    #[test]
    fn parallel_route_cannot_be_claimed_by_same_player() {
        let mut map = small_map();
        map.set_num_players(5);
        claim(&mut map, "Bruxelles - Paris", 0);

        let parallel_route_id = map.route_id("Bruxelles - Paris (2)").unwrap();
        assert!(!map.can_route_be_claimed_by_player(parallel_route_id, 0));
        assert!(map.can_route_be_claimed_by_player(parallel_route_id, 1));
    }

    #[test]
    fn parallel_route_disabled_in_small_games() {
        let mut map = small_map();
        map.set_num_players(3);
        claim(&mut map, "Bruxelles - Paris (2)", 1);

        let parallel_route_id = map.route_id("Bruxelles - Paris").unwrap();
        assert!(!map.can_route_be_claimed_by_player(parallel_route_id, 0));
        assert!(!map.can_route_be_claimed_by_player(parallel_route_id, 1));
    }

    // Tests for `Map::has_player_connected`.

    #[test]
    fn destination_not_connected_at_start() {
        let map = small_map();
        let destination = (map.city_id("Amsterdam").unwrap(), map.city_id("Berlin").unwrap());

        assert!(!map.has_player_connected(destination, 0));
    }

    #[test]
    fn destination_partially_connected() {
        let mut map = small_map();
        claim(&mut map, "Amsterdam - Bruxelles", 0);
        claim(&mut map, "Bruxelles - Paris", 0);

        let destination = (map.city_id("Amsterdam").unwrap(), map.city_id("Berlin").unwrap());
        assert!(!map.has_player_connected(destination, 0));
    }

    #[test]
    fn destination_connected_by_another_player() {
        let mut map = small_map();
        claim(&mut map, "Amsterdam - Essen", 0);
        claim(&mut map, "Essen - Berlin", 1);

        let destination = (map.city_id("Amsterdam").unwrap(), map.city_id("Berlin").unwrap());
        assert!(!map.has_player_connected(destination, 0));
        assert!(!map.has_player_connected(destination, 1));
    }

    #[test]
    fn destination_connected() {
        let mut map = small_map();
        claim(&mut map, "Amsterdam - Essen", 0);
        claim(&mut map, "Essen - Berlin", 0);

        let destination = (map.city_id("Berlin").unwrap(), map.city_id("Amsterdam").unwrap());
        assert!(map.has_player_connected(destination, 0));
    }

    // Tests for `Map::get_longest_route`.

    #[test]
    fn longest_route_zero_length() {
        assert_eq!(small_map().get_longest_route(0), 0);
    }

    #[test]
    fn longest_route_one_route() {
        let mut map = small_map();
        claim(&mut map, "Paris - Frankfurt", 0);

        assert_eq!(map.get_longest_route(0), 3);
        assert_eq!(map.get_longest_route(1), 0);
    }

    #[test]
    fn longest_route_long_line() {
        let mut map = small_map();
        for name in ["Amsterdam - Bruxelles", "Bruxelles - Paris", "Paris - Frankfurt", "Frankfurt - Essen"] {
            claim(&mut map, name, 0);
        }

        // 1 + 2 + 3 + 2.
        assert_eq!(map.get_longest_route(0), 8);
    }

    #[test]
    fn longest_route_with_loop() {
        let mut map = small_map();
        for name in ["Paris - Frankfurt", "Frankfurt - Essen", "Essen - Berlin", "Frankfurt - Berlin"] {
            claim(&mut map, name, 0);
        }

        // Paris -> Frankfurt -> Essen -> Berlin -> Frankfurt: 3 + 2 + 2 + 3.
        assert_eq!(map.get_longest_route(0), 10);
    }
}
