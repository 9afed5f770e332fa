//! The Europe board: its cities, routes, and destination tickets.

use crate::destination::{DestinationCard, DestinationDecks, DestinationKind};
use crate::error::MapError;
use crate::map::{Map, RouteDefinition};

pub const CITIES: [&str; 47] = [
    "Amsterdam",
    "Angora",
    "Athina",
    "Barcelona",
    "Berlin",
    "Brest",
    "Brindisi",
    "Bruxelles",
    "Bucuresti",
    "Budapest",
    "Cadiz",
    "Constantinople",
    "Danzig",
    "Dieppe",
    "Edinburgh",
    "Erzurum",
    "Essen",
    "Frankfurt",
    "Kharkov",
    "Kobenhavn",
    "Kyiv",
    "Lisboa",
    "London",
    "Madrid",
    "Marseille",
    "Moskva",
    "Munchen",
    "Palermo",
    "Pamplona",
    "Paris",
    "Petrograd",
    "Riga",
    "Roma",
    "Rostov",
    "Sarajevo",
    "Sevastopol",
    "Smolensk",
    "Smyrna",
    "Sochi",
    "Sofia",
    "Stockholm",
    "Venezia",
    "Warszawa",
    "Wien",
    "Wilno",
    "Zagrab",
    "Zurich",
];

const LONG_DESTINATIONS: [(&str, &str, u8); 6] = [
    ("Brest", "Petrograd", 20),
    ("Cadiz", "Stockholm", 21),
    ("Edinburgh", "Athina", 21),
    ("Kobenhavn", "Erzurum", 21),
    ("Lisboa", "Danzig", 20),
    ("Palermo", "Moskva", 20),
];

const SHORT_DESTINATIONS: [(&str, &str, u8); 40] = [
    ("Amsterdam", "Pamplona", 7),
    ("Amsterdam", "Wilno", 12),
    ("Angora", "Kharkov", 10),
    ("Athina", "Angora", 5),
    ("Athina", "Wilno", 11),
    ("Barcelona", "Bruxelles", 8),
    ("Barcelona", "Munchen", 8),
    ("Berlin", "Bucuresti", 8),
    ("Berlin", "Moskva", 12),
    ("Berlin", "Roma", 9),
    ("Brest", "Marseille", 7),
    ("Brest", "Venezia", 8),
    ("Bruxelles", "Danzig", 9),
    ("Budapest", "Sofia", 5),
    ("Edinburgh", "Paris", 7),
    ("Essen", "Kyiv", 10),
    ("Frankfurt", "Kobenhavn", 5),
    ("Frankfurt", "Smolensk", 13),
    ("Kyiv", "Petrograd", 6),
    ("Kyiv", "Sochi", 8),
    ("London", "Berlin", 7),
    ("London", "Wien", 10),
    ("Madrid", "Dieppe", 8),
    ("Madrid", "Zurich", 8),
    ("Marseille", "Essen", 8),
    ("Palermo", "Constantinople", 8),
    ("Paris", "Wien", 8),
    ("Paris", "Zagrab", 7),
    ("Riga", "Bucuresti", 10),
    ("Roma", "Smyrna", 8),
    ("Rostov", "Erzurum", 5),
    ("Sarajevo", "Sevastopol", 8),
    ("Smolensk", "Rostov", 8),
    ("Sofia", "Smyrna", 5),
    ("Stockholm", "Wien", 11),
    ("Venezia", "Constantinople", 10),
    ("Warszawa", "Smolensk", 6),
    ("Zagrab", "Brindisi", 6),
    ("Zurich", "Brindisi", 6),
    ("Zurich", "Budapest", 6),
];

fn routes() -> Vec<RouteDefinition> {
    vec![
        route! {"Edinburgh", "London", 4, Black},
        route! {"Edinburgh", "London", 4, Orange},
        route! {"London", "Dieppe", 2, Gray, ferry 1},
        route! {"London", "Dieppe", 2, Gray, ferry 1},
        route! {"London", "Amsterdam", 2, Gray, ferry 2},
        route! {"Dieppe", "Brest", 2, Orange},
        route! {"Dieppe", "Paris", 1, Pink},
        route! {"Dieppe", "Bruxelles", 2, Green},
        route! {"Brest", "Paris", 3, Black},
        route! {"Brest", "Pamplona", 4, Pink},
        route! {"Paris", "Bruxelles", 2, Yellow},
        route! {"Paris", "Bruxelles", 2, Red},
        route! {"Paris", "Frankfurt", 3, White},
        route! {"Paris", "Frankfurt", 3, Orange},
        route! {"Paris", "Zurich", 3, Gray, tunnel},
        route! {"Paris", "Marseille", 4, Gray},
        route! {"Paris", "Pamplona", 4, Blue},
        route! {"Paris", "Pamplona", 4, Green},
        route! {"Bruxelles", "Amsterdam", 1, Black},
        route! {"Bruxelles", "Frankfurt", 2, Blue},
        route! {"Amsterdam", "Frankfurt", 2, White},
        route! {"Amsterdam", "Essen", 3, Yellow},
        route! {"Essen", "Frankfurt", 2, Green},
        route! {"Essen", "Berlin", 2, Blue},
        route! {"Essen", "Kobenhavn", 3, Gray, ferry 1},
        route! {"Essen", "Kobenhavn", 3, Gray, ferry 1},
        route! {"Kobenhavn", "Stockholm", 3, Yellow},
        route! {"Kobenhavn", "Stockholm", 3, White},
        route! {"Stockholm", "Petrograd", 8, Gray, tunnel},
        route! {"Frankfurt", "Berlin", 3, Black},
        route! {"Frankfurt", "Berlin", 3, Red},
        route! {"Frankfurt", "Munchen", 2, Pink},
        route! {"Munchen", "Zurich", 2, Yellow, tunnel},
        route! {"Munchen", "Venezia", 2, Blue, tunnel},
        route! {"Munchen", "Wien", 3, Orange},
        route! {"Zurich", "Venezia", 2, Green, tunnel},
        route! {"Zurich", "Marseille", 2, Pink, tunnel},
        route! {"Marseille", "Pamplona", 4, Red},
        route! {"Marseille", "Barcelona", 4, Gray},
        route! {"Marseille", "Roma", 4, Gray, tunnel},
        route! {"Pamplona", "Barcelona", 2, Gray, tunnel},
        route! {"Pamplona", "Madrid", 3, Black, tunnel},
        route! {"Pamplona", "Madrid", 3, White, tunnel},
        route! {"Madrid", "Barcelona", 2, Yellow},
        route! {"Madrid", "Lisboa", 3, Pink},
        route! {"Madrid", "Cadiz", 3, Orange},
        route! {"Lisboa", "Cadiz", 2, Blue},
        route! {"Venezia", "Roma", 2, Black},
        route! {"Venezia", "Zagrab", 2, Gray},
        route! {"Roma", "Brindisi", 2, White},
        route! {"Roma", "Palermo", 4, Gray, ferry 1},
        route! {"Palermo", "Brindisi", 3, Gray, ferry 1},
        route! {"Palermo", "Smyrna", 6, Gray, ferry 2},
        route! {"Brindisi", "Athina", 4, Gray, ferry 1},
        route! {"Berlin", "Danzig", 4, Gray},
        route! {"Berlin", "Warszawa", 4, Pink},
        route! {"Berlin", "Warszawa", 4, Yellow},
        route! {"Berlin", "Wien", 3, Green},
        route! {"Danzig", "Riga", 3, Black},
        route! {"Danzig", "Warszawa", 2, Gray},
        route! {"Riga", "Petrograd", 4, Gray},
        route! {"Riga", "Wilno", 4, Green},
        route! {"Warszawa", "Wilno", 3, Red},
        route! {"Warszawa", "Kyiv", 4, Gray},
        route! {"Warszawa", "Wien", 4, Blue},
        route! {"Wien", "Budapest", 1, Red},
        route! {"Wien", "Budapest", 1, White},
        route! {"Wien", "Zagrab", 2, Gray},
        route! {"Zagrab", "Budapest", 2, Orange},
        route! {"Zagrab", "Sarajevo", 3, Red},
        route! {"Budapest", "Kyiv", 6, Gray, tunnel},
        route! {"Budapest", "Bucuresti", 4, Gray, tunnel},
        route! {"Budapest", "Sarajevo", 3, Pink},
        route! {"Sarajevo", "Sofia", 2, Gray, tunnel},
        route! {"Sarajevo", "Athina", 4, Green},
        route! {"Athina", "Sofia", 3, Pink},
        route! {"Athina", "Smyrna", 2, Gray, ferry 1},
        route! {"Sofia", "Bucuresti", 2, Gray, tunnel},
        route! {"Sofia", "Constantinople", 3, Blue},
        route! {"Bucuresti", "Kyiv", 4, Gray},
        route! {"Bucuresti", "Sevastopol", 4, White},
        route! {"Bucuresti", "Constantinople", 3, Yellow},
        route! {"Constantinople", "Smyrna", 2, Gray, tunnel},
        route! {"Constantinople", "Angora", 2, Gray, tunnel},
        route! {"Constantinople", "Sevastopol", 4, Gray, ferry 2},
        route! {"Smyrna", "Angora", 3, Orange, tunnel},
        route! {"Angora", "Erzurum", 3, Black},
        route! {"Erzurum", "Sevastopol", 4, Gray, ferry 2},
        route! {"Erzurum", "Sochi", 3, Red, tunnel},
        route! {"Sevastopol", "Sochi", 2, Gray, ferry 1},
        route! {"Sevastopol", "Rostov", 4, Gray},
        route! {"Sochi", "Rostov", 2, Gray},
        route! {"Rostov", "Kharkov", 2, Green},
        route! {"Kharkov", "Kyiv", 4, Gray},
        route! {"Kharkov", "Moskva", 4, Gray},
        route! {"Kyiv", "Smolensk", 3, Red},
        route! {"Kyiv", "Wilno", 2, Gray},
        route! {"Wilno", "Smolensk", 3, Yellow},
        route! {"Wilno", "Petrograd", 4, Blue},
        route! {"Smolensk", "Moskva", 2, Orange},
        route! {"Moskva", "Petrograd", 4, White},
    ]
}

/// Builds the Europe map, with no route claimed yet.
///
/// # Example
/// ```
/// let map = rails_engine::europe::map().unwrap();
/// assert_eq!(map.cities().len(), 47);
/// assert!(map.route_id("Paris - Bruxelles (2)").is_some());
/// ```
pub fn map() -> Result<Map, MapError> {
    Map::new(CITIES, routes())
}

/// Builds both destination decks of the Europe board, against `map`.
pub fn destination_decks(map: &Map) -> Result<DestinationDecks, MapError> {
    let build_deck = |destinations: &[(&str, &str, u8)], kind| {
        destinations
            .iter()
            .map(|(start, end, points)| map.destination(start, end, *points, kind))
            .collect::<Result<Vec<DestinationCard>, MapError>>()
    };

    Ok(DestinationDecks {
        short: build_deck(&SHORT_DESTINATIONS[..], DestinationKind::Short)?,
        long: build_deck(&LONG_DESTINATIONS[..], DestinationKind::Long)?,
    })
}
