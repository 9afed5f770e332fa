use crate::card::{NUM_COLORED_CARDS, NUM_LOCOMOTIVE_CARDS};
use crate::error::GameError;

use serde::{Deserialize, Serialize};

/// Points a player forfeits each time they build a station.
pub const STATION_POINTS: u16 = 4;

/// The last station costs as many cards as there are stations: no single color, even with every
/// locomotive, could pay for more.
pub const MAX_STATIONS: u8 = (NUM_COLORED_CARDS + NUM_LOCOMOTIVE_CARDS) as u8;

/// Tunable rules of a game. Missing fields fall back to the defaults of the board game.
///
/// # Example
/// ```
/// use rails_engine::config::Rules;
///
/// let rules: Rules = serde_json::from_str(r#"{"trains": 30}"#).unwrap();
/// assert_eq!(rules.trains, 30);
/// assert_eq!(rules.stations, 3);
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Rules {
    /// Trains every player starts with.
    pub trains: u8,
    /// Stations every player starts with.
    pub stations: u8,
    /// Once a player ends their turn with this many trains or less, everyone else plays one last turn.
    pub last_round_threshold: u8,
    /// Seeds every shuffle of the game, for reproducible games.
    pub seed: Option<u64>,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            trains: 45,
            stations: 3,
            last_round_threshold: 2,
            seed: None,
        }
    }
}

impl Rules {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.trains == 0 {
            return Err(GameError::InvalidRules("players must start with trains"));
        }
        if self.last_round_threshold >= self.trains {
            return Err(GameError::InvalidRules(
                "the last round threshold must be below the starting number of trains",
            ));
        }
        if self.stations > MAX_STATIONS {
            return Err(GameError::InvalidRules(
                "players cannot start with more stations than they could ever pay for",
            ));
        }

        Ok(())
    }

    /// Score every player starts with: the latent value of all their stations.
    #[inline]
    pub fn initial_score(&self) -> u16 {
        STATION_POINTS * self.stations as u16
    }

    /// Cards needed to build a station when `remaining_stations` are left.
    /// The first station costs one card, the second two, and so on.
    #[inline]
    pub fn station_cost(&self, remaining_stations: u8) -> u8 {
        self.stations + 1 - remaining_stations
    }
}
