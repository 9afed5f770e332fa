use crate::card::TrainColor;
use crate::config::{Rules, STATION_POINTS};
use crate::destination::{DestinationCard, DestinationKind};
use crate::map::Map;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::iter::repeat;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// Index of a player in the seating order.
pub type PlayerId = usize;

pub const NUM_INITIAL_TRAIN_CARDS: usize = 4;

/// Every player has their own color.
#[derive(Clone, Copy, Debug, Deserialize, Display, EnumIter, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlayerColor {
    Black,
    Blue,
    Green,
    Red,
    Yellow,
}

/// Maps how many of a train color a player has.
/// It is guaranteed that the map has at all times key-value pairs for all train colors.
pub type TrainCards = BTreeMap<TrainColor, u8>;

fn empty_train_cards() -> TrainCards {
    TrainColor::iter().map(|color| (color, 0)).collect()
}

fn sorted_train_cards(train_cards: &TrainCards) -> Vec<TrainColor> {
    train_cards
        .iter()
        .flat_map(|(color, num)| repeat(*color).take(*num as usize))
        .collect()
}

/// A held destination card, as shown to everyone.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DestinationState {
    pub name: String,
    pub points: u8,
    pub kind: DestinationKind,
    /// Whether the player's routes already connect both cities. Does not affect the score.
    pub is_fulfilled: bool,
}

/// All the information about a player's current state, returned by [`Player::get_player_state`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerState {
    pub id: PlayerId,
    pub name: String,
    pub color: PlayerColor,
    pub score: u16,
    pub stations: u8,
    pub trains: u8,
    pub is_current: bool,
    pub destination_cards: Vec<DestinationState>,
    /// Sorted by color.
    pub train_cards: Vec<TrainColor>,
    /// Sorted by color. Only non-empty while the player is paying for something.
    pub staged_train_cards: Vec<TrainColor>,
}

/// Encapsulates all the player information.
///
/// A [`Player`] is not aware of other players in this game, nor of the rules deciding which
/// action is legal: the [`crate::turn`] and [`crate::acquisition`] modules verify legality
/// before mutating a player.
#[derive(Clone, Debug)]
pub struct Player {
    id: PlayerId,
    name: String,
    color: PlayerColor,
    train_cards: TrainCards,
    /// Cards committed to a purchase in progress. Always empty between turns.
    staged_train_cards: TrainCards,
    destination_cards: Vec<DestinationCard>,
    trains: u8,
    stations: u8,
    score: u16,
}

impl Player {
    pub fn new(id: PlayerId, name: String, color: PlayerColor, rules: &Rules) -> Self {
        Self {
            id,
            name,
            color,
            train_cards: empty_train_cards(),
            staged_train_cards: empty_train_cards(),
            destination_cards: Vec::new(),
            trains: rules.trains,
            stations: rules.stations,
            score: rules.initial_score(),
        }
    }

    #[inline]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn color(&self) -> PlayerColor {
        self.color
    }

    /// The number of trains the player has left.
    /// This is the currency used, alongside train cards, to claim routes.
    #[inline]
    pub fn trains(&self) -> u8 {
        self.trains
    }

    #[inline]
    pub fn stations(&self) -> u8 {
        self.stations
    }

    #[inline]
    pub fn score(&self) -> u16 {
        self.score
    }

    #[inline]
    pub fn train_cards(&self) -> &TrainCards {
        &self.train_cards
    }

    #[inline]
    pub fn destination_cards(&self) -> &[DestinationCard] {
        &self.destination_cards
    }

    /// How many cards of `color` are in the player's hand, not counting staged cards.
    #[inline]
    pub fn num_train_cards(&self, color: TrainColor) -> u8 {
        self.train_cards[&color]
    }

    /// Number of cards in hand, not counting staged cards.
    pub fn total_train_cards(&self) -> usize {
        self.train_cards.values().map(|num| *num as usize).sum()
    }

    pub fn num_staged_train_cards(&self) -> u8 {
        self.staged_train_cards.values().sum()
    }

    #[inline]
    pub fn num_staged(&self, color: TrainColor) -> u8 {
        self.staged_train_cards[&color]
    }

    pub fn add_train_card(&mut self, card: TrainColor) {
        *self.train_cards.entry(card).or_insert(0) += 1;
    }

    /// Moves one card from the hand to the staging area.
    ///
    /// Panics if the player has no such card: payment options only list cards in hand.
    pub(crate) fn stage_train_card(&mut self, card: TrainColor) {
        let num = self.train_cards.entry(card).or_insert(0);
        assert!(*num > 0, "{} has no {} train card to pay with.", self.name, card);

        *num -= 1;
        *self.staged_train_cards.entry(card).or_insert(0) += 1;
    }

    /// Gives every staged card back to the hand, when a purchase is abandoned.
    pub(crate) fn unstage_train_cards(&mut self) {
        for (color, staged) in self.staged_train_cards.iter_mut() {
            *self.train_cards.entry(*color).or_insert(0) += *staged;
            *staged = 0;
        }
    }

    /// Empties the staging area, when a purchase completes. The cards are meant to be discarded.
    pub(crate) fn take_staged_train_cards(&mut self) -> Vec<TrainColor> {
        let staged_train_cards = sorted_train_cards(&self.staged_train_cards);
        self.staged_train_cards = empty_train_cards();
        staged_train_cards
    }

    pub(crate) fn add_destination_cards(
        &mut self,
        destination_cards: impl IntoIterator<Item = DestinationCard>,
    ) {
        self.destination_cards.extend(destination_cards);
    }

    pub(crate) fn pay_for_route(&mut self, length: u8, points: u8) {
        assert!(
            length <= self.trains,
            "{} cannot lay {} trains with {} left.",
            self.name,
            length,
            self.trains
        );

        self.trains -= length;
        self.score += points as u16;
    }

    pub(crate) fn pay_for_station(&mut self) {
        assert!(self.stations > 0, "{} has no station left.", self.name);

        self.stations -= 1;
        self.score -= STATION_POINTS;
    }

    /// Should only be used for testing!
    #[cfg(test)]
    pub(crate) fn set_trains(&mut self, trains: u8) {
        self.trains = trains;
    }

    pub fn get_player_state(&self, is_current: bool, map: &Map) -> PlayerState {
        PlayerState {
            id: self.id,
            name: self.name.clone(),
            color: self.color,
            score: self.score,
            stations: self.stations,
            trains: self.trains,
            is_current,
            destination_cards: self
                .destination_cards
                .iter()
                .map(|destination_card| DestinationState {
                    name: destination_card.name.clone(),
                    points: destination_card.points,
                    kind: destination_card.kind,
                    is_fulfilled: map.has_player_connected(destination_card.destination, self.id),
                })
                .collect(),
            train_cards: sorted_train_cards(&self.train_cards),
            staged_train_cards: sorted_train_cards(&self.staged_train_cards),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::city::CityId;
    use pretty_assertions::assert_eq;
    use TrainColor::*;

    const PLAYER_ID: PlayerId = 0;
    const PLAYER_COLOR: PlayerColor = PlayerColor::Red;

    fn player() -> Player {
        Player::new(PLAYER_ID, String::from("Ada"), PLAYER_COLOR, &Rules::default())
    }

    // Tests for `PlayerColor`.

    #[test]
    fn player_color_to_string() {
        assert_eq!(PlayerColor::Yellow.to_string(), "yellow");
        assert_eq!(PlayerColor::iter().count(), 5);
    }

    #[test]
    fn player_color_to_json() -> serde_json::Result<()> {
        assert_eq!(serde_json::to_string(&PlayerColor::Blue)?, r#""blue""#);
        assert_eq!(
            serde_json::from_str::<PlayerColor>(r#""green""#)?,
            PlayerColor::Green
        );
        Ok(())
    }

    // Tests for `Player`.

    #[test]
    fn new_player() {
        let player = player();

        assert_eq!(player.trains(), 45);
        assert_eq!(player.stations(), 3);
        assert_eq!(player.score(), 12);
        assert_eq!(player.total_train_cards(), 0);
        assert_eq!(player.train_cards().len(), TrainColor::iter().count());
    }

    #[test]
    fn player_stage_and_unstage() {
        let mut player = player();
        for card in [Red, Red, Locomotive, Blue] {
            player.add_train_card(card);
        }

        player.stage_train_card(Red);
        player.stage_train_card(Locomotive);
        assert_eq!(player.num_train_cards(Red), 1);
        assert_eq!(player.num_staged_train_cards(), 2);
        assert_eq!(player.total_train_cards(), 2);

        player.unstage_train_cards();
        assert_eq!(player.num_staged_train_cards(), 0);
        assert_eq!(player.num_train_cards(Red), 2);
        assert_eq!(player.num_train_cards(Locomotive), 1);
        assert_eq!(player.total_train_cards(), 4);
    }

    #[test]
    #[should_panic]
    fn player_cannot_stage_missing_card() {
        let mut player = player();
        player.stage_train_card(Green);
    }

    #[test]
    fn player_take_staged_train_cards() {
        let mut player = player();
        for card in [Red, Locomotive, Red] {
            player.add_train_card(card);
            player.stage_train_card(card);
        }

        assert_eq!(player.take_staged_train_cards(), vec![Locomotive, Red, Red]);
        assert_eq!(player.num_staged_train_cards(), 0);
        assert_eq!(player.total_train_cards(), 0);
    }

    #[test]
    fn player_pay_for_route_and_station() {
        let mut player = player();

        player.pay_for_route(4, 7);
        assert_eq!(player.trains(), 41);
        assert_eq!(player.score(), 19);

        player.pay_for_station();
        assert_eq!(player.stations(), 2);
        assert_eq!(player.score(), 15);
    }

    #[test]
    #[should_panic]
    fn player_cannot_lay_more_trains_than_left() {
        let mut player = player();
        player.set_trains(2);
        player.pay_for_route(3, 4);
    }

    #[test]
    fn player_state() {
        let map = Map::new(["Paris", "Wien"], vec![]).unwrap();
        let mut player = player();
        player.add_train_card(White);
        player.add_train_card(Black);
        player.add_train_card(White);
        player.stage_train_card(White);
        player.add_destination_cards([DestinationCard {
            name: String::from("Paris - Wien (8)"),
            destination: (CityId(0), CityId(1)),
            points: 8,
            kind: DestinationKind::Short,
        }]);

        assert_eq!(
            player.get_player_state(true, &map),
            PlayerState {
                id: PLAYER_ID,
                name: String::from("Ada"),
                color: PLAYER_COLOR,
                score: 12,
                stations: 3,
                trains: 45,
                is_current: true,
                destination_cards: vec![DestinationState {
                    name: String::from("Paris - Wien (8)"),
                    points: 8,
                    kind: DestinationKind::Short,
                    is_fulfilled: false,
                }],
                train_cards: vec![Black, White],
                staged_train_cards: vec![White],
            }
        );
    }
}
