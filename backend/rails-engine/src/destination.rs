use crate::city::CityToCity;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use smallvec::SmallVec;
use std::collections::VecDeque;

pub const NUM_DRAWN_DESTINATION_CARDS: usize = 3;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationKind {
    Short,
    /// Dealt once per player at the start of the game, and never drawn again.
    Long,
}

/// Encapsulates information about a destination card.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct DestinationCard {
    /// Human-readable name, e.g. `"Paris - Wien (8)"`. Also used to pick this card in a choice.
    pub name: String,
    /// The two cities that must be connected to fulfill the destination card.
    pub destination: CityToCity,
    pub points: u8,
    pub kind: DestinationKind,
}

/// All destination cards of a map, split by kind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DestinationDecks {
    pub short: Vec<DestinationCard>,
    pub long: Vec<DestinationCard>,
}

/// The stack of short destination cards players draw from during the game.
///
/// Unlike train cards, destination cards are never renewed: once the pool is empty, it stays empty
/// unless cards are given back.
#[derive(Debug)]
pub struct DestinationPool {
    destination_cards: VecDeque<DestinationCard>,
}

impl DestinationPool {
    pub fn new<R: Rng + ?Sized>(mut destination_cards: Vec<DestinationCard>, rng: &mut R) -> Self {
        destination_cards.shuffle(rng);

        Self {
            destination_cards: VecDeque::from(destination_cards),
        }
    }

    /// Removes and returns the top destination card, if any.
    pub fn draw(&mut self) -> Option<DestinationCard> {
        self.destination_cards.pop_back()
    }

    /// Draws up to `NUM_DRAWN_DESTINATION_CARDS` cards.
    /// Returns less than that if the pool runs out.
    pub fn draw_many(&mut self) -> SmallVec<[DestinationCard; NUM_DRAWN_DESTINATION_CARDS]> {
        let mut drawn_destination_cards = SmallVec::new();

        for _ in 0..NUM_DRAWN_DESTINATION_CARDS {
            match self.draw() {
                Some(destination_card) => drawn_destination_cards.push(destination_card),
                None => break,
            }
        }

        drawn_destination_cards
    }

    /// Puts the given destination cards at the bottom of the pool.
    pub fn return_to_bottom(&mut self, destination_cards: impl IntoIterator<Item = DestinationCard>) {
        for destination_card in destination_cards {
            self.destination_cards.push_front(destination_card);
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.destination_cards.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.destination_cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::city::CityId;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn destination_card(index: usize) -> DestinationCard {
        DestinationCard {
            name: format!("card {}", index),
            destination: (CityId(index), CityId(index + 1)),
            points: index as u8,
            kind: DestinationKind::Short,
        }
    }

    fn destination_pool(num_cards: usize) -> DestinationPool {
        DestinationPool {
            destination_cards: (0..num_cards).map(destination_card).collect(),
        }
    }

    #[test]
    fn destination_pool_is_shuffled() {
        let cards: Vec<_> = (0..40).map(destination_card).collect();
        let first_pool = DestinationPool::new(cards.clone(), &mut StdRng::seed_from_u64(1));
        let second_pool = DestinationPool::new(cards.clone(), &mut StdRng::seed_from_u64(2));

        assert_eq!(first_pool.len(), 40);
        assert_ne!(first_pool.destination_cards, second_pool.destination_cards);
    }

    #[test]
    fn destination_pool_draw() {
        let mut pool = destination_pool(2);

        assert_eq!(pool.draw(), Some(destination_card(1)));
        assert_eq!(pool.draw(), Some(destination_card(0)));
        assert_eq!(pool.draw(), None);
        assert!(pool.is_empty());
    }

    #[test]
    fn destination_pool_draw_many() {
        let mut pool = destination_pool(4);

        assert_eq!(
            pool.draw_many().into_vec(),
            vec![destination_card(3), destination_card(2), destination_card(1)]
        );
        assert_eq!(pool.draw_many().into_vec(), vec![destination_card(0)]);
        assert!(pool.draw_many().is_empty());
    }

    #[test]
    fn destination_pool_return_to_bottom() {
        let mut pool = destination_pool(1);
        pool.return_to_bottom([destination_card(7), destination_card(8)]);

        assert_eq!(pool.len(), 3);
        assert_eq!(pool.draw(), Some(destination_card(0)));
        assert_eq!(pool.draw(), Some(destination_card(7)));
        assert_eq!(pool.draw(), Some(destination_card(8)));
    }
}
