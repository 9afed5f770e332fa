use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::iter::repeat;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

pub const NUM_VISIBLE_TRAIN_CARDS: usize = 5;
pub const NUM_LOCOMOTIVE_CARDS: usize = 14;
pub const NUM_COLORED_CARDS: usize = 12;
const LOCOMOTIVE_LIMIT: usize = 3;

/// Represents the different variants of train cards.
///
/// The string form (`"red"`, `"locomotive"`, ...) doubles as the identifier offered
/// to players when a card can be taken from the visible row.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TrainColor {
    Black,
    Blue,
    Green,
    /// Special card that matches with any color.
    Locomotive,
    Orange,
    Pink,
    Red,
    White,
    Yellow,
}

impl TrainColor {
    /// Whether the current card is a locomotive, i.e. matches with any color.
    ///
    /// # Examples:
    /// ```
    /// use rails_engine::card::TrainColor;
    ///
    /// assert!(!TrainColor::Black.is_locomotive());
    /// assert!(TrainColor::Locomotive.is_locomotive());
    /// ```
    #[inline]
    pub fn is_locomotive(&self) -> bool {
        *self == TrainColor::Locomotive
    }

    /// The opposite of `is_locomotive`.
    #[inline]
    pub fn is_not_locomotive(&self) -> bool {
        !self.is_locomotive()
    }

    /// Iterates over the eight regular colors, skipping locomotives.
    pub fn colors() -> impl Iterator<Item = TrainColor> {
        TrainColor::iter().filter(TrainColor::is_not_locomotive)
    }
}

/// Read-only projection of the [`CardBank`], holding what every player can see.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CardBankState {
    pub visible_train_cards: Vec<TrainColor>,
    pub draw_pile_size: usize,
    pub discard_pile: Vec<TrainColor>,
}

/// Entity in charge of the train cards that are not in any player's hand:
/// the face-down draw pile, the discard pile, and the row of visible cards.
///
/// The bank never creates nor destroys cards after construction; cards only move
/// between its piles and the players.
#[derive(Debug)]
pub struct CardBank {
    draw_pile: Vec<TrainColor>,
    discard_pile: Vec<TrainColor>,
    visible_train_cards: SmallVec<[TrainColor; NUM_VISIBLE_TRAIN_CARDS]>,
    total_cards: usize,
    rng: StdRng,
}

impl CardBank {
    /// Creates a new `CardBank` holding the whole deck (12 cards per color and 14 locomotives),
    /// shuffled in the draw pile. The visible row starts empty, see [`CardBank::fill_visible_row`].
    ///
    /// # Example
    /// ```
    /// use rails_engine::card::CardBank;
    /// use rand::SeedableRng;
    ///
    /// let card_bank = CardBank::new(rand::rngs::StdRng::seed_from_u64(7));
    /// assert_eq!(card_bank.total_cards(), 110);
    /// ```
    pub fn new(mut rng: StdRng) -> Self {
        let mut draw_pile = Vec::with_capacity(8 * NUM_COLORED_CARDS + NUM_LOCOMOTIVE_CARDS);

        for color in TrainColor::iter() {
            let num_cards_per_color = if color.is_locomotive() {
                NUM_LOCOMOTIVE_CARDS
            } else {
                NUM_COLORED_CARDS
            };
            draw_pile.extend(repeat(color).take(num_cards_per_color));
        }

        draw_pile.shuffle(&mut rng);

        Self::with_draw_pile(draw_pile, rng)
    }

    /// Creates a `CardBank` whose draw pile is exactly `draw_pile`, unshuffled.
    /// The top of the pile is the last element.
    pub fn with_draw_pile(draw_pile: Vec<TrainColor>, rng: StdRng) -> Self {
        Self {
            total_cards: draw_pile.len(),
            draw_pile,
            discard_pile: Vec::new(),
            visible_train_cards: SmallVec::new(),
            rng,
        }
    }

    /// Pops the top card of the draw pile.
    ///
    /// If the draw pile is empty, the discard pile is first shuffled into it.
    /// Returns `None` only when both piles are empty.
    pub fn draw(&mut self) -> Option<TrainColor> {
        self.restock_draw_pile();
        self.draw_pile.pop()
    }

    /// Gives a card back to the bank.
    ///
    /// While the visible row is missing cards and the draw pile is empty, the card
    /// goes straight to the visible row. Otherwise it lands on the discard pile.
    pub fn discard(&mut self, card: TrainColor) {
        if self.visible_train_cards.len() < NUM_VISIBLE_TRAIN_CARDS && self.draw_pile.is_empty() {
            self.visible_train_cards.push(card);
        } else {
            self.discard_pile.push(card);
        }
    }

    pub fn discard_all(&mut self, cards: impl IntoIterator<Item = TrainColor>) {
        for card in cards {
            self.discard(card);
        }
    }

    /// Removes one `card` from the visible row, then refills the row.
    ///
    /// Returns whether the row had to be replaced because of the three locomotive rule.
    ///
    /// Panics if `card` is not visible: callers only offer visible cards.
    pub fn take_visible(&mut self, card: TrainColor) -> bool {
        let Some(index) = self.visible_train_cards.iter().position(|visible| *visible == card) else {
            panic!("Cannot take a {} train card, as it is not visible.", card);
        };

        self.visible_train_cards.remove(index);
        self.fill_visible_row()
    }

    /// Draws cards until the visible row holds 5 cards (or the bank runs dry), then
    /// replaces the whole row for as long as it shows exactly three locomotives.
    ///
    /// Returns whether the row was replaced at least once.
    pub fn fill_visible_row(&mut self) -> bool {
        self.refill_visible_row();

        let mut replaced = false;
        while self.should_replace_visible_row() {
            debug!(visible = ?self.visible_train_cards, "three locomotives are visible, replacing the row");
            self.replace_visible_row();
            replaced = true;
        }

        replaced
    }

    /// Shuffles the discard pile into the draw pile, if the draw pile is empty.
    pub fn restock_draw_pile(&mut self) {
        if !self.draw_pile.is_empty() || self.discard_pile.is_empty() {
            return;
        }

        self.discard_pile.shuffle(&mut self.rng);
        std::mem::swap(&mut self.draw_pile, &mut self.discard_pile);
    }

    fn refill_visible_row(&mut self) {
        while self.visible_train_cards.len() < NUM_VISIBLE_TRAIN_CARDS {
            match self.draw() {
                Some(card) => self.visible_train_cards.push(card),
                None => break,
            }
        }
    }

    fn should_replace_visible_row(&self) -> bool {
        if self.num_visible_locomotives() != LOCOMOTIVE_LIMIT {
            return false;
        }

        if self.draw_pile.is_empty() && self.discard_pile.is_empty() {
            return false;
        }

        // Replacing only makes sense if enough regular cards remain anywhere in the bank.
        // Otherwise we could end up replacing ad infinitum.
        self.visible_train_cards
            .iter()
            .chain(&self.draw_pile)
            .chain(&self.discard_pile)
            .filter(|card| card.is_not_locomotive())
            .count()
            >= LOCOMOTIVE_LIMIT
    }

    fn replace_visible_row(&mut self) {
        // With an empty draw pile, discarded cards would flow right back into the row.
        self.restock_draw_pile();

        let previous_row: SmallVec<[TrainColor; NUM_VISIBLE_TRAIN_CARDS]> =
            self.visible_train_cards.drain(..).collect();
        self.discard_all(previous_row);

        self.refill_visible_row();
    }

    #[inline]
    fn num_visible_locomotives(&self) -> usize {
        self.visible_train_cards
            .iter()
            .filter(|card| card.is_locomotive())
            .count()
    }

    /// Whether a blind draw could yield a card, after restocking if needed.
    #[inline]
    pub fn has_hidden_cards(&self) -> bool {
        !self.draw_pile.is_empty() || !self.discard_pile.is_empty()
    }

    #[inline]
    pub fn visible_train_cards(&self) -> &[TrainColor] {
        &self.visible_train_cards
    }

    #[inline]
    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    #[inline]
    pub fn discard_pile(&self) -> &[TrainColor] {
        &self.discard_pile
    }

    /// Number of cards minted when the bank was created.
    #[inline]
    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    /// Number of cards currently held by the bank, across all of its piles.
    #[inline]
    pub fn num_cards_held(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len() + self.visible_train_cards.len()
    }

    pub fn get_state(&self) -> CardBankState {
        let mut discard_pile = self.discard_pile.clone();
        discard_pile.sort();

        CardBankState {
            visible_train_cards: self.visible_train_cards.to_vec(),
            draw_pile_size: self.draw_pile.len(),
            discard_pile,
        }
    }
}
