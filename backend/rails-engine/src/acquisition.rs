use crate::card::TrainColor;
use crate::choice::{ChoicePort, Prompt};
use crate::city::CityId;
use crate::config::Rules;
use crate::error::GameError;
use crate::map::{points_for_route_length, Map, RouteId};
use crate::player::{Player, TrainCards};
use crate::turn::Turn;

use smallvec::SmallVec;
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Cards revealed from the draw pile when paying for a tunnel.
pub const NUM_TUNNEL_CARDS: usize = 3;

/// How a purchase ended.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Acquisition {
    /// The cards paid, sorted by color. They are now in the discard pile.
    Completed { paid: Vec<TrainColor> },
    /// The player could not or would not pay: every staged card went back to their hand.
    Abandoned,
}

/// Which cards are allowed in a payment, on top of locomotives.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Colors {
    Single(TrainColor),
    /// Any single color, decided by the first non-locomotive card staged.
    AnySingle,
    LocomotivesOnly,
}

/// Cards owed for a purchase, counting those already staged.
#[derive(Clone, Copy, Debug)]
struct Payment {
    colors: Colors,
    required: u8,
    min_locomotives: u8,
}

impl Payment {
    fn for_route(color: Option<TrainColor>, length: u8, ferry_locomotives: Option<u8>) -> Self {
        Self {
            colors: color.map_or(Colors::AnySingle, Colors::Single),
            required: length,
            min_locomotives: ferry_locomotives.unwrap_or(0),
        }
    }

    /// Narrows `AnySingle` down to the color the player already started paying with.
    fn committed_colors(&self, player: &Player) -> Colors {
        match self.colors {
            Colors::AnySingle => staged_color(player).map_or(Colors::AnySingle, Colors::Single),
            colors => colors,
        }
    }

    /// Cards the player can stage next, such that the payment can still be completed.
    fn options(&self, player: &Player) -> Vec<TrainColor> {
        let remaining = self.required.saturating_sub(player.num_staged_train_cards());
        if remaining == 0 {
            return Vec::new();
        }

        let locomotives_needed = self
            .min_locomotives
            .saturating_sub(player.num_staged(TrainColor::Locomotive));
        let colors = self.committed_colors(player);

        TrainColor::iter()
            .filter(|card| match colors {
                Colors::Single(color) => card.is_locomotive() || *card == color,
                Colors::AnySingle => true,
                Colors::LocomotivesOnly => card.is_locomotive(),
            })
            .filter(|card| player.num_train_cards(*card) > 0)
            .filter(|card| {
                let mut hand = player.train_cards().clone();
                if let Some(num) = hand.get_mut(card) {
                    *num -= 1;
                }

                if card.is_locomotive() {
                    can_complete(&hand, colors, remaining - 1, locomotives_needed.saturating_sub(1))
                } else {
                    can_complete(&hand, Colors::Single(*card), remaining - 1, locomotives_needed)
                }
            })
            .collect()
    }
}

/// The non-locomotive color a player is paying with, if they staged any.
fn staged_color(player: &Player) -> Option<TrainColor> {
    TrainColor::colors().find(|color| player.num_staged(*color) > 0)
}

/// Whether `remaining` cards, of which at least `locomotives_needed` locomotives, can be paid from `hand`.
fn can_complete(hand: &TrainCards, colors: Colors, remaining: u8, locomotives_needed: u8) -> bool {
    let locomotives = hand[&TrainColor::Locomotive];
    if locomotives < locomotives_needed || remaining < locomotives_needed {
        return false;
    }

    let colored = match colors {
        Colors::Single(color) => hand[&color],
        Colors::AnySingle => TrainColor::colors().map(|color| hand[&color]).max().unwrap_or(0),
        Colors::LocomotivesOnly => 0,
    };

    colored as u16 + locomotives as u16 >= remaining as u16
}

/// Whether `player` holds the cards to claim a route of this color and length.
/// Ownership and trains left are not verified, see [`can_claim_route`].
pub fn can_pay(
    player: &Player,
    color: Option<TrainColor>,
    length: u8,
    ferry_locomotives: Option<u8>,
) -> bool {
    let payment = Payment::for_route(color, length, ferry_locomotives);
    can_complete(
        player.train_cards(),
        payment.colors,
        payment.required,
        payment.min_locomotives,
    )
}

/// Whether `player` may start paying for the route right now: ownership rules allow it,
/// they have enough trains left, and their hand covers the route's color, length, and locomotives.
///
/// A tunnel may still be abandoned once its extra cards are revealed.
pub fn can_claim_route(map: &Map, route_id: RouteId, player: &Player) -> bool {
    let route = map.route(route_id);

    map.can_route_be_claimed_by_player(route_id, player.id())
        && route.length() <= player.trains()
        && can_pay(player, route.color(), route.length(), route.ferry_locomotives())
}

/// Whether `player` has a station left, and the cards to pay for it.
pub fn can_build_station(player: &Player, rules: &Rules) -> bool {
    player.stations() > 0
        && can_complete(
            player.train_cards(),
            Colors::AnySingle,
            rules.station_cost(player.stations()),
            0,
        )
}

impl<'a, P: ChoicePort + ?Sized> Turn<'a, P> {
    /// Asks the current player for cards, one at a time, until `payment` is complete.
    ///
    /// Returns `false` if the player passed, or if no card they hold can complete the payment.
    fn stage_payment(
        &mut self,
        payment: &Payment,
        can_pass: bool,
        instruction: &str,
    ) -> Result<bool, GameError> {
        loop {
            let player = self.player();
            if player.num_staged_train_cards() >= payment.required {
                return Ok(true);
            }

            let prompt = Prompt::new(player.id(), instruction)
                .with_choices(payment.options(player))
                .with_can_pass(can_pass);

            let response = self.choose(prompt)?;
            match TrainColor::from_str(&response) {
                Ok(card) => self.player_mut().stage_train_card(card),
                Err(_) => return Ok(false),
            }
        }
    }

    fn abandon(&mut self, what: &str) -> Acquisition {
        self.player_mut().unstage_train_cards();

        let event = format!("{} abandoned {}.", self.player().name(), what);
        self.state.log_event(event);

        Acquisition::Abandoned
    }

    /// Discards every staged card, and returns them.
    fn spend_staged_train_cards(&mut self) -> Vec<TrainColor> {
        let paid = self.player_mut().take_staged_train_cards();
        self.state.card_bank.discard_all(paid.iter().copied());
        paid
    }

    /// Runs the purchase of a route by the current player, from payment to ownership.
    ///
    /// Expects the route to be claimable, see [`can_claim_route`].
    /// If an error interrupts the payment, staged cards go back to the player's hand.
    #[instrument(skip(self), fields(player = self.state.current_player))]
    pub(crate) fn claim_route(&mut self, route_id: RouteId) -> Result<Acquisition, GameError> {
        let result = self.try_claim_route(route_id);
        if result.is_err() {
            self.player_mut().unstage_train_cards();
        }

        result
    }

    fn try_claim_route(&mut self, route_id: RouteId) -> Result<Acquisition, GameError> {
        let route = self.state.map.route(route_id).clone();
        let payment = Payment::for_route(route.color(), route.length(), route.ferry_locomotives());

        // Ferry locomotives are mandatory, no need to ask for them.
        for _ in 0..payment.min_locomotives {
            self.player_mut().stage_train_card(TrainColor::Locomotive);
        }

        let instruction = format!(
            "{}, pick a train card to pay for {}.",
            self.player().name(),
            route.name()
        );
        if !self.stage_payment(&payment, false, &instruction)? {
            return Ok(self.abandon(route.name()));
        }

        if route.is_tunnel() && !self.pay_tunnel_surcharge(route.name())? {
            return Ok(self.abandon(route.name()));
        }

        let paid = self.spend_staged_train_cards();
        let player_id = self.state.current_player;
        self.state.map.claim_route_for_player(route_id, player_id);
        self.player_mut()
            .pay_for_route(route.length(), points_for_route_length(route.length()));

        let event = format!("{} claimed {}.", self.player().name(), route.name());
        self.state.log_event(event);

        Ok(Acquisition::Completed { paid })
    }

    /// Reveals the top cards of the draw pile, and asks for one extra card per revealed card
    /// matching the payment: locomotives always match, and so does the color staged, if any.
    ///
    /// Returns `false` if the player cannot or will not pay the extra cards.
    fn pay_tunnel_surcharge(&mut self, route_name: &str) -> Result<bool, GameError> {
        let committed_color = staged_color(self.player());

        let revealed: SmallVec<[TrainColor; NUM_TUNNEL_CARDS]> = (0..NUM_TUNNEL_CARDS)
            .filter_map(|_| self.state.card_bank.draw())
            .collect();
        let surcharge = revealed
            .iter()
            .filter(|card| card.is_locomotive() || Some(**card) == committed_color)
            .count() as u8;
        self.state.card_bank.discard_all(revealed.iter().copied());
        debug!(?revealed, surcharge, "tunnel cards revealed");

        let event = format!(
            "Tunnel {} revealed {}: {} extra card(s) required.",
            route_name,
            revealed
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
            surcharge
        );
        self.state.log_event(event);

        if surcharge == 0 {
            return Ok(true);
        }

        let payment = Payment {
            colors: committed_color.map_or(Colors::LocomotivesOnly, Colors::Single),
            required: self.player().num_staged_train_cards() + surcharge,
            min_locomotives: 0,
        };
        let instruction = format!(
            "{}, pick an extra train card for {}, or pass to give up.",
            self.player().name(),
            route_name
        );

        self.stage_payment(&payment, true, &instruction)
    }

    /// Runs the purchase of a station by the current player, on `city_id`.
    ///
    /// Expects the city to be free, and the player to afford a station, see [`can_build_station`].
    #[instrument(skip(self), fields(player = self.state.current_player))]
    pub(crate) fn build_station(&mut self, city_id: CityId) -> Result<Acquisition, GameError> {
        let result = self.try_build_station(city_id);
        if result.is_err() {
            self.player_mut().unstage_train_cards();
        }

        result
    }

    fn try_build_station(&mut self, city_id: CityId) -> Result<Acquisition, GameError> {
        let city_name = self.state.map.city(city_id).name().to_owned();
        let payment = Payment {
            colors: Colors::AnySingle,
            required: self.state.rules.station_cost(self.player().stations()),
            min_locomotives: 0,
        };

        let instruction = format!(
            "{}, pick a train card to pay for a station in {}, or pass to give up.",
            self.player().name(),
            city_name
        );
        if !self.stage_payment(&payment, true, &instruction)? {
            return Ok(self.abandon(&format!("a station in {}", city_name)));
        }

        let paid = self.spend_staged_train_cards();
        let player_id = self.state.current_player;
        self.state.map.build_station_for_player(city_id, player_id);
        self.player_mut().pay_for_station();

        let event = format!("{} built a station in {}.", self.player().name(), city_name);
        self.state.log_event(event);

        Ok(Acquisition::Completed { paid })
    }
}
