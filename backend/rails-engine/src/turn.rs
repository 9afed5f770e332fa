use crate::acquisition;
use crate::card::TrainColor;
use crate::choice::{resolve_choice, ChoicePort, Prompt};
use crate::city::CityId;
use crate::destination::DestinationCard;
use crate::error::GameError;
use crate::game_state::GameState;
use crate::map::RouteId;
use crate::player::Player;

use std::collections::BTreeSet;
use std::str::FromStr;
use tracing::{debug, instrument};

/// Identifier of a blind draw from the draw pile.
pub const BLIND_DRAW: &str = "deck";
/// Identifier of drawing new destination cards.
pub const DRAW_DESTINATIONS: &str = "destinations";

/// Destination cards a player must keep out of those offered at the start of the game.
pub const NUM_KEPT_INITIAL_DESTINATION_CARDS: usize = 2;
/// Destination cards a player must keep out of those drawn during their turn.
pub const NUM_KEPT_DRAWN_DESTINATION_CARDS: usize = 1;

/// Every action a player can start their turn with.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TurnAction {
    TakeVisible(TrainColor),
    BlindDraw,
    DrawDestinations,
    ClaimRoute(RouteId),
    BuildStation(CityId),
    Pass,
}

/// Resolves one turn of the current player, or any other decision taken during that player's turn.
///
/// Only borrows the game for the duration of the turn.
pub struct Turn<'a, P: ChoicePort + ?Sized> {
    pub(crate) state: &'a mut GameState,
    pub(crate) port: &'a mut P,
}

impl<'a, P: ChoicePort + ?Sized> Turn<'a, P> {
    pub fn new(state: &'a mut GameState, port: &'a mut P) -> Self {
        Self { state, port }
    }

    #[inline]
    pub(crate) fn player(&self) -> &Player {
        &self.state.players[self.state.current_player]
    }

    #[inline]
    pub(crate) fn player_mut(&mut self) -> &mut Player {
        &mut self.state.players[self.state.current_player]
    }

    /// Asks the current player to make a decision, publishing the game state along with the prompt.
    pub(crate) fn choose(&mut self, prompt: Prompt) -> Result<String, GameError> {
        let state = &*self.state;
        resolve_choice(&mut *self.port, &prompt, || state.snapshot(Some(&prompt)))
    }

    /// Every action the current player can legally start their turn with, along with its identifier.
    /// Passing is always allowed on top of these.
    pub fn legal_actions(&self) -> Vec<(String, TurnAction)> {
        let state = &*self.state;
        let player = self.player();
        let mut actions = Vec::new();

        let visible_colors: BTreeSet<_> = state.card_bank.visible_train_cards().iter().copied().collect();
        for color in visible_colors {
            actions.push((color.to_string(), TurnAction::TakeVisible(color)));
        }

        if state.card_bank.draw_pile_len() > 0 {
            actions.push((BLIND_DRAW.to_owned(), TurnAction::BlindDraw));
        }

        actions.push((DRAW_DESTINATIONS.to_owned(), TurnAction::DrawDestinations));

        for route_id in state.map.route_ids() {
            if acquisition::can_claim_route(&state.map, route_id, player) {
                let name = state.map.route(route_id).name().to_owned();
                actions.push((name, TurnAction::ClaimRoute(route_id)));
            }
        }

        if acquisition::can_build_station(player, &state.rules) {
            for city_id in state.map.city_ids() {
                let city = state.map.city(city_id);
                if city.station_owner().is_none() {
                    actions.push((city.name().to_owned(), TurnAction::BuildStation(city_id)));
                }
            }
        }

        actions
    }

    /// Plays the current player's turn, from the choice of an action to its resolution.
    #[instrument(skip(self), fields(player = self.state.current_player))]
    pub fn play(&mut self) -> Result<TurnAction, GameError> {
        self.state.card_bank.restock_draw_pile();

        let actions = self.legal_actions();
        let prompt = Prompt::new(
            self.state.current_player,
            format!("{}, pick an action for your turn.", self.player().name()),
        )
        .with_choices(actions.iter().map(|(identifier, _)| identifier))
        .with_can_pass(true);

        let response = self.choose(prompt)?;
        let action = actions
            .into_iter()
            .find(|(identifier, _)| *identifier == response)
            .map_or(TurnAction::Pass, |(_, action)| action);
        debug!(?action, "action chosen");

        match action {
            TurnAction::TakeVisible(color) => self.take_visible(color)?,
            TurnAction::BlindDraw => self.blind_draw()?,
            TurnAction::DrawDestinations => self.draw_destinations()?,
            TurnAction::ClaimRoute(route_id) => {
                self.claim_route(route_id)?;
            }
            TurnAction::BuildStation(city_id) => {
                self.build_station(city_id)?;
            }
            TurnAction::Pass => {
                let event = format!("{} passed.", self.player().name());
                self.state.log_event(event);
            }
        }

        Ok(action)
    }

    fn take_visible(&mut self, color: TrainColor) -> Result<(), GameError> {
        self.take_visible_card(color);

        // Taking a visible locomotive ends the turn right away.
        if color.is_not_locomotive() {
            self.second_draw()?;
        }

        Ok(())
    }

    fn take_visible_card(&mut self, color: TrainColor) {
        let replaced = self.state.card_bank.take_visible(color);
        self.player_mut().add_train_card(color);

        let event = format!("{} took a {} train card.", self.player().name(), color);
        self.state.log_event(event);
        if replaced {
            self.state
                .log_event(String::from("Three locomotives were visible: the row was replaced."));
        }
    }

    fn blind_draw(&mut self) -> Result<(), GameError> {
        self.draw_from_deck();
        self.second_draw()
    }

    fn draw_from_deck(&mut self) {
        let event = match self.state.card_bank.draw() {
            Some(card) => {
                self.player_mut().add_train_card(card);
                format!("{} drew a train card from the deck.", self.player().name())
            }
            None => format!("{} found no train card left in the deck.", self.player().name()),
        };
        self.state.log_event(event);
    }

    /// Offers a second train card, which cannot be a visible locomotive.
    fn second_draw(&mut self) -> Result<(), GameError> {
        let mut options: Vec<String> = self
            .state
            .card_bank
            .visible_train_cards()
            .iter()
            .filter(|card| card.is_not_locomotive())
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(|color| color.to_string())
            .collect();
        if self.state.card_bank.has_hidden_cards() {
            options.push(BLIND_DRAW.to_owned());
        }

        let prompt = Prompt::new(
            self.state.current_player,
            format!("{}, pick a second train card.", self.player().name()),
        )
        .with_choices(options)
        .with_can_pass(true);

        let response = self.choose(prompt)?;
        if response == BLIND_DRAW {
            self.draw_from_deck();
        } else if let Ok(color) = TrainColor::from_str(&response) {
            self.take_visible_card(color);
        }

        Ok(())
    }

    fn draw_destinations(&mut self) -> Result<(), GameError> {
        let offered = self.state.destination_pool.draw_many().into_vec();
        if offered.is_empty() {
            let event = format!("{} found no destination card left.", self.player().name());
            self.state.log_event(event);
            return Ok(());
        }

        let discarded = self.select_destinations(offered, NUM_KEPT_DRAWN_DESTINATION_CARDS)?;
        self.state.destination_pool.return_to_bottom(discarded);

        Ok(())
    }

    /// Lets the current player discard offered destination cards one at a time, until they pass or
    /// only `num_kept` remain. The remaining cards are given to the player, and the discarded ones
    /// are returned.
    pub(crate) fn select_destinations(
        &mut self,
        mut offered: Vec<DestinationCard>,
        num_kept: usize,
    ) -> Result<Vec<DestinationCard>, GameError> {
        let mut discarded = Vec::new();

        while offered.len() > num_kept {
            let prompt = Prompt::new(
                self.state.current_player,
                format!(
                    "{}, pick a destination card to discard, or pass to keep them all.",
                    self.player().name()
                ),
            )
            .with_buttons(offered.iter().map(|destination_card| &destination_card.name))
            .with_can_pass(true);

            let response = self.choose(prompt)?;
            match offered
                .iter()
                .position(|destination_card| destination_card.name == response)
            {
                Some(index) => discarded.push(offered.remove(index)),
                None => break,
            }
        }

        let event = format!(
            "{} kept {} destination card(s), and discarded {}.",
            self.player().name(),
            offered.len(),
            discarded.len()
        );
        self.state.log_event(event);
        self.player_mut().add_destination_cards(offered);

        Ok(discarded)
    }
}
