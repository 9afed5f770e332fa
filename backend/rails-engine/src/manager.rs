use crate::card::CardBank;
use crate::choice::ChoicePort;
use crate::config::Rules;
use crate::destination::DestinationDecks;
use crate::error::GameError;
use crate::game_phase::GamePhase;
use crate::game_state::{GameOutcome, GameSnapshot, GameState};
use crate::map::Map;
use crate::player::{PlayerId, NUM_INITIAL_TRAIN_CARDS};
use crate::turn::{Turn, NUM_KEPT_INITIAL_DESTINATION_CARDS};

use array_init::array_init;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use tracing::{debug, info, instrument};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 5;

/// In charge of holding all the state of one game, and of moving it from setup to its outcome.
///
/// This overall acts as a finite-state machine, see [`GamePhase`]. Every decision is delegated
/// to the [`ChoicePort`], and the game only moves forward while it answers.
pub struct Manager<P: ChoicePort> {
    state: GameState,
    port: P,
}

impl<P: ChoicePort> Manager<P> {
    /// Creates a game in the [`GamePhase::Setup`], with players seated in the given order.
    ///
    /// Returns an `Err` if either:
    ///   * The rules are invalid.
    ///   * There are less than two, or more than five players.
    ///   * Two players share the same name.
    pub fn new(
        player_names: Vec<String>,
        map: Map,
        destination_decks: DestinationDecks,
        rules: Rules,
        port: P,
    ) -> Result<Self, GameError> {
        rules.validate()?;

        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_names.len()) {
            return Err(GameError::PlayerCount(player_names.len()));
        }

        let mut used_player_names = HashSet::with_capacity(player_names.len());
        for player_name in &player_names {
            if !used_player_names.insert(player_name.as_str()) {
                return Err(GameError::DuplicatePlayerName(player_name.clone()));
            }
        }

        let mut rng = match rules.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let card_bank = CardBank::new(StdRng::seed_from_u64(rng.gen()));
        let state = GameState::new(player_names, map, destination_decks, rules, card_bank, &mut rng);

        let mut manager = Self { state, port };
        manager.publish();
        Ok(manager)
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot(None)
    }

    fn publish(&mut self) {
        let snapshot = self.state.snapshot(None);
        self.port.publish(&snapshot);
    }

    /// Plays the whole game, and returns its outcome.
    ///
    /// If the port stops answering, the game is marked as [`GamePhase::Aborted`] and
    /// [`GameError::Cancelled`] is returned. A game can only be played once.
    #[instrument(skip(self), fields(num_players = self.state.players.len()))]
    pub fn run(&mut self) -> Result<GameOutcome, GameError> {
        if self.state.phase != GamePhase::Setup {
            return Err(GameError::AlreadyPlayed);
        }

        match self.play() {
            Err(GameError::Cancelled) => {
                self.state.set_phase(GamePhase::Aborted);
                self.state
                    .log_event(String::from("The game was cancelled."));
                self.publish();
                Err(GameError::Cancelled)
            }
            result => result,
        }
    }

    fn play(&mut self) -> Result<GameOutcome, GameError> {
        self.deal_train_cards();
        self.select_initial_destinations()?;

        let last_round_trigger = self.play_main_loop()?;
        self.play_last_round(last_round_trigger)?;

        Ok(self.resolve_outcome())
    }

    fn deal_train_cards(&mut self) {
        for player in self.state.players.iter_mut() {
            let train_cards: [_; NUM_INITIAL_TRAIN_CARDS] =
                array_init(|_| self.state.card_bank.draw());

            for card in train_cards.into_iter().flatten() {
                player.add_train_card(card);
            }
        }

        self.state.card_bank.fill_visible_row();
        self.state.log_event(format!(
            "{} train cards were dealt to each player.",
            NUM_INITIAL_TRAIN_CARDS
        ));
        self.publish();
    }

    /// Offers each player, in seating order, short destination cards and one long destination card.
    /// Discarded cards are removed from the game.
    fn select_initial_destinations(&mut self) -> Result<(), GameError> {
        self.state.set_phase(GamePhase::InitialDestinations);

        for player_id in 0..self.state.players.len() {
            self.state.current_player = player_id;

            let mut offered = self.state.destination_pool.draw_many().into_vec();
            offered.extend(self.state.long_destination_cards.pop());

            let discarded = Turn::new(&mut self.state, &mut self.port)
                .select_destinations(offered, NUM_KEPT_INITIAL_DESTINATION_CARDS)?;
            debug!(player_id, num_discarded = discarded.len(), "initial destination cards removed");
        }

        self.state.current_player = 0;
        Ok(())
    }

    /// Plays turns until a player ends theirs with few enough trains left.
    /// Returns that player.
    fn play_main_loop(&mut self) -> Result<PlayerId, GameError> {
        self.state.set_phase(GamePhase::Playing);

        loop {
            let player_id = self.state.current_player;
            self.play_turn()?;

            let player = &self.state.players[player_id];
            if player.trains() <= self.state.rules.last_round_threshold {
                let event = format!(
                    "{} has {} train(s) left: every other player plays one last turn.",
                    player.name(),
                    player.trains()
                );
                self.state.log_event(event);
                return Ok(player_id);
            }

            self.advance_current_player();
        }
    }

    /// Every player but `last_round_trigger` plays one more turn, in seating order.
    fn play_last_round(&mut self, last_round_trigger: PlayerId) -> Result<(), GameError> {
        self.state.set_phase(GamePhase::LastTurn);

        self.advance_current_player();
        while self.state.current_player != last_round_trigger {
            self.play_turn()?;
            self.advance_current_player();
        }

        Ok(())
    }

    fn play_turn(&mut self) -> Result<(), GameError> {
        self.state.turn += 1;
        Turn::new(&mut self.state, &mut self.port).play()?;
        self.publish();

        Ok(())
    }

    #[inline]
    fn advance_current_player(&mut self) {
        self.state.current_player = (self.state.current_player + 1) % self.state.players.len();
    }

    /// The highest score wins. Between equal scores, the longest continuous path wins.
    /// Players still equal after that share a tie.
    fn resolve_outcome(&mut self) -> GameOutcome {
        let best_score = self
            .state
            .players
            .iter()
            .map(|player| player.score())
            .max()
            .unwrap_or(0);
        let mut contenders: Vec<PlayerId> = self
            .state
            .players
            .iter()
            .filter(|player| player.score() == best_score)
            .map(|player| player.id())
            .collect();

        if contenders.len() > 1 {
            let longest_routes: Vec<_> = contenders
                .iter()
                .map(|player_id| (*player_id, self.state.map.get_longest_route(*player_id)))
                .collect();
            let best_longest_route = longest_routes
                .iter()
                .map(|(_, longest_route)| *longest_route)
                .max()
                .unwrap_or(0);

            contenders = longest_routes
                .into_iter()
                .filter(|(_, longest_route)| *longest_route == best_longest_route)
                .map(|(player_id, _)| player_id)
                .collect();
        }

        let outcome = match contenders.as_slice() {
            [winner] => GameOutcome::Winner { player: *winner },
            _ => GameOutcome::Tie {
                players: contenders,
            },
        };

        let event = match &outcome {
            GameOutcome::Winner { player } => format!(
                "{} wins with {} points.",
                self.state.players[*player].name(),
                best_score
            ),
            GameOutcome::Tie { players } => format!(
                "{} tie with {} points.",
                players
                    .iter()
                    .map(|player_id| self.state.players[*player_id].name())
                    .collect::<Vec<_>>()
                    .join(", "),
                best_score
            ),
        };
        info!(?outcome, "game over");

        self.state.outcome = Some(outcome.clone());
        self.state.set_phase(GamePhase::Done);
        self.state.log_event(event);
        self.publish();

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::card::TrainColor::{self, *};
    use crate::choice::ScriptedPort;
    use crate::game_state::tests::{test_destination_decks, test_map};
    use crate::map::RouteId;
    use pretty_assertions::assert_eq;

    fn rules(trains: u8) -> Rules {
        Rules {
            trains,
            seed: Some(5),
            ..Rules::default()
        }
    }

    fn manager(
        player_names: &[&str],
        rules: Rules,
        port: ScriptedPort,
    ) -> Result<Manager<ScriptedPort>, GameError> {
        let map = test_map();
        let destination_decks = test_destination_decks(&map);

        Manager::new(
            player_names.iter().map(|name| name.to_string()).collect(),
            map,
            destination_decks,
            rules,
            port,
        )
    }

    /// Replaces the shuffled bank, so that cards are dealt from the end of `draw_pile`.
    fn set_draw_pile(manager: &mut Manager<ScriptedPort>, draw_pile: Vec<TrainColor>) {
        manager.state.card_bank = CardBank::with_draw_pile(draw_pile, StdRng::seed_from_u64(1));
    }

    // Tests for `Manager::new`.

    #[test]
    fn manager_new() {
        let manager = manager(&["Ada", "Grace", "Linus"], rules(45), ScriptedPort::default()).unwrap();

        assert_eq!(manager.state().phase(), GamePhase::Setup);
        assert_eq!(manager.state().players()[1].name(), "Grace");
        assert_eq!(manager.state().num_train_cards_in_game(), 110);
        assert_eq!(
            manager.port().last_snapshot().map(|snapshot| snapshot.phase),
            Some(GamePhase::Setup)
        );
    }

    #[test]
    fn manager_new_with_invalid_player_count() {
        assert_eq!(
            manager(&["Ada"], rules(45), ScriptedPort::default()).err(),
            Some(GameError::PlayerCount(1))
        );
        assert_eq!(
            manager(&["A", "B", "C", "D", "E", "F"], rules(45), ScriptedPort::default()).err(),
            Some(GameError::PlayerCount(6))
        );
    }

    #[test]
    fn manager_new_with_duplicate_player_names() {
        assert_eq!(
            manager(&["Ada", "Grace", "Ada"], rules(45), ScriptedPort::default()).err(),
            Some(GameError::DuplicatePlayerName(String::from("Ada")))
        );
    }

    #[test]
    fn manager_new_with_invalid_rules() {
        assert!(matches!(
            manager(&["Ada", "Grace"], rules(2), ScriptedPort::default()).err(),
            Some(GameError::InvalidRules(_))
        ));
    }

    #[test]
    fn manager_same_seed_same_game() {
        let first_manager = manager(&["Ada", "Grace"], rules(45), ScriptedPort::default()).unwrap();
        let second_manager = manager(&["Ada", "Grace"], rules(45), ScriptedPort::default()).unwrap();

        assert_eq!(first_manager.snapshot(), second_manager.snapshot());
    }

    // Tests for `Manager::run`.

    #[test]
    fn manager_run_deals_cards_before_destinations() {
        let mut manager = manager(&["Ada", "Grace"], rules(45), ScriptedPort::default()).unwrap();

        assert_eq!(manager.run(), Err(GameError::Cancelled));

        let state = manager.state();
        assert!(state
            .players()
            .iter()
            .all(|player| player.total_train_cards() == NUM_INITIAL_TRAIN_CARDS));
        assert_eq!(state.card_bank().visible_train_cards().len(), 5);
        assert_eq!(state.num_train_cards_in_game(), 110);

        // The first player was offered three short and one long destination cards.
        let prompt = &manager.port().prompts()[0];
        assert_eq!(prompt.player, 0);
        assert_eq!(prompt.buttons.len(), 4);
        assert!(prompt.can_pass);
    }

    #[test]
    fn manager_run_cancelled() {
        let mut manager = manager(&["Ada", "Grace"], rules(45), ScriptedPort::new(["", ""])).unwrap();

        assert_eq!(manager.run(), Err(GameError::Cancelled));
        assert_eq!(manager.state().phase(), GamePhase::Aborted);
        assert_eq!(manager.state().log().last().unwrap(), "The game was cancelled.");
        assert_eq!(
            manager.port().last_snapshot().map(|snapshot| snapshot.phase),
            Some(GamePhase::Aborted)
        );

        // Both players kept all of their destination cards.
        assert!(manager
            .state()
            .players()
            .iter()
            .all(|player| player.destination_cards().len() == 4));
    }

    #[test]
    fn manager_run_only_once() {
        let mut manager = manager(&["Ada", "Grace"], rules(45), ScriptedPort::default()).unwrap();

        assert_eq!(manager.run(), Err(GameError::Cancelled));
        assert_eq!(manager.run(), Err(GameError::AlreadyPlayed));
    }

    #[test]
    fn manager_initial_destinations_discarded_for_good() {
        let mut manager = manager(&["Ada", "Grace"], rules(45), ScriptedPort::default()).unwrap();
        let mut short_destination_cards = Vec::new();
        while let Some(destination_card) = manager.state.destination_pool.draw() {
            short_destination_cards.push(destination_card);
        }
        // Returned to an empty pool, the cards are drawn again in the same order.
        manager
            .state
            .destination_pool
            .return_to_bottom(short_destination_cards.clone());

        // Ada discards two cards, Grace keeps everything.
        manager.port.push_responses([
            short_destination_cards[0].name.clone(),
            short_destination_cards[1].name.clone(),
            String::new(),
        ]);

        assert_eq!(manager.run(), Err(GameError::Cancelled));

        let players = manager.state().players();
        assert_eq!(players[0].destination_cards().len(), 2);
        assert_eq!(players[0].destination_cards()[0], short_destination_cards[2]);
        assert_eq!(players[1].destination_cards().len(), 4);
        assert_eq!(manager.state().destination_pool().len(), 2);
    }

    #[test]
    fn manager_end_game_trigger() {
        let mut manager = manager(
            &["Ada", "Grace", "Linus"],
            rules(45),
            ScriptedPort::new(["", "", "", "", "", ""]),
        )
        .unwrap();
        manager.state.players[0].set_trains(2);

        assert_eq!(
            manager.run(),
            Ok(GameOutcome::Tie {
                players: vec![0, 1, 2]
            })
        );

        let port = manager.port();
        assert_eq!(port.remaining_responses(), 0);
        let turn_players: Vec<_> = port.prompts()[3..]
            .iter()
            .map(|prompt| prompt.player)
            .collect();
        assert_eq!(turn_players, vec![0, 1, 2]);

        let state = manager.state();
        assert_eq!(state.phase(), GamePhase::Done);
        assert_eq!(state.turn, 3);
        assert_eq!(
            port.last_snapshot().and_then(|snapshot| snapshot.outcome.clone()),
            Some(GameOutcome::Tie {
                players: vec![0, 1, 2]
            })
        );
    }

    #[test]
    fn manager_full_game_with_winner() {
        let mut manager = manager(
            &["Ada", "Grace"],
            rules(3),
            ScriptedPort::new(["", "", "Amsterdam - Bruxelles", ""]),
        )
        .unwrap();
        let mut draw_pile = vec![Blue, Blue, Blue];
        draw_pile.extend([White; 5]);
        draw_pile.extend([Red; 4]);
        draw_pile.extend([Black; 4]);
        set_draw_pile(&mut manager, draw_pile);

        assert_eq!(manager.run(), Ok(GameOutcome::Winner { player: 0 }));

        let state = manager.state();
        assert_eq!(state.players()[0].score(), 13);
        assert_eq!(state.players()[0].trains(), 2);
        assert_eq!(state.players()[0].num_train_cards(Black), 3);
        assert_eq!(state.players()[1].score(), 12);
        assert_eq!(state.players()[1].num_train_cards(Red), 4);
        assert_eq!(state.map().route(RouteId(0)).owner(), Some(0));
        assert_eq!(state.num_train_cards_in_game(), 16);
        assert_eq!(state.log().last().unwrap(), "Ada wins with 13 points.");
        assert_eq!(manager.port().remaining_responses(), 0);
    }

    // Tests for `Manager::resolve_outcome`.

    #[test]
    fn manager_tie_broken_by_longest_route() {
        let mut manager = manager(&["Ada", "Grace"], rules(45), ScriptedPort::default()).unwrap();
        let state = &mut manager.state;

        // Both players score two points, with paths of different lengths.
        state.map.claim_route_for_player(RouteId(1), 0);
        state.players[0].pay_for_route(2, 2);
        state.map.claim_route_for_player(RouteId(0), 1);
        state.players[1].pay_for_route(1, 2);

        assert_eq!(manager.resolve_outcome(), GameOutcome::Winner { player: 0 });
        assert_eq!(manager.state().phase(), GamePhase::Done);
    }
}
