use crate::card::{CardBank, CardBankState, TrainColor};
use crate::choice::Prompt;
use crate::config::Rules;
use crate::destination::{DestinationCard, DestinationDecks, DestinationPool};
use crate::game_phase::GamePhase;
use crate::map::Map;
use crate::player::{Player, PlayerColor, PlayerId, PlayerState};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::info;

/// How a finished game ended.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "result")]
pub enum GameOutcome {
    Winner { player: PlayerId },
    /// Players sharing both the highest score and the longest continuous path.
    Tie { players: Vec<PlayerId> },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CityState {
    pub name: String,
    pub station_owner: Option<PlayerId>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RouteState {
    pub name: String,
    pub cities: (String, String),
    pub length: u8,
    pub color: Option<TrainColor>,
    pub is_tunnel: bool,
    pub ferry_locomotives: Option<u8>,
    pub owner: Option<PlayerId>,
}

/// Owned copy of everything a front-end may render, taken at one point in time.
/// Reading it never touches the live game.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub turn: usize,
    pub current_player: PlayerId,
    /// The decision the game is waiting on, if any.
    pub prompt: Option<Prompt>,
    pub cities: Vec<CityState>,
    pub routes: Vec<RouteState>,
    pub players: Vec<PlayerState>,
    pub card_bank: CardBankState,
    pub destination_pile_size: usize,
    /// Human-readable description of everything that happened, oldest first.
    pub log: Vec<String>,
    pub outcome: Option<GameOutcome>,
}

/// Everything a game is made of. Mutated by a single thread, one player action at a time.
#[derive(Debug)]
pub struct GameState {
    pub(crate) map: Map,
    pub(crate) card_bank: CardBank,
    pub(crate) destination_pool: DestinationPool,
    /// Dealt once, one per player, during the initial destination selection.
    pub(crate) long_destination_cards: Vec<DestinationCard>,
    pub(crate) players: Vec<Player>,
    pub(crate) current_player: PlayerId,
    pub(crate) phase: GamePhase,
    pub(crate) turn: usize,
    pub(crate) rules: Rules,
    pub(crate) log: Vec<String>,
    pub(crate) outcome: Option<GameOutcome>,
}

impl GameState {
    /// Seats the players in the given order, and shuffles both destination decks.
    /// Expects player names to be validated already.
    pub(crate) fn new(
        player_names: Vec<String>,
        mut map: Map,
        destination_decks: DestinationDecks,
        rules: Rules,
        card_bank: CardBank,
        rng: &mut StdRng,
    ) -> Self {
        map.set_num_players(player_names.len());

        let mut colors: Vec<_> = PlayerColor::iter().collect();
        colors.shuffle(rng);

        let players = player_names
            .into_iter()
            .zip(colors)
            .enumerate()
            .map(|(id, (name, color))| Player::new(id, name, color, &rules))
            .collect();

        let mut long_destination_cards = destination_decks.long;
        long_destination_cards.shuffle(rng);

        Self {
            map,
            card_bank,
            destination_pool: DestinationPool::new(destination_decks.short, rng),
            long_destination_cards,
            players,
            current_player: 0,
            phase: GamePhase::Setup,
            turn: 0,
            rules,
            log: Vec::new(),
            outcome: None,
        }
    }

    #[inline]
    pub fn map(&self) -> &Map {
        &self.map
    }

    #[inline]
    pub fn card_bank(&self) -> &CardBank {
        &self.card_bank
    }

    #[inline]
    pub fn destination_pool(&self) -> &DestinationPool {
        &self.destination_pool
    }

    #[inline]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[inline]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[inline]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    #[inline]
    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    #[inline]
    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub(crate) fn set_phase(&mut self, phase: GamePhase) {
        info!(from = ?self.phase, to = ?phase, "game phase changed");
        self.phase = phase;
    }

    pub(crate) fn log_event(&mut self, event: String) {
        info!(turn = self.turn, "{}", event);
        self.log.push(event);
    }

    /// Number of train cards in the game, wherever they are: bank, hands, or staging areas.
    pub fn num_train_cards_in_game(&self) -> usize {
        self.card_bank.num_cards_held()
            + self
                .players
                .iter()
                .map(|player| player.total_train_cards() + player.num_staged_train_cards() as usize)
                .sum::<usize>()
    }

    pub fn snapshot(&self, prompt: Option<&Prompt>) -> GameSnapshot {
        let cities = self
            .map
            .cities()
            .iter()
            .map(|city| CityState {
                name: city.name().to_owned(),
                station_owner: city.station_owner(),
            })
            .collect();

        let routes = self
            .map
            .routes()
            .iter()
            .map(|route| {
                let (start, end) = route.cities();
                RouteState {
                    name: route.name().to_owned(),
                    cities: (
                        self.map.city(start).name().to_owned(),
                        self.map.city(end).name().to_owned(),
                    ),
                    length: route.length(),
                    color: route.color(),
                    is_tunnel: route.is_tunnel(),
                    ferry_locomotives: route.ferry_locomotives(),
                    owner: route.owner(),
                }
            })
            .collect();

        let players = self
            .players
            .iter()
            .map(|player| {
                player.get_player_state(player.id() == self.current_player, &self.map)
            })
            .collect();

        GameSnapshot {
            phase: self.phase,
            turn: self.turn,
            current_player: self.current_player,
            prompt: prompt.cloned(),
            cities,
            routes,
            players,
            card_bank: self.card_bank.get_state(),
            destination_pile_size: self.destination_pool.len(),
            log: self.log.clone(),
            outcome: self.outcome.clone(),
        }
    }
}
