//! The middleman between the [`crate::router`] handlers and the games running in the background.

use crate::request_types::*;
use crate::response_types::*;
use crate::ServerConfig;

use dashmap::{mapref::one::Ref, DashMap};
use std::thread;
use tracing::{info, warn};
use uuid::Uuid;

use rails_engine::choice::{self, ChannelHandle};
use rails_engine::error::GameError;
use rails_engine::europe;
use rails_engine::game_state::GameSnapshot;
use rails_engine::manager::Manager;

/// Maps a game ID to its session in a shared concurrent hash map.
pub type GameIdSessionMapping = DashMap<Uuid, Session>;

/// A game running on its own thread, blocked on its players' responses.
///
/// Dropping the session cancels the game: its thread stops at the next decision it waits on.
#[derive(Debug)]
pub struct Session {
    handle: ChannelHandle,
}

impl Session {
    /// Sets up a game on the Europe map, and starts playing it on a separate thread.
    ///
    /// Fails without starting anything if the players or the rules are invalid.
    fn start(
        game_id: Uuid,
        player_names: Vec<String>,
        config: &ServerConfig,
    ) -> Result<Self, GameError> {
        let map = europe::map()?;
        let destination_decks = europe::destination_decks(&map)?;
        let (port, handle) = choice::channel();
        let mut manager = Manager::new(
            player_names,
            map,
            destination_decks,
            config.rules.clone(),
            port,
        )?;

        thread::spawn(move || match manager.run() {
            Ok(outcome) => info!(%game_id, ?outcome, "game over"),
            Err(e) => warn!(%game_id, error = %e, "game stopped"),
        });

        Ok(Self { handle })
    }
}

/// Entrypoint of requests targeting an existing game, after routing.
///
/// Only needs a shared reference to the [`Session`]: responses are forwarded to the game thread,
/// which owns the game itself.
pub struct ReadController<'a> {
    /// Shared reference to the game ID, and to the [`Session`] of that game.
    game_id_and_session: Ref<'a, Uuid, Session>,
}

impl<'a> ReadController<'a> {
    pub(crate) fn new(game_id_and_session: Ref<'a, Uuid, Session>) -> Self {
        Self {
            game_id_and_session,
        }
    }

    #[inline]
    fn session(&self) -> &Session {
        self.game_id_and_session.value()
    }

    /// The latest state published by the game.
    #[inline]
    pub(crate) fn get_game_state(&self) -> Option<GameSnapshot> {
        self.session().handle.snapshot()
    }

    /// Forwards a response to the game, if it answers the decision the game is waiting on.
    #[inline]
    pub(crate) fn send_input(&self, input_request: InputRequest) -> ActionResponse {
        ActionResponse::new(self.session().handle.answer(input_request.response))
    }
}

/// Entrypoint of requests adding or removing games, after routing.
pub struct WriteController;

impl WriteController {
    pub(crate) fn create_game(
        sessions: &GameIdSessionMapping,
        create_game_request: CreateGameRequest,
        config: &ServerConfig,
    ) -> Result<Uuid, GameError> {
        let game_id = Uuid::new_v4();
        let session = Session::start(game_id, create_game_request.player_names, config)?;

        sessions.insert(game_id, session);
        info!(%game_id, "created game");

        Ok(game_id)
    }

    /// Removes the game, which cancels it. Returns whether the game existed.
    pub(crate) fn delete_game(sessions: &GameIdSessionMapping, game_id: Uuid) -> bool {
        let deleted = sessions.remove(&game_id).is_some();
        if deleted {
            info!(%game_id, "deleted game");
        }

        deleted
    }
}
