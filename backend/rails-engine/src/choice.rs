use crate::error::GameError;
use crate::game_state::GameSnapshot;
use crate::player::PlayerId;

use serde::Serialize;
use std::collections::{BTreeSet, VecDeque};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// A decision the game needs from a player.
///
/// A valid response is any of the `choices` or `buttons`, or the empty string when `can_pass` is set.
/// The two lists only differ in how a front-end may present them.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Prompt {
    pub player: PlayerId,
    pub instruction: String,
    pub choices: Vec<String>,
    pub buttons: Vec<String>,
    pub can_pass: bool,
}

impl Prompt {
    pub fn new(player: PlayerId, instruction: impl Into<String>) -> Self {
        Self {
            player,
            instruction: instruction.into(),
            ..Self::default()
        }
    }

    pub fn with_choices<S: ToString>(mut self, choices: impl IntoIterator<Item = S>) -> Self {
        self.choices = choices.into_iter().map(|choice| choice.to_string()).collect();
        self
    }

    pub fn with_buttons<S: ToString>(mut self, buttons: impl IntoIterator<Item = S>) -> Self {
        self.buttons = buttons.into_iter().map(|button| button.to_string()).collect();
        self
    }

    pub fn with_can_pass(mut self, can_pass: bool) -> Self {
        self.can_pass = can_pass;
        self
    }

    /// The deduplicated union of choices and buttons.
    pub fn valid_responses(&self) -> BTreeSet<&str> {
        self.choices
            .iter()
            .chain(&self.buttons)
            .map(String::as_str)
            .collect()
    }

    pub fn accepts(&self, response: &str) -> bool {
        (self.can_pass && response.is_empty()) || self.valid_responses().contains(response)
    }
}

/// The seam between the game and whoever makes decisions for the players: a human behind
/// a front-end, a test script, or anything else.
pub trait ChoicePort {
    /// Receives a copy of the game state each time it changes.
    fn publish(&mut self, _snapshot: &GameSnapshot) {}

    /// Blocks until a response to `prompt` is available.
    ///
    /// Returns [`GameError::Cancelled`] once no response will ever come.
    /// The response does not need to be valid: invalid responses are simply asked again.
    fn respond(&mut self, prompt: &Prompt) -> Result<String, GameError>;
}

/// Resolves `prompt` into a valid response.
///
/// Without any valid response, resolves to the empty string. With a single valid response that
/// cannot be passed, resolves to it. In both cases, nothing is asked to the port.
/// Otherwise, the state returned by `snapshot` is published, and the port is asked until it
/// gives a valid response.
pub fn resolve_choice<P: ChoicePort + ?Sized>(
    port: &mut P,
    prompt: &Prompt,
    snapshot: impl FnOnce() -> GameSnapshot,
) -> Result<String, GameError> {
    let valid_responses = prompt.valid_responses();

    if valid_responses.is_empty() {
        return Ok(String::new());
    }

    if valid_responses.len() == 1 && !prompt.can_pass {
        if let Some(response) = valid_responses.into_iter().next() {
            return Ok(response.to_owned());
        }
    }

    port.publish(&snapshot());

    loop {
        let response = port.respond(prompt)?;
        if prompt.accepts(&response) {
            return Ok(response);
        }

        debug!(%response, instruction = %prompt.instruction, "ignoring invalid response");
    }
}

/// Latest state published by a game, shared between the game thread and its readers.
type SharedSnapshot = Arc<RwLock<Option<GameSnapshot>>>;

/// Message-passing [`ChoicePort`]: responses arrive through a channel, and every published
/// state is kept for readers on other threads.
///
/// The game is cancelled once the matching [`ChannelHandle`] is dropped.
#[derive(Debug)]
pub struct ChannelPort {
    responses: Receiver<String>,
    snapshot: SharedSnapshot,
}

/// The outer end of a [`ChannelPort`].
#[derive(Debug)]
pub struct ChannelHandle {
    responses: Sender<String>,
    snapshot: SharedSnapshot,
}

/// Creates a connected [`ChannelPort`] and [`ChannelHandle`].
///
/// # Example
/// ```
/// use rails_engine::choice::{channel, ChoicePort, Prompt};
///
/// let (mut port, handle) = channel();
/// handle.send(String::from("deck")).unwrap();
/// assert_eq!(port.respond(&Prompt::new(0, "Pick a card")).unwrap(), "deck");
///
/// drop(handle);
/// assert!(port.respond(&Prompt::new(0, "Pick a card")).is_err());
/// ```
pub fn channel() -> (ChannelPort, ChannelHandle) {
    let (sender, receiver) = mpsc::channel();
    let snapshot = SharedSnapshot::default();

    (
        ChannelPort {
            responses: receiver,
            snapshot: snapshot.clone(),
        },
        ChannelHandle {
            responses: sender,
            snapshot,
        },
    )
}

impl ChoicePort for ChannelPort {
    fn publish(&mut self, snapshot: &GameSnapshot) {
        let mut latest = self.snapshot.write().unwrap_or_else(PoisonError::into_inner);
        *latest = Some(snapshot.clone());
    }

    fn respond(&mut self, _prompt: &Prompt) -> Result<String, GameError> {
        self.responses.recv().map_err(|_| GameError::Cancelled)
    }
}

impl ChannelHandle {
    /// Forwards a response to the game. Fails once the game is over.
    pub fn send(&self, response: String) -> Result<(), GameError> {
        self.responses
            .send(response)
            .map_err(|_| GameError::Cancelled)
    }

    /// Forwards a response to the prompt of the latest published state, if it accepts it.
    ///
    /// The prompt is cleared as the response is sent: until the game publishes its next state,
    /// any other response is refused rather than left queued for a later prompt.
    pub fn answer(&self, response: String) -> Result<(), GameError> {
        let mut latest = self.snapshot.write().unwrap_or_else(PoisonError::into_inner);
        let snapshot = latest.as_mut().ok_or(GameError::NoPendingChoice)?;
        let prompt = snapshot.prompt.as_ref().ok_or(GameError::NoPendingChoice)?;

        if !prompt.accepts(&response) {
            return Err(GameError::InvalidResponse {
                response,
                instruction: prompt.instruction.clone(),
            });
        }

        snapshot.prompt = None;
        self.send(response)
    }

    /// A copy of the latest state published by the game.
    pub fn snapshot(&self) -> Option<GameSnapshot> {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// [`ChoicePort`] answering from a fixed list of responses, then cancelling the game.
/// Records every prompt it is asked, and the latest published state.
#[derive(Debug, Default)]
pub struct ScriptedPort {
    responses: VecDeque<String>,
    prompts: Vec<Prompt>,
    last_snapshot: Option<GameSnapshot>,
}

impl ScriptedPort {
    pub fn new<S: Into<String>>(responses: impl IntoIterator<Item = S>) -> Self {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn push_responses<S: Into<String>>(&mut self, responses: impl IntoIterator<Item = S>) {
        self.responses.extend(responses.into_iter().map(Into::into));
    }

    /// Every prompt asked so far, including re-asked ones.
    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    pub fn remaining_responses(&self) -> usize {
        self.responses.len()
    }

    pub fn last_snapshot(&self) -> Option<&GameSnapshot> {
        self.last_snapshot.as_ref()
    }
}

impl ChoicePort for ScriptedPort {
    fn publish(&mut self, snapshot: &GameSnapshot) {
        self.last_snapshot = Some(snapshot.clone());
    }

    fn respond(&mut self, prompt: &Prompt) -> Result<String, GameError> {
        self.prompts.push(prompt.clone());
        self.responses.pop_front().ok_or(GameError::Cancelled)
    }
}
