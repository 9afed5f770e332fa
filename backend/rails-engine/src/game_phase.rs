use serde::{Deserialize, Serialize};

/// Phases of a game, in order.
///
/// # JSON
/// Phases are serialized in snake case, e.g. `"initial_destinations"`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// The game is created, and cards are about to be dealt.
    Setup,
    /// Each player, in seating order, picks which destination cards to keep.
    InitialDestinations,
    /// Players take turns, until one of them is running out of trains.
    Playing,
    /// Every other player has one last turn.
    LastTurn,
    /// The outcome is known.
    Done,
    /// Nobody is left to make decisions; the game stopped where it was.
    Aborted,
}

impl GamePhase {
    /// Whether the game will not change anymore.
    #[inline]
    pub fn is_over(&self) -> bool {
        matches!(self, GamePhase::Done | GamePhase::Aborted)
    }
}
