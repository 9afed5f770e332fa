use thiserror::Error;

/// Errors raised while assembling a map from raw city and route data.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MapError {
    #[error("city `{0}` is declared more than once")]
    DuplicateCity(String),
    #[error("no city is named `{0}`")]
    UnknownCity(String),
    #[error("route between {start} and {end} is invalid: {reason}")]
    InvalidRoute {
        start: String,
        end: String,
        reason: &'static str,
    },
    #[error("destination between {start} and {end} is invalid: {reason}")]
    InvalidDestination {
        start: String,
        end: String,
        reason: &'static str,
    },
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum GameError {
    #[error("cannot create a game with {0} players: one must have at least two, and at most five players")]
    PlayerCount(usize),
    #[error("player name `{0}` is used more than once")]
    DuplicatePlayerName(String),
    #[error("invalid rules: {0}")]
    InvalidRules(&'static str),
    #[error("the choice channel was closed before a response was received")]
    Cancelled,
    #[error("the game has already been played")]
    AlreadyPlayed,
    #[error("the game is not waiting for any input")]
    NoPendingChoice,
    #[error("`{response}` is not a valid response to \"{instruction}\"")]
    InvalidResponse {
        response: String,
        instruction: String,
    },
    #[error(transparent)]
    Map(#[from] MapError),
}
