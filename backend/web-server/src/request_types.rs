use rocket::serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct CreateGameRequest {
    pub player_names: Vec<String>,
}

#[derive(Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct InputRequest {
    /// A choice, a button, or the empty string to pass.
    pub response: String,
}
