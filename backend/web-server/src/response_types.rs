use rocket::serde::uuid::Uuid;
use rocket::serde::{Deserialize, Serialize};

use rails_engine::error::GameError;

#[derive(Debug, Deserialize, PartialEq, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ActionResponse {
    pub success: bool,
    pub error_message: Option<String>,
}

impl ActionResponse {
    pub fn new(result: Result<(), GameError>) -> Self {
        match result {
            Ok(()) => Self::new_success(),
            Err(e) => Self::new_failure(e.to_string()),
        }
    }

    pub fn new_success() -> Self {
        Self {
            success: true,
            error_message: None,
        }
    }

    pub fn new_failure(error_message: String) -> Self {
        Self {
            success: false,
            error_message: Some(error_message),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct CreateGameResponse {
    pub game_id: Uuid,
}
