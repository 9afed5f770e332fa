use crate::controller::{GameIdSessionMapping, ReadController, WriteController};
use crate::request_types::*;
use crate::response_types::*;
use crate::ServerConfig;

use rocket::response::status::BadRequest;
use rocket::serde::json::Json;
use rocket::{serde::uuid::Uuid, State};

use rails_engine::game_state::GameSnapshot;

#[post("/api/game", format = "json", data = "<create_game_request>")]
pub fn create_game(
    sessions: &State<GameIdSessionMapping>,
    config: &State<ServerConfig>,
    create_game_request: Json<CreateGameRequest>,
) -> Result<Json<CreateGameResponse>, BadRequest<Json<ActionResponse>>> {
    match WriteController::create_game(sessions, create_game_request.into_inner(), config) {
        Ok(game_id) => Ok(Json(CreateGameResponse { game_id })),
        Err(e) => Err(BadRequest(Json(ActionResponse::new_failure(e.to_string())))),
    }
}

#[get("/api/game/<game_id>/state")]
pub fn get_game_state(
    game_id: Uuid,
    sessions: &State<GameIdSessionMapping>,
) -> Option<Json<GameSnapshot>> {
    let game_id_and_session = sessions.get(&game_id)?;

    ReadController::new(game_id_and_session)
        .get_game_state()
        .map(Json)
}

#[post("/api/game/<game_id>/input", format = "json", data = "<input_request>")]
pub fn send_input(
    game_id: Uuid,
    sessions: &State<GameIdSessionMapping>,
    input_request: Json<InputRequest>,
) -> Option<Json<ActionResponse>> {
    let game_id_and_session = sessions.get(&game_id)?;

    Some(Json(
        ReadController::new(game_id_and_session).send_input(input_request.into_inner()),
    ))
}

#[delete("/api/game/<game_id>")]
pub fn delete_game(
    game_id: Uuid,
    sessions: &State<GameIdSessionMapping>,
) -> Option<Json<ActionResponse>> {
    WriteController::delete_game(sessions, game_id).then(|| Json(ActionResponse::new_success()))
}
