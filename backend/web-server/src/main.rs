// Launches a HTTP server, and routes incoming requests to the games it hosts.

#[macro_use]
extern crate rocket;

mod controller;
mod request_types;
mod response_types;
mod router;


use controller::GameIdSessionMapping;
use rocket::fairing::AdHoc;
use rocket::serde::Deserialize;
use router::*;
use tracing_subscriber::EnvFilter;

use rails_engine::config::Rules;

/// Server settings read from `Rocket.toml` and the `ROCKET_` environment variables.
#[derive(Debug, Default, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct ServerConfig {
    /// Rules of every game hosted by the server.
    #[serde(default)]
    pub rules: Rules,
}

#[launch]
fn rocket() -> _ {
    // Tests launch many servers in the same process: only the first one installs the subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();

    rocket::build()
        .mount(
            "/",
            routes![create_game, delete_game, get_game_state, send_input],
        )
        .manage(GameIdSessionMapping::new())
        .attach(AdHoc::config::<ServerConfig>())
}
