#[macro_use]
extern crate lazy_static;

#[macro_use]
pub mod map;

pub mod acquisition;
pub mod card;
pub mod choice;
pub mod city;
pub mod config;
pub mod destination;
pub mod error;
pub mod europe;
pub mod game_phase;
pub mod game_state;
pub mod manager;
pub mod player;
pub mod turn;
