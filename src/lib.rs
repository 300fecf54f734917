// Simulation core for a terminal Asteroids game.
//
// Everything in this crate is frame-driven and single-threaded: the
// binary calls `compute::Game::step` once per tick at
// `config::TICKS_PER_SECOND` and renders whatever state results.

pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod input;
pub mod meteor;
pub mod missile;
pub mod particles;
pub mod player;
pub mod population;
pub mod score;
pub mod starfield;
pub mod timer;
pub mod vector;
