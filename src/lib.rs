pub mod core;
pub mod game;

pub use quoridor_engine;
