//! Agents supply moves for one side of a game.

mod agent;
mod engine;
mod human;

pub use agent::Agent;
pub use engine::EngineAgent;
pub use human::HumanAgent;
