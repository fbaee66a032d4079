pub use board::*;
pub use cards::*;
pub use catalog::*;
pub use config::*;
pub use dealer::*;
pub use errors::*;
pub use game::*;
pub use geometry::*;
pub use objectives::*;
pub use pattern::*;
pub use phase::*;
pub use player_state::*;
pub use resources::*;
pub use snapshot::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod cards;
mod catalog;
mod config;
mod dealer;
mod errors;
mod game;
mod geometry;
mod objectives;
mod pattern;
mod phase;
mod player_state;
mod resources;
mod snapshot;
