mod agent;
mod game;
mod recording;
pub use agent::*;
pub use game::*;
pub use recording::*;
