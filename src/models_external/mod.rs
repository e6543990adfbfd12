pub mod universe;
pub mod game;
pub mod votes;
pub mod thumbnail;
