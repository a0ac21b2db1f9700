mod catalog;
mod destination;

pub use catalog::{default_games, default_platforms, Catalog};
pub use destination::{Destination, Game, Platform, PlatformColor};
