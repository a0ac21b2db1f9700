// Static platform and game lists shown by the app
use super::destination::{Game, Platform, PlatformColor};
use crate::error::{CatalogError, CatalogKind};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// The two read-only lists the user navigates through.
///
/// Both lists are non-empty and name-unique; [`Catalog::new`] enforces it, so
/// the random picks only return `None` if that ever stops holding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    platforms: Vec<Platform>,
    games: Vec<Game>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            platforms: default_platforms(),
            games: default_games(),
        }
    }
}

pub fn default_platforms() -> Vec<Platform> {
    vec![
        Platform::new("Xbox", "xbox.logo", PlatformColor::Green),
        Platform::new("Playstation", "playstation.logo", PlatformColor::Indigo),
        Platform::new("PC", "pc", PlatformColor::Pink),
        Platform::new("Mobile", "iphone", PlatformColor::Mint),
    ]
}

pub fn default_games() -> Vec<Game> {
    vec![
        Game::new("Minecraft", "99"),
        Game::new("God of War", "98"),
        Game::new("Fornite", "92"),
        Game::new("Madden 2023", "88"),
    ]
}

impl Catalog {
    pub fn new(platforms: Vec<Platform>, games: Vec<Game>) -> Result<Self, CatalogError> {
        check_names(CatalogKind::Platforms, platforms.iter().map(|p| p.name.as_str()))?;
        check_names(CatalogKind::Games, games.iter().map(|g| g.name.as_str()))?;
        Ok(Self { platforms, games })
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn platform(&self, index: usize) -> Option<&Platform> {
        self.platforms.get(index)
    }

    pub fn game(&self, index: usize) -> Option<&Game> {
        self.games.get(index)
    }

    /// Uniform pick; the currently shown platform is not excluded.
    pub fn random_platform<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Platform> {
        self.platforms.choose(rng)
    }

    /// Uniform pick; the currently shown game is not excluded.
    pub fn random_game<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Game> {
        self.games.choose(rng)
    }
}

#[cfg(test)]
impl Catalog {
    pub fn platform_named(&self, name: &str) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.name == name)
    }

    pub fn game_named(&self, name: &str) -> Option<&Game> {
        self.games.iter().find(|g| g.name == name)
    }
}

fn check_names<'a>(
    kind: CatalogKind,
    names: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(CatalogError::DuplicateName {
                kind,
                name: name.to_string(),
            });
        }
    }
    if seen.is_empty() {
        return Err(CatalogError::Empty { kind });
    }
    Ok(())
}
