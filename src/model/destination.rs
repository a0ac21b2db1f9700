use serde::{Deserialize, Serialize};

/// Named colours a platform can be tinted with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformColor {
    Green,
    Indigo,
    Pink,
    Mint,
    Red,
    Orange,
    Yellow,
    Blue,
    Purple,
    Teal,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Platform {
    pub name: String,
    /// Symbolic icon id, resolved to a glyph by the renderer.
    pub icon: String,
    pub color: PlatformColor,
}

impl Platform {
    pub fn new(name: impl Into<String>, icon: impl Into<String>, color: PlatformColor) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            color,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Game {
    pub name: String,
    pub rating: String,
}

impl Game {
    pub fn new(name: impl Into<String>, rating: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rating: rating.into(),
        }
    }

    /// Headline shown on the game detail screen.
    pub fn title(&self) -> String {
        format!("{} - {}", self.name, self.rating)
    }
}

/// A screen the user can navigate to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Destination {
    Platform(Platform),
    Game(Game),
}

impl Destination {
    pub fn name(&self) -> &str {
        match self {
            Destination::Platform(platform) => &platform.name,
            Destination::Game(game) => &game.name,
        }
    }
}

#[cfg(test)]
impl Destination {
    pub fn as_platform(&self) -> Option<&Platform> {
        match self {
            Destination::Platform(platform) => Some(platform),
            Destination::Game(_) => None,
        }
    }

    pub fn as_game(&self) -> Option<&Game> {
        match self {
            Destination::Game(game) => Some(game),
            Destination::Platform(_) => None,
        }
    }
}

impl From<Platform> for Destination {
    fn from(platform: Platform) -> Self {
        Destination::Platform(platform)
    }
}

impl From<Game> for Destination {
    fn from(game: Game) -> Self {
        Destination::Game(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_name() {
        let xbox: Destination = Platform::new("Xbox", "xbox.logo", PlatformColor::Green).into();
        let minecraft: Destination = Game::new("Minecraft", "99").into();
        assert_eq!(xbox.name(), "Xbox");
        assert_eq!(minecraft.name(), "Minecraft");
        assert!(xbox.as_platform().is_some());
        assert!(xbox.as_game().is_none());
        assert_eq!(minecraft.as_game().map(|g| g.rating.as_str()), Some("99"));
    }

    #[test]
    fn test_game_title() {
        assert_eq!(Game::new("God of War", "98").title(), "God of War - 98");
    }

    #[test]
    fn test_same_name_across_variants_is_distinct() {
        let as_platform: Destination = Platform::new("PC", "pc", PlatformColor::Pink).into();
        let as_game: Destination = Game::new("PC", "10").into();
        assert_ne!(as_platform, as_game);
    }
}
