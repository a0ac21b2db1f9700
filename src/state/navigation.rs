// Navigation state - the path of destinations from the root list to the visible screen
use crate::model::{Destination, Game, Platform};

/// What the renderer should show for the current path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen<'a> {
    Root,
    Platform(&'a Platform),
    Game(&'a Game),
}

/// Ordered navigation history. Index 0 is the first push, the last entry is
/// the visible screen, and an empty path means the root list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationPath {
    entries: Vec<Destination>,
}

impl NavigationPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, destination: impl Into<Destination>) {
        let destination = destination.into();
        log::debug!("push {:?} (depth {})", destination.name(), self.entries.len() + 1);
        self.entries.push(destination);
    }

    /// Drop one level, as the window's back control does.
    pub fn pop(&mut self) -> Option<Destination> {
        let popped = self.entries.pop();
        if let Some(destination) = &popped {
            log::debug!("pop {:?} (depth {})", destination.name(), self.entries.len());
        }
        popped
    }

    /// Remove the last `count` entries; a count past the length clears the path.
    pub fn remove_last(&mut self, count: usize) {
        let keep = self.entries.len().saturating_sub(count);
        self.entries.truncate(keep);
    }

    pub fn pop_all(&mut self) {
        if !self.entries.is_empty() {
            log::debug!("clear path (was depth {})", self.entries.len());
        }
        self.remove_last(self.len());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top(&self) -> Option<&Destination> {
        self.entries.last()
    }

    pub fn screen(&self) -> Screen<'_> {
        match self.top() {
            None => Screen::Root,
            Some(Destination::Platform(platform)) => Screen::Platform(platform),
            Some(Destination::Game(game)) => Screen::Game(game),
        }
    }

    /// Root-most entry first.
    pub fn iter(&self) -> std::slice::Iter<'_, Destination> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a NavigationPath {
    type Item = &'a Destination;
    type IntoIter = std::slice::Iter<'a, Destination>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Catalog, PlatformColor};
    use proptest::prelude::*;

    fn xbox() -> Platform {
        Platform::new("Xbox", "xbox.logo", PlatformColor::Green)
    }

    fn minecraft() -> Game {
        Game::new("Minecraft", "99")
    }

    #[test]
    fn test_starts_at_root() {
        let path = NavigationPath::new();
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
        assert!(path.top().is_none());
        assert_eq!(path.screen(), Screen::Root);
    }

    #[test]
    fn test_platform_then_game_then_home() {
        let mut path = NavigationPath::new();
        path.push(xbox());
        assert_eq!(path.top(), Some(&Destination::Platform(xbox())));
        assert_eq!(path.screen(), Screen::Platform(&xbox()));

        path.push(minecraft());
        assert_eq!(path.top(), Some(&Destination::Game(minecraft())));
        assert_eq!(path.len(), 2);

        path.pop_all();
        assert_eq!(path.len(), 0);
        assert!(path.top().is_none());
    }

    #[test]
    fn test_push_every_game_in_order() {
        let catalog = Catalog::default();
        let mut path = NavigationPath::new();
        for game in catalog.games() {
            path.push(game.clone());
        }
        assert_eq!(path.len(), 4);
        assert_eq!(path.top().map(Destination::name), Some("Madden 2023"));
        let names: Vec<_> = path.iter().map(Destination::name).collect();
        assert_eq!(names, ["Minecraft", "God of War", "Fornite", "Madden 2023"]);
    }

    #[test]
    fn test_pop_all_on_empty_is_noop() {
        let mut path = NavigationPath::new();
        path.pop_all();
        assert!(path.is_empty());
    }

    #[test]
    fn test_same_destination_may_repeat() {
        let mut path = NavigationPath::new();
        path.push(xbox());
        path.push(xbox());
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn test_pop_returns_previous_screen() {
        let mut path = NavigationPath::new();
        assert!(path.pop().is_none());

        path.push(xbox());
        path.push(minecraft());
        assert_eq!(path.pop(), Some(Destination::Game(minecraft())));
        assert_eq!(path.screen(), Screen::Platform(&xbox()));
        assert_eq!(path.pop(), Some(Destination::Platform(xbox())));
        assert_eq!(path.screen(), Screen::Root);
    }

    #[test]
    fn test_remove_last_clamps() {
        let mut path = NavigationPath::new();
        path.push(xbox());
        path.push(minecraft());
        path.remove_last(1);
        assert_eq!(path.len(), 1);
        path.remove_last(10);
        assert!(path.is_empty());
    }

    fn destination() -> impl Strategy<Value = Destination> {
        let catalog = Catalog::default();
        let platforms = catalog.platforms().to_vec();
        let games = catalog.games().to_vec();
        prop_oneof![
            proptest::sample::select(platforms).prop_map(Destination::Platform),
            proptest::sample::select(games).prop_map(Destination::Game),
        ]
    }

    proptest! {
        #[test]
        fn prop_push_sets_top(
            history in proptest::collection::vec(destination(), 0..16),
            next in destination(),
        ) {
            let mut path = NavigationPath::new();
            for d in history {
                path.push(d);
            }
            let before = path.len();
            path.push(next.clone());
            prop_assert_eq!(path.len(), before + 1);
            prop_assert_eq!(path.top(), Some(&next));
        }

        #[test]
        fn prop_pop_all_always_returns_to_root(
            history in proptest::collection::vec(destination(), 0..32),
        ) {
            let mut path = NavigationPath::new();
            for d in history {
                path.push(d);
            }
            path.pop_all();
            prop_assert_eq!(path.len(), 0);
            prop_assert!(path.top().is_none());
            prop_assert_eq!(path.screen(), Screen::Root);
        }

        #[test]
        fn prop_screen_follows_top(
            history in proptest::collection::vec(destination(), 0..16),
        ) {
            let mut path = NavigationPath::new();
            for d in history {
                path.push(d);
            }
            match (path.screen(), path.top()) {
                (Screen::Root, None) => {}
                (Screen::Platform(p), Some(Destination::Platform(top))) => prop_assert_eq!(p, top),
                (Screen::Game(g), Some(Destination::Game(top))) => prop_assert_eq!(g, top),
                (screen, top) => prop_assert!(false, "screen {:?} does not match top {:?}", screen, top),
            }
        }
    }
}
