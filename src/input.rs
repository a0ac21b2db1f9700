// Keyboard input handling
// Key presses are translated to messages and applied after rendering

use crate::app::GamingApp;
use crate::message::Message;
use crate::state::Screen;
use eframe::egui::{self, Key, Modifiers};

impl GamingApp {
    /// First key press this frame that maps to a message.
    pub fn handle_input(&self, ctx: &egui::Context) -> Option<Message> {
        let screen = self.path.screen();
        let show_help = self.ui.show_help;
        ctx.input(|i| {
            i.events.iter().find_map(|event| match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } => map_key(*key, *modifiers, screen, show_help),
                _ => None,
            })
        })
    }
}

pub fn map_key(key: Key, modifiers: Modifiers, screen: Screen<'_>, show_help: bool) -> Option<Message> {
    if show_help {
        return match key {
            Key::Escape | Key::Q | Key::Questionmark => Some(Message::ToggleHelp),
            _ => None,
        };
    }

    let on_game = matches!(screen, Screen::Game(_));
    match key {
        // History (must come before plain arrows)
        Key::ArrowLeft if modifiers.alt => Some(Message::GoBack),
        Key::Backspace => Some(Message::GoBack),
        Key::Home | Key::H => Some(Message::GoHome),

        Key::ArrowDown | Key::J => Some(Message::SelectDelta(1)),
        Key::ArrowUp | Key::K => Some(Message::SelectDelta(-1)),
        Key::Enter => Some(Message::ActivateSelection),

        Key::R if on_game => Some(Message::RecommendGame),
        Key::P if on_game => Some(Message::AnotherPlatform),

        Key::T => Some(Message::ToggleTheme),
        Key::Questionmark => Some(Message::ToggleHelp),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Game;

    #[test]
    fn test_navigation_keys() {
        let none = Modifiers::NONE;
        assert_eq!(map_key(Key::J, none, Screen::Root, false), Some(Message::SelectDelta(1)));
        assert_eq!(map_key(Key::ArrowUp, none, Screen::Root, false), Some(Message::SelectDelta(-1)));
        assert_eq!(map_key(Key::Enter, none, Screen::Root, false), Some(Message::ActivateSelection));
        assert_eq!(map_key(Key::Backspace, none, Screen::Root, false), Some(Message::GoBack));
        assert_eq!(map_key(Key::Home, none, Screen::Root, false), Some(Message::GoHome));
        assert_eq!(map_key(Key::ArrowLeft, none, Screen::Root, false), None);
        assert_eq!(map_key(Key::ArrowLeft, Modifiers::ALT, Screen::Root, false), Some(Message::GoBack));
    }

    #[test]
    fn test_game_actions_only_on_game_screen() {
        let none = Modifiers::NONE;
        let game = Game::new("Minecraft", "99");
        assert_eq!(map_key(Key::R, none, Screen::Root, false), None);
        assert_eq!(map_key(Key::R, none, Screen::Game(&game), false), Some(Message::RecommendGame));
        assert_eq!(map_key(Key::P, none, Screen::Game(&game), false), Some(Message::AnotherPlatform));
    }

    #[test]
    fn test_help_swallows_keys() {
        let none = Modifiers::NONE;
        assert_eq!(map_key(Key::Questionmark, none, Screen::Root, false), Some(Message::ToggleHelp));
        assert_eq!(map_key(Key::J, none, Screen::Root, true), None);
        assert_eq!(map_key(Key::Escape, none, Screen::Root, true), Some(Message::ToggleHelp));
        assert_eq!(map_key(Key::Q, none, Screen::Root, true), Some(Message::ToggleHelp));
    }
}
