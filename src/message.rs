/// Everything the user can do, produced by clicks and key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // Navigation
    SelectPlatform(usize),
    SelectGame(usize),
    RecommendGame,
    AnotherPlatform,
    GoHome,
    GoBack,

    // Keyboard cursor
    SelectDelta(i32), // +1/-1 for j/k
    ActivateSelection,

    // UI
    ToggleHelp,
    ToggleTheme,
}

impl Message {
    /// Whether handling this message may change the navigation path.
    pub fn navigates(&self) -> bool {
        matches!(
            self,
            Message::SelectPlatform(_)
                | Message::SelectGame(_)
                | Message::RecommendGame
                | Message::AnotherPlatform
                | Message::GoHome
                | Message::GoBack
        )
    }
}
