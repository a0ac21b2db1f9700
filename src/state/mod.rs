pub mod navigation;
pub mod ui;

pub use navigation::{NavigationPath, Screen};
pub use ui::UIState;
