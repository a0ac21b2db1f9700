// UI state - presentation settings and the keyboard cursor
use crate::style::Theme;
use std::time::Instant;

pub struct UIState {
    pub theme: Theme,
    pub show_help: bool,
    /// Keyboard cursor over the rows of the current screen.
    pub selected_index: usize,
    pub info_message: Option<(String, Instant)>,
}

impl UIState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            show_help: false,
            selected_index: 0,
            info_message: None,
        }
    }

    pub fn set_info(&mut self, message: String) {
        self.info_message = Some((message, Instant::now()));
    }

    pub fn clear_expired_messages(&mut self, timeout_secs: u64) {
        if let Some((_, time)) = &self.info_message {
            if time.elapsed().as_secs() >= timeout_secs {
                self.info_message = None;
            }
        }
    }

    /// Move the cursor by `delta`, clamped to `row_count` rows.
    pub fn move_selection(&mut self, delta: i32, row_count: usize) {
        if row_count == 0 {
            self.selected_index = 0;
            return;
        }
        let max_idx = row_count - 1;
        let current = self.selected_index.min(max_idx);
        self.selected_index = if delta < 0 {
            current.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            (current + delta as usize).min(max_idx)
        };
    }

    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_selection_clamps() {
        let mut ui = UIState::new(Theme::Dark);
        ui.move_selection(-1, 4);
        assert_eq!(ui.selected_index, 0);
        ui.move_selection(2, 4);
        assert_eq!(ui.selected_index, 2);
        ui.move_selection(5, 4);
        assert_eq!(ui.selected_index, 3);
        ui.move_selection(-2, 4);
        assert_eq!(ui.selected_index, 1);
    }

    #[test]
    fn test_move_selection_on_fewer_rows() {
        let mut ui = UIState::new(Theme::Dark);
        ui.selected_index = 7;
        ui.move_selection(1, 3);
        assert_eq!(ui.selected_index, 2);
        ui.move_selection(1, 0);
        assert_eq!(ui.selected_index, 0);
    }

    #[test]
    fn test_info_message_expires() {
        let mut ui = UIState::new(Theme::Light);
        ui.set_info("hello".to_string());
        ui.clear_expired_messages(60);
        assert!(ui.info_message.is_some());
        ui.clear_expired_messages(0);
        assert!(ui.info_message.is_none());
    }
}
