// Help modal listing the key bindings

use crate::app::GamingApp;
use crate::message::Message;
use crate::style;
use eframe::egui;
use std::cell::RefCell;

const KEY_BINDINGS: &[(&str, &str)] = &[
    ("j / Down", "Next Row"),
    ("k / Up", "Previous Row"),
    ("Enter", "Open Row / Press Button"),
    ("Backspace / Alt+Left", "Back"),
    ("h / Home", "Go Home"),
    ("r", "Recommended Game (game screen)"),
    ("p", "Another Platform (game screen)"),
    ("t", "Toggle Theme"),
    ("?", "Toggle Help"),
];

impl GamingApp {
    pub(crate) fn render_help_modal(
        &self,
        ctx: &egui::Context,
        next_message: &RefCell<Option<Message>>,
    ) {
        if !self.ui.show_help {
            return;
        }
        egui::Window::new("Help")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(style::modal_width(ctx))
            .show(ctx, |ui| {
                ui.heading("Key Bindings");
                ui.separator();
                egui::Grid::new("help_grid").striped(true).show(ui, |ui| {
                    for (keys, action) in KEY_BINDINGS {
                        ui.label(*keys);
                        ui.label(*action);
                        ui.end_row();
                    }
                });
                ui.separator();
                ui.vertical_centered(|ui| {
                    if ui.button("Close").clicked() {
                        *next_message.borrow_mut() = Some(Message::ToggleHelp);
                    }
                });
            });
    }
}
