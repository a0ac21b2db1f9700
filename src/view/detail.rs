// Detail screens for the destination on top of the path

use crate::app::GamingApp;
use crate::message::Message;
use crate::model::{Game, Platform};
use crate::style;
use eframe::egui;
use std::cell::RefCell;

impl GamingApp {
    pub(crate) fn render_platform_detail(
        &self,
        ui: &mut egui::Ui,
        platform: &Platform,
        next_message: &RefCell<Option<Message>>,
    ) {
        let text_color = style::contrast_text(style::platform_color(platform.color));
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(format!(
                    "{} {}",
                    style::icon_glyph(&platform.icon),
                    platform.name
                ))
                .size(style::HEADER_SIZE)
                .strong()
                .color(text_color),
            );
        });
        ui.add_space(style::SECTION_SPACING);

        // Same game list for every platform
        let rows = self.game_rows();
        egui::Frame::group(ui.style())
            .fill(ui.visuals().panel_fill)
            .show(ui, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("platform_scroll")
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        self.render_list(ui, "platform_games_table", &rows, 0, next_message);
                    });
            });
    }

    pub(crate) fn render_game_detail(
        &self,
        ui: &mut egui::Ui,
        game: &Game,
        next_message: &RefCell<Option<Message>>,
    ) {
        ui.vertical_centered(|ui| {
            ui.add_space(style::BUTTON_SPACING);
            ui.label(
                egui::RichText::new(game.title())
                    .size(style::HEADER_SIZE)
                    .strong(),
            );

            let buttons = [
                ("Recommended game", Message::RecommendGame),
                ("Go to another platform", Message::AnotherPlatform),
                ("Go Home", Message::GoHome),
            ];
            for (index, (label, message)) in buttons.into_iter().enumerate() {
                ui.add_space(style::BUTTON_SPACING);
                let button = egui::Button::new(label)
                    .min_size(egui::vec2(style::BUTTON_MIN_WIDTH, 0.0))
                    .selected(self.ui.selected_index == index);
                if ui.add(button).clicked() {
                    *next_message.borrow_mut() = Some(message);
                }
            }
        });
    }
}
