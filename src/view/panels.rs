// Panel rendering for the root list and the top/bottom bars

use crate::app::GamingApp;
use crate::message::Message;
use crate::style;
use eframe::egui;
use std::cell::RefCell;

/// One clickable row of a destination list.
pub(crate) struct ListRow {
    pub icon: Option<(&'static str, egui::Color32)>,
    pub label: String,
    pub color: Option<egui::Color32>,
    pub message: Message,
}

impl GamingApp {
    pub(crate) fn render_top_bar(&self, ui: &mut egui::Ui, next_message: &RefCell<Option<Message>>) {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let back = ui.add_enabled(!self.path.is_empty(), egui::Button::new("⬅ Back"));
            if back.clicked() {
                *next_message.borrow_mut() = Some(Message::GoBack);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("?").on_hover_text("Key bindings").clicked() {
                    *next_message.borrow_mut() = Some(Message::ToggleHelp);
                }
                if ui
                    .button(self.ui.theme.toggle_icon())
                    .on_hover_text("Toggle theme")
                    .clicked()
                {
                    *next_message.borrow_mut() = Some(Message::ToggleTheme);
                }
                ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                    ui.add(egui::Label::new(egui::RichText::new(self.breadcrumb()).strong()).truncate());
                });
            });
        });
        ui.add_space(4.0);
    }

    pub(crate) fn render_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if self.path.is_empty() {
                ui.label("Home");
            } else {
                ui.label(format!("Depth {}", self.path.len()));
            }
            if let Some((message, _)) = &self.ui.info_message {
                ui.label(format!(" | {}", message));
            }
        });
    }

    pub(crate) fn render_root(&self, ui: &mut egui::Ui, next_message: &RefCell<Option<Message>>) {
        let platform_rows: Vec<ListRow> = self
            .catalog
            .platforms()
            .iter()
            .enumerate()
            .map(|(index, platform)| {
                let color = style::platform_color(platform.color);
                ListRow {
                    icon: Some((style::icon_glyph(&platform.icon), color)),
                    label: platform.name.clone(),
                    color: Some(color),
                    message: Message::SelectPlatform(index),
                }
            })
            .collect();
        let game_rows = self.game_rows();

        egui::ScrollArea::vertical()
            .id_salt("root_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading(style::WINDOW_TITLE);
                ui.add_space(style::SECTION_SPACING);

                ui.label(egui::RichText::new("Platforms").small().strong());
                ui.separator();
                self.render_list(ui, "platforms_table", &platform_rows, 0, next_message);

                ui.add_space(style::SECTION_SPACING);
                ui.label(egui::RichText::new("Games").small().strong());
                ui.separator();
                self.render_list(ui, "games_table", &game_rows, platform_rows.len(), next_message);
            });
    }

    pub(crate) fn game_rows(&self) -> Vec<ListRow> {
        self.catalog
            .games()
            .iter()
            .enumerate()
            .map(|(index, game)| ListRow {
                icon: None,
                label: game.name.clone(),
                color: None,
                message: Message::SelectGame(index),
            })
            .collect()
    }

    /// `first_row` is the cursor index of `rows[0]` on this screen.
    pub(crate) fn render_list(
        &self,
        ui: &mut egui::Ui,
        id: &str,
        rows: &[ListRow],
        first_row: usize,
        next_message: &RefCell<Option<Message>>,
    ) {
        let default_color = ui.visuals().text_color();
        ui.push_id(id, |ui| {
            use egui_extras::{Column, TableBuilder};
            TableBuilder::new(ui)
                .striped(true)
                .resizable(false)
                .vscroll(false)
                .sense(egui::Sense::click())
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::auto().at_least(style::ICON_COL_WIDTH))
                .column(Column::remainder().clip(true))
                .body(|body| {
                    body.rows(style::ROW_HEIGHT, rows.len(), |mut row| {
                        let entry = &rows[row.index()];
                        let is_selected = self.ui.selected_index == first_row + row.index();
                        row.set_selected(is_selected);

                        row.col(|ui| {
                            if let Some((glyph, color)) = entry.icon {
                                ui.label(egui::RichText::new(glyph).size(style::ICON_SIZE).color(color));
                            }
                        });
                        row.col(|ui| {
                            let text = egui::RichText::new(&entry.label)
                                .color(entry.color.unwrap_or(default_color));
                            style::row_label(ui, text);
                        });

                        if row.response().clicked() {
                            *next_message.borrow_mut() = Some(entry.message);
                        }
                    });
                });
        });
    }
}
