// Style constants and helpers for the gamenav window

mod theme;

pub use theme::Theme;

use crate::model::PlatformColor;
use eframe::egui;

// --- Window ---
pub const WINDOW_TITLE: &str = "Gaming";
pub const WINDOW_WIDTH_DEFAULT: f32 = 480.0;
pub const WINDOW_HEIGHT_DEFAULT: f32 = 640.0;

// --- Sizing ---
pub const ICON_SIZE: f32 = 16.0;
pub const ICON_COL_WIDTH: f32 = 30.0;
pub const ROW_HEIGHT: f32 = 28.0;
pub const SECTION_SPACING: f32 = 12.0;
pub const HEADER_SIZE: f32 = 30.0;
pub const BUTTON_SPACING: f32 = 20.0;
pub const BUTTON_MIN_WIDTH: f32 = 220.0;

// --- Modals ---
pub const MODAL_MIN_WIDTH: f32 = 260.0;
pub const MODAL_MAX_WIDTH: f32 = 420.0;
pub const MODAL_WIDTH_RATIO: f32 = 0.6;

// --- Timing ---
pub const MESSAGE_TIMEOUT_SECS: u64 = 4;

// --- Colours ---
pub const ACCENT: egui::Color32 = egui::Color32::BLACK;
pub const BREADCRUMB_SEPARATOR: &str = " › ";

pub fn platform_color(color: PlatformColor) -> egui::Color32 {
    match color {
        PlatformColor::Green => egui::Color32::from_rgb(52, 199, 89),
        PlatformColor::Indigo => egui::Color32::from_rgb(88, 86, 214),
        PlatformColor::Pink => egui::Color32::from_rgb(255, 45, 85),
        PlatformColor::Mint => egui::Color32::from_rgb(0, 199, 190),
        PlatformColor::Red => egui::Color32::from_rgb(255, 59, 48),
        PlatformColor::Orange => egui::Color32::from_rgb(255, 149, 0),
        PlatformColor::Yellow => egui::Color32::from_rgb(255, 204, 0),
        PlatformColor::Blue => egui::Color32::from_rgb(0, 122, 255),
        PlatformColor::Purple => egui::Color32::from_rgb(175, 82, 222),
        PlatformColor::Teal => egui::Color32::from_rgb(48, 176, 199),
    }
}

/// Resolve a symbolic icon id to a glyph egui's default fonts can draw.
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "xbox.logo" => "🎮",
        "playstation.logo" => "🕹",
        "pc" | "desktopcomputer" => "🖥",
        "iphone" | "mobile" => "📱",
        "laptopcomputer" => "💻",
        _ => "▪",
    }
}

/// Text colour with enough contrast on a platform-coloured background.
pub fn contrast_text(background: egui::Color32) -> egui::Color32 {
    let luma = 0.299 * background.r() as f32
        + 0.587 * background.g() as f32
        + 0.114 * background.b() as f32;
    if luma > 150.0 {
        egui::Color32::BLACK
    } else {
        egui::Color32::WHITE
    }
}

// --- Helper functions ---

pub fn modal_width(ctx: &egui::Context) -> f32 {
    let width = ctx.input(|i| {
        i.viewport()
            .inner_rect
            .map(|r| r.width())
            .unwrap_or(WINDOW_WIDTH_DEFAULT)
    });
    (width * MODAL_WIDTH_RATIO).clamp(MODAL_MIN_WIDTH, MODAL_MAX_WIDTH)
}

/// Truncating label that leaves clicks to the enclosing table row.
pub fn row_label(ui: &mut egui::Ui, text: impl Into<egui::WidgetText>) -> egui::Response {
    ui.add(egui::Label::new(text).truncate().selectable(false))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_glyph_fallback() {
        assert_eq!(icon_glyph("xbox.logo"), "🎮");
        assert_eq!(icon_glyph("iphone"), "📱");
        assert_eq!(icon_glyph("no.such.icon"), "▪");
    }

    #[test]
    fn test_contrast_text() {
        assert_eq!(contrast_text(egui::Color32::WHITE), egui::Color32::BLACK);
        assert_eq!(
            contrast_text(platform_color(PlatformColor::Indigo)),
            egui::Color32::WHITE
        );
        assert_eq!(
            contrast_text(platform_color(PlatformColor::Yellow)),
            egui::Color32::BLACK
        );
    }
}
