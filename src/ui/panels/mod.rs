// Folio - ui/panels/mod.rs

pub mod about;
pub mod boot;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod metrics;
pub mod navbar;
pub mod projects;
pub mod services;
pub mod skills;

use crate::ui::theme::{self, Palette, ThemeMode};

/// Card frame shared by the service, experience, and project panels.
pub(crate) fn card(pal: &Palette) -> egui::Frame {
    egui::Frame::default()
        .fill(pal.surface)
        .stroke(egui::Stroke::new(1.0, pal.border))
        .corner_radius(egui::CornerRadius::same(theme::CARD_RADIUS))
        .inner_margin(egui::Margin::same(20))
}

/// Centred section heading with the accent underline bar.
pub(crate) fn section_heading(ui: &mut egui::Ui, pal: &Palette, title: &str) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(title)
                .size(28.0)
                .strong()
                .color(pal.text_primary),
        );
        ui.add_space(8.0);
        let (rect, _) = ui.allocate_exact_size(egui::vec2(56.0, 4.0), egui::Sense::hover());
        ui.painter()
            .rect_filled(rect, egui::CornerRadius::same(2), theme::ACCENT);
    });
    ui.add_space(28.0);
}

/// Small round marker used in bullet lists.
pub(crate) fn bullet_dot(ui: &mut egui::Ui, colour: egui::Color32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
    ui.painter().circle_filled(rect.center(), 3.0, colour);
}

/// Accent colour adjusted for contrast against the current mode.
pub(crate) fn accent_for(mode: ThemeMode) -> egui::Color32 {
    if mode.is_dark() {
        theme::ACCENT_LIGHT
    } else {
        theme::ACCENT
    }
}
