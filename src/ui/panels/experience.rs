// Folio - ui/panels/experience.rs
//
// "Professional Journey" section: one timeline card per role.

use crate::app::state::AppState;
use crate::ui::panels::{accent_for, bullet_dot, card, section_heading};
use crate::ui::theme;
use egui::RichText;

/// Render the experience section.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    if state.portfolio.experience.is_empty() {
        return;
    }
    let pal = *theme::palette(state.theme);
    let accent = accent_for(state.theme);

    section_heading(ui, &pal, "Professional Journey");

    for role in &state.portfolio.experience {
        card(&pal).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(&role.title)
                            .size(18.0)
                            .strong()
                            .color(pal.text_primary),
                    );
                    ui.label(
                        RichText::new(role.company.to_uppercase())
                            .size(12.0)
                            .strong()
                            .color(accent),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    egui::Frame::default()
                        .fill(pal.badge_bg)
                        .corner_radius(egui::CornerRadius::same(10))
                        .inner_margin(egui::Margin::symmetric(10, 4))
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new(&role.period)
                                    .size(11.0)
                                    .strong()
                                    .color(pal.badge_fg),
                            );
                        });
                });
            });
            ui.add_space(12.0);

            for highlight in &role.highlights {
                ui.horizontal(|ui| {
                    bullet_dot(ui, theme::ACCENT_SOFT);
                    ui.label(
                        RichText::new(highlight)
                            .size(13.0)
                            .color(pal.text_muted),
                    );
                });
                ui.add_space(4.0);
            }
        });
        ui.add_space(theme::CARD_SPACING);
    }
}
