// Folio - ui/panels/skills.rs
//
// "Advanced System Stack" section: always rendered as a dark card, in
// both theme modes, matching the page's inverted skills block.

use crate::app::state::AppState;
use crate::ui::panels::bullet_dot;
use crate::ui::theme;
use egui::{Color32, RichText};

const BLOCK_BG: Color32 = Color32::from_rgb(26, 28, 30); // #1A1C1E
const BLOCK_TEXT: Color32 = Color32::from_rgb(156, 163, 175); // Gray 400

/// Render the skills section.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    if state.portfolio.skills.is_empty() {
        return;
    }

    egui::Frame::default()
        .fill(BLOCK_BG)
        .corner_radius(egui::CornerRadius::same(theme::CARD_RADIUS))
        .inner_margin(egui::Margin::same(28))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("Advanced System Stack")
                        .size(24.0)
                        .strong()
                        .color(Color32::WHITE),
                );
            });
            ui.add_space(24.0);

            ui.columns(state.portfolio.skills.len(), |columns| {
                for (column, group) in columns.iter_mut().zip(&state.portfolio.skills) {
                    column.label(
                        RichText::new(group.title.to_uppercase())
                            .size(11.0)
                            .strong()
                            .color(theme::ACCENT_SOFT),
                    );
                    column.add_space(10.0);
                    for item in &group.items {
                        column.horizontal(|ui| {
                            bullet_dot(ui, theme::ACCENT_SOFT);
                            ui.label(RichText::new(item).size(12.5).color(BLOCK_TEXT));
                        });
                        column.add_space(4.0);
                    }
                }
            });
        });
}
