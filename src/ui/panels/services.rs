// Folio - ui/panels/services.rs
//
// "Specialized Services" section: one card per service.

use crate::app::state::AppState;
use crate::ui::panels::{card, section_heading};
use crate::ui::theme;
use egui::RichText;

/// Render the services section.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    if state.portfolio.services.is_empty() {
        return;
    }
    let pal = *theme::palette(state.theme);

    section_heading(ui, &pal, "Specialized Services");

    ui.columns(state.portfolio.services.len(), |columns| {
        for (column, service) in columns.iter_mut().zip(&state.portfolio.services) {
            card(&pal).show(column, |ui| {
                ui.set_min_height(150.0);
                if !service.icon.is_empty() {
                    ui.label(RichText::new(&service.icon).size(26.0));
                    ui.add_space(8.0);
                }
                ui.label(
                    RichText::new(&service.title)
                        .size(16.0)
                        .strong()
                        .color(pal.text_primary),
                );
                ui.add_space(6.0);
                ui.label(
                    RichText::new(&service.description)
                        .size(12.5)
                        .color(pal.text_muted),
                );
            });
        }
    });
}
