// Folio - ui/panels/footer.rs
//
// Footer: brand, tagline, section links, copyright.

use crate::app::state::{AppState, Section};
use crate::ui::theme;
use chrono::Datelike;
use egui::RichText;

/// Render the footer.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let pal = *theme::palette(state.theme);

    ui.separator();
    ui.add_space(24.0);

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(
                RichText::new(&state.portfolio.identity.brand)
                    .size(18.0)
                    .strong()
                    .color(pal.text_primary),
            );
            if !state.portfolio.identity.tagline.is_empty() {
                ui.label(
                    RichText::new(&state.portfolio.identity.tagline)
                        .size(12.0)
                        .color(pal.text_muted),
                );
            }
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            for section in [Section::Projects, Section::Services, Section::Home] {
                let link = ui.add(
                    egui::Label::new(
                        RichText::new(section.label())
                            .size(12.0)
                            .strong()
                            .color(pal.text_muted),
                    )
                    .sense(egui::Sense::click()),
                );
                if link.clicked() {
                    state.pending_section = Some(section);
                }
                ui.add_space(12.0);
            }
        });
    });

    ui.add_space(16.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(format!(
                "\u{a9} {} {}. All engineering rights reserved.",
                chrono::Local::now().year(),
                state.portfolio.identity.name
            ))
            .size(10.5)
            .color(pal.text_muted),
        );
    });
    ui.add_space(24.0);
}
