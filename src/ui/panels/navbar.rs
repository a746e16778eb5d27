// Folio - ui/panels/navbar.rs
//
// Fixed top bar: brand mark, section anchors, theme toggle, resume button.

use crate::app::state::{AppState, Section};
use crate::ui::theme;
use egui::RichText;

/// Render the navbar (top panel).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let pal = *theme::palette(state.theme);

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.add_space(12.0);

        // Brand mark scrolls back to the top, like clicking the site logo.
        let brand = ui.add(
            egui::Label::new(
                RichText::new(&state.portfolio.identity.brand)
                    .size(18.0)
                    .strong()
                    .color(pal.text_primary),
            )
            .sense(egui::Sense::click()),
        );
        if brand.clicked() {
            state.scroll_to_top = true;
        }

        ui.add_space(24.0);

        // Section anchors
        for section in Section::NAV {
            let link = ui.add(
                egui::Label::new(
                    RichText::new(section.label())
                        .size(13.0)
                        .strong()
                        .color(pal.text_muted),
                )
                .sense(egui::Sense::click()),
            );
            if link.clicked() {
                state.pending_section = Some(section);
            }
            if link.hovered() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            }
            ui.add_space(10.0);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(12.0);

            if ui
                .button(RichText::new("Resume").size(13.0).strong())
                .on_hover_text(format!(
                    "Save a copy of {}",
                    state.portfolio.identity.resume_file_name
                ))
                .clicked()
            {
                state.request_resume_save = true;
            }

            // Sun in dark mode, moon in light mode -- the mode a click
            // switches to.
            let icon = if state.theme.is_dark() {
                "\u{2600}"
            } else {
                "\u{1f319}"
            };
            if ui
                .button(RichText::new(icon).size(14.0))
                .on_hover_text("Toggle light/dark mode")
                .clicked()
            {
                state.toggle_theme();
            }

            if ui
                .button(RichText::new("\u{24d8}").size(14.0))
                .on_hover_text("About")
                .clicked()
            {
                state.show_about = true;
            }
        });
    });
    ui.add_space(8.0);
}
