// Folio - ui/panels/projects.rs
//
// "Production Exhibits" section: project cards with feature lists and
// tech tags.

use crate::app::state::AppState;
use crate::ui::panels::{accent_for, bullet_dot, card, section_heading};
use crate::ui::theme;
use egui::RichText;

/// Render the projects section.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    if state.portfolio.projects.is_empty() {
        return;
    }
    let pal = *theme::palette(state.theme);
    let accent = accent_for(state.theme);

    section_heading(ui, &pal, "Production Exhibits");
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("High-availability systems built for performance, security, and industrial reliability.")
                .size(13.0)
                .color(pal.text_muted),
        );
    });
    ui.add_space(24.0);

    let columns = state.portfolio.projects.len().clamp(1, 2);
    let rows = state.portfolio.projects.chunks(columns);
    for row in rows {
        ui.columns(columns, |cols| {
            for (column, project) in cols.iter_mut().zip(row) {
                card(&pal).show(column, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(project.category.to_uppercase())
                                .size(10.5)
                                .strong()
                                .color(accent),
                        );
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Min),
                            |ui| {
                                if !project.era.is_empty() {
                                    ui.label(
                                        RichText::new(&project.era)
                                            .size(10.0)
                                            .italics()
                                            .color(pal.text_muted),
                                    );
                                }
                            },
                        );
                    });
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(&project.title)
                            .size(18.0)
                            .strong()
                            .color(pal.text_primary),
                    );
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(&project.description)
                            .size(12.5)
                            .color(pal.text_muted),
                    );
                    ui.add_space(12.0);

                    for feature in &project.features {
                        ui.horizontal(|ui| {
                            bullet_dot(ui, theme::FEATURE_DOT);
                            ui.label(
                                RichText::new(feature).size(12.0).color(pal.text_muted),
                            );
                        });
                    }
                    ui.add_space(12.0);

                    // Tech tags
                    ui.horizontal_wrapped(|ui| {
                        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);
                        for tech in &project.tech {
                            egui::Frame::default()
                                .fill(pal.badge_bg)
                                .corner_radius(egui::CornerRadius::same(6))
                                .inner_margin(egui::Margin::symmetric(8, 3))
                                .show(ui, |ui| {
                                    ui.label(
                                        RichText::new(tech.to_uppercase())
                                            .size(9.5)
                                            .strong()
                                            .color(pal.badge_fg),
                                    );
                                });
                        }
                    });
                });
            }
        });
        ui.add_space(theme::CARD_SPACING);
    }
}
