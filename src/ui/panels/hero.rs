// Folio - ui/panels/hero.rs
//
// Hero section: badge pill, the big name with its accent span, the summary
// paragraph, primary actions, and social links.

use crate::app::state::{AppState, Section};
use crate::ui::panels::accent_for;
use crate::ui::theme;
use egui::text::{LayoutJob, TextFormat};
use egui::{Color32, FontId, RichText};

/// Render the hero section.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let pal = *theme::palette(state.theme);
    let accent = accent_for(state.theme);
    let identity = state.portfolio.identity.clone();

    ui.vertical_centered(|ui| {
        ui.add_space(48.0);

        // Badge pill
        if !identity.badge.is_empty() {
            egui::Frame::default()
                .fill(pal.badge_bg)
                .corner_radius(egui::CornerRadius::same(12))
                .inner_margin(egui::Margin::symmetric(14, 6))
                .show(ui, |ui| {
                    ui.label(
                        RichText::new(identity.badge.to_uppercase())
                            .size(11.0)
                            .strong()
                            .color(pal.badge_fg),
                    );
                });
            ui.add_space(20.0);
        }

        // Name, with the accent span tinted.
        ui.label(name_job(&identity.name, &identity.accent, pal.text_primary, accent));
        ui.add_space(20.0);

        // Summary
        ui.set_max_width(theme::CONTENT_MAX_WIDTH * 0.85);
        ui.label(
            RichText::new(&identity.summary)
                .size(15.0)
                .color(pal.text_muted),
        );
        ui.add_space(32.0);

        // Primary actions
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 12.0;
            let examine = egui::Button::new(
                RichText::new("Examine Work").size(14.0).color(Color32::WHITE),
            )
            .fill(theme::ACCENT)
            .corner_radius(egui::CornerRadius::same(10))
            .min_size(egui::vec2(150.0, 40.0));
            if ui.add(examine).clicked() {
                state.pending_section = Some(Section::Projects);
            }

            let download = egui::Button::new(
                RichText::new("\u{2913} Download CV").size(14.0).color(pal.text_primary),
            )
            .fill(pal.surface)
            .stroke(egui::Stroke::new(1.0, pal.border))
            .corner_radius(egui::CornerRadius::same(10))
            .min_size(egui::vec2(150.0, 40.0));
            if ui.add(download).clicked() {
                state.request_resume_save = true;
            }
        });
        ui.add_space(28.0);

        // Social links
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 24.0;
            for link in &state.portfolio.links {
                ui.hyperlink_to(
                    RichText::new(&link.label).size(13.0).strong(),
                    &link.url,
                );
            }
        });
        if !identity.resume_url.is_empty() {
            ui.add_space(10.0);
            ui.hyperlink_to(
                RichText::new(format!("\u{2913} {}", identity.resume_file_name)).size(12.0),
                &identity.resume_url,
            );
        }
        ui.add_space(24.0);
    });
}

/// Lay out the full name on one line, tinting the accent substring.
fn name_job(name: &str, accent: &str, base: Color32, tint: Color32) -> LayoutJob {
    let font = FontId::proportional(46.0);
    let mut job = LayoutJob::default();
    let fmt = |colour: Color32| TextFormat {
        font_id: font.clone(),
        color: colour,
        ..Default::default()
    };

    match (!accent.is_empty())
        .then(|| name.find(accent))
        .flatten()
    {
        Some(start) => {
            job.append(&name[..start], 0.0, fmt(base));
            job.append(accent, 0.0, fmt(tint));
            job.append(&name[start + accent.len()..], 0.0, fmt(base));
        }
        None => job.append(name, 0.0, fmt(base)),
    }
    job.append(".", 0.0, fmt(tint));
    job
}
