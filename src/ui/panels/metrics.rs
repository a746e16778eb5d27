// Folio - ui/panels/metrics.rs
//
// The metrics strip: headline numbers in a bordered band.

use crate::app::state::AppState;
use crate::ui::theme;
use egui::RichText;

/// Render the metrics band.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    if state.portfolio.metrics.is_empty() {
        return;
    }
    let pal = *theme::palette(state.theme);

    ui.separator();
    ui.add_space(24.0);
    ui.columns(state.portfolio.metrics.len(), |columns| {
        for (column, metric) in columns.iter_mut().zip(&state.portfolio.metrics) {
            column.vertical_centered(|ui| {
                ui.label(
                    RichText::new(&metric.value)
                        .size(30.0)
                        .strong()
                        .color(pal.text_primary),
                );
                ui.label(
                    RichText::new(metric.label.to_uppercase())
                        .size(10.0)
                        .strong()
                        .color(pal.text_muted),
                );
            });
        }
    });
    ui.add_space(24.0);
    ui.separator();
}
