// Folio - ui/panels/boot.rs
//
// The boot screen: branding, a terminal window revealing the fixed log
// sequence one line per tick, and a progress bar sized from the reveal
// ratio. Always rendered dark, whatever the page theme.

use crate::app::state::AppState;
use crate::ui::theme;
use egui::{Color32, RichText};

/// Render the loading view. No-op if the revealer is not mounted.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let Some(boot) = state.boot.as_ref() else {
        return;
    };
    let screen = &state.portfolio.boot;

    ui.vertical_centered(|ui| {
        ui.add_space((ui.available_height() * 0.18).max(24.0));
        ui.set_max_width(theme::BOOT_PANEL_WIDTH);

        // Branding
        if !screen.kicker.is_empty() {
            ui.label(
                RichText::new(screen.kicker.to_uppercase())
                    .size(12.0)
                    .strong()
                    .color(theme::ACCENT_SOFT),
            );
            ui.add_space(4.0);
        }
        ui.label(
            RichText::new(&screen.title)
                .size(22.0)
                .strong()
                .color(Color32::WHITE),
        );
        ui.add_space(28.0);

        // Terminal window
        egui::Frame::default()
            .fill(theme::TERMINAL_BG)
            .stroke(egui::Stroke::new(1.0, theme::TERMINAL_BORDER))
            .corner_radius(egui::CornerRadius::same(theme::CARD_RADIUS))
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.set_width(theme::BOOT_PANEL_WIDTH - 32.0);
                ui.set_min_height(130.0);
                ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                    window_dots(ui);
                    ui.add_space(10.0);

                    let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
                    for (line, status) in boot.visible_lines() {
                        log_line(ui, &timestamp, line, status);
                    }

                    if !boot.is_complete() {
                        cursor(ui);
                    }
                });
            });

        ui.add_space(20.0);

        // Progress bar driven by the reveal ratio: 0% to 100%.
        ui.add(
            egui::ProgressBar::new(boot.progress())
                .desired_width(theme::BOOT_PANEL_WIDTH)
                .desired_height(4.0)
                .fill(theme::ACCENT_SOFT),
        );
    });
}

/// The decorative red/yellow/green window dots.
fn window_dots(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 6.0;
        for colour in [theme::DOT_RED, theme::DOT_YELLOW, theme::DOT_GREEN] {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
            ui.painter().circle_filled(rect.center(), 5.0, colour);
        }
    });
}

fn log_line(ui: &mut egui::Ui, timestamp: &str, line: &str, status: crate::core::boot::LineStatus) {
    use crate::core::boot::LineStatus;
    let (prefix, colour) = match status {
        LineStatus::Done => ("\u{2713} ", theme::TERMINAL_DONE),
        LineStatus::InProgress => ("> ", theme::TERMINAL_ACTIVE),
    };
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;
        ui.label(
            RichText::new(format!("[{timestamp}]"))
                .monospace()
                .size(11.0)
                .color(theme::TERMINAL_TIMESTAMP),
        );
        ui.label(
            RichText::new(format!("{prefix}{line}"))
                .monospace()
                .size(11.0)
                .color(colour),
        );
    });
}

/// Blinking block cursor shown while lines are still being revealed.
fn cursor(ui: &mut egui::Ui) {
    let period = crate::util::constants::BOOT_CURSOR_BLINK_SECS;
    let on = (ui.input(|i| i.time) % period) < period / 2.0;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(8.0, 14.0), egui::Sense::hover());
    if on {
        ui.painter()
            .rect_filled(rect, egui::CornerRadius::ZERO, theme::ACCENT_SOFT);
    }
    // Keep repainting so the blink animates between reveal ticks.
    ui.ctx().request_repaint_after(std::time::Duration::from_millis(80));
}
