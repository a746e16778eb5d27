// Folio - gui.rs
//
// Top-level eframe::App implementation.
// Owns the loading/ready phase transition, schedules repaints for the two
// timers (one-shot transition + repeating reveal tick), and wires together
// all UI panels.

use crate::app::state::{AppState, Phase, Section};
use crate::ui;
use crate::ui::theme;
use crate::util::constants;
use crate::util::error::FolioError;
use std::time::Instant;

/// Resume document embedded in the binary so "save a copy" works offline.
static RESUME_DOC: &[u8] = include_bytes!("../assets/resume.md");

/// The Folio application.
pub struct FolioApp {
    pub state: AppState,
}

impl FolioApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Write the embedded resume to a user-chosen destination.
    fn save_resume(&mut self) {
        let file_name = self.state.portfolio.identity.resume_file_name.clone();
        let Some(dest) = rfd::FileDialog::new().set_file_name(&file_name).save_file() else {
            return; // dialog cancelled
        };
        match std::fs::write(&dest, RESUME_DOC) {
            Ok(()) => {
                tracing::info!(path = %dest.display(), "Resume saved");
                self.state.status_message = format!("Saved resume to '{}'.", dest.display());
            }
            Err(source) => {
                let err = FolioError::Io {
                    path: dest,
                    operation: "write",
                    source,
                };
                tracing::warn!(error = %err, "Resume save failed");
                self.state.status_message = err.to_string();
            }
        }
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        if self.state.phase == Phase::Loading {
            // One-shot loading→loaded transition. Independent of the
            // revealer: the boot animation may hit 100% before or after.
            if now >= self.state.loading_deadline() {
                self.state.finish_loading();
            } else {
                if let Some(boot) = self.state.boot.as_mut() {
                    boot.tick(now);
                }

                // Wake for whichever deadline is nearer: the next reveal
                // tick (None once the terminal line is reached — the
                // revealer cancels itself) or the phase transition.
                let mut next = self.state.loading_deadline();
                if let Some(tick) = self.state.boot.as_ref().and_then(|b| b.next_deadline()) {
                    next = next.min(tick);
                }
                ctx.request_repaint_after(next.saturating_duration_since(now));

                theme::apply(
                    ctx,
                    theme::ThemeMode::Dark,
                    theme::BOOT_BG,
                    self.state.font_size,
                );
                egui::CentralPanel::default()
                    .frame(egui::Frame::default().fill(theme::BOOT_BG))
                    .show(ctx, |ui| ui::panels::boot::render(ui, &self.state));
                return;
            }
        }

        // ---- Portfolio page ----
        let background = theme::scroll_background(self.state.theme, self.state.scroll_progress);
        theme::apply(ctx, self.state.theme, background, self.state.font_size);

        // request_resume_save: a panel asked for the resume to be written.
        if self.state.request_resume_save {
            self.state.request_resume_save = false;
            self.save_resume();
        }

        // Navbar
        egui::TopBottomPanel::top("navbar").show(ctx, |ui| {
            ui::panels::navbar::render(ui, &mut self.state);
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "{} v{}",
                            constants::APP_NAME,
                            constants::APP_VERSION
                        ))
                        .weak(),
                    );
                    if !self.state.warnings.is_empty() {
                        ui.label(
                            egui::RichText::new(format!(
                                "\u{26a0} {} warning(s)",
                                self.state.warnings.len()
                            ))
                            .weak(),
                        )
                        .on_hover_text(self.state.warnings.join("\n"));
                    }
                    if self.state.debug_mode {
                        ui.label(
                            egui::RichText::new(format!(
                                "offset {:.0} px \u{b7} progress {:.2}",
                                self.state.scroll_offset, self.state.scroll_progress
                            ))
                            .monospace()
                            .weak(),
                        );
                    }
                });
            });
        });

        // Page body: one vertical scroll area holding every section.
        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(background))
            .show(ctx, |ui| {
                let mut scroll = egui::ScrollArea::vertical()
                    .id_salt("portfolio")
                    .auto_shrink([false; 2]);
                if self.state.scroll_to_top {
                    self.state.scroll_to_top = false;
                    scroll = scroll.vertical_scroll_offset(0.0);
                }

                let pending = self.state.pending_section.take();
                let output = scroll.show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(theme::CONTENT_MAX_WIDTH);

                        let rect = ui
                            .scope(|ui| ui::panels::hero::render(ui, &mut self.state))
                            .response
                            .rect;
                        if pending == Some(Section::Home) {
                            ui.scroll_to_rect(rect, Some(egui::Align::Min));
                        }

                        ui::panels::metrics::render(ui, &self.state);
                        ui.add_space(theme::SECTION_SPACING);

                        let rect = ui
                            .scope(|ui| ui::panels::services::render(ui, &self.state))
                            .response
                            .rect;
                        if pending == Some(Section::Services) {
                            ui.scroll_to_rect(rect, Some(egui::Align::Min));
                        }
                        ui.add_space(theme::SECTION_SPACING);

                        let rect = ui
                            .scope(|ui| ui::panels::experience::render(ui, &self.state))
                            .response
                            .rect;
                        if pending == Some(Section::Experience) {
                            ui.scroll_to_rect(rect, Some(egui::Align::Min));
                        }
                        ui.add_space(theme::SECTION_SPACING);

                        let rect = ui
                            .scope(|ui| ui::panels::projects::render(ui, &self.state))
                            .response
                            .rect;
                        if pending == Some(Section::Projects) {
                            ui.scroll_to_rect(rect, Some(egui::Align::Min));
                        }
                        ui.add_space(theme::SECTION_SPACING);

                        let rect = ui
                            .scope(|ui| ui::panels::skills::render(ui, &self.state))
                            .response
                            .rect;
                        if pending == Some(Section::Skills) {
                            ui.scroll_to_rect(rect, Some(egui::Align::Min));
                        }
                        ui.add_space(theme::SECTION_SPACING);

                        ui::panels::footer::render(ui, &mut self.state);
                    });
                });

                // Scroll tracking: offset feeds the scroll-to-top rule and
                // the 0..1 progress feeds the background sweep.
                self.state.scroll_offset = output.state.offset.y;
                let scrollable = output.content_size.y - output.inner_rect.height();
                self.state.scroll_progress = if scrollable > 0.0 {
                    (output.state.offset.y / scrollable).clamp(0.0, 1.0)
                } else {
                    0.0
                };
            });

        // Floating scroll-to-top button. Visibility is a pure function of
        // the scroll offset — no hysteresis.
        if self.state.show_scroll_top() {
            egui::Area::new(egui::Id::new("scroll_top"))
                .anchor(
                    egui::Align2::RIGHT_BOTTOM,
                    egui::vec2(-theme::SCROLL_TOP_MARGIN, -theme::SCROLL_TOP_MARGIN - 24.0),
                )
                .show(ctx, |ui| {
                    let button = egui::Button::new(
                        egui::RichText::new("\u{2191}")
                            .size(18.0)
                            .color(egui::Color32::WHITE),
                    )
                    .fill(theme::ACCENT)
                    .corner_radius(egui::CornerRadius::same(20))
                    .min_size(egui::vec2(40.0, 40.0));
                    if ui.add(button).clicked() {
                        self.state.scroll_to_top = true;
                        ctx.request_repaint();
                    }
                });
        }

        // About dialog (modal-ish)
        ui::panels::about::render(ctx, &mut self.state);
    }
}
