use std::time::Instant;

use eframe::egui;

use crate::state::{AnalysisPhase, AppState};
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TempoTrendApp {
    pub state: AppState,
}

impl Default for TempoTrendApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for TempoTrendApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Simulated analysis timer ----
        let now = Instant::now();
        if self.state.tick(now) {
            log::info!("Forecasting analysis complete");
        }
        if let AnalysisPhase::Running { deadline } = self.state.analysis {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }

        // ---- Drag-and-drop goes through the same intake as the picker ----
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if let Some(file) = dropped.into_iter().next() {
            if let Some(path) = file.path {
                panels::load_path(&mut self.state, &path);
            }
        }

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Right side panel: model comparison ----
        if self.state.metrics_visible() {
            egui::SidePanel::right("metrics_panel")
                .default_width(340.0)
                .resizable(true)
                .show(ctx, |ui| {
                    panels::metrics_panel(ui);
                });
        }

        // ---- Central panel: chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::forecast_plot(ui, &self.state);
        });
    }
}
