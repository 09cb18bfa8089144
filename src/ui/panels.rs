use std::path::Path;
use std::time::Instant;

use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Bar, BarChart, Plot};

use crate::color;
use crate::data::loader;
use crate::data::metrics::{self, Metric};
use crate::state::{AppState, NoticeKind};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!("{} — {} data points", ds.file_name, ds.len()));
            ui.separator();

            let analyzing = state.is_analyzing();
            let label = if analyzing {
                "Analyzing…"
            } else {
                "Run Forecasting Analysis"
            };
            if ui.add_enabled(!analyzing, egui::Button::new(label)).clicked() {
                state.start_analysis(Instant::now());
                log::info!("Forecasting analysis started");
            }
        }

        if let Some(notice) = &state.notice {
            ui.separator();
            let notice_color = match notice.kind {
                NoticeKind::Info => color::NOTICE_INFO,
                NoticeKind::Error => color::NOTICE_ERROR,
            };
            ui.label(RichText::new(&notice.text).color(notice_color));
        }
    });
}

// ---------------------------------------------------------------------------
// Metrics panel (right side)
// ---------------------------------------------------------------------------

/// Render the model comparison panel: metrics table, winner banner, and an
/// MAE bar chart. All figures come from the static performance table.
pub fn metrics_panel(ui: &mut Ui) {
    ui.heading("Model Performance");
    ui.separator();

    let table = metrics::performance_table();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .column(Column::auto().at_least(120.0))
                .columns(Column::remainder(), Metric::ALL.len())
                .header(20.0, |mut header| {
                    header.col(|ui| {
                        ui.strong("Model");
                    });
                    for metric in Metric::ALL {
                        header.col(|ui| {
                            ui.strong(metric.label());
                        });
                    }
                })
                .body(|mut body| {
                    for entry in &table {
                        body.row(18.0, |mut row| {
                            row.col(|ui| {
                                ui.colored_label(
                                    color::model_color(entry.model),
                                    entry.model.label(),
                                );
                            });
                            for metric in Metric::ALL {
                                let value = entry.value(metric);
                                row.col(|ui| {
                                    if metrics::is_best(&table, metric, value) {
                                        ui.label(
                                            RichText::new(value.to_string())
                                                .color(color::NOTICE_INFO)
                                                .strong(),
                                        );
                                    } else {
                                        ui.label(value.to_string());
                                    }
                                });
                            }
                        });
                    }
                });

            ui.add_space(12.0);

            // Table is MAE-ascending, so the winner is the first entry.
            let best = &table[0];
            ui.strong("Best Performing Model");
            ui.label(format!("{} achieved the lowest error rates", best.model.label()));
            ui.label(
                RichText::new(format!(
                    "MAE: {} | RMSE: {} | R²: {}",
                    best.mae, best.rmse, best.r2
                ))
                .weak(),
            );

            ui.add_space(12.0);
            ui.strong("MAE by model");

            let bars: Vec<Bar> = table
                .iter()
                .enumerate()
                .map(|(i, entry)| {
                    Bar::new(i as f64, entry.mae)
                        .name(entry.model.label())
                        .fill(color::model_color(entry.model))
                })
                .collect();

            Plot::new("mae_bars")
                .height(160.0)
                .allow_boxed_zoom(false)
                .allow_drag(false)
                .allow_scroll(false)
                .allow_zoom(false)
                .show_x(false)
                .show(ui, |plot_ui| {
                    plot_ui.bar_chart(BarChart::new(bars));
                });
        });
}

// ---------------------------------------------------------------------------
// File intake
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open time series data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        load_path(state, &path);
    }
}

/// Shared intake path for the picker and drag-and-drop. Failures only set
/// the status notice; a previously loaded dataset stays in place.
pub fn load_path(state: &mut AppState, path: &Path) {
    match loader::load_file(path) {
        Ok(dataset) => {
            log::info!(
                "Loaded {} rows from {} with columns {:?}",
                dataset.len(),
                path.display(),
                dataset.columns
            );
            state.set_dataset(dataset);
        }
        Err(e) => {
            log::error!("Failed to load {}: {e}", path.display());
            state.report_load_error(&e);
        }
    }
}
