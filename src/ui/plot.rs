use eframe::egui::{self, Ui};
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoints};

use crate::color;
use crate::data::forecast::{self, ModelKind};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Forecast plot (central panel)
// ---------------------------------------------------------------------------

/// Dash length per model line, so overlapping curves stay tellable apart.
fn model_dash(model: ModelKind) -> f32 {
    match model {
        ModelKind::LinearRegression => 10.0,
        ModelKind::Arima => 5.0,
        ModelKind::Prophet => 14.0,
        ModelKind::ExponentialSmoothing => 8.0,
    }
}

/// Render the time-series chart in the central panel.
pub fn forecast_plot(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Drag & drop a CSV file here, or File → Open…");
            });
            return;
        }
    };

    if state.is_analyzing() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.add(egui::Spinner::new().size(32.0));
                ui.add_space(8.0);
                ui.heading("Running forecasting analysis…");
            });
        });
        return;
    }

    // Ephemeral: recomputed from the dataset on each render. The noise is
    // seeded per dataset, so the curves do not change between frames.
    let series = forecast::derive_series(dataset);
    let y_label = dataset.primary_numeric_column().unwrap_or("Value").to_string();

    Plot::new("forecast_plot")
        .legend(Legend::default())
        .x_axis_label("Index")
        .y_axis_label(y_label)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let actual: PlotPoints = series
                .iter()
                .map(|p| [p.index as f64, p.actual])
                .collect();
            plot_ui.line(
                Line::new(actual)
                    .name("Actual Data")
                    .color(color::ACTUAL)
                    .width(3.0),
            );

            for model in ModelKind::ALL {
                let points: PlotPoints = series
                    .iter()
                    .map(|p| [p.index as f64, p.forecast(model)])
                    .collect();
                plot_ui.line(
                    Line::new(points)
                        .name(model.label())
                        .color(color::model_color(model))
                        .width(2.0)
                        .style(LineStyle::Dashed {
                            length: model_dash(model),
                        }),
                );
            }
        });
}
