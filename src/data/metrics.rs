use super::forecast::ModelKind;

// ---------------------------------------------------------------------------
// Static model performance table
// ---------------------------------------------------------------------------

/// Fixed accuracy figures for one model. Demonstration data: these constants
/// are not computed from the uploaded dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelMetrics {
    pub model: ModelKind,
    pub mae: f64,
    pub rmse: f64,
    pub mape: f64,
    pub r2: f64,
}

/// The four metric columns of the comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Mae,
    Rmse,
    Mape,
    R2,
}

impl Metric {
    pub const ALL: [Metric; 4] = [Metric::Mae, Metric::Rmse, Metric::Mape, Metric::R2];

    pub fn label(self) -> &'static str {
        match self {
            Metric::Mae => "MAE",
            Metric::Rmse => "RMSE",
            Metric::Mape => "MAPE %",
            Metric::R2 => "R²",
        }
    }

    /// Every metric is an error measure except R², where higher wins.
    fn lower_is_better(self) -> bool {
        !matches!(self, Metric::R2)
    }
}

impl ModelMetrics {
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Mae => self.mae,
            Metric::Rmse => self.rmse,
            Metric::Mape => self.mape,
            Metric::R2 => self.r2,
        }
    }
}

const TABLE: [ModelMetrics; 4] = [
    ModelMetrics { model: ModelKind::LinearRegression, mae: 12.45, rmse: 18.23, mape: 8.7, r2: 0.85 },
    ModelMetrics { model: ModelKind::Arima, mae: 10.32, rmse: 15.67, mape: 7.2, r2: 0.89 },
    ModelMetrics { model: ModelKind::Prophet, mae: 9.87, rmse: 14.45, mape: 6.8, r2: 0.92 },
    ModelMetrics { model: ModelKind::ExponentialSmoothing, mae: 11.76, rmse: 16.89, mape: 8.1, r2: 0.87 },
];

/// The comparison table, sorted ascending by MAE so the best model comes
/// first. The first entry feeds the winner banner.
pub fn performance_table() -> Vec<ModelMetrics> {
    let mut table = TABLE.to_vec();
    table.sort_by(|a, b| a.mae.total_cmp(&b.mae));
    table
}

/// The winning value for one metric column across the table.
pub fn best_value(table: &[ModelMetrics], metric: Metric) -> f64 {
    let values = table.iter().map(|m| m.value(metric));
    if metric.lower_is_better() {
        values.fold(f64::INFINITY, f64::min)
    } else {
        values.fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Whether a cell should carry the "Best" highlight. Ties share the flag.
pub fn is_best(table: &[ModelMetrics], metric: Metric, value: f64) -> bool {
    value == best_value(table, metric)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_ascending_by_mae() {
        let table = performance_table();
        assert_eq!(table.len(), 4);
        for pair in table.windows(2) {
            assert!(pair[0].mae <= pair[1].mae);
        }
        assert_eq!(table[0].model, ModelKind::Prophet);
        assert_eq!(table[3].model, ModelKind::LinearRegression);
    }

    #[test]
    fn prophet_wins_every_column() {
        let table = performance_table();
        let prophet = table
            .iter()
            .find(|m| m.model == ModelKind::Prophet)
            .unwrap();
        for metric in Metric::ALL {
            assert!(is_best(&table, metric, prophet.value(metric)));
        }
    }

    #[test]
    fn r2_is_ranked_descending() {
        let table = performance_table();
        assert_eq!(best_value(&table, Metric::R2), 0.92);
        assert!(!is_best(&table, Metric::R2, 0.85));
    }

    #[test]
    fn error_metrics_are_ranked_ascending() {
        let table = performance_table();
        assert_eq!(best_value(&table, Metric::Mae), 9.87);
        assert_eq!(best_value(&table, Metric::Rmse), 14.45);
        assert_eq!(best_value(&table, Metric::Mape), 6.8);
        assert!(!is_best(&table, Metric::Mae, 12.45));
    }
}
