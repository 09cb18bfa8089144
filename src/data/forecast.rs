use super::model::Dataset;

// ---------------------------------------------------------------------------
// Forecast models
// ---------------------------------------------------------------------------

/// The four demonstration models. Each one is a fixed sinusoid offset plus
/// bounded noise on top of the actual series; none of them estimates
/// anything from the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    LinearRegression,
    Arima,
    Prophet,
    ExponentialSmoothing,
}

impl ModelKind {
    pub const ALL: [ModelKind; 4] = [
        ModelKind::LinearRegression,
        ModelKind::Arima,
        ModelKind::Prophet,
        ModelKind::ExponentialSmoothing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ModelKind::LinearRegression => "Linear Regression",
            ModelKind::Arima => "ARIMA",
            ModelKind::Prophet => "Prophet",
            ModelKind::ExponentialSmoothing => "Exponential Smoothing",
        }
    }
}

#[derive(Clone, Copy)]
enum Wave {
    Sin,
    Cos,
}

/// Shape of one model's synthetic deviation from the actual series.
#[derive(Clone, Copy)]
struct Curve {
    wave: Wave,
    frequency: f64,
    amplitude: f64,
    /// Upper bound of the uniform noise term.
    noise: f64,
}

impl Curve {
    fn offset(&self, position: f64) -> f64 {
        let phase = position * self.frequency;
        let wave = match self.wave {
            Wave::Sin => phase.sin(),
            Wave::Cos => phase.cos(),
        };
        self.amplitude * wave
    }
}

fn curve(model: ModelKind) -> Curve {
    match model {
        ModelKind::LinearRegression => Curve { wave: Wave::Sin, frequency: 0.1, amplitude: 5.0, noise: 3.0 },
        ModelKind::Arima => Curve { wave: Wave::Cos, frequency: 0.15, amplitude: 4.0, noise: 2.0 },
        ModelKind::Prophet => Curve { wave: Wave::Sin, frequency: 0.2, amplitude: 3.0, noise: 2.5 },
        ModelKind::ExponentialSmoothing => Curve { wave: Wave::Sin, frequency: 0.08, amplitude: 6.0, noise: 4.0 },
    }
}

// ---------------------------------------------------------------------------
// Series derivation
// ---------------------------------------------------------------------------

/// One chart point per data row: the baseline plus one value per model.
/// Ephemeral; recomputed from the dataset, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub index: usize,
    pub actual: f64,
    forecasts: [f64; ModelKind::ALL.len()],
}

impl SeriesPoint {
    pub fn forecast(&self, model: ModelKind) -> f64 {
        self.forecasts[model as usize]
    }
}

/// Derive the chart series for a dataset.
///
/// The baseline is the validated primary numeric column; rows without a
/// primary value fall back to a synthesized value in `[0, 100)`. All noise
/// comes from a generator seeded by the dataset, so the same dataset always
/// produces the same curves.
pub fn derive_series(dataset: &Dataset) -> Vec<SeriesPoint> {
    let primary = dataset.primary_numeric_column();
    let mut rng = SimpleRng::new(dataset_seed(dataset));

    dataset
        .rows
        .iter()
        .enumerate()
        .map(|(position, row)| {
            let actual = primary
                .and_then(|col| row.number(col))
                .unwrap_or_else(|| rng.next_f64() * 100.0);

            let forecasts = ModelKind::ALL.map(|model| {
                let c = curve(model);
                actual + c.offset(position as f64) + rng.next_f64() * c.noise
            });

            SeriesPoint {
                index: row.index,
                actual,
                forecasts,
            }
        })
        .collect()
}

/// FNV-1a over the file name, mixed with the row count. Stable per dataset,
/// different across uploads of different files.
fn dataset_seed(dataset: &Dataset) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in dataset.file_name.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x100_0000_01b3);
    }
    hash ^ dataset.rows.len() as u64
}

// ---------------------------------------------------------------------------
// Deterministic noise source
// ---------------------------------------------------------------------------

/// Minimal deterministic PRNG (xoshiro256**).
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_csv;

    #[test]
    fn one_point_per_row_with_matching_indices() {
        let ds = parse_csv("value\n10\n20\n30\n", "t.csv").unwrap();
        let series = derive_series(&ds);
        assert_eq!(series.len(), 3);
        let indices: Vec<usize> = series.iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn actual_follows_the_primary_column() {
        let ds = parse_csv("label,value\na,10\nb,20\n", "t.csv").unwrap();
        let series = derive_series(&ds);
        assert_eq!(series[0].actual, 10.0);
        assert_eq!(series[1].actual, 20.0);
    }

    #[test]
    fn derivation_is_deterministic_per_dataset() {
        let ds = parse_csv("value\n1\n2\n3\n4\n5\n", "t.csv").unwrap();
        assert_eq!(derive_series(&ds), derive_series(&ds));
    }

    #[test]
    fn forecasts_stay_within_offset_plus_noise_of_actual() {
        let ds = parse_csv("value\n50\n60\n70\n80\n", "t.csv").unwrap();
        for point in derive_series(&ds) {
            for model in ModelKind::ALL {
                let c = curve(model);
                let deviation = (point.forecast(model) - point.actual).abs();
                assert!(
                    deviation <= c.amplitude + c.noise,
                    "{} deviates by {deviation}",
                    model.label()
                );
            }
        }
    }

    #[test]
    fn rows_without_numeric_data_get_a_synthesized_baseline() {
        let ds = parse_csv("label\nfoo\nbar\n", "t.csv").unwrap();
        let series = derive_series(&ds);
        assert_eq!(series.len(), 2);
        for point in &series {
            assert!((0.0..100.0).contains(&point.actual));
        }
    }

    #[test]
    fn seed_distinguishes_file_names() {
        let a = parse_csv("value\n1\n2\n", "a.csv").unwrap();
        let b = parse_csv("value\n1\n2\n", "b.csv").unwrap();
        assert_ne!(dataset_seed(&a), dataset_seed(&b));
    }
}
