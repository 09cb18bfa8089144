use std::f64::consts::TAU;

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};

/// Minimal deterministic PRNG (xoshiro256**)
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

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos();
        mean + std_dev * z
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid start date");
    let days: u64 = 120;

    // Daily sales/visitors with a weekly cycle, a slow upward trend, and
    // seeded noise. The region column alternates between two labels and
    // never coerces to a number.
    let mut out = String::from("date,sales,visitors,region\n");
    for i in 0..days {
        let date = start + Days::new(i);
        let t = i as f64;

        let sales = 200.0 + t * 0.8 + (t * TAU / 7.0).sin() * 25.0 + rng.gauss(0.0, 6.0);
        let visitors = 1200.0 + t * 2.5 + (t * TAU / 7.0).cos() * 90.0 + rng.gauss(0.0, 20.0);
        let region = if i % 2 == 0 { "north" } else { "south" };

        out.push_str(&format!("{date},{sales:.2},{visitors:.0},{region}\n"));
    }

    let output_path = "sample_timeseries.csv";
    std::fs::write(output_path, &out).context("writing sample CSV")?;

    println!("Wrote {days} rows to {output_path}");
    Ok(())
}
