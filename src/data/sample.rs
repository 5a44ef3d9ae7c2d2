//! Synthetic demo data

use crate::types::{Dataset, Row};
use rand::Rng;

/// Month labels used as the sample category column
pub const SAMPLE_MONTHS: [&str; 8] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug"];

/// Generate the demo dataset from the thread-local RNG
pub fn generate_sample_data() -> Dataset {
    generate_sample_data_with(&mut rand::thread_rng())
}

/// Generate the demo dataset from a caller-supplied RNG.
///
/// Each row carries `month`, then `sales` in [500, 1500), `revenue` in
/// [25000, 75000), `customers` in [100, 300), `expenses` in [15000, 45000),
/// all whole numbers, then a 1-based `id`.
pub fn generate_sample_data_with<R: Rng + ?Sized>(rng: &mut R) -> Dataset {
    SAMPLE_MONTHS
        .iter()
        .enumerate()
        .map(|(index, month)| {
            Row::new()
                .with("month", *month)
                .with("sales", rng.gen_range(500..1500) as f64)
                .with("revenue", rng.gen_range(25_000..75_000) as f64)
                .with("customers", rng.gen_range(100..300) as f64)
                .with("expenses", rng.gen_range(15_000..45_000) as f64)
                .with("id", (index + 1) as f64)
        })
        .collect::<Vec<_>>()
        .into()
}
