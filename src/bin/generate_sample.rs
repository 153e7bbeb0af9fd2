//! Generate a sample publications CSV for trying out the dashboard.
//!
//! ```text
//! cargo run --bin generate_sample [output.csv]
//! ```

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};

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

    /// Uniform float in [0, 1).
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Cumulative weights roughly matching a real review distribution.
const LABELS: [(&str, f64); 5] = [
    ("MUY BIEN", 0.20),
    ("BIEN", 0.55),
    ("REGULAR", 0.80),
    ("MALA", 0.92),
    ("MUY MALA", 1.00),
];

fn pick_label(rng: &mut SimpleRng) -> &'static str {
    let r = rng.unit();
    LABELS
        .iter()
        .find(|(_, cum)| r < *cum)
        .map(|(label, _)| *label)
        .unwrap_or("MUY MALA")
}

fn main() -> Result<()> {
    let out: PathBuf = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/publications.csv".to_string())
        .into();

    let mut rng = SimpleRng::new(42);
    let mut csv = String::from("link,calidad\n");
    for i in 0..60 {
        let label = pick_label(&mut rng);
        writeln!(csv, "https://example.com/publicacion/{i},{label}")?;
    }

    if let Some(dir) = out.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating {}", dir.display()))?;
    }
    std::fs::write(&out, &csv).with_context(|| format!("writing {}", out.display()))?;
    println!("wrote 60 sample records to {}", out.display());
    Ok(())
}
