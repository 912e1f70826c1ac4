use anyhow::{ensure, Context};
use radarcore::Target;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Configuration for generating a synthetic batch of targets around the sensor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetFieldConfig {
    pub count: usize,
    /// Half-width of the square field, centred on the sensor.
    pub extent_km: f64,
    pub rcs_max: f64,
    pub seed: u64,
    pub id_prefix: String,
}

impl Default for TargetFieldConfig {
    fn default() -> Self {
        Self {
            count: 32,
            extent_km: 50.0,
            rcs_max: 20.0,
            seed: 0,
            id_prefix: "SIM".into(),
        }
    }
}

impl TargetFieldConfig {
    fn id_width(&self) -> usize {
        self.count.max(1).to_string().len()
    }
}

/// Builds `count` targets uniformly spread over the field. Same seed, same batch.
pub fn build_target_field(config: &TargetFieldConfig) -> anyhow::Result<Vec<Target>> {
    ensure!(
        config.extent_km > 0.0 && config.extent_km.is_finite(),
        "field extent must be a positive finite distance, got {}",
        config.extent_km
    );
    ensure!(
        config.rcs_max >= 0.0 && config.rcs_max.is_finite(),
        "field rcs ceiling must be finite and >= 0, got {}",
        config.rcs_max
    );

    let mut rng = StdRng::seed_from_u64(config.seed);
    let width = config.id_width();
    let extent = config.extent_km;

    (0..config.count)
        .map(|index| {
            let id = format!("{}-{:0width$}", config.id_prefix, index, width = width);
            // Scaled from the unit interval; `-extent..=extent` overflows near f64::MAX.
            let x = extent * rng.gen_range(-1.0_f64..=1.0);
            let y = extent * rng.gen_range(-1.0_f64..=1.0);
            let rcs = rng.gen_range(0.0..=config.rcs_max);
            Target::new(id, x, y, rcs).context("generating synthetic target")
        })
        .collect()
}
