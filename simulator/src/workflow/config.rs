use anyhow::Context;
use radarcore::{Radar, RadarConfig, Target};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::generator::TargetFieldConfig;

/// One radar and the batch of targets it should scan.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub radar: RadarConfig,
    #[serde(default)]
    pub targets: Vec<Target>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<TargetFieldConfig>,
}

impl ScenarioConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading scenario config {}", path_ref.display()))?;
        let config: ScenarioConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing scenario config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_yaml_str(contents: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(contents).context("parsing scenario config")
    }

    pub fn from_radar(radar: RadarConfig, targets: Vec<Target>) -> Self {
        Self {
            radar,
            targets,
            field: None,
        }
    }

    pub fn to_radar(&self) -> anyhow::Result<Radar> {
        Radar::from_config(&self.radar)
            .with_context(|| format!("building radar {}", self.radar.id))
    }
}
