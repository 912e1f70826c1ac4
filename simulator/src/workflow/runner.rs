use crate::generator::build_target_field;
use crate::workflow::config::ScenarioConfig;
use anyhow::Context;
use log::info;
use radarcore::telemetry::{ScanCounts, ScanMetrics};
use radarcore::{Detection, Priority};
use serde::Serialize;
use std::collections::BTreeMap;

pub struct ScenarioResult {
    pub radar_id: String,
    pub detections: Vec<Detection>,
    pub counts: ScanCounts,
}

#[derive(Serialize)]
struct DetectionReport<'a> {
    #[serde(flatten)]
    detection: &'a Detection,
    priority: Priority,
    high_confidence: bool,
}

#[derive(Serialize)]
struct ScenarioReport<'a> {
    radar_id: &'a str,
    counts: ScanCounts,
    priorities: BTreeMap<Priority, usize>,
    detections: Vec<DetectionReport<'a>>,
}

impl ScenarioResult {
    pub fn priority_breakdown(&self) -> BTreeMap<Priority, usize> {
        let mut breakdown = BTreeMap::new();
        for detection in &self.detections {
            *breakdown.entry(detection.assess_priority()).or_insert(0) += 1;
        }
        breakdown
    }

    pub fn high_confidence_count(&self) -> usize {
        self.detections
            .iter()
            .filter(|d| d.is_high_confidence())
            .count()
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        let report = ScenarioReport {
            radar_id: &self.radar_id,
            counts: self.counts,
            priorities: self.priority_breakdown(),
            detections: self
                .detections
                .iter()
                .map(|detection| DetectionReport {
                    detection,
                    priority: detection.assess_priority(),
                    high_confidence: detection.is_high_confidence(),
                })
                .collect(),
        };
        serde_json::to_string_pretty(&report).context("rendering scenario report")
    }
}

#[derive(Clone)]
pub struct Runner {
    config: ScenarioConfig,
}

impl Runner {
    pub fn new(config: ScenarioConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> anyhow::Result<ScenarioResult> {
        let radar = self.config.to_radar()?;

        let mut targets = self.config.targets.clone();
        if let Some(field) = self.config.field.as_ref() {
            let generated = build_target_field(field)
                .with_context(|| format!("building target field for {}", radar.id()))?;
            targets.extend(generated);
        }

        let metrics = ScanMetrics::new();
        #[cfg(feature = "parallel")]
        let detections = radar.par_scan_with_metrics(&targets, &metrics);
        #[cfg(not(feature = "parallel"))]
        let detections = radar.scan_with_metrics(&targets, &metrics);

        let counts = metrics.snapshot();
        info!(
            "scenario {} -> detections {}, out of range {}, below threshold {}",
            radar.id(),
            counts.detected,
            counts.out_of_range,
            counts.below_threshold
        );

        Ok(ScenarioResult {
            radar_id: radar.id().to_owned(),
            detections,
            counts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::TargetFieldConfig;
    use radarcore::{RadarConfig, Target, ThreatLevel};

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn reference_config() -> ScenarioConfig {
        ScenarioConfig::from_radar(
            RadarConfig {
                id: "R1".into(),
                max_range_km: 10.0,
                snr_threshold: 0.5,
            },
            vec![
                Target::new("A", 3.0, 4.0, 5.0).unwrap(),
                Target::new("B", 12.0, 0.0, 10.0).unwrap(),
                Target::new("C", 1.0, 1.0, 0.3).unwrap(),
            ],
        )
    }

    #[test]
    fn runner_executes_reference_scenario() {
        init_logging();
        let result = Runner::new(reference_config()).execute().unwrap();

        assert_eq!(result.radar_id, "R1");
        assert_eq!(result.detections.len(), 1);
        assert_eq!(result.detections[0].target_id(), "A");
        assert_eq!(result.detections[0].threat(), ThreatLevel::Medium);
        assert_eq!(
            result.counts,
            ScanCounts {
                scanned: 3,
                out_of_range: 1,
                below_threshold: 1,
                detected: 1,
            }
        );
        assert_eq!(result.high_confidence_count(), 0);
        assert_eq!(result.priority_breakdown().get(&Priority::Log), Some(&1));
    }

    #[test]
    fn runner_adds_generated_field() {
        init_logging();
        let mut config = reference_config();
        config.field = Some(TargetFieldConfig {
            count: 40,
            extent_km: 12.0,
            rcs_max: 25.0,
            seed: 3,
            id_prefix: "SIM".into(),
        });

        let result = Runner::new(config).execute().unwrap();
        assert_eq!(result.counts.scanned, 43);
        assert_eq!(result.counts.detected, result.detections.len());
        assert!(result
            .detections
            .windows(2)
            .all(|pair| pair[0].target_id() <= pair[1].target_id()));

        let breakdown_total: usize = result.priority_breakdown().values().sum();
        assert_eq!(breakdown_total, result.detections.len());
    }

    #[test]
    fn invalid_radar_is_reported() {
        let mut config = reference_config();
        config.radar.snr_threshold = -1.0;
        let err = Runner::new(config).execute().err().unwrap();
        assert!(format!("{:#}", err).contains("invalid radar parameters"));
    }

    #[test]
    fn report_renders_priority_labels() {
        let result = Runner::new(reference_config()).execute().unwrap();
        let json = result.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["radar_id"], "R1");
        assert_eq!(value["counts"]["detected"], 1);
        assert_eq!(value["priorities"]["PRIORITY_4_LOG"], 1);
        assert_eq!(value["detections"][0]["target_id"], "A");
        assert_eq!(value["detections"][0]["threat"], "MEDIUM");
        assert_eq!(value["detections"][0]["priority"], "PRIORITY_4_LOG");
        assert_eq!(value["detections"][0]["high_confidence"], false);
    }

    #[test]
    fn baseline_file_runs() {
        init_logging();
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/scenarios/baseline.yaml");
        let config = ScenarioConfig::load(path).unwrap();
        let result = Runner::new(config).execute().unwrap();

        assert_eq!(result.counts.scanned, 27);
        assert!(result.detections.iter().any(|d| d.target_id() == "A"));
        assert!(result.detections.iter().all(|d| d.target_id() != "B"));
        assert!(result.detections.iter().all(|d| d.target_id() != "C"));
    }
}
