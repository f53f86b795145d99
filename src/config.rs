use std::collections::BTreeMap;

use serde::Deserialize;

/// Top-level Atropos configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AtroposConfig {
    /// Conception-window settings.
    #[serde(default)]
    pub window: WindowConfig,

    /// Conception prior settings.
    #[serde(default)]
    pub prior: PriorConfig,

    /// Specimens to estimate.
    #[serde(default, rename = "specimen")]
    pub specimens: Vec<SpecimenConfig>,

    /// Growth calibration curves, keyed by anatomical element.
    #[serde(default)]
    pub calibration: BTreeMap<String, CurveConfig>,

    /// Default interval for the overlap command.
    #[serde(default)]
    pub overlap: OverlapConfig,
}

/// Conception-window placement on the calendar.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowConfig {
    /// Month the conception window opens (1..=12).
    #[serde(default = "default_start_month")]
    pub start_month: u8,
    /// Day of month the conception window opens.
    #[serde(default = "default_start_day")]
    pub start_day: u8,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            start_month: default_start_month(),
            start_day: default_start_day(),
        }
    }
}

/// Conception prior selection.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct PriorConfig {
    /// Explicit per-day weights (245 values). Uniform if omitted.
    pub weights: Option<Vec<f64>>,
}

/// One specimen: either an explicit gestation-age range or a measured depth
/// resolved through a calibration curve.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpecimenConfig {
    /// Specimen label (unique within the config).
    pub label: String,

    /// Explicit lower gestation-age bound (days).
    pub min_day: Option<u16>,
    /// Explicit upper gestation-age bound (days).
    pub max_day: Option<u16>,

    /// Anatomical element naming a calibration curve.
    pub element: Option<String>,
    /// Measured bone depth.
    pub depth: Option<f64>,
    /// Measurement uncertainty half-width in days.
    #[serde(default)]
    pub half_width_days: f64,
}

/// Calibration curve for one anatomical element.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CurveConfig {
    /// (depth, age in days) points, sorted by depth.
    pub points: Vec<(f64, f64)>,
}

/// Default interval for the overlap command.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverlapConfig {
    /// First day of the interval (1..=365).
    #[serde(default = "default_interval_start")]
    pub start_day: u16,
    /// Last day of the interval (1..=365); may precede `start_day` to wrap.
    #[serde(default = "default_interval_end")]
    pub end_day: u16,
}

impl Default for OverlapConfig {
    fn default() -> Self {
        Self {
            start_day: default_interval_start(),
            end_day: default_interval_end(),
        }
    }
}

fn default_start_month() -> u8 {
    8
}
fn default_start_day() -> u8 {
    15
}
fn default_interval_start() -> u16 {
    1
}
fn default_interval_end() -> u16 {
    365
}
