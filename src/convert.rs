//! Builds engine values from TOML configuration.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info;

use atropos_calendar::{CycleMap, Doy};
use atropos_growth::{GrowthCurve, resolve_range};
use atropos_session::{EntryId, Session};
use atropos_sode::{ConceptionPrior, GestationAgeRange};

use crate::config::{AtroposConfig, SpecimenConfig};

/// Loads and parses the TOML configuration file.
pub fn load_config(path: &Path) -> Result<AtroposConfig> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

/// Builds the conception prior selected by the config.
pub fn build_prior(config: &AtroposConfig) -> Result<ConceptionPrior> {
    match &config.prior.weights {
        Some(weights) => {
            ConceptionPrior::new(weights.clone()).context("invalid [prior].weights")
        }
        None => Ok(ConceptionPrior::uniform()),
    }
}

/// Builds the cycle mapping from the configured window start.
pub fn build_cycle(config: &AtroposConfig) -> Result<CycleMap> {
    let start = Doy::from_month_day(config.window.start_month, config.window.start_day)
        .context("invalid [window] start date")?;
    Ok(CycleMap::new(start))
}

/// Resolves one specimen to a gestation-age range.
///
/// A specimen either carries explicit `min_day`/`max_day` bounds or a
/// measured `depth` plus the `element` naming a calibration curve.
pub fn resolve_specimen(config: &AtroposConfig, specimen: &SpecimenConfig) -> Result<GestationAgeRange> {
    match (specimen.min_day, specimen.max_day, &specimen.element, specimen.depth) {
        (Some(min_day), Some(max_day), None, None) => {
            GestationAgeRange::new(min_day, max_day)
                .with_context(|| format!("specimen '{}': invalid range", specimen.label))
        }
        (None, None, Some(element), Some(depth)) => {
            let curve_cfg = config.calibration.get(element).with_context(|| {
                format!(
                    "specimen '{}': no [calibration.{element}] curve configured",
                    specimen.label
                )
            })?;
            let curve = GrowthCurve::new(curve_cfg.points.clone())
                .with_context(|| format!("invalid calibration curve for '{element}'"))?;
            let range = resolve_range(&curve, depth, specimen.half_width_days)
                .with_context(|| format!("specimen '{}': cannot resolve depth", specimen.label))?;
            info!(
                label = %specimen.label,
                depth,
                min_day = range.min_day(),
                max_day = range.max_day(),
                "resolved specimen through growth curve"
            );
            Ok(range)
        }
        _ => bail!(
            "specimen '{}': set either min_day/max_day or element/depth, not a mixture",
            specimen.label
        ),
    }
}

/// Builds a session holding one measured entry per configured specimen.
///
/// Returns the session together with the entry ids in config order.
pub fn build_session(config: &AtroposConfig) -> Result<(Session, Vec<EntryId>)> {
    if config.specimens.is_empty() {
        bail!("no specimens configured: add at least one [[specimen]] table");
    }
    let prior = build_prior(config)?;
    let cycle = build_cycle(config)?;
    let mut session = Session::new(prior, cycle);
    let mut ids = Vec::with_capacity(config.specimens.len());
    for specimen in &config.specimens {
        let range = resolve_specimen(config, specimen)?;
        let id = session
            .add_measured(specimen.label.clone(), range)
            .with_context(|| format!("specimen '{}': convolution failed", specimen.label))?;
        ids.push(id);
    }
    Ok((session, ids))
}

/// Selects entry ids by specimen label, or every entry when `labels` is
/// empty.
pub fn select_entries(
    config: &AtroposConfig,
    ids: &[EntryId],
    labels: &[String],
) -> Result<Vec<EntryId>> {
    if labels.is_empty() {
        return Ok(ids.to_vec());
    }
    let mut selected = Vec::with_capacity(labels.len());
    for label in labels {
        let position = config
            .specimens
            .iter()
            .position(|s| &s.label == label)
            .with_context(|| format!("no configured specimen labelled '{label}'"))?;
        selected.push(ids[position]);
    }
    Ok(selected)
}
