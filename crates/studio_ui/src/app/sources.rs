use std::sync::Arc;
use std::time::Duration;

use studio_core::config::StudioConfig;
use studio_core::runner::{ManifestError, ManifestSource, ModelSource};

const BUNDLED_MANIFEST: &str = include_str!("../../assets/menagerie_stats.json");

pub(crate) fn bundled_source() -> Result<ManifestSource, ManifestError> {
    ManifestSource::from_json_str(BUNDLED_MANIFEST)
}

/// Picks the configured manifest, then the bundled one. Any fallback comes
/// back with a warning for the footer.
pub(crate) fn select_source(config: &StudioConfig) -> (Arc<dyn ModelSource>, Option<String>) {
    let latency = Duration::from_millis(config.load_latency_ms);
    let mut warning = None;

    if let Some(path) = config.stats_manifest.as_ref() {
        match ManifestSource::from_path(path) {
            Ok(source) => {
                log::info!(
                    "using model manifest '{}' ({} models)",
                    path.display(),
                    source.len()
                );
                return (Arc::new(source.with_latency(latency)), None);
            }
            Err(error) => {
                log::warn!("falling back to bundled manifest: {error}");
                warning = Some(format!("Manifest ignored: {error}"));
            }
        }
    }

    match bundled_source() {
        Ok(source) => (Arc::new(source.with_latency(latency)), warning),
        Err(error) => {
            log::error!("bundled manifest unusable: {error}");
            (
                Arc::new(ManifestSource::empty("No model source")),
                Some(format!("No model source: {error}")),
            )
        }
    }
}
