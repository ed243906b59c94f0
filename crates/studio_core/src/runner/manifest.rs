use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{LoadError, ModelSource};
use crate::handles::{LoadedModel, ModelHandle};

pub const MANIFEST_FILE_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("{0}")]
    Io(String),
    #[error("{0}")]
    InvalidFormat(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestV1 {
    version: u32,
    engine: String,
    models: Vec<ManifestRecordV1>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestRecordV1 {
    resource_path: String,
    nbody: u32,
    njnt: u32,
    ngeom: u32,
    nv: u32,
    nu: u32,
}

/// Answers loads from a table of precomputed model statistics.
#[derive(Debug, Clone)]
pub struct ManifestSource {
    engine: String,
    models: HashMap<String, ModelHandle>,
    latency: Duration,
}

impl ManifestSource {
    pub fn from_path(path: &Path) -> Result<Self, ManifestError> {
        let contents = fs::read_to_string(path).map_err(|error| {
            ManifestError::Io(format!(
                "failed to read model manifest '{}': {error}",
                path.display()
            ))
        })?;
        Self::from_json_str(&contents).map_err(|error| match error {
            ManifestError::InvalidFormat(message) => ManifestError::InvalidFormat(format!(
                "{message} in '{}'",
                path.display()
            )),
            other => other,
        })
    }

    pub fn from_json_str(contents: &str) -> Result<Self, ManifestError> {
        let manifest: ManifestV1 = serde_json::from_str(contents).map_err(|error| {
            ManifestError::InvalidFormat(format!("invalid model manifest: {error}"))
        })?;

        if manifest.version != MANIFEST_FILE_VERSION {
            return Err(ManifestError::InvalidFormat(format!(
                "unsupported model manifest version {}",
                manifest.version
            )));
        }

        let mut models = HashMap::with_capacity(manifest.models.len());
        for record in manifest.models {
            let path = record.resource_path.trim();
            if path.is_empty() {
                return Err(ManifestError::InvalidFormat(
                    "model resource paths must not be empty".to_string(),
                ));
            }
            let handle = ModelHandle {
                nbody: record.nbody,
                njnt: record.njnt,
                ngeom: record.ngeom,
                nv: record.nv,
                nu: record.nu,
            };
            if models.insert(path.to_string(), handle).is_some() {
                return Err(ManifestError::InvalidFormat(format!(
                    "duplicate model resource path '{path}'"
                )));
            }
        }

        Ok(Self {
            engine: manifest.engine,
            models,
            latency: Duration::ZERO,
        })
    }

    /// A source that knows no models; every load fails with `NotFound`.
    pub fn empty(engine: impl Into<String>) -> Self {
        Self {
            engine: engine.into(),
            models: HashMap::new(),
            latency: Duration::ZERO,
        }
    }

    /// Sleeps this long inside every load, standing in for asset fetching.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn contains(&self, resource_path: &str) -> bool {
        self.models.contains_key(resource_path)
    }
}

impl ModelSource for ManifestSource {
    fn name(&self) -> &str {
        &self.engine
    }

    fn load(&self, resource_path: &str) -> Result<LoadedModel, LoadError> {
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
        let model = self
            .models
            .get(resource_path)
            .copied()
            .ok_or_else(|| LoadError::NotFound {
                resource_path: resource_path.to_string(),
            })?;
        LoadedModel::at_rest(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "version": 1,
        "engine": "Test engine",
        "models": [
            { "resource_path": "/a/scene.xml", "nbody": 5, "njnt": 4, "ngeom": 10, "nv": 4, "nu": 0 },
            { "resource_path": "/b/scene.xml", "nbody": 3, "njnt": 2, "ngeom": 6, "nv": 2, "nu": 2 }
        ]
    }"#;

    #[test]
    fn loads_known_paths() {
        let source = ManifestSource::from_json_str(SAMPLE).expect("sample manifest parses");
        assert_eq!(source.name(), "Test engine");
        assert_eq!(source.len(), 2);

        let loaded = source.load("/b/scene.xml").expect("known path loads");
        assert_eq!(loaded.model().nu, 2);
        assert_eq!(loaded.state().ctrl.len(), 2);
    }

    #[test]
    fn unknown_path_is_not_found() {
        let source = ManifestSource::from_json_str(SAMPLE).expect("sample manifest parses");
        let error = source.load("/missing.xml").expect_err("unknown path fails");
        assert_eq!(
            error,
            LoadError::NotFound {
                resource_path: "/missing.xml".to_string()
            }
        );
    }

    #[test]
    fn wrong_version_is_rejected() {
        let contents = SAMPLE.replace("\"version\": 1", "\"version\": 7");
        let result = ManifestSource::from_json_str(&contents);
        assert!(matches!(result, Err(ManifestError::InvalidFormat(_))));
    }

    #[test]
    fn duplicate_paths_are_rejected() {
        let contents = SAMPLE.replace("/b/scene.xml", "/a/scene.xml");
        let result = ManifestSource::from_json_str(&contents);
        assert!(matches!(result, Err(ManifestError::InvalidFormat(_))));
    }

    #[test]
    fn oversized_record_fails_the_load_instead_of_aborting() {
        let contents = SAMPLE.replace("\"nv\": 2", "\"nv\": 4294967295");
        let source = ManifestSource::from_json_str(&contents).expect("manifest parses");
        assert!(matches!(
            source.load("/b/scene.xml"),
            Err(LoadError::InvalidModel(_))
        ));
        assert!(source.load("/a/scene.xml").is_ok());
    }

    #[test]
    fn world_body_is_required() {
        let contents = SAMPLE.replace("\"nbody\": 3", "\"nbody\": 0");
        let source = ManifestSource::from_json_str(&contents).expect("manifest parses");
        assert!(matches!(
            source.load("/b/scene.xml"),
            Err(LoadError::InvalidModel(_))
        ));
    }
}
