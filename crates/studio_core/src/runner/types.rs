use std::fmt;

use thiserror::Error;

use crate::handles::LoadedModel;

/// Monotonic id of a load request. Later requests compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadSequence(u64);

impl LoadSequence {
    pub(crate) fn first() -> Self {
        Self(1)
    }

    #[must_use]
    pub(crate) fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for LoadSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub seq: LoadSequence,
    pub resource_path: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error("no model found at '{resource_path}'")]
    NotFound { resource_path: String },
    #[error("invalid model: {0}")]
    InvalidModel(String),
    #[error("model source failed: {0}")]
    Source(String),
}

#[derive(Debug, Clone)]
pub struct LoadCompletion {
    pub seq: LoadSequence,
    pub resource_path: String,
    pub result: Result<LoadedModel, LoadError>,
}
