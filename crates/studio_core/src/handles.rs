//! Typed model and state handles handed back by a model runner.

use serde::{Deserialize, Serialize};

use crate::runner::LoadError;

/// Largest degree-of-freedom count a handle may describe.
pub const MAX_DOFS: u32 = 100_000;
/// Largest actuator count a handle may describe.
pub const MAX_ACTUATORS: u32 = 100_000;

/// Static structure of a loaded model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelHandle {
    pub nbody: u32,
    pub njnt: u32,
    pub ngeom: u32,
    pub nv: u32,
    pub nu: u32,
}

/// Mutable simulation state belonging to exactly one [`ModelHandle`].
#[derive(Debug, Clone, PartialEq)]
pub struct StateHandle {
    pub time: f64,
    pub qvel: Vec<f64>,
    pub ctrl: Vec<f64>,
}

impl ModelHandle {
    /// Rejects counts too large to size a state for.
    pub fn check_limits(&self) -> Result<(), LoadError> {
        if self.nv > MAX_DOFS {
            return Err(LoadError::InvalidModel(format!(
                "model has {} degrees of freedom, limit is {MAX_DOFS}",
                self.nv
            )));
        }
        if self.nu > MAX_ACTUATORS {
            return Err(LoadError::InvalidModel(format!(
                "model has {} actuators, limit is {MAX_ACTUATORS}",
                self.nu
            )));
        }
        Ok(())
    }
}

impl StateHandle {
    /// Zeroed state for `model`. Callers must have run
    /// [`ModelHandle::check_limits`] first.
    pub fn at_rest(model: &ModelHandle) -> Self {
        Self {
            time: 0.0,
            qvel: vec![0.0; model.nv as usize],
            ctrl: vec![0.0; model.nu as usize],
        }
    }
}

/// A model and its state. Only constructible through [`LoadedModel::new`], so
/// the two sizes always agree.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedModel {
    model: ModelHandle,
    state: StateHandle,
}

impl LoadedModel {
    pub fn new(model: ModelHandle, state: StateHandle) -> Result<Self, LoadError> {
        if model.nbody == 0 {
            return Err(LoadError::InvalidModel(
                "model must contain at least the world body".to_string(),
            ));
        }
        model.check_limits()?;
        if state.qvel.len() != model.nv as usize {
            return Err(LoadError::InvalidModel(format!(
                "state has {} velocities but model has {} degrees of freedom",
                state.qvel.len(),
                model.nv
            )));
        }
        if state.ctrl.len() != model.nu as usize {
            return Err(LoadError::InvalidModel(format!(
                "state has {} controls but model has {} actuators",
                state.ctrl.len(),
                model.nu
            )));
        }
        if !state.time.is_finite() {
            return Err(LoadError::InvalidModel(
                "state time must be finite".to_string(),
            ));
        }
        Ok(Self { model, state })
    }

    pub fn at_rest(model: ModelHandle) -> Result<Self, LoadError> {
        model.check_limits()?;
        let state = StateHandle::at_rest(&model);
        Self::new(model, state)
    }

    pub fn model(&self) -> &ModelHandle {
        &self.model
    }

    pub fn state(&self) -> &StateHandle {
        &self.state
    }
}
