use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;
use std::time::Duration;

use studio_core::handles::{LoadedModel, ModelHandle};
use studio_core::runner::{LoadError, ModelSource};

/// Longest a gated load waits for its release before giving up.
const GATE_TIMEOUT: Duration = Duration::from_secs(5);

/// In-memory source for driving the runner in tests. Loads of a gated path
/// block until the test releases them, so completion order is chosen by the
/// test rather than by timing.
pub struct ScriptedSource {
    models: HashMap<String, ModelHandle>,
    gates: HashMap<String, Mutex<Receiver<()>>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self {
            models: HashMap::new(),
            gates: HashMap::new(),
        }
    }

    pub fn with_model(mut self, resource_path: &str, model: ModelHandle) -> Self {
        self.models.insert(resource_path.to_string(), model);
        self
    }

    /// Holds loads of `resource_path` until the returned sender fires.
    pub fn gate(&mut self, resource_path: &str) -> Sender<()> {
        let (release, gate) = mpsc::channel();
        self.gates
            .insert(resource_path.to_string(), Mutex::new(gate));
        release
    }
}

impl ModelSource for ScriptedSource {
    fn name(&self) -> &str {
        "Scripted"
    }

    fn load(&self, resource_path: &str) -> Result<LoadedModel, LoadError> {
        if let Some(gate) = self.gates.get(resource_path) {
            let gate = gate.lock().expect("gate lock");
            gate.recv_timeout(GATE_TIMEOUT).map_err(|_| {
                LoadError::Source(format!("load of '{resource_path}' was never released"))
            })?;
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

pub fn model_with_actuators(nu: u32) -> ModelHandle {
    ModelHandle {
        nbody: 5,
        njnt: 4,
        ngeom: 10,
        nv: 4,
        nu,
    }
}
