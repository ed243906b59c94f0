//! Off-thread model loading.
//!
//! Each request runs `ModelSource::load` on its own worker thread and reports
//! back through a channel. The runner neither cancels nor orders completions;
//! stale results are filtered by the coordinator.

use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;

mod manifest;
mod types;

pub use manifest::{ManifestError, ManifestSource, MANIFEST_FILE_VERSION};
pub use types::{LoadCompletion, LoadError, LoadRequest, LoadSequence};

use crate::handles::LoadedModel;

/// Something that can turn a resource path into a loaded model.
pub trait ModelSource: Send + Sync {
    /// Short label shown in the studio footer.
    fn name(&self) -> &str;

    fn load(&self, resource_path: &str) -> Result<LoadedModel, LoadError>;
}

pub struct ModelRunner {
    source: Arc<dyn ModelSource>,
    sender: Sender<LoadCompletion>,
    receiver: Receiver<LoadCompletion>,
    inflight: HashSet<LoadSequence>,
}

impl ModelRunner {
    pub fn new(source: Arc<dyn ModelSource>) -> Self {
        let (sender, receiver) = std::sync::mpsc::channel();
        Self {
            source,
            sender,
            receiver,
            inflight: HashSet::new(),
        }
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    pub fn request(&mut self, request: LoadRequest) {
        log::debug!(
            "runner: spawning load {} for '{}'",
            request.seq,
            request.resource_path
        );
        self.inflight.insert(request.seq);
        let source = Arc::clone(&self.source);
        let sender = self.sender.clone();
        std::thread::spawn(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(|| {
                source.load(&request.resource_path)
            }))
            .unwrap_or_else(|_| {
                log::error!(
                    "runner: model source '{}' panicked while loading '{}'",
                    source.name(),
                    request.resource_path
                );
                Err(LoadError::Source(format!(
                    "model source panicked while loading '{}'",
                    request.resource_path
                )))
            });
            // A dropped receiver means the runner is gone; nobody is waiting.
            let _ = sender.send(LoadCompletion {
                seq: request.seq,
                resource_path: request.resource_path,
                result,
            });
        });
    }

    /// Collects every completion that has arrived, without blocking.
    pub fn drain_completions(&mut self) -> Vec<LoadCompletion> {
        let mut completions = Vec::new();
        while let Ok(completion) = self.receiver.try_recv() {
            self.inflight.remove(&completion.seq);
            completions.push(completion);
        }
        completions
    }

    /// Blocks for the next completion, up to `timeout`.
    pub fn recv_timeout(&mut self, timeout: Duration) -> Option<LoadCompletion> {
        match self.receiver.recv_timeout(timeout) {
            Ok(completion) => {
                self.inflight.remove(&completion.seq);
                Some(completion)
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    pub fn inflight(&self) -> usize {
        self.inflight.len()
    }

    pub fn is_idle(&self) -> bool {
        self.inflight.is_empty()
    }
}
