use std::collections::HashMap;
use tokio::task::JoinHandle;

use crate::data::Resource;

/// The portal's long-lived background work: one load slot per fixture
/// resource and the minute clock. Re-spawning a resource load aborts the
/// previous one so a panel never receives results from a stale fetch.
#[derive(Default)]
pub struct BackgroundTasks {
    fetches: HashMap<Resource, JoinHandle<()>>,
    clock: Option<JoinHandle<()>>,
}

impl BackgroundTasks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn_fetch(&mut self, resource: Resource, task: JoinHandle<()>) {
        if let Some(previous) = self.fetches.insert(resource, task) {
            previous.abort();
        }
    }

    pub fn spawn_clock(&mut self, task: JoinHandle<()>) {
        if let Some(previous) = self.clock.replace(task) {
            previous.abort();
        }
    }

    pub fn abort_all(&mut self) {
        for task in self.fetches.values() {
            task.abort();
        }
        self.fetches.clear();
        if let Some(clock) = self.clock.take() {
            clock.abort();
        }
    }
}
