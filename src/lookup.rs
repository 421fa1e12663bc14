use std::collections::HashMap;

use tracing::debug;

use crate::models::{Client, Project};
use crate::toggl::{Resolve, TogglError};

/// Memoizes project and client lookups for the length of one run.
pub struct CachedResolver<R> {
    inner: R,
    projects: HashMap<(u64, u64), Project>,
    clients: HashMap<(u64, u64), Client>,
}

impl<R: Resolve> CachedResolver<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            projects: HashMap::new(),
            clients: HashMap::new(),
        }
    }
}

impl<R: Resolve> Resolve for CachedResolver<R> {
    fn project(&mut self, workspace_id: u64, project_id: u64) -> Result<Project, TogglError> {
        let key = (workspace_id, project_id);
        if let Some(project) = self.projects.get(&key) {
            debug!(workspace_id, project_id, "project cache hit");
            return Ok(project.clone());
        }
        let project = self.inner.project(workspace_id, project_id)?;
        self.projects.insert(key, project.clone());
        Ok(project)
    }

    fn client(&mut self, workspace_id: u64, client_id: u64) -> Result<Client, TogglError> {
        let key = (workspace_id, client_id);
        if let Some(client) = self.clients.get(&key) {
            debug!(workspace_id, client_id, "client cache hit");
            return Ok(client.clone());
        }
        let client = self.inner.client(workspace_id, client_id)?;
        self.clients.insert(key, client.clone());
        Ok(client)
    }
}
