use crate::args::OutputFormat;
use crate::presentation::presenters::with_persist_failures;
use crate::presentation::view_models::{CommandResultViewModel, CreateView};
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::{Context, Result};
use folio_runtime::Workspace;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub format: OutputFormat,
    pub data_dir: PathBuf,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, data_dir: PathBuf) -> Self {
        Self { format, data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Open and hydrate the workspace. Unreadable values fall back to their
    /// defaults and are logged, never fatal.
    pub fn workspace(&self) -> Result<Workspace> {
        self.workspace_with_recoveries().map(|(workspace, _)| workspace)
    }

    /// Like [`HandlerContext::workspace`], also returning the recovered keys.
    pub fn workspace_with_recoveries(&self) -> Result<(Workspace, Vec<(String, String)>)> {
        let mut workspace = Workspace::open(&self.data_dir).with_context(|| {
            format!("Failed to open workspace at {}", self.data_dir.display())
        })?;

        let recovered = workspace.hydrate();
        for (key, reason) in &recovered {
            tracing::warn!(key = %key, reason = %reason, "stored value ignored");
        }
        Ok((workspace, recovered))
    }

    /// Render a view model using the configured format
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync,
    {
        let renderer = ConsoleRenderer::new(self.format.into());
        renderer.render(view_model)
    }

    /// Render after folding any failed writes into the result.
    pub fn render_saved<T>(
        &self,
        workspace: &Workspace,
        view_model: CommandResultViewModel<T>,
    ) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync,
    {
        for failure in workspace.failures() {
            tracing::warn!(key = %failure.key, reason = %failure.reason, "write failed");
        }
        self.render(with_persist_failures(view_model, workspace.failures()))
    }
}
