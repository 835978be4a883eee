//! Application state shared across all handlers.

use std::sync::Arc;

use invite_core::config::AppConfig;
use invite_core::traits::UserDirectory;
use invite_service::InvitationWorkflow;

/// Shared, immutable dependencies passed to every handler via
/// `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Invitation workflow bound to the remote directory
    pub workflow: Arc<InvitationWorkflow>,
}

impl AppState {
    /// Wire the workflow to `directory` using the configured access code.
    pub fn new(config: AppConfig, directory: Arc<dyn UserDirectory>) -> Self {
        let workflow = InvitationWorkflow::new(directory, config.access.code.clone());
        Self {
            config: Arc::new(config),
            workflow: Arc::new(workflow),
        }
    }
}
