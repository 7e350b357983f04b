//! Application context for dependency injection

use std::sync::Arc;

use crate::jobs::pipeline::AlertPipeline;
use crate::services::company_directory::CompanyDirectory;
use crate::services::notifier::NotificationSink;

/// Collaborators built once at startup and handed to the scheduler and the
/// command layer.
pub struct AppContext {
    pub pipeline: Arc<AlertPipeline>,
    pub sink: Arc<dyn NotificationSink>,
    pub directory: Arc<CompanyDirectory>,
}

impl AppContext {
    pub fn new(
        pipeline: Arc<AlertPipeline>,
        sink: Arc<dyn NotificationSink>,
        directory: Arc<CompanyDirectory>,
    ) -> Self {
        Self {
            pipeline,
            sink,
            directory,
        }
    }
}
