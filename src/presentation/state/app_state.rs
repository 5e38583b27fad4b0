use std::sync::Arc;

use crate::application::services::VoicePipelineService;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<VoicePipelineService>,
}
