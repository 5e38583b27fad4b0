mod pipeline_service;
mod scoped_temp;

pub use pipeline_service::{PipelineError, VoicePipelineService};
