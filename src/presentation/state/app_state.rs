use std::sync::Arc;

use crate::application::ports::{FeedbackClient, ReportRenderer, TranscriptionEngine};
use crate::application::services::ReviewService;
use crate::presentation::config::{ScaffoldConfig, Settings};

pub struct AppState<T, F, R>
where
    T: TranscriptionEngine,
    F: FeedbackClient,
    R: ReportRenderer,
{
    pub review_service: Arc<ReviewService<T, F, R>>,
    // Scaffold mode renders its canned report through the real renderer.
    pub report_renderer: Arc<R>,
    pub settings: Settings,
    pub scaffold_config: ScaffoldConfig,
}

impl<T, F, R> Clone for AppState<T, F, R>
where
    T: TranscriptionEngine,
    F: FeedbackClient,
    R: ReportRenderer,
{
    fn clone(&self) -> Self {
        Self {
            review_service: Arc::clone(&self.review_service),
            report_renderer: Arc::clone(&self.report_renderer),
            settings: self.settings.clone(),
            scaffold_config: self.scaffold_config.clone(),
        }
    }
}
