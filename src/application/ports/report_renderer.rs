use crate::domain::FeedbackReport;

pub trait ReportRenderer: Send + Sync {
    fn render(&self, report: &FeedbackReport) -> Result<Vec<u8>, RenderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("document assembly failed: {0}")]
    AssemblyFailed(String),
}
