mod credential_resolver;
mod review_service;
pub mod rubric;

pub use credential_resolver::CredentialResolver;
pub use review_service::{RenderedReport, ReviewError, ReviewService};
