use crate::domain::Credential;

/// One place an API credential may come from (environment variable, secret
/// file). Sources are consulted in a fixed precedence order and never cache
/// beyond the lookup itself.
pub trait CredentialSource: Send + Sync {
    fn name(&self) -> &str;
    fn resolve(&self) -> Option<Credential>;
}

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("no API credential found (checked: {0})")]
    Missing(String),
}
