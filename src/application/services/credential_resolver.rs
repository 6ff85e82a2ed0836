use std::sync::Arc;

use crate::application::ports::{CredentialError, CredentialSource};
use crate::domain::Credential;

/// Resolves the API credential for one request: an inline value from the form
/// wins, then the configured sources in order. First non-empty value wins and
/// nothing is cached beyond the session that holds the resolver.
pub struct CredentialResolver {
    sources: Vec<Arc<dyn CredentialSource>>,
}

const INLINE_SOURCE_NAME: &str = "inline form field";

impl CredentialResolver {
    pub fn new(sources: Vec<Arc<dyn CredentialSource>>) -> Self {
        Self { sources }
    }

    pub fn resolve(&self, inline: Option<&str>) -> Result<Credential, CredentialError> {
        if let Some(credential) = inline.and_then(Credential::new) {
            tracing::debug!(
                source = INLINE_SOURCE_NAME,
                preview = %credential.preview(),
                "API credential resolved"
            );
            return Ok(credential);
        }

        for source in &self.sources {
            if let Some(credential) = source.resolve() {
                tracing::debug!(
                    source = source.name(),
                    preview = %credential.preview(),
                    "API credential resolved"
                );
                return Ok(credential);
            }
        }

        let checked = std::iter::once(INLINE_SOURCE_NAME)
            .chain(self.sources.iter().map(|s| s.name()))
            .collect::<Vec<_>>()
            .join(", ");
        tracing::warn!(checked = %checked, "No API credential available");
        Err(CredentialError::Missing(checked))
    }
}
