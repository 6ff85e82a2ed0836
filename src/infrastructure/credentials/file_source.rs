use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::application::ports::CredentialSource;
use crate::domain::Credential;

pub const DEFAULT_SECRET_KEY: &str = "openai_api_key";

/// Reads the credential from a deployment secret file: a flat JSON object of
/// string values, kept out of version control. A missing file is simply an
/// empty source; a malformed one is logged and skipped.
pub struct FileCredentialSource {
    path: PathBuf,
    key: String,
    label: String,
}

impl FileCredentialSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_key(path, DEFAULT_SECRET_KEY)
    }

    pub fn with_key(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        let path = path.into();
        let label = format!("secret file ({})", path.display());
        Self {
            path,
            key: key.into(),
            label,
        }
    }
}

impl CredentialSource for FileCredentialSource {
    fn name(&self) -> &str {
        &self.label
    }

    fn resolve(&self) -> Option<Credential> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read secret file");
                return None;
            }
        };

        let mut secrets: HashMap<String, String> = match serde_json::from_str(&contents) {
            Ok(secrets) => secrets,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Secret file is not a JSON object of strings"
                );
                return None;
            }
        };

        secrets.remove(&self.key).and_then(Credential::new)
    }
}
