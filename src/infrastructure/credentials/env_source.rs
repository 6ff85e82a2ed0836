use crate::application::ports::CredentialSource;
use crate::domain::Credential;

/// Reads the credential from a process environment variable.
pub struct EnvCredentialSource {
    var_name: String,
    label: String,
}

impl EnvCredentialSource {
    pub fn new(var_name: impl Into<String>) -> Self {
        let var_name = var_name.into();
        let label = format!("environment ({})", var_name);
        Self { var_name, label }
    }
}

impl CredentialSource for EnvCredentialSource {
    fn name(&self) -> &str {
        &self.label
    }

    fn resolve(&self) -> Option<Credential> {
        std::env::var(&self.var_name).ok().and_then(Credential::new)
    }
}
