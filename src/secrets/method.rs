//! Secret backend selection.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Backend used to resolve the database password, selected by `SECRET_METHOD`.
///
/// Tags are matched exactly (`env`, `docker`, `k8s`, `aws`, `vault`); anything
/// else is kept verbatim in [`SecretMethod::Unrecognized`] so the startup log
/// can say what was configured.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SecretMethod {
    /// `DB_PASSWORD` environment variable
    Env,
    /// Docker secret mounted at `/run/secrets/db_password`
    DockerFile,
    /// Kubernetes secret volume mounted at `/etc/secrets/db_password`
    K8sFile,
    /// AWS Secrets Manager `GetSecretValue`
    AwsSecretsManager,
    /// HashiCorp Vault KV v2
    VaultKv,
    /// Any other `SECRET_METHOD` value
    Unrecognized(String),
}

impl SecretMethod {
    /// Parse a `SECRET_METHOD` value. Never fails.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "env" => Self::Env,
            "docker" => Self::DockerFile,
            "k8s" => Self::K8sFile,
            "aws" => Self::AwsSecretsManager,
            "vault" => Self::VaultKv,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// The configuration tag for this method
    pub fn as_str(&self) -> &str {
        match self {
            Self::Env => "env",
            Self::DockerFile => "docker",
            Self::K8sFile => "k8s",
            Self::AwsSecretsManager => "aws",
            Self::VaultKv => "vault",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl Default for SecretMethod {
    fn default() -> Self {
        Self::Env
    }
}

impl FromStr for SecretMethod {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for SecretMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tags() {
        assert_eq!(SecretMethod::parse("env"), SecretMethod::Env);
        assert_eq!(SecretMethod::parse("docker"), SecretMethod::DockerFile);
        assert_eq!(SecretMethod::parse("k8s"), SecretMethod::K8sFile);
        assert_eq!(SecretMethod::parse("aws"), SecretMethod::AwsSecretsManager);
        assert_eq!(SecretMethod::parse("vault"), SecretMethod::VaultKv);
    }

    #[test]
    fn test_parse_is_exact() {
        for raw in ["ENV", " env", "env ", "", "kubernetes", "vault-kv"] {
            let method = SecretMethod::parse(raw);
            assert_eq!(method, SecretMethod::Unrecognized(raw.to_string()));
        }
    }

    #[test]
    fn test_display_uses_config_tag() {
        assert_eq!(SecretMethod::AwsSecretsManager.to_string(), "aws");
        assert_eq!(SecretMethod::K8sFile.to_string(), "k8s");
        assert_eq!(SecretMethod::Unrecognized("gcp".into()).to_string(), "gcp");
    }

    #[test]
    fn test_from_str() {
        let method: SecretMethod = "docker".parse().unwrap();
        assert_eq!(method, SecretMethod::DockerFile);
        assert_eq!(SecretMethod::default(), SecretMethod::Env);
    }
}
