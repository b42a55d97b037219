//! Connection configuration shared by both transports.

use crate::error::{Error, Result};
use base64::Engine as _;
use base64::engine::general_purpose;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_PORT: u16 = 19530;
const DEFAULT_TIMEOUT_MS: u64 = 20_000;

/// How to reach and authenticate against a Milvus deployment.
///
/// The same configuration drives either transport; the gRPC client uses
/// [`ConnectConfig::grpc_address`] and the REST client uses
/// [`ConnectConfig::rest_base_url`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConnectConfig {
    /// Hostname or IP address, without scheme or port.
    pub host: Box<str>,
    /// Server port. Defaults to 19530.
    pub port: u16,
    /// Whether to use https/TLS.
    pub tls: bool,
    /// Basic-auth username. Empty means anonymous.
    pub username: Box<str>,
    /// Basic-auth password, ignored when `username` is empty.
    #[serde(skip_serializing)]
    pub password: Box<str>,
    /// Bearer/api token. Takes precedence over username/password.
    #[serde(skip_serializing)]
    pub token: Box<str>,
    /// Database to scope requests to. Empty means the server default.
    pub database: Box<str>,
    /// Per-call timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for ConnectConfig {
    fn default() -> Self {
        Self {
            host: Box::from("localhost"),
            port: DEFAULT_PORT,
            tls: false,
            username: Box::from(""),
            password: Box::from(""),
            token: Box::from(""),
            database: Box::from(""),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ConnectConfig {
    /// Convenience constructor for an unauthenticated local deployment.
    #[must_use]
    pub fn new(host: impl Into<Box<str>>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

    /// Fail fast on configurations that cannot produce a usable endpoint.
    pub fn validate(&self) -> Result<()> {
        let host = self.host.trim();
        if host.is_empty() {
            return Err(Error::validation("host must be non-empty"));
        }
        if host.contains("://") || host.contains('/') {
            return Err(Error::validation(
                "host must be a bare hostname or IP, without scheme or path",
            ));
        }
        if self.port == 0 {
            return Err(Error::validation("port must be non-zero"));
        }
        if self.timeout_ms == 0 {
            return Err(Error::validation("timeoutMs must be non-zero"));
        }
        if !self.username.trim().is_empty() && self.password.is_empty() {
            return Err(Error::validation(
                "password must be set when username is set",
            ));
        }
        Ok(())
    }

    /// Endpoint for the tonic channel, e.g. `http://localhost:19530`.
    #[must_use]
    pub fn grpc_address(&self) -> String {
        let scheme = if self.tls { "https" } else { "http" };
        format!("{scheme}://{}:{}", self.host.trim(), self.port)
    }

    /// Base URL for the REST facade, without a trailing slash.
    #[must_use]
    pub fn rest_base_url(&self) -> String {
        let scheme = if self.tls { "https" } else { "http" };
        format!("{scheme}://{}:{}", self.host.trim(), self.port)
    }

    /// Per-call timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    fn basic_credentials(&self) -> Option<String> {
        let username = self.username.trim();
        if username.is_empty() {
            return None;
        }
        let raw = format!("{username}:{}", self.password);
        Some(general_purpose::STANDARD.encode(raw.as_bytes()))
    }

    /// Value for the gRPC `authorization` metadata entry, if any
    /// credentials are configured.
    ///
    /// A token wins over username/password. Username/password travels as
    /// bare base64 of `user:pass`, the form the server's gRPC interceptor
    /// expects.
    #[must_use]
    pub fn grpc_authorization_value(&self) -> Option<String> {
        let token = self.token.trim();
        if !token.is_empty() {
            return Some(format!("Bearer {token}"));
        }
        self.basic_credentials()
    }

    /// Value for the REST `Authorization` header, if any credentials are
    /// configured.
    ///
    /// A token wins over username/password. The HTTP header always carries
    /// a scheme: `Bearer` for tokens, `Basic` for username/password.
    #[must_use]
    pub fn rest_authorization_value(&self) -> Option<String> {
        let token = self.token.trim();
        if !token.is_empty() {
            return Some(format!("Bearer {token}"));
        }
        self.basic_credentials()
            .map(|encoded| format!("Basic {encoded}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_grpc_port() {
        let config = ConnectConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grpc_address(), "http://localhost:19530");
        assert_eq!(config.rest_base_url(), "http://localhost:19530");
        assert!(config.grpc_authorization_value().is_none());
        assert!(config.rest_authorization_value().is_none());
    }

    #[test]
    fn rejects_host_with_scheme() {
        let config = ConnectConfig::new("http://milvus.internal");
        let error = config.validate().err();
        assert!(matches!(error, Some(Error::Validation(_))));
    }

    #[test]
    fn rejects_username_without_password() {
        let config = ConnectConfig {
            username: Box::from("root"),
            ..ConnectConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn token_takes_precedence_over_basic_auth() {
        let config = ConnectConfig {
            username: Box::from("root"),
            password: Box::from("Milvus"),
            token: Box::from("abc123"),
            ..ConnectConfig::default()
        };
        match config.grpc_authorization_value() {
            Some(value) => assert_eq!(value, "Bearer abc123"),
            None => assert!(false, "expected an authorization value"),
        }
        match config.rest_authorization_value() {
            Some(value) => assert_eq!(value, "Bearer abc123"),
            None => assert!(false, "expected an authorization value"),
        }
    }

    #[test]
    fn basic_auth_is_bare_base64_over_grpc_and_basic_over_rest() {
        let config = ConnectConfig {
            username: Box::from("root"),
            password: Box::from("Milvus"),
            tls: true,
            ..ConnectConfig::default()
        };
        assert_eq!(config.grpc_address(), "https://localhost:19530");
        match config.grpc_authorization_value() {
            Some(value) => assert_eq!(value, "cm9vdDpNaWx2dXM="),
            None => assert!(false, "expected an authorization value"),
        }
        match config.rest_authorization_value() {
            Some(value) => assert_eq!(value, "Basic cm9vdDpNaWx2dXM="),
            None => assert!(false, "expected an authorization value"),
        }
    }
}
