//! Credential management requests. Passwords travel base64-encoded, the
//! same scheme the authorization header uses.

use super::{RestRequest, require_non_empty};
use crate::error::{Error, Result};
use base64::Engine as _;
use base64::engine::general_purpose;
use milvus_client_proto::common::{MsgBase, MsgType};
use milvus_client_proto::milvus as proto;
use reqwest::Method;
use serde_json::json;

const MIN_PASSWORD_LEN: usize = 6;
const MAX_PASSWORD_LEN: usize = 256;

fn validate_password(password: &str, what: &str) -> Result<()> {
    if password.len() < MIN_PASSWORD_LEN || password.len() > MAX_PASSWORD_LEN {
        return Err(Error::validation(format!(
            "{what} must be between {MIN_PASSWORD_LEN} and {MAX_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

fn encode_password(password: &str) -> String {
    general_purpose::STANDARD.encode(password.as_bytes())
}

/// Create a user credential.
#[derive(Debug, Clone)]
pub struct CreateCredentialRequest {
    /// Username to create.
    pub username: Box<str>,
    /// Plaintext password, encoded before it leaves the process.
    pub password: Box<str>,
}

impl CreateCredentialRequest {
    /// Build the request.
    #[must_use]
    pub fn new(username: impl Into<Box<str>>, password: impl Into<Box<str>>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.username, "username")?;
        validate_password(&self.password, "password")
    }

    /// Render the gRPC message.
    #[must_use]
    pub fn to_grpc(&self, _db_name: &str) -> proto::CreateCredentialRequest {
        proto::CreateCredentialRequest {
            base: Some(MsgBase::new(MsgType::Undefined)),
            username: self.username.as_ref().to_owned(),
            password: encode_password(&self.password),
            created_utc_timestamps: 0,
            modified_utc_timestamps: 0,
        }
    }

    /// Render the REST call.
    pub fn to_rest(&self, _db_name: &str) -> Result<RestRequest> {
        Ok(RestRequest::new(
            Method::POST,
            "/api/v1/credential",
            json!({
                "username": self.username.as_ref(),
                "password": encode_password(&self.password),
            }),
        ))
    }
}

/// Change a user's password.
#[derive(Debug, Clone)]
pub struct UpdateCredentialRequest {
    /// Username whose password changes.
    pub username: Box<str>,
    /// Current plaintext password.
    pub old_password: Box<str>,
    /// New plaintext password.
    pub new_password: Box<str>,
}

impl UpdateCredentialRequest {
    /// Build the request.
    #[must_use]
    pub fn new(
        username: impl Into<Box<str>>,
        old_password: impl Into<Box<str>>,
        new_password: impl Into<Box<str>>,
    ) -> Self {
        Self {
            username: username.into(),
            old_password: old_password.into(),
            new_password: new_password.into(),
        }
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.username, "username")?;
        require_non_empty(&self.old_password, "old password")?;
        validate_password(&self.new_password, "new password")
    }

    /// Render the gRPC message.
    #[must_use]
    pub fn to_grpc(&self, _db_name: &str) -> proto::UpdateCredentialRequest {
        proto::UpdateCredentialRequest {
            base: Some(MsgBase::new(MsgType::Undefined)),
            username: self.username.as_ref().to_owned(),
            old_password: encode_password(&self.old_password),
            new_password: encode_password(&self.new_password),
            created_utc_timestamps: 0,
            modified_utc_timestamps: 0,
        }
    }

    /// Render the REST call.
    pub fn to_rest(&self, _db_name: &str) -> Result<RestRequest> {
        Ok(RestRequest::new(
            Method::PATCH,
            "/api/v1/credential",
            json!({
                "username": self.username.as_ref(),
                "oldPassword": encode_password(&self.old_password),
                "newPassword": encode_password(&self.new_password),
            }),
        ))
    }
}

/// Delete a user credential.
#[derive(Debug, Clone)]
pub struct DeleteCredentialRequest {
    /// Username to delete.
    pub username: Box<str>,
}

impl DeleteCredentialRequest {
    /// Build the request.
    #[must_use]
    pub fn new(username: impl Into<Box<str>>) -> Self {
        Self {
            username: username.into(),
        }
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.username, "username")?;
        if self.username.as_ref() == "root" {
            return Err(Error::validation("the root credential cannot be deleted"));
        }
        Ok(())
    }

    /// Render the gRPC message.
    #[must_use]
    pub fn to_grpc(&self, _db_name: &str) -> proto::DeleteCredentialRequest {
        proto::DeleteCredentialRequest {
            base: Some(MsgBase::new(MsgType::Undefined)),
            username: self.username.as_ref().to_owned(),
        }
    }

    /// Render the REST call.
    pub fn to_rest(&self, _db_name: &str) -> Result<RestRequest> {
        Ok(RestRequest::new(
            Method::DELETE,
            "/api/v1/credential",
            json!({ "username": self.username.as_ref() }),
        ))
    }
}

/// List usernames with credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListCredUsersRequest;

impl ListCredUsersRequest {
    /// Build the request.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Nothing to check.
    pub const fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Render the gRPC message.
    #[must_use]
    pub fn to_grpc(&self, _db_name: &str) -> proto::ListCredUsersRequest {
        proto::ListCredUsersRequest {
            base: Some(MsgBase::new(MsgType::Undefined)),
        }
    }

    /// Render the REST call.
    pub fn to_rest(&self, _db_name: &str) -> Result<RestRequest> {
        Ok(RestRequest::new(
            Method::GET,
            "/api/v1/credential/users",
            json!({}),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passwords_are_base64_on_the_wire() {
        let request = CreateCredentialRequest::new("reader", "Sup3rSecret");
        assert!(request.validate().is_ok());
        let wire = request.to_grpc("default");
        assert_eq!(wire.password, "U3VwM3JTZWNyZXQ=");
    }

    #[test]
    fn short_passwords_are_rejected() {
        let request = CreateCredentialRequest::new("reader", "abc");
        assert!(request.validate().is_err());
    }

    #[test]
    fn root_cannot_be_deleted() {
        assert!(DeleteCredentialRequest::new("root").validate().is_err());
        assert!(DeleteCredentialRequest::new("reader").validate().is_ok());
    }
}
