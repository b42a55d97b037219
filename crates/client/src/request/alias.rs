//! Alias management requests.

use super::{RestRequest, require_non_empty};
use crate::error::Result;
use milvus_client_proto::common::{MsgBase, MsgType};
use milvus_client_proto::milvus as proto;
use reqwest::Method;
use serde_json::json;

/// Point a new alias at a collection.
#[derive(Debug, Clone)]
pub struct CreateAliasRequest {
    /// Target collection.
    pub collection_name: Box<str>,
    /// Alias to create.
    pub alias: Box<str>,
}

impl CreateAliasRequest {
    /// Build the request.
    #[must_use]
    pub fn new(collection_name: impl Into<Box<str>>, alias: impl Into<Box<str>>) -> Self {
        Self {
            collection_name: collection_name.into(),
            alias: alias.into(),
        }
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.collection_name, "collection name")?;
        require_non_empty(&self.alias, "alias")
    }

    /// Render the gRPC message.
    #[must_use]
    pub fn to_grpc(&self, db_name: &str) -> proto::CreateAliasRequest {
        proto::CreateAliasRequest {
            base: Some(MsgBase::new(MsgType::CreateAlias)),
            db_name: db_name.to_owned(),
            collection_name: self.collection_name.as_ref().to_owned(),
            alias: self.alias.as_ref().to_owned(),
        }
    }

    /// Render the REST call.
    pub fn to_rest(&self, db_name: &str) -> Result<RestRequest> {
        Ok(RestRequest::new(
            Method::POST,
            "/api/v1/alias",
            json!({
                "db_name": db_name,
                "collection_name": self.collection_name.as_ref(),
                "alias": self.alias.as_ref(),
            }),
        ))
    }
}

/// Remove an alias.
#[derive(Debug, Clone)]
pub struct DropAliasRequest {
    /// Alias to remove.
    pub alias: Box<str>,
}

impl DropAliasRequest {
    /// Build the request.
    #[must_use]
    pub fn new(alias: impl Into<Box<str>>) -> Self {
        Self {
            alias: alias.into(),
        }
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.alias, "alias")
    }

    /// Render the gRPC message.
    #[must_use]
    pub fn to_grpc(&self, db_name: &str) -> proto::DropAliasRequest {
        proto::DropAliasRequest {
            base: Some(MsgBase::new(MsgType::DropAlias)),
            db_name: db_name.to_owned(),
            alias: self.alias.as_ref().to_owned(),
        }
    }

    /// Render the REST call.
    pub fn to_rest(&self, db_name: &str) -> Result<RestRequest> {
        Ok(RestRequest::new(
            Method::DELETE,
            "/api/v1/alias",
            json!({
                "db_name": db_name,
                "alias": self.alias.as_ref(),
            }),
        ))
    }
}

/// Repoint an existing alias at another collection.
#[derive(Debug, Clone)]
pub struct AlterAliasRequest {
    /// New target collection.
    pub collection_name: Box<str>,
    /// Alias to repoint.
    pub alias: Box<str>,
}

impl AlterAliasRequest {
    /// Build the request.
    #[must_use]
    pub fn new(collection_name: impl Into<Box<str>>, alias: impl Into<Box<str>>) -> Self {
        Self {
            collection_name: collection_name.into(),
            alias: alias.into(),
        }
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.collection_name, "collection name")?;
        require_non_empty(&self.alias, "alias")
    }

    /// Render the gRPC message.
    #[must_use]
    pub fn to_grpc(&self, db_name: &str) -> proto::AlterAliasRequest {
        proto::AlterAliasRequest {
            base: Some(MsgBase::new(MsgType::AlterAlias)),
            db_name: db_name.to_owned(),
            collection_name: self.collection_name.as_ref().to_owned(),
            alias: self.alias.as_ref().to_owned(),
        }
    }

    /// Render the REST call.
    pub fn to_rest(&self, db_name: &str) -> Result<RestRequest> {
        Ok(RestRequest::new(
            Method::PATCH,
            "/api/v1/alias",
            json!({
                "db_name": db_name,
                "collection_name": self.collection_name.as_ref(),
                "alias": self.alias.as_ref(),
            }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_requests_validate_both_names() {
        assert!(CreateAliasRequest::new("films", "films_live").validate().is_ok());
        assert!(CreateAliasRequest::new("films", " ").validate().is_err());
        assert!(DropAliasRequest::new("").validate().is_err());
    }

    #[test]
    fn alter_uses_patch() {
        let request = AlterAliasRequest::new("movies", "films_live");
        match request.to_rest("default") {
            Ok(rest) => {
                assert_eq!(rest.method, Method::PATCH);
                assert_eq!(rest.path, "/api/v1/alias");
            }
            Err(error) => assert!(false, "rest render failed: {error}"),
        }
    }
}
