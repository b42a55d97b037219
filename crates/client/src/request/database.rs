//! Database requests. Databases are gRPC-only; the facade predates
//! multi-database deployments.

use super::{RestRequest, require_non_empty};
use crate::error::{Error, Result};
use milvus_client_proto::common::{MsgBase, MsgType};
use milvus_client_proto::milvus as proto;

/// Create a database.
#[derive(Debug, Clone)]
pub struct CreateDatabaseRequest {
    /// Database name.
    pub db_name: Box<str>,
}

impl CreateDatabaseRequest {
    /// Build the request.
    #[must_use]
    pub fn new(db_name: impl Into<Box<str>>) -> Self {
        Self {
            db_name: db_name.into(),
        }
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.db_name, "database name")
    }

    /// Render the gRPC message. The requested name overrides the
    /// client's configured database.
    #[must_use]
    pub fn to_grpc(&self, _db_name: &str) -> proto::CreateDatabaseRequest {
        proto::CreateDatabaseRequest {
            base: Some(MsgBase::new(MsgType::Undefined)),
            db_name: self.db_name.as_ref().to_owned(),
        }
    }

    /// Databases are gRPC-only.
    pub fn to_rest(&self, _db_name: &str) -> Result<RestRequest> {
        Err(Error::not_supported("database.create", "REST"))
    }
}

/// Drop an empty database.
#[derive(Debug, Clone)]
pub struct DropDatabaseRequest {
    /// Database name.
    pub db_name: Box<str>,
}

impl DropDatabaseRequest {
    /// Build the request.
    #[must_use]
    pub fn new(db_name: impl Into<Box<str>>) -> Self {
        Self {
            db_name: db_name.into(),
        }
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.db_name, "database name")?;
        if self.db_name.as_ref() == "default" {
            return Err(Error::validation("the default database cannot be dropped"));
        }
        Ok(())
    }

    /// Render the gRPC message.
    #[must_use]
    pub fn to_grpc(&self, _db_name: &str) -> proto::DropDatabaseRequest {
        proto::DropDatabaseRequest {
            base: Some(MsgBase::new(MsgType::Undefined)),
            db_name: self.db_name.as_ref().to_owned(),
        }
    }

    /// Databases are gRPC-only.
    pub fn to_rest(&self, _db_name: &str) -> Result<RestRequest> {
        Err(Error::not_supported("database.drop", "REST"))
    }
}

/// List database names.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListDatabasesRequest;

impl ListDatabasesRequest {
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
    pub fn to_grpc(&self, _db_name: &str) -> proto::ListDatabasesRequest {
        proto::ListDatabasesRequest {
            base: Some(MsgBase::new(MsgType::Undefined)),
        }
    }

    /// Databases are gRPC-only.
    pub fn to_rest(&self, _db_name: &str) -> Result<RestRequest> {
        Err(Error::not_supported("database.list", "REST"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_database_cannot_be_dropped() {
        assert!(DropDatabaseRequest::new("default").validate().is_err());
        assert!(DropDatabaseRequest::new("analytics").validate().is_ok());
    }

    #[test]
    fn database_requests_are_grpc_only() {
        assert!(matches!(
            CreateDatabaseRequest::new("analytics").to_rest("default").err(),
            Some(Error::NotSupported { .. })
        ));
        assert!(matches!(
            ListDatabasesRequest::new().to_rest("default").err(),
            Some(Error::NotSupported { .. })
        ));
    }
}
