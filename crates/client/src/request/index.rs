//! Index management requests.

use super::{RestRequest, pairs_to_json, pairs_to_proto, require_non_empty};
use crate::error::Result;
use milvus_client_proto::common::{MsgBase, MsgType};
use milvus_client_proto::milvus as proto;
use reqwest::Method;
use serde_json::json;

/// Build an index over a field.
///
/// `extra_params` carries `index_type`, `metric_type`, and build
/// parameters such as `nlist`, the same key/value layout as the wire.
#[derive(Debug, Clone)]
pub struct CreateIndexRequest {
    /// Owning collection.
    pub collection_name: Box<str>,
    /// Field to index.
    pub field_name: Box<str>,
    /// Index name, server default when empty.
    pub index_name: Box<str>,
    /// Index type, metric, and build parameters.
    pub extra_params: Vec<(String, String)>,
}

impl CreateIndexRequest {
    /// Build with no parameters; the server picks defaults.
    #[must_use]
    pub fn new(collection_name: impl Into<Box<str>>, field_name: impl Into<Box<str>>) -> Self {
        Self {
            collection_name: collection_name.into(),
            field_name: field_name.into(),
            index_name: Box::from(""),
            extra_params: Vec::new(),
        }
    }

    /// Name the index.
    #[must_use]
    pub fn index_name(mut self, index_name: impl Into<Box<str>>) -> Self {
        self.index_name = index_name.into();
        self
    }

    /// Add a build parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_params.push((key.into(), value.into()));
        self
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.collection_name, "collection name")?;
        require_non_empty(&self.field_name, "field name")
    }

    /// Render the gRPC message.
    #[must_use]
    pub fn to_grpc(&self, db_name: &str) -> proto::CreateIndexRequest {
        proto::CreateIndexRequest {
            base: Some(MsgBase::new(MsgType::CreateIndex)),
            db_name: db_name.to_owned(),
            collection_name: self.collection_name.as_ref().to_owned(),
            field_name: self.field_name.as_ref().to_owned(),
            extra_params: pairs_to_proto(&self.extra_params),
            index_name: self.index_name.as_ref().to_owned(),
        }
    }

    /// Render the REST call.
    pub fn to_rest(&self, db_name: &str) -> Result<RestRequest> {
        Ok(RestRequest::new(
            Method::POST,
            "/api/v1/index",
            json!({
                "db_name": db_name,
                "collection_name": self.collection_name.as_ref(),
                "field_name": self.field_name.as_ref(),
                "index_name": self.index_name.as_ref(),
                "extra_params": pairs_to_json(&self.extra_params),
            }),
        ))
    }
}

/// Describe the indexes on a field.
#[derive(Debug, Clone)]
pub struct DescribeIndexRequest {
    /// Owning collection.
    pub collection_name: Box<str>,
    /// Field whose indexes to describe, all fields when empty.
    pub field_name: Box<str>,
}

impl DescribeIndexRequest {
    /// Build the request.
    #[must_use]
    pub fn new(collection_name: impl Into<Box<str>>, field_name: impl Into<Box<str>>) -> Self {
        Self {
            collection_name: collection_name.into(),
            field_name: field_name.into(),
        }
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.collection_name, "collection name")
    }

    /// Render the gRPC message.
    #[must_use]
    pub fn to_grpc(&self, db_name: &str) -> proto::DescribeIndexRequest {
        proto::DescribeIndexRequest {
            base: Some(MsgBase::new(MsgType::DescribeIndex)),
            db_name: db_name.to_owned(),
            collection_name: self.collection_name.as_ref().to_owned(),
            field_name: self.field_name.as_ref().to_owned(),
            index_name: String::new(),
        }
    }

    /// Render the REST call.
    pub fn to_rest(&self, db_name: &str) -> Result<RestRequest> {
        Ok(RestRequest::new(
            Method::GET,
            "/api/v1/index",
            json!({
                "db_name": db_name,
                "collection_name": self.collection_name.as_ref(),
                "field_name": self.field_name.as_ref(),
            }),
        ))
    }
}

/// Drop an index.
#[derive(Debug, Clone)]
pub struct DropIndexRequest {
    /// Owning collection.
    pub collection_name: Box<str>,
    /// Indexed field.
    pub field_name: Box<str>,
    /// Index name, the field's default index when empty.
    pub index_name: Box<str>,
}

impl DropIndexRequest {
    /// Build the request.
    #[must_use]
    pub fn new(collection_name: impl Into<Box<str>>, field_name: impl Into<Box<str>>) -> Self {
        Self {
            collection_name: collection_name.into(),
            field_name: field_name.into(),
            index_name: Box::from(""),
        }
    }

    /// Name the index.
    #[must_use]
    pub fn index_name(mut self, index_name: impl Into<Box<str>>) -> Self {
        self.index_name = index_name.into();
        self
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.collection_name, "collection name")?;
        require_non_empty(&self.field_name, "field name")
    }

    /// Render the gRPC message.
    #[must_use]
    pub fn to_grpc(&self, db_name: &str) -> proto::DropIndexRequest {
        proto::DropIndexRequest {
            base: Some(MsgBase::new(MsgType::DropIndex)),
            db_name: db_name.to_owned(),
            collection_name: self.collection_name.as_ref().to_owned(),
            field_name: self.field_name.as_ref().to_owned(),
            index_name: self.index_name.as_ref().to_owned(),
        }
    }

    /// Render the REST call.
    pub fn to_rest(&self, db_name: &str) -> Result<RestRequest> {
        Ok(RestRequest::new(
            Method::DELETE,
            "/api/v1/index",
            json!({
                "db_name": db_name,
                "collection_name": self.collection_name.as_ref(),
                "field_name": self.field_name.as_ref(),
                "index_name": self.index_name.as_ref(),
            }),
        ))
    }
}

/// Fetch the build state of an index.
#[derive(Debug, Clone)]
pub struct GetIndexStateRequest {
    /// Owning collection.
    pub collection_name: Box<str>,
    /// Indexed field.
    pub field_name: Box<str>,
}

impl GetIndexStateRequest {
    /// Build the request.
    #[must_use]
    pub fn new(collection_name: impl Into<Box<str>>, field_name: impl Into<Box<str>>) -> Self {
        Self {
            collection_name: collection_name.into(),
            field_name: field_name.into(),
        }
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.collection_name, "collection name")?;
        require_non_empty(&self.field_name, "field name")
    }

    /// Render the gRPC message.
    #[must_use]
    pub fn to_grpc(&self, db_name: &str) -> proto::GetIndexStateRequest {
        proto::GetIndexStateRequest {
            base: Some(MsgBase::new(MsgType::GetIndexState)),
            db_name: db_name.to_owned(),
            collection_name: self.collection_name.as_ref().to_owned(),
            field_name: self.field_name.as_ref().to_owned(),
            index_name: String::new(),
        }
    }

    /// Render the REST call.
    pub fn to_rest(&self, db_name: &str) -> Result<RestRequest> {
        Ok(RestRequest::new(
            Method::GET,
            "/api/v1/index/state",
            json!({
                "db_name": db_name,
                "collection_name": self.collection_name.as_ref(),
                "field_name": self.field_name.as_ref(),
            }),
        ))
    }
}

/// Fetch row-level progress of an index build.
#[derive(Debug, Clone)]
pub struct GetIndexBuildProgressRequest {
    /// Owning collection.
    pub collection_name: Box<str>,
    /// Indexed field.
    pub field_name: Box<str>,
}

impl GetIndexBuildProgressRequest {
    /// Build the request.
    #[must_use]
    pub fn new(collection_name: impl Into<Box<str>>, field_name: impl Into<Box<str>>) -> Self {
        Self {
            collection_name: collection_name.into(),
            field_name: field_name.into(),
        }
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.collection_name, "collection name")?;
        require_non_empty(&self.field_name, "field name")
    }

    /// Render the gRPC message.
    #[must_use]
    pub fn to_grpc(&self, db_name: &str) -> proto::GetIndexBuildProgressRequest {
        proto::GetIndexBuildProgressRequest {
            base: Some(MsgBase::new(MsgType::GetIndexBuildProgress)),
            db_name: db_name.to_owned(),
            collection_name: self.collection_name.as_ref().to_owned(),
            field_name: self.field_name.as_ref().to_owned(),
            index_name: String::new(),
        }
    }

    /// Render the REST call.
    pub fn to_rest(&self, db_name: &str) -> Result<RestRequest> {
        Ok(RestRequest::new(
            Method::GET,
            "/api/v1/index/progress",
            json!({
                "db_name": db_name,
                "collection_name": self.collection_name.as_ref(),
                "field_name": self.field_name.as_ref(),
            }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_carries_build_params() {
        let request = CreateIndexRequest::new("films", "embedding")
            .index_name("embedding_ivf")
            .param("index_type", "IVF_FLAT")
            .param("metric_type", "L2")
            .param("params", r#"{"nlist":128}"#);
        assert!(request.validate().is_ok());
        let wire = request.to_grpc("default");
        assert_eq!(wire.extra_params.len(), 3);
        assert_eq!(wire.index_name, "embedding_ivf");
        match request.to_rest("default") {
            Ok(rest) => {
                assert_eq!(rest.path, "/api/v1/index");
                assert_eq!(rest.body["extra_params"][0]["key"], "index_type");
            }
            Err(error) => assert!(false, "rest render failed: {error}"),
        }
    }

    #[test]
    fn state_requires_field_name() {
        assert!(GetIndexStateRequest::new("films", "").validate().is_err());
    }
}
