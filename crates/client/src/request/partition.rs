//! Partition lifecycle requests.

use super::{RestRequest, require_non_empty};
use crate::error::{Error, Result};
use milvus_client_proto::common::{MsgBase, MsgType};
use milvus_client_proto::milvus as proto;
use reqwest::Method;
use serde_json::json;

/// Create a partition within a collection.
#[derive(Debug, Clone)]
pub struct CreatePartitionRequest {
    /// Owning collection.
    pub collection_name: Box<str>,
    /// Partition to create.
    pub partition_name: Box<str>,
}

impl CreatePartitionRequest {
    /// Build the request.
    #[must_use]
    pub fn new(
        collection_name: impl Into<Box<str>>,
        partition_name: impl Into<Box<str>>,
    ) -> Self {
        Self {
            collection_name: collection_name.into(),
            partition_name: partition_name.into(),
        }
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.collection_name, "collection name")?;
        require_non_empty(&self.partition_name, "partition name")
    }

    /// Render the gRPC message.
    #[must_use]
    pub fn to_grpc(&self, db_name: &str) -> proto::CreatePartitionRequest {
        proto::CreatePartitionRequest {
            base: Some(MsgBase::new(MsgType::CreatePartition)),
            db_name: db_name.to_owned(),
            collection_name: self.collection_name.as_ref().to_owned(),
            partition_name: self.partition_name.as_ref().to_owned(),
        }
    }

    /// Render the REST call.
    pub fn to_rest(&self, db_name: &str) -> Result<RestRequest> {
        Ok(RestRequest::new(
            Method::POST,
            "/api/v1/partition",
            json!({
                "db_name": db_name,
                "collection_name": self.collection_name.as_ref(),
                "partition_name": self.partition_name.as_ref(),
            }),
        ))
    }
}

/// Drop a partition and its data. The `_default` partition cannot be
/// dropped.
#[derive(Debug, Clone)]
pub struct DropPartitionRequest {
    /// Owning collection.
    pub collection_name: Box<str>,
    /// Partition to drop.
    pub partition_name: Box<str>,
}

impl DropPartitionRequest {
    /// Build the request.
    #[must_use]
    pub fn new(
        collection_name: impl Into<Box<str>>,
        partition_name: impl Into<Box<str>>,
    ) -> Self {
        Self {
            collection_name: collection_name.into(),
            partition_name: partition_name.into(),
        }
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.collection_name, "collection name")?;
        require_non_empty(&self.partition_name, "partition name")?;
        if self.partition_name.as_ref() == "_default" {
            return Err(Error::validation(
                "the _default partition cannot be dropped",
            ));
        }
        Ok(())
    }

    /// Render the gRPC message.
    #[must_use]
    pub fn to_grpc(&self, db_name: &str) -> proto::DropPartitionRequest {
        proto::DropPartitionRequest {
            base: Some(MsgBase::new(MsgType::DropPartition)),
            db_name: db_name.to_owned(),
            collection_name: self.collection_name.as_ref().to_owned(),
            partition_name: self.partition_name.as_ref().to_owned(),
        }
    }

    /// Render the REST call.
    pub fn to_rest(&self, db_name: &str) -> Result<RestRequest> {
        Ok(RestRequest::new(
            Method::DELETE,
            "/api/v1/partition",
            json!({
                "db_name": db_name,
                "collection_name": self.collection_name.as_ref(),
                "partition_name": self.partition_name.as_ref(),
            }),
        ))
    }
}

/// Check whether a partition exists.
#[derive(Debug, Clone)]
pub struct HasPartitionRequest {
    /// Owning collection.
    pub collection_name: Box<str>,
    /// Partition to look up.
    pub partition_name: Box<str>,
}

impl HasPartitionRequest {
    /// Build the request.
    #[must_use]
    pub fn new(
        collection_name: impl Into<Box<str>>,
        partition_name: impl Into<Box<str>>,
    ) -> Self {
        Self {
            collection_name: collection_name.into(),
            partition_name: partition_name.into(),
        }
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.collection_name, "collection name")?;
        require_non_empty(&self.partition_name, "partition name")
    }

    /// Render the gRPC message.
    #[must_use]
    pub fn to_grpc(&self, db_name: &str) -> proto::HasPartitionRequest {
        proto::HasPartitionRequest {
            base: Some(MsgBase::new(MsgType::HasPartition)),
            db_name: db_name.to_owned(),
            collection_name: self.collection_name.as_ref().to_owned(),
            partition_name: self.partition_name.as_ref().to_owned(),
        }
    }

    /// Render the REST call.
    pub fn to_rest(&self, db_name: &str) -> Result<RestRequest> {
        Ok(RestRequest::new(
            Method::GET,
            "/api/v1/partition/existence",
            json!({
                "db_name": db_name,
                "collection_name": self.collection_name.as_ref(),
                "partition_name": self.partition_name.as_ref(),
            }),
        ))
    }
}

/// List partition names of a collection.
#[derive(Debug, Clone)]
pub struct ShowPartitionsRequest {
    /// The collection to list.
    pub collection_name: Box<str>,
}

impl ShowPartitionsRequest {
    /// Build the request.
    #[must_use]
    pub fn new(collection_name: impl Into<Box<str>>) -> Self {
        Self {
            collection_name: collection_name.into(),
        }
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.collection_name, "collection name")
    }

    /// Render the gRPC message.
    #[must_use]
    pub fn to_grpc(&self, db_name: &str) -> proto::ShowPartitionsRequest {
        proto::ShowPartitionsRequest {
            base: Some(MsgBase::new(MsgType::ShowPartitions)),
            db_name: db_name.to_owned(),
            collection_name: self.collection_name.as_ref().to_owned(),
            partition_names: Vec::new(),
            r#type: proto::ShowType::All as i32,
        }
    }

    /// Render the REST call.
    pub fn to_rest(&self, db_name: &str) -> Result<RestRequest> {
        Ok(RestRequest::new(
            Method::GET,
            "/api/v1/partitions",
            json!({
                "db_name": db_name,
                "collection_name": self.collection_name.as_ref(),
            }),
        ))
    }
}

/// Load partitions into query nodes.
#[derive(Debug, Clone)]
pub struct LoadPartitionsRequest {
    /// Owning collection.
    pub collection_name: Box<str>,
    /// Partitions to load.
    pub partition_names: Vec<String>,
    /// In-memory replicas, server default when zero.
    pub replica_number: i32,
}

impl LoadPartitionsRequest {
    /// Build with the server's default replica count.
    #[must_use]
    pub fn new(collection_name: impl Into<Box<str>>, partition_names: Vec<String>) -> Self {
        Self {
            collection_name: collection_name.into(),
            partition_names,
            replica_number: 0,
        }
    }

    /// Set the replica count.
    #[must_use]
    pub const fn replica_number(mut self, replica_number: i32) -> Self {
        self.replica_number = replica_number;
        self
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.collection_name, "collection name")?;
        if self.partition_names.is_empty() {
            return Err(Error::validation(
                "at least one partition name is required",
            ));
        }
        for name in &self.partition_names {
            require_non_empty(name, "partition name")?;
        }
        if self.replica_number < 0 {
            return Err(Error::validation("replicaNumber must not be negative"));
        }
        Ok(())
    }

    /// Render the gRPC message.
    #[must_use]
    pub fn to_grpc(&self, db_name: &str) -> proto::LoadPartitionsRequest {
        proto::LoadPartitionsRequest {
            base: Some(MsgBase::new(MsgType::LoadPartitions)),
            db_name: db_name.to_owned(),
            collection_name: self.collection_name.as_ref().to_owned(),
            partition_names: self.partition_names.clone(),
            replica_number: self.replica_number,
        }
    }

    /// Render the REST call.
    pub fn to_rest(&self, db_name: &str) -> Result<RestRequest> {
        Ok(RestRequest::new(
            Method::POST,
            "/api/v1/partitions/load",
            json!({
                "db_name": db_name,
                "collection_name": self.collection_name.as_ref(),
                "partition_names": self.partition_names,
                "replica_number": self.replica_number,
            }),
        ))
    }
}

/// Release partitions from query nodes.
#[derive(Debug, Clone)]
pub struct ReleasePartitionsRequest {
    /// Owning collection.
    pub collection_name: Box<str>,
    /// Partitions to release.
    pub partition_names: Vec<String>,
}

impl ReleasePartitionsRequest {
    /// Build the request.
    #[must_use]
    pub fn new(collection_name: impl Into<Box<str>>, partition_names: Vec<String>) -> Self {
        Self {
            collection_name: collection_name.into(),
            partition_names,
        }
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.collection_name, "collection name")?;
        if self.partition_names.is_empty() {
            return Err(Error::validation(
                "at least one partition name is required",
            ));
        }
        for name in &self.partition_names {
            require_non_empty(name, "partition name")?;
        }
        Ok(())
    }

    /// Render the gRPC message.
    #[must_use]
    pub fn to_grpc(&self, db_name: &str) -> proto::ReleasePartitionsRequest {
        proto::ReleasePartitionsRequest {
            base: Some(MsgBase::new(MsgType::ReleasePartitions)),
            db_name: db_name.to_owned(),
            collection_name: self.collection_name.as_ref().to_owned(),
            partition_names: self.partition_names.clone(),
        }
    }

    /// Render the REST call.
    pub fn to_rest(&self, db_name: &str) -> Result<RestRequest> {
        Ok(RestRequest::new(
            Method::DELETE,
            "/api/v1/partitions/load",
            json!({
                "db_name": db_name,
                "collection_name": self.collection_name.as_ref(),
                "partition_names": self.partition_names,
            }),
        ))
    }
}

/// Fetch partition statistics such as `row_count`.
#[derive(Debug, Clone)]
pub struct GetPartitionStatisticsRequest {
    /// Owning collection.
    pub collection_name: Box<str>,
    /// Partition to inspect.
    pub partition_name: Box<str>,
}

impl GetPartitionStatisticsRequest {
    /// Build the request.
    #[must_use]
    pub fn new(
        collection_name: impl Into<Box<str>>,
        partition_name: impl Into<Box<str>>,
    ) -> Self {
        Self {
            collection_name: collection_name.into(),
            partition_name: partition_name.into(),
        }
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.collection_name, "collection name")?;
        require_non_empty(&self.partition_name, "partition name")
    }

    /// Render the gRPC message.
    #[must_use]
    pub fn to_grpc(&self, db_name: &str) -> proto::GetPartitionStatisticsRequest {
        proto::GetPartitionStatisticsRequest {
            base: Some(MsgBase::new(MsgType::GetPartitionStatistics)),
            db_name: db_name.to_owned(),
            collection_name: self.collection_name.as_ref().to_owned(),
            partition_name: self.partition_name.as_ref().to_owned(),
        }
    }

    /// Render the REST call.
    pub fn to_rest(&self, db_name: &str) -> Result<RestRequest> {
        Ok(RestRequest::new(
            Method::GET,
            "/api/v1/partition/statistics",
            json!({
                "db_name": db_name,
                "collection_name": self.collection_name.as_ref(),
                "partition_name": self.partition_name.as_ref(),
            }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_partition_cannot_be_dropped() {
        let request = DropPartitionRequest::new("films", "_default");
        let error = request.validate().err();
        assert!(matches!(error, Some(Error::Validation(_))));
    }

    #[test]
    fn load_requires_at_least_one_partition() {
        let request = LoadPartitionsRequest::new("films", Vec::new());
        assert!(request.validate().is_err());
    }

    #[test]
    fn load_renders_replica_number() {
        let request =
            LoadPartitionsRequest::new("films", vec!["p1".to_owned()]).replica_number(2);
        assert!(request.validate().is_ok());
        let wire = request.to_grpc("default");
        assert_eq!(wire.replica_number, 2);
        match request.to_rest("default") {
            Ok(rest) => {
                assert_eq!(rest.path, "/api/v1/partitions/load");
                assert_eq!(rest.body["replica_number"], 2);
            }
            Err(error) => assert!(false, "rest render failed: {error}"),
        }
    }
}
