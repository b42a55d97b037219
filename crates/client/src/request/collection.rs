//! Collection lifecycle requests.

use super::{RestRequest, pairs_to_json, pairs_to_proto, require_non_empty};
use crate::error::{Error, Result};
use crate::schema::{CollectionSchema, ConsistencyLevel};
use bytes::BytesMut;
use milvus_client_proto::common::{MsgBase, MsgType};
use milvus_client_proto::milvus as proto;
use prost::Message as _;
use reqwest::Method;
use serde_json::json;

/// Create a collection from a validated schema.
#[derive(Debug, Clone)]
pub struct CreateCollectionRequest {
    /// The collection schema.
    pub schema: CollectionSchema,
    /// Number of shards, server default when zero.
    pub shards_num: i32,
    /// Default read consistency for the collection.
    pub consistency_level: ConsistencyLevel,
    /// Physical partitions backing a partition key, server default when
    /// zero.
    pub num_partitions: i64,
    /// Collection properties.
    pub properties: Vec<(String, String)>,
}

impl CreateCollectionRequest {
    /// Build with defaults: server-chosen shards, bounded consistency.
    #[must_use]
    pub fn new(schema: CollectionSchema) -> Self {
        Self {
            schema,
            shards_num: 0,
            consistency_level: ConsistencyLevel::default(),
            num_partitions: 0,
            properties: Vec::new(),
        }
    }

    /// Set the shard count.
    #[must_use]
    pub const fn shards_num(mut self, shards_num: i32) -> Self {
        self.shards_num = shards_num;
        self
    }

    /// Set the default consistency level.
    #[must_use]
    pub const fn consistency_level(mut self, level: ConsistencyLevel) -> Self {
        self.consistency_level = level;
        self
    }

    /// Set the physical partition count for a partition key.
    #[must_use]
    pub const fn num_partitions(mut self, num_partitions: i64) -> Self {
        self.num_partitions = num_partitions;
        self
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        self.schema.validate()?;
        if self.shards_num < 0 {
            return Err(Error::validation("shardsNum must not be negative"));
        }
        if self.num_partitions < 0 {
            return Err(Error::validation("numPartitions must not be negative"));
        }
        if self.num_partitions > 0
            && !self.schema.fields.iter().any(|field| field.is_partition_key)
        {
            return Err(Error::validation(
                "numPartitions requires a partition key field",
            ));
        }
        Ok(())
    }

    /// Render the gRPC message. The schema travels as serialized bytes.
    #[must_use]
    pub fn to_grpc(&self, db_name: &str) -> proto::CreateCollectionRequest {
        let schema = self.schema.to_proto();
        let mut buf = BytesMut::with_capacity(schema.encoded_len());
        // encoding into a sized BytesMut cannot fail
        let _ = schema.encode(&mut buf);
        proto::CreateCollectionRequest {
            base: Some(MsgBase::new(MsgType::CreateCollection)),
            db_name: db_name.to_owned(),
            collection_name: self.schema.name.as_ref().to_owned(),
            schema: buf.to_vec(),
            shards_num: self.shards_num,
            consistency_level: self.consistency_level.wire_value(),
            properties: pairs_to_proto(&self.properties),
            num_partitions: self.num_partitions,
        }
    }

    /// Render the REST call.
    pub fn to_rest(&self, db_name: &str) -> Result<RestRequest> {
        Ok(RestRequest::new(
            Method::POST,
            "/api/v1/collection",
            json!({
                "db_name": db_name,
                "collection_name": self.schema.name.as_ref(),
                "schema": self.schema.to_rest_json(),
                "shards_num": self.shards_num,
                "consistency_level": self.consistency_level.wire_value(),
                "num_partitions": self.num_partitions,
                "properties": pairs_to_json(&self.properties),
            }),
        ))
    }
}

/// Drop a collection and all of its data.
#[derive(Debug, Clone)]
pub struct DropCollectionRequest {
    /// The collection to drop.
    pub collection_name: Box<str>,
}

impl DropCollectionRequest {
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
    pub fn to_grpc(&self, db_name: &str) -> proto::DropCollectionRequest {
        proto::DropCollectionRequest {
            base: Some(MsgBase::new(MsgType::DropCollection)),
            db_name: db_name.to_owned(),
            collection_name: self.collection_name.as_ref().to_owned(),
        }
    }

    /// Render the REST call.
    pub fn to_rest(&self, db_name: &str) -> Result<RestRequest> {
        Ok(RestRequest::new(
            Method::DELETE,
            "/api/v1/collection",
            json!({
                "db_name": db_name,
                "collection_name": self.collection_name.as_ref(),
            }),
        ))
    }
}

/// Check whether a collection exists.
#[derive(Debug, Clone)]
pub struct HasCollectionRequest {
    /// The collection to look up.
    pub collection_name: Box<str>,
}

impl HasCollectionRequest {
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
    pub fn to_grpc(&self, db_name: &str) -> proto::HasCollectionRequest {
        proto::HasCollectionRequest {
            base: Some(MsgBase::new(MsgType::HasCollection)),
            db_name: db_name.to_owned(),
            collection_name: self.collection_name.as_ref().to_owned(),
            time_stamp: 0,
        }
    }

    /// Render the REST call.
    pub fn to_rest(&self, db_name: &str) -> Result<RestRequest> {
        Ok(RestRequest::new(
            Method::GET,
            "/api/v1/collection/existence",
            json!({
                "db_name": db_name,
                "collection_name": self.collection_name.as_ref(),
            }),
        ))
    }
}

/// Fetch a collection's schema and metadata.
#[derive(Debug, Clone)]
pub struct DescribeCollectionRequest {
    /// The collection to describe.
    pub collection_name: Box<str>,
}

impl DescribeCollectionRequest {
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
    pub fn to_grpc(&self, db_name: &str) -> proto::DescribeCollectionRequest {
        proto::DescribeCollectionRequest {
            base: Some(MsgBase::new(MsgType::DescribeCollection)),
            db_name: db_name.to_owned(),
            collection_name: self.collection_name.as_ref().to_owned(),
            collection_id: 0,
            time_stamp: 0,
        }
    }

    /// Render the REST call.
    pub fn to_rest(&self, db_name: &str) -> Result<RestRequest> {
        Ok(RestRequest::new(
            Method::GET,
            "/api/v1/collection",
            json!({
                "db_name": db_name,
                "collection_name": self.collection_name.as_ref(),
            }),
        ))
    }
}

/// Rename a collection. Served over gRPC only.
#[derive(Debug, Clone)]
pub struct RenameCollectionRequest {
    /// Current name.
    pub old_name: Box<str>,
    /// New name.
    pub new_name: Box<str>,
}

impl RenameCollectionRequest {
    /// Build the request.
    #[must_use]
    pub fn new(old_name: impl Into<Box<str>>, new_name: impl Into<Box<str>>) -> Self {
        Self {
            old_name: old_name.into(),
            new_name: new_name.into(),
        }
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.old_name, "old collection name")?;
        require_non_empty(&self.new_name, "new collection name")?;
        if self.old_name == self.new_name {
            return Err(Error::validation(
                "new collection name must differ from the old name",
            ));
        }
        Ok(())
    }

    /// Render the gRPC message.
    #[must_use]
    pub fn to_grpc(&self, db_name: &str) -> proto::RenameCollectionRequest {
        proto::RenameCollectionRequest {
            base: Some(MsgBase::new(MsgType::Undefined)),
            db_name: db_name.to_owned(),
            old_name: self.old_name.as_ref().to_owned(),
            new_name: self.new_name.as_ref().to_owned(),
        }
    }

    /// The facade does not expose renames.
    pub fn to_rest(&self, _db_name: &str) -> Result<RestRequest> {
        Err(Error::not_supported("collection.rename", "REST"))
    }
}

/// List collection names.
#[derive(Debug, Clone, Default)]
pub struct ShowCollectionsRequest {
    /// Restrict the listing to these names; empty lists everything.
    pub collection_names: Vec<String>,
}

impl ShowCollectionsRequest {
    /// List every collection in the database.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        for name in &self.collection_names {
            require_non_empty(name, "collection name")?;
        }
        Ok(())
    }

    /// Render the gRPC message.
    #[must_use]
    pub fn to_grpc(&self, db_name: &str) -> proto::ShowCollectionsRequest {
        proto::ShowCollectionsRequest {
            base: Some(MsgBase::new(MsgType::ShowCollections)),
            db_name: db_name.to_owned(),
            time_stamp: 0,
            r#type: proto::ShowType::All as i32,
            collection_names: self.collection_names.clone(),
        }
    }

    /// Render the REST call.
    pub fn to_rest(&self, db_name: &str) -> Result<RestRequest> {
        Ok(RestRequest::new(
            Method::GET,
            "/api/v1/collections",
            json!({
                "db_name": db_name,
                "collection_names": self.collection_names,
            }),
        ))
    }
}

/// Load a collection into query nodes.
#[derive(Debug, Clone)]
pub struct LoadCollectionRequest {
    /// The collection to load.
    pub collection_name: Box<str>,
    /// In-memory replicas, server default when zero.
    pub replica_number: i32,
}

impl LoadCollectionRequest {
    /// Build with the server's default replica count.
    #[must_use]
    pub fn new(collection_name: impl Into<Box<str>>) -> Self {
        Self {
            collection_name: collection_name.into(),
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
        if self.replica_number < 0 {
            return Err(Error::validation("replicaNumber must not be negative"));
        }
        Ok(())
    }

    /// Render the gRPC message.
    #[must_use]
    pub fn to_grpc(&self, db_name: &str) -> proto::LoadCollectionRequest {
        proto::LoadCollectionRequest {
            base: Some(MsgBase::new(MsgType::LoadCollection)),
            db_name: db_name.to_owned(),
            collection_name: self.collection_name.as_ref().to_owned(),
            replica_number: self.replica_number,
            resource_groups: Vec::new(),
            refresh: false,
        }
    }

    /// Render the REST call.
    pub fn to_rest(&self, db_name: &str) -> Result<RestRequest> {
        Ok(RestRequest::new(
            Method::POST,
            "/api/v1/collection/load",
            json!({
                "db_name": db_name,
                "collection_name": self.collection_name.as_ref(),
                "replica_number": self.replica_number,
            }),
        ))
    }
}

/// Release a collection from query nodes.
#[derive(Debug, Clone)]
pub struct ReleaseCollectionRequest {
    /// The collection to release.
    pub collection_name: Box<str>,
}

impl ReleaseCollectionRequest {
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
    pub fn to_grpc(&self, db_name: &str) -> proto::ReleaseCollectionRequest {
        proto::ReleaseCollectionRequest {
            base: Some(MsgBase::new(MsgType::ReleaseCollection)),
            db_name: db_name.to_owned(),
            collection_name: self.collection_name.as_ref().to_owned(),
        }
    }

    /// Render the REST call.
    pub fn to_rest(&self, db_name: &str) -> Result<RestRequest> {
        Ok(RestRequest::new(
            Method::DELETE,
            "/api/v1/collection/load",
            json!({
                "db_name": db_name,
                "collection_name": self.collection_name.as_ref(),
            }),
        ))
    }
}

/// Report load progress as a percentage.
#[derive(Debug, Clone)]
pub struct GetLoadingProgressRequest {
    /// The collection being loaded.
    pub collection_name: Box<str>,
    /// Restrict to these partitions; empty covers the whole collection.
    pub partition_names: Vec<String>,
}

impl GetLoadingProgressRequest {
    /// Progress of a whole-collection load.
    #[must_use]
    pub fn new(collection_name: impl Into<Box<str>>) -> Self {
        Self {
            collection_name: collection_name.into(),
            partition_names: Vec::new(),
        }
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.collection_name, "collection name")?;
        for name in &self.partition_names {
            require_non_empty(name, "partition name")?;
        }
        Ok(())
    }

    /// Render the gRPC message.
    #[must_use]
    pub fn to_grpc(&self, db_name: &str) -> proto::GetLoadingProgressRequest {
        proto::GetLoadingProgressRequest {
            base: Some(MsgBase::new(MsgType::Undefined)),
            collection_name: self.collection_name.as_ref().to_owned(),
            partition_names: self.partition_names.clone(),
            db_name: db_name.to_owned(),
        }
    }

    /// Render the REST call.
    pub fn to_rest(&self, db_name: &str) -> Result<RestRequest> {
        Ok(RestRequest::new(
            Method::GET,
            "/api/v1/collection/load/progress",
            json!({
                "db_name": db_name,
                "collection_name": self.collection_name.as_ref(),
                "partition_names": self.partition_names,
            }),
        ))
    }
}

/// Fetch collection statistics such as `row_count`.
#[derive(Debug, Clone)]
pub struct GetCollectionStatisticsRequest {
    /// The collection to inspect.
    pub collection_name: Box<str>,
}

impl GetCollectionStatisticsRequest {
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
    pub fn to_grpc(&self, db_name: &str) -> proto::GetCollectionStatisticsRequest {
        proto::GetCollectionStatisticsRequest {
            base: Some(MsgBase::new(MsgType::GetCollectionStatistics)),
            db_name: db_name.to_owned(),
            collection_name: self.collection_name.as_ref().to_owned(),
        }
    }

    /// Render the REST call.
    pub fn to_rest(&self, db_name: &str) -> Result<RestRequest> {
        Ok(RestRequest::new(
            Method::GET,
            "/api/v1/collection/statistics",
            json!({
                "db_name": db_name,
                "collection_name": self.collection_name.as_ref(),
            }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{DataType, FieldSchema};

    fn film_schema() -> CollectionSchema {
        CollectionSchema::new("films")
            .field(FieldSchema::new("film_id", DataType::Int64).primary_key())
            .field(FieldSchema::new("embedding", DataType::FloatVector).dim(64))
    }

    #[test]
    fn create_serializes_schema_bytes_for_grpc() {
        let request = CreateCollectionRequest::new(film_schema()).shards_num(2);
        assert!(request.validate().is_ok());
        let wire = request.to_grpc("default");
        assert_eq!(wire.collection_name, "films");
        assert_eq!(wire.shards_num, 2);
        match milvus_client_proto::schema::CollectionSchema::decode(wire.schema.as_slice()) {
            Ok(decoded) => assert_eq!(decoded.fields.len(), 2),
            Err(error) => assert!(false, "schema bytes did not decode: {error}"),
        }
    }

    #[test]
    fn create_rejects_num_partitions_without_partition_key() {
        let request = CreateCollectionRequest::new(film_schema()).num_partitions(16);
        assert!(request.validate().is_err());
    }

    #[test]
    fn rename_is_grpc_only() {
        let request = RenameCollectionRequest::new("films", "movies");
        assert!(request.validate().is_ok());
        let error = request.to_rest("default").err();
        assert!(matches!(error, Some(Error::NotSupported { .. })));
    }

    #[test]
    fn rename_rejects_identical_names() {
        let request = RenameCollectionRequest::new("films", "films");
        assert!(request.validate().is_err());
    }

    #[test]
    fn has_collection_renders_both_transports() {
        let request = HasCollectionRequest::new("films");
        let wire = request.to_grpc("default");
        assert_eq!(wire.collection_name, "films");
        match request.to_rest("default") {
            Ok(rest) => {
                assert_eq!(rest.method, Method::GET);
                assert_eq!(rest.path, "/api/v1/collection/existence");
                assert_eq!(rest.body["collection_name"], "films");
            }
            Err(error) => assert!(false, "rest render failed: {error}"),
        }
    }

    #[test]
    fn empty_collection_name_fails_validation() {
        assert!(DropCollectionRequest::new("  ").validate().is_err());
        assert!(LoadCollectionRequest::new("").validate().is_err());
    }
}
