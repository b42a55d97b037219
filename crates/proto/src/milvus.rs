// Vendored from milvus.proto (tonic-build output style), trimmed to the
// RPC surface this SDK exposes.
#![allow(missing_docs)]

use crate::common::{KeyValuePair, MsgBase, Status};
use crate::schema::{FieldData, Ids, LongArray, SearchResultData, VectorField};

// ─────────────────────────────────────────────────────────────────────────────
// Collections
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateCollectionRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    /// Serialized `schema.CollectionSchema`.
    #[prost(bytes = "vec", tag = "4")]
    pub schema: ::prost::alloc::vec::Vec<u8>,
    #[prost(int32, tag = "5")]
    pub shards_num: i32,
    #[prost(enumeration = "crate::common::ConsistencyLevel", tag = "6")]
    pub consistency_level: i32,
    #[prost(message, repeated, tag = "7")]
    pub properties: ::prost::alloc::vec::Vec<KeyValuePair>,
    #[prost(int64, tag = "8")]
    pub num_partitions: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DropCollectionRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HasCollectionRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(uint64, tag = "4")]
    pub time_stamp: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BoolResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(bool, tag = "2")]
    pub value: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DescribeCollectionRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(int64, tag = "4")]
    pub collection_id: i64,
    #[prost(uint64, tag = "5")]
    pub time_stamp: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DescribeCollectionResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(message, optional, tag = "2")]
    pub schema: ::core::option::Option<crate::schema::CollectionSchema>,
    #[prost(int64, tag = "3")]
    pub collection_id: i64,
    #[prost(uint64, tag = "6")]
    pub created_timestamp: u64,
    #[prost(uint64, tag = "7")]
    pub created_utc_timestamp: u64,
    #[prost(int32, tag = "8")]
    pub shards_num: i32,
    #[prost(string, repeated, tag = "9")]
    pub aliases: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(enumeration = "crate::common::ConsistencyLevel", tag = "11")]
    pub consistency_level: i32,
    #[prost(string, tag = "12")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "13")]
    pub properties: ::prost::alloc::vec::Vec<KeyValuePair>,
    #[prost(string, tag = "14")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(int64, tag = "15")]
    pub num_partitions: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ShowCollectionsRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(uint64, tag = "3")]
    pub time_stamp: u64,
    #[prost(enumeration = "ShowType", tag = "4")]
    pub r#type: i32,
    #[prost(string, repeated, tag = "5")]
    pub collection_names: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ShowCollectionsResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(string, repeated, tag = "2")]
    pub collection_names: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(int64, repeated, tag = "3")]
    pub collection_ids: ::prost::alloc::vec::Vec<i64>,
    #[prost(uint64, repeated, tag = "4")]
    pub created_timestamps: ::prost::alloc::vec::Vec<u64>,
    #[prost(uint64, repeated, tag = "5")]
    pub created_utc_timestamps: ::prost::alloc::vec::Vec<u64>,
    #[prost(int64, repeated, tag = "6")]
    pub inmemory_percentages: ::prost::alloc::vec::Vec<i64>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RenameCollectionRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub old_name: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub new_name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LoadCollectionRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(int32, tag = "4")]
    pub replica_number: i32,
    #[prost(string, repeated, tag = "5")]
    pub resource_groups: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(bool, tag = "6")]
    pub refresh: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReleaseCollectionRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLoadingProgressRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "3")]
    pub partition_names: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, tag = "4")]
    pub db_name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLoadingProgressResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(int64, tag = "2")]
    pub progress: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetCollectionStatisticsRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetCollectionStatisticsResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(message, repeated, tag = "2")]
    pub stats: ::prost::alloc::vec::Vec<KeyValuePair>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ShowType {
    All = 0,
    InMemory = 1,
}

// ─────────────────────────────────────────────────────────────────────────────
// Partitions
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreatePartitionRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub partition_name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DropPartitionRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub partition_name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HasPartitionRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub partition_name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ShowPartitionsRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "5")]
    pub partition_names: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(enumeration = "ShowType", tag = "6")]
    pub r#type: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ShowPartitionsResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(string, repeated, tag = "2")]
    pub partition_names: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(int64, repeated, tag = "3")]
    pub partition_ids: ::prost::alloc::vec::Vec<i64>,
    #[prost(uint64, repeated, tag = "4")]
    pub created_timestamps: ::prost::alloc::vec::Vec<u64>,
    #[prost(uint64, repeated, tag = "5")]
    pub created_utc_timestamps: ::prost::alloc::vec::Vec<u64>,
    #[prost(int64, repeated, tag = "6")]
    pub inmemory_percentages: ::prost::alloc::vec::Vec<i64>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LoadPartitionsRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "4")]
    pub partition_names: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(int32, tag = "5")]
    pub replica_number: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReleasePartitionsRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "4")]
    pub partition_names: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetPartitionStatisticsRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub partition_name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetPartitionStatisticsResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(message, repeated, tag = "2")]
    pub stats: ::prost::alloc::vec::Vec<KeyValuePair>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Aliases
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateAliasRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub alias: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DropAliasRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub alias: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AlterAliasRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub alias: ::prost::alloc::string::String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Indexes
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateIndexRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub field_name: ::prost::alloc::string::String,
    /// `index_type`, `metric_type` and build params as key/value pairs.
    #[prost(message, repeated, tag = "5")]
    pub extra_params: ::prost::alloc::vec::Vec<KeyValuePair>,
    #[prost(string, tag = "6")]
    pub index_name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DescribeIndexRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub field_name: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub index_name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IndexDescription {
    #[prost(string, tag = "1")]
    pub index_name: ::prost::alloc::string::String,
    #[prost(int64, tag = "2")]
    pub index_id: i64,
    #[prost(message, repeated, tag = "3")]
    pub params: ::prost::alloc::vec::Vec<KeyValuePair>,
    #[prost(string, tag = "4")]
    pub field_name: ::prost::alloc::string::String,
    #[prost(int64, tag = "5")]
    pub indexed_rows: i64,
    #[prost(int64, tag = "6")]
    pub total_rows: i64,
    #[prost(enumeration = "crate::common::IndexState", tag = "7")]
    pub state: i32,
    #[prost(string, tag = "8")]
    pub index_state_fail_reason: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DescribeIndexResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(message, repeated, tag = "2")]
    pub index_descriptions: ::prost::alloc::vec::Vec<IndexDescription>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DropIndexRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub field_name: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub index_name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetIndexStateRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub field_name: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub index_name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetIndexStateResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(enumeration = "crate::common::IndexState", tag = "2")]
    pub state: i32,
    #[prost(string, tag = "3")]
    pub fail_reason: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetIndexBuildProgressRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub field_name: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub index_name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetIndexBuildProgressResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(int64, tag = "2")]
    pub indexed_rows: i64,
    #[prost(int64, tag = "3")]
    pub total_rows: i64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Data
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InsertRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub partition_name: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "5")]
    pub fields_data: ::prost::alloc::vec::Vec<FieldData>,
    #[prost(uint32, repeated, tag = "6")]
    pub hash_keys: ::prost::alloc::vec::Vec<u32>,
    #[prost(uint32, tag = "7")]
    pub num_rows: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MutationResult {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(message, optional, tag = "2")]
    pub ids: ::core::option::Option<Ids>,
    #[prost(uint32, repeated, tag = "3")]
    pub succ_index: ::prost::alloc::vec::Vec<u32>,
    #[prost(uint32, repeated, tag = "4")]
    pub err_index: ::prost::alloc::vec::Vec<u32>,
    #[prost(bool, tag = "5")]
    pub acknowledged: bool,
    #[prost(int64, tag = "6")]
    pub insert_cnt: i64,
    #[prost(int64, tag = "7")]
    pub delete_cnt: i64,
    #[prost(int64, tag = "8")]
    pub upsert_cnt: i64,
    #[prost(uint64, tag = "9")]
    pub timestamp: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub partition_name: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub expr: ::prost::alloc::string::String,
    #[prost(uint32, repeated, tag = "6")]
    pub hash_keys: ::prost::alloc::vec::Vec<u32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FlushRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "3")]
    pub collection_names: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FlushResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(map = "string, message", tag = "3")]
    pub coll_seg_ids: ::std::collections::HashMap<::prost::alloc::string::String, LongArray>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "4")]
    pub partition_names: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, tag = "5")]
    pub dsl: ::prost::alloc::string::String,
    /// Serialized `common.PlaceholderGroup` carrying the query vectors.
    #[prost(bytes = "vec", tag = "6")]
    pub placeholder_group: ::prost::alloc::vec::Vec<u8>,
    #[prost(enumeration = "crate::common::DslType", tag = "7")]
    pub dsl_type: i32,
    #[prost(string, repeated, tag = "8")]
    pub output_fields: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(message, repeated, tag = "9")]
    pub search_params: ::prost::alloc::vec::Vec<KeyValuePair>,
    #[prost(uint64, tag = "10")]
    pub travel_timestamp: u64,
    #[prost(uint64, tag = "11")]
    pub guarantee_timestamp: u64,
    #[prost(int64, tag = "12")]
    pub nq: i64,
    #[prost(enumeration = "crate::common::ConsistencyLevel", tag = "14")]
    pub consistency_level: i32,
    #[prost(bool, tag = "15")]
    pub use_default_consistency: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchResults {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(message, optional, tag = "2")]
    pub results: ::core::option::Option<SearchResultData>,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub expr: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "5")]
    pub output_fields: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, repeated, tag = "6")]
    pub partition_names: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(uint64, tag = "7")]
    pub travel_timestamp: u64,
    #[prost(uint64, tag = "8")]
    pub guarantee_timestamp: u64,
    #[prost(message, repeated, tag = "9")]
    pub query_params: ::prost::alloc::vec::Vec<KeyValuePair>,
    #[prost(enumeration = "crate::common::ConsistencyLevel", tag = "11")]
    pub consistency_level: i32,
    #[prost(bool, tag = "12")]
    pub use_default_consistency: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryResults {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(message, repeated, tag = "2")]
    pub fields_data: ::prost::alloc::vec::Vec<FieldData>,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "4")]
    pub output_fields: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VectorIds {
    #[prost(string, tag = "1")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "2")]
    pub partition_names: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, tag = "3")]
    pub field_name: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "4")]
    pub id_array: ::core::option::Option<Ids>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VectorsArray {
    #[prost(oneof = "vectors_array::Array", tags = "1, 2")]
    pub array: ::core::option::Option<vectors_array::Array>,
}

/// Nested message and enum types in `VectorsArray`.
pub mod vectors_array {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Array {
        #[prost(message, tag = "1")]
        IdArray(super::VectorIds),
        #[prost(message, tag = "2")]
        DataArray(super::VectorField),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CalcDistanceRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(message, optional, tag = "2")]
    pub op_left: ::core::option::Option<VectorsArray>,
    #[prost(message, optional, tag = "3")]
    pub op_right: ::core::option::Option<VectorsArray>,
    #[prost(message, repeated, tag = "4")]
    pub params: ::prost::alloc::vec::Vec<KeyValuePair>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CalcDistanceResults {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(oneof = "calc_distance_results::Array", tags = "2, 3")]
    pub array: ::core::option::Option<calc_distance_results::Array>,
}

/// Nested message and enum types in `CalcDistanceResults`.
pub mod calc_distance_results {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Array {
        #[prost(message, tag = "2")]
        IntDist(super::super::schema::IntArray),
        #[prost(message, tag = "3")]
        FloatDist(super::super::schema::FloatArray),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Compaction
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ManualCompactionRequest {
    #[prost(int64, tag = "1")]
    pub collection_id: i64,
    #[prost(uint64, tag = "2")]
    pub timetravel: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ManualCompactionResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(int64, tag = "2")]
    pub compaction_id: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetCompactionStateRequest {
    #[prost(int64, tag = "1")]
    pub compaction_id: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetCompactionStateResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(enumeration = "crate::common::CompactionState", tag = "2")]
    pub state: i32,
    #[prost(int64, tag = "3")]
    pub executing_plan_no: i64,
    #[prost(int64, tag = "4")]
    pub timeout_plan_no: i64,
    #[prost(int64, tag = "5")]
    pub completed_plan_no: i64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Credentials
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateCredentialRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub username: ::prost::alloc::string::String,
    /// Base64-encoded password.
    #[prost(string, tag = "3")]
    pub password: ::prost::alloc::string::String,
    #[prost(uint64, tag = "4")]
    pub created_utc_timestamps: u64,
    #[prost(uint64, tag = "5")]
    pub modified_utc_timestamps: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateCredentialRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub username: ::prost::alloc::string::String,
    /// Base64-encoded passwords.
    #[prost(string, tag = "3")]
    pub old_password: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub new_password: ::prost::alloc::string::String,
    #[prost(uint64, tag = "5")]
    pub created_utc_timestamps: u64,
    #[prost(uint64, tag = "6")]
    pub modified_utc_timestamps: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteCredentialRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub username: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListCredUsersRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListCredUsersResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(string, repeated, tag = "2")]
    pub usernames: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// RBAC
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RoleEntity {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UserEntity {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ObjectEntity {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PrivilegeEntity {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GrantorEntity {
    #[prost(message, optional, tag = "1")]
    pub user: ::core::option::Option<UserEntity>,
    #[prost(message, optional, tag = "2")]
    pub privilege: ::core::option::Option<PrivilegeEntity>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GrantEntity {
    #[prost(message, optional, tag = "1")]
    pub role: ::core::option::Option<RoleEntity>,
    #[prost(message, optional, tag = "2")]
    pub object: ::core::option::Option<ObjectEntity>,
    #[prost(string, tag = "3")]
    pub object_name: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "4")]
    pub grantor: ::core::option::Option<GrantorEntity>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateRoleRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(message, optional, tag = "2")]
    pub entity: ::core::option::Option<RoleEntity>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DropRoleRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub role_name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OperateUserRoleRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub username: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub role_name: ::prost::alloc::string::String,
    #[prost(enumeration = "OperateUserRoleType", tag = "4")]
    pub r#type: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SelectRoleRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(message, optional, tag = "2")]
    pub role: ::core::option::Option<RoleEntity>,
    #[prost(bool, tag = "3")]
    pub include_user_info: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RoleResult {
    #[prost(message, optional, tag = "1")]
    pub role: ::core::option::Option<RoleEntity>,
    #[prost(message, repeated, tag = "2")]
    pub users: ::prost::alloc::vec::Vec<UserEntity>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SelectRoleResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(message, repeated, tag = "2")]
    pub results: ::prost::alloc::vec::Vec<RoleResult>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SelectUserRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(message, optional, tag = "2")]
    pub user: ::core::option::Option<UserEntity>,
    #[prost(bool, tag = "3")]
    pub include_role_info: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UserResult {
    #[prost(message, optional, tag = "1")]
    pub user: ::core::option::Option<UserEntity>,
    #[prost(message, repeated, tag = "2")]
    pub roles: ::prost::alloc::vec::Vec<RoleEntity>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SelectUserResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(message, repeated, tag = "2")]
    pub results: ::prost::alloc::vec::Vec<UserResult>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OperatePrivilegeRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(message, optional, tag = "2")]
    pub entity: ::core::option::Option<GrantEntity>,
    #[prost(enumeration = "OperatePrivilegeType", tag = "3")]
    pub r#type: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SelectGrantRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(message, optional, tag = "2")]
    pub entity: ::core::option::Option<GrantEntity>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SelectGrantResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(message, repeated, tag = "2")]
    pub entities: ::prost::alloc::vec::Vec<GrantEntity>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum OperateUserRoleType {
    AddUserToRole = 0,
    RemoveUserFromRole = 1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum OperatePrivilegeType {
    Grant = 0,
    Revoke = 1,
}

// ─────────────────────────────────────────────────────────────────────────────
// Databases and utility
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateDatabaseRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DropDatabaseRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListDatabasesRequest {
    #[prost(message, optional, tag = "1")]
    pub base: ::core::option::Option<MsgBase>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListDatabasesResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(string, repeated, tag = "2")]
    pub db_names: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(uint64, repeated, tag = "3")]
    pub created_timestamp: ::prost::alloc::vec::Vec<u64>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetVersionRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetVersionResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(string, tag = "2")]
    pub version: ::prost::alloc::string::String,
}

/// Generated client implementations.
pub mod milvus_service_client {
    #![allow(
        unused_variables,
        dead_code,
        missing_docs,
        clippy::wildcard_imports,
        clippy::let_unit_value
    )]
    use tonic::codegen::http::Uri;
    use tonic::codegen::*;

    #[derive(Debug, Clone)]
    pub struct MilvusServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }

    impl MilvusServiceClient<tonic::transport::Channel> {
        /// Attempt to create a new client by connecting to a given endpoint.
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }

    impl<T> MilvusServiceClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }

        pub fn with_origin(inner: T, origin: Uri) -> Self {
            let inner = tonic::client::Grpc::with_origin(inner, origin);
            Self { inner }
        }

        pub fn with_interceptor<F>(
            inner: T,
            interceptor: F,
        ) -> MilvusServiceClient<InterceptedService<T, F>>
        where
            F: tonic::service::Interceptor,
            T::ResponseBody: Default,
            T: tonic::codegen::Service<
                http::Request<tonic::body::BoxBody>,
                Response = http::Response<
                    <T as tonic::client::GrpcService<tonic::body::BoxBody>>::ResponseBody,
                >,
            >,
            <T as tonic::codegen::Service<http::Request<tonic::body::BoxBody>>>::Error:
                Into<StdError> + Send + Sync,
        {
            MilvusServiceClient::new(InterceptedService::new(inner, interceptor))
        }

        /// Compress requests with the given encoding.
        #[must_use]
        pub fn send_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.inner = self.inner.send_compressed(encoding);
            self
        }

        /// Enable decompressing responses.
        #[must_use]
        pub fn accept_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.inner = self.inner.accept_compressed(encoding);
            self
        }

        pub async fn create_collection(
            &mut self,
            request: impl tonic::IntoRequest<super::CreateCollectionRequest>,
        ) -> std::result::Result<tonic::Response<super::super::common::Status>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/CreateCollection",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "CreateCollection",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn drop_collection(
            &mut self,
            request: impl tonic::IntoRequest<super::DropCollectionRequest>,
        ) -> std::result::Result<tonic::Response<super::super::common::Status>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/DropCollection",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "DropCollection",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn has_collection(
            &mut self,
            request: impl tonic::IntoRequest<super::HasCollectionRequest>,
        ) -> std::result::Result<tonic::Response<super::BoolResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/HasCollection",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "HasCollection",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn describe_collection(
            &mut self,
            request: impl tonic::IntoRequest<super::DescribeCollectionRequest>,
        ) -> std::result::Result<tonic::Response<super::DescribeCollectionResponse>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/DescribeCollection",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "DescribeCollection",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn show_collections(
            &mut self,
            request: impl tonic::IntoRequest<super::ShowCollectionsRequest>,
        ) -> std::result::Result<tonic::Response<super::ShowCollectionsResponse>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/ShowCollections",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "ShowCollections",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn rename_collection(
            &mut self,
            request: impl tonic::IntoRequest<super::RenameCollectionRequest>,
        ) -> std::result::Result<tonic::Response<super::super::common::Status>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/RenameCollection",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "RenameCollection",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn load_collection(
            &mut self,
            request: impl tonic::IntoRequest<super::LoadCollectionRequest>,
        ) -> std::result::Result<tonic::Response<super::super::common::Status>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/LoadCollection",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "LoadCollection",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn release_collection(
            &mut self,
            request: impl tonic::IntoRequest<super::ReleaseCollectionRequest>,
        ) -> std::result::Result<tonic::Response<super::super::common::Status>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/ReleaseCollection",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "ReleaseCollection",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn get_loading_progress(
            &mut self,
            request: impl tonic::IntoRequest<super::GetLoadingProgressRequest>,
        ) -> std::result::Result<tonic::Response<super::GetLoadingProgressResponse>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/GetLoadingProgress",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "GetLoadingProgress",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn get_collection_statistics(
            &mut self,
            request: impl tonic::IntoRequest<super::GetCollectionStatisticsRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GetCollectionStatisticsResponse>,
            tonic::Status,
        > {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/GetCollectionStatistics",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "GetCollectionStatistics",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn create_partition(
            &mut self,
            request: impl tonic::IntoRequest<super::CreatePartitionRequest>,
        ) -> std::result::Result<tonic::Response<super::super::common::Status>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/CreatePartition",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "CreatePartition",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn drop_partition(
            &mut self,
            request: impl tonic::IntoRequest<super::DropPartitionRequest>,
        ) -> std::result::Result<tonic::Response<super::super::common::Status>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/DropPartition",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "DropPartition",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn has_partition(
            &mut self,
            request: impl tonic::IntoRequest<super::HasPartitionRequest>,
        ) -> std::result::Result<tonic::Response<super::BoolResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/HasPartition",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "HasPartition",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn show_partitions(
            &mut self,
            request: impl tonic::IntoRequest<super::ShowPartitionsRequest>,
        ) -> std::result::Result<tonic::Response<super::ShowPartitionsResponse>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/ShowPartitions",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "ShowPartitions",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn load_partitions(
            &mut self,
            request: impl tonic::IntoRequest<super::LoadPartitionsRequest>,
        ) -> std::result::Result<tonic::Response<super::super::common::Status>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/LoadPartitions",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "LoadPartitions",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn release_partitions(
            &mut self,
            request: impl tonic::IntoRequest<super::ReleasePartitionsRequest>,
        ) -> std::result::Result<tonic::Response<super::super::common::Status>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/ReleasePartitions",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "ReleasePartitions",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn get_partition_statistics(
            &mut self,
            request: impl tonic::IntoRequest<super::GetPartitionStatisticsRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GetPartitionStatisticsResponse>,
            tonic::Status,
        > {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/GetPartitionStatistics",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "GetPartitionStatistics",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn create_alias(
            &mut self,
            request: impl tonic::IntoRequest<super::CreateAliasRequest>,
        ) -> std::result::Result<tonic::Response<super::super::common::Status>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/CreateAlias",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "CreateAlias",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn drop_alias(
            &mut self,
            request: impl tonic::IntoRequest<super::DropAliasRequest>,
        ) -> std::result::Result<tonic::Response<super::super::common::Status>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/DropAlias",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "DropAlias",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn alter_alias(
            &mut self,
            request: impl tonic::IntoRequest<super::AlterAliasRequest>,
        ) -> std::result::Result<tonic::Response<super::super::common::Status>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/AlterAlias",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "AlterAlias",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn create_index(
            &mut self,
            request: impl tonic::IntoRequest<super::CreateIndexRequest>,
        ) -> std::result::Result<tonic::Response<super::super::common::Status>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/CreateIndex",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "CreateIndex",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn describe_index(
            &mut self,
            request: impl tonic::IntoRequest<super::DescribeIndexRequest>,
        ) -> std::result::Result<tonic::Response<super::DescribeIndexResponse>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/DescribeIndex",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "DescribeIndex",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn drop_index(
            &mut self,
            request: impl tonic::IntoRequest<super::DropIndexRequest>,
        ) -> std::result::Result<tonic::Response<super::super::common::Status>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/DropIndex",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "DropIndex",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn get_index_state(
            &mut self,
            request: impl tonic::IntoRequest<super::GetIndexStateRequest>,
        ) -> std::result::Result<tonic::Response<super::GetIndexStateResponse>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/GetIndexState",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "GetIndexState",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn get_index_build_progress(
            &mut self,
            request: impl tonic::IntoRequest<super::GetIndexBuildProgressRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GetIndexBuildProgressResponse>,
            tonic::Status,
        > {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/GetIndexBuildProgress",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "GetIndexBuildProgress",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn insert(
            &mut self,
            request: impl tonic::IntoRequest<super::InsertRequest>,
        ) -> std::result::Result<tonic::Response<super::MutationResult>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                http::uri::PathAndQuery::from_static("/milvus.proto.milvus.MilvusService/Insert");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("milvus.proto.milvus.MilvusService", "Insert"));
            self.inner.unary(req, path, codec).await
        }

        pub async fn delete(
            &mut self,
            request: impl tonic::IntoRequest<super::DeleteRequest>,
        ) -> std::result::Result<tonic::Response<super::MutationResult>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                http::uri::PathAndQuery::from_static("/milvus.proto.milvus.MilvusService/Delete");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("milvus.proto.milvus.MilvusService", "Delete"));
            self.inner.unary(req, path, codec).await
        }

        pub async fn flush(
            &mut self,
            request: impl tonic::IntoRequest<super::FlushRequest>,
        ) -> std::result::Result<tonic::Response<super::FlushResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                http::uri::PathAndQuery::from_static("/milvus.proto.milvus.MilvusService/Flush");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("milvus.proto.milvus.MilvusService", "Flush"));
            self.inner.unary(req, path, codec).await
        }

        pub async fn search(
            &mut self,
            request: impl tonic::IntoRequest<super::SearchRequest>,
        ) -> std::result::Result<tonic::Response<super::SearchResults>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                http::uri::PathAndQuery::from_static("/milvus.proto.milvus.MilvusService/Search");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("milvus.proto.milvus.MilvusService", "Search"));
            self.inner.unary(req, path, codec).await
        }

        pub async fn query(
            &mut self,
            request: impl tonic::IntoRequest<super::QueryRequest>,
        ) -> std::result::Result<tonic::Response<super::QueryResults>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                http::uri::PathAndQuery::from_static("/milvus.proto.milvus.MilvusService/Query");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("milvus.proto.milvus.MilvusService", "Query"));
            self.inner.unary(req, path, codec).await
        }

        pub async fn calc_distance(
            &mut self,
            request: impl tonic::IntoRequest<super::CalcDistanceRequest>,
        ) -> std::result::Result<tonic::Response<super::CalcDistanceResults>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/CalcDistance",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "CalcDistance",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn manual_compaction(
            &mut self,
            request: impl tonic::IntoRequest<super::ManualCompactionRequest>,
        ) -> std::result::Result<tonic::Response<super::ManualCompactionResponse>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/ManualCompaction",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "ManualCompaction",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn get_compaction_state(
            &mut self,
            request: impl tonic::IntoRequest<super::GetCompactionStateRequest>,
        ) -> std::result::Result<tonic::Response<super::GetCompactionStateResponse>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/GetCompactionState",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "GetCompactionState",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn create_credential(
            &mut self,
            request: impl tonic::IntoRequest<super::CreateCredentialRequest>,
        ) -> std::result::Result<tonic::Response<super::super::common::Status>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/CreateCredential",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "CreateCredential",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn update_credential(
            &mut self,
            request: impl tonic::IntoRequest<super::UpdateCredentialRequest>,
        ) -> std::result::Result<tonic::Response<super::super::common::Status>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/UpdateCredential",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "UpdateCredential",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn delete_credential(
            &mut self,
            request: impl tonic::IntoRequest<super::DeleteCredentialRequest>,
        ) -> std::result::Result<tonic::Response<super::super::common::Status>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/DeleteCredential",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "DeleteCredential",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn list_cred_users(
            &mut self,
            request: impl tonic::IntoRequest<super::ListCredUsersRequest>,
        ) -> std::result::Result<tonic::Response<super::ListCredUsersResponse>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/ListCredUsers",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "ListCredUsers",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn create_role(
            &mut self,
            request: impl tonic::IntoRequest<super::CreateRoleRequest>,
        ) -> std::result::Result<tonic::Response<super::super::common::Status>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/CreateRole",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "CreateRole",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn drop_role(
            &mut self,
            request: impl tonic::IntoRequest<super::DropRoleRequest>,
        ) -> std::result::Result<tonic::Response<super::super::common::Status>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/DropRole",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "DropRole",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn operate_user_role(
            &mut self,
            request: impl tonic::IntoRequest<super::OperateUserRoleRequest>,
        ) -> std::result::Result<tonic::Response<super::super::common::Status>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/OperateUserRole",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "OperateUserRole",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn select_role(
            &mut self,
            request: impl tonic::IntoRequest<super::SelectRoleRequest>,
        ) -> std::result::Result<tonic::Response<super::SelectRoleResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/SelectRole",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "SelectRole",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn select_user(
            &mut self,
            request: impl tonic::IntoRequest<super::SelectUserRequest>,
        ) -> std::result::Result<tonic::Response<super::SelectUserResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/SelectUser",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "SelectUser",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn operate_privilege(
            &mut self,
            request: impl tonic::IntoRequest<super::OperatePrivilegeRequest>,
        ) -> std::result::Result<tonic::Response<super::super::common::Status>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/OperatePrivilege",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "OperatePrivilege",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn select_grant(
            &mut self,
            request: impl tonic::IntoRequest<super::SelectGrantRequest>,
        ) -> std::result::Result<tonic::Response<super::SelectGrantResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/SelectGrant",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "SelectGrant",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn create_database(
            &mut self,
            request: impl tonic::IntoRequest<super::CreateDatabaseRequest>,
        ) -> std::result::Result<tonic::Response<super::super::common::Status>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/CreateDatabase",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "CreateDatabase",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn drop_database(
            &mut self,
            request: impl tonic::IntoRequest<super::DropDatabaseRequest>,
        ) -> std::result::Result<tonic::Response<super::super::common::Status>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/DropDatabase",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "DropDatabase",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn list_databases(
            &mut self,
            request: impl tonic::IntoRequest<super::ListDatabasesRequest>,
        ) -> std::result::Result<tonic::Response<super::ListDatabasesResponse>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/ListDatabases",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "ListDatabases",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn get_version(
            &mut self,
            request: impl tonic::IntoRequest<super::GetVersionRequest>,
        ) -> std::result::Result<tonic::Response<super::GetVersionResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/milvus.proto.milvus.MilvusService/GetVersion",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "milvus.proto.milvus.MilvusService",
                "GetVersion",
            ));
            self.inner.unary(req, path, codec).await
        }
    }
}
